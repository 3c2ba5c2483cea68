use sdl2::controller::GameController;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::video::FullscreenType;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

use emulair::config::{load_config, user_config_path};
use emulair::input::{KeyEventType, PointerEvent, PointerKind};
use emulair::services::GamesService;
use emulair::style::load_style;
use emulair::ui::{render_frame, UIColors};
use emulair::App;

const WINDOWED_SIZE: (u32, u32) = (1280, 720);
const MOUSE_POINTER_ID: u64 = 0;

fn find_font(configured: Option<String>) -> Option<String> {
    // config.font_path -> FONT_PATH env -> common system fonts
    configured
        .or_else(|| std::env::var("FONT_PATH").ok())
        .or_else(|| {
            let candidates = [
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            ];
            candidates
                .iter()
                .find(|p| Path::new(p).exists())
                .map(|s| s.to_string())
        })
}

fn report(result: emulair::Result<()>) {
    if let Err(e) = result {
        warn!("{}", e);
    }
}

fn binding(app: &mut App, name: String, kind: KeyEventType) {
    if let Err(e) = app.handle_binding(&name, kind) {
        warn!(binding = %name, "{}", e);
    }
}

fn main() -> Result<(), String> {
    emulair::init_logging();

    let config = load_config();
    let style = load_style();
    let colors = UIColors::from_style(&style);
    let fullscreen = config.fullscreen.unwrap_or(true);
    let font_path = find_font(config.font_path.clone());

    let sdl_ctx = sdl2::init()?;
    let video = sdl_ctx.video()?;
    let controller_subsystem = sdl_ctx.game_controller()?;

    let (w, h) = if fullscreen {
        let mode = video.desktop_display_mode(0)?;
        (mode.w as u32, mode.h as u32)
    } else {
        WINDOWED_SIZE
    };

    let mut builder = video.window("Emulair", w, h);
    builder.position_centered();
    if fullscreen {
        builder.fullscreen_desktop();
    } else {
        builder.resizable();
    }
    let window = builder.build().map_err(|e| e.to_string())?;
    let mut canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;

    let ttf_ctx = sdl2::ttf::init().map_err(|e| e.to_string())?;
    let font_path = match font_path {
        Some(p) => p,
        None => {
            return Err(
                "No TTF font found. Set font_path in config or install DejaVu/FreeSans or set FONT_PATH."
                    .into(),
            )
        }
    };
    let font = ttf_ctx.load_font(&font_path, 18)?;
    info!(font = %font_path, "loaded font");

    let (w, h) = canvas.output_size()?;
    let mut app = App::new(config, user_config_path(), &GamesService::new(), w, h)
        .map_err(|e| e.to_string())?;

    // controllers close when dropped; SDL sends a device-added event for
    // each pad already plugged in at startup
    let mut controllers: Vec<GameController> = Vec::new();
    video.text_input().start();

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_ctx.event_pump()?;
    let mut is_fullscreen = fullscreen;
    let mut last = Instant::now();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::F11),
                    repeat: false,
                    ..
                } => {
                    let mode = if is_fullscreen {
                        FullscreenType::Off
                    } else {
                        FullscreenType::Desktop
                    };
                    if let Err(e) = canvas.window_mut().set_fullscreen(mode) {
                        warn!("Failed to toggle fullscreen: {}", e);
                    } else {
                        is_fullscreen = !is_fullscreen;
                    }
                }
                // Escape at the root leaves the front-end
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } if app.nav().depth() == 1 && app.remap().is_none() => break 'running,
                Event::KeyDown {
                    keycode: Some(k), ..
                } => binding(&mut app, format!("keyboard:{}", k.name()), KeyEventType::Down),
                Event::KeyUp {
                    keycode: Some(k), ..
                } => binding(&mut app, format!("keyboard:{}", k.name()), KeyEventType::Up),
                Event::ControllerButtonDown { button, .. } => {
                    binding(&mut app, format!("controller:{:?}", button), KeyEventType::Down)
                }
                Event::ControllerButtonUp { button, .. } => {
                    binding(&mut app, format!("controller:{:?}", button), KeyEventType::Up)
                }
                // raw joystick buttons, for pads SDL has no controller mapping for
                Event::JoyButtonDown {
                    which, button_idx, ..
                } if !controllers.iter().any(|c| c.instance_id() == which) => {
                    binding(&mut app, format!("joybutton:{}", button_idx), KeyEventType::Down)
                }
                Event::JoyButtonUp {
                    which, button_idx, ..
                } if !controllers.iter().any(|c| c.instance_id() == which) => {
                    binding(&mut app, format!("joybutton:{}", button_idx), KeyEventType::Up)
                }
                Event::ControllerDeviceAdded { which, .. } => {
                    match controller_subsystem.open(which) {
                        Ok(gc) => {
                            info!("Opened controller: {}", gc.name());
                            app.device_added(gc.instance_id());
                            controllers.push(gc);
                        }
                        Err(e) => error!("Failed opening controller {}: {}", which, e),
                    }
                }
                Event::ControllerDeviceRemoved { which, .. } => {
                    controllers.retain(|c| c.instance_id() != which);
                    app.device_removed(which);
                }
                Event::MouseButtonDown {
                    timestamp, x, y, ..
                } => report(app.handle_pointer(PointerEvent::new(
                    MOUSE_POINTER_ID,
                    PointerKind::Down,
                    x as f32,
                    y as f32,
                    timestamp as u64,
                ))),
                Event::MouseMotion {
                    timestamp,
                    mousestate,
                    x,
                    y,
                    ..
                } if mousestate.left() => report(app.handle_pointer(PointerEvent::new(
                    MOUSE_POINTER_ID,
                    PointerKind::Move,
                    x as f32,
                    y as f32,
                    timestamp as u64,
                ))),
                Event::MouseButtonUp {
                    timestamp, x, y, ..
                } => report(app.handle_pointer(PointerEvent::new(
                    MOUSE_POINTER_ID,
                    PointerKind::Up,
                    x as f32,
                    y as f32,
                    timestamp as u64,
                ))),
                Event::TextInput { text, .. } => app.handle_text(&text),
                Event::Window {
                    win_event: WindowEvent::SizeChanged(nw, nh),
                    ..
                } => report(app.resize(nw.max(1) as u32, nh.max(1) as u32)),
                _ => {}
            }
        }

        let now = Instant::now();
        app.tick(now - last);
        last = now;

        render_frame(&mut canvas, &texture_creator, &font, &colors, &app);
        canvas.present();

        // ~60 FPS
        std::thread::sleep(Duration::from_millis(16));
    }

    info!(launches = app.launches().len(), "exiting");
    Ok(())
}
