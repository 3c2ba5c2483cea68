use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, TextureCreator, WindowCanvas};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;

use crate::app::App;
use crate::carousel::item_visual;
use crate::data_state::DataState;
use crate::immersive::ImmersiveList;
use crate::navigation::{Destination, TopNavDestination};
use crate::screens::{
    GameRailScreen, PlaceholderScreen, Screen, SearchScreen, SettingsScreen, SystemsScreen,
    TOP_BAR_HEIGHT,
};
use crate::style::StyleConfig;
use crate::text::wrap_title;
use crate::viewmodels::GameItemViewModel;

const PADDING: i32 = 12;
const MENU_ROW_H: i32 = 28;

pub struct UIColors {
    pub bg: Color,
    pub tile_selected: Color,
    pub tile_normal: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub top_bar_bg: Color,
    pub top_bar_text: Color,
    pub tab_selected: Color,
    pub overlay_rgba: Color,
    pub menu_box: Color,
    pub menu_selected: Color,
    pub menu_title: Color,
    pub menu_text: Color,
    pub message_rgba: Color,
}

fn rgb(c: Option<[u8; 3]>, fallback: Option<[u8; 3]>) -> Color {
    let [r, g, b] = c.or(fallback).unwrap_or_default();
    Color::RGB(r, g, b)
}

fn rgba(c: Option<[u8; 3]>, fallback: Option<[u8; 3]>, alpha: u8) -> Color {
    let Color { r, g, b, .. } = rgb(c, fallback);
    Color::RGBA(r, g, b, alpha)
}

impl UIColors {
    pub fn from_style(style: &StyleConfig) -> Self {
        let d = StyleConfig::default();
        let overlay_alpha = style.overlay_alpha.or(d.overlay_alpha).unwrap_or(200);
        let message_alpha = style
            .message_overlay_alpha
            .or(d.message_overlay_alpha)
            .unwrap_or(160);
        UIColors {
            bg: rgb(style.background, d.background),
            tile_selected: rgb(style.tile_selected, d.tile_selected),
            tile_normal: rgb(style.tile_normal, d.tile_normal),
            text_primary: rgb(style.text_primary, d.text_primary),
            text_secondary: rgb(style.text_secondary, d.text_secondary),
            top_bar_bg: rgb(style.top_bar_bg, d.top_bar_bg),
            top_bar_text: rgb(style.top_bar_text, d.top_bar_text),
            tab_selected: rgb(style.tab_selected, d.tab_selected),
            overlay_rgba: rgba(style.overlay_bg, d.overlay_bg, overlay_alpha),
            menu_box: rgb(style.menu_box, d.menu_box),
            menu_selected: rgb(style.menu_selected, d.menu_selected),
            menu_title: rgb(style.menu_title, d.menu_title),
            menu_text: rgb(style.menu_text, d.menu_text),
            message_rgba: rgba(style.overlay_bg, d.overlay_bg, message_alpha),
        }
    }
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Center,
    Right,
}

/// Everything a draw call needs besides the canvas.
struct Painter<'a, 'ttf, 'r> {
    texture_creator: &'a TextureCreator<WindowContext>,
    font: &'a Font<'ttf, 'r>,
    colors: &'a UIColors,
}

impl Painter<'_, '_, '_> {
    fn width_of(&self, s: &str) -> u32 {
        self.font.size_of(s).map(|(w, _)| w).unwrap_or(0)
    }

    /// Draw one line of text anchored at `x` and returns its height.
    fn text(
        &self,
        canvas: &mut WindowCanvas,
        s: &str,
        color: Color,
        x: i32,
        y: i32,
        align: Align,
        alpha: u8,
    ) -> i32 {
        if s.is_empty() {
            return 0;
        }
        if let Ok(surface) = self.font.render(s).blended(color) {
            if let Ok(mut tex) = self.texture_creator.create_texture_from_surface(&surface) {
                tex.set_alpha_mod(alpha);
                let q = tex.query();
                let dst_x = match align {
                    Align::Left => x,
                    Align::Center => x - (q.width as i32) / 2,
                    Align::Right => x - q.width as i32,
                };
                let _ = canvas.copy(&tex, None, Rect::new(dst_x, y, q.width, q.height));
                return q.height as i32;
            }
        }
        0
    }

    fn line_height(&self) -> i32 {
        self.font.height()
    }
}

/// Draw the current screen plus top bar and overlays.
pub fn render_frame(
    canvas: &mut WindowCanvas,
    texture_creator: &TextureCreator<WindowContext>,
    font: &Font,
    colors: &UIColors,
    app: &App,
) {
    let p = Painter {
        texture_creator,
        font,
        colors,
    };
    let (w, h) = app.size();
    let (w, h) = (w as i32, h as i32);

    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(colors.bg);
    canvas.clear();

    let top = if app.should_show_top_bar() {
        TOP_BAR_HEIGHT as i32
    } else {
        0
    };

    match app.screen() {
        Screen::Rail(s) => draw_rail_screen(canvas, &p, s, top, w, h),
        Screen::Systems(s) => draw_systems(canvas, &p, s, top, w),
        Screen::Search(s) => draw_search(canvas, &p, s, top, w, h),
        Screen::Settings(s) => draw_settings(canvas, &p, s, w, h),
        Screen::Placeholder(s) => draw_placeholder(canvas, &p, s, w, h),
    }

    if app.should_show_top_bar() {
        draw_top_bar(canvas, &p, app.current_tab(), app.gamepads().connected(), w);
    }

    if let Some(remap) = app.remap() {
        canvas.set_draw_color(colors.overlay_rgba);
        let _ = canvas.fill_rect(Rect::new(0, 0, w as u32, h as u32));
        let action = remap.current_action().map_or("", |k| k.action_name());
        let prompt = format!("Press a button for: {}", action);
        let lh = p.text(canvas, &prompt, colors.text_primary, w / 2, h / 2, Align::Center, 255);
        p.text(
            canvas,
            "Escape to cancel",
            colors.text_secondary,
            w / 2,
            h / 2 + lh + 8,
            Align::Center,
            255,
        );
    }

    // status message (auto-hides after 3s)
    if let Some(msg) = app.message() {
        let bar_h = p.line_height() + 16;
        canvas.set_draw_color(colors.message_rgba);
        let _ = canvas.fill_rect(Rect::new(0, h - bar_h, w as u32, bar_h as u32));
        p.text(canvas, msg, colors.text_primary, w / 2, h - bar_h + 8, Align::Center, 255);
    }
}

fn draw_top_bar(
    canvas: &mut WindowCanvas,
    p: &Painter,
    current: Option<TopNavDestination>,
    gamepad: bool,
    w: i32,
) {
    let bar_h = TOP_BAR_HEIGHT as i32;
    canvas.set_draw_color(p.colors.top_bar_bg);
    let _ = canvas.fill_rect(Rect::new(0, 0, w as u32, bar_h as u32));

    let text_y = (bar_h - p.line_height()) / 2;
    let slot = w / (TopNavDestination::ALL.len() as i32 + 2);
    for (i, tab) in TopNavDestination::ALL.iter().enumerate() {
        let cx = slot * (i as i32 + 1) + slot / 2;
        let selected = Some(*tab) == current;
        let color = if selected {
            p.colors.tab_selected
        } else {
            p.colors.top_bar_text
        };
        p.text(canvas, tab.title(), color, cx, text_y, Align::Center, 255);
        if selected {
            let label_w = p.width_of(tab.title()) as i32;
            canvas.set_draw_color(p.colors.tab_selected);
            let _ = canvas.fill_rect(Rect::new(cx - label_w / 2, bar_h - 4, label_w.max(1) as u32, 3));
        }
    }

    if gamepad {
        p.text(canvas, "LB", p.colors.text_secondary, PADDING, text_y, Align::Left, 255);
        p.text(canvas, "RB", p.colors.text_secondary, w - PADDING, text_y, Align::Right, 255);
    }
}

/// Tiles of a horizontal immersive rail, with the selected game's title
/// and details underneath.
fn draw_rail(
    canvas: &mut WindowCanvas,
    p: &Painter,
    list: &ImmersiveList,
    games: &[GameItemViewModel],
    rail_y: i32,
    w: i32,
) {
    let position = list.state().fractional_position();
    let selected = list.selected_item();
    let max_extent = list.item_extent() as f32 * 1.2;
    let centre_y = rail_y + (max_extent as i32) / 2;

    for placement in list.placements() {
        let Some(game) = games.get(placement.index) else {
            continue;
        };
        let visual = item_visual(position, placement.index);
        let size = (placement.extent as f32 * visual.scale) as u32;
        let x = placement.offset + (placement.extent as i32) / 2 - (size as i32) / 2;
        let y = centre_y - (size as i32) / 2;
        let base = if placement.index == selected {
            p.colors.tile_selected
        } else {
            p.colors.tile_normal
        };
        let alpha = (visual.alpha * 255.0) as u8;
        canvas.set_draw_color(Color::RGBA(base.r, base.g, base.b, alpha));
        let _ = canvas.fill_rect(Rect::new(x, y, size.max(1), size.max(1)));

        p.text(
            canvas,
            &game.tile_label,
            p.colors.text_primary,
            x + (size as i32) / 2,
            y + (size as i32 - p.line_height()) / 2,
            Align::Center,
            alpha,
        );
    }

    let Some(game) = games.get(selected) else {
        return;
    };
    let max_w = (w - PADDING * 2).max(0) as u32;
    let mut y = centre_y + (max_extent as i32) / 2 + PADDING;
    for line in wrap_title(&game.display_title, max_w, |s| p.width_of(s)) {
        y += p.text(canvas, &line, p.colors.text_primary, PADDING, y, Align::Left, 255) + 2;
    }
    let meta = if game.details.is_empty() {
        game.system_name.to_string()
    } else {
        format!("{} · {}", game.system_name, game.details)
    };
    p.text(canvas, &meta, p.colors.text_secondary, PADDING, y + 4, Align::Left, 255);
}

fn draw_state_message<T>(
    canvas: &mut WindowCanvas,
    p: &Painter,
    state: &DataState<T>,
    w: i32,
    h: i32,
) {
    let msg = match state {
        DataState::Idle => return,
        DataState::Loading => "Loading...".to_string(),
        DataState::Error(e) => format!("Could not load games: {}", e),
        DataState::Success(_) => return,
    };
    canvas.set_draw_color(p.colors.overlay_rgba);
    let _ = canvas.fill_rect(Rect::new(0, 0, w as u32, h as u32));
    p.text(canvas, &msg, p.colors.text_primary, w / 2, h / 2, Align::Center, 255);
}

fn draw_rail_screen(
    canvas: &mut WindowCanvas,
    p: &Painter,
    s: &GameRailScreen,
    top: i32,
    w: i32,
    h: i32,
) {
    let mut rail_y = top + PADDING;
    if s.destination() != Destination::Games {
        rail_y += p.text(canvas, s.title(), p.colors.text_primary, PADDING, rail_y, Align::Left, 255);
        rail_y += PADDING;
    }
    match s.games() {
        DataState::Success(games) if games.is_empty() => {
            p.text(canvas, "No games", p.colors.text_secondary, w / 2, h / 2, Align::Center, 255);
        }
        DataState::Success(games) => draw_rail(canvas, p, s.list(), games, rail_y, w),
        other => draw_state_message(canvas, p, other, w, h),
    }
}

fn draw_systems(canvas: &mut WindowCanvas, p: &Painter, s: &SystemsScreen, top: i32, w: i32) {
    let list = s.list();
    let position = list.state().fractional_position();
    let selected = list.selected_item();
    for placement in list.placements() {
        let Some(system) = s.systems().get(placement.index) else {
            continue;
        };
        let visual = item_visual(position, placement.index);
        let alpha = (visual.alpha * 255.0) as u8;
        let base = if placement.index == selected {
            p.colors.tile_selected
        } else {
            p.colors.tile_normal
        };
        let row_w = ((w - PADDING * 2) as f32 * visual.scale / 1.2) as u32;
        let y = top + placement.offset;
        canvas.set_draw_color(Color::RGBA(base.r, base.g, base.b, alpha));
        let _ = canvas.fill_rect(Rect::new(PADDING, y, row_w.max(1), placement.extent.max(1)));
        let label = format!("{} ({})", system.name, system.game_count);
        p.text(
            canvas,
            &label,
            p.colors.text_primary,
            PADDING * 2,
            y + (placement.extent as i32 - p.line_height()) / 2,
            Align::Left,
            alpha,
        );
    }
}

fn draw_search(canvas: &mut WindowCanvas, p: &Painter, s: &SearchScreen, top: i32, w: i32, h: i32) {
    let query = format!("Search: {}_", s.query());
    let y = top + PADDING;
    let lh = p.text(canvas, &query, p.colors.text_primary, PADDING, y, Align::Left, 255);
    if s.results().is_empty() {
        if !s.query().is_empty() {
            p.text(canvas, "No results", p.colors.text_secondary, w / 2, h / 2, Align::Center, 255);
        }
        return;
    }
    draw_rail(canvas, p, s.list(), s.results(), y + lh + PADDING, w);
}

fn draw_settings(canvas: &mut WindowCanvas, p: &Painter, s: &SettingsScreen, w: i32, h: i32) {
    let items = s.items();
    let box_w = w / 2;
    let box_h = (items.len() as i32) * MENU_ROW_H + 48;
    let box_x = (w - box_w) / 2;
    let box_y = (h - box_h) / 2;
    canvas.set_draw_color(p.colors.menu_box);
    let _ = canvas.fill_rect(Rect::new(box_x, box_y, box_w as u32, box_h as u32));

    p.text(canvas, "Settings", p.colors.menu_title, box_x + 12, box_y + 8, Align::Left, 255);

    for (i, item) in items.iter().enumerate() {
        let y = box_y + 40 + (i as i32) * MENU_ROW_H;
        if i == s.selected() {
            canvas.set_draw_color(p.colors.menu_selected);
            let _ = canvas.fill_rect(Rect::new(box_x + 8, y - 4, (box_w - 16) as u32, MENU_ROW_H as u32));
        }
        p.text(canvas, item.label(), p.colors.menu_text, box_x + 16, y, Align::Left, 255);
    }
}

fn draw_placeholder(canvas: &mut WindowCanvas, p: &Painter, s: &PlaceholderScreen, w: i32, h: i32) {
    let lh = p.text(canvas, &s.title(), p.colors.text_primary, w / 2, h / 2, Align::Center, 255);
    let hint = if s.destination().graph() == Destination::Onboarding {
        "A: continue    B: back"
    } else {
        "B: back"
    };
    p.text(canvas, hint, p.colors.text_secondary, w / 2, h / 2 + lh + 8, Align::Center, 255);
}
