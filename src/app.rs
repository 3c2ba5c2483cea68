//! Application state: everything the renderer draws and every input the
//! platform layer delivers goes through [`App`].

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::{load_config_from, write_config_to, ConfigFile};
use crate::error::{FrontendError, Result};
use crate::input::{ControllerMap, GamepadStatus, Key, KeyEvent, KeyEventType, PointerEvent};
use crate::models::GameSystem;
use crate::navigation::{BackStackEntry, Destination, NavController, TopNavDestination};
use crate::screens::{
    GameRailScreen, PlaceholderScreen, Screen, ScreenAction, ScreenContext, SearchScreen,
    SettingsCommand, SettingsScreen, SystemsScreen,
};
use crate::services::GameSource;
use crate::viewmodels::{GamesViewModel, NavigationViewModel, SystemsViewModel};

/// How long a status message stays on screen.
pub const MESSAGE_DURATION: Duration = Duration::from_secs(3);

/// A game the user asked to play. Nothing is started; requests are only
/// recorded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchRequest {
    pub game_id: String,
    pub title: String,
    pub system_name: &'static str,
    pub file_uri: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub text: String,
    age: Duration,
}

/// Progress of a "Remap controls" session: one binding per action in
/// [`Key::ACTIONS`] order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RemapCapture {
    index: usize,
    captured: HashMap<String, String>,
}

impl RemapCapture {
    /// The action waiting for a binding.
    pub fn current_action(&self) -> Option<Key> {
        Key::ACTIONS.get(self.index).copied()
    }

    pub fn captured(&self) -> &HashMap<String, String> {
        &self.captured
    }
}

pub struct App {
    config: ConfigFile,
    config_path: Option<PathBuf>,
    controls: ControllerMap,
    gamepads: GamepadStatus,
    nav: NavController,
    games: GamesViewModel,
    systems: SystemsViewModel,
    screen: Screen,
    saved_positions: HashMap<String, f32>,
    launches: Vec<LaunchRequest>,
    message: Option<Message>,
    remap: Option<RemapCapture>,
    width: u32,
    height: u32,
}

impl App {
    /// `config_path` is where "Save config" writes and "Reload config" reads.
    pub fn new(
        config: ConfigFile,
        config_path: Option<PathBuf>,
        source: &dyn GameSource,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let mut games = GamesViewModel::new();
        games.load(source);
        let systems =
            SystemsViewModel::from_games(games.games().success().map(Vec::as_slice).unwrap_or_default());
        let start = NavigationViewModel::new(config.onboarding_complete()).start_destination();
        info!(start = %start, games = games.len(), "starting");

        let mut app = App {
            controls: ControllerMap::from_config(config.controller_map.as_ref()),
            config,
            config_path,
            gamepads: GamepadStatus::new(),
            nav: NavController::new(start),
            games,
            systems,
            screen: Screen::Settings(SettingsScreen::new()),
            saved_positions: HashMap::new(),
            launches: Vec::new(),
            message: None,
            remap: None,
            width,
            height,
        };
        app.screen = app.screen_for(app.nav.current())?;
        Ok(app)
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn controls(&self) -> &ControllerMap {
        &self.controls
    }

    pub fn gamepads(&self) -> &GamepadStatus {
        &self.gamepads
    }

    pub fn nav(&self) -> &NavController {
        &self.nav
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn games(&self) -> &GamesViewModel {
        &self.games
    }

    pub fn launches(&self) -> &[LaunchRequest] {
        &self.launches
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|m| m.text.as_str())
    }

    pub fn remap(&self) -> Option<&RemapCapture> {
        self.remap.as_ref()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn current_tab(&self) -> Option<TopNavDestination> {
        self.nav.current_tab()
    }

    pub fn should_show_top_bar(&self) -> bool {
        self.nav.should_show_top_bar()
    }

    fn show_message(&mut self, text: impl Into<String>) {
        let text = text.into();
        info!("{}", text);
        self.message = Some(Message {
            text,
            age: Duration::ZERO,
        });
    }

    fn screen_for(&self, entry: &BackStackEntry) -> Result<Screen> {
        let ctx = ScreenContext {
            params: self.config.list_params(),
            density: self.config.density(),
            width: self.width,
            height: self.height,
            saved_position: self.saved_positions.get(&entry.route()).copied(),
        };
        let screen = match entry.destination {
            Destination::Main | Destination::Games => Screen::Rail(GameRailScreen::new(
                Destination::Games,
                Destination::Games.title(),
                self.games.games().clone(),
                &ctx,
            )?),
            Destination::SystemGames => {
                let id = entry.arg().unwrap_or_default();
                let games = self
                    .games
                    .games()
                    .clone()
                    .map(|_| self.systems.games_for(id).to_vec());
                Screen::Rail(GameRailScreen::new(
                    Destination::SystemGames,
                    GameSystem::from_id(id).name(),
                    games,
                    &ctx,
                )?)
            }
            Destination::Systems => {
                Screen::Systems(SystemsScreen::new(self.systems.systems().to_vec(), &ctx)?)
            }
            Destination::Search => {
                let library = self.games.games().success().cloned().unwrap_or_default();
                Screen::Search(SearchScreen::new(library, &ctx)?)
            }
            Destination::Settings => Screen::Settings(SettingsScreen::new()),
            other => Screen::Placeholder(PlaceholderScreen::new(other, entry.args.clone())),
        };
        Ok(screen)
    }

    // remember which item the outgoing list was on, or heading for;
    // search results are rebuilt from an empty query so are not kept
    fn save_list_position(&mut self) {
        if self.nav.current_destination() == Destination::Search {
            return;
        }
        if let Some(list) = self.screen.list() {
            self.saved_positions
                .insert(self.nav.current().route(), list.state().saved_position());
        }
    }

    fn show_current(&mut self) -> Result<()> {
        self.screen = self.screen_for(self.nav.current())?;
        debug!(route = %self.nav.current().route(), depth = self.nav.depth(), "screen");
        Ok(())
    }

    pub fn apply(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::Back => {
                self.save_list_position();
                if self.nav.pop_back() {
                    self.show_current()?;
                }
            }
            ScreenAction::SwitchTab(tab) => {
                self.save_list_position();
                self.nav.navigate_tab(tab);
                self.show_current()?;
            }
            ScreenAction::Navigate(dest, args) => {
                self.save_list_position();
                self.nav.navigate(dest, args.as_slice());
                self.show_current()?;
            }
            ScreenAction::OpenProfile => {
                if self.nav.current_destination() != Destination::Profile {
                    self.apply(ScreenAction::Navigate(Destination::Profile, Vec::new()))?;
                }
            }
            ScreenAction::OpenSettings => {
                if self.nav.current_destination() != Destination::Settings {
                    self.apply(ScreenAction::Navigate(Destination::Settings, Vec::new()))?;
                }
            }
            ScreenAction::LaunchGame(id) => self.launch(&id),
            ScreenAction::FinishOnboarding => {
                self.config.onboarding_complete = Some(true);
                if self.config_path.is_some() {
                    if let Err(e) = self.save_config() {
                        warn!("Failed to save onboarding state: {}", e);
                    }
                }
                self.nav.reset_to(Destination::Main);
                self.show_current()?;
            }
            ScreenAction::Settings(cmd) => self.run_settings_command(cmd)?,
        }
        Ok(())
    }

    fn run_settings_command(&mut self, cmd: SettingsCommand) -> Result<()> {
        match cmd {
            SettingsCommand::RemapControls => {
                self.remap = Some(RemapCapture::default());
                info!("Remapping controls");
            }
            SettingsCommand::SaveConfig => match self.save_config() {
                Ok(()) => self.show_message("Config saved"),
                Err(e) => self.show_message(format!("Save failed: {}", e)),
            },
            SettingsCommand::ReloadConfig => match self.reload_config() {
                Ok(()) => self.show_message("Config reloaded"),
                Err(e) => self.show_message(format!("Reload failed: {}", e)),
            },
            SettingsCommand::Close => self.apply(ScreenAction::Back)?,
        }
        Ok(())
    }

    fn launch(&mut self, id: &str) {
        let request = match self.games.find(id) {
            Some(game) => LaunchRequest {
                game_id: game.id.clone(),
                title: game.display_title.clone(),
                system_name: game.system_name,
                file_uri: game.file_uri.clone(),
            },
            None => {
                warn!(game_id = id, "launch requested for unknown game");
                self.show_message(format!("Game {} not found", id));
                return;
            }
        };
        info!(
            game_id = %request.game_id,
            system = request.system_name,
            file = %request.file_uri,
            "launch requested"
        );
        self.show_message(format!("Launching {}", request.title));
        self.launches.push(request);
    }

    pub fn save_config(&self) -> Result<()> {
        let path = self.config_path.as_ref().ok_or(FrontendError::NoConfigPath)?;
        write_config_to(path, &self.config)
    }

    pub fn reload_config(&mut self) -> Result<()> {
        let path = self.config_path.clone().ok_or(FrontendError::NoConfigPath)?;
        self.config = load_config_from(&path);
        self.controls = ControllerMap::from_config(self.config.controller_map.as_ref());
        // list layout may have changed
        if self.screen.list().is_some() {
            self.save_list_position();
            self.show_current()?;
        }
        Ok(())
    }

    /// Feed a raw device binding (`keyboard:Left`, `controller:A`,
    /// `joybutton:3`). Returns whether it was used.
    pub fn handle_binding(&mut self, binding: &str, kind: KeyEventType) -> Result<bool> {
        if self.remap.is_some() {
            if kind == KeyEventType::Down {
                self.capture_binding(binding);
            }
            return Ok(true);
        }
        match self.controls.resolve(binding) {
            Some(key) => {
                self.handle_key(KeyEvent { key, kind })?;
                Ok(true)
            }
            None => {
                debug!(binding, "unbound input");
                Ok(false)
            }
        }
    }

    fn capture_binding(&mut self, binding: &str) {
        if binding == "keyboard:Escape" {
            self.remap = None;
            self.show_message("Remap cancelled");
            return;
        }
        let done = match self.remap.as_mut() {
            Some(remap) => {
                if let Some(action) = remap.current_action() {
                    remap
                        .captured
                        .insert(action.action_name().to_string(), binding.to_string());
                    remap.index += 1;
                }
                remap.current_action().is_none()
            }
            None => false,
        };
        if done {
            self.finish_remap();
        }
    }

    fn finish_remap(&mut self) {
        let Some(remap) = self.remap.take() else {
            return;
        };
        self.config.controller_map = Some(remap.captured);
        self.controls = ControllerMap::from_config(self.config.controller_map.as_ref());
        match self.save_config() {
            Ok(()) => self.show_message("Controller mapping saved"),
            Err(e) => self.show_message(format!("Save failed: {}", e)),
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> Result<()> {
        match self.screen.handle_key(&event) {
            Some(action) => self.apply(action),
            None => Ok(()),
        }
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<()> {
        if self.remap.is_some() {
            return Ok(());
        }
        match self.screen.handle_pointer(&event) {
            Some(action) => self.apply(action),
            None => Ok(()),
        }
    }

    pub fn handle_text(&mut self, text: &str) {
        if self.remap.is_none() {
            self.screen.handle_text(text);
        }
    }

    pub fn device_added(&mut self, id: u32) {
        if self.gamepads.device_added(id) {
            info!(id, count = self.gamepads.count(), "gamepad connected");
        }
    }

    pub fn device_removed(&mut self, id: u32) {
        if self.gamepads.device_removed(id) {
            info!(id, count = self.gamepads.count(), "gamepad disconnected");
        }
    }

    /// Advance animations and message timers. Returns whether a list is
    /// still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if let Some(message) = self.message.as_mut() {
            message.age += dt;
            if message.age >= MESSAGE_DURATION {
                self.message = None;
            }
        }
        self.screen.tick(dt)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.width = width;
        self.height = height;
        self.screen.resize(width, height)
    }
}
