//! Per-screen state. Screens turn input into [`ScreenAction`]s; the app
//! applies them.

mod placeholder;
mod rail;
mod search;
mod settings;
mod systems;

pub use placeholder::PlaceholderScreen;
pub use rail::GameRailScreen;
pub use search::SearchScreen;
pub use settings::{SettingsCommand, SettingsScreen};
pub use systems::SystemsScreen;

use std::time::Duration;

use crate::error::Result;
use crate::immersive::{ImmersiveList, ImmersiveListParams, Orientation};
use crate::input::{shoulder_destination, Key, KeyEvent, PointerEvent};
use crate::navigation::{Destination, TopNavDestination};

/// Height reserved for the top navigation bar.
pub const TOP_BAR_HEIGHT: u32 = 48;

#[derive(Clone, Debug, PartialEq)]
pub enum ScreenAction {
    Back,
    SwitchTab(TopNavDestination),
    Navigate(Destination, Vec<String>),
    /// Launch the game with this id.
    LaunchGame(String),
    OpenProfile,
    OpenSettings,
    FinishOnboarding,
    Settings(SettingsCommand),
}

/// What a screen needs to build its list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenContext {
    pub params: ImmersiveListParams,
    pub density: f32,
    pub width: u32,
    pub height: u32,
    /// Item position the list had when this route was last shown.
    pub saved_position: Option<f32>,
}

impl ScreenContext {
    pub(crate) fn list(&self, orientation: Orientation) -> Result<ImmersiveList> {
        let list = ImmersiveList::new(orientation, self.params, self.density)?;
        Ok(match self.saved_position {
            Some(position) => list.with_saved_position(position),
            None => list,
        })
    }
}

/// Keys every main-graph screen shares: tabs, menus and back.
pub(crate) fn common_action(event: &KeyEvent, tab: Option<TopNavDestination>) -> Option<ScreenAction> {
    if !event.is_down() {
        return None;
    }
    if let Some(current) = tab {
        if let Some(next) = shoulder_destination(event, current) {
            return Some(ScreenAction::SwitchTab(next));
        }
    }
    match event.key {
        Key::B => Some(ScreenAction::Back),
        Key::Start => Some(ScreenAction::OpenSettings),
        Key::Select => Some(ScreenAction::OpenProfile),
        _ => None,
    }
}

/// The screen currently shown.
#[derive(Debug)]
pub enum Screen {
    Rail(GameRailScreen),
    Systems(SystemsScreen),
    Search(SearchScreen),
    Settings(SettingsScreen),
    Placeholder(PlaceholderScreen),
}

impl Screen {
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<ScreenAction> {
        match self {
            Screen::Rail(s) => s.handle_key(event),
            Screen::Systems(s) => s.handle_key(event),
            Screen::Search(s) => s.handle_key(event),
            Screen::Settings(s) => s.handle_key(event),
            Screen::Placeholder(s) => s.handle_key(event),
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<ScreenAction> {
        match self {
            Screen::Rail(s) => s.handle_pointer(event),
            Screen::Systems(s) => s.handle_pointer(event),
            Screen::Search(s) => s.handle_pointer(event),
            Screen::Settings(_) | Screen::Placeholder(_) => None,
        }
    }

    pub fn handle_text(&mut self, text: &str) {
        if let Screen::Search(s) = self {
            s.handle_text(text);
        }
    }

    pub fn list(&self) -> Option<&ImmersiveList> {
        match self {
            Screen::Rail(s) => Some(s.list()),
            Screen::Systems(s) => Some(s.list()),
            Screen::Search(s) => Some(s.list()),
            Screen::Settings(_) | Screen::Placeholder(_) => None,
        }
    }

    pub fn list_mut(&mut self) -> Option<&mut ImmersiveList> {
        match self {
            Screen::Rail(s) => Some(s.list_mut()),
            Screen::Systems(s) => Some(s.list_mut()),
            Screen::Search(s) => Some(s.list_mut()),
            Screen::Settings(_) | Screen::Placeholder(_) => None,
        }
    }

    /// Advance list animations. Returns whether anything is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.list_mut().map_or(false, |l| l.tick(dt))
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        match self {
            Screen::Rail(s) => s.resize(width, height),
            Screen::Systems(s) => s.resize(width, height),
            Screen::Search(s) => s.resize(width, height),
            Screen::Settings(_) | Screen::Placeholder(_) => Ok(()),
        }
    }

    pub fn title(&self) -> String {
        match self {
            Screen::Rail(s) => s.title().to_string(),
            Screen::Systems(_) => Destination::Systems.title().to_string(),
            Screen::Search(_) => Destination::Search.title().to_string(),
            Screen::Settings(_) => Destination::Settings.title().to_string(),
            Screen::Placeholder(s) => s.title(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_keys() {
        let tab = Some(TopNavDestination::Games);
        assert_eq!(
            common_action(&KeyEvent::down(Key::R1), tab),
            Some(ScreenAction::SwitchTab(TopNavDestination::Online))
        );
        assert_eq!(common_action(&KeyEvent::down(Key::R1), None), None);
        assert_eq!(common_action(&KeyEvent::down(Key::B), None), Some(ScreenAction::Back));
        assert_eq!(common_action(&KeyEvent::up(Key::B), None), None);
        assert_eq!(
            common_action(&KeyEvent::down(Key::Start), tab),
            Some(ScreenAction::OpenSettings)
        );
        assert_eq!(
            common_action(&KeyEvent::down(Key::Select), tab),
            Some(ScreenAction::OpenProfile)
        );
    }
}
