use super::ScreenAction;
use crate::input::{Key, KeyEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsCommand {
    RemapControls,
    SaveConfig,
    ReloadConfig,
    Close,
}

impl SettingsCommand {
    pub const ALL: [SettingsCommand; 4] = [
        SettingsCommand::RemapControls,
        SettingsCommand::SaveConfig,
        SettingsCommand::ReloadConfig,
        SettingsCommand::Close,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsCommand::RemapControls => "Remap controls",
            SettingsCommand::SaveConfig => "Save config",
            SettingsCommand::ReloadConfig => "Reload config",
            SettingsCommand::Close => "Close",
        }
    }
}

/// The settings menu.
#[derive(Clone, Debug, Default)]
pub struct SettingsScreen {
    selected: usize,
}

impl SettingsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &'static [SettingsCommand] {
        &SettingsCommand::ALL
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<ScreenAction> {
        if !event.is_down() {
            return None;
        }
        match event.key {
            Key::Up => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
                None
            }
            Key::Down => {
                if self.selected + 1 < SettingsCommand::ALL.len() {
                    self.selected += 1;
                }
                None
            }
            Key::A => Some(ScreenAction::Settings(SettingsCommand::ALL[self.selected])),
            Key::B => Some(ScreenAction::Settings(SettingsCommand::Close)),
            _ => None,
        }
    }
}
