use super::{common_action, ScreenAction};
use crate::input::{Key, KeyEvent};
use crate::navigation::{Destination, TopNavDestination};

/// Screens that only show a heading: Online, Apps, Profile, the option
/// pages and the onboarding steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaceholderScreen {
    destination: Destination,
    args: Vec<String>,
}

impl PlaceholderScreen {
    pub fn new(destination: Destination, args: Vec<String>) -> Self {
        PlaceholderScreen { destination, args }
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    pub fn title(&self) -> String {
        match self.args.first() {
            Some(arg) => format!("{} ({})", self.destination.title(), arg),
            None => self.destination.title().to_string(),
        }
    }

    fn next_onboarding_step(&self) -> Option<ScreenAction> {
        let next = match self.destination {
            Destination::Welcome => Destination::PickGamesFolder,
            Destination::PickGamesFolder => Destination::CreateSystemFolder,
            Destination::CreateSystemFolder => return Some(ScreenAction::FinishOnboarding),
            _ => return None,
        };
        Some(ScreenAction::Navigate(next, Vec::new()))
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<ScreenAction> {
        if self.destination.graph() == Destination::Onboarding {
            if event.pressed(Key::A) {
                return self.next_onboarding_step();
            }
            if event.pressed(Key::B) {
                return Some(ScreenAction::Back);
            }
            return None;
        }
        common_action(event, TopNavDestination::from_destination(self.destination))
    }
}
