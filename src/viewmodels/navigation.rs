use crate::navigation::Destination;

/// Decides which graph the app opens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationViewModel {
    start_destination: Destination,
}

impl NavigationViewModel {
    pub fn new(onboarding_complete: bool) -> Self {
        NavigationViewModel {
            start_destination: if onboarding_complete {
                Destination::Main
            } else {
                Destination::Onboarding
            },
        }
    }

    pub fn start_destination(&self) -> Destination {
        self.start_destination
    }
}

impl Default for NavigationViewModel {
    fn default() -> Self {
        NavigationViewModel::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_unless_onboarding_is_pending() {
        assert_eq!(NavigationViewModel::default().start_destination(), Destination::Main);
        assert_eq!(
            NavigationViewModel::new(false).start_destination(),
            Destination::Onboarding
        );
    }
}
