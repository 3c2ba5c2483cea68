use std::fmt;

/// Every place the front-end can navigate to.
///
/// `Onboarding` and `Main` are graphs: navigating to one lands on its start
/// destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Onboarding,
    Welcome,
    PickGamesFolder,
    CreateSystemFolder,
    Main,
    Games,
    Systems,
    SystemGames,
    Online,
    Search,
    Apps,
    Profile,
    Settings,
    SystemOptions,
    GameOptions,
}

impl Destination {
    pub const ALL: [Destination; 15] = [
        Destination::Onboarding,
        Destination::Welcome,
        Destination::PickGamesFolder,
        Destination::CreateSystemFolder,
        Destination::Main,
        Destination::Games,
        Destination::Systems,
        Destination::SystemGames,
        Destination::Online,
        Destination::Search,
        Destination::Apps,
        Destination::Profile,
        Destination::Settings,
        Destination::SystemOptions,
        Destination::GameOptions,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Destination::Onboarding => "onboarding",
            Destination::Welcome => "welcome",
            Destination::PickGamesFolder => "pick_games_folder",
            Destination::CreateSystemFolder => "create_system_folder",
            Destination::Main => "main",
            Destination::Games => "games",
            Destination::Systems => "systems",
            Destination::SystemGames => "system_games",
            Destination::Online => "online",
            Destination::Search => "search",
            Destination::Apps => "apps",
            Destination::Profile => "profile",
            Destination::Settings => "settings",
            Destination::SystemOptions => "system_options",
            Destination::GameOptions => "game_options",
        }
    }

    /// The route followed by `/arg` for every non-empty argument.
    pub fn route_with_args<S: AsRef<str>>(self, args: &[S]) -> String {
        let mut route = self.route().to_string();
        for arg in args.iter().map(AsRef::as_ref).filter(|a| !a.is_empty()) {
            route.push('/');
            route.push_str(arg);
        }
        route
    }

    /// Split a route string back into its destination and arguments.
    pub fn parse(route: &str) -> Option<(Destination, Vec<String>)> {
        let mut parts = route.split('/');
        let head = parts.next()?;
        let dest = Destination::ALL.into_iter().find(|d| d.route() == head)?;
        let args = parts.filter(|p| !p.is_empty()).map(str::to_string).collect();
        Some((dest, args))
    }

    pub fn is_graph(self) -> bool {
        matches!(self, Destination::Onboarding | Destination::Main)
    }

    /// Where navigating to `self` actually lands.
    pub fn start_destination(self) -> Destination {
        match self {
            Destination::Onboarding => Destination::Welcome,
            Destination::Main => Destination::Games,
            other => other,
        }
    }

    pub fn graph(self) -> Destination {
        match self {
            Destination::Onboarding
            | Destination::Welcome
            | Destination::PickGamesFolder
            | Destination::CreateSystemFolder => Destination::Onboarding,
            _ => Destination::Main,
        }
    }

    /// Heading shown by screens without a richer layout.
    pub fn title(self) -> &'static str {
        match self {
            Destination::Onboarding | Destination::Welcome => "Welcome",
            Destination::PickGamesFolder => "Pick games folder",
            Destination::CreateSystemFolder => "Create system folders",
            Destination::Main | Destination::Games => "Games",
            Destination::Systems => "Systems",
            Destination::SystemGames => "System games",
            Destination::Online => "Online",
            Destination::Search => "Search",
            Destination::Apps => "Apps",
            Destination::Profile => "Profile",
            Destination::Settings => "Settings",
            Destination::SystemOptions => "System options",
            Destination::GameOptions => "Game options",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Tabs of the top navigation bar, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TopNavDestination {
    Systems,
    Games,
    Online,
    Search,
}

impl TopNavDestination {
    pub const ALL: [TopNavDestination; 4] = [
        TopNavDestination::Systems,
        TopNavDestination::Games,
        TopNavDestination::Online,
        TopNavDestination::Search,
    ];

    pub fn destination(self) -> Destination {
        match self {
            TopNavDestination::Systems => Destination::Systems,
            TopNavDestination::Games => Destination::Games,
            TopNavDestination::Online => Destination::Online,
            TopNavDestination::Search => Destination::Search,
        }
    }

    pub fn route(self) -> &'static str {
        self.destination().route()
    }

    pub fn from_destination(dest: Destination) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.destination() == dest)
    }

    pub fn title(self) -> &'static str {
        self.destination().title()
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// The tab to the right, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_are_appended_and_empty_ones_skipped() {
        assert_eq!(Destination::SystemGames.route_with_args(&["6"]), "system_games/6");
        assert_eq!(Destination::GameOptions.route_with_args(&["", "12"]), "game_options/12");
        assert_eq!(Destination::Games.route_with_args::<&str>(&[]), "games");
    }

    #[test]
    fn parse_inverts_route_with_args() {
        for dest in Destination::ALL {
            let route = dest.route_with_args(&["3"]);
            assert_eq!(Destination::parse(&route), Some((dest, vec!["3".to_string()])));
        }
        assert_eq!(Destination::parse("games"), Some((Destination::Games, vec![])));
        assert_eq!(Destination::parse("nowhere/1"), None);
    }

    #[test]
    fn graphs_resolve_to_their_start() {
        assert_eq!(Destination::Main.start_destination(), Destination::Games);
        assert_eq!(Destination::Onboarding.start_destination(), Destination::Welcome);
        assert_eq!(Destination::Search.start_destination(), Destination::Search);
        assert_eq!(Destination::PickGamesFolder.graph(), Destination::Onboarding);
        assert_eq!(Destination::Profile.graph(), Destination::Main);
    }

    #[test]
    fn tabs_cycle_in_both_directions() {
        assert_eq!(TopNavDestination::Systems.previous(), TopNavDestination::Search);
        assert_eq!(TopNavDestination::Search.next(), TopNavDestination::Systems);
        assert_eq!(TopNavDestination::Games.next(), TopNavDestination::Online);
        for tab in TopNavDestination::ALL {
            assert_eq!(tab.next().previous(), tab);
        }
    }

    #[test]
    fn only_tab_destinations_map_back_to_tabs() {
        assert_eq!(
            TopNavDestination::from_destination(Destination::Online),
            Some(TopNavDestination::Online)
        );
        assert_eq!(TopNavDestination::from_destination(Destination::Profile), None);
    }
}
