use serde::{Deserialize, Serialize};

/// Console family a game belongs to, resolved from its numeric system id.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GameSystem {
    PlayStation,
    PlayStation2,
    PlayStationPortable,
    Nes,
    Snes,
    GameBoyAdvance,
    Unknown,
}

impl GameSystem {
    pub const ALL: [GameSystem; 7] = [
        GameSystem::PlayStation,
        GameSystem::PlayStation2,
        GameSystem::PlayStationPortable,
        GameSystem::Nes,
        GameSystem::Snes,
        GameSystem::GameBoyAdvance,
        GameSystem::Unknown,
    ];

    /// Anything that is not one of the known numeric ids maps to `Unknown`.
    pub fn from_id(system_id: &str) -> Self {
        match system_id.trim().parse::<u32>() {
            Ok(1) => GameSystem::PlayStation,
            Ok(2) => GameSystem::PlayStation2,
            Ok(3) => GameSystem::PlayStationPortable,
            Ok(4) => GameSystem::Nes,
            Ok(5) => GameSystem::Snes,
            Ok(6) => GameSystem::GameBoyAdvance,
            _ => GameSystem::Unknown,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GameSystem::PlayStation => "PlayStation",
            GameSystem::PlayStation2 => "PlayStation 2",
            GameSystem::PlayStationPortable => "PlayStation Portable",
            GameSystem::Nes => "Nintendo Entertainment System",
            GameSystem::Snes => "Super Nintendo Entertainment System",
            GameSystem::GameBoyAdvance => "Game Boy Advance",
            GameSystem::Unknown => "Unknown",
        }
    }

    /// Route argument used by `system_games/<id>` and `system_options/<id>`.
    pub fn route_id(self) -> &'static str {
        match self {
            GameSystem::PlayStation => "1",
            GameSystem::PlayStation2 => "2",
            GameSystem::PlayStationPortable => "3",
            GameSystem::Nes => "4",
            GameSystem::Snes => "5",
            GameSystem::GameBoyAdvance => "6",
            GameSystem::Unknown => "0",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameSystem;

    #[test]
    fn known_ids_resolve() {
        assert_eq!(GameSystem::from_id("1"), GameSystem::PlayStation);
        assert_eq!(GameSystem::from_id("6").name(), "Game Boy Advance");
    }

    #[test]
    fn unknown_and_garbage_ids_fall_back() {
        assert_eq!(GameSystem::from_id("100"), GameSystem::Unknown);
        assert_eq!(GameSystem::from_id("psx"), GameSystem::Unknown);
        assert_eq!(GameSystem::from_id(""), GameSystem::Unknown);
    }

    #[test]
    fn route_ids_round_trip_except_unknown() {
        for sys in GameSystem::ALL {
            if sys != GameSystem::Unknown {
                assert_eq!(GameSystem::from_id(sys.route_id()), sys);
            }
        }
        assert_eq!(GameSystem::from_id(GameSystem::Unknown.route_id()), GameSystem::Unknown);
    }
}
