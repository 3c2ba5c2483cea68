use crate::error::Result;
use crate::models::Game;

/// Anything that can hand the front-end its game library.
pub trait GameSource {
    fn fetch_games(&self) -> Result<Vec<Game>>;
}

/// Built-in catalogue used until a real library index exists.
#[derive(Default, Debug, Clone, Copy)]
pub struct GamesService;

impl GamesService {
    pub fn new() -> Self {
        GamesService
    }
}

impl GameSource for GamesService {
    fn fetch_games(&self) -> Result<Vec<Game>> {
        Ok(catalogue())
    }
}

/// System id shared by every catalogue entry; it resolves to `Unknown`.
const CATALOGUE_SYSTEM_ID: &str = "100";

const CATALOGUE: [(&str, &str, &str); 17] = [
    ("1", "Castlevania: Symphony of the Night (Europe) (En,Fr,It)", "Castlevania: Symphony of the Night"),
    ("2", "Need for Speed: Most Wanted (2005) (USA) (En,Es)", "Need for Speed: Most Wanted (2005)"),
    ("3", "Metal Gear Solid (Asia) (En,Jp,Kr,Cn)", "Metal Gear Solid"),
    ("4", "God of War (USA) (En,Fr,It)", "God of War"),
    ("5", "Assassin's Creed (USA) (En,Fr,It)", "Assassin's Creed"),
    ("6", "Final Fantasy VII (USA) (En,Fr,It)", "Final Fantasy VII"),
    ("7", "The Legend of Zelda: Ocarina of Time (USA) (En,Fr,It)", "The Legend of Zelda: Ocarina of Time"),
    ("8", "Super Mario Bros. (USA) (En,Fr,It)", "Super Mario Bros."),
    ("9", "Silent Hill (USA) (En,Fr,It)", "Silent Hill"),
    ("10", "Resident Evil 2 (USA) (En,Fr,It)", "Resident Evil 2"),
    ("11", "The Elder Scrolls V: Skyrim (USA) (En,Fr,It)", "The Elder Scrolls V: Skyrim"),
    ("12", "Doom (USA) (En,Fr,It)", "Doom"),
    ("13", "Half-Life (USA) (En,Fr,It)", "Half-Life"),
    ("14", "Grand Theft Auto III (USA) (En,Fr,It)", "Grand Theft Auto III"),
    ("15", "Minecraft (USA) (En,Fr,It)", "Minecraft"),
    ("16", "Terraria (USA) (En,Fr,It)", "Terraria"),
    ("17", "Hollowknight (USA) (En,Fr,It)", "Hollowknight"),
];

fn catalogue() -> Vec<Game> {
    CATALOGUE
        .iter()
        .map(|(id, full_title, display_title)| {
            let mut game = Game::new(*id, CATALOGUE_SYSTEM_ID, *full_title, *display_title);
            game.last_indexed_at = 99999;
            game.file_name = "file".to_string();
            game.file_uri = "file.iso".to_string();
            game
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_has_every_game_with_placeholder_files() {
        let games = GamesService::new().fetch_games().unwrap();
        assert_eq!(games.len(), 17);
        assert_eq!(games[0].display_title, "Castlevania: Symphony of the Night");
        assert_eq!(games[16].display_title, "Hollowknight");
        assert!(games
            .iter()
            .all(|g| g.last_indexed_at == 99999 && g.file_name == "file" && g.file_uri == "file.iso"));
    }

    #[test]
    fn catalogue_games_carry_no_metadata() {
        let games = GamesService::new().fetch_games().unwrap();
        for game in &games {
            assert_eq!(game.system_id, "100", "game {}", game.id);
            assert_eq!(game.developer, None);
            assert_eq!(game.publisher, None);
            assert_eq!(game.genre, None);
            assert_eq!(game.region, None);
            assert_eq!(game.release_date, None);
        }
    }

    #[test]
    fn catalogue_ids_are_unique() {
        let games = GamesService::new().fetch_games().unwrap();
        let mut ids: Vec<&str> = games.iter().map(|g| g.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), games.len());
    }
}
