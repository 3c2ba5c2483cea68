use tracing::{debug, warn};

use crate::data_state::DataState;
use crate::format::{compute_title_placeholder, format_company, format_date, format_title_placeholder};
use crate::models::{Game, GameSystem};
use crate::services::GameSource;

const DETAILS_SEPARATOR: &str = " · ";

/// A game as the library screens display it.
#[derive(Clone, Debug, PartialEq)]
pub struct GameItemViewModel {
    pub id: String,
    pub system_id: String,
    pub system_name: &'static str,
    pub full_title: String,
    pub display_title: String,
    /// Abbreviation drawn when there is no artwork.
    pub placeholder_title: String,
    /// Up to three characters for small tiles.
    pub tile_label: String,
    pub icon: Option<String>,
    pub image_banner: Option<String>,
    pub video_banner: Option<String>,
    pub audio_bgm: Option<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub genre: Option<String>,
    /// Release year.
    pub release_date: Option<String>,
    pub region: Option<String>,
    pub details: String,
    pub last_played_at: Option<i64>,
    pub last_indexed_at: i64,
    pub file_name: String,
    pub file_uri: String,
    pub icon_uri: Option<String>,
    pub image_banner_uri: Option<String>,
    pub video_banner_uri: Option<String>,
    pub audio_bgm_uri: Option<String>,
}

impl From<Game> for GameItemViewModel {
    fn from(game: Game) -> Self {
        let mut item = GameItemViewModel {
            system_name: GameSystem::from_id(&game.system_id).name(),
            placeholder_title: format_title_placeholder(&game.display_title),
            tile_label: compute_title_placeholder(&game.display_title),
            developer: game.developer.as_deref().map(format_company),
            publisher: game.publisher.as_deref().map(format_company),
            release_date: game.release_date.map(format_date),
            details: String::new(),
            id: game.id,
            system_id: game.system_id,
            full_title: game.full_title,
            display_title: game.display_title,
            icon: game.icon,
            image_banner: game.image_banner,
            video_banner: game.video_banner,
            audio_bgm: game.audio_bgm,
            genre: game.genre,
            region: game.region,
            last_played_at: game.last_played_at,
            last_indexed_at: game.last_indexed_at,
            file_name: game.file_name,
            file_uri: game.file_uri,
            icon_uri: game.icon_uri,
            image_banner_uri: game.image_banner_uri,
            video_banner_uri: game.video_banner_uri,
            audio_bgm_uri: game.audio_bgm_uri,
        };
        item.details = concat_details(&item);
        item
    }
}

/// Developer, publisher (when different), genre, year and region.
pub fn concat_details(item: &GameItemViewModel) -> String {
    let mut parts: Vec<&str> = Vec::new();
    if let Some(developer) = &item.developer {
        parts.push(developer);
    }
    if item.developer != item.publisher {
        if let Some(publisher) = &item.publisher {
            parts.push(publisher);
        }
    }
    parts.extend(
        [&item.genre, &item.release_date, &item.region]
            .into_iter()
            .filter_map(|p| p.as_deref()),
    );
    parts.join(DETAILS_SEPARATOR)
}

/// The whole library, as loaded from a [`GameSource`].
#[derive(Debug, Default)]
pub struct GamesViewModel {
    games: DataState<Vec<GameItemViewModel>>,
}

impl GamesViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn games(&self) -> &DataState<Vec<GameItemViewModel>> {
        &self.games
    }

    pub fn load(&mut self, source: &dyn GameSource) {
        self.games = DataState::Loading;
        self.games = match source.fetch_games() {
            Ok(games) => {
                debug!(count = games.len(), "games loaded");
                DataState::Success(games.into_iter().map(GameItemViewModel::from).collect())
            }
            Err(e) => {
                warn!("Failed to load games: {}", e);
                DataState::Error(e.to_string())
            }
        };
    }

    pub fn get(&self, index: usize) -> Option<&GameItemViewModel> {
        self.games.success().and_then(|g| g.get(index))
    }

    pub fn find(&self, id: &str) -> Option<&GameItemViewModel> {
        self.games.success().and_then(|g| g.iter().find(|item| item.id == id))
    }

    pub fn len(&self) -> usize {
        self.games.success().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
