use serde::{Deserialize, Serialize};

/// A single entry of the game library as the front-end displays it.
///
/// Timestamps are milliseconds since the Unix epoch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Game {
    pub id: String,
    pub system_id: String,
    pub full_title: String,
    pub display_title: String,
    pub icon: Option<String>,
    pub image_banner: Option<String>,
    pub video_banner: Option<String>,
    pub audio_bgm: Option<String>,
    pub developer: Option<String>,
    pub publisher: Option<String>,
    pub genre: Option<String>,
    pub region: Option<String>,
    pub release_date: Option<i64>,
    pub last_played_at: Option<i64>,
    pub last_indexed_at: i64,
    pub file_name: String,
    pub file_uri: String,
    pub icon_uri: Option<String>,
    pub image_banner_uri: Option<String>,
    pub video_banner_uri: Option<String>,
    pub audio_bgm_uri: Option<String>,
}

impl Game {
    /// A game with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        system_id: impl Into<String>,
        full_title: impl Into<String>,
        display_title: impl Into<String>,
    ) -> Self {
        Game {
            id: id.into(),
            system_id: system_id.into(),
            full_title: full_title.into(),
            display_title: display_title.into(),
            icon: None,
            image_banner: None,
            video_banner: None,
            audio_bgm: None,
            developer: None,
            publisher: None,
            genre: None,
            region: None,
            release_date: None,
            last_played_at: None,
            last_indexed_at: 0,
            file_name: String::new(),
            file_uri: String::new(),
            icon_uri: None,
            image_banner_uri: None,
            video_banner_uri: None,
            audio_bgm_uri: None,
        }
    }
}
