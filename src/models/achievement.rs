use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub game_id: u32,
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub number: u32,
    pub status: u32,
}
