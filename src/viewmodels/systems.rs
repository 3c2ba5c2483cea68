use std::collections::BTreeMap;

use super::games::GameItemViewModel;
use crate::models::GameSystem;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SystemItem {
    pub system: GameSystem,
    /// Route argument for the system's screens.
    pub id: &'static str,
    pub name: &'static str,
    pub game_count: usize,
}

/// Games grouped by the system they run on.
#[derive(Clone, Debug, Default)]
pub struct SystemsViewModel {
    systems: Vec<SystemItem>,
    games: BTreeMap<GameSystem, Vec<GameItemViewModel>>,
}

impl SystemsViewModel {
    pub fn from_games(games: &[GameItemViewModel]) -> Self {
        let mut grouped: BTreeMap<GameSystem, Vec<GameItemViewModel>> = BTreeMap::new();
        for game in games {
            grouped
                .entry(GameSystem::from_id(&game.system_id))
                .or_default()
                .push(game.clone());
        }
        let mut systems: Vec<SystemItem> = grouped
            .iter()
            .map(|(system, games)| SystemItem {
                system: *system,
                id: system.route_id(),
                name: system.name(),
                game_count: games.len(),
            })
            .collect();
        systems.sort_by(|a, b| a.name.cmp(b.name));
        SystemsViewModel { systems, games: grouped }
    }

    pub fn systems(&self) -> &[SystemItem] {
        &self.systems
    }

    pub fn get(&self, index: usize) -> Option<&SystemItem> {
        self.systems.get(index)
    }

    /// Games of the system with route id `system_id`.
    pub fn games_for(&self, system_id: &str) -> &[GameItemViewModel] {
        self.games
            .get(&GameSystem::from_id(system_id))
            .map_or(&[], Vec::as_slice)
    }
}
