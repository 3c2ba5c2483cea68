use tracing::debug;

use super::{common_action, ScreenAction, ScreenContext};
use crate::data_state::DataState;
use crate::error::Result;
use crate::immersive::{ImmersiveList, Orientation, Release};
use crate::input::{list_scroll_direction, Key, KeyEvent, PointerEvent, PointerKind};
use crate::navigation::{Destination, TopNavDestination};
use crate::viewmodels::GameItemViewModel;

/// A horizontal rail of games: the Games tab, or one system's games.
#[derive(Debug)]
pub struct GameRailScreen {
    destination: Destination,
    title: String,
    games: DataState<Vec<GameItemViewModel>>,
    list: ImmersiveList,
}

impl GameRailScreen {
    pub fn new(
        destination: Destination,
        title: impl Into<String>,
        games: DataState<Vec<GameItemViewModel>>,
        ctx: &ScreenContext,
    ) -> Result<Self> {
        let mut screen = GameRailScreen {
            destination,
            title: title.into(),
            games,
            list: ctx.list(Orientation::Horizontal)?,
        };
        screen.resize(ctx.width, ctx.height)?;
        Ok(screen)
    }

    pub fn destination(&self) -> Destination {
        self.destination
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn games(&self) -> &DataState<Vec<GameItemViewModel>> {
        &self.games
    }

    pub fn list(&self) -> &ImmersiveList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ImmersiveList {
        &mut self.list
    }

    fn count(&self) -> usize {
        self.games.success().map_or(0, Vec::len)
    }

    pub fn selected_game(&self) -> Option<&GameItemViewModel> {
        self.games
            .success()
            .and_then(|g| g.get(self.list.selected_item()))
    }

    fn tab(&self) -> Option<TopNavDestination> {
        TopNavDestination::from_destination(self.destination)
    }

    pub fn resize(&mut self, width: u32, _height: u32) -> Result<()> {
        let count = self.count();
        self.list.measure(width, count)?;
        Ok(())
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<ScreenAction> {
        if let Some(action) = common_action(event, self.tab()) {
            return Some(action);
        }
        if self.games.success().is_none() {
            return None;
        }
        if let Some(step) = list_scroll_direction(event, Orientation::Horizontal) {
            if step != 0 {
                let index = self.list.step(step);
                debug!(index, "rail selection");
            }
            return None;
        }
        let game = self.selected_game()?;
        if event.pressed(Key::A) {
            Some(ScreenAction::LaunchGame(game.id.clone()))
        } else if event.pressed(Key::Y) {
            Some(ScreenAction::Navigate(
                Destination::GameOptions,
                vec![game.id.clone()],
            ))
        } else {
            None
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<ScreenAction> {
        if self.count() == 0 {
            return None;
        }
        match event.kind {
            PointerKind::Down => {
                self.list.pointer_down(event.id, event.x, event.y, event.time_ms);
                None
            }
            PointerKind::Move => {
                self.list.pointer_move(event.id, event.x, event.y, event.time_ms);
                None
            }
            PointerKind::Up => match self.list.pointer_up(event.id, event.time_ms)? {
                Release::Tap => self
                    .selected_game()
                    .map(|g| ScreenAction::LaunchGame(g.id.clone())),
                Release::Fling => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::immersive::ImmersiveListParams;
    use crate::services::{GameSource, GamesService};

    fn ctx() -> ScreenContext {
        ScreenContext {
            params: ImmersiveListParams::default(),
            density: 1.0,
            width: 600,
            height: 400,
            saved_position: None,
        }
    }

    fn library() -> DataState<Vec<GameItemViewModel>> {
        DataState::Success(
            GamesService::new()
                .fetch_games()
                .unwrap()
                .into_iter()
                .map(GameItemViewModel::from)
                .collect(),
        )
    }

    #[test]
    fn right_moves_and_a_launches() {
        let mut s = GameRailScreen::new(Destination::Games, "Games", library(), &ctx()).unwrap();
        assert_eq!(s.handle_key(&KeyEvent::down(Key::Right)), None);
        assert_eq!(s.handle_key(&KeyEvent::up(Key::Right)), None);
        s.list_mut().settle();
        assert_eq!(s.selected_game().map(|g| g.id.as_str()), Some("2"));
        assert_eq!(
            s.handle_key(&KeyEvent::down(Key::A)),
            Some(ScreenAction::LaunchGame("2".into()))
        );
        assert_eq!(
            s.handle_key(&KeyEvent::down(Key::Y)),
            Some(ScreenAction::Navigate(Destination::GameOptions, vec!["2".into()]))
        );
    }

    #[test]
    fn tab_keys_only_on_the_tab() {
        let mut tab = GameRailScreen::new(Destination::Games, "Games", library(), &ctx()).unwrap();
        assert_eq!(
            tab.handle_key(&KeyEvent::down(Key::L1)),
            Some(ScreenAction::SwitchTab(TopNavDestination::Systems))
        );
        let mut system =
            GameRailScreen::new(Destination::SystemGames, "PlayStation", library(), &ctx()).unwrap();
        assert_eq!(system.handle_key(&KeyEvent::down(Key::L1)), None);
        assert_eq!(system.handle_key(&KeyEvent::down(Key::B)), Some(ScreenAction::Back));
    }

    #[test]
    fn loading_ignores_list_keys() {
        let mut s = GameRailScreen::new(Destination::Games, "Games", DataState::Loading, &ctx()).unwrap();
        assert_eq!(s.handle_key(&KeyEvent::down(Key::A)), None);
        assert_eq!(s.handle_key(&KeyEvent::down(Key::Right)), None);
        assert_eq!(s.handle_key(&KeyEvent::down(Key::Start)), Some(ScreenAction::OpenSettings));
    }

    #[test]
    fn tap_launches_selected() {
        let mut s = GameRailScreen::new(Destination::Games, "Games", library(), &ctx()).unwrap();
        s.handle_pointer(&PointerEvent::new(1, PointerKind::Down, 100.0, 100.0, 0));
        let action = s.handle_pointer(&PointerEvent::new(1, PointerKind::Up, 100.0, 100.0, 60));
        assert_eq!(action, Some(ScreenAction::LaunchGame("1".into())));
    }

    #[test]
    fn saved_position_restores_selection() {
        let mut c = ctx();
        c.saved_position = Some(3.0);
        let s = GameRailScreen::new(Destination::Games, "Games", library(), &c).unwrap();
        assert_eq!(s.selected_game().map(|g| g.id.as_str()), Some("4"));
    }
}
