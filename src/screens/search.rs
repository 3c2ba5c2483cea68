use tracing::warn;

use super::{common_action, ScreenAction, ScreenContext};
use crate::error::Result;
use crate::immersive::{ImmersiveList, Orientation, Release};
use crate::input::{list_scroll_direction, Key, KeyEvent, PointerEvent, PointerKind};
use crate::navigation::TopNavDestination;
use crate::viewmodels::{GameItemViewModel, SearchViewModel};

/// Query line above a rail of matching games.
#[derive(Debug)]
pub struct SearchScreen {
    library: Vec<GameItemViewModel>,
    search: SearchViewModel,
    list: ImmersiveList,
    width: u32,
}

impl SearchScreen {
    pub fn new(library: Vec<GameItemViewModel>, ctx: &ScreenContext) -> Result<Self> {
        let mut screen = SearchScreen {
            library,
            search: SearchViewModel::new(),
            list: ctx.list(Orientation::Horizontal)?,
            width: ctx.width,
        };
        screen.resize(ctx.width, ctx.height)?;
        Ok(screen)
    }

    pub fn query(&self) -> &str {
        self.search.query()
    }

    pub fn results(&self) -> &[GameItemViewModel] {
        self.search.results()
    }

    pub fn list(&self) -> &ImmersiveList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ImmersiveList {
        &mut self.list
    }

    pub fn selected_result(&self) -> Option<&GameItemViewModel> {
        self.search.results().get(self.list.selected_item())
    }

    pub fn resize(&mut self, width: u32, _height: u32) -> Result<()> {
        self.width = width;
        self.list.measure(width, self.search.results().len())?;
        Ok(())
    }

    // new results start from the first match
    fn results_changed(&mut self) {
        self.list.reset();
        if let Err(e) = self.list.measure(self.width, self.search.results().len()) {
            warn!("Failed to lay out search results: {}", e);
        }
    }

    pub fn handle_text(&mut self, text: &str) {
        self.search.push_str(text, &self.library);
        self.results_changed();
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<ScreenAction> {
        if event.pressed(Key::Backspace) {
            if self.search.pop_char(&self.library) {
                self.results_changed();
            }
            return None;
        }
        if let Some(action) = common_action(event, Some(TopNavDestination::Search)) {
            return Some(action);
        }
        if let Some(step) = list_scroll_direction(event, Orientation::Horizontal) {
            if step != 0 && !self.search.results().is_empty() {
                self.list.step(step);
            }
            return None;
        }
        if event.pressed(Key::A) {
            self.selected_result()
                .map(|g| ScreenAction::LaunchGame(g.id.clone()))
        } else {
            None
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<ScreenAction> {
        if self.search.results().is_empty() {
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
                    .selected_result()
                    .map(|g| ScreenAction::LaunchGame(g.id.clone())),
                Release::Fling => None,
            },
        }
    }
}
