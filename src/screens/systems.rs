use super::{common_action, ScreenAction, ScreenContext, TOP_BAR_HEIGHT};
use crate::error::Result;
use crate::immersive::{ImmersiveList, Orientation, Release};
use crate::input::{list_scroll_direction, Key, KeyEvent, PointerEvent, PointerKind};
use crate::navigation::{Destination, TopNavDestination};
use crate::viewmodels::SystemItem;

/// Vertical list of systems with a game count each.
#[derive(Debug)]
pub struct SystemsScreen {
    systems: Vec<SystemItem>,
    list: ImmersiveList,
}

impl SystemsScreen {
    pub fn new(systems: Vec<SystemItem>, ctx: &ScreenContext) -> Result<Self> {
        let mut screen = SystemsScreen {
            systems,
            list: ctx.list(Orientation::Vertical)?,
        };
        screen.resize(ctx.width, ctx.height)?;
        Ok(screen)
    }

    pub fn systems(&self) -> &[SystemItem] {
        &self.systems
    }

    pub fn list(&self) -> &ImmersiveList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ImmersiveList {
        &mut self.list
    }

    pub fn selected_system(&self) -> Option<&SystemItem> {
        self.systems.get(self.list.selected_item())
    }

    pub fn resize(&mut self, _width: u32, height: u32) -> Result<()> {
        self.list
            .measure(height.saturating_sub(TOP_BAR_HEIGHT), self.systems.len())?;
        Ok(())
    }

    fn open_selected(&self) -> Option<ScreenAction> {
        self.selected_system().map(|s| {
            ScreenAction::Navigate(Destination::SystemGames, vec![s.id.to_string()])
        })
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<ScreenAction> {
        if let Some(action) = common_action(event, Some(TopNavDestination::Systems)) {
            return Some(action);
        }
        if let Some(step) = list_scroll_direction(event, Orientation::Vertical) {
            if step != 0 && !self.systems.is_empty() {
                self.list.step(step);
            }
            return None;
        }
        if event.pressed(Key::A) {
            self.open_selected()
        } else if event.pressed(Key::Y) {
            self.selected_system().map(|s| {
                ScreenAction::Navigate(Destination::SystemOptions, vec![s.id.to_string()])
            })
        } else {
            None
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<ScreenAction> {
        if self.systems.is_empty() {
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
                Release::Tap => self.open_selected(),
                Release::Fling => None,
            },
        }
    }
}
