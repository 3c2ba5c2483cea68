use std::time::Duration;

use tracing::debug;

use super::config::ImmersiveListConfig;
use super::physics::{FlingDecay, Spring};
use super::state::ImmersiveListState;
use super::velocity::VelocityTracker;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Layout parameters fixed for the lifetime of a list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImmersiveListParams {
    pub visible_items: usize,
    pub overshoot_items: usize,
    pub selected_item_offset: f32,
    pub item_spacing: f32,
}

impl Default for ImmersiveListParams {
    fn default() -> Self {
        ImmersiveListParams {
            visible_items: 6,
            overshoot_items: 0,
            selected_item_offset: 32.0,
            item_spacing: 16.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Dragging,
    Settling,
}

/// How a pointer gesture ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// The pointer never moved; activate the selected item.
    Tap,
    Fling,
}

/// Where an item goes along the list's main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub index: usize,
    pub offset: i32,
    pub extent: u32,
}

/// A scrolling rail of square items with the selected one anchored at a
/// fixed offset. Pointer drags move it directly; on release it flings and
/// settles on the nearest item.
#[derive(Clone, Debug)]
pub struct ImmersiveList {
    orientation: Orientation,
    params: ImmersiveListParams,
    state: ImmersiveListState,
    tracker: VelocityTracker,
    decay: FlingDecay,
    phase: DragPhase,
    pointer: Option<u64>,
    last_position: f32,
    moved: bool,
    item_extent: u32,
}

impl ImmersiveList {
    pub fn new(orientation: Orientation, params: ImmersiveListParams, density: f32) -> Result<Self> {
        ImmersiveListConfig {
            visible_items: params.visible_items,
            overshoot_items: params.overshoot_items,
            selected_item_offset: params.selected_item_offset,
            item_spacing: params.item_spacing,
            ..ImmersiveListConfig::default()
        }
        .validate()?;

        Ok(ImmersiveList {
            orientation,
            params,
            state: ImmersiveListState::new(),
            tracker: VelocityTracker::new(),
            decay: FlingDecay::new(density),
            phase: DragPhase::Idle,
            pointer: None,
            last_position: 0.0,
            moved: false,
            item_extent: 0,
        })
    }

    /// Continue from a previously saved item position.
    pub fn with_saved_position(mut self, position: f32) -> Self {
        self.state = ImmersiveListState::restore(position);
        self
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn params(&self) -> &ImmersiveListParams {
        &self.params
    }

    pub fn state(&self) -> &ImmersiveListState {
        &self.state
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn selected_item(&self) -> usize {
        self.state.selected_item()
    }

    pub fn item_extent(&self) -> u32 {
        self.item_extent
    }

    /// Lay out `num_items` items along `max_extent` px of main axis.
    pub fn measure(&mut self, max_extent: u32, num_items: usize) -> Result<Vec<Placement>> {
        self.item_extent = max_extent / self.params.visible_items as u32;
        self.state.setup(ImmersiveListConfig {
            content_width: max_extent as f32,
            num_items,
            visible_items: self.params.visible_items,
            overshoot_items: self.params.overshoot_items,
            selected_item_offset: self.params.selected_item_offset,
            item_spacing: self.params.item_spacing,
        })?;
        Ok(self.placements())
    }

    /// Placements of the currently visible items.
    pub fn placements(&self) -> Vec<Placement> {
        match self.state.visible_range() {
            Some(range) => range
                .map(|index| Placement {
                    index,
                    offset: self.state.offset_for(index),
                    extent: self.item_extent,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    fn main_axis(&self, x: f32, y: f32) -> f32 {
        match self.orientation {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }

    /// First contact. Stops any settle animation in flight.
    pub fn pointer_down(&mut self, id: u64, x: f32, y: f32, time_ms: u64) {
        if self.pointer.is_some() {
            return;
        }
        self.state.stop();
        self.tracker.reset();
        self.tracker.add_position(time_ms, x, y);
        self.pointer = Some(id);
        self.last_position = self.main_axis(x, y);
        self.moved = false;
        self.phase = DragPhase::Dragging;
    }

    pub fn pointer_move(&mut self, id: u64, x: f32, y: f32, time_ms: u64) {
        if self.pointer != Some(id) {
            return;
        }
        let position = self.main_axis(x, y);
        let delta = position - self.last_position;
        self.last_position = position;
        self.tracker.add_position(time_ms, x, y);
        if delta != 0.0 {
            self.moved = true;
            self.state.snap_to(self.state.list_offset() + delta);
        }
    }

    /// Pointer lifted: fling from the tracked velocity and settle.
    pub fn pointer_up(&mut self, id: u64, time_ms: u64) -> Option<Release> {
        if self.pointer != Some(id) {
            return None;
        }
        self.pointer = None;

        let (vx, vy) = self.tracker.calculate_velocity();
        let velocity = self.main_axis(vx, vy);
        let target = self.decay.target_value(self.state.list_offset(), velocity);
        debug!(velocity, target, time_ms, "list released");
        self.state.decay_to(velocity, target);
        self.phase = DragPhase::Settling;

        Some(if self.moved { Release::Fling } else { Release::Tap })
    }

    /// Move the selection to `index` with a stiff spring. Ignored while a
    /// pointer is held; returns whether the list moved.
    pub fn select(&mut self, index: usize) -> bool {
        if self.pointer.is_some() {
            return false;
        }
        self.state.animate_to_item(index, Spring::NO_BOUNCY_HIGH);
        self.phase = DragPhase::Settling;
        true
    }

    /// Step the selection by `delta` items, held within the list.
    /// Returns the newly targeted index, or the current selection when a
    /// pointer is held.
    pub fn step(&mut self, delta: i64) -> usize {
        let count = self.state.config().num_items;
        if count == 0 {
            return 0;
        }
        // keep stepping from where a running key animation is headed
        let from = match self.state.target() {
            Some(target) if self.state.stride() > 0.0 => (-target / self.state.stride()).round() as i64,
            _ => self.state.selected_item() as i64,
        };
        let index = (from + delta).clamp(0, count as i64 - 1) as usize;
        if self.select(index) {
            index
        } else {
            self.state.selected_item()
        }
    }

    pub fn select_next(&mut self) -> usize {
        self.step(1)
    }

    pub fn select_previous(&mut self) -> usize {
        self.step(-1)
    }

    /// Advance animations. Returns whether the list is still moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let running = self.state.tick(dt);
        if !running && self.phase == DragPhase::Settling {
            self.phase = DragPhase::Idle;
        }
        running
    }

    /// Back to the first item, dropping any gesture or animation.
    pub fn reset(&mut self) {
        self.state = ImmersiveListState::new();
        self.tracker.reset();
        self.pointer = None;
        self.moved = false;
        self.phase = DragPhase::Idle;
    }

    /// Finish any running animation immediately.
    pub fn settle(&mut self) {
        self.state.settle();
        if self.phase == DragPhase::Settling {
            self.phase = DragPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(orientation: Orientation) -> ImmersiveList {
        let mut l = ImmersiveList::new(orientation, ImmersiveListParams::default(), 1.0).unwrap();
        // 600 px / 6 visible = 100 px items, stride 116
        l.measure(600, 10).unwrap();
        l
    }

    #[test]
    fn rejects_zero_visible_items() {
        let params = ImmersiveListParams {
            visible_items: 0,
            ..ImmersiveListParams::default()
        };
        assert!(ImmersiveList::new(Orientation::Horizontal, params, 1.0).is_err());
    }

    #[test]
    fn measure_places_visible_items() {
        let mut l = ImmersiveList::new(Orientation::Horizontal, ImmersiveListParams::default(), 1.0)
            .unwrap();
        let placements = l.measure(600, 10).unwrap();
        assert_eq!(placements.len(), 7);
        assert_eq!(
            placements[1],
            Placement {
                index: 1,
                offset: 148,
                extent: 100
            }
        );
    }

    #[test]
    fn slow_drag_settles_on_nearest_item() {
        let mut l = list(Orientation::Horizontal);
        l.pointer_down(1, 500.0, 50.0, 0);
        // 200 px to the left over 400 ms
        for i in 1..=20u64 {
            l.pointer_move(1, 500.0 - i as f32 * 10.0, 50.0, i * 20);
        }
        assert_eq!(l.state().list_offset(), -200.0);
        assert_eq!(l.pointer_up(1, 500), Some(Release::Fling));
        assert_eq!(l.phase(), DragPhase::Settling);
        l.settle();
        assert_eq!(l.phase(), DragPhase::Idle);
        assert_eq!(l.state().list_offset(), -232.0);
        assert_eq!(l.selected_item(), 2);
    }

    #[test]
    fn fast_fling_travels_further_than_the_drag() {
        let mut l = list(Orientation::Horizontal);
        l.pointer_down(1, 500.0, 0.0, 0);
        for i in 1..=5u64 {
            l.pointer_move(1, 500.0 - i as f32 * 30.0, 0.0, i * 10);
        }
        l.pointer_up(1, 50);
        l.settle();
        assert!(l.selected_item() > 2, "selected {}", l.selected_item());
    }

    #[test]
    fn vertical_lists_follow_y() {
        let mut l = list(Orientation::Vertical);
        l.pointer_down(7, 0.0, 300.0, 0);
        l.pointer_move(7, 250.0, 300.0, 16);
        assert_eq!(l.state().list_offset(), 0.0);
        l.pointer_move(7, 250.0, 180.0, 32);
        assert_eq!(l.state().list_offset(), -120.0);
    }

    #[test]
    fn tap_reports_tap() {
        let mut l = list(Orientation::Horizontal);
        l.pointer_down(3, 10.0, 10.0, 0);
        assert_eq!(l.pointer_up(3, 80), Some(Release::Tap));
    }

    #[test]
    fn other_pointers_are_ignored() {
        let mut l = list(Orientation::Horizontal);
        l.pointer_down(1, 300.0, 0.0, 0);
        l.pointer_down(2, 0.0, 0.0, 5);
        l.pointer_move(2, 100.0, 0.0, 10);
        assert_eq!(l.state().list_offset(), 0.0);
        assert_eq!(l.pointer_up(2, 20), None);
        assert_eq!(l.phase(), DragPhase::Dragging);
    }

    #[test]
    fn new_drag_cancels_settle() {
        let mut l = list(Orientation::Horizontal);
        l.select(5);
        l.tick(Duration::from_millis(8));
        let caught = l.state().list_offset();
        l.pointer_down(1, 0.0, 0.0, 100);
        assert!(!l.state().is_animating());
        l.tick(Duration::from_millis(100));
        assert_eq!(l.state().list_offset(), caught);
    }

    #[test]
    fn key_steps_are_clamped_and_chain() {
        let mut l = list(Orientation::Horizontal);
        assert_eq!(l.select_previous(), 0);
        assert_eq!(l.select_next(), 1);
        // a second press before the first settles keeps going
        assert_eq!(l.select_next(), 2);
        l.settle();
        assert_eq!(l.selected_item(), 2);
        for _ in 0..20 {
            l.select_next();
        }
        l.settle();
        assert_eq!(l.selected_item(), 9);
    }

    #[test]
    fn keys_are_ignored_while_a_pointer_is_held() {
        let mut l = list(Orientation::Horizontal);
        l.step(2);
        l.settle();
        l.pointer_down(1, 300.0, 0.0, 0);
        assert!(!l.select(6));
        assert_eq!(l.step(3), 2);
        assert_eq!(l.select_previous(), 2);
        assert!(!l.state().is_animating());
    }

    #[test]
    fn saved_position_is_restored() {
        let l = ImmersiveList::new(Orientation::Horizontal, ImmersiveListParams::default(), 1.0)
            .unwrap()
            .with_saved_position(4.0);
        let mut l = l;
        l.measure(600, 10).unwrap();
        assert_eq!(l.selected_item(), 4);
    }
}
