use std::ops::RangeInclusive;
use std::time::Duration;

use tracing::trace;

use super::config::ImmersiveListConfig;
use super::physics::Spring;
use crate::error::Result;

const REST_DISPLACEMENT: f32 = 0.01;
const REST_VELOCITY: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
struct Animation {
    target: f32,
    spring: Spring,
}

/// Scroll position and selection of an immersive list.
///
/// The offset is 0 when the first item is selected and grows negative as the
/// list scrolls forward. Items are `stride` apart, where the stride is the
/// item width plus the spacing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImmersiveListState {
    config: ImmersiveListConfig,
    item_width: f32,
    offset: f32,
    velocity: f32,
    animation: Option<Animation>,
    // item position waiting for the first non-empty layout
    restored: Option<f32>,
}

impl ImmersiveListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recreate a list that was at item `position` before it went away.
    ///
    /// The offset is rebuilt on the first layout that has items, from
    /// whatever stride that layout has.
    pub fn restore(position: f32) -> Self {
        ImmersiveListState {
            restored: Some(if position.is_finite() { position.max(0.0) } else { 0.0 }),
            ..Self::default()
        }
    }

    /// Position in items that `restore` takes back: where a running
    /// animation is headed, else where the list is.
    pub fn saved_position(&self) -> f32 {
        if let Some(position) = self.restored {
            return position;
        }
        let stride = self.stride();
        if stride <= 0.0 {
            return 0.0;
        }
        -self.target().unwrap_or(self.offset) / stride
    }

    /// Apply new layout geometry.
    ///
    /// When the stride changes the offset is rescaled so the same item stays
    /// under the selection anchor. A restored position lands on the nearest
    /// whole item.
    pub fn setup(&mut self, config: ImmersiveListConfig) -> Result<()> {
        config.validate()?;
        let old_stride = self.stride();
        self.config = config;
        self.item_width = config.content_width / config.visible_items as f32;
        let new_stride = self.stride();

        if let Some(position) = self.restored {
            if new_stride > 0.0 && config.num_items > 0 {
                self.restored = None;
                let index = position.round().min(self.max_index() as f32);
                self.offset = -index * new_stride;
                self.velocity = 0.0;
                self.animation = None;
            }
        } else if old_stride > 0.0 && new_stride > 0.0 && old_stride != new_stride {
            let scale = new_stride / old_stride;
            self.offset *= scale;
            self.velocity *= scale;
            if let Some(anim) = self.animation.as_mut() {
                anim.target *= scale;
            }
        }
        self.offset = self.offset.clamp(self.min_overshoot(), self.max_overshoot());
        Ok(())
    }

    pub fn config(&self) -> &ImmersiveListConfig {
        &self.config
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn stride(&self) -> f32 {
        self.item_width + self.config.item_spacing
    }

    pub fn list_offset(&self) -> f32 {
        self.offset
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    fn max_index(&self) -> usize {
        self.config.num_items.saturating_sub(1)
    }

    /// Offset at which the last item is selected.
    pub fn min_offset(&self) -> f32 {
        -(self.max_index() as f32) * self.stride()
    }

    fn min_overshoot(&self) -> f32 {
        -((self.max_index() + self.config.overshoot_items) as f32) * self.stride()
    }

    fn max_overshoot(&self) -> f32 {
        self.config.overshoot_items as f32 * self.stride()
    }

    // whole items scrolled past the selection anchor, truncated towards zero
    fn scrolled_items(&self) -> i64 {
        let stride = self.stride();
        if stride <= 0.0 {
            return 0;
        }
        ((-self.offset - self.config.selected_item_offset) / stride).trunc() as i64
    }

    pub fn first_visible_item(&self) -> usize {
        self.scrolled_items().max(0) as usize
    }

    pub fn last_visible_item(&self) -> usize {
        (self.scrolled_items() + self.config.visible_items as i64)
            .clamp(0, self.max_index() as i64) as usize
    }

    /// Items that intersect the viewport, if any.
    pub fn visible_range(&self) -> Option<RangeInclusive<usize>> {
        if self.config.num_items == 0 {
            return None;
        }
        let scrolled = self.scrolled_items();
        let first = scrolled.max(0);
        let last = (scrolled + self.config.visible_items as i64).min(self.max_index() as i64);
        (first <= last).then(|| first as usize..=last as usize)
    }

    /// Item under the selection anchor. Past the half-way point between two
    /// items the next one is selected.
    pub fn selected_item(&self) -> usize {
        let stride = self.stride();
        if stride <= 0.0 {
            return 0;
        }
        ((-self.offset / stride) + 0.5)
            .trunc()
            .clamp(0.0, self.max_index() as f32) as usize
    }

    /// Scroll position in items; fractional while moving.
    pub fn fractional_position(&self) -> f32 {
        let stride = self.stride();
        if stride <= 0.0 {
            0.0
        } else {
            -self.offset / stride
        }
    }

    /// Jump to `value`, held within the overshoot bounds. Cancels any
    /// running animation.
    pub fn snap_to(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        self.animation = None;
        self.velocity = 0.0;
        self.offset = value.clamp(self.min_overshoot(), self.max_overshoot());
    }

    /// Settle on the item nearest to `value` with an initial `velocity`.
    ///
    /// `value` is first held inside the list. Exactly half-way between two
    /// items settles back on the earlier one.
    pub fn decay_to(&mut self, velocity: f32, value: f32) {
        let stride = self.stride();
        let target = if stride <= 0.0 || value.is_nan() {
            0.0
        } else {
            let constrained = value.clamp(self.min_offset(), 0.0).abs();
            let items = constrained / stride;
            let whole = items.trunc();
            let extra = if items - whole <= 0.5 { 0.0 } else { 1.0 };
            -((whole + extra) * stride)
        };
        trace!(from = self.offset, target, velocity, "list decay");
        self.velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self.animation = Some(Animation {
            target,
            spring: Spring::NO_BOUNCY_LOW,
        });
    }

    /// Animate so that `index` ends up selected.
    pub fn animate_to_item(&mut self, index: usize, spring: Spring) {
        let index = index.min(self.max_index());
        self.animation = Some(Animation {
            target: -(index as f32 * self.stride()),
            spring,
        });
    }

    /// Cancel any animation, keeping the current offset.
    pub fn stop(&mut self) {
        self.animation = None;
        self.velocity = 0.0;
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset the running animation heads for.
    pub fn target(&self) -> Option<f32> {
        self.animation.map(|a| a.target)
    }

    /// Main-axis position of item `index`, in whole pixels.
    pub fn offset_for(&self, index: usize) -> i32 {
        (self.offset + self.config.selected_item_offset + index as f32 * self.stride()).round() as i32
    }

    /// Advance the animation by `dt`. Returns whether it is still running.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let anim = match self.animation {
            Some(a) => a,
            None => return false,
        };
        let (displacement, velocity) =
            anim.spring
                .advance(self.offset - anim.target, self.velocity, dt.as_secs_f32());
        if displacement.abs() < REST_DISPLACEMENT && velocity.abs() < REST_VELOCITY {
            self.offset = anim.target;
            self.velocity = 0.0;
            self.animation = None;
            false
        } else {
            self.offset = anim.target + displacement;
            self.velocity = velocity;
            true
        }
    }

    /// Run the animation to completion.
    pub fn settle(&mut self) {
        let step = Duration::from_millis(16);
        // ten simulated seconds is far beyond any spring in use
        for _ in 0..625 {
            if !self.tick(step) {
                return;
            }
        }
        if let Some(anim) = self.animation.take() {
            self.offset = anim.target;
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 6 visible items over 600 px: items are 100 px wide, stride 116 px
    fn state(num_items: usize, overshoot_items: usize) -> ImmersiveListState {
        let mut s = ImmersiveListState::new();
        s.setup(ImmersiveListConfig {
            content_width: 600.0,
            num_items,
            visible_items: 6,
            overshoot_items,
            selected_item_offset: 32.0,
            item_spacing: 16.0,
        })
        .unwrap();
        s
    }

    #[test]
    fn geometry_follows_config() {
        let s = state(10, 0);
        assert_eq!(s.item_width(), 100.0);
        assert_eq!(s.stride(), 116.0);
        assert_eq!(s.min_offset(), -9.0 * 116.0);
    }

    #[test]
    fn visible_window_at_rest() {
        let s = state(10, 0);
        assert_eq!(s.first_visible_item(), 0);
        assert_eq!(s.last_visible_item(), 6);
        assert_eq!(s.visible_range(), Some(0..=6));
        assert_eq!(s.offset_for(0), 32);
        assert_eq!(s.offset_for(2), 32 + 232);
    }

    #[test]
    fn visible_window_near_the_end() {
        let mut s = state(10, 0);
        s.snap_to(-8.0 * 116.0);
        assert_eq!(s.first_visible_item(), 7);
        assert_eq!(s.last_visible_item(), 9);
        assert_eq!(s.selected_item(), 8);
    }

    #[test]
    fn selection_rounds_half_way_up() {
        let mut s = state(10, 0);
        s.snap_to(-0.5 * 116.0);
        assert_eq!(s.selected_item(), 1);
        s.snap_to(-0.49 * 116.0);
        assert_eq!(s.selected_item(), 0);
    }

    #[test]
    fn settling_rounds_half_way_down() {
        let mut s = state(10, 0);
        s.decay_to(0.0, -2.5 * 116.0);
        assert_eq!(s.target(), Some(-2.0 * 116.0));
        s.decay_to(0.0, -2.51 * 116.0);
        assert_eq!(s.target(), Some(-3.0 * 116.0));
    }

    #[test]
    fn snap_is_held_within_overshoot() {
        let mut s = state(10, 1);
        s.snap_to(1000.0);
        assert_eq!(s.list_offset(), 116.0);
        s.snap_to(-100_000.0);
        assert_eq!(s.list_offset(), -10.0 * 116.0);

        let mut tight = state(10, 0);
        tight.snap_to(50.0);
        assert_eq!(tight.list_offset(), 0.0);
    }

    #[test]
    fn decay_target_is_held_inside_the_list() {
        let mut s = state(10, 2);
        s.decay_to(-3000.0, -50_000.0);
        assert_eq!(s.target(), Some(s.min_offset()));
        s.decay_to(3000.0, 800.0);
        assert_eq!(s.target(), Some(0.0));
    }

    #[test]
    fn settle_lands_exactly_on_target() {
        let mut s = state(10, 0);
        s.snap_to(-150.0);
        s.decay_to(-400.0, -300.0);
        let target = s.target().unwrap();
        s.settle();
        assert!(!s.is_animating());
        assert_eq!(s.list_offset(), target);
        assert_eq!(s.selected_item(), 3);
    }

    #[test]
    fn stop_freezes_in_place() {
        let mut s = state(10, 0);
        s.animate_to_item(5, Spring::NO_BOUNCY_LOW);
        s.tick(Duration::from_millis(50));
        let mid = s.list_offset();
        assert!(mid < 0.0 && mid > -5.0 * 116.0);
        s.stop();
        assert!(!s.tick(Duration::from_millis(50)));
        assert_eq!(s.list_offset(), mid);
    }

    #[test]
    fn animate_to_item_clamps_index() {
        let mut s = state(4, 0);
        s.animate_to_item(99, Spring::NO_BOUNCY_HIGH);
        s.settle();
        assert_eq!(s.selected_item(), 3);
    }

    #[test]
    fn empty_list_is_inert() {
        let mut s = state(0, 0);
        assert_eq!(s.visible_range(), None);
        assert_eq!(s.selected_item(), 0);
        s.snap_to(-500.0);
        assert_eq!(s.list_offset(), 0.0);
        s.decay_to(-100.0, -500.0);
        s.settle();
        assert_eq!(s.list_offset(), 0.0);
    }

    #[test]
    fn before_layout_nothing_divides_by_zero() {
        let mut s = ImmersiveListState::restore(2.0);
        assert_eq!(s.selected_item(), 0);
        assert_eq!(s.first_visible_item(), 0);
        assert_eq!(s.fractional_position(), 0.0);
        s.decay_to(0.0, -200.0);
        assert_eq!(s.target(), Some(0.0));
    }

    fn layout(width: f32, num_items: usize) -> ImmersiveListConfig {
        ImmersiveListConfig {
            content_width: width,
            num_items,
            visible_items: 6,
            overshoot_items: 0,
            selected_item_offset: 32.0,
            item_spacing: 16.0,
        }
    }

    #[test]
    fn restored_position_survives_first_layout() {
        let mut s = ImmersiveListState::restore(3.0);
        assert_eq!(s.saved_position(), 3.0);
        s.setup(layout(600.0, 10)).unwrap();
        assert_eq!(s.selected_item(), 3);
        assert_eq!(s.list_offset(), -348.0);
        assert_eq!(s.saved_position(), 3.0);
    }

    #[test]
    fn restored_position_uses_the_new_stride() {
        let mut s = state(10, 0);
        s.animate_to_item(4, Spring::NO_BOUNCY_HIGH);
        let saved = s.saved_position();
        assert_eq!(saved, 4.0);

        let mut s = ImmersiveListState::restore(saved);
        s.setup(layout(1200.0, 10)).unwrap();
        assert_eq!(s.stride(), 216.0);
        assert_eq!(s.selected_item(), 4);
        assert_eq!(s.list_offset(), -4.0 * 216.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn restored_position_rests_on_an_item() {
        let mut s = ImmersiveListState::restore(1.6);
        s.setup(layout(1200.0, 10)).unwrap();
        assert_eq!(s.list_offset(), -2.0 * 216.0);

        let mut s = ImmersiveListState::restore(40.0);
        s.setup(layout(600.0, 5)).unwrap();
        assert_eq!(s.selected_item(), 4);
        assert_eq!(s.list_offset(), s.min_offset());
    }

    #[test]
    fn restored_position_waits_for_items() {
        let mut s = ImmersiveListState::restore(2.0);
        s.setup(layout(600.0, 0)).unwrap();
        assert_eq!(s.list_offset(), 0.0);
        s.setup(layout(600.0, 10)).unwrap();
        assert_eq!(s.selected_item(), 2);
        assert_eq!(s.list_offset(), -232.0);
    }

    #[test]
    fn resize_keeps_the_selected_item() {
        let mut s = state(10, 0);
        s.snap_to(-4.0 * 116.0);
        let mut wider = *s.config();
        wider.content_width = 1200.0;
        s.setup(wider).unwrap();
        assert_eq!(s.stride(), 216.0);
        assert_eq!(s.selected_item(), 4);
        assert!((s.list_offset() + 4.0 * 216.0).abs() < 1e-2);
    }

    #[test]
    fn setup_rejects_invalid_config() {
        let mut s = ImmersiveListState::new();
        assert!(s
            .setup(ImmersiveListConfig {
                visible_items: 0,
                ..ImmersiveListConfig::default()
            })
            .is_err());
    }
}
