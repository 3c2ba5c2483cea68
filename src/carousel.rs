//! Per-item visuals for an immersive rail: items fade and shrink as they
//! move away from the selection anchor.

const MIN_ALPHA: f32 = 0.5;
const MAX_SCALE: f32 = 1.2;

pub fn lerp(start: f32, stop: f32, fraction: f32) -> f32 {
    start + (stop - start) * fraction
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemVisual {
    pub alpha: f32,
    pub scale: f32,
}

/// Visual of item `index` when the list sits at fractional `position`.
pub fn item_visual(position: f32, index: usize) -> ItemVisual {
    let distance = if position.is_finite() {
        (position - index as f32).abs().clamp(0.0, 1.0)
    } else {
        1.0
    };
    let closeness = 1.0 - distance;
    ItemVisual {
        alpha: lerp(MIN_ALPHA, 1.0, closeness),
        scale: lerp(1.0, MAX_SCALE, closeness),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_item_is_opaque_and_enlarged() {
        let v = item_visual(3.0, 3);
        assert_eq!(v, ItemVisual { alpha: 1.0, scale: 1.2 });
    }

    #[test]
    fn far_items_are_dimmed() {
        assert_eq!(item_visual(0.0, 4), ItemVisual { alpha: 0.5, scale: 1.0 });
        assert_eq!(item_visual(f32::NAN, 0), ItemVisual { alpha: 0.5, scale: 1.0 });
    }

    #[test]
    fn halfway_is_interpolated() {
        let v = item_visual(1.5, 1);
        assert!((v.alpha - 0.75).abs() < 1e-6);
        assert!((v.scale - 1.1).abs() < 1e-6);
    }
}
