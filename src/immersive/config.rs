use crate::error::{FrontendError, Result};

/// Geometry of an immersive list, refreshed on every layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImmersiveListConfig {
    /// Main-axis extent occupied by the list.
    pub content_width: f32,
    pub num_items: usize,
    /// Number of items that fit in `content_width`.
    pub visible_items: usize,
    /// Items that may be dragged past either end before the drag stops.
    pub overshoot_items: usize,
    /// Leading padding; also where the selected item sits at rest.
    pub selected_item_offset: f32,
    pub item_spacing: f32,
}

impl ImmersiveListConfig {
    pub fn validate(&self) -> Result<()> {
        if self.visible_items == 0 {
            return Err(FrontendError::InvalidListConfig(
                "number of visible items must be positive",
            ));
        }
        if !(self.selected_item_offset >= 0.0) {
            return Err(FrontendError::InvalidListConfig(
                "selected item offset must be non-negative",
            ));
        }
        if !(self.item_spacing >= 0.0) {
            return Err(FrontendError::InvalidListConfig(
                "item spacing must be non-negative",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ImmersiveListConfig;

    fn valid() -> ImmersiveListConfig {
        ImmersiveListConfig {
            content_width: 600.0,
            num_items: 10,
            visible_items: 6,
            overshoot_items: 0,
            selected_item_offset: 32.0,
            item_spacing: 16.0,
        }
    }

    #[test]
    fn accepts_valid_geometry() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn rejects_bad_geometry() {
        let mut c = valid();
        c.visible_items = 0;
        assert!(c.validate().is_err());

        let mut c = valid();
        c.selected_item_offset = -1.0;
        assert!(c.validate().is_err());

        let mut c = valid();
        c.item_spacing = f32::NAN;
        assert!(c.validate().is_err());
    }
}
