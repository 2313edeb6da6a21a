use crate::coords::Vec2;
use crate::paint::Color;

use super::ZIndex;

/// Which fields of [`DrawState`] return to their defaults after a flush.
///
/// The default table resets color, rotation, anchor and the z counter but
/// leaves translation and the fill flag alone, so a translation set once
/// keeps applying to every following frame until changed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ResetPolicy {
    pub color: bool,
    pub rotation: bool,
    pub anchor: bool,
    pub z_order: bool,
    pub translation: bool,
    pub fill_mode: bool,
}

impl Default for ResetPolicy {
    fn default() -> Self {
        Self {
            color: true,
            rotation: true,
            anchor: true,
            z_order: true,
            translation: false,
            fill_mode: false,
        }
    }
}

impl ResetPolicy {
    /// Resets every field, translation included.
    pub const fn all() -> Self {
        Self {
            color: true,
            rotation: true,
            anchor: true,
            z_order: true,
            translation: true,
            fill_mode: true,
        }
    }
}

/// The "current" drawing state captured by every enqueued primitive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawState {
    pub color: Color,
    /// Radians, counter-clockwise in the projection's Y-down space.
    pub rotation: f32,
    pub translation: Vec2,
    /// Pivot as a fraction of the primitive's own size.
    pub anchor: Vec2,
    /// Last z value handed out this frame.
    pub z: ZIndex,
    pub fill: bool,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            rotation: 0.0,
            translation: Vec2::zero(),
            anchor: Vec2::zero(),
            z: ZIndex::default(),
            fill: true,
        }
    }
}

/// Value copy of [`DrawState`] stored inside each primitive record.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawSnapshot {
    pub color: Color,
    pub rotation: f32,
    pub translation: Vec2,
    pub anchor: Vec2,
    pub z: ZIndex,
    pub fill: bool,
}

impl DrawState {
    /// Advances the z counter, then copies the state.
    #[inline]
    pub fn snapshot(&mut self) -> DrawSnapshot {
        self.z = self.z.next();
        DrawSnapshot {
            color: self.color,
            rotation: self.rotation,
            translation: self.translation,
            anchor: self.anchor,
            z: self.z,
            fill: self.fill,
        }
    }

    pub fn reset_after_flush(&mut self, policy: &ResetPolicy) {
        let defaults = DrawState::default();
        if policy.color {
            self.color = defaults.color;
        }
        if policy.rotation {
            self.rotation = defaults.rotation;
        }
        if policy.anchor {
            self.anchor = defaults.anchor;
        }
        if policy.z_order {
            self.z = defaults.z;
        }
        if policy.translation {
            self.translation = defaults.translation;
        }
        if policy.fill_mode {
            self.fill = defaults.fill;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_increments_before_copy() {
        let mut s = DrawState::default();
        assert_eq!(s.snapshot().z, ZIndex(1));
        assert_eq!(s.snapshot().z, ZIndex(2));
        assert_eq!(s.z, ZIndex(2));
    }

    #[test]
    fn default_policy_keeps_translation() {
        let mut s = DrawState {
            color: Color::new(0.1, 0.2, 0.3, 0.4),
            rotation: 1.0,
            translation: Vec2::new(5.0, 6.0),
            anchor: Vec2::splat(0.5),
            z: ZIndex(9),
            fill: false,
        };
        s.reset_after_flush(&ResetPolicy::default());

        assert_eq!(s.color, Color::WHITE);
        assert_eq!(s.rotation, 0.0);
        assert_eq!(s.anchor, Vec2::zero());
        assert_eq!(s.z, ZIndex(0));
        assert_eq!(s.translation, Vec2::new(5.0, 6.0));
        assert!(!s.fill);
    }

    #[test]
    fn full_policy_resets_everything() {
        let mut s = DrawState { translation: Vec2::new(1.0, 1.0), fill: false, ..DrawState::default() };
        s.reset_after_flush(&ResetPolicy::all());
        assert_eq!(s, DrawState::default());
    }
}
