use glam::{Mat4, Vec3};

use crate::coords::{Vec2, Viewport};
use crate::scene::DrawSnapshot;

/// Near/far planes of the overlay camera. Z values outside this range clip.
pub const DEPTH_RANGE: f32 = 10_000.0;

/// Inputs of the shared model matrix.
///
/// Composition order, applied right to left to a unit-mesh vertex:
/// `translate(origin, z) · translate(offset) · rotate_z(rotation) ·
/// translate(-anchor · extent) · scale(scale)`.
///
/// `extent` is the box the anchor fraction refers to. For most kinds it is
/// the scale itself; text anchors against its whole laid-out block.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelTransform {
    pub origin: Vec2,
    pub z: f32,
    pub offset: Vec2,
    pub rotation: f32,
    pub anchor: Vec2,
    pub extent: Vec2,
    pub scale: Vec2,
}

impl ModelTransform {
    /// A unit mesh stretched to `size` at `origin`, with the full captured state.
    pub fn boxed(origin: Vec2, size: Vec2, state: &DrawSnapshot) -> Self {
        Self {
            origin,
            z: state.z.depth(),
            offset: state.translation,
            rotation: state.rotation,
            anchor: state.anchor,
            extent: size,
            scale: size,
        }
    }

    /// Absolute-coordinate geometry: only translation and rotation apply.
    pub fn absolute(state: &DrawSnapshot, rotation: f32) -> Self {
        Self {
            origin: Vec2::zero(),
            z: state.z.depth(),
            offset: state.translation,
            rotation,
            anchor: Vec2::zero(),
            extent: Vec2::zero(),
            scale: Vec2::splat(1.0),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        let pivot = -self.anchor.mul_elem(self.extent);
        Mat4::from_translation(Vec3::new(self.origin.x, self.origin.y, self.z))
            * Mat4::from_translation(Vec3::new(self.offset.x, self.offset.y, 0.0))
            * Mat4::from_rotation_z(self.rotation)
            * Mat4::from_translation(Vec3::new(pivot.x, pivot.y, 0.0))
            * Mat4::from_scale(Vec3::new(self.scale.x, self.scale.y, 1.0))
    }
}

/// Orthographic camera mapping pixels (top-left origin, +Y down)
/// to clip space. Larger model Z ends up at smaller depth.
pub fn projection(viewport: Viewport) -> Mat4 {
    let vp = viewport.at_least_one_px();
    Mat4::orthographic_rh(0.0, vp.width, vp.height, 0.0, -DEPTH_RANGE, DEPTH_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{DrawState, ZIndex};

    fn approx(a: glam::Vec3, b: glam::Vec3) -> bool {
        (a - b).abs().max_element() < 1e-4
    }

    fn snapshot() -> DrawSnapshot {
        DrawState::default().snapshot()
    }

    #[test]
    fn box_maps_unit_corner_to_far_corner() {
        let m = ModelTransform::boxed(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), &snapshot()).matrix();
        let p = m.transform_point3(Vec3::new(1.0, 1.0, 0.0));
        assert!(approx(p, Vec3::new(40.0, 60.0, 1.0)));
    }

    #[test]
    fn anchor_shifts_by_fraction_of_size() {
        let mut st = snapshot();
        st.anchor = Vec2::splat(0.5);
        let m = ModelTransform::boxed(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), &st).matrix();
        let p = m.transform_point3(Vec3::ZERO);
        assert!(approx(p, Vec3::new(-5.0, 0.0, 1.0)));
    }

    #[test]
    fn translation_is_added_after_origin() {
        let mut st = snapshot();
        st.translation = Vec2::new(100.0, 200.0);
        let m = ModelTransform::boxed(Vec2::new(1.0, 2.0), Vec2::splat(1.0), &st).matrix();
        let p = m.transform_point3(Vec3::ZERO);
        assert!(approx(p, Vec3::new(101.0, 202.0, 1.0)));
    }

    #[test]
    fn rotation_pivots_on_anchor() {
        let mut st = snapshot();
        st.anchor = Vec2::splat(0.5);
        st.rotation = std::f32::consts::FRAC_PI_2;
        let m = ModelTransform::boxed(Vec2::new(50.0, 50.0), Vec2::splat(10.0), &st).matrix();
        // The box centre stays put under rotation.
        let c = m.transform_point3(Vec3::new(0.5, 0.5, 0.0));
        assert!(approx(c, Vec3::new(50.0, 50.0, 1.0)));
    }

    #[test]
    fn absolute_ignores_anchor() {
        let mut st = snapshot();
        st.anchor = Vec2::splat(1.0);
        st.translation = Vec2::new(5.0, 0.0);
        let m = ModelTransform::absolute(&st, 0.0).matrix();
        assert!(approx(m.transform_point3(Vec3::new(3.0, 4.0, 0.0)), Vec3::new(8.0, 4.0, 1.0)));
    }

    #[test]
    fn projection_maps_corners_and_depth() {
        let p = projection(Viewport::new(800.0, 600.0));
        assert!(approx(p.project_point3(Vec3::ZERO), Vec3::new(-1.0, 1.0, 0.5)));
        assert!(approx(p.project_point3(Vec3::new(800.0, 600.0, 0.0)), Vec3::new(1.0, -1.0, 0.5)));

        let near = p.project_point3(Vec3::new(0.0, 0.0, ZIndex(2).depth())).z;
        let far = p.project_point3(Vec3::new(0.0, 0.0, ZIndex(1).depth())).z;
        assert!(near < far, "later z must be nearer");
    }
}
