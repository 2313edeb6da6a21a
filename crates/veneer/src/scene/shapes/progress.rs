use crate::scene::{Canvas, Primitive};

use super::RectCmd;

/// Direction a progress bar fills towards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ProgressDirection {
    Left,
    #[default]
    Right,
    Top,
    Bottom,
    /// Grows horizontally from the anchor without an origin shift.
    Center,
}

/// Fill size factors and origin shift for one bar, in units of the bar size.
#[derive(Debug, Copy, Clone, PartialEq)]
struct FillGeometry {
    fw: f32,
    fh: f32,
    shift_x: f32,
    shift_y: f32,
}

fn fill_geometry(
    direction: ProgressDirection,
    value: f32,
    max: f32,
    width: f32,
    height: f32,
    anchor_x: f32,
    anchor_y: f32,
) -> FillGeometry {
    let factor = if max > 0.0 && !value.is_nan() {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let (fw, fh) = match direction {
        ProgressDirection::Right | ProgressDirection::Center => (factor, 1.0),
        ProgressDirection::Left => (-factor, 1.0),
        ProgressDirection::Top => (1.0, factor),
        ProgressDirection::Bottom => (1.0, -factor),
    };

    let (shift_x, shift_y) = match direction {
        ProgressDirection::Right | ProgressDirection::Bottom => {
            (width * (anchor_x - fw / 2.0), height * (anchor_y - fh / 2.0))
        }
        ProgressDirection::Left => (width * (-anchor_x - fw / 2.0), height * (anchor_y - fh / 2.0)),
        ProgressDirection::Top => (width * (anchor_x - fw / 2.0), height * (-anchor_y + fh / 2.0)),
        ProgressDirection::Center => (0.0, 0.0),
    };

    FillGeometry { fw, fh, shift_x, shift_y }
}

impl Canvas {
    /// Queues a two-rect progress bar: a track in the current color with
    /// every channel halved, then the fill scaled by `value / max`.
    ///
    /// Both rects ignore the current rotation. `max <= 0` draws an empty fill.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_progress_bar(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        value: f32,
        max: f32,
        direction: ProgressDirection,
    ) {
        let anchor = self.state().anchor;
        let g = fill_geometry(direction, value, max, width, height, anchor.x, anchor.y);

        let mut track = self.snapshot();
        track.color = track.color.halved();
        track.rotation = 0.0;
        self.push(Primitive::Rect(RectCmd { x, y, width, height, state: track }));

        let mut fill = self.snapshot();
        fill.rotation = 0.0;
        self.push(Primitive::Rect(RectCmd {
            x: x - g.shift_x,
            y: y - g.shift_y,
            width: g.fw * width,
            height: g.fh * height,
            state: fill,
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::{PrimitiveKind, ZIndex};

    fn fill_of(c: &Canvas) -> RectCmd {
        match &c.buffers().of_kind(PrimitiveKind::Rect)[1] {
            Primitive::Rect(r) => r.clone(),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn full_bar_has_unit_width_factor() {
        let mut c = Canvas::new();
        c.draw_progress_bar(0.0, 0.0, 200.0, 10.0, 50.0, 50.0, ProgressDirection::Right);
        assert_eq!(c.buffers().of_kind(PrimitiveKind::Rect).len(), 2);
        assert_eq!(fill_of(&c).width / 200.0, 1.0);
    }

    #[test]
    fn empty_bar_has_zero_width() {
        let mut c = Canvas::new();
        c.draw_progress_bar(0.0, 0.0, 200.0, 10.0, 0.0, 50.0, ProgressDirection::Right);
        assert_eq!(fill_of(&c).width, 0.0);
    }

    #[test]
    fn value_is_clamped() {
        let g = fill_geometry(ProgressDirection::Right, 300.0, 100.0, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(g.fw, 1.0);
        let g = fill_geometry(ProgressDirection::Right, -5.0, 100.0, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(g.fw, 0.0);
    }

    #[test]
    fn infinite_value_clamps_and_nan_is_empty() {
        let g = fill_geometry(ProgressDirection::Right, f32::INFINITY, 100.0, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(g.fw, 1.0);
        let g = fill_geometry(ProgressDirection::Right, f32::NEG_INFINITY, 100.0, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(g.fw, 0.0);
        let g = fill_geometry(ProgressDirection::Top, f32::NAN, 100.0, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(g.fh, 0.0);
    }

    #[test]
    fn non_positive_max_gives_empty_fill() {
        let g = fill_geometry(ProgressDirection::Top, 1.0, 0.0, 1.0, 1.0, 0.0, 0.0);
        assert_eq!(g.fh, 0.0);
    }

    #[test]
    fn left_and_bottom_grow_negatively() {
        let g = fill_geometry(ProgressDirection::Left, 1.0, 2.0, 100.0, 10.0, 0.0, 0.0);
        assert_eq!((g.fw, g.fh), (-0.5, 1.0));
        assert_eq!(g.shift_x, 25.0);

        let g = fill_geometry(ProgressDirection::Bottom, 1.0, 4.0, 100.0, 10.0, 0.0, 0.0);
        assert_eq!((g.fw, g.fh), (1.0, -0.25));
        assert_eq!(g.shift_y, 1.25);
    }

    #[test]
    fn center_has_no_shift() {
        let g = fill_geometry(ProgressDirection::Center, 1.0, 2.0, 100.0, 10.0, 0.5, 0.5);
        assert_eq!((g.shift_x, g.shift_y), (0.0, 0.0));
        assert_eq!(g.fw, 0.5);
    }

    #[test]
    fn track_is_halved_and_unrotated() {
        let mut c = Canvas::new();
        c.set_color(200, 100, 50, 255);
        c.rotate_deg(45.0);
        c.draw_progress_bar(0.0, 0.0, 10.0, 10.0, 1.0, 1.0, ProgressDirection::Right);

        let rects = c.buffers().of_kind(PrimitiveKind::Rect);
        let (track, fill) = (rects[0].state(), rects[1].state());
        assert_eq!(track.color, Color::from_rgba8(200, 100, 50, 255).halved());
        assert_eq!(track.rotation, 0.0);
        assert_eq!(fill.rotation, 0.0);
        assert_eq!((track.z, fill.z), (ZIndex(1), ZIndex(2)));
        // Current rotation itself is untouched.
        assert!(c.state().rotation > 0.0);
    }
}
