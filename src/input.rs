//! Pointer input normalization.
//!
//! The engine consumes cursor position normalized to `[-1, 1]` on each
//! axis, +x right and +y up. Hosts feed raw window-pixel coordinates
//! through [`normalize_pointer`] and hand the result to the engine via
//! [`EngineCommand::PointerMoved`](crate::engine::EngineCommand).

use glam::Vec2;

/// Normalize window-pixel coordinates to `[-1, 1]²`.
///
/// `(0, 0)` is the window's top-left corner. The y axis is flipped so +1 is
/// the top of the window. Degenerate window sizes yield the center.
pub fn normalize_pointer(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (x / width) * 2.0 - 1.0,
        -((y / height) * 2.0 - 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_maps_to_origin() {
        let p = normalize_pointer(400.0, 300.0, 800.0, 600.0);
        assert!(p.length() < 1e-6);
    }

    #[test]
    fn corners_map_to_unit_square() {
        assert_eq!(
            normalize_pointer(0.0, 0.0, 800.0, 600.0),
            Vec2::new(-1.0, 1.0)
        );
        assert_eq!(
            normalize_pointer(800.0, 600.0, 800.0, 600.0),
            Vec2::new(1.0, -1.0)
        );
    }

    #[test]
    fn zero_sized_window_is_safe() {
        assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 0.0), Vec2::ZERO);
    }
}
