//! Presentation-timing helpers for the intro and outro screens.
//!
//! The engine does not render overlays, but their timing is part of the
//! reproducible behavior: the intro is three full-screen images crossfaded
//! on the intro sub-clock, the outro is TV static that desaturates toward
//! green. Everything here is a pure function of a sub-clock reading.

use rand::Rng;

use crate::phase::{INTRO_MIDDLE_END, INTRO_SHOW_END, OUTRO_WHITE_END};

/// How much the red/blue channels are reduced at full green tint.
const TINT_DEPTH: f32 = 0.7;
/// Seconds the green tint takes to complete once it starts.
const TINT_RAMP: f64 = 2.0;

/// Opacities of the three intro images for an intro sub-clock reading.
///
/// Each boundary is a one-second linear crossfade: image A holds until 2 s
/// then fades out, image B fades in over [2, 3] and out over [4, 5],
/// image C fades in over [4, 5] and holds to the end of the intro.
pub fn intro_image_opacities(elapsed: f64) -> [f32; 3] {
    let e = elapsed as f32;
    let show_end = INTRO_SHOW_END as f32;
    let middle_end = INTRO_MIDDLE_END as f32;

    let a = (1.0 - (e - show_end).max(0.0)).clamp(0.0, 1.0);
    let b = (e - show_end)
        .clamp(0.0, 1.0)
        .min((1.0 - (e - middle_end).max(0.0)).clamp(0.0, 1.0));
    let c = (e - middle_end).clamp(0.0, 1.0);
    [a, b, c]
}

/// Green-tint progress for an outro sub-clock reading: 0 during the white
/// static, ramping to 1 over the two seconds after [`OUTRO_WHITE_END`].
pub fn outro_tint_progress(elapsed: f64) -> f32 {
    (((elapsed - OUTRO_WHITE_END) / TINT_RAMP).clamp(0.0, 1.0)) as f32
}

/// Fill an RGBA buffer with one frame of TV static.
///
/// Each pixel is a random gray; `tint_progress` of 0 leaves it white, 1
/// fully desaturates the red/blue channels toward green. The buffer length
/// must be a multiple of 4 (trailing bytes are left untouched).
pub fn fill_static_noise<R: Rng>(
    rng: &mut R,
    rgba: &mut [u8],
    tint_progress: f32,
) {
    let keep = 1.0 - tint_progress.clamp(0.0, 1.0) * TINT_DEPTH;
    for px in rgba.chunks_exact_mut(4) {
        let gray = rng.random::<u8>();
        let dimmed = (f32::from(gray) * keep) as u8;
        px[0] = dimmed;
        px[1] = gray;
        px[2] = dimmed;
        px[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn first_image_holds_then_fades() {
        assert_eq!(intro_image_opacities(0.0)[0], 1.0);
        assert_eq!(intro_image_opacities(1.9)[0], 1.0);
        let mid = intro_image_opacities(2.5)[0];
        assert!(mid > 0.0 && mid < 1.0);
        assert_eq!(intro_image_opacities(3.0)[0], 0.0);
    }

    #[test]
    fn middle_image_ramps_in_and_out() {
        assert_eq!(intro_image_opacities(1.0)[1], 0.0);
        assert!((intro_image_opacities(2.5)[1] - 0.5).abs() < 1e-6);
        assert_eq!(intro_image_opacities(3.5)[1], 1.0);
        assert!((intro_image_opacities(4.5)[1] - 0.5).abs() < 1e-6);
        assert_eq!(intro_image_opacities(5.0)[1], 0.0);
    }

    #[test]
    fn final_image_ramps_in_and_holds() {
        assert_eq!(intro_image_opacities(3.9)[2], 0.0);
        assert!((intro_image_opacities(4.5)[2] - 0.5).abs() < 1e-6);
        assert_eq!(intro_image_opacities(5.5)[2], 1.0);
        assert_eq!(intro_image_opacities(6.0)[2], 1.0);
    }

    #[test]
    fn crossfades_overlap_at_boundaries() {
        // During each crossfade the two images sum to full opacity.
        let [a, b, _] = intro_image_opacities(2.3);
        assert!((a + b - 1.0).abs() < 1e-6);
        let [_, b, c] = intro_image_opacities(4.7);
        assert!((b + c - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tint_progress_follows_outro_clock() {
        assert_eq!(outro_tint_progress(0.0), 0.0);
        assert_eq!(outro_tint_progress(0.5), 0.0);
        assert!((outro_tint_progress(1.5) - 0.5).abs() < 1e-6);
        assert_eq!(outro_tint_progress(2.5), 1.0);
        assert_eq!(outro_tint_progress(100.0), 1.0);
    }

    #[test]
    fn white_static_is_gray() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buf = [0u8; 64];
        fill_static_noise(&mut rng, &mut buf, 0.0);
        for px in buf.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            assert_eq!(px[3], 255);
        }
    }

    #[test]
    fn green_static_dims_red_and_blue() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut buf = [0u8; 256];
        fill_static_noise(&mut rng, &mut buf, 1.0);
        let mut any_lit = false;
        for px in buf.chunks_exact(4) {
            assert!(px[0] <= px[1]);
            assert!(px[2] <= px[1]);
            // Full tint keeps only 30% of red/blue.
            assert!(f32::from(px[0]) <= f32::from(px[1]).mul_add(0.3, 1.0));
            any_lit |= px[1] > 0;
        }
        assert!(any_lit);
    }
}
