//! Parameter blender: turns discrete behavior facts into continuously
//! varying pose parameters.
//!
//! Blending is frame-coupled: every smoothed value closes a fixed fraction
//! of its remaining distance to the target once per rendered frame, exactly
//! like the reference behavior. At a different refresh rate the same
//! coefficient converges at a different real-time speed; hosts that care
//! can compensate through [`SmoothingOptions`].

use glam::Vec2;

use crate::options::{CameraOptions, Options, SmoothingOptions};
use crate::script::BehaviorSample;

/// A scalar that exponentially approaches a target, one step per frame.
///
/// With coefficient `k ∈ (0, 1]` the value moves by `(target − value) · k`
/// each step — it approaches monotonically and never overshoots.
#[derive(Debug, Clone, Copy)]
pub struct Smoothed {
    value: f32,
    coeff: f32,
}

impl Smoothed {
    /// New smoothed scalar at `initial` with approach coefficient `coeff`.
    pub fn new(initial: f32, coeff: f32) -> Self {
        Self {
            value: initial,
            coeff,
        }
    }

    /// Advance one frame toward `target`.
    #[inline]
    pub fn step(&mut self, target: f32) {
        self.value += (target - self.value) * self.coeff;
    }

    /// Current displayed value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Jump to `value` immediately (reset only).
    pub fn snap(&mut self, value: f32) {
        self.value = value;
    }

    /// Change the approach coefficient without disturbing the value.
    pub fn set_coeff(&mut self, coeff: f32) {
        self.coeff = coeff;
    }
}

/// Camera zoom target for a given performance time.
///
/// Three-segment schedule: rest at `default_zoom`, ramp linearly to
/// `close_zoom` over the zoom-in window, hold, ramp back out.
pub fn zoom_target(elapsed: f32, cam: &CameraOptions) -> f32 {
    if elapsed >= cam.zoom_in_start && elapsed < cam.zoom_in_end {
        let t = (elapsed - cam.zoom_in_start)
            / (cam.zoom_in_end - cam.zoom_in_start);
        cam.default_zoom + (cam.close_zoom - cam.default_zoom) * t
    } else if elapsed >= cam.zoom_in_end && elapsed < cam.zoom_out_start {
        cam.close_zoom
    } else if elapsed >= cam.zoom_out_start && elapsed < cam.zoom_out_end {
        let t = (elapsed - cam.zoom_out_start)
            / (cam.zoom_out_end - cam.zoom_out_start);
        cam.close_zoom + (cam.default_zoom - cam.close_zoom) * t
    } else {
        cam.default_zoom
    }
}

/// All continuously varying pose parameters plus the internal phase
/// accumulator that drives speech oscillation and idle motion.
#[derive(Debug, Clone, Copy)]
pub struct BlendState {
    phase_acc: f32,
    jaw_open: f32,
    angry: Smoothed,
    grin: Smoothed,
    zoom: Smoothed,
    yaw: Smoothed,
    pitch: Smoothed,
}

impl BlendState {
    /// Fresh blend state: emotion blends at zero, camera at rest.
    pub fn new(options: &Options) -> Self {
        let s = &options.smoothing;
        Self {
            phase_acc: 0.0,
            jaw_open: 0.0,
            angry: Smoothed::new(0.0, s.emotion),
            grin: Smoothed::new(0.0, s.emotion),
            zoom: Smoothed::new(options.camera.default_zoom, s.zoom),
            yaw: Smoothed::new(0.0, s.follow),
            pitch: Smoothed::new(0.0, s.follow),
        }
    }

    /// Advance the performance-driven parameters one frame.
    ///
    /// Only called while the performance is playing: the accumulator,
    /// jaw and emotion blends all freeze with the performance clock.
    pub fn step_performance(
        &mut self,
        sample: &BehaviorSample,
        frame_step: f32,
    ) {
        self.phase_acc += frame_step;

        // Jaw tracks its target directly; cadence controls the oscillation.
        let speech =
            (self.phase_acc * sample.cadence as f32).sin() * 0.5 + 0.5;
        let base = if sample.talking { speech * 0.4 } else { 0.0 };
        // A grin keeps the mouth visibly open.
        self.jaw_open = if sample.grinning {
            (base * 1.5).max(0.25)
        } else {
            base
        };

        self.angry.step(if sample.angry { 1.0 } else { 0.0 });
        self.grin.step(if sample.grinning { 1.0 } else { 0.0 });
    }

    /// Advance the ambient parameters one frame.
    ///
    /// Runs every frame of the main phase, paused or not, so the camera and
    /// the pointer-follow rotation keep converging.
    pub fn step_ambient(
        &mut self,
        zoom_target: f32,
        pointer: Vec2,
        smoothing: &SmoothingOptions,
    ) {
        self.zoom.step(zoom_target);
        self.yaw.step(pointer.x * smoothing.follow_yaw_scale);
        self.pitch.step(-pointer.y * smoothing.follow_pitch_scale);
    }

    /// Apply new smoothing coefficients, keeping current displayed values.
    pub fn set_coefficients(&mut self, smoothing: &SmoothingOptions) {
        self.angry.set_coeff(smoothing.emotion);
        self.grin.set_coeff(smoothing.emotion);
        self.zoom.set_coeff(smoothing.zoom);
        self.yaw.set_coeff(smoothing.follow);
        self.pitch.set_coeff(smoothing.follow);
    }

    /// Snap everything back to its initial state.
    pub fn reset(&mut self, options: &Options) {
        self.phase_acc = 0.0;
        self.jaw_open = 0.0;
        self.angry.snap(0.0);
        self.grin.snap(0.0);
        self.zoom.snap(options.camera.default_zoom);
        self.yaw.snap(0.0);
        self.pitch.snap(0.0);
    }

    /// Internal phase accumulator (drives speech and idle motion).
    pub fn phase_acc(&self) -> f32 {
        self.phase_acc
    }

    /// Jaw-open amount, 0 (closed) to ~0.6.
    pub fn jaw_open(&self) -> f32 {
        self.jaw_open
    }

    /// Smoothed angry-eyebrow blend, 0 to 1.
    pub fn angry_blend(&self) -> f32 {
        self.angry.value()
    }

    /// Smoothed grin blend, 0 to 1.
    pub fn grin_blend(&self) -> f32 {
        self.grin.value()
    }

    /// Smoothed camera distance.
    pub fn camera_zoom(&self) -> f32 {
        self.zoom.value()
    }

    /// Smoothed head yaw from pointer follow.
    pub fn head_yaw(&self) -> f32 {
        self.yaw.value()
    }

    /// Smoothed head pitch from pointer follow.
    pub fn head_pitch(&self) -> f32 {
        self.pitch.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(talking: bool, angry: bool, grinning: bool) -> BehaviorSample {
        BehaviorSample {
            talking,
            angry,
            grinning,
            cadence: 1.6,
        }
    }

    #[test]
    fn smoothed_converges_monotonically_without_overshoot() {
        let mut v = Smoothed::new(0.0, 0.03);
        let mut prev = v.value();
        for _ in 0..500 {
            v.step(1.0);
            assert!(v.value() >= prev, "must approach monotonically");
            assert!(v.value() <= 1.0, "must never overshoot");
            prev = v.value();
        }
    }

    #[test]
    fn smoothed_reaches_one_percent_within_bound() {
        // (1 - k)^n < 0.01 with k = 0.03 needs n = 152 frames.
        let mut v = Smoothed::new(0.0, 0.03);
        for _ in 0..152 {
            v.step(1.0);
        }
        assert!((1.0 - v.value()).abs() < 0.01);
    }

    #[test]
    fn jaw_closed_outside_talking() {
        let opts = Options::default();
        let mut blend = BlendState::new(&opts);
        for _ in 0..10 {
            blend.step_performance(&sample(false, false, false), 0.08);
        }
        assert_eq!(blend.jaw_open(), 0.0);
    }

    #[test]
    fn jaw_oscillates_within_range_while_talking() {
        let opts = Options::default();
        let mut blend = BlendState::new(&opts);
        let mut max_seen = 0.0f32;
        for _ in 0..200 {
            blend.step_performance(&sample(true, false, false), 0.08);
            assert!(blend.jaw_open() >= 0.0 && blend.jaw_open() <= 0.4);
            max_seen = max_seen.max(blend.jaw_open());
        }
        assert!(max_seen > 0.3, "oscillation should near its amplitude");
    }

    #[test]
    fn grin_keeps_mouth_visibly_open() {
        let opts = Options::default();
        let mut blend = BlendState::new(&opts);
        for _ in 0..200 {
            blend.step_performance(&sample(false, false, true), 0.08);
            assert!(blend.jaw_open() >= 0.25);
        }
    }

    #[test]
    fn emotion_blends_rise_and_fall_gradually() {
        let opts = Options::default();
        let mut blend = BlendState::new(&opts);

        blend.step_performance(&sample(false, true, false), 0.08);
        let first = blend.angry_blend();
        assert!(first > 0.0 && first < 0.1, "no instant jump, got {first}");

        for _ in 0..300 {
            blend.step_performance(&sample(false, true, false), 0.08);
        }
        assert!(blend.angry_blend() > 0.99);

        blend.step_performance(&sample(false, false, false), 0.08);
        assert!(blend.angry_blend() < 0.99 && blend.angry_blend() > 0.9);
    }

    #[test]
    fn zoom_target_schedule() {
        let cam = CameraOptions::default();
        assert_eq!(zoom_target(0.0, &cam), 10.5);
        assert_eq!(zoom_target(79.9, &cam), 10.5);
        // Mid zoom-in: strictly between default and close.
        let mid_in = zoom_target(81.0, &cam);
        assert!(mid_in < 10.5 && mid_in > 6.5);
        // Held close through the window.
        assert_eq!(zoom_target(85.0, &cam), 6.5);
        // Mid zoom-out: strictly between close and default.
        let mid_out = zoom_target(91.0, &cam);
        assert!(mid_out > 6.5 && mid_out < 10.5);
        assert_eq!(zoom_target(92.0, &cam), 10.5);
        assert_eq!(zoom_target(120.0, &cam), 10.5);
    }

    #[test]
    fn pointer_follow_targets_scaled_and_lagging() {
        let opts = Options::default();
        let mut blend = BlendState::new(&opts);
        let pointer = Vec2::new(1.0, 1.0);
        let target = zoom_target(0.0, &opts.camera);

        blend.step_ambient(target, pointer, &opts.smoothing);
        assert!(blend.head_yaw() > 0.0 && blend.head_yaw() < 0.25);
        assert!(blend.head_pitch() < 0.0 && blend.head_pitch() > -0.15);

        for _ in 0..1000 {
            blend.step_ambient(target, pointer, &opts.smoothing);
        }
        assert!((blend.head_yaw() - 0.25).abs() < 1e-3);
        assert!((blend.head_pitch() + 0.15).abs() < 1e-3);
    }

    #[test]
    fn reset_restores_initial_state() {
        let opts = Options::default();
        let mut blend = BlendState::new(&opts);
        for _ in 0..50 {
            blend.step_performance(&sample(true, true, true), 0.08);
            blend.step_ambient(6.5, Vec2::new(1.0, 0.0), &opts.smoothing);
        }
        blend.reset(&opts);
        assert_eq!(blend.phase_acc(), 0.0);
        assert_eq!(blend.jaw_open(), 0.0);
        assert_eq!(blend.angry_blend(), 0.0);
        assert_eq!(blend.grin_blend(), 0.0);
        assert_eq!(blend.camera_zoom(), 10.5);
        assert_eq!(blend.head_yaw(), 0.0);
    }
}
