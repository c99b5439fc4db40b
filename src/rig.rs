//! Rig adapter contract and the reference head rig.
//!
//! The engine hands a [`FrameSnapshot`] to a [`RigAdapter`] once per frame
//! and assumes nothing about how it is consumed. [`HeadRig`] is the
//! reference implementation: it derives a [`HeadPose`] of node transforms —
//! jaw, brows, teeth, mustache, beard, crown — ready for a renderer to
//! apply to its scene graph. Idle motion (breathing, head bob, brain pulse,
//! crown sway) is pure sines of the snapshot's phase accumulator.

use glam::Vec3;

use crate::engine::FrameSnapshot;

/// Consumer of the per-frame parameter snapshot.
pub trait RigAdapter {
    /// Update the renderable state from this frame's parameters.
    fn apply(&mut self, frame: &FrameSnapshot);
}

/// Translation / euler rotation / scale for one rig node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTransform {
    /// World-space translation.
    pub translation: Vec3,
    /// Euler rotation in radians (XYZ order).
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl NodeTransform {
    fn at(translation: Vec3) -> Self {
        Self {
            translation,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Default for NodeTransform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

/// Full set of node transforms for the talking figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPose {
    /// Whole-head group: breathing scale, bob, roll, pointer-follow
    /// yaw/pitch.
    pub head: NodeTransform,
    /// Lower jaw, rotating open and dropping while talking.
    pub jaw: NodeTransform,
    /// Mouth plane, stretching with the jaw.
    pub mouth: NodeTransform,
    /// Left eyebrow.
    pub left_eyebrow: NodeTransform,
    /// Right eyebrow.
    pub right_eyebrow: NodeTransform,
    /// Left brow ridge.
    pub left_brow_ridge: NodeTransform,
    /// Right brow ridge.
    pub right_brow_ridge: NodeTransform,
    /// Upper tooth row, scaling in with the grin.
    pub upper_teeth: NodeTransform,
    /// Lower tooth row, scaling in with the grin.
    pub lower_teeth: NodeTransform,
    /// Whether the tooth rows should render at all.
    pub teeth_visible: bool,
    /// Left mustache half, lifting with the grin.
    pub left_mustache: NodeTransform,
    /// Right mustache half.
    pub right_mustache: NodeTransform,
    /// Lower beard cone, following the jaw.
    pub beard_lower: NodeTransform,
    /// Left beard side.
    pub beard_left: NodeTransform,
    /// Right beard side.
    pub beard_right: NodeTransform,
    /// Exposed brain, pulsing on the idle clock.
    pub brain: NodeTransform,
    /// Crown, swaying on the idle clock.
    pub crown: NodeTransform,
    /// Camera position for this frame (zoom on the z axis).
    pub camera_position: Vec3,
}

// Rest positions of the animated nodes.
const JAW_REST: Vec3 = Vec3::new(0.0, -0.6, 0.5);
const MOUTH_REST: Vec3 = Vec3::new(0.0, -0.3, 0.82);
const EYEBROW_Y: f32 = 0.95;
const EYEBROW_X: f32 = 0.3;
const EYEBROW_PITCH: f32 = -0.3;
const BROW_RIDGE_REST: Vec3 = Vec3::new(0.45, 0.85, 0.7);
const UPPER_TEETH_Y: f32 = -0.17;
const LOWER_TEETH_Y: f32 = -0.79;
const MUSTACHE_REST: Vec3 = Vec3::new(0.02, -0.15, 0.7);
const BEARD_LOWER_REST: Vec3 = Vec3::new(0.0, -1.3, 0.65);
const BEARD_SIDE_REST: Vec3 = Vec3::new(0.6, -0.5, 0.4);
const BRAIN_REST: Vec3 = Vec3::new(0.0, 1.85, 0.0);
const CROWN_REST: Vec3 = Vec3::new(0.0, 2.5, 0.0);
const CAMERA_HEIGHT: f32 = 1.0;

/// Compute the pose for one frame's parameters.
pub fn head_pose(frame: &FrameSnapshot) -> HeadPose {
    let jaw = frame.jaw_open;
    let angry = frame.angry_blend;
    let grin = frame.grin_blend;
    let phi = frame.phase;

    // Eyebrow waggle rides on top of the angry set, gated so the brows only
    // dance while the mouth is moving.
    let waggle_gate = jaw > 0.1 && (phi * 0.35).sin() > 0.3;
    let pivot = if waggle_gate {
        (phi * 0.9).sin() * 0.04
    } else {
        0.0
    };

    let brow_y = EYEBROW_Y - angry * 0.15;
    let brow_angle = 0.1 + angry * 0.25;
    let ridge_angle = -(0.25 + angry * 0.30);

    let mustache_lift = grin * 0.15;
    let mustache_pos = Vec3::new(
        MUSTACHE_REST.x,
        MUSTACHE_REST.y - jaw * 0.03,
        MUSTACHE_REST.z + grin * 0.05,
    );

    let breath = 1.0 + (phi * 0.5).sin() * 0.015;
    let pulse = 1.0 + (phi * 0.7).sin() * 0.02;

    HeadPose {
        head: NodeTransform {
            translation: Vec3::new(0.0, (phi * 0.3).sin() * 0.05, 0.0),
            rotation: Vec3::new(
                frame.head_pitch,
                frame.head_yaw,
                (phi * 0.25).cos() * 0.02,
            ),
            scale: Vec3::splat(breath),
        },
        jaw: NodeTransform {
            translation: JAW_REST - Vec3::new(0.0, jaw * 0.2, 0.0),
            rotation: Vec3::new(jaw * 0.8, 0.0, 0.0),
            scale: Vec3::ONE,
        },
        mouth: NodeTransform {
            translation: MOUTH_REST - Vec3::new(0.0, jaw * 0.1, 0.0),
            rotation: Vec3::ZERO,
            scale: Vec3::new(1.0, 1.0 + jaw * 0.6, 1.0),
        },
        left_eyebrow: NodeTransform {
            translation: Vec3::new(-EYEBROW_X, brow_y, 0.7),
            rotation: Vec3::new(EYEBROW_PITCH, 0.0, brow_angle - pivot),
            scale: Vec3::ONE,
        },
        right_eyebrow: NodeTransform {
            translation: Vec3::new(EYEBROW_X, brow_y, 0.7),
            rotation: Vec3::new(EYEBROW_PITCH, 0.0, -brow_angle + pivot),
            scale: Vec3::ONE,
        },
        left_brow_ridge: NodeTransform {
            translation: Vec3::new(
                -BROW_RIDGE_REST.x,
                BROW_RIDGE_REST.y,
                BROW_RIDGE_REST.z,
            ),
            rotation: Vec3::new(-0.3, 0.0, ridge_angle),
            scale: Vec3::ONE,
        },
        right_brow_ridge: NodeTransform {
            translation: BROW_RIDGE_REST,
            rotation: Vec3::new(-0.3, 0.0, -ridge_angle),
            scale: Vec3::ONE,
        },
        upper_teeth: NodeTransform {
            translation: Vec3::new(0.0, UPPER_TEETH_Y, 0.0),
            rotation: Vec3::ZERO,
            scale: Vec3::new(1.0, grin, 1.0),
        },
        lower_teeth: NodeTransform {
            translation: Vec3::new(0.0, LOWER_TEETH_Y, 0.0),
            rotation: Vec3::ZERO,
            // Lower row extends further so the grin reads through the chin.
            scale: Vec3::new(1.0, grin * 1.5, 1.0),
        },
        teeth_visible: grin > 0.001,
        left_mustache: NodeTransform {
            translation: Vec3::new(-mustache_pos.x, mustache_pos.y, mustache_pos.z),
            rotation: Vec3::new(0.0, 0.0, mustache_lift),
            scale: Vec3::ONE,
        },
        right_mustache: NodeTransform {
            translation: mustache_pos,
            rotation: Vec3::new(0.0, 0.0, -mustache_lift),
            scale: Vec3::ONE,
        },
        beard_lower: NodeTransform {
            translation: BEARD_LOWER_REST,
            rotation: Vec3::new(0.1 + jaw * 0.25, 0.0, 0.0),
            scale: Vec3::ONE,
        },
        beard_left: NodeTransform::at(Vec3::new(
            -BEARD_SIDE_REST.x,
            BEARD_SIDE_REST.y - jaw * 0.08,
            BEARD_SIDE_REST.z,
        )),
        beard_right: NodeTransform::at(Vec3::new(
            BEARD_SIDE_REST.x,
            BEARD_SIDE_REST.y - jaw * 0.08,
            BEARD_SIDE_REST.z,
        )),
        brain: NodeTransform {
            translation: BRAIN_REST,
            rotation: Vec3::ZERO,
            scale: Vec3::splat(pulse),
        },
        crown: NodeTransform {
            translation: CROWN_REST,
            rotation: Vec3::new(0.0, (phi * 0.4).sin() * 0.03, 0.0),
            scale: Vec3::ONE,
        },
        camera_position: Vec3::new(0.0, CAMERA_HEIGHT, frame.camera_zoom),
    }
}

/// Reference rig holding the most recent pose.
#[derive(Debug, Clone, Copy)]
pub struct HeadRig {
    pose: HeadPose,
}

impl HeadRig {
    /// Rig at the neutral rest pose.
    pub fn new() -> Self {
        Self {
            pose: head_pose(&NEUTRAL_FRAME),
        }
    }

    /// Pose computed from the last applied snapshot.
    pub fn pose(&self) -> &HeadPose {
        &self.pose
    }
}

impl Default for HeadRig {
    fn default() -> Self {
        Self::new()
    }
}

impl RigAdapter for HeadRig {
    fn apply(&mut self, frame: &FrameSnapshot) {
        self.pose = head_pose(frame);
    }
}

/// Rest-pose snapshot used before the first engine tick.
const NEUTRAL_FRAME: FrameSnapshot = FrameSnapshot {
    jaw_open: 0.0,
    angry_blend: 0.0,
    grin_blend: 0.0,
    camera_zoom: 10.5,
    head_yaw: 0.0,
    head_pitch: 0.0,
    phase: 0.0,
    elapsed_seconds: 0.0,
    phase_state: crate::phase::Phase::IntroShowStart,
};
