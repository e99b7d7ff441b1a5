use std::time::Duration;

// Shared tuning constants for gesture arbitration and the particle engine.

// Particle field
pub const DEFAULT_PARTICLE_COUNT: usize = 20_000;
pub const SMOOTHING_ALPHA: f32 = 0.05; // fraction of the remaining distance closed per frame

// Landmark classification
pub const LANDMARK_COUNT: usize = 21;
pub const POINTING_THRESHOLD: f32 = 0.03; // |tipX - pipX| at or below this is an ambiguous point

// Swing detection (right wrist)
pub const SWING_DEBOUNCE: Duration = Duration::from_millis(250);
pub const SWING_MIN_DISTANCE: f32 = 0.08; // normalized image units between two frames

// Interaction timing
pub const MANUAL_CHANGE_COOLDOWN: Duration = Duration::from_millis(800);
pub const POINTING_HOLD: Duration = Duration::from_millis(1_000);
pub const AUTO_CYCLE_INTERVAL: Duration = Duration::from_millis(5_000);

// Shapes
pub const SPHERE_MAX_RADIUS: f32 = 2.0;
pub const HEART_SCALE: f32 = 0.08; // heart curve spans ~32 units wide before scaling
pub const HEART_JITTER_MIN: f32 = 0.8;
pub const HEART_JITTER_MAX: f32 = 1.5;
pub const HEART_DEPTH_JITTER: f32 = 0.3;
pub const FIREWORK_EXTENT: f32 = 4.0; // reference cloud spans [-0.5, 0.5] before scaling
pub const FIREWORK_DEPTH_JITTER: f32 = 0.2;
pub const PHOTO_EXTENT: f32 = 4.0;
pub const PHOTO_DEPTH_JITTER: f32 = 0.1;

// Rotation kinematics (radians per frame)
pub const PHOTO_SPIN_BASE: f32 = 0.01;
pub const PHOTO_SPIN_MIN_FACTOR: f32 = 0.5; // speed multiplier facing the camera
pub const PHOTO_SPIN_SIDE_GAIN: f32 = 1.5; // extra multiplier edge-on
pub const SHAPE_SPIN_SPEED: f32 = 0.003;
pub const TILT_AMPLITUDE: f32 = 0.18;
pub const TILT_FREQUENCY: f32 = 0.7;
pub const ROLL_AMPLITUDE: f32 = 0.08;
pub const ROLL_FREQUENCY: f32 = 0.5;
pub const NEAR_EDGE_THRESHOLD: f32 = 0.95; // sideways factor that re-rolls the tilt direction

// Default palette
pub const DEFAULT_SHAPE_COLOR: [f32; 3] = [0.4, 0.8, 1.0]; // sky blue
pub const FIST_ACCENT_COLOR: [f32; 3] = [1.0, 0.2, 0.4]; // heart pink
pub const PALETTE: [[f32; 3]; 5] = [
    [0.4, 0.8, 1.0],
    [1.0, 0.2, 0.4],
    [1.0, 0.8, 0.2],
    [0.5, 1.0, 0.5],
    [0.8, 0.5, 1.0],
];

// Rendering
pub const DEFAULT_POINT_SIZE: f32 = 0.03;
pub const MIN_POINT_SIZE: f32 = 0.005;
pub const MAX_POINT_SIZE: f32 = 0.2;

// Photo sampling
pub const SAMPLE_STEP: usize = 2; // pixel stride when thresholding
pub const ALPHA_THRESHOLD: u8 = 128;
