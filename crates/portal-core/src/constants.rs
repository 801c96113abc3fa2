use glam::Vec3;

// Scene tuning shared by the web and native frontends.

// Firefly field
pub const FIREFLY_COUNT: usize = 30;
pub const FIREFLY_BASE_SIZE: f32 = 300.0; // screen-space size before scale/depth attenuation
pub const FIREFLY_SIZE_MIN: f32 = 0.0;
pub const FIREFLY_SIZE_MAX: f32 = 500.0;
pub const FIREFLY_BOB_AMPLITUDE: f32 = 0.2;
pub const FIREFLY_BOB_PHASE_SCALE: f32 = 100.0; // per-particle phase from its own x

// Spawn volume. The formulas in `fireflies::spawn_position` are authoritative;
// these only name the factors they use.
pub const SPAWN_X_SPAN: f32 = 4.0;
pub const SPAWN_SPREAD: f32 = 3.2;
pub const SPAWN_LIFT: f32 = 0.4;

// Camera
pub const CAMERA_FOVY_RADIANS: f32 = std::f32::consts::FRAC_PI_4;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_EYE: [f32; 3] = [4.0, 6.0, 4.0];
pub const CAMERA_TARGET: [f32; 3] = [0.0, 0.75, 0.0];

// Orbit controls
pub const ORBIT_DAMPING_TAU_SEC: f32 = 0.12; // easing time constant toward the drag goal
pub const ORBIT_DRAG_SPEED: f32 = 0.005; // radians per dragged pixel
pub const ORBIT_AZIMUTH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;
pub const ORBIT_PITCH_MIN: f32 = 0.0; // polar angle capped at PI/2: never below the horizon
pub const ORBIT_PITCH_MAX: f32 = std::f32::consts::FRAC_PI_2 - 0.05;

// Display
pub const MAX_PIXEL_RATIO: f32 = 2.0;

// Default palette
pub const DEFAULT_CLEAR_COLOR: &str = "#110418";
pub const DEFAULT_PORTAL_COLOR_START: &str = "#ffaae3";
pub const DEFAULT_PORTAL_COLOR_END: &str = "#fdfaff";
pub const LAMP_LIGHT_COLOR: &str = "#ffffe5";
pub const NAILS_COLOR: &str = "#212121";

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from(CAMERA_EYE)
}

#[inline]
pub fn camera_target_vec3() -> Vec3 {
    Vec3::from(CAMERA_TARGET)
}
