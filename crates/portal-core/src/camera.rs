use crate::constants::{
    camera_eye_vec3, camera_target_vec3, CAMERA_FOVY_RADIANS, CAMERA_ZFAR, CAMERA_ZNEAR,
    ORBIT_AZIMUTH_LIMIT, ORBIT_DAMPING_TAU_SEC, ORBIT_PITCH_MAX, ORBIT_PITCH_MIN,
};
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Damped orbit rig around a fixed target.
///
/// Dragging moves the goal angles; `update` eases the actual angles toward
/// them each frame. Zoom is disabled, the polar angle never passes the
/// horizon, and azimuth is limited to a half turn facing the portal.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    target: Vec3,
    radius: f32,
    yaw: f32,
    pitch: f32,
    yaw_goal: f32,
    pitch_goal: f32,
    aspect: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        let target = camera_target_vec3();
        let offset = camera_eye_vec3() - target;
        let radius = offset.length();
        let pitch = (offset.y / radius).asin();
        let yaw = offset.x.atan2(offset.z);
        Self {
            target,
            radius,
            yaw,
            pitch,
            yaw_goal: yaw,
            pitch_goal: pitch,
            aspect,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(1e-4);
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Apply a drag delta (radians) to the goal angles, honoring the clamps.
    pub fn rotate(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw_goal = (self.yaw_goal + d_yaw).clamp(-ORBIT_AZIMUTH_LIMIT, ORBIT_AZIMUTH_LIMIT);
        self.pitch_goal = (self.pitch_goal + d_pitch).clamp(ORBIT_PITCH_MIN, ORBIT_PITCH_MAX);
    }

    /// Ease the current angles toward the goals. Frame-rate independent.
    pub fn update(&mut self, dt_sec: f32) {
        let alpha = 1.0 - (-dt_sec / ORBIT_DAMPING_TAU_SEC).exp();
        self.yaw += (self.yaw_goal - self.yaw) * alpha;
        self.pitch += (self.pitch_goal - self.pitch) * alpha;
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.radius * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: self.aspect,
            fovy_radians: CAMERA_FOVY_RADIANS,
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }
}
