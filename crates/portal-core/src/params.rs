use crate::color::Color;
use crate::constants::{
    DEFAULT_CLEAR_COLOR, DEFAULT_PORTAL_COLOR_END, DEFAULT_PORTAL_COLOR_START, FIREFLY_BASE_SIZE,
    FIREFLY_SIZE_MAX, FIREFLY_SIZE_MIN, MAX_PIXEL_RATIO,
};

/// The live shading parameters read every frame by both shading rules and the
/// renderer's clear step.
///
/// Owned explicitly and passed by reference into the render step and the
/// panel bindings; there is no ambient global copy. All mutation happens on
/// the single event-loop thread: the frame loop writes `elapsed`, the panel
/// writes colors and size, the resize handler writes `pixel_ratio`.
#[derive(Clone, Debug)]
pub struct ShadingParams {
    pub clear_color: Color,
    pub portal_color_start: Color,
    pub portal_color_end: Color,
    pub firefly_size: f32,
    pub pixel_ratio: f32,
    pub elapsed: f32,
}

impl Default for ShadingParams {
    fn default() -> Self {
        // The literals are compile-time constants; parsing cannot fail.
        Self {
            clear_color: Color::from_hex(DEFAULT_CLEAR_COLOR).unwrap(),
            portal_color_start: Color::from_hex(DEFAULT_PORTAL_COLOR_START).unwrap(),
            portal_color_end: Color::from_hex(DEFAULT_PORTAL_COLOR_END).unwrap(),
            firefly_size: FIREFLY_BASE_SIZE,
            pixel_ratio: 1.0,
            elapsed: 0.0,
        }
    }
}

impl ShadingParams {
    /// Advance the shared time input. Elapsed time is monotonic; a stale or
    /// backwards timestamp never rewinds the shading rules.
    pub fn set_elapsed(&mut self, seconds: f32) {
        self.elapsed = seconds.max(self.elapsed);
    }

    pub fn set_firefly_size(&mut self, size: f32) {
        self.firefly_size = size.clamp(FIREFLY_SIZE_MIN, FIREFLY_SIZE_MAX);
    }

    pub fn set_pixel_ratio(&mut self, device_ratio: f32) {
        self.pixel_ratio = device_ratio.min(MAX_PIXEL_RATIO).max(0.0);
    }
}
