use crate::constants::MAX_PIXEL_RATIO;

/// Physical viewport dimensions plus the host display's pixel ratio, captured
/// at startup and refreshed on every resize event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            device_pixel_ratio,
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Pixel ratio as handed to the renderer and the firefly sizing rule,
    /// capped so high-density displays don't quadruple the fill cost.
    pub fn clamped_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio.min(MAX_PIXEL_RATIO)
    }
}
