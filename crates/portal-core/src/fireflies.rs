use crate::constants::{
    FIREFLY_BOB_AMPLITUDE, FIREFLY_BOB_PHASE_SCALE, FIREFLY_COUNT, SPAWN_LIFT, SPAWN_SPREAD,
    SPAWN_X_SPAN,
};
use glam::Vec3;
use rand::prelude::*;

/// One point sprite of the firefly field: a world-space position and a size
/// factor in \[0, 1). Immutable after generation.
#[derive(Clone, Copy, Debug)]
pub struct Firefly {
    pub position: Vec3,
    pub scale: f32,
}

/// The fixed-size particle field, generated once at startup and owned for the
/// process lifetime.
pub struct FireflyField {
    fireflies: Vec<Firefly>,
}

/// Map three independent uniform samples in \[0, 1) into the spawn volume
/// around the portal clearing. The formulas, not the implied bounds, are the
/// source of truth.
#[inline]
pub fn spawn_position(rx: f32, ry: f32, rz: f32) -> Vec3 {
    Vec3::new(
        (rx - 0.5) * SPAWN_X_SPAN,
        ry * 0.5 * SPAWN_SPREAD + SPAWN_LIFT,
        (rz - 0.5) * SPAWN_SPREAD + SPAWN_LIFT,
    )
}

impl FireflyField {
    /// Generate the field from entropy; every run differs.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Deterministic variant used by tests.
    pub fn seeded(seed: u64) -> Self {
        Self::generate_with(&mut StdRng::seed_from_u64(seed))
    }

    pub fn generate_with(rng: &mut impl Rng) -> Self {
        let fireflies = (0..FIREFLY_COUNT)
            .map(|_| Firefly {
                position: spawn_position(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()),
                scale: rng.gen::<f32>(),
            })
            .collect();
        Self { fireflies }
    }

    pub fn len(&self) -> usize {
        self.fireflies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fireflies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Firefly> {
        self.fireflies.iter()
    }
}

/// Screen-space sprite size in pixels: perspective-correct attenuation, so a
/// firefly twice as deep renders half as large.
#[inline]
pub fn point_size(base_size: f32, pixel_ratio: f32, scale: f32, view_depth: f32) -> f32 {
    base_size * pixel_ratio * scale / view_depth.max(1e-4)
}

/// Vertical bobbing offset. The phase is derived from the particle's own x
/// coordinate, so the field never bobs in lockstep.
#[inline]
pub fn bob_offset(time: f32, x: f32, scale: f32) -> f32 {
    (time + x * FIREFLY_BOB_PHASE_SCALE).sin() * scale * FIREFLY_BOB_AMPLITUDE
}
