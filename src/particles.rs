use rand::Rng;
use std::ops::Range;

pub const MIN_PARTICLES: usize = 50;
pub const MAX_PARTICLES: usize = 100;
pub const DEFAULT_PARTICLES: usize = 50;

const SIZE_PX: Range<f64> = 0.0..5.0;
const POSITION_PCT: Range<f64> = 0.0..100.0;
const DELAY_S: Range<f64> = 0.0..10.0;
const DURATION_S: Range<f64> = 20.0..50.0;

/// One floating speck of the background. Purely decorative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleDescriptor {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl ParticleDescriptor {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(SIZE_PX),
            left_pct: rng.gen_range(POSITION_PCT),
            top_pct: rng.gen_range(POSITION_PCT),
            delay_s: rng.gen_range(DELAY_S),
            duration_s: rng.gen_range(DURATION_S),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {left:.2}%; top: {top:.2}%; animation-delay: {delay:.2}s; animation-duration: {duration:.2}s",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            delay = self.delay_s,
            duration = self.duration_s,
        )
    }
}

/// Draws `count` particles, clamped to the supported field size.
pub fn generate<R: Rng>(rng: &mut R, count: usize) -> Vec<ParticleDescriptor> {
    let count = count.clamp(MIN_PARTICLES, MAX_PARTICLES);
    (0..count).map(|_| ParticleDescriptor::random(rng)).collect()
}
