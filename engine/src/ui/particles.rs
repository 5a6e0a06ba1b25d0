//! Decorative background particle field.
//!
//! A sparse set of dim dots drifting slowly upward behind the content, the
//! terminal stand-in for the page's animated background. Positions are
//! normalized to `0.0..1.0` and mapped to cells at render time. Frozen under
//! reduced motion.

use std::time::Duration;

const PARTICLE_COUNT: usize = 24;
// Low-discrepancy scatter so the field looks even without a RNG.
const GOLDEN: f32 = 0.618_034;

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    /// Upward drift in normalized units per second.
    speed: f32,
}

#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    frozen: bool,
}

impl ParticleField {
    #[must_use]
    pub fn new(frozen: bool) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|index| {
                let n = index as f32;
                Particle {
                    x: (n * GOLDEN).fract(),
                    y: (n * GOLDEN * GOLDEN).fract(),
                    speed: 0.01 + (n * 0.37).fract() * 0.03,
                }
            })
            .collect();
        Self { particles, frozen }
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.frozen {
            return;
        }
        let seconds = delta.as_secs_f32();
        for particle in &mut self.particles {
            particle.y -= particle.speed * seconds;
            if particle.y < 0.0 {
                particle.y += 1.0;
            }
        }
    }

    /// Cell coordinates of each particle for the given area.
    #[must_use]
    pub fn cells(&self, width: u16, height: u16) -> Vec<(u16, u16)> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        self.particles
            .iter()
            .map(|particle| {
                let column = ((particle.x * f32::from(width)) as u16).min(width - 1);
                let row = ((particle.y * f32::from(height)) as u16).min(height - 1);
                (column, row)
            })
            .collect()
    }
}
