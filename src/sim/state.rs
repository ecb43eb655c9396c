//! Simulation state and entity types
//!
//! `SimState` owns every live entity, the score and the RNG. Nothing outside
//! the simulation keeps references to individual entities between frames.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn;
use crate::tuning::Tuning;

/// Linear RGB color, channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Subtract `amount` from every channel, clamping at 0
    pub fn darken(self, amount: f32) -> Self {
        Self {
            r: (self.r - amount).max(0.0),
            g: (self.g - amount).max(0.0),
            b: (self.b - amount).max(0.0),
        }
    }

    /// Quantize to RGBA8 (opaque)
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), 255]
    }
}

/// A drifting target
#[derive(Debug, Clone)]
pub struct Bubble {
    pub pos: Vec2,
    /// Pseudo-depth: 0 = nearest/largest, larger = farther/smaller
    pub z: f32,
    /// Radius before depth attenuation
    pub radius: f32,
    /// Velocity in pixels per 1/60 s (scaled by `bubble_velocity_scale`)
    pub vel: Vec2,
    pub color: Rgb,
    pub alive: bool,
}

impl Bubble {
    pub fn new(pos: Vec2, z: f32, radius: f32, vel: Vec2, color: Rgb) -> Self {
        Self {
            pos,
            z,
            radius,
            vel,
            color,
            alive: true,
        }
    }

    /// Radius after depth attenuation
    #[inline]
    pub fn effective_radius(&self, tuning: &Tuning) -> f32 {
        tuning.depth_scaled_radius(self.radius, self.z)
    }
}

/// A player-fired shot
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    /// Pixels per second, fixed at fire time
    pub vel: Vec2,
    /// Seconds left before expiry
    pub life: f32,
    pub alive: bool,
}

/// Complete simulation state (deterministic for a given seed and input)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub tuning: Tuning,
    pub bubbles: Vec<Bubble>,
    pub projectiles: Vec<Projectile>,
    /// Monotonic score
    pub score: u64,
    /// Successful pops so far
    pub pops: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
}

impl SimState {
    /// Create a new state and spawn the initial batch of bubbles
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let mut state = Self::empty(tuning, seed);
        for _ in 0..state.tuning.initial_bubbles {
            spawn::spawn_bubble(&mut state);
        }
        log::info!(
            "Simulation seeded with {} ({} initial bubbles)",
            seed,
            state.bubbles.len()
        );
        state
    }

    /// A state with no entities at all
    pub fn empty(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            tuning,
            bubbles: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            pops: 0,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn live_bubbles(&self) -> usize {
        self.bubbles.iter().filter(|b| b.alive).count()
    }

    pub fn live_projectiles(&self) -> usize {
        self.projectiles.iter().filter(|p| p.alive).count()
    }

    /// Drop every entity flagged dead
    pub fn compact(&mut self) {
        self.bubbles.retain(|b| b.alive);
        self.projectiles.retain(|p| p.alive);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_spawns_initial_batch() {
        let state = SimState::new(Tuning::default(), 1);
        assert_eq!(state.bubbles.len(), 8);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 0);
        assert!(state.bubbles.iter().all(|b| b.alive));
    }

    #[test]
    fn test_same_seed_same_bubbles() {
        let a = SimState::new(Tuning::default(), 4242);
        let b = SimState::new(Tuning::default(), 4242);
        for (x, y) in a.bubbles.iter().zip(&b.bubbles) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.radius, y.radius);
            assert_eq!(x.color, y.color);
        }
    }

    #[test]
    fn test_darken_clamps() {
        let c = Rgb::new(0.5, 0.1, 0.18).darken(0.18);
        assert!((c.r - 0.32).abs() < 1e-6);
        assert_eq!(c.g, 0.0);
        assert!(c.b.abs() < 1e-6);
    }

    #[test]
    fn test_to_rgba8() {
        assert_eq!(Rgb::new(1.0, 0.0, 2.0).to_rgba8(), [255, 0, 255, 255]);
    }

    #[test]
    fn test_live_counts_ignore_dead() {
        let mut state = SimState::new(Tuning::default(), 3);
        state.projectiles.push(Projectile {
            pos: Vec2::ZERO,
            vel: Vec2::Y,
            life: 1.0,
            alive: false,
        });
        state.bubbles[1].alive = false;
        assert_eq!(state.live_bubbles(), 7);
        assert_eq!(state.live_projectiles(), 0);
        assert_eq!(state.seed, 3);
    }

    #[test]
    fn test_compact() {
        let mut state = SimState::new(Tuning::default(), 3);
        state.bubbles[0].alive = false;
        state.bubbles[3].alive = false;
        state.compact();
        assert_eq!(state.bubbles.len(), 6);
    }
}
