//! Demo player
//!
//! Plays the game through the same input channel a person would: it only
//! emits pointer and key events, never touches the simulation.

use glam::Vec2;

use crate::consts::SCREEN_H;
use crate::gun_base;
use crate::platform::{InputEvent, Key, KeyAction};
use crate::sim::SimState;

#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Frames between shots
    pub cooldown_frames: u32,
    countdown: u32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Autopilot {
    pub fn new(cooldown_frames: u32) -> Self {
        Self {
            cooldown_frames,
            countdown: 0,
        }
    }

    /// Where to aim: the lowest live bubble (closest to escaping), led by
    /// how far it drifts while the shot travels
    pub fn target(&self, sim: &SimState) -> Option<Vec2> {
        let base = gun_base();
        let t = &sim.tuning;
        let bubble = sim
            .bubbles
            .iter()
            .filter(|b| b.alive)
            .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))?;

        let flight = if t.projectile_speed > 0.0 {
            bubble.pos.distance(base) / t.projectile_speed
        } else {
            0.0
        };
        Some(bubble.pos + bubble.vel * t.bubble_velocity_scale * flight)
    }

    /// Events for the coming frame
    pub fn events(&mut self, sim: &SimState) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(aim) = self.target(sim) else {
            return events;
        };

        // Pointer events are in window coordinates (Y down)
        events.push(InputEvent::CursorPos {
            x: f64::from(aim.x),
            y: f64::from(SCREEN_H) - f64::from(aim.y),
        });

        if self.countdown == 0 {
            events.push(InputEvent::Key {
                key: Key::Space,
                action: KeyAction::Press,
            });
            events.push(InputEvent::Key {
                key: Key::Space,
                action: KeyAction::Release,
            });
            self.countdown = self.cooldown_frames;
        } else {
            self.countdown -= 1;
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameController;
    use crate::platform::HeadlessHost;
    use crate::settings::Settings;
    use crate::sim::{Bubble, Rgb};
    use crate::tuning::Tuning;

    fn still(x: f32, y: f32) -> Bubble {
        Bubble::new(Vec2::new(x, y), 0.0, 20.0, Vec2::ZERO, Rgb::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn test_targets_lowest_bubble() {
        let mut sim = SimState::empty(Tuning::default(), 1);
        sim.bubbles.push(still(100.0, 500.0));
        sim.bubbles.push(still(700.0, 250.0));
        sim.bubbles.push(still(300.0, 400.0));
        assert_eq!(Autopilot::default().target(&sim), Some(Vec2::new(700.0, 250.0)));
    }

    #[test]
    fn test_no_bubbles_no_events() {
        let sim = SimState::empty(Tuning::default(), 1);
        assert!(Autopilot::default().events(&sim).is_empty());
    }

    #[test]
    fn test_fires_on_cooldown() {
        let mut sim = SimState::empty(Tuning::default(), 1);
        sim.bubbles.push(still(450.0, 400.0));
        let mut pilot = Autopilot::new(2);

        let presses = |events: &[InputEvent]| {
            events
                .iter()
                .filter(|e| {
                    matches!(
                        e,
                        InputEvent::Key {
                            action: KeyAction::Press,
                            ..
                        }
                    )
                })
                .count()
        };
        let fired: Vec<usize> = (0..6).map(|_| presses(&pilot.events(&sim))).collect();
        assert_eq!(fired, vec![1, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_autopilot_scores() {
        let settings = Settings {
            seed: Some(2024),
            ..Settings::default()
        };
        let mut ctl = FrameController::new(&settings);
        let mut host = HeadlessHost::new(60, Some(900)).unwrap();
        let mut pilot = Autopilot::default();

        let score = ctl.run(&mut host, |sim, host| {
            for event in pilot.events(sim) {
                host.queue(event);
            }
        });
        assert!(score > 0, "15 seconds of autoplay should pop something");
    }
}
