//! Frame controller
//!
//! One iteration of the main loop: poll input, compute the clamped delta,
//! handle fire/quit, step the simulation, composite and present.

use glam::Vec2;

use crate::consts::{SCREEN_H, SCREEN_W};
use crate::platform::{Host, InputInbox};
use crate::renderer::{Compositor, Framebuffer, Layers};
use crate::settings::Settings;
use crate::sim::{self, SimState, TickReport};
use crate::{gun_base, to_pixel};

/// What a single frame did
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameSummary {
    /// Seconds handed to the simulation
    pub dt: f32,
    /// A projectile was created this frame
    pub fired: bool,
    pub tick: TickReport,
}

/// Owns the simulation, the compositor and the framebuffer for one run
pub struct FrameController {
    sim: SimState,
    compositor: Compositor,
    framebuffer: Framebuffer,
    inbox: InputInbox,
    base: Vec2,
    aim: Vec2,
    last_time: Option<f64>,
    last_status: Option<f64>,
    status_interval: f64,
    max_frame_dt: f32,
    frames: u64,
}

impl FrameController {
    /// Fresh run seeded from the settings
    pub fn new(settings: &Settings) -> Self {
        let sim = SimState::new(settings.tuning.clone(), settings.resolve_seed());
        Self::with_state(settings, sim)
    }

    /// Run an existing simulation state
    pub fn with_state(settings: &Settings, sim: SimState) -> Self {
        let center = Vec2::new(SCREEN_W as f32 / 2.0, SCREEN_H as f32 / 2.0);
        Self {
            sim,
            compositor: Compositor::new(Layers::from(settings)),
            framebuffer: Framebuffer::new(SCREEN_W as u32, SCREEN_H as u32),
            inbox: InputInbox::new(f64::from(SCREEN_H), center),
            base: gun_base(),
            aim: center,
            last_time: None,
            last_status: None,
            status_interval: settings.status_interval,
            max_frame_dt: settings.max_frame_dt,
            frames: 0,
        }
    }

    pub fn sim(&self) -> &SimState {
        &self.sim
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Aim point used by the last frame (playfield coordinates)
    pub fn aim(&self) -> Vec2 {
        self.aim
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Direct access to the inbox for hosts that deliver callbacks themselves
    pub fn inbox_mut(&mut self) -> &mut InputInbox {
        &mut self.inbox
    }

    /// Run one frame against `host`
    pub fn frame(&mut self, host: &mut impl Host) -> FrameSummary {
        host.poll_events(&mut self.inbox);

        let now = host.time();
        let dt = match self.last_time {
            Some(prev) => self.clamp_dt((now - prev) as f32),
            None => 0.0,
        };
        self.last_time = Some(now);

        let input = self.inbox.drain();
        self.aim = input.aim;
        if input.quit {
            host.set_should_close(true);
        }

        let fired = input.fire && sim::fire(&mut self.sim, self.base, self.aim);
        let tick = sim::tick(&mut self.sim, dt);

        self.compositor.render(
            &mut self.framebuffer,
            &self.sim,
            to_pixel(self.base),
            to_pixel(self.aim),
        );
        host.present(&self.framebuffer);

        self.frames += 1;
        self.report_status(now);

        FrameSummary { dt, fired, tick }
    }

    /// Loop until the host asks to close; returns the final score.
    ///
    /// `before_frame` runs at the top of every iteration with read access to
    /// the simulation (the native runner feeds its autopilot from here).
    pub fn run<H: Host>(
        &mut self,
        host: &mut H,
        mut before_frame: impl FnMut(&SimState, &mut H),
    ) -> u64 {
        log::info!("Controls: move mouse to aim, SPACE to shoot, ESC to quit");

        while !host.should_close() {
            before_frame(&self.sim, host);
            self.frame(host);
        }

        log::info!(
            "Game closed after {} frames (seed {}). Final score: {} from {} pops",
            self.frames,
            self.sim.seed,
            self.sim.score,
            self.sim.pops
        );
        self.sim.score
    }

    /// Non-positive `max_frame_dt` disables the clamp
    fn clamp_dt(&self, raw: f32) -> f32 {
        let dt = raw.max(0.0);
        if self.max_frame_dt > 0.0 {
            dt.min(self.max_frame_dt)
        } else {
            dt
        }
    }

    fn report_status(&mut self, now: f64) {
        let Some(last) = self.last_status else {
            self.last_status = Some(now);
            return;
        };
        if now - last > self.status_interval {
            log::info!(
                "Score: {}  Bubbles: {}  Projectiles: {}",
                self.sim.score,
                self.sim.live_bubbles(),
                self.sim.live_projectiles()
            );
            self.last_status = Some(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{HeadlessHost, InputEvent, Key, KeyAction};
    use crate::renderer::palette;
    use crate::tuning::Tuning;
    use glam::IVec2;

    fn quiet_settings() -> Settings {
        Settings {
            seed: Some(1234),
            tuning: Tuning {
                spawn_chance: 0.0,
                split_chance: 0.0,
                initial_bubbles: 0,
                ..Tuning::default()
            },
            ..Settings::default()
        }
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            action: KeyAction::Press,
        }
    }

    #[test]
    fn test_first_frame_has_zero_dt() {
        let mut host = HeadlessHost::new(60, None).unwrap();
        let mut ctl = FrameController::new(&quiet_settings());
        assert_eq!(ctl.frame(&mut host).dt, 0.0);
        let dt = ctl.frame(&mut host).dt;
        assert!((dt - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut host = HeadlessHost::new(2, None).unwrap();
        let mut ctl = FrameController::new(&quiet_settings());
        ctl.frame(&mut host);
        assert_eq!(ctl.frame(&mut host).dt, 0.1);
    }

    #[test]
    fn test_fire_uses_latest_aim_and_fires_once() {
        let mut host = HeadlessHost::new(60, None).unwrap();
        let mut ctl = FrameController::new(&quiet_settings());

        // Aim straight up (window y = 700 - 660 = 40), press twice before the frame
        host.queue(InputEvent::CursorPos { x: 100.0, y: 100.0 });
        host.queue(InputEvent::CursorPos { x: 450.0, y: 40.0 });
        host.queue(press(Key::Space));
        host.queue(press(Key::Space));

        let summary = ctl.frame(&mut host);
        assert!(summary.fired);
        assert_eq!(ctl.aim(), Vec2::new(450.0, 660.0));
        assert_eq!(ctl.sim().projectiles.len(), 1);
        let p = &ctl.sim().projectiles[0];
        assert!(p.vel.x.abs() < 1e-4);
        assert!((p.vel.y - 600.0).abs() < 1e-3);

        // The second press was coalesced, nothing queued for the next frame
        assert!(!ctl.frame(&mut host).fired);
        assert_eq!(ctl.sim().projectiles.len(), 1);
    }

    #[test]
    fn test_fire_at_base_is_ignored() {
        let mut host = HeadlessHost::new(60, None).unwrap();
        let mut ctl = FrameController::new(&quiet_settings());
        host.queue(InputEvent::CursorPos { x: 450.0, y: 640.0 });
        host.queue(press(Key::Space));

        let summary = ctl.frame(&mut host);
        assert!(!summary.fired);
        assert!(ctl.sim().projectiles.is_empty());
    }

    #[test]
    fn test_escape_closes_host() {
        let mut host = HeadlessHost::new(60, None).unwrap();
        let mut ctl = FrameController::new(&quiet_settings());
        host.queue(press(Key::Escape));

        let score = ctl.run(&mut host, |_, _| {});
        assert_eq!(score, 0);
        assert!(host.should_close());
        assert_eq!(ctl.frames(), 1);
    }

    #[test]
    fn test_run_until_frame_limit_and_present() {
        let mut host = HeadlessHost::new(60, Some(5)).unwrap().keep_last_frame(true);
        let mut ctl = FrameController::new(&quiet_settings());
        let mut calls = 0;
        ctl.run(&mut host, |_, _| calls += 1);

        assert_eq!(calls, 5);
        assert_eq!(host.frames_presented(), 5);
        let frame = host.last_frame().unwrap();
        // HUD bar and the left barrel line (the aim line covers the middle one)
        assert_eq!(
            frame.get(IVec2::new(12, 680)),
            Some(palette::HUD_BAR.to_rgba8())
        );
        assert_eq!(
            frame.get(IVec2::new(449, 65)),
            Some(palette::BARREL.to_rgba8())
        );
    }

    #[test]
    fn test_shot_pops_bubble_through_the_loop() {
        let mut settings = quiet_settings();
        settings.show_grid = false;
        let mut sim = SimState::empty(settings.tuning.clone(), 7);
        sim.bubbles.push(sim::Bubble::new(
            Vec2::new(450.0, 400.0),
            0.0,
            20.0,
            Vec2::ZERO,
            sim::Rgb::new(0.5, 0.5, 0.5),
        ));
        let mut ctl = FrameController::with_state(&settings, sim);
        let mut host = HeadlessHost::new(60, Some(60)).unwrap();

        let mut fired = false;
        let score = ctl.run(&mut host, |_, host| {
            if !fired {
                host.queue(InputEvent::CursorPos { x: 450.0, y: 300.0 });
                host.queue(press(Key::Space));
                fired = true;
            }
        });

        assert_eq!(score, 10);
        assert_eq!(ctl.sim().pops, 1);
        assert_eq!(ctl.sim().seed, 7);
        assert!(ctl.sim().bubbles.is_empty());
        assert!(ctl.sim().projectiles.is_empty());
    }

    #[test]
    fn test_callbacks_into_inbox() {
        let mut host = HeadlessHost::new(60, None).unwrap();
        let mut ctl = FrameController::new(&quiet_settings());
        ctl.inbox_mut().on_cursor_pos(600.0, 100.0);
        ctl.inbox_mut().on_key(Key::Space, KeyAction::Press);

        assert!(ctl.frame(&mut host).fired);
        assert_eq!(ctl.aim(), Vec2::new(600.0, 600.0));
        assert!(ctl.framebuffer().count_not(palette::BACKGROUND) > 0);
    }
}
