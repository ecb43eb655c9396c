//! Host (window/presentation) abstraction
//!
//! A host owns the clock, the event source and the presentation surface.
//! `HeadlessHost` runs on a simulated clock and is used by the native runner
//! and the tests.

use std::collections::VecDeque;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::input::{InputEvent, InputInbox};
use crate::renderer::Framebuffer;

/// Services the frame loop consumes from its environment
pub trait Host {
    /// Seconds since some fixed origin
    fn time(&self) -> f64;
    /// Deliver pending events into the inbox (pointer and key callbacks)
    fn poll_events(&mut self, inbox: &mut InputInbox);
    /// Show a finished frame
    fn present(&mut self, frame: &Framebuffer);
    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, close: bool);
}

/// Host with a fixed-step clock and a scripted event queue
#[derive(Debug)]
pub struct HeadlessHost {
    clock: f64,
    step: f64,
    frame_limit: Option<u64>,
    presented: u64,
    pending: VecDeque<InputEvent>,
    close: bool,
    keep_last_frame: bool,
    last_frame: Option<Framebuffer>,
}

impl HeadlessHost {
    /// Clock advances `1 / fps` seconds per presented frame; the host asks
    /// to close after `frame_limit` frames (at least one)
    pub fn new(fps: u32, frame_limit: Option<u64>) -> Result<Self> {
        if fps == 0 {
            bail!("headless host needs a positive frame rate");
        }
        if frame_limit == Some(0) {
            bail!("headless host needs a frame limit of at least one frame");
        }
        Ok(Self {
            clock: 0.0,
            step: 1.0 / f64::from(fps),
            frame_limit,
            presented: 0,
            pending: VecDeque::new(),
            close: false,
            keep_last_frame: false,
            last_frame: None,
        })
    }

    /// Keep a copy of the most recent frame for `save_snapshot`
    pub fn keep_last_frame(mut self, keep: bool) -> Self {
        self.keep_last_frame = keep;
        self
    }

    /// Queue an event for the next poll
    pub fn queue(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn frames_presented(&self) -> u64 {
        self.presented
    }

    pub fn last_frame(&self) -> Option<&Framebuffer> {
        self.last_frame.as_ref()
    }

    /// Write the last presented frame as a PNG
    pub fn save_snapshot(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let Some(frame) = &self.last_frame else {
            bail!("no frame has been kept to snapshot");
        };
        let image = image::RgbaImage::from_raw(
            frame.width(),
            frame.height(),
            frame.as_bytes().to_vec(),
        )
        .context("framebuffer size does not match its pixel data")?;
        image
            .save(path)
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
        log::info!("Saved snapshot to {}", path.display());
        Ok(())
    }
}

impl Host for HeadlessHost {
    fn time(&self) -> f64 {
        self.clock
    }

    fn poll_events(&mut self, inbox: &mut InputInbox) {
        for event in self.pending.drain(..) {
            inbox.handle(event);
        }
    }

    fn present(&mut self, frame: &Framebuffer) {
        self.presented += 1;
        self.clock += self.step;
        if self.keep_last_frame {
            if let Some(kept) = self.last_frame.as_mut() {
                kept.clone_from(frame);
            } else {
                self.last_frame = Some(frame.clone());
            }
        }
        if self.frame_limit.is_some_and(|limit| self.presented >= limit) {
            self.close = true;
        }
    }

    fn should_close(&self) -> bool {
        self.close
    }

    fn set_should_close(&mut self, close: bool) {
        self.close = close;
    }
}
