//! Frame-driven main loop
//!
//! The loop owns the tick counter and calls a frame callback once per tick.
//! It never sleeps; the host decides when to pump it.

use crate::clock::TickClock;
use limber_core::Result;
use log::{error, info};

pub struct MainLoop {
    clock: TickClock,
    running: bool,
    debug: bool,
    tick: u64,
}

impl MainLoop {
    pub fn new(tick_rate_hz: f64) -> Self {
        Self {
            clock: TickClock::with_rate(tick_rate_hz),
            running: false,
            debug: false,
            tick: 0,
        }
    }

    /// Start running. Starting an already running loop does nothing.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        if self.debug {
            info!("animation started at tick {}", self.tick);
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
        if self.debug {
            info!("animation stopped at tick {}", self.tick);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// In debug mode a failing frame also stops the loop
    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Last tick handed to a frame
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Run exactly one frame, only while stopped. Returns whether a frame ran.
    pub fn next<F>(&mut self, mut frame: F) -> Result<bool>
    where
        F: FnMut(u64) -> Result<()>,
    {
        if self.running {
            return Ok(false);
        }
        self.run_frame(&mut frame)?;
        Ok(true)
    }

    /// Feed `elapsed` seconds to the clock and run a frame for every whole
    /// tick that became due. Returns the number of frames run.
    ///
    /// A failing frame aborts the pump and its error is returned.
    pub fn pump<F>(&mut self, elapsed: f64, mut frame: F) -> Result<u32>
    where
        F: FnMut(u64) -> Result<()>,
    {
        if !self.running {
            return Ok(0);
        }
        self.clock.advance_by(elapsed);

        let mut frames = 0;
        while self.running && self.clock.next_tick() {
            self.run_frame(&mut frame)?;
            frames += 1;
        }
        Ok(frames)
    }

    fn run_frame<F>(&mut self, frame: &mut F) -> Result<()>
    where
        F: FnMut(u64) -> Result<()>,
    {
        self.tick += 1;
        let result = frame(self.tick);
        if let Err(e) = &result {
            if self.debug {
                error!("frame {} failed: {}", self.tick, e);
                self.stop();
            }
        }
        result
    }
}

impl Default for MainLoop {
    fn default() -> Self {
        Self::new(60.0)
    }
}
