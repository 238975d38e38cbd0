//! Frame time source and frame-rate cap.

use std::time::{Duration, Instant};

/// Monotonic scene time in seconds, sampled once per frame.
#[derive(Debug, Clone, Copy)]
pub enum FrameClock {
    /// Wall-clock seconds since the clock was started.
    Realtime { start: Instant },
    /// Fixed step per frame, independent of how long frames take.
    Fixed { step: f64, frame: u64 },
}

impl FrameClock {
    pub fn realtime() -> Self {
        Self::Realtime {
            start: Instant::now(),
        }
    }

    pub fn fixed(fps: u32) -> Self {
        Self::Fixed {
            step: 1.0 / fps.max(1) as f64,
            frame: 0,
        }
    }

    /// Current time in seconds. Advances a fixed clock by one step.
    pub fn sample(&mut self) -> f64 {
        match self {
            Self::Realtime { start } => start.elapsed().as_secs_f64(),
            Self::Fixed { step, frame } => {
                let t = *frame as f64 * *step;
                *frame += 1;
                t
            }
        }
    }
}

/// Paces the loop at a target frame rate.
///
/// Deadlines advance by one frame duration per frame. When the loop falls more
/// than two frames behind, the schedule restarts from now instead of
/// rendering a burst of catch-up frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    frame_duration: Duration,
    next_frame: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32, now: Instant) -> Self {
        Self {
            frame_duration: Duration::from_nanos(1_000_000_000 / fps.max(1) as u64),
            next_frame: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Deadline of the next frame.
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// Whether the next frame is due at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Record a frame presented at `now` and return the next deadline.
    pub fn advance(&mut self, now: Instant) -> Instant {
        self.next_frame += self.frame_duration;
        if now > self.next_frame && now - self.next_frame > self.frame_duration * 2 {
            self.next_frame = now + self.frame_duration;
        }
        self.next_frame
    }
}
