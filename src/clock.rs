use std::time::{Duration, Instant};

/// Timing of one paced frame
#[derive(Debug, Clone, Copy)]
pub struct FrameTime {
    /// Wall time since the previous tick
    pub dt: Duration,
    /// Monotonic frame counter
    pub frame_index: u64,
}

/// Paces the frame loop to a target rate and measures the achieved rate.
///
/// The measured rate is for display only; animation time does not follow it.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    next_frame: Instant,
    frame_index: u64,
    frames_since_last_update: usize,
    last_fps_calculation: Instant,
    fps: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        FrameClock {
            last: now,
            next_frame: now,
            frame_index: 0,
            frames_since_last_update: 0,
            last_fps_calculation: now,
            fps: 0.0,
        }
    }

    /// Blocks until the next frame boundary at `target_fps`.
    ///
    /// A frame that overran its slot is not made up for; the schedule
    /// restarts from now.
    pub fn tick(&mut self, target_fps: u32) -> FrameTime {
        let frame_duration = Duration::from_secs_f64(1.0 / target_fps.max(1) as f64);
        self.next_frame += frame_duration;

        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
        } else {
            self.next_frame = now;
        }

        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.record_frame(now);

        let time = FrameTime {
            dt,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }

    fn record_frame(&mut self, now: Instant) {
        self.frames_since_last_update += 1;
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }
    }

    /// Frames per second measured over the last full second
    pub fn fps(&self) -> f64 {
        self.fps
    }

    /// Number of ticks so far
    pub fn frames(&self) -> u64 {
        self.frame_index
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
