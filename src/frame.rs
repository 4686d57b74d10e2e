use std::time::Duration;

use crate::core::Clock;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    pub time: f32,
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Deterministic frames with a constant delta, ending after `duration` seconds
///
/// Used for headless runs and tests: the same plan always produces the same frames.
#[derive(Debug, Clone)]
pub struct SimulatedFrames {
    frame_number: u64,
    delta: f32,
    frame_count: u64,
}

impl SimulatedFrames {
    pub fn new(fps: f32, duration: f32) -> Self {
        Self {
            frame_number: 0,
            delta: 1.0 / fps,
            frame_count: (duration * fps).round().max(0.0) as u64,
        }
    }
}

impl Iterator for SimulatedFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.frame_number >= self.frame_count {
            return None;
        }
        self.frame_number += 1;
        let time = self.frame_number as f32 * self.delta;
        Some(FrameInfo::new(self.frame_number - 1, time, self.delta))
    }
}

/// Wall-clock frames paced to a target rate, ending after `duration` seconds
#[derive(Debug)]
pub struct RealtimeFrames {
    frame_number: u64,
    clock: Clock,
    frame: Duration,
    duration: f32,
}

impl RealtimeFrames {
    pub fn new(fps: f32, duration: f32) -> Self {
        Self {
            frame_number: 0,
            clock: Clock::new(),
            frame: Duration::from_secs_f32(1.0 / fps),
            duration,
        }
    }
}

impl Iterator for RealtimeFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        if self.clock.elapsed() >= self.duration {
            return None;
        }
        std::thread::sleep(self.clock.remaining(self.frame));

        let delta = self.clock.tick();
        let info = FrameInfo::new(self.frame_number, self.clock.elapsed(), delta);
        self.frame_number += 1;
        Some(info)
    }
}
