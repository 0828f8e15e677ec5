/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the first frame
    pub time: f32,
    /// Seconds since the previous frame
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Simulated frames `step` seconds apart, starting at time zero
#[derive(Debug, Clone)]
pub struct FixedStepFrames {
    frame_number: u64,
    step: f32,
}

impl FixedStepFrames {
    pub fn new(step: f32) -> Self {
        Self {
            frame_number: 0,
            step: step.max(0.0),
        }
    }
}

impl Iterator for FixedStepFrames {
    type Item = FrameInfo;

    fn next(&mut self) -> Option<FrameInfo> {
        let delta = if self.frame_number == 0 { 0.0 } else { self.step };
        let info = FrameInfo::new(self.frame_number, self.frame_number as f32 * self.step, delta);
        self.frame_number += 1;
        Some(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_step_frames() {
        let frames: Vec<_> = FixedStepFrames::new(0.5).take(3).collect();

        assert_eq!(frames[0], FrameInfo::new(0, 0.0, 0.0));
        assert_eq!(frames[1], FrameInfo::new(1, 0.5, 0.5));
        assert_eq!(frames[2], FrameInfo::new(2, 1.0, 0.5));
    }

    #[test]
    fn test_fixed_step_negative_is_frozen() {
        let frames: Vec<_> = FixedStepFrames::new(-1.0).take(2).collect();
        assert!(frames.iter().all(|f| f.time == 0.0));
    }
}
