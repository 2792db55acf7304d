use std::time::Instant;

/// Frame timing for animated transforms.
///
/// Reports elapsed time in milliseconds since creation, which is what
/// [`build_transform_3d`](crate::build_transform_3d) spins on, and tracks the
/// delta between successive [`tick`](Self::tick) calls.
///
/// # Example
/// ```
/// use uniforma::FrameClock;
///
/// let mut clock = FrameClock::new();
/// let dt = clock.tick();
/// assert!(dt >= 0.0);
/// assert!(clock.now_ms() >= 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct FrameClock {
    start_time: Instant,
    last_frame: Instant,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame: now,
            frame_count: 0,
        }
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed since the clock was created.
    pub fn now_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }

    /// Marks the start of a new frame and returns the seconds since the last one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
        dt
    }

    /// Number of [`tick`](Self::tick) calls so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second implied by a frame delta.
    pub fn fps(dt: f32) -> f32 {
        if dt > 0.0 { 1.0 / dt } else { 0.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn time_never_goes_backwards() {
        let clock = FrameClock::new();
        let first = clock.now_ms();
        std::thread::sleep(Duration::from_millis(2));
        let second = clock.now_ms();
        assert!(second > first);
    }

    #[test]
    fn tick_counts_frames() {
        let mut clock = FrameClock::new();
        for _ in 0..3 {
            assert!(clock.tick() >= 0.0);
        }
        assert_eq!(clock.frame_count(), 3);
    }

    #[test]
    fn fps_handles_zero_delta() {
        assert_eq!(FrameClock::fps(0.0), 0.0);
        assert!((FrameClock::fps(0.02) - 50.0).abs() < 1e-3);
    }
}
