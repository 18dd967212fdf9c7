use std::time::{Duration, Instant};

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        (Instant::now() - self.start).as_millis()
    }

    /// Measures duration of given action.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let start = Timer::start();
        let result = action();
        let elapsed = start.elapsed_millis();

        (result, Duration::from_millis(elapsed as u64))
    }

    /// Measures duration of given action and passes it to the callback.
    pub fn measure_duration_with_callback<R, F, C>(action: F, callback: C) -> R
    where
        F: FnOnce() -> R,
        C: FnOnce(Duration),
    {
        let (result, duration) = Self::measure_duration(action);
        callback(duration);

        result
    }
}
