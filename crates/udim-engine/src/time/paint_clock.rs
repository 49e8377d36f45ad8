use std::time::Instant;

/// Monotonic millisecond timestamps for paint callbacks.
///
/// Timestamps are measured from the clock's creation, like a page's
/// high-resolution time origin.
#[derive(Debug, Clone)]
pub struct PaintClock {
    origin: Instant,
}

impl PaintClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }

    /// Milliseconds since the clock was created.
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for PaintClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotonic() {
        let c = PaintClock::new();
        let a = c.now_ms();
        let b = c.now_ms();
        assert!(a >= 0.0);
        assert!(b >= a);
    }
}
