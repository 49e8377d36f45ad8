/// Simulation step length in milliseconds.
pub const MS_PER_GAME_TICK: f64 = 4.0;

/// Fixed-timestep accumulator.
///
/// Wall time arrives at arbitrary cadence through [`begin_frame`]; the
/// simulation drains it in constant `tick_ms` steps through
/// [`consume_tick`]. Whatever is left over carries into the next frame, so
/// simulated time never drifts from wall time.
///
/// The first `begin_frame` only sets the baseline.
///
/// [`begin_frame`]: FixedStep::begin_frame
/// [`consume_tick`]: FixedStep::consume_tick
#[derive(Debug, Clone)]
pub struct FixedStep {
    tick_ms: f64,
    previous: Option<f64>,
    accumulated: f64,
}

impl FixedStep {
    /// Creates an accumulator. Non-positive or non-finite steps fall back to
    /// [`MS_PER_GAME_TICK`].
    pub fn new(tick_ms: f64) -> Self {
        let tick_ms = if tick_ms > 0.0 && tick_ms.is_finite() {
            tick_ms
        } else {
            log::warn!("invalid tick length {tick_ms}ms, using {MS_PER_GAME_TICK}ms");
            MS_PER_GAME_TICK
        };
        Self { tick_ms, previous: None, accumulated: 0.0 }
    }

    #[inline]
    pub fn tick_ms(&self) -> f64 {
        self.tick_ms
    }

    /// Unconsumed wall time in milliseconds.
    #[inline]
    pub fn residual_ms(&self) -> f64 {
        self.accumulated
    }

    /// Sets the baseline without accumulating.
    pub fn reset(&mut self, now: f64) {
        self.previous = Some(now);
        self.accumulated = 0.0;
    }

    /// Adds the wall time since the previous call and returns it.
    ///
    /// A timestamp earlier than the previous one counts as zero elapsed.
    pub fn begin_frame(&mut self, now: f64) -> f64 {
        let elapsed = match self.previous {
            Some(prev) => (now - prev).max(0.0),
            None => 0.0,
        };
        self.previous = Some(now);
        self.accumulated += elapsed;
        elapsed
    }

    /// Drains one step if enough time has accumulated.
    pub fn consume_tick(&mut self) -> bool {
        if self.accumulated >= self.tick_ms {
            self.accumulated -= self.tick_ms;
            true
        } else {
            false
        }
    }
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(MS_PER_GAME_TICK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(step: &mut FixedStep) -> u32 {
        let mut n = 0;
        while step.consume_tick() {
            n += 1;
        }
        n
    }

    #[test]
    fn ten_ms_runs_two_ticks_and_carries_two() {
        let mut s = FixedStep::new(4.0);
        s.begin_frame(1000.0);
        assert_eq!(s.begin_frame(1010.0), 10.0);
        assert_eq!(drain(&mut s), 2);
        assert_eq!(s.residual_ms(), 2.0);

        // Carry plus 2ms completes a third step.
        s.begin_frame(1012.0);
        assert_eq!(drain(&mut s), 1);
        assert_eq!(s.residual_ms(), 0.0);
    }

    #[test]
    fn first_frame_only_sets_baseline() {
        let mut s = FixedStep::default();
        assert_eq!(s.begin_frame(50_000.0), 0.0);
        assert_eq!(drain(&mut s), 0);
    }

    #[test]
    fn delayed_frame_runs_more_ticks() {
        let mut s = FixedStep::new(4.0);
        s.reset(0.0);
        s.begin_frame(100.0);
        assert_eq!(drain(&mut s), 25);
    }

    #[test]
    fn time_going_backwards_adds_nothing() {
        let mut s = FixedStep::new(4.0);
        s.reset(10.0);
        assert_eq!(s.begin_frame(5.0), 0.0);
        assert_eq!(s.residual_ms(), 0.0);
    }

    #[test]
    fn invalid_step_falls_back() {
        assert_eq!(FixedStep::new(0.0).tick_ms(), MS_PER_GAME_TICK);
        assert_eq!(FixedStep::new(f64::NAN).tick_ms(), MS_PER_GAME_TICK);
    }
}
