//! Progress bookkeeping for the report-generation flow.

/// Ticker period while the report call is in flight.
pub const TICK_MILLIS: u64 = 200;

const TICK_STEP: u8 = 5;
const TICK_CEILING: u8 = 85;

/// Pure progress arithmetic for one generation attempt.
///
/// The ticker advances the bar in small steps while the network call
/// is in flight; settling pins it to its terminal values so a stale
/// tick can never move it backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationProgress {
    value: u8,
}

impl GenerationProgress {
    pub fn value(&self) -> u8 {
        self.value
    }

    /// One ticker increment, capped at the in-flight ceiling.
    pub fn tick(&mut self) {
        self.value = (self.value + TICK_STEP).min(TICK_CEILING);
    }

    /// The document arrived, pin to the almost-done mark.
    pub fn settle(&mut self) {
        self.value = 95;
    }

    /// The download is on its way to the user.
    pub fn finish(&mut self) {
        self.value = 100;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_stop_at_the_ceiling() {
        let mut progress = GenerationProgress::default();
        for _ in 0..40 {
            progress.tick();
        }
        assert_eq!(progress.value(), 85);
    }

    #[test]
    fn settle_then_finish_pins_terminal_values() {
        let mut progress = GenerationProgress::default();
        progress.tick();
        progress.settle();
        assert_eq!(progress.value(), 95);
        progress.finish();
        assert_eq!(progress.value(), 100);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut progress = GenerationProgress::default();
        progress.tick();
        progress.reset();
        assert_eq!(progress.value(), 0);
    }
}
