use std::cell::Cell;

use gloo_timers::callback::Interval;

use crate::domain::{
    environment::{Clock, RandomSource, Reading, ReadingWindow, SampleGenerator},
    logging::{LogComponent, get_logger},
};

/// One sampling step: generate a reading and append it to a window.
pub struct SamplingService<C, R> {
    generator: SampleGenerator<C, R>,
    ticks: Cell<u64>,
}

impl<C: Clock, R: RandomSource> SamplingService<C, R> {
    pub fn new(clock: C, random: R) -> Self {
        Self { generator: SampleGenerator::new(clock, random), ticks: Cell::new(0) }
    }

    /// Runs generator then append on the caller's window and returns the new reading.
    pub fn tick(&self, window: &mut ReadingWindow) -> Reading {
        let reading = self.generator.generate();
        let tick = self.ticks.get() + 1;
        self.ticks.set(tick);

        crate::log_debug!(
            LogComponent::Application("Sampling"),
            "tick #{} at {}: {:.2}°C / {:.1}%",
            tick,
            reading.timestamp,
            reading.temperature.celsius(),
            reading.humidity.percent()
        );

        if let Some(evicted) = window.append(reading.clone()) {
            crate::log_trace!(
                LogComponent::Domain("ReadingWindow"),
                "evicted reading from {} (capacity {})",
                evicted.timestamp,
                window.capacity()
            );
        }

        reading
    }

    /// Number of ticks run so far.
    pub fn tick_count(&self) -> u64 {
        self.ticks.get()
    }
}

/// Owned handle to the recurring sampling interval.
///
/// The interval is cancelled on `stop` or when the handle is dropped, so the
/// owner's lifetime bounds every firing.
pub struct SamplingTimer {
    interval: Option<Interval>,
    cadence_ms: u32,
}

impl SamplingTimer {
    pub fn start(cadence_ms: u32, on_tick: impl FnMut() + 'static) -> Self {
        get_logger().info(
            LogComponent::Application("SamplingTimer"),
            &format!("⏱️ Sampling every {} ms", cadence_ms),
        );
        Self { interval: Some(Interval::new(cadence_ms, on_tick)), cadence_ms }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn stop(&mut self) {
        if let Some(interval) = self.interval.take() {
            drop(interval.cancel());
            crate::log_info!(
                LogComponent::Application("SamplingTimer"),
                "🛑 Sampling every {} ms stopped",
                self.cadence_ms
            );
        }
    }
}

impl Drop for SamplingTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::environment::ClockReading;
    use std::cell::Cell;

    struct StepClock(Cell<u32>);

    impl Clock for StepClock {
        fn now(&self) -> ClockReading {
            let n = self.0.get();
            self.0.set(n + 1);
            ClockReading { hour: 12, label: format!("s{n}") }
        }
    }

    struct Half;

    impl RandomSource for Half {
        fn next_unit(&self) -> f64 {
            0.5
        }
    }

    #[test]
    fn tick_appends_to_the_callers_window() {
        let service = SamplingService::new(StepClock(Cell::new(0)), Half);
        let mut window = ReadingWindow::new(2);
        let first = service.tick(&mut window);
        service.tick(&mut window);
        service.tick(&mut window);

        assert_eq!(first.timestamp, "s0");
        assert_eq!(service.tick_count(), 3);
        assert_eq!(window.len(), 2);
        assert_eq!(window.oldest().unwrap().timestamp, "s1");
    }
}
