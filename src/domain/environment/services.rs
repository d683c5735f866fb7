use super::entities::{Humidity, Reading, Temperature};
use std::f64::consts::PI;

pub const BASE_TEMPERATURE_C: f64 = 22.5;
pub const DIURNAL_AMPLITUDE_C: f64 = 3.0;
/// Full width of the uniform jitter band, centred on zero.
pub const TEMPERATURE_JITTER_C: f64 = 2.0;
pub const HUMIDITY_FLOOR: f64 = 50.0;
pub const HUMIDITY_SPAN: f64 = 20.0;

/// Snapshot of the local wall clock taken once per sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    /// Local hour of day, 0..=23.
    pub hour: u32,
    /// Locale time-of-day label, e.g. `14:03:27`.
    pub label: String,
}

/// Domain abstraction for the local clock
pub trait Clock {
    fn now(&self) -> ClockReading;
}

/// Domain abstraction for a uniform random source
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&self) -> f64;
}

/// Diurnal sinusoid: zero at midnight and noon, peak at 06:00.
pub fn diurnal_variation(hour: u32) -> f64 {
    ((hour as f64 / 24.0) * 2.0 * PI).sin() * DIURNAL_AMPLITUDE_C
}

/// Produces synthetic readings from a base curve plus uniform noise.
pub struct SampleGenerator<C, R> {
    clock: C,
    random: R,
}

impl<C: Clock, R: RandomSource> SampleGenerator<C, R> {
    pub fn new(clock: C, random: R) -> Self {
        Self { clock, random }
    }

    /// Reads the clock once, then draws temperature jitter before humidity.
    pub fn generate(&self) -> Reading {
        let now = self.clock.now();
        let jitter = (self.random.next_unit() - 0.5) * TEMPERATURE_JITTER_C;
        let temperature = BASE_TEMPERATURE_C + diurnal_variation(now.hour) + jitter;
        let humidity = self.random.next_unit() * HUMIDITY_SPAN + HUMIDITY_FLOOR;

        Reading::new(Temperature::from_celsius(temperature), Humidity::new(humidity), now.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FixedClock(u32);

    impl Clock for FixedClock {
        fn now(&self) -> ClockReading {
            ClockReading { hour: self.0, label: format!("{:02}:00:00", self.0) }
        }
    }

    struct Sequence(Cell<usize>, Vec<f64>);

    impl RandomSource for Sequence {
        fn next_unit(&self) -> f64 {
            let i = self.0.get();
            self.0.set(i + 1);
            self.1[i % self.1.len()]
        }
    }

    #[test]
    fn variation_follows_the_day() {
        assert!(diurnal_variation(0).abs() < 1e-12);
        assert!((diurnal_variation(6) - 3.0).abs() < 1e-12);
        assert!(diurnal_variation(12).abs() < 1e-12);
        assert!((diurnal_variation(18) + 3.0).abs() < 1e-12);
    }

    #[test]
    fn midpoint_draws_give_the_base_curve() {
        let generator = SampleGenerator::new(FixedClock(0), Sequence(Cell::new(0), vec![0.5, 0.0]));
        let reading = generator.generate();
        assert!((reading.temperature.celsius() - 22.5).abs() < 1e-12);
        assert_eq!(reading.humidity.percent(), 50.0);
        assert_eq!(reading.timestamp, "00:00:00");
    }

    #[test]
    fn temperature_draw_comes_before_humidity() {
        let generator = SampleGenerator::new(FixedClock(6), Sequence(Cell::new(0), vec![1.0, 0.25]));
        let reading = generator.generate();
        assert!((reading.temperature.celsius() - 26.5).abs() < 1e-12);
        assert_eq!(reading.humidity.percent(), 55.0);
    }
}
