use enviro_dashboard_wasm::domain::environment::{
    Clock, ClockReading, RandomSource, SampleGenerator, diurnal_variation,
};
use quickcheck_macros::quickcheck;
use std::cell::Cell;

struct FixedHour(u32);

impl Clock for FixedHour {
    fn now(&self) -> ClockReading {
        ClockReading { hour: self.0, label: format!("{:02}:30:00", self.0) }
    }
}

/// Replays draws scaled into `[0, 1)`.
struct Draws {
    values: Vec<f64>,
    next: Cell<usize>,
}

impl Draws {
    fn new(raw: &[u16]) -> Self {
        let values = raw.iter().map(|v| *v as f64 / 65_536.0).collect();
        Self { values, next: Cell::new(0) }
    }
}

impl RandomSource for Draws {
    fn next_unit(&self) -> f64 {
        let i = self.next.get();
        self.next.set(i + 1);
        self.values[i % self.values.len()]
    }
}

#[quickcheck]
fn readings_stay_within_bounds(hour: u8, first: u16, second: u16) -> bool {
    let generator = SampleGenerator::new(FixedHour(hour as u32 % 24), Draws::new(&[first, second]));
    let reading = generator.generate();
    let t = reading.temperature.celsius();
    let h = reading.humidity.percent();
    (18.5 - 1e-9..=26.5 + 1e-9).contains(&t) && (50.0..70.0).contains(&h)
}

#[test]
fn extreme_draws_hit_the_edges_of_the_band() {
    let low = SampleGenerator::new(FixedHour(18), Draws::new(&[0, 0])).generate();
    assert!((low.temperature.celsius() - 18.5).abs() < 1e-9);
    assert_eq!(low.humidity.percent(), 50.0);

    let high = SampleGenerator::new(FixedHour(6), Draws::new(&[u16::MAX, u16::MAX])).generate();
    assert!(high.temperature.celsius() < 26.5);
    assert!(high.humidity.percent() < 70.0);
}

#[test]
fn timestamp_comes_from_the_clock() {
    let reading = SampleGenerator::new(FixedHour(9), Draws::new(&[1, 2])).generate();
    assert_eq!(reading.timestamp, "09:30:00");
}

#[test]
fn every_hour_stays_within_amplitude() {
    for hour in 0..24 {
        assert!(diurnal_variation(hour).abs() <= 3.0 + 1e-12);
    }
}
