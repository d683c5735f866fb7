pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{Reading, ReadingWindow, WINDOW_CAPACITY};
pub use services::{Clock, ClockReading, RandomSource, SampleGenerator, diurnal_variation};
pub use value_objects::{
    Humidity, Temperature, TemperatureUnit, celsius_to_fahrenheit, fahrenheit_to_celsius,
};
