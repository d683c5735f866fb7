use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Value Object - Temperature, always stored in degrees Celsius
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize,
)]
pub struct Temperature(f64);

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Self {
        Self(celsius)
    }

    pub fn celsius(&self) -> f64 {
        self.0
    }

    /// Unrounded value in the requested unit.
    pub fn in_unit(&self, unit: TemperatureUnit) -> f64 {
        unit.from_celsius(self.0)
    }

    /// One decimal place plus unit symbol, e.g. `72.5°F`.
    pub fn format(&self, unit: TemperatureUnit) -> String {
        format!("{:.1}{}", self.in_unit(unit), unit.symbol())
    }
}

/// Value Object - Relative humidity in percent
#[derive(
    Debug, Clone, Copy, PartialEq, PartialOrd, From, Into, Constructor, Serialize, Deserialize,
)]
pub struct Humidity(f64);

impl Humidity {
    pub fn percent(&self) -> f64 {
        self.0
    }

    pub fn format(&self) -> String {
        format!("{:.1}%", self.0)
    }
}

/// Display mode for temperatures. Toggled by the user, never stored on readings.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[display(fmt = "°C")]
    #[strum(serialize = "celsius")]
    Celsius,
    #[default]
    #[display(fmt = "°F")]
    #[strum(serialize = "fahrenheit")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn toggle(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }

    pub fn is_celsius(&self) -> bool {
        matches!(self, TemperatureUnit::Celsius)
    }

    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius_to_fahrenheit(celsius),
        }
    }

    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => fahrenheit_to_celsius(value),
        }
    }
}
