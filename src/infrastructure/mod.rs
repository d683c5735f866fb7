pub mod rendering;
pub mod services;

pub use services::{BrowserClock, BrowserRandom, BrowserTimeProvider, ConsoleLogger};
