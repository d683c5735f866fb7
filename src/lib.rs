use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::application::DashboardConfig;
use crate::domain::logging::{LogComponent, LogLevel, get_logger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod time_utils;

/// Install the panic hook, console logger and browser time provider.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(if cfg!(debug_assertions) {
        infrastructure::ConsoleLogger::new_development()
    } else {
        infrastructure::ConsoleLogger::new_production()
    });
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Environment dashboard initialized");
}

/// Mount the dashboard with default settings.
#[wasm_bindgen]
pub fn mount_dashboard() {
    mount(DashboardConfig::default());
}

/// Mount the dashboard with a partial JSON config, e.g. `{"cadence_ms": 1000}`.
#[wasm_bindgen]
pub fn mount_dashboard_with_config(json: &str) -> Result<(), JsValue> {
    match DashboardConfig::from_json(json) {
        Ok(config) => {
            mount(config);
            Ok(())
        }
        Err(e) => {
            crate::log_error!(LogComponent::Presentation("Mount"), "❌ {}", e);
            Err(JsValue::from_str(&e.to_string()))
        }
    }
}

fn mount(config: DashboardConfig) {
    get_logger().set_min_level(config.log_level);
    get_logger().log_with_metadata(
        LogLevel::Info,
        LogComponent::Presentation("Mount"),
        "Mounting dashboard",
        serde_json::to_value(&config).unwrap_or_default(),
    );
    leptos::mount_to_body(move || leptos::view! { <App config=config /> });
}
