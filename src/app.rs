use leptos::html::Canvas;
use leptos::*;

use crate::{
    application::{DashboardConfig, SamplingService, SamplingTimer},
    domain::{
        chart::{ChartLayout, ChartProjector, DashboardProjection, TooltipContent, tooltip},
        environment::{Reading, ReadingWindow, TemperatureUnit},
        logging::{LogComponent, get_logger},
    },
    infrastructure::{BrowserClock, BrowserRandom, rendering::CanvasChartRenderer},
};

const STYLES: &str = r#"
.enviro-app {
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    background: #111827;
    min-height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    margin: 0;
}

.dashboard {
    box-sizing: border-box;
    width: 100%;
    height: 100vh;
    padding: 32px;
    color: #ffffff;
    display: flex;
    flex-direction: column;
}

.dashboard-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 32px;
}

.dashboard-title {
    font-size: 36px;
    font-weight: 700;
    margin: 0;
    background: linear-gradient(to right, #6366f1, #14b8a6);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.unit-toggle {
    display: flex;
    align-items: center;
    gap: 8px;
}

.unit-toggle .active {
    font-weight: 700;
}

.toggle-track {
    width: 56px;
    height: 28px;
    display: flex;
    align-items: center;
    background: #1f2937;
    border-radius: 9999px;
    padding: 4px;
    box-sizing: border-box;
    cursor: pointer;
}

.toggle-knob {
    width: 20px;
    height: 20px;
    border-radius: 9999px;
    background: linear-gradient(to right, #6366f1, #14b8a6);
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.3);
    transition: transform 300ms ease-in-out;
}

.toggle-knob.on {
    transform: translateX(28px);
}

.cards {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 32px;
    margin-bottom: 32px;
}

.card {
    background: #1f2937;
    padding: 24px;
    border-radius: 8px;
    width: 256px;
    box-sizing: border-box;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.card-label {
    color: #9ca3af;
    margin: 0 0 4px 0;
}

.card-value {
    font-size: 30px;
    font-weight: 700;
    margin: 0;
}

.temperature { color: #818cf8; }
.humidity { color: #2dd4bf; }

.chart-panel {
    flex-grow: 1;
    background: #1f2937;
    padding: 24px;
    border-radius: 8px;
    position: relative;
    min-height: 240px;
}

.chart-canvas {
    width: 100%;
    height: 100%;
    display: block;
}

.tooltip {
    position: absolute;
    background: #1f2937;
    padding: 16px;
    border-radius: 8px;
    border: 1px solid #374151;
    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.4);
    pointer-events: none;
    transform: translate(12px, -50%);
    white-space: nowrap;
}

.tooltip p { margin: 0; }
.tooltip-time { color: #d1d5db; }
.tooltip-temperature { color: #818cf8; }
.tooltip-humidity { color: #2dd4bf; }
"#;

/// Full-viewport shell hosting the dashboard.
#[component]
pub fn App(#[prop(optional)] config: DashboardConfig) -> impl IntoView {
    view! {
        <style>{STYLES}</style>
        <div class="enviro-app">
            <EnvironmentDashboard config=config />
        </div>
    }
}

/// Live temperature/humidity dashboard.
///
/// Owns the reading window and the sampling timer; both are released when
/// the component is unmounted. `on_sample` receives a copy of every new reading.
#[component]
pub fn EnvironmentDashboard(
    config: DashboardConfig,
    #[prop(optional, into)] on_sample: Option<Callback<Reading>>,
) -> impl IntoView {
    let unit = create_rw_signal(config.initial_unit);
    let readings = create_rw_signal(ReadingWindow::new(config.capacity));
    let projector = ChartProjector::new(config.temperature_axis());
    let projection = create_memo(move |_| readings.with(|w| projector.project(w, unit.get())));

    let service = SamplingService::new(BrowserClock::new(), BrowserRandom);
    let timer = SamplingTimer::start(config.cadence_ms, move || {
        let reading = readings.try_update(|window| service.tick(window));
        if let (Some(reading), Some(on_sample)) = (reading, on_sample) {
            on_sample.call(reading);
        }
    });

    get_logger().info(
        LogComponent::Presentation("Dashboard"),
        &format!("📊 Dashboard mounted (capacity {}, unit {})", config.capacity, config.initial_unit),
    );

    on_cleanup(move || {
        drop(timer);
        crate::log_info!(LogComponent::Presentation("Dashboard"), "Dashboard unmounted");
    });

    let toggle_unit = move |_: ev::MouseEvent| {
        unit.update(|u| *u = u.toggle());
        crate::log_info!(
            LogComponent::Presentation("UnitToggle"),
            "🌡️ Display unit switched to {}",
            unit.get_untracked()
        );
    };

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1 class="dashboard-title">"Real-time Environment Dashboard"</h1>
                <div class="unit-toggle">
                    <span class:active=move || !unit.get().is_celsius()>"°F"</span>
                    <div class="toggle-track" on:click=toggle_unit>
                        <div class="toggle-knob" class:on=move || unit.get().is_celsius()></div>
                    </div>
                    <span class:active=move || unit.get().is_celsius()>"°C"</span>
                </div>
            </div>
            <div class="cards">
                <ReadingCard
                    label="Temperature"
                    accent="temperature"
                    value=Signal::derive(move || projection.with(|p| p.latest_temperature.clone()))
                >
                    <ThermometerIcon />
                </ReadingCard>
                <ReadingCard
                    label="Humidity"
                    accent="humidity"
                    value=Signal::derive(move || projection.with(|p| p.latest_humidity.clone()))
                >
                    <CloudIcon />
                </ReadingCard>
            </div>
            <ChartPanel projection=projection unit=unit.read_only() />
        </div>
    }
}

/// Latest-value card with an icon on the right.
#[component]
fn ReadingCard(
    label: &'static str,
    accent: &'static str,
    #[prop(into)] value: Signal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <div>
                <p class="card-label">{label}</p>
                <p class=format!("card-value {accent}")>{move || value.get()}</p>
            </div>
            <div class=accent>{children()}</div>
        </div>
    }
}

#[component]
fn ThermometerIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M14 4v10.54a4 4 0 1 1-4 0V4a2 2 0 0 1 4 0Z" />
        </svg>
    }
}

#[component]
fn CloudIcon() -> impl IntoView {
    view! {
        <svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24"
            fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" />
        </svg>
    }
}

/// Canvas line chart with hover tooltip. Redraws whenever the projection,
/// the hovered point or the viewport size changes.
#[component]
fn ChartPanel(projection: Memo<DashboardProjection>, unit: ReadSignal<TemperatureUnit>) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let renderer = store_value(None::<CanvasChartRenderer>);
    let layout = store_value(None::<ChartLayout>);
    let hover = create_rw_signal(None::<usize>);
    let pointer = create_rw_signal((0.0_f64, 0.0_f64));
    let resized = create_trigger();

    let resize_handle = window_event_listener(ev::resize, move |_| resized.notify());
    on_cleanup(move || resize_handle.remove());

    create_effect(move |_| {
        resized.track();
        let hovered = hover.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        if renderer.with_value(Option::is_none) {
            let element: &web_sys::HtmlCanvasElement = &canvas;
            match CanvasChartRenderer::new(element.clone()) {
                Ok(r) => renderer.set_value(Some(r)),
                Err(e) => {
                    crate::log_warn!(LogComponent::Presentation("ChartPanel"), "{}", e);
                    return;
                }
            }
        }

        projection.with(|p| {
            renderer.with_value(|r| {
                let Some(r) = r else { return };
                match r.render(p, hovered) {
                    Ok(l) => layout.set_value(Some(l)),
                    Err(e) => {
                        crate::log_warn!(LogComponent::Presentation("ChartPanel"), "{}", e);
                    }
                }
            });
        });
    });

    let handle_mouse_move = move |ev: web_sys::MouseEvent| {
        let (x, y) = (ev.offset_x() as f64, ev.offset_y() as f64);
        let count = projection.with_untracked(|p| p.len());
        let index = layout
            .get_value()
            .filter(|l| l.contains(x, y))
            .and_then(|l| l.index_at(x, count));
        pointer.set((x, y));
        hover.set(index);
    };

    let tooltip_content = move || -> Option<TooltipContent> {
        let index = hover.get()?;
        projection.with(|p| p.points.get(index).map(|point| tooltip(point, unit.get())))
    };

    view! {
        <div class="chart-panel">
            <canvas
                class="chart-canvas"
                node_ref=canvas_ref
                on:mousemove=handle_mouse_move
                on:mouseleave=move |_| hover.set(None)
            />
            {move || {
                tooltip_content().map(|content| {
                    let (x, y) = pointer.get();
                    view! {
                        <div class="tooltip" style:left=format!("{}px", x + 24.0) style:top=format!("{}px", y + 24.0)>
                            <p class="tooltip-time">{content.time}</p>
                            <p class="tooltip-temperature">{content.temperature}</p>
                            <p class="tooltip-humidity">{content.humidity}</p>
                        </div>
                    }
                })
            }}
        </div>
    }
}
