#![allow(non_snake_case)]

mod config;
mod fixtures;
mod models;
mod services;
mod state;
mod ui;

use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use fixtures::PlantFixtures;
use once_cell::sync::OnceCell;
use services::engine::DecisionServices;
use state::{use_app_state, DashboardState};
use tracing::{error, info};
use ui::layout::{AppHeader, MainContent, TabNav};

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();
pub(crate) static PLANT_FIXTURES: OnceCell<PlantFixtures> = OnceCell::new();
pub(crate) static DECISION_SERVICES: OnceCell<DecisionServices> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    init_logging(&config);
    bootstrap_infrastructure(config);

    LaunchBuilder::new()
        .with_cfg(dioxus_web::Config::new().rootname("main"))
        .launch(App);
}

fn init_logging(config: &AppConfig) {
    static INIT: std::sync::Once = std::sync::Once::new();
    let level = config.log_level.as_tracing();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(level);
    });
}

fn bootstrap_infrastructure(config: AppConfig) {
    info!(
        production = config.is_production(),
        horizon = config.schedule_horizon,
        "console configured"
    );
    let _ = APP_CONFIG.set(config);

    match fixtures::load_plant_fixtures() {
        Ok(plant) => {
            info!(
                schedule = plant.vessel_schedule.len(),
                predictions = plant.delay_predictions.len(),
                reports = plant.reports.len(),
                "plant fixtures installed"
            );
            let services = DecisionServices::from_fixtures(&plant);
            let _ = PLANT_FIXTURES.set(plant);
            let _ = DECISION_SERVICES.set(services);
        }
        Err(err) => {
            error!(?err, "plant fixtures failed to load, panels will render empty");
        }
    }
}

#[component]
fn App() -> Element {
    let app_state = use_signal(DashboardState::default);

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative",
            Router::<Route> {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Console {},
}

#[component]
fn Console() -> Element {
    let active_tab = use_app_state().read().active_tab;

    rsx! {
        div { class: "min-h-screen bg-gradient-to-br from-slate-50 to-blue-50",
            AppHeader {}
            TabNav {}
            MainContent { tab: active_tab }
        }
    }
}
