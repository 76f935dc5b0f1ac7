use dioxus::prelude::*;
use dioxus_signals::Signal;
use thiserror::Error;
use time::util::days_in_year_month;
use time::Month;
use tracing::{debug, info, warn};

use crate::models::{OptimizationResult, ReportEntry};
use crate::services::engine::{
    decision_services, DecisionServices, OptimizationEngine, ReportService, ScenarioSimulator,
};

pub type AppSignal = Signal<DashboardState>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Dashboard,
    Input,
    Optimization,
    Predictions,
    Scenarios,
    Reports,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Input,
        Tab::Optimization,
        Tab::Predictions,
        Tab::Scenarios,
        Tab::Reports,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Input => "input",
            Self::Optimization => "optimization",
            Self::Predictions => "predictions",
            Self::Scenarios => "scenarios",
            Self::Reports => "reports",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Input => "Data Input",
            Self::Optimization => "Optimization",
            Self::Predictions => "AI Predictions",
            Self::Scenarios => "What-If Analysis",
            Self::Reports => "Reports",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScenarioField {
    VesselEta,
    RakeAvailability,
    DemurrageCost,
    FreightRate,
}

impl ScenarioField {
    pub fn label(self) -> &'static str {
        match self {
            Self::VesselEta => "Vessel ETA",
            Self::RakeAvailability => "Rake Availability (%)",
            Self::DemurrageCost => "Demurrage Cost ($/day)",
            Self::FreightRate => "Freight Rate ($/MT)",
        }
    }

    /// Range attributes for the slider controls. The browser enforces these.
    pub fn bounds(self) -> Option<SliderBounds> {
        match self {
            Self::VesselEta => None,
            Self::RakeAvailability => Some(SliderBounds {
                min: 50.0,
                max: 100.0,
                step: 1.0,
            }),
            Self::DemurrageCost => Some(SliderBounds {
                min: 5_000.0,
                max: 30_000.0,
                step: 1_000.0,
            }),
            Self::FreightRate => Some(SliderBounds {
                min: 0.8,
                max: 2.0,
                step: 0.1,
            }),
        }
    }

    pub fn parse(self, raw: &str) -> Result<ScenarioUpdate, ScenarioInputError> {
        let trimmed = raw.trim();
        let invalid = || ScenarioInputError::InvalidNumber {
            field: self.label(),
            raw: raw.to_string(),
        };

        match self {
            Self::VesselEta => {
                if trimmed.is_empty() || is_calendar_date(trimmed) {
                    Ok(ScenarioUpdate::VesselEta(trimmed.to_string()))
                } else {
                    Err(ScenarioInputError::InvalidDate {
                        raw: raw.to_string(),
                    })
                }
            }
            Self::RakeAvailability => trimmed
                .parse::<u8>()
                .map(ScenarioUpdate::RakeAvailability)
                .map_err(|_| invalid()),
            Self::DemurrageCost => trimmed
                .parse::<u32>()
                .map(ScenarioUpdate::DemurrageCost)
                .map_err(|_| invalid()),
            Self::FreightRate => match trimmed.parse::<f64>() {
                Ok(rate) if rate.is_finite() => Ok(ScenarioUpdate::FreightRate(rate)),
                _ => Err(invalid()),
            },
        }
    }
}

/// `YYYY-MM-DD` as a date control emits it. Years may run to six digits.
fn is_calendar_date(value: &str) -> bool {
    let mut parts = value.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(year, 4, 6) || !digits(month, 2, 2) || !digits(day, 2, 2) {
        return false;
    }

    let (Ok(year), Ok(month), Ok(day)) = (year.parse::<i32>(), month.parse::<u8>(), day.parse::<u8>())
    else {
        return false;
    };
    match Month::try_from(month) {
        Ok(month) => (1..=days_in_year_month(year, month)).contains(&day),
        Err(_) => false,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ScenarioUpdate {
    /// Raw control value; empty clears the ETA.
    VesselEta(String),
    RakeAvailability(u8),
    DemurrageCost(u32),
    FreightRate(f64),
}

#[derive(Debug, Error)]
pub enum ScenarioInputError {
    #[error("{field}: {raw:?} is not a number")]
    InvalidNumber { field: &'static str, raw: String },
    #[error("Vessel ETA: {raw:?} is not a YYYY-MM-DD date")]
    InvalidDate { raw: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioInputs {
    pub vessel_eta: String,
    pub rake_availability: u8,
    pub demurrage_cost: u32,
    pub freight_rate: f64,
}

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            vessel_eta: String::new(),
            rake_availability: 85,
            demurrage_cost: 15_000,
            freight_rate: 1.2,
        }
    }
}

impl ScenarioInputs {
    pub fn apply(&mut self, update: ScenarioUpdate) {
        match update {
            ScenarioUpdate::VesselEta(eta) => self.vessel_eta = eta,
            ScenarioUpdate::RakeAvailability(value) => self.rake_availability = value,
            ScenarioUpdate::DemurrageCost(value) => self.demurrage_cost = value,
            ScenarioUpdate::FreightRate(value) => self.freight_rate = value,
        }
    }

    /// Current value in the form the matching `<input>` expects.
    pub fn input_value(&self, field: ScenarioField) -> String {
        match field {
            ScenarioField::VesselEta => self.vessel_eta.clone(),
            ScenarioField::RakeAvailability => self.rake_availability.to_string(),
            ScenarioField::DemurrageCost => self.demurrage_cost.to_string(),
            ScenarioField::FreightRate => self.freight_rate.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    pub active_tab: Tab,
    pub uploaded_file: Option<String>,
    pub optimization: Option<OptimizationResult>,
    pub scenario: ScenarioInputs,
    pub scenario_projection: Option<OptimizationResult>,
}

impl DashboardState {
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Keeps only the first file name; an empty selection leaves the previous name.
    pub fn record_upload(&mut self, file_names: Vec<String>) -> bool {
        match file_names.into_iter().next() {
            Some(name) => {
                self.uploaded_file = Some(name);
                true
            }
            None => false,
        }
    }

    pub fn run_optimization(&mut self, engine: &dyn OptimizationEngine) {
        self.optimization = Some(engine.optimize());
    }

    pub fn update_scenario(&mut self, update: ScenarioUpdate) {
        self.scenario.apply(update);
    }

    pub fn simulate_scenario(&mut self, simulator: &dyn ScenarioSimulator) -> bool {
        match simulator.simulate(&self.scenario) {
            Some(projection) => {
                self.scenario_projection = Some(projection);
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
    services: &'static DecisionServices,
}

impl AppActions {
    pub fn select_tab(&self, tab: Tab) {
        if self.state.read().active_tab == tab {
            return;
        }
        info!(tab = tab.id(), "switching tab");
        let mut state = self.state;
        state.write().select_tab(tab);
    }

    pub fn record_upload(&self, file_names: Vec<String>) {
        if file_names.is_empty() {
            debug!("file picker closed without a selection");
            return;
        }
        let mut state = self.state;
        if state.write().record_upload(file_names) {
            info!(file = ?state.read().uploaded_file, "stem data file selected");
        }
    }

    pub fn run_optimization(&self) {
        let mut state = self.state;
        state.write().run_optimization(self.services.optimizer.as_ref());
        info!("optimization preview refreshed");
    }

    pub fn update_scenario_raw(&self, field: ScenarioField, raw: &str) {
        match field.parse(raw) {
            Ok(update) => {
                debug!(?update, "scenario input changed");
                let mut state = self.state;
                state.write().update_scenario(update);
            }
            Err(err) => warn!("ignoring scenario input: {err}"),
        }
    }

    pub fn simulate_scenario(&self) {
        let mut state = self.state;
        if state
            .write()
            .simulate_scenario(self.services.simulator.as_ref())
        {
            info!("scenario projection ready");
        } else {
            debug!("scenario simulation produced no projection");
        }
    }

    pub fn request_report(&self, report: &ReportEntry) {
        request_report(self.services.reports.as_ref(), report);
    }
}

/// Size of the rendered document, if the service produced one.
fn request_report(service: &dyn ReportService, report: &ReportEntry) -> Option<usize> {
    match service.download(report) {
        Some(bytes) => {
            info!(report = %report.title, size = bytes.len(), "report rendered");
            Some(bytes.len())
        }
        None => {
            debug!(report = %report.title, "report download unavailable");
            None
        }
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    let state = use_app_state();
    AppActions {
        state,
        services: decision_services(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::PlantFixtures;
    use crate::services::engine::{FixtureEngine, ScriptedEngine};

    fn engine() -> FixtureEngine {
        FixtureEngine::new(PlantFixtures::embedded().unwrap().optimization_preview)
    }

    #[test]
    fn starts_on_dashboard_with_empty_results() {
        let state = DashboardState::default();
        assert_eq!(state.active_tab, Tab::Dashboard);
        assert!(state.uploaded_file.is_none());
        assert!(state.optimization.is_none());
        assert_eq!(state.scenario, ScenarioInputs::default());
    }

    #[test]
    fn tab_ids_and_labels_are_distinct() {
        let mut ids: Vec<&str> = Tab::ALL.iter().map(|tab| tab.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Tab::ALL.len());
        assert_eq!(Tab::Scenarios.label(), "What-If Analysis");
    }

    #[test]
    fn selecting_a_tab_changes_only_the_tab() {
        let mut state = DashboardState::default();
        state.record_upload(vec!["stem.csv".into()]);
        let before = state.clone();

        for tab in Tab::ALL {
            state.select_tab(tab);
            assert_eq!(state.active_tab, tab);
            assert_eq!(state.uploaded_file, before.uploaded_file);
            assert_eq!(state.scenario, before.scenario);
        }
    }

    #[test]
    fn optimization_is_idempotent() {
        let engine = engine();
        let mut state = DashboardState::default();

        state.run_optimization(&engine);
        let first = state.optimization.clone().unwrap();
        for _ in 0..3 {
            state.run_optimization(&engine);
            assert_eq!(state.optimization.as_ref(), Some(&first));
        }
        assert_eq!(first.cost_saving, 180_000);
    }

    #[test]
    fn optimization_ignores_scenario_and_upload() {
        let engine = engine();
        let mut baseline = DashboardState::default();
        baseline.run_optimization(&engine);

        let mut tweaked = DashboardState::default();
        tweaked.record_upload(vec!["plan.xlsx".into()]);
        tweaked.update_scenario(ScenarioUpdate::FreightRate(2.0));
        tweaked.run_optimization(&engine);

        assert_eq!(tweaked.optimization, baseline.optimization);
    }

    #[test]
    fn scenario_update_leaves_other_fields_untouched() {
        let mut state = DashboardState::default();
        let original = state.scenario.clone();

        state.update_scenario(ScenarioUpdate::RakeAvailability(60));
        assert_eq!(state.scenario.rake_availability, 60);
        assert_eq!(state.scenario.vessel_eta, original.vessel_eta);
        assert_eq!(state.scenario.demurrage_cost, original.demurrage_cost);
        assert_eq!(state.scenario.freight_rate.to_bits(), original.freight_rate.to_bits());

        state.update_scenario(ScenarioUpdate::VesselEta("2024-03-09".into()));
        assert_eq!(state.scenario.vessel_eta, "2024-03-09");
        assert_eq!(state.scenario.rake_availability, 60);
        assert_eq!(state.scenario.demurrage_cost, 15_000);
    }

    #[test]
    fn raw_scenario_values_parse_per_field() {
        assert_eq!(
            ScenarioField::RakeAvailability.parse("72").unwrap(),
            ScenarioUpdate::RakeAvailability(72)
        );
        assert_eq!(
            ScenarioField::DemurrageCost.parse("22000").unwrap(),
            ScenarioUpdate::DemurrageCost(22_000)
        );
        assert_eq!(
            ScenarioField::FreightRate.parse("1.7").unwrap(),
            ScenarioUpdate::FreightRate(1.7)
        );
        assert_eq!(
            ScenarioField::VesselEta.parse("").unwrap(),
            ScenarioUpdate::VesselEta(String::new())
        );
        assert_eq!(
            ScenarioField::VesselEta.parse("2024-11-30").unwrap(),
            ScenarioUpdate::VesselEta("2024-11-30".into())
        );
    }

    #[test]
    fn extended_years_from_the_date_control_are_kept() {
        for raw in ["12345-01-01", "275760-09-13", "2024-02-29"] {
            assert_eq!(
                ScenarioField::VesselEta.parse(raw).unwrap(),
                ScenarioUpdate::VesselEta(raw.to_string())
            );
        }

        let mut state = DashboardState::default();
        state.update_scenario(ScenarioField::VesselEta.parse("12345-01-01").unwrap());
        assert_eq!(state.scenario.input_value(ScenarioField::VesselEta), "12345-01-01");
    }

    #[test]
    fn impossible_calendar_dates_are_rejected() {
        for raw in ["2023-02-29", "2024-13-01", "2024-04-31", "2024-00-10", "1234567-01-01", "24-01-01"] {
            assert!(
                matches!(
                    ScenarioField::VesselEta.parse(raw),
                    Err(ScenarioInputError::InvalidDate { .. })
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn unparseable_values_are_rejected() {
        assert!(matches!(
            ScenarioField::RakeAvailability.parse("eighty"),
            Err(ScenarioInputError::InvalidNumber { .. })
        ));
        assert!(ScenarioField::FreightRate.parse("NaN").is_err());
        let err = ScenarioField::VesselEta.parse("30/11/2024").unwrap_err();
        assert!(matches!(err, ScenarioInputError::InvalidDate { .. }));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn setter_does_not_clamp_out_of_range_values() {
        let mut state = DashboardState::default();
        state.update_scenario(ScenarioUpdate::RakeAvailability(10));
        assert_eq!(state.scenario.rake_availability, 10);
    }

    #[test]
    fn input_values_round_trip_through_the_form() {
        let mut inputs = ScenarioInputs::default();
        assert_eq!(inputs.input_value(ScenarioField::VesselEta), "");
        assert_eq!(inputs.input_value(ScenarioField::FreightRate), "1.2");

        let update = ScenarioField::VesselEta.parse("2025-01-05").unwrap();
        inputs.apply(update);
        assert_eq!(inputs.input_value(ScenarioField::VesselEta), "2025-01-05");
    }

    #[test]
    fn slider_bounds_match_controls() {
        let rake = ScenarioField::RakeAvailability.bounds().unwrap();
        assert_eq!((rake.min, rake.max, rake.step), (50.0, 100.0, 1.0));
        let demurrage = ScenarioField::DemurrageCost.bounds().unwrap();
        assert_eq!((demurrage.min, demurrage.max, demurrage.step), (5_000.0, 30_000.0, 1_000.0));
        assert!(ScenarioField::VesselEta.bounds().is_none());
    }

    #[test]
    fn empty_file_selection_keeps_previous_name() {
        let mut state = DashboardState::default();
        assert!(!state.record_upload(Vec::new()));
        assert!(state.uploaded_file.is_none());

        assert!(state.record_upload(vec!["stem.xlsx".into(), "extra.csv".into()]));
        assert_eq!(state.uploaded_file.as_deref(), Some("stem.xlsx"));

        assert!(!state.record_upload(Vec::new()));
        assert_eq!(state.uploaded_file.as_deref(), Some("stem.xlsx"));
    }

    #[test]
    fn simulate_with_stub_changes_nothing() {
        let engine = engine();
        let mut state = DashboardState::default();
        state.update_scenario(ScenarioUpdate::DemurrageCost(9_000));
        let before = state.clone();

        assert!(!state.simulate_scenario(&engine));
        assert_eq!(state, before);
    }

    #[test]
    fn report_request_with_stub_changes_nothing() {
        let engine = engine();
        let fixtures = PlantFixtures::embedded().unwrap();
        let mut state = DashboardState::default();
        state.record_upload(vec!["stem.csv".into()]);
        let before = state.clone();

        for report in &fixtures.reports {
            assert_eq!(request_report(&engine, report), None);
        }
        assert_eq!(state, before);
    }

    #[test]
    fn working_simulator_stores_a_projection() {
        let preview = PlantFixtures::embedded().unwrap().optimization_preview;
        let scripted = ScriptedEngine::new(preview, b"");
        let mut state = DashboardState::default();
        state.update_scenario(ScenarioUpdate::DemurrageCost(20_000));

        assert!(state.simulate_scenario(&scripted));
        let projection = state.scenario_projection.as_ref().unwrap();
        assert_eq!(projection.new_total_cost, 2_290_000);
        assert!(state.optimization.is_none());
        assert_eq!(state.scenario.demurrage_cost, 20_000);
    }

    #[test]
    fn rendered_report_bytes_are_reported() {
        let fixtures = PlantFixtures::embedded().unwrap();
        let scripted = ScriptedEngine::new(fixtures.optimization_preview.clone(), b"%PDF-1.7");

        for report in &fixtures.reports {
            assert_eq!(request_report(&scripted, report), Some(8));
        }
        let requested = scripted.requested.lock().unwrap();
        assert_eq!(requested.len(), fixtures.reports.len());
        assert_eq!(requested[0], fixtures.reports[0].title);
    }
}
