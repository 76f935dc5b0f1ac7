//! Decision capabilities behind the console panels.
//!
//! The panels only talk to these traits, so the fixture-backed stub below can
//! be replaced by a real solver or report backend without touching the UI.

use std::sync::Arc;

use tracing::debug;

use crate::fixtures::PlantFixtures;
use crate::models::{OptimizationResult, ReportEntry};
use crate::state::ScenarioInputs;
use crate::DECISION_SERVICES;

pub trait OptimizationEngine: Send + Sync {
    fn optimize(&self) -> OptimizationResult;
}

pub trait ScenarioSimulator: Send + Sync {
    /// Projected plan under the given what-if inputs, if the backend can produce one.
    fn simulate(&self, inputs: &ScenarioInputs) -> Option<OptimizationResult>;
}

pub trait ReportService: Send + Sync {
    /// Rendered document bytes, or `None` when export is unavailable.
    fn download(&self, report: &ReportEntry) -> Option<Vec<u8>>;
}

#[derive(Clone)]
pub struct DecisionServices {
    pub optimizer: Arc<dyn OptimizationEngine>,
    pub simulator: Arc<dyn ScenarioSimulator>,
    pub reports: Arc<dyn ReportService>,
}

impl DecisionServices {
    pub fn from_fixtures(fixtures: &PlantFixtures) -> Self {
        let engine = Arc::new(FixtureEngine::new(fixtures.optimization_preview.clone()));
        Self {
            optimizer: engine.clone(),
            simulator: engine.clone(),
            reports: engine,
        }
    }
}

/// Answers every request from the plant sample data.
#[derive(Clone, Debug)]
pub struct FixtureEngine {
    preview: OptimizationResult,
}

impl FixtureEngine {
    pub fn new(preview: OptimizationResult) -> Self {
        Self { preview }
    }
}

impl OptimizationEngine for FixtureEngine {
    fn optimize(&self) -> OptimizationResult {
        self.preview.clone()
    }
}

impl ScenarioSimulator for FixtureEngine {
    fn simulate(&self, inputs: &ScenarioInputs) -> Option<OptimizationResult> {
        debug!(?inputs, "scenario simulation not wired");
        None
    }
}

impl ReportService for FixtureEngine {
    fn download(&self, report: &ReportEntry) -> Option<Vec<u8>> {
        debug!(report = %report.title, "report export not wired");
        None
    }
}

pub fn decision_services() -> &'static DecisionServices {
    DECISION_SERVICES
        .get_or_init(|| DecisionServices::from_fixtures(crate::fixtures::plant_fixtures()))
}

/// Backend double with a working simulator and exporter.
#[cfg(test)]
pub(crate) struct ScriptedEngine {
    pub projection: OptimizationResult,
    pub document: Vec<u8>,
    pub requested: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl ScriptedEngine {
    pub fn new(projection: OptimizationResult, document: &[u8]) -> Self {
        Self {
            projection,
            document: document.to_vec(),
            requested: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[cfg(test)]
impl OptimizationEngine for ScriptedEngine {
    fn optimize(&self) -> OptimizationResult {
        self.projection.clone()
    }
}

#[cfg(test)]
impl ScenarioSimulator for ScriptedEngine {
    fn simulate(&self, inputs: &ScenarioInputs) -> Option<OptimizationResult> {
        let mut projection = self.projection.clone();
        projection.new_total_cost += u64::from(inputs.demurrage_cost);
        Some(projection)
    }
}

#[cfg(test)]
impl ReportService for ScriptedEngine {
    fn download(&self, report: &ReportEntry) -> Option<Vec<u8>> {
        self.requested.lock().unwrap().push(report.title.clone());
        Some(self.document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> FixtureEngine {
        FixtureEngine::new(PlantFixtures::embedded().unwrap().optimization_preview)
    }

    #[test]
    fn optimize_returns_the_same_preview_every_time() {
        let engine = engine();
        let first = engine.optimize();
        for _ in 0..5 {
            assert_eq!(engine.optimize(), first);
        }
        assert_eq!(first.new_total_cost, 2_270_000);
        assert_eq!(first.efficiency, 94);
        assert_eq!(first.vessels[1].route, "Port C → Plant Direct");
    }

    #[test]
    fn simulation_and_download_are_inert() {
        let engine = engine();
        assert!(engine.simulate(&ScenarioInputs::default()).is_none());

        let report = ReportEntry {
            title: "Cost Breakdown".into(),
            format: "PDF".into(),
        };
        assert!(engine.download(&report).is_none());
    }

    #[test]
    fn services_share_one_engine() {
        let fixtures = PlantFixtures::embedded().unwrap();
        let services = DecisionServices::from_fixtures(&fixtures);
        assert_eq!(services.optimizer.optimize(), fixtures.optimization_preview);
    }

    #[test]
    fn services_accept_any_backend() {
        let fixtures = PlantFixtures::embedded().unwrap();
        let scripted = Arc::new(ScriptedEngine::new(fixtures.optimization_preview.clone(), b"%PDF"));
        let services = DecisionServices {
            optimizer: Arc::new(engine()),
            simulator: scripted.clone(),
            reports: scripted.clone(),
        };

        let projection = services.simulator.simulate(&ScenarioInputs::default()).unwrap();
        assert_eq!(projection.new_total_cost, 2_270_000 + 15_000);

        let document = services.reports.download(&fixtures.reports[0]).unwrap();
        assert_eq!(document, b"%PDF");
        assert_eq!(scripted.requested.lock().unwrap().len(), 1);
    }
}
