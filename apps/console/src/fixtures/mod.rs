//! Plant sample data
//!
//! Constant KPI, schedule, prediction and report data, shipped as an embedded
//! JSON document and installed once at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use crate::models::{
    DelayPrediction, KpiSnapshot, OptimizationResult, ReportEntry, ScheduleEntry,
};
use crate::PLANT_FIXTURES;

const EMBEDDED_PLANT_DATA: &str = include_str!("plant.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{field} = {value} is outside 0..=100")]
    PercentageOutOfRange { field: String, value: u8 },
    #[error("schedule entry for {vessel} at {port} has non-positive duration {duration}")]
    NonPositiveDuration {
        vessel: String,
        port: String,
        duration: f64,
    },
    #[error("schedule entry for {vessel} starts before the track ({start})")]
    NegativeStart { vessel: String, start: f64 },
    #[error("declared total cost {declared} does not match breakdown sum {computed}")]
    TotalMismatch { declared: u64, computed: u64 },
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlantFixtures {
    pub kpi: KpiSnapshot,
    #[serde(default)]
    pub vessel_schedule: Vec<ScheduleEntry>,
    #[serde(default)]
    pub delay_predictions: Vec<DelayPrediction>,
    #[serde(default)]
    pub optimization_preview: OptimizationResult,
    #[serde(default)]
    pub reports: Vec<ReportEntry>,
}

impl PlantFixtures {
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_json(EMBEDDED_PLANT_DATA)
    }

    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        let fixtures: Self = serde_json::from_str(raw)?;
        fixtures.validate()?;
        Ok(fixtures)
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        check_percentage("kpi.stock_utilization", self.kpi.stock_utilization)?;
        check_percentage("kpi.dispatch_compliance", self.kpi.dispatch_compliance)?;

        let computed = self.kpi.breakdown_total();
        if !self.kpi.cost_breakdown.is_empty() && computed != self.kpi.total_cost {
            return Err(FixtureError::TotalMismatch {
                declared: self.kpi.total_cost,
                computed,
            });
        }

        for entry in &self.vessel_schedule {
            if entry.start < 0.0 {
                return Err(FixtureError::NegativeStart {
                    vessel: entry.vessel.clone(),
                    start: entry.start,
                });
            }
            if entry.duration <= 0.0 {
                return Err(FixtureError::NonPositiveDuration {
                    vessel: entry.vessel.clone(),
                    port: entry.port.clone(),
                    duration: entry.duration,
                });
            }
        }

        for prediction in &self.delay_predictions {
            check_percentage(
                &format!("delay_predictions[{}].confidence", prediction.port),
                prediction.confidence,
            )?;
        }

        check_percentage(
            "optimization_preview.efficiency",
            self.optimization_preview.efficiency,
        )?;
        for vessel in &self.optimization_preview.vessels {
            check_percentage(
                &format!("optimization_preview.vessels[{}].utilization", vessel.name),
                vessel.utilization,
            )?;
        }

        Ok(())
    }
}

fn check_percentage(field: &str, value: u8) -> Result<(), FixtureError> {
    if value > 100 {
        return Err(FixtureError::PercentageOutOfRange {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

pub fn load_plant_fixtures() -> anyhow::Result<PlantFixtures> {
    use anyhow::Context;

    PlantFixtures::embedded().context("failed to load embedded plant fixtures")
}

/// Installed plant data. Falls back to an empty bundle so the shell still renders.
pub fn plant_fixtures() -> &'static PlantFixtures {
    PLANT_FIXTURES.get_or_init(|| {
        load_plant_fixtures().unwrap_or_else(|err| {
            error!(?err, "plant fixtures unavailable, rendering empty views");
            PlantFixtures::default()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OperationKind, RiskTier};

    #[test]
    fn embedded_bundle_matches_plant_sample() {
        let fixtures = PlantFixtures::embedded().expect("embedded fixtures are valid");

        assert_eq!(fixtures.kpi.total_cost, 2_450_000);
        assert_eq!(fixtures.kpi.breakdown_total(), 2_450_000);
        assert_eq!(fixtures.kpi.cost_breakdown.len(), 4);
        assert_eq!(fixtures.kpi.active_alerts, 3);

        assert_eq!(fixtures.vessel_schedule.len(), 4);
        assert_eq!(fixtures.vessel_schedule[1].kind, OperationKind::Discharge);

        let risks: Vec<RiskTier> = fixtures.delay_predictions.iter().map(|p| p.risk).collect();
        assert_eq!(risks, vec![RiskTier::Medium, RiskTier::Low, RiskTier::High]);

        assert_eq!(fixtures.optimization_preview.cost_saving, 180_000);
        assert_eq!(fixtures.optimization_preview.vessels.len(), 2);

        let titles: Vec<&str> = fixtures.reports.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Optimization Summary", "Cost Breakdown", "Vessel Schedule", "Delay Predictions"]
        );
    }

    #[test]
    fn mismatched_total_is_rejected() {
        let mut fixtures = PlantFixtures::embedded().unwrap();
        fixtures.kpi.total_cost += 1;
        assert!(matches!(
            fixtures.validate(),
            Err(FixtureError::TotalMismatch { computed: 2_450_000, .. })
        ));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut fixtures = PlantFixtures::embedded().unwrap();
        fixtures.vessel_schedule[0].duration = 0.0;
        let err = fixtures.validate().unwrap_err();
        assert!(err.to_string().contains("MV Steel Carrier 1"));
    }

    #[test]
    fn overflowing_schedule_entry_is_accepted() {
        let mut fixtures = PlantFixtures::embedded().unwrap();
        fixtures.vessel_schedule[1].duration = 7.0;
        assert!(fixtures.validate().is_ok());
    }

    #[test]
    fn confidence_above_hundred_is_rejected() {
        let mut fixtures = PlantFixtures::embedded().unwrap();
        fixtures.delay_predictions[2].confidence = 101;
        assert!(matches!(
            fixtures.validate(),
            Err(FixtureError::PercentageOutOfRange { value: 101, .. })
        ));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let raw = r#"{ "kpi": { "total_cost": 0, "stock_utilization": 0, "dispatch_compliance": 0 } }"#;
        let fixtures = PlantFixtures::from_json(raw).unwrap();
        assert!(fixtures.kpi.cost_breakdown.is_empty());
        assert!(fixtures.vessel_schedule.is_empty());
        assert!(fixtures.reports.is_empty());
    }

    #[test]
    fn malformed_json_surfaces_decode_error() {
        assert!(matches!(
            PlantFixtures::from_json("{ not json"),
            Err(FixtureError::Decode(_))
        ));
    }
}
