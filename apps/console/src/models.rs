use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct CostCategory {
    pub name: String,
    pub value: u64,
    /// CSS colour used for the chart slice and legend dot.
    pub color: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct KpiSnapshot {
    pub total_cost: u64,
    #[serde(default)]
    pub cost_breakdown: Vec<CostCategory>,
    pub stock_utilization: u8,
    pub dispatch_compliance: u8,
    #[serde(default)]
    pub active_alerts: u32,
}

impl KpiSnapshot {
    pub fn breakdown_total(&self) -> u64 {
        self.cost_breakdown.iter().map(|category| category.value).sum()
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Loading,
    Discharge,
}

impl OperationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::Discharge => "Discharge",
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            Self::Loading => "bg-blue-500",
            Self::Discharge => "bg-green-500",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    pub vessel: String,
    pub port: String,
    pub start: f64,
    pub duration: f64,
    pub kind: OperationKind,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    /// Card border and background.
    pub fn card_classes(self) -> &'static str {
        match self {
            Self::High => "border-red-200 bg-red-50",
            Self::Medium => "border-yellow-200 bg-yellow-50",
            Self::Low => "border-green-200 bg-green-50",
        }
    }

    pub fn badge_classes(self) -> &'static str {
        match self {
            Self::High => "bg-red-100 text-red-700",
            Self::Medium => "bg-yellow-100 text-yellow-700",
            Self::Low => "bg-green-100 text-green-700",
        }
    }

    pub fn badge_label(self) -> &'static str {
        match self {
            Self::High => "HIGH RISK",
            Self::Medium => "MEDIUM RISK",
            Self::Low => "LOW RISK",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DelayPrediction {
    pub port: String,
    pub predicted_delay_days: f64,
    pub confidence: u8,
    pub risk: RiskTier,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VesselRoute {
    pub name: String,
    pub route: String,
    pub cost: u64,
    pub utilization: u8,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct OptimizationResult {
    pub cost_saving: u64,
    pub new_total_cost: u64,
    pub efficiency: u8,
    #[serde(default)]
    pub vessels: Vec<VesselRoute>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub title: String,
    #[serde(default = "ReportEntry::default_format")]
    pub format: String,
}

impl ReportEntry {
    fn default_format() -> String {
        "PDF".to_string()
    }
}
