//! KPI overview
//!
//! Static KPI cards, the cost-breakdown donut and the vessel schedule bars.

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::fixtures::plant_fixtures;
use crate::models::{CostCategory, OperationKind, ScheduleEntry};
use crate::ui::charts::{donut_slices, format_currency, BarLayout, DonutGeometry};
use crate::ui::icons::{Icon, IconKind};
use crate::APP_CONFIG;

#[component]
pub fn DashboardPanel() -> Element {
    let fixtures = plant_fixtures();
    let kpi = &fixtures.kpi;
    let horizon = APP_CONFIG
        .get()
        .map(|cfg| cfg.schedule_horizon)
        .unwrap_or_else(|| AppConfig::default().schedule_horizon);

    rsx! {
        div { id: "panel-dashboard", class: "space-y-6",
            div { class: "grid grid-cols-1 md:grid-cols-4 gap-6",
                KpiCard {
                    label: "Total Transport Cost",
                    value: format_currency(kpi.total_cost),
                    value_class: "text-blue-900",
                    icon: IconKind::DollarSign,
                    icon_class: "h-8 w-8 text-blue-600",
                }
                KpiCard {
                    label: "Stock Utilization",
                    value: format!("{}%", kpi.stock_utilization),
                    value_class: "text-green-600",
                    icon: IconKind::Package,
                    icon_class: "h-8 w-8 text-green-600",
                }
                KpiCard {
                    label: "Dispatch Compliance",
                    value: format!("{}%", kpi.dispatch_compliance),
                    value_class: "text-blue-600",
                    icon: IconKind::Truck,
                    icon_class: "h-8 w-8 text-blue-600",
                }
                KpiCard {
                    label: "Active Alerts",
                    value: kpi.active_alerts.to_string(),
                    value_class: "text-orange-600",
                    icon: IconKind::AlertTriangle,
                    icon_class: "h-8 w-8 text-orange-600",
                }
            }
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                CostBreakdownChart { categories: kpi.cost_breakdown.clone() }
                VesselScheduleChart {
                    entries: fixtures.vessel_schedule.clone(),
                    horizon: f64::from(horizon),
                }
            }
        }
    }
}

#[component]
fn KpiCard(
    #[props(into)] label: String,
    value: String,
    #[props(into)] value_class: String,
    icon: IconKind,
    #[props(into)] icon_class: String,
) -> Element {
    rsx! {
        div { class: "bg-white p-6 rounded-xl shadow-lg border border-blue-100",
            div { class: "flex items-center justify-between",
                div {
                    p { class: "text-sm text-gray-600", "{label}" }
                    p { class: "text-2xl font-bold {value_class}", "{value}" }
                }
                Icon { kind: icon, class: icon_class }
            }
        }
    }
}

/// Donut of the cost categories; hovering a slice shows its amount.
#[component]
pub fn CostBreakdownChart(categories: Vec<CostCategory>) -> Element {
    let mut hovered = use_signal(|| None::<usize>);
    let geometry = DonutGeometry::default();
    let slices = donut_slices(&categories, &geometry);

    let hovered_idx = *hovered.read();
    let tooltip = hovered_idx
        .and_then(|idx| slices.get(idx))
        .map(|slice| format!("{}: {}", slice.name, format_currency(slice.value)));

    rsx! {
        div { class: "bg-white p-6 rounded-xl shadow-lg border border-blue-100",
            h3 { class: "text-lg font-semibold text-gray-800 mb-4", "Cost Breakdown" }
            div { class: "relative", style: "height: 300px;",
                svg { class: "h-full w-full", view_box: geometry.view_box(),
                    for (idx, slice) in slices.iter().enumerate() {
                        path {
                            key: "{idx}",
                            d: "{slice.path}",
                            fill: "{slice.color}",
                            stroke: "#ffffff",
                            onmouseenter: move |_| hovered.set(Some(idx)),
                            onmouseleave: move |_| hovered.set(None),
                        }
                    }
                }
                if let Some(text) = tooltip {
                    div { class: "pointer-events-none absolute left-1/2 top-2 -translate-x-1/2 rounded bg-white px-3 py-1 text-sm shadow border border-gray-200",
                        "{text}"
                    }
                }
            }
            div { class: "mt-4 space-y-2",
                for (idx, item) in categories.iter().enumerate() {
                    div { key: "{idx}", class: "flex items-center justify-between",
                        div { class: "flex items-center space-x-2",
                            div { class: "w-3 h-3 rounded-full", style: "background-color: {item.color};" }
                            span { class: "text-sm text-gray-600", "{item.name}" }
                        }
                        span { class: "text-sm font-medium", {format_currency(item.value)} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn VesselScheduleChart(entries: Vec<ScheduleEntry>, horizon: f64) -> Element {
    rsx! {
        div { class: "bg-white p-6 rounded-xl shadow-lg border border-blue-100",
            h3 { class: "text-lg font-semibold text-gray-800 mb-4", "Vessel Schedule" }
            div { class: "space-y-3",
                for (idx, entry) in entries.iter().enumerate() {
                    ScheduleRow { key: "{idx}", entry: entry.clone(), horizon }
                }
            }
            div { class: "mt-4 flex items-center space-x-4 text-xs",
                LegendDot { kind: OperationKind::Loading }
                LegendDot { kind: OperationKind::Discharge }
            }
        }
    }
}

#[component]
fn LegendDot(kind: OperationKind) -> Element {
    let dot_class = format!("w-3 h-3 rounded-full {}", kind.bar_class());
    let label = kind.label();

    rsx! {
        div { class: "flex items-center space-x-1",
            div { class: dot_class }
            span { "{label}" }
        }
    }
}

#[component]
fn ScheduleRow(entry: ScheduleEntry, horizon: f64) -> Element {
    let layout = BarLayout::new(entry.start, entry.duration, horizon);
    let bar_class = format!("absolute h-4 rounded-full {}", entry.kind.bar_class());

    rsx! {
        div { class: "flex items-center space-x-3",
            div { class: "w-32 text-xs text-gray-600 truncate", "{entry.vessel}" }
            div { class: "flex-1 bg-gray-100 rounded-full h-4 relative",
                div { class: bar_class, style: layout.style() }
            }
            div { class: "w-16 text-xs text-gray-600", "{entry.port}" }
        }
    }
}
