use dioxus::prelude::*;

use crate::models::{OptimizationResult, VesselRoute};
use crate::state::{use_app_actions, use_app_state};
use crate::ui::charts::format_currency;
use crate::ui::icons::{Icon, IconKind};

#[component]
pub fn OptimizationPanel() -> Element {
    let actions = use_app_actions();
    let result = use_app_state().read().optimization.clone();

    let body = if let Some(result) = result {
        rsx! { OptimizationSummary { result } }
    } else {
        rsx! {
            div { class: "text-center py-12 text-gray-500",
                "Click \"Run Optimization\" to calculate the best routes and cost savings"
            }
        }
    };

    rsx! {
        div { id: "panel-optimization", class: "space-y-6",
            div { class: "bg-white rounded-xl shadow-lg border border-blue-100 p-6",
                div { class: "flex items-center justify-between mb-6",
                    h3 { class: "text-lg font-semibold text-gray-800", "Optimization Engine" }
                    button {
                        r#type: "button",
                        class: "flex items-center space-x-2 bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors",
                        onclick: move |_| actions.run_optimization(),
                        Icon { kind: IconKind::Play, class: "h-4 w-4" }
                        span { "Run Optimization" }
                    }
                }
                {body}
            }
        }
    }
}

#[component]
pub fn OptimizationSummary(result: OptimizationResult) -> Element {
    rsx! {
        div { class: "space-y-6",
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                div { class: "bg-green-50 border border-green-200 rounded-lg p-4",
                    div { class: "text-center",
                        p { class: "text-2xl font-bold text-green-600", {format_currency(result.cost_saving)} }
                        p { class: "text-sm text-green-700", "Cost Savings" }
                    }
                }
                div { class: "bg-blue-50 border border-blue-200 rounded-lg p-4",
                    div { class: "text-center",
                        p { class: "text-2xl font-bold text-blue-600", {format_currency(result.new_total_cost)} }
                        p { class: "text-sm text-blue-700", "Optimized Total Cost" }
                    }
                }
                div { class: "bg-purple-50 border border-purple-200 rounded-lg p-4",
                    div { class: "text-center",
                        p { class: "text-2xl font-bold text-purple-600", "{result.efficiency}%" }
                        p { class: "text-sm text-purple-700", "Efficiency Score" }
                    }
                }
            }

            div {
                h4 { class: "font-medium text-gray-700 mb-3", "Optimized Vessel Routes" }
                div { class: "space-y-3",
                    for (idx, vessel) in result.vessels.iter().enumerate() {
                        RouteCard { key: "{idx}", vessel: vessel.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn RouteCard(vessel: VesselRoute) -> Element {
    rsx! {
        div { class: "border border-gray-200 rounded-lg p-4",
            div { class: "flex items-center justify-between",
                div {
                    h5 { class: "font-medium text-gray-800", "{vessel.name}" }
                    p { class: "text-sm text-gray-600", "{vessel.route}" }
                }
                div { class: "text-right",
                    p { class: "font-medium text-blue-600", {format_currency(vessel.cost)} }
                    p { class: "text-sm text-gray-600", "{vessel.utilization}% utilization" }
                }
            }
        }
    }
}
