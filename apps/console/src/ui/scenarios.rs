//! What-if inputs
//!
//! Controlled ETA and slider inputs bound to the scenario state.

use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state, ScenarioField};
use crate::ui::charts::format_currency;

#[component]
pub fn ScenarioPanel() -> Element {
    let actions = use_app_actions();
    let snapshot = use_app_state().read().clone();
    let inputs = snapshot.scenario;
    let projection = snapshot.scenario_projection;

    let eta_value = inputs.input_value(ScenarioField::VesselEta);
    let eta_label = ScenarioField::VesselEta.label();

    rsx! {
        div { id: "panel-scenarios", class: "space-y-6",
            div { class: "bg-white rounded-xl shadow-lg border border-blue-100 p-6",
                h3 { class: "text-lg font-semibold text-gray-800 mb-6", "What-If Analysis" }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    div {
                        label { class: "block text-sm font-medium text-gray-700 mb-1", "{eta_label}" }
                        input {
                            r#type: "date",
                            value: "{eta_value}",
                            oninput: move |evt| actions.update_scenario_raw(ScenarioField::VesselEta, &evt.value()),
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                    }
                    ScenarioSlider {
                        field: ScenarioField::RakeAvailability,
                        value: inputs.input_value(ScenarioField::RakeAvailability),
                        display: format!("{}%", inputs.rake_availability),
                    }
                    ScenarioSlider {
                        field: ScenarioField::DemurrageCost,
                        value: inputs.input_value(ScenarioField::DemurrageCost),
                        display: format!("${}", inputs.demurrage_cost),
                    }
                    ScenarioSlider {
                        field: ScenarioField::FreightRate,
                        value: inputs.input_value(ScenarioField::FreightRate),
                        display: format!("${}", inputs.freight_rate),
                    }
                }

                div { class: "mt-6",
                    button {
                        r#type: "button",
                        class: "bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors",
                        onclick: move |_| actions.simulate_scenario(),
                        "Simulate Scenario"
                    }
                }

                if let Some(projection) = projection {
                    div { class: "mt-6 bg-blue-50 border border-blue-200 rounded-lg p-4 text-sm text-blue-800",
                        "Projected total cost: "
                        span { class: "font-semibold", {format_currency(projection.new_total_cost)} }
                    }
                }
            }
        }
    }
}

#[component]
fn ScenarioSlider(field: ScenarioField, value: String, display: String) -> Element {
    let actions = use_app_actions();
    let label = field.label();
    let (min, max, step) = field
        .bounds()
        .map(|bounds| (bounds.min, bounds.max, bounds.step))
        .unwrap_or((0.0, 100.0, 1.0));

    rsx! {
        div {
            label { class: "block text-sm font-medium text-gray-700 mb-1", "{label}" }
            input {
                r#type: "range",
                min: "{min}",
                max: "{max}",
                step: "{step}",
                value: "{value}",
                oninput: move |evt| actions.update_scenario_raw(field, &evt.value()),
                class: "w-full h-2 bg-blue-200 rounded-lg appearance-none cursor-pointer",
            }
            p { class: "text-sm mt-1 text-gray-600", "{display}" }
        }
    }
}
