use dioxus::prelude::*;

use crate::fixtures::plant_fixtures;
use crate::models::DelayPrediction;

#[component]
pub fn PredictionsPanel() -> Element {
    let predictions = plant_fixtures().delay_predictions.clone();

    rsx! {
        div { id: "panel-predictions", class: "space-y-6",
            div { class: "bg-white rounded-xl shadow-lg border border-blue-100 p-6",
                h3 { class: "text-lg font-semibold text-gray-800 mb-6", "AI Delay Predictions" }
                div { class: "space-y-4",
                    for (idx, prediction) in predictions.into_iter().enumerate() {
                        PredictionCard { key: "{idx}", prediction }
                    }
                }
            }
        }
    }
}

#[component]
fn PredictionCard(prediction: DelayPrediction) -> Element {
    let card_class = format!("border rounded-lg p-4 {}", prediction.risk.card_classes());
    let badge_class = format!(
        "text-xs font-medium px-2 py-1 rounded {}",
        prediction.risk.badge_classes()
    );
    let badge_label = prediction.risk.badge_label();

    rsx! {
        div { class: card_class,
            div { class: "flex items-center justify-between mb-2",
                h4 { class: "font-medium text-gray-800", "{prediction.port}" }
                span { class: badge_class, "{badge_label}" }
            }
            div { class: "grid grid-cols-2 gap-4 text-sm",
                div {
                    "Predicted Delay: "
                    span { class: "font-medium text-blue-600", "{prediction.predicted_delay_days} days" }
                }
                div {
                    "Model Confidence: "
                    span { class: "font-medium text-gray-700", "{prediction.confidence}%" }
                }
            }
        }
    }
}
