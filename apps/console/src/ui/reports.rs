use dioxus::prelude::*;

use crate::fixtures::plant_fixtures;
use crate::models::ReportEntry;
use crate::state::use_app_actions;
use crate::ui::icons::{Icon, IconKind};

#[component]
pub fn ReportsPanel() -> Element {
    let reports = plant_fixtures().reports.clone();

    rsx! {
        div { id: "panel-reports", class: "space-y-6",
            div { class: "bg-white rounded-xl shadow-lg border border-blue-100 p-6",
                h3 { class: "text-lg font-semibold text-gray-800 mb-6", "Reports & Downloads" }
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                    for (idx, report) in reports.into_iter().enumerate() {
                        ReportCard { key: "{idx}", report }
                    }
                }
            }
        }
    }
}

#[component]
fn ReportCard(report: ReportEntry) -> Element {
    let actions = use_app_actions();
    let title = report.title.clone();
    let format_label = format!("{} Format", report.format);

    rsx! {
        div { class: "border border-gray-200 rounded-lg p-4 flex items-center justify-between",
            div {
                h4 { class: "font-medium text-gray-800", "{title}" }
                p { class: "text-sm text-gray-500", "{format_label}" }
            }
            button {
                r#type: "button",
                title: "Download {title}",
                class: "bg-blue-600 text-white p-2 rounded-lg hover:bg-blue-700 transition-colors",
                onclick: move |_| actions.request_report(&report),
                Icon { kind: IconKind::Download, class: "h-4 w-4" }
            }
        }
    }
}
