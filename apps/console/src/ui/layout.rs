//! Console chrome: header, tab bar and the panel switch.

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::state::{use_app_actions, use_app_state, Tab};
use crate::ui::dashboard::DashboardPanel;
use crate::ui::icons::{Icon, IconKind};
use crate::ui::input::DataInputPanel;
use crate::ui::optimization::OptimizationPanel;
use crate::ui::predictions::PredictionsPanel;
use crate::ui::reports::ReportsPanel;
use crate::ui::scenarios::ScenarioPanel;
use crate::APP_CONFIG;

#[component]
pub fn AppHeader() -> Element {
    let config = APP_CONFIG.get().cloned().unwrap_or_default();

    rsx! { HeaderBar { config } }
}

#[component]
pub fn HeaderBar(config: AppConfig) -> Element {
    rsx! {
        header { class: "bg-gradient-to-r from-blue-900 to-blue-800 text-white shadow-lg",
            div { class: "px-6 py-4",
                div { class: "flex items-center justify-between",
                    div { class: "flex items-center space-x-3",
                        Icon { kind: IconKind::Ship, class: "h-8 w-8 text-blue-200" }
                        div {
                            h1 { class: "text-2xl font-bold", "{config.plant_title}" }
                            p { class: "text-blue-200", "Supply Chain Decision Support System" }
                        }
                    }
                    div { class: "flex items-center space-x-4",
                        if let Some(label) = config.build_label.as_ref() {
                            span { class: "text-xs text-blue-300", "{label}" }
                        }
                        div { class: "flex items-center space-x-2 bg-blue-800 px-3 py-1 rounded-lg",
                            div { class: "w-2 h-2 bg-green-400 rounded-full animate-pulse" }
                            span { class: "text-sm", "Live Data" }
                        }
                        button {
                            r#type: "button",
                            class: "bg-blue-700 hover:bg-blue-600 px-4 py-2 rounded-lg transition-colors",
                            Icon { kind: IconKind::Users, class: "h-5 w-5" }
                        }
                    }
                }
            }
        }
    }
}

fn tab_icon(tab: Tab) -> IconKind {
    match tab {
        Tab::Dashboard => IconKind::BarChart,
        Tab::Input => IconKind::Upload,
        Tab::Optimization => IconKind::Zap,
        Tab::Predictions => IconKind::TrendingUp,
        Tab::Scenarios => IconKind::Settings,
        Tab::Reports => IconKind::FileText,
    }
}

#[component]
pub fn TabNav() -> Element {
    let active = use_app_state().read().active_tab;

    rsx! {
        nav { class: "bg-white border-b border-blue-100 shadow-sm",
            div { class: "px-6",
                div { class: "flex space-x-8",
                    {Tab::ALL.iter().map(|&tab| {
                        let tab_id = tab.id();
                        rsx! { TabButton { key: "{tab_id}", tab, active: tab == active } }
                    })}
                }
            }
        }
    }
}

#[component]
fn TabButton(tab: Tab, active: bool) -> Element {
    let actions = use_app_actions();
    let label = tab.label();
    let button_class = if active {
        "flex items-center space-x-2 py-4 px-2 border-b-2 transition-colors border-blue-600 text-blue-600"
    } else {
        "flex items-center space-x-2 py-4 px-2 border-b-2 transition-colors border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300"
    };

    rsx! {
        button {
            r#type: "button",
            class: button_class,
            onclick: move |_| actions.select_tab(tab),
            Icon { kind: tab_icon(tab), class: "h-5 w-5" }
            span { class: "font-medium", "{label}" }
        }
    }
}

/// Renders the one panel that belongs to `tab`.
#[component]
pub fn MainContent(tab: Tab) -> Element {
    let panel = match tab {
        Tab::Dashboard => rsx! { DashboardPanel {} },
        Tab::Input => rsx! { DataInputPanel {} },
        Tab::Optimization => rsx! { OptimizationPanel {} },
        Tab::Predictions => rsx! { PredictionsPanel {} },
        Tab::Scenarios => rsx! { ScenarioPanel {} },
        Tab::Reports => rsx! { ReportsPanel {} },
    };

    rsx! {
        main { class: "p-6", {panel} }
    }
}
