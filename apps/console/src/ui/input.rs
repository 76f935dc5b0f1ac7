//! Data integration panel
//!
//! STEM file picker (name only), static SAP status and the manual entry row.

use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state};
use crate::ui::icons::{Icon, IconKind};

const ACCEPTED_FILE_TYPES: &str = ".xlsx,.xls,.csv";

#[component]
pub fn DataInputPanel() -> Element {
    let actions = use_app_actions();
    let uploaded = use_app_state().read().uploaded_file.clone();

    let on_file_selected = move |evt: FormEvent| {
        let file_names = evt
            .files()
            .map(|engine| engine.files())
            .unwrap_or_default();
        actions.record_upload(file_names);
    };

    rsx! {
        div { id: "panel-input", class: "space-y-6",
            div { class: "bg-white rounded-xl shadow-lg border border-blue-100 p-6",
                h3 { class: "text-lg font-semibold text-gray-800 mb-6", "Data Integration" }

                div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    div { class: "space-y-4",
                        h4 { class: "font-medium text-gray-700", "Upload STEM Data" }
                        div { class: "border-2 border-dashed border-blue-300 rounded-lg p-6 text-center",
                            Icon { kind: IconKind::Upload, class: "mx-auto h-12 w-12 text-blue-400 mb-4" }
                            div { class: "space-y-2",
                                label { class: "cursor-pointer",
                                    input {
                                        r#type: "file",
                                        class: "hidden",
                                        accept: ACCEPTED_FILE_TYPES,
                                        onchange: on_file_selected,
                                    }
                                    span { class: "bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors",
                                        "Choose File"
                                    }
                                }
                                p { class: "text-sm text-gray-500", "Excel or CSV format" }
                                if let Some(name) = uploaded {
                                    p { class: "text-sm text-green-600", "✓ {name} uploaded successfully" }
                                }
                            }
                        }
                    }

                    div { class: "space-y-4",
                        h4 { class: "font-medium text-gray-700", "SAP Integration" }
                        div { class: "bg-gray-50 rounded-lg p-6",
                            div { class: "flex items-center justify-between mb-4",
                                span { class: "text-sm", "Connection Status" }
                                div { class: "flex items-center space-x-2",
                                    div { class: "w-2 h-2 bg-green-500 rounded-full" }
                                    span { class: "text-sm text-green-600", "Connected" }
                                }
                            }
                            button {
                                r#type: "button",
                                class: "w-full bg-blue-600 text-white py-2 px-4 rounded-lg hover:bg-blue-700 transition-colors",
                                "Sync Latest Data"
                            }
                        }
                    }
                }

                // not bound to state; entries are discarded
                div { class: "mt-8",
                    h4 { class: "font-medium text-gray-700 mb-4", "Manual Input" }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        input {
                            r#type: "text",
                            placeholder: "Vessel Name",
                            class: "px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                        input {
                            r#type: "date",
                            class: "px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                        input {
                            r#type: "number",
                            placeholder: "Parcel Size (MT)",
                            class: "px-3 py-2 border border-gray-300 rounded-lg focus:ring-2 focus:ring-blue-500 focus:border-transparent",
                        }
                    }
                }
            }
        }
    }
}
