//! File Selector Component

use leptos::*;

use crate::state::global::GlobalState;

/// Drop-down of stored files; choosing one re-displays it
#[component]
pub fn FileSelector() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let dashboard = state.dashboard;

    let on_change = move |ev: web_sys::Event| {
        let file_name = event_target_value(&ev);
        state.select_file(&file_name);
    };

    let selected = move || dashboard.with(|d| d.selected_file().unwrap_or_default().to_string());

    let options = move || {
        dashboard.with(|d| {
            d.file_names()
                .into_iter()
                .map(|name| {
                    let name = name.to_string();
                    view! { <option value=name.clone()>{name}</option> }
                })
                .collect_view()
        })
    };

    view! {
        <div>
            <h2>"Uploaded Files"</h2>
            <select on:change=on_change prop:value=selected>
                <option value="" disabled=true>"Select a file to view"</option>
                {options}
            </select>
        </div>
    }
}
