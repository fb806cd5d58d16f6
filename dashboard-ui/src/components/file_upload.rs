//! File Upload Component
//!
//! Reads the chosen file with a `FileReader` and hands the bytes to the
//! global state.

use csv_dashboard::dashboard::SELECT_FILE_PROMPT;
use csv_dashboard::SelectedFile;
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::console;

use crate::state::global::GlobalState;

/// CSV file input
#[component]
pub fn FileUpload() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        match file {
            Some(file) => read_file(file, state.clone()),
            None => alert(SELECT_FILE_PROMPT),
        }
    };

    view! {
        <div>
            <input type="file" accept=".csv" on:change=on_change />
        </div>
    }
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn read_file(file: web_sys::File, state: GlobalState) {
    let file_name = file.name();
    let file_reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            console::error_2(&"Could not create FileReader".into(), &e);
            return;
        }
    };

    let onload = {
        let file_reader = file_reader.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            let Ok(result) = file_reader.result() else {
                return;
            };
            let Some(array_buffer) = result.dyn_ref::<js_sys::ArrayBuffer>() else {
                return;
            };
            let contents = js_sys::Uint8Array::new(array_buffer).to_vec();

            let file = SelectedFile::new(file_name.clone(), contents);
            if let Err(e) = state.handle_file_contents(file) {
                console::error_1(&format!("Error parsing CSV file: {}", e).into());
            }
        }) as Box<dyn FnMut(_)>)
    };

    file_reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    if let Err(e) = file_reader.read_as_array_buffer(&file) {
        console::error_2(&"Could not read file".into(), &e);
    }
}
