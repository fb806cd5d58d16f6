//! Data Table Component

use leptos::*;

use crate::state::global::GlobalState;

/// Every parsed row; columns are the first row's keys
#[component]
pub fn DataTable() -> impl IntoView {
    let dashboard = use_context::<GlobalState>()
        .expect("GlobalState not found")
        .dashboard;

    let header = move || {
        dashboard.with(|d| {
            d.table_columns()
                .into_iter()
                .map(|column| view! { <th>{column.to_string()}</th> })
                .collect_view()
        })
    };

    let body = move || {
        dashboard.with(|d| {
            d.table()
                .iter()
                .map(|row| {
                    let cells = d
                        .table_cells(row)
                        .into_iter()
                        .map(|value| view! { <td>{value.to_string()}</td> })
                        .collect_view();
                    view! { <tr>{cells}</tr> }
                })
                .collect_view()
        })
    };

    view! {
        <div>
            <h2>"CSV Data Table"</h2>
            <table border="1">
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
