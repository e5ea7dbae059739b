use contracts::warehouse::{TableSnapshot, WarehouseTable};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api;
use crate::shared::download;
use crate::shared::format::group_thousands;

/// Externally hosted Power BI report embedded on this page. Opaque to the
/// rest of the application: no contract beyond "display this URL".
const POWER_BI_EMBED_URL: &str = "https://app.powerbi.com/view?r=eyJrIjoiNmExYmQyNDktYjhkNi00ZWI2LTkyOWUtZGM5ZTdmNzVmNjlkIiwidCI6IjkwYWZmZTBmLWMyYTMtNDEwOC1iYjk4LTZjZWI0ZTk0ZWYxNSIsImMiOjEwfQ%3D%3D";

#[component]
pub fn DashboardPage() -> impl IntoView {
    let (snapshot, set_snapshot) = signal(None::<TableSnapshot>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (selected, set_selected) = signal(WarehouseTable::ALL[0]);

    // (Re)load whenever the selection changes; also fires on mount.
    Effect::new(move |_| {
        let table = selected.get();
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_table(table).await {
                Ok(data) => set_snapshot.set(Some(data)),
                Err(e) => {
                    set_snapshot.set(None);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let on_download = move |_| {
        let table = selected.get();
        spawn_local(async move {
            match api::fetch_table_csv(table).await {
                Ok(content) => {
                    let filename = format!("{}.csv", table.table_name());
                    if let Err(e) = download::save_csv(&content, &filename) {
                        set_error.set(Some(e));
                    }
                }
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="page page--dashboard">
            <h1>"📊 ETL Dashboard (Power BI Embedded)"</h1>

            <iframe
                class="dashboard__embed"
                src=POWER_BI_EMBED_URL
                height="800"
                allowfullscreen=true
            ></iframe>

            <hr class="dashboard__divider" />

            <h2>"Data Warehouse (Live)"</h2>
            <p>"Pick a table below to browse its full contents straight from the warehouse."</p>

            <label class="dashboard__select-label" for="table-select">"Database table:"</label>
            <select
                id="table-select"
                class="dashboard__select"
                prop:value=move || selected.get().table_name().to_string()
                on:change=move |ev| {
                    // The select only offers members of the closed set, so
                    // a failed parse can only come from a stale DOM.
                    if let Ok(table) = event_target_value(&ev).parse::<WarehouseTable>() {
                        set_selected.set(table);
                    }
                }
            >
                {WarehouseTable::ALL
                    .into_iter()
                    .map(|table| {
                        view! {
                            <option value=table.table_name()>{table.table_name()}</option>
                        }
                    })
                    .collect_view()}
            </select>

            <button
                class="dashboard__download"
                disabled=move || snapshot.with(|s| s.is_none())
                on:click=on_download
            >
                {move || format!("⬇ Download {}.csv", selected.get().table_name())}
            </button>

            <Show when=move || loading.get()>
                <p class="dashboard__loading">"Loading table..."</p>
            </Show>

            {move || {
                error
                    .get()
                    .map(|message| {
                        view! {
                            <div class="dashboard__warning">
                                <p>"Could not read the data warehouse."</p>
                                <p class="dashboard__warning-detail">{message}</p>
                            </div>
                        }
                    })
            }}

            {move || {
                snapshot
                    .get()
                    .map(|data| view! { <SnapshotView snapshot=data /> })
            }}
        </div>
    }
}

/// Metric tiles plus the full table of one loaded snapshot.
#[component]
fn SnapshotView(snapshot: TableSnapshot) -> impl IntoView {
    let TableSnapshot {
        table,
        columns,
        rows,
        row_count,
        column_count,
        ..
    } = snapshot;

    view! {
        <div class="dashboard__metrics">
            <div class="metric">
                <div class="metric__label">{format!("Total rows ({})", table.table_name())}</div>
                <div class="metric__value">{format!("{} rows", group_thousands(row_count))}</div>
            </div>
            <div class="metric">
                <div class="metric__label">"Total columns"</div>
                <div class="metric__value">{format!("{} columns", column_count)}</div>
            </div>
        </div>

        <details class="dashboard__expander" open=true>
            <summary>{format!("Click to view full data: {} ({})", table.table_name(), table.label())}</summary>
            <div class="dashboard__table-wrap">
                <table class="dashboard__table">
                    <thead>
                        <tr>
                            {columns.into_iter().map(|c| view! { <th>{c}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {row
                                            .into_iter()
                                            .map(|cell| view! { <td>{cell.as_display()}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </details>
    }
}
