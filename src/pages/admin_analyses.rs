//! Admin view over every analysis, with filters and CSV export.

#[cfg(test)]
#[path = "admin_analyses_test.rs"]
mod admin_analyses_test;

use leptos::prelude::*;

#[cfg(feature = "web")]
use wasm_bindgen::JsCast as _;

use crate::components::admin_navbar::AdminNavbar;
use crate::components::color_swatches::ColorSwatches;
use crate::config;
use crate::net::analysis;
use crate::net::http::ApiClient;
use crate::net::types::AdminAnalysis;
use crate::state::toasts::{self, use_toasts};
use crate::util::csv;
use crate::util::format::{format_date, iso_day, now_utc};
use crate::util::images::resolve_image_url;
use crate::util::palette::Palette;

const CSV_HEADER: [&str; 5] = ["ID", "Name", "Email", "Palette", "Date"];

/// Account name for a row, `-` when the account is gone or unnamed.
fn user_name(row: &AdminAnalysis) -> String {
    match &row.user {
        Some(user) if !user.name.trim().is_empty() => user.name.clone(),
        _ => "-".to_owned(),
    }
}

/// Account email for a row, `-` when absent.
fn user_email(row: &AdminAnalysis) -> String {
    match &row.user {
        Some(user) if !user.email.trim().is_empty() => user.email.clone(),
        _ => "-".to_owned(),
    }
}

/// Export rows in header order, with the same `-` fallbacks the table
/// shows.
fn analysis_csv_rows(rows: &[AdminAnalysis]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.id.to_string(),
                user_name(row),
                user_email(row),
                row.result_palette.clone(),
                row.created_at
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| "-".to_owned()),
            ]
        })
        .collect()
}

#[component]
pub fn AdminAnalysesPage() -> impl IntoView {
    let toasts = use_toasts();
    let selected = RwSignal::new("all".to_owned());
    let search = RwSignal::new(String::new());
    let detail = RwSignal::new(None::<AdminAnalysis>);

    let listing = LocalResource::new(move || {
        let palette = selected.get();
        let search = search.get();
        async move {
            let filter = if palette == "all" {
                None
            } else {
                Some(palette.as_str())
            };
            let client = ApiClient::new();
            analysis::fetch_admin_analyses(&client, filter, &search).await
        }
    });

    let on_export = move |_| {
        let rows = match listing.get() {
            Some(Ok(rows)) => rows,
            _ => {
                toasts::error(toasts, "Nothing to export yet.");
                return;
            }
        };
        if rows.is_empty() {
            toasts::error(toasts, "Nothing to export yet.");
            return;
        }
        let document = csv::csv_document(&CSV_HEADER, &analysis_csv_rows(&rows));
        let filename = format!("analysis-history-{}.csv", iso_day(now_utc()));
        #[cfg(feature = "web")]
        if download_csv(&filename, &document).is_none() {
            toasts::error(toasts, "The export could not be started.");
        }
        #[cfg(not(feature = "web"))]
        let _ = (document, filename);
    };

    view! {
        <div class="page page--admin">
            <AdminNavbar/>

            <main class="page__body">
                <header class="page__header page__header--split">
                    <div>
                        <h1>"Analysis History"</h1>
                        <p>"Every analysis customers have run."</p>
                    </div>
                    <button class="btn btn--ghost" on:click=on_export>
                        "Export CSV"
                    </button>
                </header>

                <div class="filter-bar">
                    <label class="filter-bar__field">
                        <span>"Palette"</span>
                        <select
                            prop:value=selected
                            on:change=move |ev| selected.set(event_target_value(&ev))
                        >
                            <option value="all">"All Palettes"</option>
                            {Palette::ALL
                                .into_iter()
                                .map(|palette| {
                                    view! {
                                        <option value=palette.as_str()>{palette.label()}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="filter-bar__field filter-bar__field--grow">
                        <span>"Search"</span>
                        <input
                            type="search"
                            placeholder="Customer name or email"
                            prop:value=search
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <Suspense fallback=move || {
                    view! { <p class="page__status">"Loading analyses..."</p> }
                }>
                    {move || {
                        listing
                            .get()
                            .map(|outcome| match outcome {
                                Ok(rows) if rows.is_empty() => {
                                    view! {
                                        <p class="page__status">
                                            "No analyses match your filters."
                                        </p>
                                    }
                                        .into_any()
                                }
                                Ok(rows) => {
                                    view! {
                                        <table class="table">
                                            <thead>
                                                <tr>
                                                    <th>"ID"</th>
                                                    <th>"Customer"</th>
                                                    <th>"Email"</th>
                                                    <th>"Palette"</th>
                                                    <th>"Date"</th>
                                                    <th>"Actions"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {rows
                                                    .into_iter()
                                                    .map(|row| analysis_row(row, detail))
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    }
                                        .into_any()
                                }
                                Err(error) => {
                                    view! {
                                        <p class="page__status page__status--error">
                                            {error.user_message()}
                                        </p>
                                    }
                                        .into_any()
                                }
                            })
                    }}
                </Suspense>
            </main>

            {move || {
                detail
                    .get()
                    .map(|row| {
                        view! { <AnalysisDetailDialog row=row on_close=detail/> }
                    })
            }}
        </div>
    }
}

fn analysis_row(row: AdminAnalysis, detail: RwSignal<Option<AdminAnalysis>>) -> impl IntoView {
    let name = user_name(&row);
    let email = user_email(&row);
    let palette = row.result_palette.clone();
    let date = row
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_owned());
    let id = row.id;
    let opened = row;

    view! {
        <tr>
            <td>{id.to_string()}</td>
            <td>{name}</td>
            <td>{email}</td>
            <td>
                <span class="badge badge--palette">{palette}</span>
            </td>
            <td>{date}</td>
            <td class="table__actions">
                <button class="btn btn--small" on:click=move |_| detail.set(Some(opened.clone()))>
                    "View"
                </button>
            </td>
        </tr>
    }
}

/// Modal with the full detail of one analysis.
#[component]
fn AnalysisDetailDialog(
    row: AdminAnalysis,
    on_close: RwSignal<Option<AdminAnalysis>>,
) -> impl IntoView {
    let image = row
        .image_url
        .as_deref()
        .map(|raw| resolve_image_url(&config::backend_origin(), raw));
    let date = row
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "-".to_owned());
    let name = user_name(&row);
    let email = user_email(&row);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.set(None)>
            <div class="dialog dialog--detail" on:click=move |ev| ev.stop_propagation()>
                <h2>{format!("Analysis #{}", row.id)}</h2>
                <p class="dialog__date">{date}</p>
                <p>{name} " · " {email}</p>
                {image
                    .map(|url| {
                        view! { <img class="dialog__image" src=url alt="Analysed photo"/> }
                    })}
                <p>
                    "Palette: " <span class="badge badge--palette">{row.result_palette.clone()}</span>
                </p>
                <ColorSwatches colors=row.colors.clone()/>
                {row
                    .notes
                    .clone()
                    .map(|notes| view! { <p class="dialog__notes">{notes}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.set(None)>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Hands the browser a generated file by clicking a temporary object-URL
/// anchor.
#[cfg(feature = "web")]
fn download_csv(filename: &str, contents: &str) -> Option<()> {
    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).ok()?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).ok()?;
    let document = web_sys::window()?.document()?;
    let anchor = document
        .create_element("a")
        .ok()?
        .unchecked_into::<web_sys::HtmlAnchorElement>();
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);
    Some(())
}
