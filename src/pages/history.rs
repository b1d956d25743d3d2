//! The signed-in account's analysis history.

use leptos::prelude::*;

use crate::components::color_swatches::ColorSwatches;
use crate::components::dashboard_navbar::DashboardNavbar;
use crate::config;
use crate::net::analysis;
use crate::net::http::ApiClient;
use crate::net::types::HistoryEntry;
use crate::state::toasts::{self, use_toasts};
use crate::util::format::format_date;
use crate::util::images::resolve_image_url;

/// Swatches shown on a card before opening the detail view.
const CARD_SWATCHES: usize = 8;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let toasts = use_toasts();
    let history = LocalResource::new(|| async {
        let client = ApiClient::new();
        analysis::fetch_history(&client).await
    });
    let detail = RwSignal::new(None::<HistoryEntry>);
    let origin = config::backend_origin();

    let on_delete = move |id: i64| {
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            let client = ApiClient::new();
            match analysis::delete_history_entry(&client, id).await {
                Ok(()) => {
                    toasts::success(toasts, "Analysis deleted.");
                    history.refetch();
                }
                Err(error) => toasts::error(toasts, error.user_message()),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = (toasts, id);
    };

    view! {
        <div class="page page--app">
            <DashboardNavbar/>

            <main class="page__body">
                <header class="page__header">
                    <h1>"My Analysis History"</h1>
                    <p>"Every palette result you've received."</p>
                </header>

                <Suspense fallback=move || {
                    view! { <p class="page__status">"Loading history..."</p> }
                }>
                    {move || {
                        history
                            .get()
                            .map(|outcome| match outcome {
                                Ok(entries) if entries.is_empty() => {
                                    view! {
                                        <div class="empty-state">
                                            <p>"You haven't run an analysis yet."</p>
                                            <a class="btn btn--primary" href="/dashboard/analysis">
                                                "Run Your First Analysis"
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                }
                                Ok(entries) => {
                                    view! {
                                        <div class="history-grid">
                                            {entries
                                                .into_iter()
                                                .map(|entry| {
                                                    history_card(entry, &origin, detail, on_delete)
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
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
                    .map(|entry| {
                        view! { <HistoryDetailDialog entry=entry on_close=detail/> }
                    })
            }}
        </div>
    }
}

/// One history card with its detail and delete actions.
fn history_card(
    entry: HistoryEntry,
    origin: &str,
    detail: RwSignal<Option<HistoryEntry>>,
    on_delete: impl Fn(i64) + Copy + 'static,
) -> impl IntoView {
    let id = entry.id;
    let image = entry
        .image_url
        .as_deref()
        .map(|raw| resolve_image_url(origin, raw));
    let date = entry
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_default();
    let swatches: Vec<String> = entry.colors.iter().take(CARD_SWATCHES).cloned().collect();
    let palette = entry.palette_name.clone();
    let undertone = entry.undertone.clone();
    let opened = entry;

    view! {
        <article class="history-card">
            {match image {
                Some(url) => {
                    view! { <img class="history-card__image" src=url alt="Analysed photo"/> }
                        .into_any()
                }
                None => view! { <div class="history-card__image placeholder"></div> }.into_any(),
            }}
            <div class="history-card__body">
                <div class="history-card__badges">
                    <span class="badge badge--palette">{palette}</span>
                    {undertone
                        .map(|undertone| {
                            view! { <span class="badge badge--undertone">{undertone}</span> }
                        })}
                </div>
                <p class="history-card__date">{date}</p>
                <ColorSwatches colors=swatches/>
                <div class="history-card__actions">
                    <button class="btn" on:click=move |_| detail.set(Some(opened.clone()))>
                        "View Detail"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_delete(id)>
                        "Delete"
                    </button>
                </div>
            </div>
        </article>
    }
}

/// Modal with the full result for one history entry.
#[component]
fn HistoryDetailDialog(
    entry: HistoryEntry,
    on_close: RwSignal<Option<HistoryEntry>>,
) -> impl IntoView {
    let image = entry
        .image_url
        .as_deref()
        .map(|raw| resolve_image_url(&config::backend_origin(), raw));
    let date = entry
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_default();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.set(None)>
            <div class="dialog dialog--detail" on:click=move |ev| ev.stop_propagation()>
                <h2>{entry.palette_name.clone()}</h2>
                <p class="dialog__date">{date}</p>
                {image
                    .map(|url| {
                        view! { <img class="dialog__image" src=url alt="Analysed photo"/> }
                    })}
                {entry
                    .undertone
                    .clone()
                    .map(|undertone| {
                        view! { <p>"Undertone: " <strong>{undertone}</strong></p> }
                    })}
                {entry
                    .explanation
                    .clone()
                    .map(|explanation| view! { <p class="dialog__explanation">{explanation}</p> })}
                <ColorSwatches colors=entry.colors.clone()/>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.set(None)>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
