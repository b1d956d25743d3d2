//! Account profile page: editable details plus a history summary.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::dashboard_navbar::DashboardNavbar;
use crate::net::analysis;
use crate::net::auth;
use crate::net::http::ApiClient;
use crate::net::types::HistoryEntry;
use crate::state::toasts::{self, use_toasts};
use crate::util::format::format_date;

/// Strips everything but digits; the backend stores phones as bare numbers.
fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Headline figures derived from the history list.
fn history_summary(entries: &[HistoryEntry]) -> (String, String, String) {
    let total = entries.len().to_string();
    let last_palette = entries
        .first()
        .map(|entry| entry.palette_name.clone())
        .unwrap_or_else(|| "-".to_owned());
    let last_date = entries
        .first()
        .and_then(|entry| entry.created_at.as_deref())
        .map(format_date)
        .unwrap_or_else(|| "-".to_owned());
    (total, last_palette, last_date)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ProfileTab {
    Details,
    History,
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let toasts = use_toasts();
    let tab = RwSignal::new(ProfileTab::Details);
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());

    let profile = LocalResource::new(|| async {
        let client = ApiClient::new();
        auth::fetch_profile(&client).await
    });
    let history = LocalResource::new(|| async {
        let client = ApiClient::new();
        analysis::fetch_history(&client).await
    });

    // Prefill the form each time a fresh profile lands.
    Effect::new(move || {
        if let Some(Ok(details)) = profile.get() {
            name.set(details.name);
            phone.set(details.phone.unwrap_or_default());
            email.set(details.email);
        }
    });

    let on_save = move |_| {
        if !editing.get_untracked() {
            editing.set(true);
            return;
        }
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            let client = ApiClient::new();
            let name_value = name.get_untracked();
            let phone_value = phone.get_untracked();
            match auth::update_profile(&client, name_value.trim(), &phone_value).await {
                Ok(()) => {
                    toasts::success(toasts, "Profile updated.");
                    editing.set(false);
                    profile.refetch();
                }
                Err(error) => toasts::error(toasts, error.user_message()),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = toasts;
    };

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
        let _ = id;
    };

    view! {
        <div class="page page--app">
            <DashboardNavbar/>

            <main class="page__body">
                <header class="page__header">
                    <h1>"My Profile"</h1>
                    <p>"Manage your account details and look back at your analyses."</p>
                </header>

                <div class="tabs">
                    <button
                        class="tabs__tab"
                        class:tabs__tab--active=move || tab.get() == ProfileTab::Details
                        on:click=move |_| tab.set(ProfileTab::Details)
                    >
                        "Profile Details"
                    </button>
                    <button
                        class="tabs__tab"
                        class:tabs__tab--active=move || tab.get() == ProfileTab::History
                        on:click=move |_| tab.set(ProfileTab::History)
                    >
                        "Analysis History"
                    </button>
                </div>

                <Show
                    when=move || tab.get() == ProfileTab::Details
                    fallback=move || {
                        view! {
                            <section class="profile-history">
                                <div class="profile-history__head">
                                    <h2>"Your Analyses"</h2>
                                    <a class="btn btn--primary" href="/dashboard/analysis">
                                        "New Analysis"
                                    </a>
                                </div>
                                <Suspense fallback=move || {
                                    view! { <p class="page__status">"Loading history..."</p> }
                                }>
                                    {move || {
                                        history
                                            .get()
                                            .map(|outcome| match outcome {
                                                Ok(entries) if entries.is_empty() => {
                                                    view! {
                                                        <p class="page__status">
                                                            "No analyses yet. Your results will appear here."
                                                        </p>
                                                    }
                                                        .into_any()
                                                }
                                                Ok(entries) => {
                                                    view! {
                                                        <ul class="profile-history__list">
                                                            {entries
                                                                .into_iter()
                                                                .map(|entry| history_row(entry, on_delete))
                                                                .collect::<Vec<_>>()}
                                                        </ul>
                                                        <p class="profile-history__more">
                                                            <a href="/dashboard/history">
                                                                "Open the full history view"
                                                            </a>
                                                        </p>
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
                            </section>
                        }
                    }
                >
                    <section class="profile-card">
                        <div class="profile-card__head">
                            <h2>"Account Details"</h2>
                            <button class="btn btn--primary" disabled=busy on:click=on_save>
                                {move || {
                                    if editing.get() {
                                        if busy.get() { "Saving..." } else { "Save" }
                                    } else {
                                        "Edit Profile"
                                    }
                                }}
                            </button>
                        </div>

                        <div class="form">
                            <label class="form__field">
                                <span>"Full Name"</span>
                                <input
                                    type="text"
                                    prop:value=name
                                    disabled=move || !editing.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form__field">
                                <span>"Phone Number"</span>
                                <input
                                    type="tel"
                                    prop:value=phone
                                    disabled=move || !editing.get()
                                    on:input=move |ev| {
                                        phone.set(digits_only(&event_target_value(&ev)));
                                    }
                                />
                            </label>
                            <label class="form__field">
                                <span>"Email"</span>
                                <input type="email" prop:value=email disabled=true/>
                            </label>
                        </div>

                        <div class="profile-card__stats">
                            {move || {
                                let entries = match history.get() {
                                    Some(Ok(entries)) => entries,
                                    _ => Vec::new(),
                                };
                                let (total, last_palette, last_date) = history_summary(&entries);
                                view! {
                                    <div class="stat">
                                        <span class="stat__label">"Total Analyses"</span>
                                        <span class="stat__value">{total}</span>
                                    </div>
                                    <div class="stat">
                                        <span class="stat__label">"Latest Palette"</span>
                                        <span class="stat__value">{last_palette}</span>
                                    </div>
                                    <div class="stat">
                                        <span class="stat__label">"Last Analysis"</span>
                                        <span class="stat__value">{last_date}</span>
                                    </div>
                                }
                            }}
                        </div>
                    </section>
                </Show>
            </main>
        </div>
    }
}

/// One compact row in the profile's history tab.
fn history_row(entry: HistoryEntry, on_delete: impl Fn(i64) + Copy + 'static) -> impl IntoView {
    let id = entry.id;
    let date = entry
        .created_at
        .as_deref()
        .map(format_date)
        .unwrap_or_default();

    view! {
        <li class="profile-history__row">
            <span class="badge badge--palette">{entry.palette_name}</span>
            <span class="profile-history__date">{date}</span>
            <button class="btn btn--danger btn--small" on:click=move |_| on_delete(id)>
                "Delete"
            </button>
        </li>
    }
}
