//! Admin landing page with usage statistics and recent activity.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::admin_navbar::AdminNavbar;
use crate::net::analysis;
use crate::net::http::ApiClient;
use crate::net::types::{AdminStatistics, RecentAnalysis};
use crate::util::format::{format_date, group_thousands, now_utc, parse_timestamp, relative_time};

/// First letter of a display name for the activity avatar.
fn initial_letter(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|ch| ch.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_owned())
}

/// Caption for one activity row.
fn activity_caption(entry: &RecentAnalysis) -> String {
    let name = entry
        .user
        .as_ref()
        .map(|user| user.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or("Someone");
    format!("{name} ran a colour analysis ({})", entry.result_palette)
}

/// When the activity happened, relative to now.
fn activity_moment(entry: &RecentAnalysis) -> String {
    let Some(raw) = entry.created_at.as_deref() else {
        return String::new();
    };
    match parse_timestamp(raw) {
        Some(moment) => relative_time(now_utc(), moment),
        None => format_date(raw),
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let statistics = LocalResource::new(|| async {
        let client = ApiClient::new();
        analysis::fetch_admin_statistics(&client).await
    });

    view! {
        <div class="page page--admin">
            <AdminNavbar/>

            <main class="page__body">
                <header class="page__header">
                    <h1>"Dashboard"</h1>
                    <p>"How ChromaLens is being used."</p>
                </header>

                <Suspense fallback=move || {
                    view! { <p class="page__status">"Loading statistics..."</p> }
                }>
                    {move || {
                        statistics
                            .get()
                            .map(|outcome| match outcome {
                                Ok(stats) => view! { <StatisticsView stats=stats/> }.into_any(),
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
        </div>
    }
}

#[component]
fn StatisticsView(stats: AdminStatistics) -> impl IntoView {
    let admins_line = format!("{} admins", stats.total_admins);
    let recent = stats.recent_analyses;

    view! {
        <section class="stat-grid">
            <div class="stat-card">
                <span class="stat-card__label">"Registered Users"</span>
                <span class="stat-card__value">{group_thousands(stats.total_users)}</span>
                <span class="stat-card__sub">{admins_line}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Products"</span>
                <span class="stat-card__value">{group_thousands(stats.total_products)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Analyses Run"</span>
                <span class="stat-card__value">{group_thousands(stats.total_analyses)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Recent Analyses"</span>
                <span class="stat-card__value">{recent.len().to_string()}</span>
            </div>
        </section>

        <section class="distribution">
            <div class="distribution__column">
                <h2>"Products by Palette"</h2>
                <PaletteCounts counts=stats.products_by_palette/>
            </div>
            <div class="distribution__column">
                <h2>"Analyses by Palette"</h2>
                <PaletteCounts counts=stats.analyses_by_palette/>
            </div>
        </section>

        <section class="quick-actions">
            <a class="action-card" href="/admin/products">
                <h2>"Manage Products"</h2>
                <p>"Add, edit or remove catalog products."</p>
            </a>
            <a class="action-card" href="/admin/analysis-history">
                <h2>"Analysis History"</h2>
                <p>"Browse and export every analysis."</p>
            </a>
        </section>

        <section class="activity">
            <h2>"Recent Activity"</h2>
            {if recent.is_empty() {
                view! { <p class="page__status">"No analyses yet."</p> }.into_any()
            } else {
                view! {
                    <ul class="activity__list">
                        {recent
                            .into_iter()
                            .map(|entry| {
                                let avatar = initial_letter(
                                    entry.user.as_ref().map_or("", |user| user.name.as_str()),
                                );
                                view! {
                                    <li class="activity__row">
                                        <span class="activity__avatar">{avatar}</span>
                                        <span class="activity__caption">
                                            {activity_caption(&entry)}
                                        </span>
                                        <span class="activity__moment">
                                            {activity_moment(&entry)}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn PaletteCounts(counts: std::collections::BTreeMap<String, i64>) -> impl IntoView {
    if counts.is_empty() {
        return view! { <p class="page__status">"Nothing recorded yet."</p> }.into_any();
    }
    view! {
        <ul class="distribution__list">
            {counts
                .into_iter()
                .map(|(palette, count)| {
                    view! {
                        <li class="distribution__row">
                            <span class="distribution__palette">{palette}</span>
                            <span class="distribution__count">{count.to_string()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
