//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{RequireAdmin, RequireAuth};
use crate::components::toast_host::ToastHost;
use crate::pages::{
    about::AboutPage, admin_analyses::AdminAnalysesPage, admin_dashboard::AdminDashboardPage,
    admin_login::AdminLoginPage, admin_product_form::AdminProductFormPage,
    admin_products::AdminProductsPage, analysis::AnalysisPage, catalog::CatalogPage,
    dashboard::DashboardPage, history::HistoryPage, landing::LandingPage, login::LoginPage,
    profile::ProfilePage, register::RegisterPage, results::ResultsPage,
};
use crate::state::{analysis, session, toasts};

/// Root application component.
///
/// Provides the session, toast, and analysis-report contexts, then sets up
/// client-side routing. Guarded routes wrap their page in [`RequireAuth`]
/// or [`RequireAdmin`]; everything else is public.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    session::provide_session();
    toasts::provide_toasts();
    analysis::provide_analysis_report();

    view! {
        <Title text="ChromaLens"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("login"))
                    view=AdminLoginPage
                />

                // Customer area: any signed-in account.
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("analysis"))
                    view=|| view! { <RequireAuth><AnalysisPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("results"))
                    view=|| view! { <RequireAuth><ResultsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("history"))
                    view=|| view! { <RequireAuth><HistoryPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("catalog"))
                    view=|| view! { <RequireAuth><CatalogPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("profile"))
                    view=|| view! { <RequireAuth><ProfilePage/></RequireAuth> }
                />

                // Admin area: admin accounts only.
                <Route
                    path=(StaticSegment("admin"), StaticSegment("dashboard"))
                    view=|| view! { <RequireAdmin><AdminDashboardPage/></RequireAdmin> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("products"))
                    view=|| view! { <RequireAdmin><AdminProductsPage/></RequireAdmin> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("products"), StaticSegment("add"))
                    view=|| view! { <RequireAdmin><AdminProductFormPage/></RequireAdmin> }
                />
                <Route
                    path=(
                        StaticSegment("admin"),
                        StaticSegment("products"),
                        StaticSegment("edit"),
                        ParamSegment("id"),
                    )
                    view=|| view! { <RequireAdmin><AdminProductFormPage/></RequireAdmin> }
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("analysis-history"))
                    view=|| view! { <RequireAdmin><AdminAnalysesPage/></RequireAdmin> }
                />
            </Routes>
        </Router>

        <ToastHost/>
    }
}
