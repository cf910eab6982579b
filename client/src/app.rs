//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the two app-wide contexts: the `RwSignal<AuthState>` read by
//! the route guard and nav bar, and the `ToastHub` every page reports to.
//! Auth starts in the loading state and is settled once in the browser by
//! asking the API who the session belongs to.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::fault_barrier::FaultBarrier;
use crate::components::nav_bar::NavBar;
use crate::components::protected_route::ProtectedRoute;
use crate::components::toast_host::ToastHost;
use crate::pages::{
    audit::AuditPage, files::FilesPage, login::LoginPage, not_found::NotFoundPage, register::RegisterPage,
    resume_detail::ResumeDetailPage, resumes::ResumesPage, tasks::TasksPage, weights::WeightsPage,
};
use crate::state::auth::AuthState;
use crate::state::toast::ToastHub;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Resolve the stored session against `GET /v1/auth/me`.
#[cfg(feature = "hydrate")]
fn bootstrap_session(auth: RwSignal<AuthState>) {
    use crate::state::auth::{AuthStatus, settle_session};
    use crate::util::session;

    leptos::task::spawn_local(async move {
        let had_token = session::load_token().is_some();
        let settled = settle_session(crate::net::api::fetch_current_user().await, had_token);
        match settled.status {
            AuthStatus::Expired => {
                leptos::logging::warn!("stored session expired; clearing token");
                session::clear_token();
            }
            AuthStatus::SignedIn => leptos::logging::log!("session restored"),
            AuthStatus::SignedOut | AuthStatus::Unknown => {}
        }
        // A login that finished while the probe was in flight wins.
        if auth.with_untracked(AuthState::is_loading) {
            auth.set(settled);
        }
    });
}

/// Root application component.
///
/// Provides the shared contexts and sets up client-side routing. Every
/// route except `/login` and `/register` sits behind [`ProtectedRoute`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::loading());
    provide_context(auth);
    provide_context(ToastHub::new());

    #[cfg(feature = "hydrate")]
    bootstrap_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/resume-desk.css"/>
        <Title text="Resume Desk"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <FaultBarrier>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route
                            path=StaticSegment("")
                            view=|| view! { <ProtectedRoute><ResumesPage/></ProtectedRoute> }
                        />
                        <Route
                            path=(StaticSegment("resumes"), ParamSegment("id"))
                            view=|| view! { <ProtectedRoute><ResumeDetailPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("tasks")
                            view=|| view! { <ProtectedRoute><TasksPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("weights")
                            view=|| view! { <ProtectedRoute><WeightsPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("audit")
                            view=|| view! { <ProtectedRoute><AuditPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment("files")
                            view=|| view! { <ProtectedRoute><FilesPage/></ProtectedRoute> }
                        />
                    </Routes>
                </FaultBarrier>
            </main>
            <ToastHost/>
        </Router>
    }
}
