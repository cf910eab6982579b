//! Route guard that gates a subtree on the shared auth state.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::state::auth::{AuthState, GuardDecision, guard_decision};
use crate::util::auth::current_location;

/// Render `children` only for an authenticated user.
///
/// While auth is loading a spinner is shown; unauthenticated visitors are
/// redirected to `/login` with the requested location attached.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let decision = Memo::new(move |_| {
        let current = current_location(&location.pathname.get(), &location.search.get());
        guard_decision(&auth.get(), &current)
    });

    Effect::new(move |prev: Option<GuardDecision>| {
        let next = decision.get();
        if prev.as_ref() != Some(&next) {
            leptos::logging::log!("route guard: {next:?}");
        }
        next
    });

    move || match decision.get() {
        GuardDecision::Loading => view! {
            <div class="route-guard__loading" aria-busy="true">
                <span class="spinner"></span>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect { to } => view! { <Redirect path=to/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
