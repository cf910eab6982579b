//! Fault barrier isolating render faults within a subtree.
//!
//! SYSTEM CONTEXT
//! ==============
//! Descendants report faults through the [`FaultSink`] context, and errors
//! thrown while rendering are caught by an inner `ErrorBoundary` and
//! classified the same way. Benign faults are logged and dropped; anything
//! else swaps the subtree for a fallback view until the route changes. The
//! only recovery offered to the user is a full page reload.

#[cfg(test)]
#[path = "fault_barrier_test.rs"]
mod fault_barrier_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::fault::{BarrierState, CatchOutcome, UiFault};

/// Handle through which descendants report render faults.
#[derive(Clone, Copy)]
pub struct FaultSink(RwSignal<BarrierState>);

impl FaultSink {
    /// Hand `fault` to the enclosing barrier.
    pub fn report(&self, fault: UiFault) -> CatchOutcome {
        let mut next = self.0.get_untracked();
        let was_faulted = next.is_faulted();
        let outcome = next.catch(fault);
        if outcome == CatchOutcome::Faulted || was_faulted {
            self.0.set(next);
        }
        outcome
    }

    /// Classify each thrown error message and report it.
    ///
    /// Returns `true` when at least one of them faulted the barrier.
    fn report_messages<I>(&self, messages: I) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        messages
            .into_iter()
            .map(|message| self.report(UiFault::from_js_message(message)))
            .fold(false, |faulted, outcome| faulted | (outcome == CatchOutcome::Faulted))
    }
}

/// The nearest enclosing barrier's sink, if any.
pub fn use_fault_sink() -> Option<FaultSink> {
    use_context::<FaultSink>()
}

/// Report `fault` through `sink`, or just log it when there is no barrier.
///
/// Capture the sink with [`use_fault_sink`] while the component is being set
/// up; async tasks have no reactive owner to look it up from.
pub fn report_to(sink: Option<FaultSink>, fault: UiFault) {
    match sink {
        Some(sink) => {
            sink.report(fault);
        }
        None => leptos::logging::warn!("fault outside any barrier: {fault}"),
    }
}

/// Wrap `children` in a fault barrier.
///
/// `fallback` replaces the default "Something went wrong" view.
#[component]
pub fn FaultBarrier(#[prop(optional, into)] fallback: Option<ViewFn>, children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(BarrierState::default());
    let sink = FaultSink(state);
    provide_context(sink);

    let location = use_location();
    Effect::new(move |prev: Option<String>| {
        let path = location.pathname.get();
        if prev.is_some_and(|p| p != path) {
            state.update(BarrierState::reset);
        }
        path
    });

    move || match state.with(|s| s.fault().cloned()) {
        None => {
            let children = children.clone();
            view! {
                <ErrorBoundary fallback=move |errors| {
                    Effect::new(move |_| {
                        let messages: Vec<String> =
                            errors.with(|e| e.iter().map(|(_, err)| err.to_string()).collect());
                        if messages.is_empty() || sink.report_messages(messages) {
                            return;
                        }
                        // Every error was benign: let the children render again.
                        errors.update(|e| {
                            let ids: Vec<_> = e.iter().map(|(id, _)| id.clone()).collect();
                            for id in ids {
                                e.remove(&id);
                            }
                        });
                    });
                }>
                    {children()}
                </ErrorBoundary>
            }
            .into_any()
        }
        Some(fault) => match &fallback {
            Some(fallback) => fallback.run(),
            None => view! { <DefaultFaultView message=fault.to_string()/> }.into_any(),
        },
    }
}

#[component]
fn DefaultFaultView(message: String) -> impl IntoView {
    let on_reload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    };

    view! {
        <div class="fault-view" role="alert">
            <h2>"Something went wrong"</h2>
            <p class="fault-view__message">{message}</p>
            <button class="btn btn--primary" on:click=on_reload>
                "Reload page"
            </button>
        </div>
    }
}
