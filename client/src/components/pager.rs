//! Cursor pagination controls for list pages.
//!
//! DESIGN
//! ======
//! List endpoints page forward with an opaque `next_token`. Going back means
//! replaying the token that produced the previous page, so the trail keeps a
//! stack of the tokens already used.

#[cfg(test)]
#[path = "pager_test.rs"]
mod pager_test;

use leptos::prelude::*;

/// Tokens visited so far; `current` is the one for the page on screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorTrail {
    previous: Vec<Option<String>>,
    current: Option<String>,
}

impl CursorTrail {
    /// Token to request the current page with (`None` for the first page).
    pub fn current(&self) -> Option<String> {
        self.current.clone()
    }

    /// 1-based page number.
    pub fn page_number(&self) -> usize {
        self.previous.len() + 1
    }

    pub fn can_go_back(&self) -> bool {
        !self.previous.is_empty()
    }

    /// Move to the page identified by `next`.
    pub fn advance(&mut self, next: String) {
        let prev = self.current.replace(next);
        self.previous.push(prev);
    }

    /// Return to the previous page; `false` when already on the first.
    pub fn back(&mut self) -> bool {
        match self.previous.pop() {
            Some(prev) => {
                self.current = prev;
                true
            }
            None => false,
        }
    }

    /// Back to the first page, e.g. after a filter change.
    pub fn reset(&mut self) {
        self.previous.clear();
        self.current = None;
    }
}

/// Previous/next buttons driving a [`CursorTrail`].
#[component]
pub fn Pager(trail: RwSignal<CursorTrail>, #[prop(into)] next_token: Signal<Option<String>>) -> impl IntoView {
    let on_prev = move |_| {
        trail.update(|t| {
            t.back();
        });
    };
    let on_next = move |_| {
        if let Some(token) = next_token.get_untracked().filter(|t| !t.is_empty()) {
            trail.update(|t| t.advance(token));
        }
    };

    view! {
        <div class="pager">
            <button class="btn" disabled=move || !trail.get().can_go_back() on:click=on_prev>
                "Previous"
            </button>
            <span class="pager__page">{move || format!("Page {}", trail.get().page_number())}</span>
            <button
                class="btn"
                disabled=move || next_token.get().is_none_or(|t| t.is_empty())
                on:click=on_next
            >
                "Next"
            </button>
        </div>
    }
}
