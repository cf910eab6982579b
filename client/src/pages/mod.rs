//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (resources, form state, toasts)
//! and delegates shared chrome to `components`. API failures are surfaced to
//! the user through the toast hub; pages never retry on their own.

pub mod audit;
pub mod files;
pub mod login;
pub mod not_found;
pub mod register;
pub mod resume_detail;
pub mod resumes;
pub mod tasks;
pub mod weights;

use leptos::prelude::*;

use crate::components::fault_barrier::FaultSink;
use crate::net::http::ApiError;
use crate::net::types::Page;
use crate::state::toast::ToastHub;

/// Rows requested per list page.
pub(crate) const PAGE_SIZE: u32 = 20;

/// Mirror a list resource into the pager cursor and toast its failures.
pub(crate) fn track_page<T>(
    resource: LocalResource<Result<Page<T>, ApiError>>,
    next_token: RwSignal<Option<String>>,
    toasts: ToastHub,
) where
    T: Clone + 'static,
{
    Effect::new(move || match resource.get() {
        Some(Ok(page)) => next_token.set(page.next_token),
        Some(Err(e)) => {
            next_token.set(None);
            toasts.error(e.to_string());
        }
        None => {}
    });
}

/// Fetch a signed URL for `key` and start the browser download.
///
/// API failures become error toasts; a URL the browser rejects is also
/// reported to the fault barrier, which suppresses it.
pub(crate) fn start_download(key: String, filename: Option<String>, toasts: ToastHub, sink: Option<FaultSink>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::DownloadError;

        match crate::net::api::download_file(&key, filename.as_deref()).await {
            Ok(()) => {}
            Err(DownloadError::Api(e)) => {
                toasts.error(format!("Download failed: {e}"));
            }
            Err(DownloadError::Fault(fault)) => {
                toasts.error("The download link could not be opened.");
                crate::components::fault_barrier::report_to(sink, fault);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, filename, toasts, sink);
    }
}

/// Render an optional text cell, with a dash for missing values.
pub(crate) fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => "—".to_owned(),
    }
}
