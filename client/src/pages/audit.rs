//! Audit log browser with an action filter and per-entry detail.

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

use leptos::prelude::*;

use super::{PAGE_SIZE, or_dash, track_page};
use crate::components::pager::{CursorTrail, Pager};
use crate::components::toast_host::use_toasts;
use crate::net::api::{self, ListQuery};
use crate::net::types::AuditLog;

/// Who did it: the username, else the user id, else a dash.
fn actor(log: &AuditLog) -> String {
    or_dash(log.username.as_deref().or(log.user_id.as_deref()))
}

/// `type/id` of the affected resource, or whichever half is known.
fn target(log: &AuditLog) -> String {
    match (log.resource_type.as_deref(), log.resource_id.as_deref()) {
        (Some(kind), Some(id)) => format!("{kind}/{id}"),
        (Some(one), None) | (None, Some(one)) => one.to_owned(),
        (None, None) => "—".to_owned(),
    }
}

/// Detail payload pretty-printed for display.
fn detail_text(log: &AuditLog) -> Option<String> {
    match &log.detail {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s.clone()),
        Some(value) => Some(serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())),
    }
}

#[component]
pub fn AuditPage() -> impl IntoView {
    let toasts = use_toasts();
    let trail = RwSignal::new(CursorTrail::default());
    let next_token = RwSignal::new(None::<String>);
    let action_input = RwSignal::new(String::new());
    let action = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<String>);

    let logs = LocalResource::new(move || {
        let query = ListQuery {
            page: None,
            size: Some(PAGE_SIZE),
            next_token: trail.get().current(),
            filter: action.get(),
        };
        async move { api::list_audit_logs(&query).await }
    });
    track_page(logs, next_token, toasts.clone());

    let entry = LocalResource::new(move || {
        let id = selected.get();
        async move {
            match id {
                Some(id) => Some(api::get_audit_log(&id).await),
                None => None,
            }
        }
    });

    let on_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = action_input.get().trim().to_owned();
        action.set((!term.is_empty()).then_some(term));
        trail.update(CursorTrail::reset);
    };

    let on_select = Callback::new(move |id: String| selected.set(Some(id)));

    let on_delete = Callback::new({
        let toasts = toasts.clone();
        move |id: String| {
            #[cfg(feature = "hydrate")]
            {
                let toasts = toasts.clone();
                leptos::task::spawn_local(async move {
                    match api::delete_audit_log(&id).await {
                        Ok(()) => {
                            toasts.success("Audit entry deleted.");
                            if selected.get_untracked().as_deref() == Some(id.as_str()) {
                                selected.set(None);
                            }
                            logs.refetch();
                        }
                        Err(e) => {
                            toasts.error(format!("Delete failed: {e}"));
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (id, &toasts);
            }
        }
    });

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"Audit log"</h1>
                <form class="search-form" on:submit=on_filter>
                    <input
                        class="search-form__input"
                        type="search"
                        placeholder="Filter by action (e.g. resume.delete)"
                        prop:value=move || action_input.get()
                        on:input=move |ev| action_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Filter"</button>
                </form>
            </header>

            <div class="split">
                <section class="split__main">
                    <Suspense fallback=move || view! { <p>"Loading audit log..."</p> }>
                        {move || {
                            logs.get()
                                .map(|result| match result {
                                    Ok(page) if page.items.is_empty() => {
                                        view! { <p class="list-page__empty">"No audit entries."</p> }.into_any()
                                    }
                                    Ok(page) => {
                                        view! {
                                            <table class="data-table">
                                                <thead>
                                                    <tr>
                                                        <th>"When"</th>
                                                        <th>"Action"</th>
                                                        <th>"Actor"</th>
                                                        <th>"Target"</th>
                                                        <th></th>
                                                    </tr>
                                                </thead>
                                                <tbody>
                                                    {page
                                                        .items
                                                        .into_iter()
                                                        .map(|log| view! { <AuditRow log on_select on_delete/> })
                                                        .collect::<Vec<_>>()}
                                                </tbody>
                                            </table>
                                        }
                                            .into_any()
                                    }
                                    Err(e) => view! { <p class="list-page__error">{e.to_string()}</p> }.into_any(),
                                })
                        }}
                    </Suspense>
                    <Pager trail next_token/>
                </section>

                <section class="split__side">
                    <Suspense fallback=move || view! { <p>"Loading entry..."</p> }>
                        {move || {
                            entry.get()
                                .map(|found| match found {
                                    None => view! { <p class="muted">"Select an entry to see its detail."</p> }.into_any(),
                                    Some(Ok(log)) => view! { <AuditDetail log/> }.into_any(),
                                    Some(Err(e)) => view! { <p class="list-page__error">{e.to_string()}</p> }.into_any(),
                                })
                        }}
                    </Suspense>
                </section>
            </div>
        </div>
    }
}

#[component]
fn AuditRow(log: AuditLog, on_select: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let select_id = log.id.clone();
    let delete_id = log.id.clone();
    let actor = actor(&log);
    let target = target(&log);

    view! {
        <tr class="data-table__row--clickable" on:click=move |_| on_select.run(select_id.clone())>
            <td>{or_dash(log.created_at.as_deref())}</td>
            <td><code>{log.action.clone()}</code></td>
            <td>{actor}</td>
            <td>{target}</td>
            <td class="data-table__actions">
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_delete.run(delete_id.clone());
                    }
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn AuditDetail(log: AuditLog) -> impl IntoView {
    let detail = detail_text(&log);
    view! {
        <article class="audit-detail">
            <h2><code>{log.action.clone()}</code></h2>
            <dl>
                <dt>"When"</dt>
                <dd>{or_dash(log.created_at.as_deref())}</dd>
                <dt>"Actor"</dt>
                <dd>{actor(&log)}</dd>
                <dt>"Target"</dt>
                <dd>{target(&log)}</dd>
                <dt>"IP"</dt>
                <dd>{or_dash(log.ip.as_deref())}</dd>
            </dl>
            {detail.map(|text| view! { <pre class="audit-detail__payload">{text}</pre> })}
        </article>
    }
}
