//! Matching task page: start a screening run and watch its progress.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::*;

use super::{PAGE_SIZE, or_dash, track_page};
use crate::components::pager::{CursorTrail, Pager};
use crate::components::toast_host::use_toasts;
use crate::net::api::{self, ListQuery};
use crate::net::types::{MatchingTask, MatchingTaskStatus, NewMatchingTask};

/// Status filter options as `(query value, label)`; the empty value lists all.
const STATUS_FILTERS: &[(&str, &str)] = &[
    ("", "All statuses"),
    ("pending", "Pending"),
    ("running", "Running"),
    ("completed", "Completed"),
    ("failed", "Failed"),
    ("cancelled", "Cancelled"),
];

fn validate_new_task(name: &str, job_description: &str, template_id: &str) -> Result<NewMatchingTask, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Task name is required.");
    }
    let job_description = job_description.trim();
    if job_description.is_empty() {
        return Err("Paste the job description to match against.");
    }
    let template_id = template_id.trim();
    Ok(NewMatchingTask {
        name: name.to_owned(),
        job_description: job_description.to_owned(),
        template_id: (!template_id.is_empty()).then(|| template_id.to_owned()),
        resume_ids: Vec::new(),
    })
}

fn status_class(status: MatchingTaskStatus) -> &'static str {
    match status {
        MatchingTaskStatus::Completed => "status status--ok",
        MatchingTaskStatus::Failed | MatchingTaskStatus::Cancelled => "status status--bad",
        MatchingTaskStatus::Running => "status status--busy",
        MatchingTaskStatus::Pending | MatchingTaskStatus::Unknown => "status",
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let toasts = use_toasts();
    let trail = RwSignal::new(CursorTrail::default());
    let next_token = RwSignal::new(None::<String>);
    let status = RwSignal::new(String::new());

    let tasks = LocalResource::new(move || {
        let query = ListQuery {
            page: None,
            size: Some(PAGE_SIZE),
            next_token: trail.get().current(),
            filter: Some(status.get()),
        };
        async move { api::list_matching_tasks(&query).await }
    });
    track_page(tasks, next_token, toasts.clone());

    let name = RwSignal::new(String::new());
    let job_description = RwSignal::new(String::new());
    let template_id = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let req = match validate_new_task(&name.get(), &job_description.get(), &template_id.get()) {
            Ok(req) => req,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let toasts = toasts.clone();
            leptos::task::spawn_local(async move {
                match api::create_matching_task(&req).await {
                    Ok(task) => {
                        toasts.success(format!("Task \"{}\" started.", task.name));
                        name.set(String::new());
                        job_description.set(String::new());
                        trail.update(CursorTrail::reset);
                        tasks.refetch();
                    }
                    Err(e) => {
                        info.set(e.to_string());
                        toasts.error(format!("Could not start task: {e}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (req, &toasts);
        }
    };

    let on_status = move |ev: leptos::ev::Event| {
        status.set(event_target_value(&ev));
        trail.update(CursorTrail::reset);
    };

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"Matching tasks"</h1>
                <select class="filter-select" on:change=on_status>
                    {STATUS_FILTERS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn" on:click=move |_| tasks.refetch()>"Refresh"</button>
            </header>

            <form class="task-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Task name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Weight template id (optional)"
                    prop:value=move || template_id.get()
                    on:input=move |ev| template_id.set(event_target_value(&ev))
                />
                <textarea
                    rows="6"
                    placeholder="Job description"
                    prop:value=move || job_description.get()
                    on:input=move |ev| job_description.set(event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Start matching"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
            </form>

            <Suspense fallback=move || view! { <p>"Loading tasks..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|result| match result {
                            Ok(page) if page.items.is_empty() => {
                                view! { <p class="list-page__empty">"No matching tasks yet."</p> }.into_any()
                            }
                            Ok(page) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Status"</th>
                                                <th>"Progress"</th>
                                                <th>"Created"</th>
                                                <th>"Finished"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {page
                                                .items
                                                .into_iter()
                                                .map(|task| view! { <TaskRow task/> })
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
        </div>
    }
}

#[component]
fn TaskRow(task: MatchingTask) -> impl IntoView {
    let percent = task.progress_percent();
    let progress = format!("{}/{} ({percent}%)", task.processed, task.total);
    let status_title = task.error.clone().unwrap_or_default();

    view! {
        <tr>
            <td>{task.name.clone()}</td>
            <td>
                <span class=status_class(task.status) title=status_title>
                    {task.status.label()}
                </span>
            </td>
            <td>
                <progress max="100" value=percent.to_string()></progress>
                " "
                {progress}
            </td>
            <td>{or_dash(task.created_at.as_deref())}</td>
            <td>{or_dash(task.finished_at.as_deref())}</td>
        </tr>
    }
}
