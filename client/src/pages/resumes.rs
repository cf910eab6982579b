//! Resume list page: search by name, page through results, open or delete.

use leptos::prelude::*;
use leptos_router::components::A;

use super::{PAGE_SIZE, or_dash, start_download, track_page};
use crate::components::fault_barrier::use_fault_sink;
use crate::components::pager::{CursorTrail, Pager};
use crate::components::toast_host::use_toasts;
use crate::net::api::{self, ListQuery};
use crate::net::types::Resume;

#[component]
pub fn ResumesPage() -> impl IntoView {
    let toasts = use_toasts();
    let sink = use_fault_sink();
    let trail = RwSignal::new(CursorTrail::default());
    let next_token = RwSignal::new(None::<String>);
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(None::<String>);

    let resumes = LocalResource::new(move || {
        let query = ListQuery {
            page: None,
            size: Some(PAGE_SIZE),
            next_token: trail.get().current(),
            filter: search.get(),
        };
        async move { api::list_resumes(&query).await }
    });
    track_page(resumes, next_token, toasts.clone());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search_input.get().trim().to_owned();
        search.set((!term.is_empty()).then_some(term));
        trail.update(CursorTrail::reset);
    };

    let on_delete = Callback::new({
        let toasts = toasts.clone();
        move |id: String| {
            #[cfg(feature = "hydrate")]
            {
                let toasts = toasts.clone();
                leptos::task::spawn_local(async move {
                    match api::delete_resume(&id).await {
                        Ok(()) => {
                            toasts.success("Resume deleted.");
                            resumes.refetch();
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

    let on_download = Callback::new({
        let toasts = toasts.clone();
        move |resume: Resume| {
            if let Some(key) = resume.file_key {
                start_download(key, resume.file_name, toasts.clone(), sink);
            }
        }
    });

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"Resumes"</h1>
                <form class="search-form" on:submit=on_search>
                    <input
                        class="search-form__input"
                        type="search"
                        placeholder="Search by candidate name"
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
            </header>

            <Suspense fallback=move || view! { <p>"Loading resumes..."</p> }>
                {move || {
                    resumes
                        .get()
                        .map(|result| match result {
                            Ok(page) if page.items.is_empty() => {
                                view! { <p class="list-page__empty">"No resumes found."</p> }.into_any()
                            }
                            Ok(page) => {
                                view! {
                                    <table class="data-table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Position"</th>
                                                <th>"Experience"</th>
                                                <th>"Education"</th>
                                                <th>"Updated"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {page
                                                .items
                                                .into_iter()
                                                .map(|resume| view! { <ResumeRow resume on_delete on_download/> })
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
fn ResumeRow(resume: Resume, on_delete: Callback<String>, on_download: Callback<Resume>) -> impl IntoView {
    let href = format!("/resumes/{}", resume.id);
    let id = resume.id.clone();
    let has_file = resume.file_key.is_some();
    let experience = resume
        .years_of_experience
        .map_or_else(|| "—".to_owned(), |y| format!("{y:.1} yrs"));
    let position = or_dash(resume.position.as_deref());
    let education = or_dash(resume.education_level.as_deref());
    let updated = or_dash(resume.updated_at.as_deref());
    let name = resume.name.clone();

    view! {
        <tr>
            <td><A href=href>{name}</A></td>
            <td>{position}</td>
            <td>{experience}</td>
            <td>{education}</td>
            <td>{updated}</td>
            <td class="data-table__actions">
                {has_file
                    .then(move || {
                        view! {
                            <button class="btn btn--small" on:click=move |_| on_download.run(resume.clone())>
                                "Download"
                            </button>
                        }
                    })}
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
