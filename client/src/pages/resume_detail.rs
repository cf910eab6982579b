//! Resume detail page (`/resumes/:id`).

#[cfg(test)]
#[path = "resume_detail_test.rs"]
mod resume_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::{or_dash, start_download};
use crate::components::fault_barrier::{FaultSink, report_to, use_fault_sink};
use crate::components::toast_host::use_toasts;
use crate::net::api;
use crate::net::http::ApiError;
use crate::net::types::{Education, ResumeDetail, WorkExperience};
use crate::state::toast::ToastHub;
use crate::util::fault::UiFault;

/// "start – end" span for a dated entry; `None` when neither end is known.
fn date_span<'a>(start: Option<&'a str>, end: Option<&'a str>) -> Option<String> {
    let clean = |v: Option<&'a str>| v.map(str::trim).filter(|s| !s.is_empty());
    match (clean(start), clean(end)) {
        (None, None) => None,
        (Some(s), None) => Some(format!("{s} – present")),
        (None, Some(e)) => Some(format!("until {e}")),
        (Some(s), Some(e)) => Some(format!("{s} – {e}")),
    }
}

fn education_line(edu: &Education) -> String {
    let parts: Vec<&str> = [edu.degree.as_deref(), edu.major.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if parts.is_empty() {
        edu.school.clone()
    } else {
        format!("{}, {}", edu.school, parts.join(" "))
    }
}

fn work_line(work: &WorkExperience) -> String {
    match work.title.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => format!("{title} at {}", work.company),
        None => work.company.clone(),
    }
}

#[component]
pub fn ResumeDetailPage() -> impl IntoView {
    let toasts = use_toasts();
    let sink = use_fault_sink();
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    let detail = LocalResource::new(move || {
        let id = id();
        async move { api::get_resume(&id).await }
    });

    // A payload that does not decode means this view cannot render the record.
    Effect::new(move || {
        if let Some(Err(ApiError::Decode(msg))) = detail.get() {
            report_to(sink, UiFault::Render(format!("resume could not be read: {msg}")));
        }
    });

    view! {
        <div class="detail-page">
            <A href="/">"← All resumes"</A>
            <Suspense fallback=move || view! { <p>"Loading resume..."</p> }>
                {move || {
                    let toasts = toasts.clone();
                    detail
                        .get()
                        .map(move |result| match result {
                            Ok(detail) => view! { <ResumeSheet detail toasts sink/> }.into_any(),
                            Err(e) => view! { <p class="detail-page__error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ResumeSheet(detail: ResumeDetail, toasts: ToastHub, sink: Option<FaultSink>) -> impl IntoView {
    let ResumeDetail { resume, summary, skills, educations, work_experiences, raw_text } = detail;

    let file_name = resume.file_name.clone();
    let download = resume.file_key.clone().map(move |key| {
        view! {
            <button
                class="btn"
                on:click=move |_| start_download(key.clone(), file_name.clone(), toasts.clone(), sink)
            >
                "Download original"
            </button>
        }
    });

    let experience = resume.years_of_experience.map(|y| format!("{y:.1} years"));

    view! {
        <article class="resume-sheet">
            <header class="resume-sheet__header">
                <h1>{resume.name.clone()}</h1>
                {download}
            </header>
            <dl class="resume-sheet__facts">
                <dt>"Email"</dt>
                <dd>{or_dash(resume.email.as_deref())}</dd>
                <dt>"Phone"</dt>
                <dd>{or_dash(resume.phone.as_deref())}</dd>
                <dt>"Position"</dt>
                <dd>{or_dash(resume.position.as_deref())}</dd>
                <dt>"Experience"</dt>
                <dd>{or_dash(experience.as_deref())}</dd>
                <dt>"Education"</dt>
                <dd>{or_dash(resume.education_level.as_deref())}</dd>
            </dl>

            {summary.map(|s| view! {
                <section>
                    <h2>"Summary"</h2>
                    <p>{s}</p>
                </section>
            })}

            {(!skills.is_empty()).then(|| view! {
                <section>
                    <h2>"Skills"</h2>
                    <ul class="tag-list">
                        {skills.into_iter().map(|s| view! { <li class="tag">{s}</li> }).collect::<Vec<_>>()}
                    </ul>
                </section>
            })}

            {(!work_experiences.is_empty()).then(|| view! {
                <section>
                    <h2>"Work experience"</h2>
                    <ul>
                        {work_experiences
                            .iter()
                            .map(|w| {
                                let span = date_span(w.start_date.as_deref(), w.end_date.as_deref());
                                let line = work_line(w);
                                let description = w.description.clone();
                                view! {
                                    <li>
                                        <strong>{line}</strong>
                                        {span.map(|s| view! { <span class="muted">" (" {s} ")"</span> })}
                                        {description.map(|d| view! { <p>{d}</p> })}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
            })}

            {(!educations.is_empty()).then(|| view! {
                <section>
                    <h2>"Education"</h2>
                    <ul>
                        {educations
                            .iter()
                            .map(|e| {
                                let span = date_span(e.start_date.as_deref(), e.end_date.as_deref());
                                let line = education_line(e);
                                view! {
                                    <li>
                                        {line}
                                        {span.map(|s| view! { <span class="muted">" (" {s} ")"</span> })}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </section>
            })}

            {raw_text.map(|text| view! {
                <details class="resume-sheet__raw">
                    <summary>"Extracted text"</summary>
                    <pre>{text}</pre>
                </details>
            })}
        </article>
    }
}
