//! Screening weight templates: list, create, edit, delete.
//!
//! DESIGN
//! ======
//! The editor works on a [`WeightDraft`] of raw strings so half-typed numbers
//! survive re-renders; conversion to a [`WeightTemplateInput`] happens once,
//! on save, and is validated before any request is sent.

#[cfg(test)]
#[path = "weights_test.rs"]
mod weights_test;

use leptos::prelude::*;

use super::{PAGE_SIZE, or_dash, track_page};
use crate::components::pager::{CursorTrail, Pager};
use crate::components::toast_host::use_toasts;
use crate::net::api::{self, ListQuery};
use crate::net::types::{WeightItem, WeightTemplate, WeightTemplateInput};

const DEFAULT_DIMENSIONS: &[(&str, &str)] = &[("skills", "0.4"), ("experience", "0.4"), ("education", "0.2")];

/// Editable form state for one template.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct WeightDraft {
    /// Id of the template being edited; `None` for a new one.
    pub editing: Option<String>,
    pub name: String,
    pub description: String,
    /// `(dimension, weight)` pairs as typed.
    pub rows: Vec<(String, String)>,
    pub is_default: bool,
}

impl Default for WeightDraft {
    fn default() -> Self {
        Self {
            editing: None,
            name: String::new(),
            description: String::new(),
            rows: DEFAULT_DIMENSIONS.iter().map(|(d, w)| ((*d).to_owned(), (*w).to_owned())).collect(),
            is_default: false,
        }
    }
}

impl WeightDraft {
    pub(crate) fn from_template(template: &WeightTemplate) -> Self {
        Self {
            editing: Some(template.id.clone()),
            name: template.name.clone(),
            description: template.description.clone().unwrap_or_default(),
            rows: template.items.iter().map(|i| (i.dimension.clone(), i.weight.to_string())).collect(),
            is_default: template.is_default,
        }
    }

    /// Parse and validate the draft into an API payload.
    pub(crate) fn to_input(&self) -> Result<WeightTemplateInput, &'static str> {
        let items = self
            .rows
            .iter()
            .map(|(dimension, weight)| {
                let weight = weight.trim().parse::<f64>().map_err(|_| "Weights must be non-negative numbers.")?;
                Ok(WeightItem { dimension: dimension.trim().to_owned(), weight })
            })
            .collect::<Result<Vec<_>, &'static str>>()?;
        let description = self.description.trim();
        let input = WeightTemplateInput {
            name: self.name.trim().to_owned(),
            description: (!description.is_empty()).then(|| description.to_owned()),
            items,
            is_default: self.is_default,
        };
        input.validate()?;
        Ok(input)
    }
}

/// Sum of the parseable weights, for the editor's running total.
pub(crate) fn weight_total(rows: &[(String, String)]) -> f64 {
    rows.iter().filter_map(|(_, w)| w.trim().parse::<f64>().ok()).filter(|w| w.is_finite()).sum()
}

#[component]
pub fn WeightsPage() -> impl IntoView {
    let toasts = use_toasts();
    let trail = RwSignal::new(CursorTrail::default());
    let next_token = RwSignal::new(None::<String>);
    let search_input = RwSignal::new(String::new());
    let search = RwSignal::new(None::<String>);
    let draft = RwSignal::new(WeightDraft::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let templates = LocalResource::new(move || {
        let query = ListQuery {
            page: None,
            size: Some(PAGE_SIZE),
            next_token: trail.get().current(),
            filter: search.get(),
        };
        async move { api::list_weight_templates(&query).await }
    });
    track_page(templates, next_token, toasts.clone());

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let term = search_input.get().trim().to_owned();
        search.set((!term.is_empty()).then_some(term));
        trail.update(CursorTrail::reset);
    };

    let on_save = {
        let toasts = toasts.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let current = draft.get();
            let input = match current.to_input() {
                Ok(input) => input,
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
                    let result = match current.editing.as_deref() {
                        Some(id) => api::update_weight_template(id, &input).await,
                        None => api::create_weight_template(&input).await,
                    };
                    match result {
                        Ok(saved) => {
                            toasts.success(format!("Template \"{}\" saved.", saved.name));
                            draft.set(WeightDraft::default());
                            templates.refetch();
                        }
                        Err(e) => {
                            info.set(e.to_string());
                            toasts.error(format!("Save failed: {e}"));
                        }
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (current, input, &toasts);
            }
        }
    };

    let on_edit = Callback::new(move |template: WeightTemplate| {
        info.set(String::new());
        draft.set(WeightDraft::from_template(&template));
    });

    let on_delete = Callback::new({
        let toasts = toasts.clone();
        move |id: String| {
            #[cfg(feature = "hydrate")]
            {
                let toasts = toasts.clone();
                leptos::task::spawn_local(async move {
                    match api::delete_weight_template(&id).await {
                        Ok(()) => {
                            toasts.success("Template deleted.");
                            if draft.with_untracked(|d| d.editing.as_deref() == Some(id.as_str())) {
                                draft.set(WeightDraft::default());
                            }
                            templates.refetch();
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
                <h1>"Weight templates"</h1>
                <form class="search-form" on:submit=on_search>
                    <input
                        class="search-form__input"
                        type="search"
                        placeholder="Search by template name"
                        prop:value=move || search_input.get()
                        on:input=move |ev| search_input.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">"Search"</button>
                </form>
            </header>

            <div class="split">
                <section class="split__main">
                    <Suspense fallback=move || view! { <p>"Loading templates..."</p> }>
                        {move || {
                            templates
                                .get()
                                .map(|result| match result {
                                    Ok(page) if page.items.is_empty() => {
                                        view! { <p class="list-page__empty">"No templates yet."</p> }.into_any()
                                    }
                                    Ok(page) => {
                                        view! {
                                            <ul class="card-list">
                                                {page
                                                    .items
                                                    .into_iter()
                                                    .map(|template| view! { <TemplateCard template on_edit on_delete/> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
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
                    <WeightEditor draft info busy on_save/>
                </section>
            </div>
        </div>
    }
}

#[component]
fn TemplateCard(template: WeightTemplate, on_edit: Callback<WeightTemplate>, on_delete: Callback<String>) -> impl IntoView {
    let id = template.id.clone();
    let summary = template
        .items
        .iter()
        .map(|i| format!("{} {}", i.dimension, i.weight))
        .collect::<Vec<_>>()
        .join(" · ");
    let description = or_dash(template.description.as_deref());
    let name = template.name.clone();
    let is_default = template.is_default;

    view! {
        <li class="card">
            <div class="card__title">
                {name}
                {is_default.then(|| view! { <span class="tag">"default"</span> })}
            </div>
            <p class="muted">{description}</p>
            <p>{summary}</p>
            <div class="card__actions">
                <button class="btn btn--small" on:click=move |_| on_edit.run(template.clone())>"Edit"</button>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[component]
fn WeightEditor<F>(draft: RwSignal<WeightDraft>, info: RwSignal<String>, busy: RwSignal<bool>, on_save: F) -> impl IntoView
where
    F: FnMut(leptos::ev::SubmitEvent) + 'static,
{
    let title = move || if draft.with(|d| d.editing.is_some()) { "Edit template" } else { "New template" };
    let total = move || format!("Total weight: {:.2}", draft.with(|d| weight_total(&d.rows)));

    // Rows re-render only when one is added or removed, so typing keeps focus.
    let row_count = Memo::new(move |_| draft.with(|d| d.rows.len()));
    let rows = move || {
        (0..row_count.get())
            .map(|idx| {
                let dimension = move || draft.with(|d| d.rows.get(idx).map(|r| r.0.clone()).unwrap_or_default());
                let weight = move || draft.with(|d| d.rows.get(idx).map(|r| r.1.clone()).unwrap_or_default());
                view! {
                    <div class="weight-row">
                        <input
                            type="text"
                            placeholder="Dimension"
                            prop:value=dimension
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| {
                                    if let Some(row) = d.rows.get_mut(idx) {
                                        row.0 = value;
                                    }
                                });
                            }
                        />
                        <input
                            type="number"
                            step="0.05"
                            min="0"
                            prop:value=weight
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| {
                                    if let Some(row) = d.rows.get_mut(idx) {
                                        row.1 = value;
                                    }
                                });
                            }
                        />
                        <button
                            class="btn btn--small"
                            type="button"
                            on:click=move |_| {
                                draft.update(|d| {
                                    if idx < d.rows.len() {
                                        d.rows.remove(idx);
                                    }
                                });
                            }
                        >
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <form class="weight-editor" on:submit=on_save>
            <h2>{title}</h2>
            <input
                type="text"
                placeholder="Template name"
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.name = value);
                }
            />
            <input
                type="text"
                placeholder="Description (optional)"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| d.description = value);
                }
            />
            {rows}
            <button
                class="btn btn--small"
                type="button"
                on:click=move |_| draft.update(|d| d.rows.push((String::new(), "0".to_owned())))
            >
                "Add dimension"
            </button>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || draft.with(|d| d.is_default)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        draft.update(|d| d.is_default = checked);
                    }
                />
                " Use as default"
            </label>
            <p class="muted">{total}</p>
            <div class="form-actions">
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>"Save"</button>
                <button class="btn" type="button" on:click=move |_| draft.set(WeightDraft::default())>
                    "Clear"
                </button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
