//! File storage page: upload a document and fetch stored files by key.

use leptos::html;
use leptos::prelude::*;

use super::start_download;
use crate::components::fault_barrier::use_fault_sink;
use crate::components::toast_host::use_toasts;
use crate::util::download::filename_from_key;

#[component]
pub fn FilesPage() -> impl IntoView {
    let toasts = use_toasts();
    let sink = use_fault_sink();
    let file_input = NodeRef::<html::Input>::new();
    let kb_id = RwSignal::new(String::new());
    let uploaded = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);
    let key_input = RwSignal::new(String::new());

    let on_upload = {
        let toasts = toasts.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                let Some(file) = file_input.get().and_then(|el| el.files()).and_then(|files| files.get(0)) else {
                    toasts.info("Choose a file to upload.");
                    return;
                };
                busy.set(true);
                let toasts = toasts.clone();
                leptos::task::spawn_local(async move {
                    let kb = kb_id.get_untracked();
                    match crate::net::api::upload_file(&file, Some(kb.as_str())).await {
                        Ok(resp) => {
                            leptos::logging::log!("uploaded {} as {}", file.name(), resp.key);
                            toasts.success(format!("Uploaded {}.", file.name()));
                            uploaded.update(|keys| keys.insert(0, resp.key));
                        }
                        Err(e) => {
                            toasts.error(format!("Upload failed: {e}"));
                        }
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&toasts, file_input, kb_id, uploaded);
            }
        }
    };

    let download = {
        let toasts = toasts.clone();
        move |key: String| start_download(key, None, toasts.clone(), sink)
    };
    let on_fetch = {
        let download = download.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let key = key_input.get().trim().to_owned();
            if key.is_empty() {
                return;
            }
            download(key);
        }
    };

    view! {
        <div class="files-page">
            <h1>"Files"</h1>

            <form class="upload-form" on:submit=on_upload>
                <input type="file" node_ref=file_input accept=".pdf,.doc,.docx,.txt"/>
                <input
                    type="text"
                    placeholder="Knowledge base id (optional)"
                    prop:value=move || kb_id.get()
                    on:input=move |ev| kb_id.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Uploading..." } else { "Upload" }}
                </button>
            </form>

            <Show when=move || !uploaded.with(Vec::is_empty)>
                <h2>"Uploaded this session"</h2>
                <ul class="file-list">
                    <For
                        each=move || uploaded.get()
                        key=|k: &String| k.clone()
                        children={
                            let download = download.clone();
                            move |key: String| {
                                let label = filename_from_key(&key).unwrap_or(key.as_str()).to_owned();
                                let download = download.clone();
                                view! {
                                    <li>
                                        <code>{key.clone()}</code>
                                        " "
                                        <button class="btn btn--small" on:click=move |_| download(key.clone())>
                                            {format!("Download {label}")}
                                        </button>
                                    </li>
                                }
                            }
                        }
                    />
                </ul>
            </Show>

            <form class="search-form" on:submit=on_fetch>
                <input
                    class="search-form__input"
                    type="text"
                    placeholder="Storage key"
                    prop:value=move || key_input.get()
                    on:input=move |ev| key_input.set(event_target_value(&ev))
                />
                <button class="btn" type="submit">"Download"</button>
            </form>
        </div>
    }
}
