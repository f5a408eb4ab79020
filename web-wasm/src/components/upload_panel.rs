//! Upload panel component

use clef_common::{upload::SUCCESS_BANNER_MS, StatusKind, UploadState};
use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, Event, File, HtmlInputElement, MouseEvent};

use crate::api;

#[component]
pub fn UploadPanel(upload_url: String) -> impl IntoView {
    let (state, set_state) = signal(UploadState::new());
    let (is_dragover, set_is_dragover) = signal(false);
    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let is_uploading = move || state.with(|s| s.is_uploading());

    let start_upload = move |file: File| {
        let mut accepted = false;
        set_state.update(|s| accepted = s.begin(&file.name()));
        if !accepted {
            return;
        }

        let upload_url = upload_url.clone();
        spawn_local(async move {
            match api::upload::upload_file(&upload_url, &file).await {
                Ok(()) => {
                    set_state.update(|s| s.succeed(&file.name()));
                    Timeout::new(SUCCESS_BANNER_MS, move || {
                        set_state.update(|s| s.clear_status());
                    })
                    .forget();
                }
                Err(e) => {
                    gloo::console::error!("Upload error:", e);
                    set_state.update(|s| s.fail());
                }
            }
        });
    };

    let on_file_change = {
        let start_upload = start_upload.clone();
        move |ev: Event| {
            let Some(input) = ev
                .target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                start_upload(file);
            }
            // Allow re-selecting the same file
            input.set_value("");
        }
    };

    let on_drop = {
        let start_upload = start_upload.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);
            if is_uploading() {
                return;
            }
            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                start_upload(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !is_uploading() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| set_is_dragover.set(false);

    let open_browse = move || {
        if is_uploading() {
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };
    let on_browse_click = move |ev: MouseEvent| {
        ev.stop_propagation();
        open_browse();
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-panel"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                if is_uploading() {
                    classes.push("disabled");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=move |_| open_browse()
        >
            <input
                node_ref=file_input
                type="file"
                class="file-input"
                accept=".xml,.mxl,.pdf"
                on:click=|ev| ev.stop_propagation()
                on:change=on_file_change
            />

            <div class="upload-icon">
                <Show when=is_uploading fallback=|| view! { <span class="icon">"⇪"</span> }>
                    <span class="spinner"></span>
                </Show>
            </div>

            <h3>"Upload Sheet Music"</h3>
            <p class="text-muted">"Drag & drop PDF or MusicXML files here"</p>

            <button class="btn btn-secondary" disabled=is_uploading on:click=on_browse_click>
                {move || if is_uploading() { "Uploading..." } else { "Browse Files" }}
            </button>

            {move || {
                state
                    .with(|s| s.status().cloned())
                    .map(|status| {
                        let (banner_class, icon) = match status.kind {
                            StatusKind::Success => ("upload-status success", "✔"),
                            StatusKind::Error => ("upload-status error", "⚠"),
                        };
                        view! {
                            <div class=banner_class>
                                <span class="status-icon">{icon}</span>
                                <span>{status.message}</span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
