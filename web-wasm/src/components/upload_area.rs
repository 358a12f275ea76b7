//! アップロードエリアコンポーネント

use leptos::html::Input;
use leptos::prelude::*;
use number_lens_common::validation::PICKER_ACCEPT;
use number_lens_common::FileSource;
use web_sys::{DragEvent, File};

#[component]
pub fn UploadArea<F>(
    visible: ReadSignal<bool>,
    file_input: NodeRef<Input>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(File, FileSource) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            // 複数ドロップされても先頭の1枚だけ扱う
            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_file(file, FileSource::Drop);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_change = {
        let on_file = on_file.clone();
        move |_| {
            let file = file_input
                .get_untracked()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_file(file, FileSource::Picker);
            }
        }
    };

    let on_browse = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    view! {
        <div
            class="upload-area"
            class:drag-over=move || is_dragover.get()
            style:display=move || if visible.get() { "block" } else { "none" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <div class="upload-icon">"🔢"</div>
            <p>"Drag & drop an image here"</p>
            <p class="text-muted">"Supported formats: PNG, JPG, JPEG, WEBP"</p>
            <button class="btn btn-secondary file-button" on:click=on_browse>
                "Browse files"
            </button>
            <input
                type="file"
                class="file-input"
                accept=PICKER_ACCEPT
                style="display: none"
                node_ref=file_input
                on:change=on_change
            />
        </div>
    }
}
