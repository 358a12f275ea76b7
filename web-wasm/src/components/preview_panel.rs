//! プレビューコンポーネント

use leptos::prelude::*;

#[component]
pub fn PreviewPanel<FR>(
    preview: ReadSignal<Option<String>>,
    on_remove: FR,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || preview.with(Option::is_some)>
            <div class="preview-container">
                <img
                    class="preview-image"
                    src=move || preview.get().unwrap_or_default()
                    alt="Selected image"
                />
                <button
                    class="btn btn-small btn-tertiary remove-image-button"
                    on:click={
                        let on_remove = on_remove.clone();
                        move |_| on_remove(())
                    }
                >
                    "Remove"
                </button>
            </div>
        </Show>
    }
}
