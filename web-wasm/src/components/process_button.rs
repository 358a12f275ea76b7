//! 処理ボタンコンポーネント

use leptos::prelude::*;
use number_lens_common::phase::PROCESS_LABEL;
use number_lens_common::ProcessControl;

#[component]
pub fn ProcessButton<FP>(
    control: ReadSignal<ProcessControl>,
    on_process: FP,
) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone + Send + Sync,
{
    let is_busy = move || control.get().is_disabled();

    view! {
        <button
            class="btn btn-primary process-button"
            style:display=move || if control.get().is_visible() { "flex" } else { "none" }
            disabled=is_busy
            on:click={
                let on_process = on_process.clone();
                move |_| on_process(())
            }
        >
            <Show
                when=move || !is_busy()
                fallback=|| view! { <span class="loading-spinner"></span> }
            >
                <span class="button-text">{PROCESS_LABEL}</span>
            </Show>
        </button>
    }
}
