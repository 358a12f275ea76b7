//! エラーバナーコンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(error: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-container" role="alert">
                <p class="error-message">{move || error.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}
