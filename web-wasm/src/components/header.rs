//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Number Lens"</h1>
            <p class="text-muted">"Extract numbers from an image"</p>
        </header>
    }
}
