//! 結果一覧コンポーネント
//!
//! 値はテキストノードとして挿入されるため、`<`や`&`もそのまま表示される。

use leptos::prelude::*;
use number_lens_common::{ResultRow, ResultsModel};

#[component]
pub fn ResultsList<FC>(
    results: ReadSignal<Option<ResultsModel>>,
    on_copy: FC,
) -> impl IntoView
where
    FC: Fn(usize) + 'static + Clone + Send + Sync,
{
    let placeholder = move || results.with(|r| r.as_ref().and_then(|m| m.placeholder()));

    view! {
        <div
            class="results-container"
            style:display=move || if results.with(Option::is_some) { "block" } else { "none" }
        >
            <h2>"Results"</h2>
            <div class="results-list">
                {move || placeholder().map(|message| view! { <p class="no-results">{message}</p> })}
                <For
                    each=move || results.with(|r| r.as_ref().map(|m| m.rows().to_vec()).unwrap_or_default())
                    key=|row| row.clone()
                    children=move |row| {
                        let on_copy = on_copy.clone();
                        view! { <ResultCard row=row on_copy=on_copy /> }
                    }
                />
            </div>
        </div>
    }
}

#[component]
fn ResultCard<FC>(row: ResultRow, on_copy: FC) -> impl IntoView
where
    FC: Fn(usize) + 'static + Clone + Send + Sync,
{
    let index = row.index;
    let copy_label = row.copy_label();

    view! {
        <div class="result-item">
            <div class="result-row">
                <div>
                    <div class="result-label">"RAW"</div>
                    <div class="result-value">{row.raw.clone()}</div>
                </div>
            </div>
            <div class="result-row">
                <div>
                    <div class="result-label">"NORMALIZED"</div>
                    <div class="result-value">{row.normalized.clone()}</div>
                </div>
                <button
                    class="copy-button"
                    class:copied=row.copied
                    on:click=move |_| on_copy(index)
                >
                    {copy_label}
                </button>
            </div>
        </div>
    }
}
