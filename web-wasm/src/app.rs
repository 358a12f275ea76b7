//! メインアプリケーションコンポーネント

use leptos::html::Input;
use leptos::prelude::*;
use number_lens_common::session::{self, Shared};
use number_lens_common::{Controller, FileSource, ProcessControl, ResultsModel, Settings, View};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::api::FetchBackend;
use crate::browser::{FileReaderPreview, GlooTimer, WebFile};
use crate::clipboard::BrowserClipboard;
use crate::components::{
    header::Header,
    upload_area::UploadArea,
    preview_panel::PreviewPanel,
    process_button::ProcessButton,
    error_banner::ErrorBanner,
    results_list::ResultsList,
};

/// コントローラの描画先（各領域のシグナル）
#[derive(Clone, Copy)]
pub struct SignalView {
    pub upload_prompt: WriteSignal<bool>,
    pub preview: WriteSignal<Option<String>>,
    pub process_control: WriteSignal<ProcessControl>,
    pub results: WriteSignal<Option<ResultsModel>>,
    pub error: WriteSignal<Option<String>>,
    pub file_input: NodeRef<Input>,
}

impl View for SignalView {
    fn upload_prompt(&mut self, visible: bool) {
        self.upload_prompt.set(visible);
    }

    fn preview(&mut self, data_url: Option<&str>) {
        self.preview.set(data_url.map(str::to_string));
    }

    fn process_control(&mut self, control: ProcessControl) {
        self.process_control.set(control);
    }

    fn results(&mut self, results: Option<&ResultsModel>) {
        self.results.set(results.cloned());
    }

    fn error_banner(&mut self, message: Option<&str>) {
        self.error.set(message.map(str::to_string));
    }

    fn reset_file_input(&mut self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }
}

type WebController = Shared<WebFile, SignalView>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 各領域の表示状態
    let (upload_prompt, set_upload_prompt) = signal(true);
    let (preview, set_preview) = signal(None::<String>);
    let (process_control, set_process_control) = signal(ProcessControl::Hidden);
    let (results, set_results) = signal(None::<ResultsModel>);
    let (error, set_error) = signal(None::<String>);
    let file_input = NodeRef::<Input>::new();

    let view = SignalView {
        upload_prompt: set_upload_prompt,
        preview: set_preview,
        process_control: set_process_control,
        results: set_results,
        error: set_error,
        file_input,
    };
    let controller: WebController = Rc::new(RefCell::new(Controller::new(view, Settings::default())));
    // Rcはスレッド間で共有できないのでローカルストレージに置く
    let controller = StoredValue::new_local(controller);

    // ファイル選択・ドロップ
    let on_file = move |file: File, source: FileSource| {
        let controller = controller.get_value();
        spawn_local(async move {
            session::select_file(&controller, &FileReaderPreview, WebFile(file), source).await;
        });
    };

    // 削除
    let on_remove = move |_: ()| {
        controller.get_value().borrow_mut().remove();
    };

    // 処理開始
    let on_process = move |_: ()| {
        let controller = controller.get_value();
        spawn_local(async move {
            let backend = FetchBackend::new(controller.borrow().settings());
            session::process(&controller, &backend).await;
        });
    };

    // コピー
    let on_copy = move |row: usize| {
        let controller = controller.get_value();
        spawn_local(async move {
            session::copy_normalized(&controller, &BrowserClipboard, &GlooTimer, row).await;
        });
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea visible=upload_prompt file_input=file_input on_file=on_file />

            <PreviewPanel preview=preview on_remove=on_remove />

            <ProcessButton control=process_control on_process=on_process />

            <ErrorBanner error=error />

            <ResultsList results=results on_copy=on_copy />
        </div>
    }
}
