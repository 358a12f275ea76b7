//! テスト用のファイル・View実装

use crate::phase::ProcessControl;
use crate::validation::{media_type_for, ImageFile};
use crate::view::{ResultsModel, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFile {
    pub name: String,
    pub media_type: String,
}

impl ImageFile for TestFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }
}

/// 拡張子から推定したMIMEタイプ付きのファイル
pub fn picked_file(name: &str) -> TestFile {
    TestFile {
        name: name.to_string(),
        media_type: media_type_for(name).unwrap_or_default().to_string(),
    }
}

pub fn drop_file(media_type: &str, name: &str) -> TestFile {
    TestFile {
        name: name.to_string(),
        media_type: media_type.to_string(),
    }
}

/// 最後に描画された内容を記録するView
#[derive(Debug, Default)]
pub struct RecordingView {
    pub upload_prompt: bool,
    pub preview: Option<String>,
    pub process_control: Option<ProcessControl>,
    pub results: Option<ResultsModel>,
    pub error: Option<String>,
    pub input_resets: usize,
    pub renders: usize,
}

impl View for RecordingView {
    fn upload_prompt(&mut self, visible: bool) {
        self.renders += 1;
        self.upload_prompt = visible;
    }

    fn preview(&mut self, data_url: Option<&str>) {
        self.preview = data_url.map(str::to_string);
    }

    fn process_control(&mut self, control: ProcessControl) {
        self.process_control = Some(control);
    }

    fn results(&mut self, results: Option<&ResultsModel>) {
        self.results = results.cloned();
    }

    fn error_banner(&mut self, message: Option<&str>) {
        self.error = message.map(str::to_string);
    }

    fn reset_file_input(&mut self) {
        self.input_resets += 1;
    }
}
