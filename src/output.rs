//! 処理結果の書き出し（text/json/html）

use number_lens_common::{escape_html, render_results_html, ProcessData, ResultItem, ResultsModel};
use serde::Serialize;

use crate::cli::OutputFormat;

/// 1回の処理の最終状態
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub file: String,
    pub numbers: Vec<ResultItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    pub fn success(file: impl Into<String>, data: &ProcessData) -> Self {
        Self {
            file: file.into(),
            numbers: data.numbers.clone(),
            raw_text: data.raw_text.clone(),
            error: None,
        }
    }

    pub fn failure(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            error: Some(message.into()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// 指定形式で文字列化
pub fn render(report: &Report, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => serde_json::to_string_pretty(report).map(|s| s + "\n"),
        OutputFormat::Html => Ok(render_html(report)),
    }
}

fn render_text(report: &Report) -> String {
    if let Some(error) = &report.error {
        return format!("✖ {}\n", error);
    }

    let model = ResultsModel::build(&report.numbers, |_| false);
    let mut out = String::new();
    if let Some(message) = model.placeholder() {
        out.push_str(message);
        out.push('\n');
    }
    for row in model.rows() {
        out.push_str(&format!("{:>3}. {}  ->  {}\n", row.index + 1, row.raw, row.normalized));
    }
    if let Some(raw_text) = &report.raw_text {
        out.push_str(&format!("\nRaw text:\n{}\n", raw_text));
    }
    out
}

fn render_html(report: &Report) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>");
    html.push_str(&escape_html(&report.file));
    html.push_str("</title></head>\n<body>\n");

    match &report.error {
        Some(error) => {
            html.push_str(&format!("<div class=\"error-message\">{}</div>\n", escape_html(error)));
        }
        None => {
            let model = ResultsModel::build(&report.numbers, |_| false);
            html.push_str(&render_results_html(&model));
            if let Some(raw_text) = &report.raw_text {
                html.push_str(&format!("<pre class=\"raw-text\">{}</pre>\n", escape_html(raw_text)));
            }
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}
