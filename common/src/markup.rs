//! 結果一覧のHTML書き出し
//!
//! 値はすべてエスケープしてテキストとして埋め込む。

use crate::view::ResultsModel;

/// HTMLの特殊文字をエスケープ
///
/// # Examples
/// ```
/// use number_lens_common::escape_html;
///
/// assert_eq!(escape_html("<b>1&2</b>"), "&lt;b&gt;1&amp;2&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 結果一覧をHTML断片に変換
pub fn render_results_html(model: &ResultsModel) -> String {
    if let Some(message) = model.placeholder() {
        return format!("<div class=\"results-list\"><p>{}</p></div>\n", escape_html(message));
    }

    let mut html = String::from("<div class=\"results-list\">\n");
    for row in model.rows() {
        html.push_str("  <div class=\"result-item\">\n");
        html.push_str(&format!(
            "    <div class=\"result-row\"><div class=\"result-label\">RAW</div><div class=\"result-value\">{}</div></div>\n",
            escape_html(&row.raw)
        ));
        html.push_str(&format!(
            "    <div class=\"result-row\"><div class=\"result-label\">NORMALIZED</div><div class=\"result-value\">{}</div></div>\n",
            escape_html(&row.normalized)
        ));
        html.push_str("  </div>\n");
    }
    html.push_str("</div>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResultItem;
    use crate::view::NO_NUMBERS;

    #[test]
    fn test_escape_plain_text_unchanged() {
        assert_eq!(escape_html("12.5"), "12.5");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn test_escape_quotes() {
        assert_eq!(escape_html(r#"a"b'c"#), "a&quot;b&#39;c");
    }

    #[test]
    fn test_render_empty() {
        let html = render_results_html(&ResultsModel::build(&[], |_| false));
        assert!(html.contains(NO_NUMBERS));
        assert!(!html.contains("result-item"));
    }

    #[test]
    fn test_render_values_literal() {
        let items = vec![ResultItem::new("<script>alert(1)</script>", "1 & 2 > 0")];
        let html = render_results_html(&ResultsModel::build(&items, |_| false));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("1 &amp; 2 &gt; 0"));
        assert_eq!(html.matches("class=\"result-item\"").count(), 1);
    }
}
