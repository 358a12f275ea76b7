//! ファイル形式の判定
//!
//! ドラッグ&ドロップ経由のファイルのみ検証する。
//! ファイル選択ダイアログはOS側のフィルタ（`accept`属性）を信頼する。

/// 受け付けるMIMEタイプ
pub const ACCEPTED_MEDIA_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/webp"];

/// 受け付ける拡張子（大文字小文字は区別しない）
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// `<input type="file">`の`accept`属性
pub const PICKER_ACCEPT: &str = ".png,.jpg,.jpeg,.webp,image/png,image/jpeg,image/webp";

/// ファイルの入手経路
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSource {
    /// ファイル選択ダイアログ
    Picker,
    /// ドラッグ&ドロップ
    Drop,
}

impl FileSource {
    pub fn needs_validation(&self) -> bool {
        matches!(self, FileSource::Drop)
    }
}

/// コントローラが扱うファイルハンドル
///
/// ブラウザでは`web_sys::File`、CLIではローカルファイルを実装に持つ。
pub trait ImageFile: Clone {
    /// ファイル名
    fn name(&self) -> String;
    /// 宣言されたMIMEタイプ（空文字の場合あり）
    fn media_type(&self) -> String;
}

/// MIMEタイプまたは拡張子で対応形式か判定
///
/// MIMEタイプが空・未知の場合は拡張子で判定する。
pub fn is_accepted_file(media_type: &str, file_name: &str) -> bool {
    ACCEPTED_MEDIA_TYPES.contains(&media_type) || has_accepted_extension(file_name)
}

/// ファイル名が対応拡張子で終わるか
pub fn has_accepted_extension(file_name: &str) -> bool {
    extension(file_name)
        .map(|ext| ACCEPTED_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// 拡張子からMIMEタイプを推定
pub fn media_type_for(file_name: &str) -> Option<&'static str> {
    let ext = extension(file_name)?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

fn extension(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, ext)| ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_declared_media_types() {
        for media_type in ACCEPTED_MEDIA_TYPES {
            assert!(is_accepted_file(media_type, "blob"), "{}", media_type);
        }
    }

    #[test]
    fn test_accepts_by_extension_when_type_missing() {
        assert!(is_accepted_file("", "scan.PNG"));
        assert!(is_accepted_file("", "photo.Jpg"));
        assert!(is_accepted_file("", "photo.jpeg"));
        assert!(is_accepted_file("application/octet-stream", "meter.webp"));
        assert!(is_accepted_file("", ".png"));
    }

    #[test]
    fn test_rejects_other_files() {
        assert!(!is_accepted_file("image/gif", "anim.gif"));
        assert!(!is_accepted_file("", "notes.txt"));
        assert!(!is_accepted_file("", "png"));
        assert!(!is_accepted_file("", "image.png.txt"));
        assert!(!is_accepted_file("image/svg+xml", "logo.svg"));
        assert!(!is_accepted_file("", ""));
    }

    #[test]
    fn test_media_type_is_exact() {
        // MIMEタイプは完全一致のみ
        assert!(!is_accepted_file("IMAGE/PNG", "upload"));
        assert!(!is_accepted_file("image/jpg", "upload"));
    }

    #[test]
    fn test_media_type_for() {
        assert_eq!(media_type_for("a.png"), Some("image/png"));
        assert_eq!(media_type_for("a.JPG"), Some("image/jpeg"));
        assert_eq!(media_type_for("a.jpeg"), Some("image/jpeg"));
        assert_eq!(media_type_for("a.webp"), Some("image/webp"));
        assert_eq!(media_type_for("a.gif"), None);
        assert_eq!(media_type_for("noext"), None);
    }

    #[test]
    fn test_file_source() {
        assert!(FileSource::Drop.needs_validation());
        assert!(!FileSource::Picker.needs_validation());
    }
}
