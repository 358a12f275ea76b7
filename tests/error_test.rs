//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use number_lens::error::NumberLensError;
use number_lens::local::LocalImage;
use number_lens::pipeline;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを開いた場合
#[test]
fn test_open_nonexistent_file() {
    let result = LocalImage::open(Path::new("/nonexistent/path/12345.png"));
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, NumberLensError::FileNotFound(_)));
}

/// ディレクトリは画像として扱わない
#[test]
fn test_open_directory() {
    let dir = tempdir().expect("Failed to create temp dir");
    let err = LocalImage::open(dir.path()).unwrap_err();
    assert!(matches!(err, NumberLensError::FileNotFound(_)));
}

/// 対応外の形式
#[test]
fn test_check_unsupported_files() {
    let dir = tempdir().expect("Failed to create temp dir");

    for name in ["test.txt", "data.json", "photo.gif", "noext"] {
        let path = dir.path().join(name);
        std::fs::write(&path, "hello").unwrap();
        let err = pipeline::check_image(&path).unwrap_err();
        assert!(
            matches!(err, NumberLensError::Lens(number_lens_common::Error::InvalidFileType)),
            "受理されてしまった: {}",
            name
        );
    }
}

/// NumberLensErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        NumberLensError::Config("テスト設定エラー".to_string()),
        NumberLensError::FileNotFound("test.jpg".to_string()),
        NumberLensError::Unhealthy("down".to_string()),
        NumberLensError::MissingEndpoint,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingEndpointエラーのメッセージ確認
#[test]
fn test_missing_endpoint_message() {
    let display = format!("{}", NumberLensError::MissingEndpoint);
    assert!(display.contains("number-lens config"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: NumberLensError = io_err.into();

    assert!(matches!(err, NumberLensError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: NumberLensError = json_err.into();

    assert!(matches!(err, NumberLensError::JsonParse(_)));
}

/// 画面の文言がそのまま表示される（透過的エラー）
#[test]
fn test_error_chain_transparent() {
    let err: NumberLensError = number_lens_common::Error::Application("bad image".to_string()).into();
    assert_eq!(format!("{}", err), "bad image");

    let err: NumberLensError = number_lens_common::Error::NoFileSelected.into();
    assert_eq!(format!("{}", err), "Please select a file first.");
}
