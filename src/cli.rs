use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "number-lens")]
#[command(about = "画像から数値を抽出するサービスのクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を送信して検出された数値を表示
    Process {
        /// 画像ファイル（PNG/JPG/JPEG/WEBP）
        #[arg(required = true)]
        image: PathBuf,

        /// バックエンドのベースURL（省略時は環境変数・設定ファイル）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 出力形式 (text/json/html)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 画像形式を検証（送信はしない）
    Check {
        /// 画像ファイル
        #[arg(required = true)]
        images: Vec<PathBuf>,
    },

    /// バックエンドの稼働確認
    Health {
        /// バックエンドのベースURL
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "html" | "htm" => Ok(OutputFormat::Html),
            _ => Err(format!("Unknown format: {}. Use text, json, or html", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}
