use clap::Parser;
use number_lens::{cli, config, error, http, local, output, pipeline, terminal};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(io::stderr)
        .init();

    match run(cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("✖ {}", e);
            std::process::exit(1);
        }
    }
}

/// # Returns
/// 最終状態がエラーなら`Ok(false)`
async fn run(cli: Cli) -> Result<bool> {
    let config = Config::load()?;

    match cli.command {
        Commands::Process { image, endpoint, format, output } => {
            let endpoint = config.resolve_endpoint(endpoint.as_deref())?;
            let backend = http::HttpBackend::new(&endpoint, &config.settings)?;
            let image = local::LocalImage::open(&image)?;

            let view = if io::stderr().is_terminal() {
                terminal::TerminalView::new()
            } else {
                terminal::TerminalView::hidden()
            };
            let report = pipeline::process_image(
                image,
                &local::FsPreviewReader,
                &backend,
                config.settings.clone(),
                view,
            )
            .await;

            let rendered = output::render(&report, format)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    eprintln!("✔ 結果を保存: {}", path.display());
                }
                None => print!("{}", rendered),
            }

            Ok(!report.is_error())
        }

        Commands::Check { images } => {
            let mut all_ok = true;
            for path in &images {
                match pipeline::check_image(path) {
                    Ok(_) => println!("✔ {}", path.display()),
                    Err(e) => {
                        all_ok = false;
                        println!("✖ {}: {}", path.display(), e);
                    }
                }
            }
            Ok(all_ok)
        }

        Commands::Health { endpoint } => {
            let endpoint = config.resolve_endpoint(endpoint.as_deref())?;
            let backend = http::HttpBackend::new(&endpoint, &config.settings)?;
            let health = backend.health().await?;
            println!("✔ {} ({})", endpoint, health.status);
            Ok(true)
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint.as_deref().unwrap_or("未設定"));
                println!("  処理パス: {}", config.settings.process_path);
                println!("  ヘルスチェック: {}", config.settings.health_path);
                println!("  タイムアウト: {}秒", config.settings.timeout_seconds);
                println!("  コピー表示: {}ms", config.settings.copy_feedback_ms);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }

            Ok(true)
        }
    }
}
