use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use namecard_ai::{cli, config, controller, encoder, extractor, form};
use cli::{Cli, Commands};
use config::Config;
use controller::ScanController;
use extractor::GeminiClient;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Scan { image, industry, notes, assignments, interactive, json, output, model } => {
            println!("📇 namecard-ai - Quản Lý Danh Thiếp\n");

            let config = Config::load_or_default();
            let api_key = config.get_api_key()?;
            let model = model.unwrap_or_else(|| config.model.clone());
            let client = GeminiClient::new(api_key, model);

            // 1. 画像読み込み
            println!("[1/3] 1. Upload or Take Photo of Business Card");
            let payload = encoder::encode_image_file(&image).await?;
            println!("✔ {} ({})\n", image.display(), payload.mime_type);

            // 2. AI抽出
            println!("[2/3] AI解析中... ({})", client.model());
            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
            spinner.set_message("Đang xử lý ảnh...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            let mut controller = ScanController::new(client);
            controller.scan(payload).await;
            spinner.finish_and_clear();

            match controller.failure_message() {
                Some(message) if !interactive => anyhow::bail!(message),
                Some(message) => eprintln!("{}", message),
                None => println!("✔ 抽出完了\n"),
            }
            let session = controller.session_mut();

            // 3. 編集・出力
            println!("[3/3] 出力中...");
            form::apply_overrides(session, &assignments, industry, notes.as_deref())?;
            if interactive {
                form::edit_interactive(session)?;
            }

            let text = if json {
                serde_json::to_string_pretty(session.card())?
            } else {
                session.share_text()
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &text)
                        .with_context(|| format!("書き込みに失敗: {}", path.display()))?;
                    println!("✔ 保存しました: {}", path.display());
                }
                None => println!("\n{}", text),
            }

            println!("\n✅ 完了");
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = Config::load_or_default_from(&Config::config_path()?);

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "namecard_ai=debug,warn" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
