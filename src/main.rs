use clap::Parser;
use panel_board_rust::{cli, config, export, extractor, logging, server};
use cli::{Cli, Commands};
use config::Config;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Serve { bind, port, upload_dir } => {
            let mut config = config;
            if let Some(bind) = bind {
                config.bind_address = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(dir) = upload_dir {
                config.upload_dir = dir;
            }

            let state = server::AppState::new(config)?;
            server::start_server(state).await?;
        }

        Commands::Extract { image, output } => {
            println!("📋 panel-board - 盤リスト抽出\n");

            let client = extractor::ExtractionClient::from_config(&config)?;
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));

            println!("- 抽出サービスに送信してExcelを生成中...");
            let path = export::extract_and_export(&client, &image, &output_dir).await?;
            println!("✔ Excel出力: {}", path.display());

            println!("\n✅ 完了");
        }

        Commands::Export { input, image, output } => {
            println!("📄 panel-board - エクスポート\n");

            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            let path = export::export_from_response(&input, &image, &output_dir)?;
            println!("✔ Excel出力: {}", path.display());

            println!("\n✅ エクスポート完了");
        }

        Commands::Config { set_url, show } => {
            let mut config = config;

            if let Some(url) = set_url {
                config.set_extraction_url(url)?;
                println!("✔ 抽出サービスURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  抽出サービスURL: {}", if config.extraction_url().is_ok() { "設定済み" } else { "未設定" });
                println!("  待受アドレス: {}", config.bind_addr());
                println!("  一時保存先: {}", config.upload_dir.display());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  最大アップロードサイズ: {} bytes", config.max_upload_bytes);
            }
        }
    }

    Ok(())
}
