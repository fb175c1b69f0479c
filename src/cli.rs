use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "panel-board")]
#[command(about = "分電盤リスト画像からExcel盤リストを生成するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// アップロード用HTTPサーバーを起動
    Serve {
        /// バインドアドレス（デフォルト: 設定値）
        #[arg(long)]
        bind: Option<String>,

        /// ポート番号（デフォルト: 設定値）
        #[arg(short, long)]
        port: Option<u16>,

        /// アップロード画像の一時保存先
        #[arg(long)]
        upload_dir: Option<PathBuf>,
    },

    /// 画像を抽出サービスに送ってExcelを生成
    Extract {
        /// 盤リスト画像 (png/jpg/jpeg)
        #[arg(required = true)]
        image: PathBuf,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 保存済みの抽出結果と画像からExcelを生成
    Export {
        /// 抽出サービスの応答（JSONを含むテキスト）
        #[arg(required = true)]
        input: PathBuf,

        /// 盤リスト画像 (png/jpg/jpeg)
        #[arg(required = true)]
        image: PathBuf,

        /// 出力ファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定管理
    Config {
        /// 抽出サービスのURLを保存
        #[arg(long)]
        set_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["panel-board", "serve", "--port", "8080", "--bind", "127.0.0.1"]);
        match cli.command {
            Commands::Serve { bind, port, upload_dir } => {
                assert_eq!(bind.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
                assert!(upload_dir.is_none());
            }
            _ => panic!("Expected Serve"),
        }
    }

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from(["panel-board", "-v", "export", "resp.txt", "panel.png", "-o", "out"]);
        assert!(cli.verbose);
        match cli.command {
            Commands::Export { input, image, output } => {
                assert_eq!(input, PathBuf::from("resp.txt"));
                assert_eq!(image, PathBuf::from("panel.png"));
                assert_eq!(output, Some(PathBuf::from("out")));
            }
            _ => panic!("Expected Export"),
        }
    }

    #[test]
    fn test_extract_requires_image() {
        assert!(Cli::try_parse_from(["panel-board", "extract"]).is_err());
    }
}
