use clap::{Parser, Subcommand};
use namecard_common::IndustryGroup;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "namecard-ai")]
#[command(about = "名刺画像からAIで連絡先を抽出し、共有用テキストを作成", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名刺画像を解析して共有用テキストを出力
    Scan {
        /// 名刺画像（JPEG/PNG）
        #[arg(required = true)]
        image: PathBuf,

        /// 業種 (consulting/materials/construction/other または表示名)
        #[arg(short, long, value_parser = parse_industry_group)]
        industry: Option<IndustryGroup>,

        /// メモ
        #[arg(short, long)]
        notes: Option<String>,

        /// 抽出結果を上書き（例: --set phone=0123456789）
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        assignments: Vec<String>,

        /// 対話式で抽出結果を確認・修正
        #[arg(long)]
        interactive: bool,

        /// 共有テキストの代わりに名刺データをJSONで出力
        #[arg(long)]
        json: bool,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 使用モデル（省略時は設定値）
        #[arg(short, long)]
        model: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

fn parse_industry_group(s: &str) -> Result<IndustryGroup, String> {
    s.parse().map_err(|e: namecard_common::Error| e.to_string())
}
