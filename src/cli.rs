use clap::{Parser, Subcommand};
use demo_refresh_common::Category;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "demo-refresh")]
#[command(about = "デモサイトの一括更新ツール（v2再生成・プロモバナー・決済リンク）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// デモサイトが並ぶフォルダ（省略時はカレント）
    #[arg(long, default_value = ".", global = true)]
    pub root: PathBuf,

    /// 設定ファイル（省略時は ~/.config/demo-refresh/config.json）
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// v1ページを抽出・再生成してv2に更新
    Refresh {
        /// 対象サイト名（省略時は全サイト）
        sites: Vec<String>,

        /// ドライラン（書き込まずに結果だけ表示）
        #[arg(long)]
        dry_run: bool,

        /// カテゴリを指定（キーワード判定を使わない）
        #[arg(long)]
        category: Option<Category>,
    },

    /// v2ページにプロモバナーを追加
    Banner {
        /// 対象サイト名（省略時は全サイト）
        sites: Vec<String>,
    },

    /// 決済リンクをサイト別チェックアウトURLに置換
    Checkout {
        /// 対象サイト名（省略時は全サイト）
        sites: Vec<String>,
    },

    /// 抽出結果をJSONで表示（書き込みなし）
    Inspect {
        /// 対象サイト名（省略時は全サイト）
        sites: Vec<String>,
    },

    /// 設定を表示/編集
    Config {
        /// Maps APIキーを設定
        #[arg(long)]
        set_maps_api_key: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
