use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "artgrid")]
#[command(about = "美術作品カタログの閲覧・ページ横断選択ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1ページ分を表示
    Page {
        /// ページ番号（1始まり）
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// ページサイズ（省略時は設定値）
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 先頭N件を一括選択
    Select {
        /// 選択する件数
        #[arg(short, long, required = true)]
        count: usize,

        /// ページサイズ（省略時は設定値）
        #[arg(short, long)]
        limit: Option<usize>,

        /// 選択後に表示するページ（1始まり）
        #[arg(short, long, default_value = "1")]
        show_page: usize,
    },

    /// 対話的に閲覧・選択
    Browse {
        /// ページサイズ（省略時は設定値）
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// 設定を表示/編集
    Config {
        /// カタログのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 既定のページサイズを設定
        #[arg(long)]
        set_page_size: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 対話モードのコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Goto(usize),
    Toggle(u64),
    TogglePage,
    Select(usize),
    PageSize(usize),
    Help,
    Quit,
}

impl std::str::FromStr for BrowseCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let head = parts.next().unwrap_or("");
        let arg = parts.next();

        fn number<T: std::str::FromStr>(arg: Option<&str>, what: &str) -> Result<T, String> {
            arg.ok_or_else(|| format!("{}を指定してください", what))?
                .parse()
                .map_err(|_| format!("{}は正の整数で指定してください", what))
        }

        match head {
            "n" | "next" => Ok(BrowseCommand::Next),
            "p" | "prev" => Ok(BrowseCommand::Prev),
            "g" | "goto" => Ok(BrowseCommand::Goto(number(arg, "ページ番号")?)),
            "t" | "toggle" => Ok(BrowseCommand::Toggle(number(arg, "ID")?)),
            "a" | "all" => Ok(BrowseCommand::TogglePage),
            "s" | "select" => Ok(BrowseCommand::Select(number(arg, "件数")?)),
            "z" | "size" => Ok(BrowseCommand::PageSize(number(arg, "ページサイズ")?)),
            "h" | "help" | "?" => Ok(BrowseCommand::Help),
            "q" | "quit" => Ok(BrowseCommand::Quit),
            _ => Err(format!("不明なコマンド: {}", s.trim())),
        }
    }
}
