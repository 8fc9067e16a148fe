use artgrid::{browse, catalog::HttpCatalog, cli, config, error, render, select};
use artgrid_common::{CatalogSource, GalleryController, PageWindow, SelectionSet};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{ArtgridError, Result};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = format!("artgrid={},artgrid_common={}", level, level);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter)))
        .with_writer(std::io::stderr)
        .init();
}

fn page_size_arg(limit: Option<usize>, config: &Config) -> Result<usize> {
    match limit.unwrap_or(config.catalog.page_size) {
        0 => Err(ArtgridError::InvalidArgument("ページサイズは1以上で指定してください".into())),
        size => Ok(size),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;
    let timeout = Duration::from_secs(config.timeout_seconds);

    match cli.command {
        Commands::Page { page, limit } => {
            if page == 0 {
                return Err(ArtgridError::InvalidArgument("ページ番号は1以上で指定してください".into()));
            }
            let limit = page_size_arg(limit, &config)?;
            let catalog = HttpCatalog::new(&config.base_url(), timeout)?;

            let result = catalog.fetch_page(page, limit).await?;
            let window = PageWindow::new(limit)
                .with_page(page - 1)
                .with_total(result.total());
            println!("{}", render::render_table(&result.data, &SelectionSet::new(), window));
        }

        Commands::Select { count, limit, show_page } => {
            println!("🖼  artgrid - 一括選択\n");

            let limit = page_size_arg(limit, &config)?;
            let catalog = HttpCatalog::new(&config.base_url(), timeout)?;
            let mut controller = GalleryController::new(catalog, limit);

            select::run_select(&mut controller, count, show_page).await?;
            println!("{}", render::render_view(controller.view()));
        }

        Commands::Browse { limit } => {
            let limit = page_size_arg(limit, &config)?;
            let catalog = HttpCatalog::new(&config.base_url(), timeout)?;
            browse::run_browse(GalleryController::new(catalog, limit)).await?;
        }

        Commands::Config { set_base_url, set_page_size, show } => {
            let mut config = config;

            if let Some(url) = set_base_url {
                config.set_base_url(url)?;
                println!("✔ ベースURLを設定しました");
            }

            if let Some(size) = set_page_size {
                config.set_page_size(size)?;
                println!("✔ ページサイズを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url());
                println!("  ページサイズ: {}", config.catalog.page_size);
                println!("  ページサイズ選択肢: {:?}", config.catalog.size_choices());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
