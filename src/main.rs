use clap::Parser;
use demo_refresh::{banner, checkout, cli, config, error, refresh, report, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // 失敗は報告のみ。終了コードは常に0
    if let Err(e) = run(cli) {
        error!(error = %e, "実行に失敗");
        println!("❌ {}", e);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Refresh { sites, dry_run, category } => {
            println!("🔄 demo-refresh - v2再生成{}\n", if dry_run { " (ドライラン)" } else { "" });

            let targets = scanner::scan_sites(&cli.root, &sites)?;
            let mut render = config.render_options();
            render.category = category;
            let options = refresh::RefreshOptions { render, dry_run };

            let summary = report::run_sites(&targets, |site| refresh::refresh_site(site, &options));
            println!("\n{}", summary.summary_line("refreshed"));
        }

        Commands::Banner { sites } => {
            println!("🚀 demo-refresh - プロモバナー追加\n");

            let targets = scanner::scan_sites(&cli.root, &sites)?;
            let summary = report::run_sites(&targets, |site| banner::add_banner(site, &config.promo_link));
            println!("\n{}", summary.summary_line("updated"));
        }

        Commands::Checkout { sites } => {
            println!("💳 demo-refresh - 決済リンク置換\n");

            let targets = scanner::scan_sites(&cli.root, &sites)?;
            let summary = report::run_sites(&targets, |site| {
                checkout::update_checkout_link(site, &config.promo_link, &config.checkout_base)
            });
            println!("\n{}", summary.summary_line("updated"));
        }

        Commands::Inspect { sites } => {
            let targets = scanner::scan_sites(&cli.root, &sites)?;

            let mut reports = Vec::new();
            for site in &targets {
                match refresh::inspect_site(site) {
                    Ok(Some(r)) => reports.push(r),
                    Ok(None) => {}
                    Err(e) => warn!(site = %site.name, error = %e, "抽出に失敗"),
                }
            }

            println!("{}", serde_json::to_string_pretty(&reports)?);
        }

        Commands::Config { set_maps_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_maps_api_key {
                config.set_maps_api_key(key, &config_path)?;
                println!("✔ Maps APIキーを設定しました: {}", config_path.display());
            }

            if show {
                println!("設定:");
                println!("  Maps APIキー: {}", if config.maps_api_key.is_some() { "設定済み" } else { "未設定" });
                println!("  連絡先: {}", config.contact_email);
                println!("  運営: {} ({})", config.agency_name, config.agency_url);
                println!("  プロモリンク: {}", config.promo_link);
                println!("  チェックアウト: {}", config.checkout_base);
            }
        }
    }

    Ok(())
}
