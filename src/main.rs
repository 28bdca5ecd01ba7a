use anyhow::Context;
use clap::Parser;
use std::process;
use std::sync::Arc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use orgtree::adapters::{AnypointConfig, AnypointFetcher, JsonOrganizationDecoder};
use orgtree::application::{BuildError, TreeBuilder};
use orgtree::cli::args::Cli;
use orgtree::cli::output;
use orgtree::config::AppConfig;
use orgtree::domain::OrganizationId;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(error) = run(&cli).await {
        output::error(&format!("{error:#}"));
        if error
            .downcast_ref::<BuildError>()
            .is_some_and(BuildError::is_auth)
        {
            output::detail("check ORGTREE__AUTH__USERNAME and ORGTREE__AUTH__PASSWORD");
        }
        process::exit(1);
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    if let Some(base_url) = &cli.base_url {
        config.directory.base_url = base_url.clone();
    }

    let fetcher = AnypointFetcher::new(
        AnypointConfig::new()
            .with_base_url(config.directory.base_url.clone())
            .with_timeout(config.directory.timeout()),
    );
    let builder = TreeBuilder::new(Arc::new(fetcher), Arc::new(JsonOrganizationDecoder::new()));

    let root_id = OrganizationId::new(cli.organization_id.clone());
    let tree = builder.build(&root_id, &config.auth.credentials()).await?;

    println!("{}", output::render_tree(&tree));
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}
