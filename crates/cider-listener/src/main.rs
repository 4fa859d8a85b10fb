//! The `cider` binary: listen for new SkyPortal spectra and classify them.

use std::env;

use tracing::info;

use cider_client::SkyPortal;
use cider_core::config::CiderConfig;
use cider_core::traits::IClassifier;
use cider_listener::cli::{self, CliAction};
use cider_listener::engine::Listener;
use cider_listener::{tracing_setup, ProcessedCache};
use cider_model::SpectrumClassifier;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = match cli::parse_args(&args).map_err(|e| anyhow::anyhow!(e))? {
        CliAction::Help => {
            print!("{}", cli::USAGE);
            return Ok(());
        }
        CliAction::Run(invocation) => invocation,
    };

    tracing_setup::init_tracing();

    let config = CiderConfig::load(
        invocation.config_file.as_deref(),
        Some(&invocation.overrides),
    )?;

    info!(
        instance = %config.api.instance_url,
        interval_secs = config.poll.interval_secs,
        "starting cider listener"
    );

    let catalog = SkyPortal::connect(&config.api)?;
    catalog.ping()?;
    catalog.verify_auth()?;
    info!("instance reachable, token accepted");

    let classifier = SpectrumClassifier::load(&config.model)?;
    info!(model = classifier.name(), "classifier ready");

    let cache = ProcessedCache::open(&config.cache)?;
    if !cache.is_empty() {
        info!(entries = cache.len(), "processed cache loaded");
    }

    let mut listener = Listener::new(
        &catalog,
        &classifier,
        config.poll.clone(),
        &config.report,
        cache,
    );
    listener.run();

    Ok(())
}
