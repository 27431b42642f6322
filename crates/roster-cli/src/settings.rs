//! Configuration resolution: file, then command-line overrides

use anyhow::Context;
use clap::ArgMatches;
use roster_core::{CommitPolicy, Latency, RosterConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Load the config file named by `--config` (or defaults) and apply flags
pub(crate) fn resolve(args: &ArgMatches) -> anyhow::Result<RosterConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => RosterConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => RosterConfig::default(),
    };
    apply_overrides(&mut config, args);
    config.validate().context("invalid configuration")?;
    tracing::debug!(?config, "configuration resolved");
    Ok(config)
}

fn apply_overrides(config: &mut RosterConfig, args: &ArgMatches) {
    if let Some(page_size) = flag::<usize>(args, "page-size") {
        config.service.page_size = page_size;
    }
    if let Some(ms) = flag::<u64>(args, "latency-ms") {
        config.service.latency = if ms == 0 {
            Latency::None
        } else {
            Latency::fixed(Duration::from_millis(ms))
        };
    }
    if let Some(people) = flag::<usize>(args, "people") {
        config.service.people = people;
    }
    if let Some(seed) = flag::<u64>(args, "seed") {
        config.service.seed = seed;
    }
    if switch(args, "classic") {
        config.service.classic = true;
    }
    if let Some(addr) = flag::<SocketAddr>(args, "addr") {
        config.server.addr = addr;
    }
    if switch(args, "immediate") {
        config.controller.commit = CommitPolicy::Immediate;
    }
    if let Some(ms) = flag::<u64>(args, "debounce-ms") {
        config.controller.commit = CommitPolicy::debounced(Duration::from_millis(ms));
    }
}

/// Value of a flag the subcommand may not define
fn flag<T: Clone + Send + Sync + 'static>(args: &ArgMatches, id: &str) -> Option<T> {
    args.try_get_one::<T>(id).ok().flatten().cloned()
}

fn switch(args: &ArgMatches, id: &str) -> bool {
    flag::<bool>(args, id).unwrap_or(false)
}
