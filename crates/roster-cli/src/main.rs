//! `roster` command-line entry point

mod logging;
mod settings;
mod simulate;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use roster_core::Epoch;
use roster_http::AppState;
use roster_service::MockSearchService;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    logging::init(matches.get_flag("log-json"));

    match matches.subcommand() {
        Some(("serve", args)) => serve(args).await,
        Some(("query", args)) => query(args).await,
        Some(("simulate", args)) => {
            let config = settings::resolve(args)?;
            simulate::run(&config, &simulate::Plan::from_args(args)).await
        }
        Some((other, _)) => anyhow::bail!("unknown command: {other}"),
        None => anyhow::bail!("no command given"),
    }
}

fn cli() -> Command {
    Command::new("roster")
        .version(roster_core::VERSION)
        .about("People directory with incremental search")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit logs as JSON lines"),
        )
        .subcommand(
            Command::new("serve")
                .about("Serve the search endpoint over HTTP")
                .args(service_args())
                .arg(
                    Arg::new("addr")
                        .long("addr")
                        .value_parser(value_parser!(SocketAddr))
                        .help("Listen address (default 127.0.0.1:3000)"),
                ),
        )
        .subcommand(
            Command::new("query")
                .about("Run one search and print the result as JSON")
                .args(service_args())
                .arg(
                    Arg::new("text")
                        .default_value("")
                        .help("Search text; empty lists everyone"),
                ),
        )
        .subcommand(
            Command::new("simulate")
                .about("Type a sequence of inputs into a search controller")
                .args(service_args())
                .arg(
                    Arg::new("input")
                        .long("input")
                        .required(true)
                        .help("Comma-separated successive input values, e.g. a,ab,abc"),
                )
                .arg(
                    Arg::new("immediate")
                        .long("immediate")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("debounce-ms")
                        .help("Commit on every keystroke"),
                )
                .arg(
                    Arg::new("debounce-ms")
                        .long("debounce-ms")
                        .value_parser(value_parser!(u64))
                        .help("Debounce window in milliseconds"),
                )
                .arg(
                    Arg::new("keystroke-ms")
                        .long("keystroke-ms")
                        .default_value("100")
                        .value_parser(value_parser!(u64))
                        .help("Pause between inputs in milliseconds"),
                ),
        )
}

fn service_args() -> [Arg; 6] {
    [
        Arg::new("config")
            .long("config")
            .value_parser(value_parser!(PathBuf))
            .help("TOML configuration file"),
        Arg::new("page-size")
            .long("page-size")
            .value_parser(value_parser!(usize))
            .help("Items per result page"),
        Arg::new("latency-ms")
            .long("latency-ms")
            .value_parser(value_parser!(u64))
            .help("Simulated response delay; 0 disables it"),
        Arg::new("people")
            .long("people")
            .value_parser(value_parser!(usize))
            .help("Size of the generated directory"),
        Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .help("Seed for directory generation"),
        Arg::new("classic")
            .long("classic")
            .action(ArgAction::SetTrue)
            .help("Use the fixed 40-person team instead of a generated directory"),
    ]
}

async fn serve(args: &ArgMatches) -> anyhow::Result<()> {
    let config = settings::resolve(args)?;
    let service = Arc::new(MockSearchService::from_config(&config.service));
    let listener = tokio::net::TcpListener::bind(config.server.addr)
        .await
        .with_context(|| format!("binding {}", config.server.addr))?;

    roster_http::serve(listener, AppState::new(service), shutdown_signal()).await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn query(args: &ArgMatches) -> anyhow::Result<()> {
    let config = settings::resolve(args)?;
    let text = args.get_one::<String>("text").cloned().unwrap_or_default();
    let service = MockSearchService::from_config(&config.service);

    let (_, result) = service.search(&text, Epoch::ZERO).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        // without a signal handler, run until killed
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
