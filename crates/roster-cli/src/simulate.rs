//! Scripted typing session against an in-process search service
//!
//! Plays a list of successive input values into a `SearchController`, one
//! per keystroke interval, and prints a line for every visible transition.

use clap::ArgMatches;
use roster_controller::{ControllerEvent, MemoryHistory, Navigator, SearchController, SettleOutcome};
use roster_core::{RosterConfig, SearchBackend};
use roster_service::MockSearchService;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

const START_URL: &str = "http://localhost/people";

/// What to type and how fast
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Plan {
    pub(crate) inputs: Vec<String>,
    pub(crate) keystroke: Duration,
}

impl Plan {
    pub(crate) fn from_args(args: &ArgMatches) -> Self {
        let raw = args.get_one::<String>("input").map_or("", String::as_str);
        let keystroke = args.get_one::<u64>("keystroke-ms").copied().unwrap_or(100);
        Self {
            inputs: parse_inputs(raw),
            keystroke: Duration::from_millis(keystroke),
        }
    }
}

/// Split `a,ab,abc` into successive input values; empty entries clear the box
pub(crate) fn parse_inputs(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

pub(crate) async fn run(config: &RosterConfig, plan: &Plan) -> anyhow::Result<()> {
    let service = Arc::new(MockSearchService::from_config(&config.service));
    let history = MemoryHistory::parse(START_URL)?;
    tracing::info!(
        inputs = plan.inputs.len(),
        commit = ?config.controller.commit,
        "simulation started"
    );

    let mut controller = SearchController::mount(service, history, config.controller.clone());
    play(&mut controller, plan, |line| println!("{line}")).await;
    Ok(())
}

/// Drive `controller` through `plan`, reporting each transition to `emit`
pub(crate) async fn play<B, F>(
    controller: &mut SearchController<B, MemoryHistory>,
    plan: &Plan,
    mut emit: F,
) where
    B: SearchBackend + ?Sized + 'static,
    F: FnMut(String),
{
    let start = Instant::now();
    emit(line(start, "mount", controller));
    pump(controller, start, plan.keystroke, &mut emit).await;

    for input in &plan.inputs {
        controller.on_input(input.clone());
        emit(line(start, &format!("input {input:?}"), controller));
        pump(controller, start, plan.keystroke, &mut emit).await;
    }

    while let Some(event) = controller.next_event().await {
        emit(line(start, &describe(&event), controller));
    }

    let navigator = controller.navigator();
    emit(format!(
        "done fetches={} url_writes={} url={}",
        controller.fetch_count(),
        navigator.replace_count(),
        navigator.current()
    ));
}

/// Apply events until `window` has passed
async fn pump<B, F>(
    controller: &mut SearchController<B, MemoryHistory>,
    start: Instant,
    window: Duration,
    emit: &mut F,
) where
    B: SearchBackend + ?Sized + 'static,
    F: FnMut(String),
{
    let deadline = Instant::now() + window;
    loop {
        tokio::select! {
            event = controller.next_event() => match event {
                Some(event) => emit(line(start, &describe(&event), controller)),
                None => {
                    tokio::time::sleep_until(deadline).await;
                    return;
                }
            },
            () = tokio::time::sleep_until(deadline) => return,
        }
    }
}

fn describe(event: &ControllerEvent) -> String {
    match event {
        ControllerEvent::Committed(epoch) => format!("commit {epoch}"),
        ControllerEvent::Coalesced => "coalesced".to_string(),
        ControllerEvent::Settled { epoch, outcome } => match outcome {
            SettleOutcome::Applied => format!("settled {epoch} applied"),
            SettleOutcome::Failed(kind) => format!("settled {epoch} failed({kind})"),
            SettleOutcome::Stale => format!("settled {epoch} stale"),
        },
    }
}

fn line<B>(start: Instant, label: &str, controller: &SearchController<B, MemoryHistory>) -> String
where
    B: SearchBackend + ?Sized + 'static,
{
    let view = controller.current_view();
    let status = match view.error {
        Some(kind) => format!("failed({kind})"),
        None if view.is_loading => "loading".to_string(),
        None if view.is_stale => "stale".to_string(),
        None if view.result.is_some() => "fresh".to_string(),
        None => "idle".to_string(),
    };
    let counts = view
        .counts()
        .map(|(shown, total)| format!(" items={shown}/{total}"))
        .unwrap_or_default();

    format!(
        "{:>6}ms  {:<22} input={:?} committed={:?} {}{}",
        start.elapsed().as_millis(),
        label,
        view.display_value,
        controller.committed_query(),
        status,
        counts
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roster_core::{CommitPolicy, ControllerConfig, Latency};
    use roster_service::Directory;

    fn slow_classic() -> Arc<MockSearchService> {
        Arc::new(
            MockSearchService::new(Arc::new(Directory::classic()), 10)
                .with_latency(Latency::fixed(Duration::from_millis(300))),
        )
    }

    async fn transcript(config: ControllerConfig, inputs: &str, keystroke_ms: u64) -> Vec<String> {
        let history = MemoryHistory::parse(START_URL).unwrap();
        let mut controller = SearchController::mount(slow_classic(), history, config);
        let plan = Plan {
            inputs: parse_inputs(inputs),
            keystroke: Duration::from_millis(keystroke_ms),
        };
        let mut lines = Vec::new();
        play(&mut controller, &plan, |line| lines.push(line)).await;
        lines
    }

    #[test]
    fn inputs_split_on_commas() {
        assert_eq!(parse_inputs("a,ab,abc"), vec!["a", "ab", "abc"]);
        assert_eq!(parse_inputs("ab,a,"), vec!["ab", "a", ""]);
        assert_eq!(parse_inputs("jane smith"), vec!["jane smith"]);
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_typing_drops_superseded_results() {
        let config = ControllerConfig::default().with_commit(CommitPolicy::Immediate);
        let lines = transcript(config, "j,ja", 120).await;

        assert!(lines[0].contains("mount"));
        assert!(lines[0].contains("loading"));
        assert!(lines.iter().any(|l| l.contains("settled #1 stale")));
        assert!(lines.iter().any(|l| l.contains("settled #2 stale")));

        let settled = lines.iter().find(|l| l.contains("settled #3 applied")).unwrap();
        assert!(settled.contains("committed=\"ja\""));
        assert!(settled.contains("fresh"));

        let done = lines.last().unwrap();
        assert_eq!(
            done,
            "done fetches=3 url_writes=2 url=http://localhost/people?search=ja"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_typing_commits_once() {
        let config =
            ControllerConfig::default().with_commit(CommitPolicy::debounced(Duration::from_millis(200)));
        let lines = transcript(config, "a,ab,abc", 50).await;

        assert!(lines.iter().any(|l| l.contains("settled #1 applied")));
        assert!(lines.iter().any(|l| l.contains("commit #2")));
        assert!(lines.iter().any(|l| l.contains("settled #2 applied")));
        assert_eq!(
            lines.last().unwrap(),
            "done fetches=2 url_writes=1 url=http://localhost/people?search=abc"
        );
    }
}
