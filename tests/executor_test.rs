//! Integration tests for the GUI's background command executor

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use singleplexer::gui::{ExecutorEvent, start_executor};
use singleplexer::runner::CommandRunner;
use singleplexer::{CommandLine, CommandResult, LaunchError, RunPhase};
use tokio::sync::mpsc as tokio_mpsc;

/// Records every command it sees and reports the argument count as exit code
#[derive(Default)]
struct RecordingRunner {
    seen: Mutex<Vec<String>>,
}

#[async_trait]
impl CommandRunner for RecordingRunner {
    async fn run(
        &self,
        command: &CommandLine,
        phase_tx: Option<tokio_mpsc::UnboundedSender<RunPhase>>,
    ) -> Result<CommandResult, LaunchError> {
        self.seen.lock().unwrap().push(command.to_string());
        let tx = phase_tx.expect("executor always passes a phase channel");
        let exit_code = command.args.len() as i32;
        for phase in [
            RunPhase::Launching,
            RunPhase::Running,
            RunPhase::Draining,
            RunPhase::Exited(exit_code),
        ] {
            tx.send(phase).unwrap();
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        Ok(CommandResult {
            stdout: format!("{}\n", command.program),
            stderr: String::new(),
            exit_code,
        })
    }
}

fn collect_until_finished(rx: &mpsc::Receiver<ExecutorEvent>) -> Vec<ExecutorEvent> {
    let mut events = Vec::new();
    loop {
        let event = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("executor did not report in time");
        let finished = matches!(event, ExecutorEvent::Finished(_));
        events.push(event);
        if finished {
            return events;
        }
    }
}

#[test]
fn test_events_arrive_in_order() {
    let runner = Arc::new(RecordingRunner::default());
    let (event_tx, event_rx) = mpsc::channel();
    let executor = start_executor(runner.clone(), event_tx, None).unwrap();

    executor
        .submit(CommandLine::new("ls", ["-l", "/tmp"]))
        .unwrap();
    let events = collect_until_finished(&event_rx);

    assert!(matches!(&events[0], ExecutorEvent::Started(cmd) if cmd.program == "ls"));
    let phases: Vec<RunPhase> = events
        .iter()
        .filter_map(|e| match e {
            ExecutorEvent::Phase(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(
        phases,
        vec![
            RunPhase::Launching,
            RunPhase::Running,
            RunPhase::Draining,
            RunPhase::Exited(2),
        ]
    );
    match events.last() {
        Some(ExecutorEvent::Finished(Ok(result))) => {
            assert_eq!(result.stdout, "ls\n");
            assert_eq!(result.exit_code, 2);
        }
        other => panic!("unexpected last event: {:?}", other),
    }
}

#[test]
fn test_commands_run_one_at_a_time_in_order() {
    let runner = Arc::new(RecordingRunner::default());
    let (event_tx, event_rx) = mpsc::channel();
    let executor = start_executor(runner.clone(), event_tx, None).unwrap();

    executor.submit(CommandLine::new("first", ["a"])).unwrap();
    executor.submit(CommandLine::new("second", ["a", "b"])).unwrap();

    let first = collect_until_finished(&event_rx);
    let second = collect_until_finished(&event_rx);

    // no events of the second command interleave with the first
    assert!(matches!(&first[0], ExecutorEvent::Started(cmd) if cmd.program == "first"));
    assert!(matches!(&second[0], ExecutorEvent::Started(cmd) if cmd.program == "second"));
    assert!(matches!(first.last(), Some(ExecutorEvent::Finished(Ok(r))) if r.exit_code == 1));
    assert!(matches!(second.last(), Some(ExecutorEvent::Finished(Ok(r))) if r.exit_code == 2));

    assert_eq!(*runner.seen.lock().unwrap(), vec!["first a", "second a b"]);
}

#[cfg(unix)]
#[test]
fn test_real_process_through_executor() {
    let (event_tx, event_rx) = mpsc::channel();
    let executor = start_executor(
        Arc::new(singleplexer::runner::ProcessRunner::new()),
        event_tx,
        None,
    )
    .unwrap();

    executor
        .submit(CommandLine::new("sh", ["-c", "echo hi; echo oops 1>&2; exit 1"]))
        .unwrap();
    let events = collect_until_finished(&event_rx);

    match events.last() {
        Some(ExecutorEvent::Finished(Ok(result))) => {
            assert_eq!(result.stdout, "hi\n");
            assert_eq!(result.stderr, "oops\n");
            assert_eq!(result.exit_code, 1);
        }
        other => panic!("unexpected last event: {:?}", other),
    }
}
