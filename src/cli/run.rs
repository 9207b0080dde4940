//! Run command implementation (headless, one command)

use anyhow::{Result, bail};
use std::io::Write;
use std::path::Path;

use singleplexer::config::Config;
use singleplexer::runner::{CommandRunner, ProcessRunner};
use singleplexer::{CommandLine, TranscriptEntry};

/// Exit status reported when the command could not be launched
pub const LAUNCH_FAILURE_EXIT_CODE: i32 = 127;

/// Run one command the way the GUI would and print its transcript.
///
/// Stdout goes to stdout, stderr to stderr, then the status line. Returns
/// the exit code this process should exit with.
pub async fn run_command(work_dir: Option<&Path>, config: &Config, words: &[String]) -> Result<i32> {
    let raw = words.join(" ");
    let Some(command) = CommandLine::parse(&raw, config.settings.split_policy) else {
        bail!("No command given");
    };

    let runner = match work_dir {
        Some(dir) => ProcessRunner::with_work_dir(dir),
        None => ProcessRunner::new(),
    };

    match runner.run(&command, None).await {
        Ok(result) => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(result.stdout.as_bytes())?;
            stdout.flush()?;
            drop(stdout);

            let mut stderr = std::io::stderr().lock();
            stderr.write_all(result.stderr.as_bytes())?;
            stderr.flush()?;
            drop(stderr);

            print!("{}", TranscriptEntry::exit_status(result.exit_code).text);
            Ok(result.exit_code)
        }
        Err(e) => {
            eprint!("{}", TranscriptEntry::launch_error(&e).text);
            Ok(LAUNCH_FAILURE_EXIT_CODE)
        }
    }
}
