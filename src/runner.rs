//! Invokes the external renderer and captures its stdout into a file.

use std::fs::File;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::RunnerError;

/// What a successful renderer run produced.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    /// Size of the output file after the run; `None` if it could not be read.
    pub bytes_written: Option<u64>,
    pub elapsed: Duration,
}

/// Run `exe` with no arguments, writing its stdout to `output`.
///
/// `output` is created or truncated before the process starts. The call
/// blocks until the process exits; any non-zero status is an error.
pub fn run_renderer(exe: &Path, output: &Path) -> Result<RunReport, RunnerError> {
    let file = File::create(output).map_err(|source| RunnerError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    log::info!("running {} > {}", exe.display(), output.display());
    let started = Instant::now();

    let mut child = Command::new(exe)
        .stdin(Stdio::null())
        .stdout(Stdio::from(file))
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| RunnerError::Launch {
            exe: exe.to_path_buf(),
            source,
        })?;

    let status = child.wait().map_err(|source| RunnerError::Wait {
        exe: exe.to_path_buf(),
        source,
    })?;

    if !status.success() {
        return Err(RunnerError::Exit {
            exe: exe.to_path_buf(),
            code: status.code(),
        });
    }

    let bytes_written = match std::fs::metadata(output) {
        Ok(meta) => Some(meta.len()),
        Err(e) => {
            log::warn!("cannot stat {} after run: {e}", output.display());
            None
        }
    };
    let report = RunReport {
        bytes_written,
        elapsed: started.elapsed(),
    };
    log::debug!(
        "renderer finished in {:?}, wrote {:?} bytes",
        report.elapsed,
        report.bytes_written
    );
    Ok(report)
}
