use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Runner errors
// ---------------------------------------------------------------------------

/// Failures while invoking the external renderer.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("cannot create output file {path}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot launch {exe}")]
    Launch {
        exe: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for {exe}")]
    Wait {
        exe: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `code` is `None` when the process was terminated by a signal.
    #[error("{exe} exited unsuccessfully ({})", describe_code(.code))]
    Exit { exe: PathBuf, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "terminated by signal".to_string(),
    }
}

/// Render an error and its `source()` chain as `outer: inner: ...`.
///
/// For errors that cannot become `anyhow::Error` (not `Send + Sync`).
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut next = err.source();
    while let Some(cause) = next {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        next = cause.source();
    }
    out
}

// ---------------------------------------------------------------------------
// Data-format errors
// ---------------------------------------------------------------------------

/// Failures while reading a whitespace-delimited x/y/z table.
///
/// Line numbers are 1-based and refer to the physical line in the file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no data rows found")]
    Empty,

    #[error("line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: '{token}' is not a number")]
    NotNumeric { line: usize, token: String },

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_message_distinguishes_signal() {
        let code = RunnerError::Exit {
            exe: PathBuf::from("render"),
            code: Some(3),
        };
        assert_eq!(code.to_string(), "render exited unsuccessfully (exit code 3)");

        let signal = RunnerError::Exit {
            exe: PathBuf::from("render"),
            code: None,
        };
        assert!(signal.to_string().ends_with("(terminated by signal)"));
    }

    #[test]
    fn chain_includes_sources() {
        let err = RunnerError::Launch {
            exe: PathBuf::from("render"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error_chain(&err), "cannot launch render: no such file");
    }

    #[test]
    fn data_errors_name_the_line() {
        let err = DataError::NotNumeric {
            line: 4,
            token: "abc".into(),
        };
        assert_eq!(err.to_string(), "line 4: 'abc' is not a number");
    }
}
