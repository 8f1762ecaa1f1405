//! GitHub Actions output channel.
//!
//! Step outputs are appended to the file named by `GITHUB_OUTPUT` when the
//! runner provides one, otherwise the legacy `::set-output` workflow command
//! is printed to stdout.
use log::*;
use std::{env, fmt::Display, path::PathBuf};
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

use crate::error::{ReleaseExistsError, Result};

/// Output key consumed by downstream steps.
pub const EXISTS_OUTPUT: &str = "exists";

const OUTPUT_FILE_VAR: &str = "GITHUB_OUTPUT";
const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Destination for step outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutput {
    /// Append `key=value` entries to this file.
    File(PathBuf),
    /// Print `::set-output` workflow commands.
    Stdout,
}

impl ActionOutput {
    pub fn from_env() -> Self {
        match env::var_os(OUTPUT_FILE_VAR) {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Stdout,
        }
    }

    /// Publish `key` with `value` for later steps in the same job.
    pub async fn set_output(&self, key: &str, value: impl Display) -> Result<()> {
        let value = value.to_string();

        match self {
            Self::File(path) => {
                let entry = file_command(key, &value)?;
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .await?;
                file.write_all(entry.as_bytes()).await?;
                file.flush().await?;
            }
            Self::Stdout => {
                println!();
                println!(
                    "::set-output name={}::{}",
                    escape_property(key),
                    escape_data(&value)
                );
            }
        }

        debug!("set output {key}={value}");

        Ok(())
    }
}

/// Report a failed step. The caller is responsible for the exit status.
pub fn set_failed(message: &str) {
    println!("::error::{}", escape_data(message));
}

fn file_command(key: &str, value: &str) -> Result<String> {
    if !value.contains(['\n', '\r']) {
        return Ok(format!("{key}={value}\n"));
    }

    let delimiter = format!("{DELIMITER_PREFIX}{}", nanoid::nanoid!());

    if key.contains(&delimiter) || value.contains(&delimiter) {
        return Err(ReleaseExistsError::Other(color_eyre::eyre::eyre!(
            "unexpected input: output key or value contains the delimiter {delimiter}"
        )));
    }

    Ok(format!("{key}<<{delimiter}\n{value}\n{delimiter}\n"))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_outputs_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        let output = ActionOutput::File(path.clone());

        output.set_output(EXISTS_OUTPUT, true).await.unwrap();
        output.set_output("other", "value").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "exists=true\nother=value\n");
    }

    #[tokio::test]
    async fn multiline_values_use_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");
        let output = ActionOutput::File(path.clone());

        output.set_output("notes", "line one\nline two").await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        let delimiter = header.strip_prefix("notes<<").unwrap();

        assert!(delimiter.starts_with(DELIMITER_PREFIX));
        assert_eq!(lines.next(), Some("line one"));
        assert_eq!(lines.next(), Some("line two"));
        assert_eq!(lines.next(), Some(delimiter));
        assert_eq!(lines.next(), None);
    }

    #[tokio::test]
    async fn unwritable_output_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = ActionOutput::File(dir.path().join("missing/output"));

        let err = output.set_output(EXISTS_OUTPUT, false).await.unwrap_err();
        assert!(matches!(err, ReleaseExistsError::OutputError(_)));
    }

    #[test]
    fn selects_channel_from_environment() {
        temp_env::with_var(OUTPUT_FILE_VAR, Some("/tmp/gh-output"), || {
            assert_eq!(
                ActionOutput::from_env(),
                ActionOutput::File(PathBuf::from("/tmp/gh-output"))
            );
        });

        temp_env::with_var(OUTPUT_FILE_VAR, None::<&str>, || {
            assert_eq!(ActionOutput::from_env(), ActionOutput::Stdout);
        });

        temp_env::with_var(OUTPUT_FILE_VAR, Some(""), || {
            assert_eq!(ActionOutput::from_env(), ActionOutput::Stdout);
        });
    }

    #[test]
    fn escapes_workflow_command_values() {
        assert_eq!(escape_data("100%\r\ndone"), "100%25%0D%0Adone");
        assert_eq!(escape_property("a:b,c"), "a%3Ab%2Cc");
    }
}
