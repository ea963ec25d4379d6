//! Boundary to the hosting pipeline: step inputs, step outputs and
//! workflow-command traces.
//!
//! Inputs arrive as `INPUT_<NAME>` environment variables (upper-cased, dashes
//! preserved). Outputs are appended to the file named by `GITHUB_OUTPUT`;
//! runners without that file get the legacy `::set-output` command instead.

use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};

/// Read a step input. Values are trimmed; an empty value counts as absent.
pub fn input(name: &str) -> Option<String> {
    let key = format!("INPUT_{}", name.to_uppercase().replace(' ', "_"));
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Publish a step output for downstream steps.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match std::env::var("GITHUB_OUTPUT") {
        Ok(path) => {
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Opening output file {path}"))?;
            writeln!(file, "{name}={value}").with_context(|| format!("Writing output {name}"))?;
        }
        Err(_) => println!("::set-output name={name}::{value}"),
    }
    Ok(())
}

/// Diagnostic trace; the runner only surfaces it when step debugging is enabled.
pub fn debug(msg: &str) {
    println!("::debug::{msg}");
}

/// Informational trace, always visible in the step log.
pub fn info(msg: &str) {
    println!("{msg}");
}

/// Mark the step failed with a diagnostic message. The caller still decides
/// the process exit code.
pub fn set_failed(msg: &str) {
    println!("::error::{msg}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The process environment is shared across test threads.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn input_reads_prefixed_env_var() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("INPUT_PARSE-MODE", "HTML");
        assert_eq!(input("parse-mode").as_deref(), Some("HTML"));
        std::env::remove_var("INPUT_PARSE-MODE");
    }

    #[test]
    fn input_trims_and_drops_empty_values() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("INPUT_MESSAGE", "  deploy finished  ");
        assert_eq!(input("message").as_deref(), Some("deploy finished"));
        std::env::set_var("INPUT_MESSAGE", "   ");
        assert_eq!(input("message"), None);
        std::env::remove_var("INPUT_MESSAGE");
    }

    #[test]
    fn missing_input_is_none() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("INPUT_TELEGRAM-TOKEN");
        assert_eq!(input("telegram-token"), None);
    }

    #[test]
    fn set_output_appends_to_github_output_file() {
        let _guard = ENV_LOCK.lock().unwrap();
        let file = tempfile::NamedTempFile::new().unwrap();
        std::env::set_var("GITHUB_OUTPUT", file.path());
        set_output("message-id", "42").unwrap();
        set_output("success", "true").unwrap();
        std::env::remove_var("GITHUB_OUTPUT");

        let contents = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "message-id=42\nsuccess=true\n");
    }
}
