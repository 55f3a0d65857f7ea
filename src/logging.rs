//! Tracing subscriber setup. Records go to stderr and/or a daily rolling
//! file; stdout is reserved for relay output.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

const DEFAULT_LOG_FILTER: &str = "warn";
const DEFAULT_LOG_FILE_PATH: &str = "logs/prompt-relay.log";
const DEFAULT_LOG_FILE_NAME: &str = "prompt-relay.log";

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogOutput {
    Stderr,
    File,
    Both,
}

impl LogOutput {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Stderr => "stderr",
            Self::File => "file",
            Self::Both => "both",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LogSettings {
    format: LogFormat,
    output: LogOutput,
    file_path: PathBuf,
}

impl LogSettings {
    fn from_env_with(mut get_var: impl FnMut(&str) -> Option<String>) -> Self {
        Self {
            format: parse_log_format(get_var("RELAY_LOG_FORMAT").as_deref()),
            output: parse_log_output(get_var("RELAY_LOG_OUTPUT").as_deref()),
            file_path: parse_log_file_path(get_var("RELAY_LOG_FILE_PATH").as_deref()),
        }
    }
}

fn normalized(raw: Option<&str>) -> Option<String> {
    raw.map(|value| value.trim().to_ascii_lowercase())
}

fn parse_log_format(raw: Option<&str>) -> LogFormat {
    match normalized(raw).as_deref() {
        Some("json") => LogFormat::Json,
        _ => LogFormat::Pretty,
    }
}

fn parse_log_output(raw: Option<&str>) -> LogOutput {
    match normalized(raw).as_deref() {
        Some("file") => LogOutput::File,
        Some("both") => LogOutput::Both,
        _ => LogOutput::Stderr,
    }
}

fn parse_log_file_path(raw: Option<&str>) -> PathBuf {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_PATH))
}

fn build_file_writer(path: &Path) -> std::io::Result<(non_blocking::NonBlocking, WorkerGuard)> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE_NAME));

    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

fn env_filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn init_with_writer(format: LogFormat, writer: BoxMakeWriter) -> InitResult {
    let env_filter = env_filter_from_env();
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(writer)
            .try_init(),
    }
}

fn init_file_output(settings: &LogSettings) -> Option<WorkerGuard> {
    let include_stderr = settings.output == LogOutput::Both;

    match build_file_writer(&settings.file_path) {
        Ok((file_writer, guard)) => {
            let writer = if include_stderr {
                BoxMakeWriter::new(std::io::stderr.and(file_writer))
            } else {
                BoxMakeWriter::new(file_writer)
            };

            init_with_writer(settings.format, writer).ok().map(|()| guard)
        }
        Err(err) => {
            eprintln!(
                "prompt-relay: failed to initialize RELAY_LOG_OUTPUT={} at '{}': {}; {}",
                settings.output.as_str(),
                settings.file_path.display(),
                err,
                if include_stderr {
                    "using stderr only"
                } else {
                    "using stderr instead"
                }
            );
            let _ = init_with_writer(settings.format, BoxMakeWriter::new(std::io::stderr));
            None
        }
    }
}

/// Installs the global subscriber. A second call is a no-op.
///
/// The returned guard flushes buffered file output when dropped, so the
/// caller must hold it until the relay has finished.
#[must_use = "dropping the guard stops file logging"]
pub fn init() -> Option<WorkerGuard> {
    let settings = LogSettings::from_env_with(|key| env::var(key).ok());

    match settings.output {
        LogOutput::Stderr => {
            let _ = init_with_writer(settings.format, BoxMakeWriter::new(std::io::stderr));
            None
        }
        LogOutput::File | LogOutput::Both => init_file_output(&settings),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{
        DEFAULT_LOG_FILE_PATH, LogFormat, LogOutput, LogSettings, build_file_writer,
        parse_log_file_path, parse_log_format, parse_log_output,
    };

    fn settings_from_pairs(pairs: &[(&str, &str)]) -> LogSettings {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        LogSettings::from_env_with(|key| vars.get(key).cloned())
    }

    #[test]
    fn settings_default_to_pretty_stderr() {
        assert_eq!(
            settings_from_pairs(&[]),
            LogSettings {
                format: LogFormat::Pretty,
                output: LogOutput::Stderr,
                file_path: PathBuf::from(DEFAULT_LOG_FILE_PATH),
            }
        );
    }

    #[test]
    fn settings_read_prefixed_vars() {
        let settings = settings_from_pairs(&[
            ("RELAY_LOG_FORMAT", "json"),
            ("RELAY_LOG_OUTPUT", "both"),
            ("RELAY_LOG_FILE_PATH", "/tmp/relay/out.log"),
            ("LOG_FORMAT", "pretty"),
        ]);
        assert_eq!(settings.format, LogFormat::Json);
        assert_eq!(settings.output, LogOutput::Both);
        assert_eq!(settings.file_path, PathBuf::from("/tmp/relay/out.log"));
    }

    #[test]
    fn parse_log_format_accepts_json_case_insensitively() {
        assert_eq!(parse_log_format(None), LogFormat::Pretty);
        assert_eq!(parse_log_format(Some(" JSON ")), LogFormat::Json);
        assert_eq!(parse_log_format(Some("yaml")), LogFormat::Pretty);
    }

    #[test]
    fn parse_log_output_accepts_file_and_both() {
        assert_eq!(parse_log_output(None), LogOutput::Stderr);
        assert_eq!(parse_log_output(Some("file")), LogOutput::File);
        assert_eq!(parse_log_output(Some(" BOTH ")), LogOutput::Both);
        assert_eq!(parse_log_output(Some("stdout")), LogOutput::Stderr);
    }

    #[test]
    fn parse_log_file_path_uses_default_for_missing_or_empty_values() {
        assert_eq!(
            parse_log_file_path(None),
            PathBuf::from(DEFAULT_LOG_FILE_PATH)
        );
        assert_eq!(
            parse_log_file_path(Some("  ")),
            PathBuf::from(DEFAULT_LOG_FILE_PATH)
        );
        assert_eq!(
            parse_log_file_path(Some("custom/relay.log")),
            PathBuf::from("custom/relay.log")
        );
    }

    #[test]
    fn file_writer_flushes_buffered_lines_when_guard_drops() {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "prompt-relay-writer-{stamp}-{}",
            std::process::id()
        ));
        let path = dir.join("relay.log");

        let (mut writer, guard) = build_file_writer(&path).expect("writer should build");
        writer
            .write_all(b"startup line\n")
            .expect("buffered write should succeed");
        drop(writer);
        drop(guard);

        let contents: String = fs::read_dir(&dir)
            .expect("log directory should exist")
            .filter_map(|entry| entry.ok())
            .map(|entry| fs::read_to_string(entry.path()).unwrap_or_default())
            .collect();
        assert!(
            contents.contains("startup line"),
            "expected flushed line in log file, got:\n{contents}"
        );

        let _ = fs::remove_dir_all(&dir);
    }
}
