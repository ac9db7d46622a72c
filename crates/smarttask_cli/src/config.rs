//! Command-line and environment configuration for the shell.

use clap::Parser;
use smarttask_core::default_log_level;

/// Interactive console task tracker.
#[derive(Debug, Clone, Parser)]
#[command(name = "smarttask", version, about = "Interactive console task tracker")]
pub struct ShellConfig {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "SMARTTASK_LOG_LEVEL", default_value_t = default_log_level().to_string())]
    pub log_level: String,

    /// Absolute directory for rotating log files. Logging is off when unset.
    #[arg(long, env = "SMARTTASK_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Start with an empty registry instead of the demo tasks.
    #[arg(long)]
    pub no_samples: bool,
}

#[cfg(test)]
mod tests {
    use super::ShellConfig;
    use clap::Parser;

    #[test]
    fn flags_override_defaults() {
        let config = ShellConfig::try_parse_from([
            "smarttask",
            "--log-level",
            "warn",
            "--log-dir",
            "/tmp/smarttask-logs",
            "--no-samples",
        ])
        .expect("flags should parse");

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir.as_deref(), Some("/tmp/smarttask-logs"));
        assert!(config.no_samples);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(ShellConfig::try_parse_from(["smarttask", "--persist"]).is_err());
    }
}
