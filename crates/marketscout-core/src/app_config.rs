use std::path::PathBuf;

/// Run mode for a collection run.
///
/// `Test` is the default for ad-hoc local runs; `Production` marks
/// scheduled runs. The mode labels output and logging only; publishing is
/// gated by [`AppConfig::publish_enabled`] and a configured owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Test,
    Production,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Test => write!(f, "test"),
            Mode::Production => write!(f, "production"),
        }
    }
}

/// Process-wide configuration, built once at startup from environment
/// variables and passed by reference into every component constructor.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: Mode,
    pub log_level: String,
    /// Path to the YAML sources file (businesses, boards, categories, vocab).
    pub sources_path: PathBuf,
    /// Local directory reports are written into.
    pub reports_dir: PathBuf,
    pub publish_enabled: bool,
    /// GitHub account owning the intel repo. Absent means publishing is
    /// unconfigured and runs fall back to local-only saves.
    pub github_owner: Option<String>,
    pub github_repo: String,
    pub github_branch: String,
    pub request_timeout_secs: u64,
    /// Politeness throttle between outbound requests, applied after every
    /// fetch regardless of outcome.
    pub request_delay_ms: u64,
    pub user_agent: String,
    /// Cap on trend records kept per search category.
    pub max_trends: usize,
    /// Cap on competitor shops analyzed per run.
    pub max_competitors: usize,
}
