//! First-run setup: writes a commented `.env` starter file.

use std::io::Write as _;
use std::path::{Path, PathBuf};

const ENV_TEMPLATE: &str = "\
# MarketScout environment configuration.
# Every variable is optional; unset values fall back to the defaults shown.

# Run mode: test | production (unknown values fall back to test)
MARKETSCOUT_MODE=test

# Log verbosity passed to the tracing filter
MARKETSCOUT_LOG_LEVEL=info

# Where collection sources are configured
MARKETSCOUT_SOURCES_PATH=config/sources.yaml

# Where rendered reports land
MARKETSCOUT_REPORTS_DIR=./reports

# Git publishing. Leave GITHUB_OWNER empty to keep reports local-only.
MARKETSCOUT_PUBLISH_ENABLED=false
MARKETSCOUT_GITHUB_OWNER=
MARKETSCOUT_GITHUB_REPO=market-intel
MARKETSCOUT_GITHUB_BRANCH=main

# Outbound request behavior
MARKETSCOUT_REQUEST_TIMEOUT_SECS=10
MARKETSCOUT_REQUEST_DELAY_MS=2000

# Collection caps
MARKETSCOUT_MAX_TRENDS=10
MARKETSCOUT_MAX_COMPETITORS=5
";

/// Writes the starter template to `path` unless a file already exists there.
///
/// Returns the written path, or `None` when an existing file was left alone.
pub(crate) fn write_env_template(path: &Path) -> anyhow::Result<Option<PathBuf>> {
    if path.exists() {
        return Ok(None);
    }

    let mut file = std::fs::File::create(path)?;
    file.write_all(ENV_TEMPLATE.as_bytes())?;
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_template_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");

        let written = write_env_template(&path).unwrap();

        assert_eq!(written, Some(path.clone()));
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("MARKETSCOUT_MODE=test"));
        assert!(content.contains("MARKETSCOUT_REQUEST_DELAY_MS=2000"));
    }

    #[test]
    fn leaves_existing_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "MARKETSCOUT_MODE=production\n").unwrap();

        let written = write_env_template(&path).unwrap();

        assert_eq!(written, None);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "MARKETSCOUT_MODE=production\n"
        );
    }
}
