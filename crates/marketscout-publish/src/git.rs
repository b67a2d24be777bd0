//! Report persistence and publishing.
//!
//! Two modes, chosen once per run: `remote-configured` (write into a git
//! working tree, commit, push) when publishing is enabled and an owner is
//! set, and `local-only` (plain file write) otherwise. Every git failure
//! downgrades to the local-only path; only a local write failure is fatal.
//!
//! Git is invoked as a subprocess; there is no libgit dependency.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;

use marketscout_core::{AppConfig, PublishOutcome};

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to write report {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to spawn git: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("git {op} failed: {detail}")]
    Git { op: &'static str, detail: String },
}

pub struct Publisher {
    publish_enabled: bool,
    owner: Option<String>,
    repo: String,
    branch: String,
    /// Git working tree all git commands run against.
    worktree: PathBuf,
    /// Directory the report file is written into (inside the worktree for
    /// the remote path; any writable directory for local-only).
    reports_dir: PathBuf,
}

impl Publisher {
    /// Creates a publisher rooted at the current directory's working tree.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self::with_worktree(config, Path::new("."))
    }

    /// Creates a publisher with an explicit working tree; tests use this to
    /// operate inside a temporary directory.
    #[must_use]
    pub fn with_worktree(config: &AppConfig, worktree: &Path) -> Self {
        Self {
            publish_enabled: config.publish_enabled,
            owner: config.github_owner.clone(),
            repo: config.github_repo.clone(),
            branch: config.github_branch.clone(),
            worktree: worktree.to_path_buf(),
            reports_dir: config.reports_dir.clone(),
        }
    }

    /// The configured owner, if publishing is fully configured.
    fn configured_owner(&self) -> Option<&str> {
        if !self.publish_enabled {
            tracing::info!("publishing disabled; saving locally only");
            return None;
        }
        match self.owner.as_deref() {
            Some(owner) => Some(owner),
            None => {
                tracing::info!("no github owner configured; saving locally only");
                None
            }
        }
    }

    /// Persist `content` under `filename` and publish it if configured.
    ///
    /// Remote-path failures (any git step) are logged and downgraded to a
    /// local-only save.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Io`] only when the local write itself fails.
    pub async fn publish(
        &self,
        content: &str,
        filename: &str,
        date: NaiveDate,
    ) -> Result<PublishOutcome, PublishError> {
        let Some(owner) = self.configured_owner() else {
            return self.save_local(content, filename);
        };
        let owner = owner.to_string();

        match self.try_remote(content, filename, date, &owner).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                tracing::warn!(error = %e, "remote publish failed; falling back to local save");
                self.save_local(content, filename)
            }
        }
    }

    async fn try_remote(
        &self,
        content: &str,
        filename: &str,
        date: NaiveDate,
        owner: &str,
    ) -> Result<PublishOutcome, PublishError> {
        write_report(&self.reports_dir, filename, content)?;

        let status = self.git("status", &["status", "--porcelain"]).await?;
        if status.trim().is_empty() {
            tracing::info!("working tree clean; nothing to commit");
            return Ok(PublishOutcome {
                success: true,
                published: false,
                url: None,
                local_path: None,
                reason: Some("no-changes".to_string()),
            });
        }

        self.git("add", &["add", "-A"]).await?;
        let message = commit_message(date);
        self.git("commit", &["commit", "-m", &message]).await?;
        self.git("push", &["push", "origin", &self.branch]).await?;

        let url = format!(
            "https://github.com/{owner}/{repo}/blob/{branch}/{reports}/{filename}",
            repo = self.repo,
            branch = self.branch,
            reports = self.reports_rel(),
        );
        tracing::info!(url, "report published");

        Ok(PublishOutcome {
            success: true,
            published: true,
            url: Some(url),
            local_path: None,
            reason: None,
        })
    }

    /// Local-only persistence: ensure the directory exists, write the file,
    /// and report its path.
    fn save_local(&self, content: &str, filename: &str) -> Result<PublishOutcome, PublishError> {
        let path = write_report(&self.reports_dir, filename, content)?;
        tracing::info!(path = %path.display(), "report saved locally");

        Ok(PublishOutcome {
            success: true,
            published: false,
            url: None,
            local_path: Some(path.display().to_string()),
            reason: None,
        })
    }

    /// Reports directory relative to the worktree, as used in the blob URL.
    fn reports_rel(&self) -> String {
        self.reports_dir
            .strip_prefix(&self.worktree)
            .unwrap_or(&self.reports_dir)
            .display()
            .to_string()
            .trim_start_matches("./")
            .to_string()
    }

    /// Run one git subcommand against the worktree, capturing stdout.
    async fn git(&self, op: &'static str, args: &[&str]) -> Result<String, PublishError> {
        let output = tokio::process::Command::new("git")
            .arg("-C")
            .arg(&self.worktree)
            .args(args)
            .output()
            .await
            .map_err(PublishError::Spawn)?;

        if !output.status.success() {
            return Err(PublishError::Git {
                op,
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Date-stamped commit message for a run.
pub(crate) fn commit_message(date: NaiveDate) -> String {
    format!("Daily intel report - {}", date.format("%Y-%m-%d"))
}

fn write_report(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, PublishError> {
    std::fs::create_dir_all(dir).map_err(|e| PublishError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;
    let path = dir.join(filename);
    std::fs::write(&path, content).map_err(|e| PublishError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(path)
}

#[cfg(test)]
#[path = "git_test.rs"]
mod tests;
