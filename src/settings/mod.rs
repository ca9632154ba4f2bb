// git-mirror: Git Repository Mirroring Tool
//
// SPDX-FileCopyrightText: 2026 The git-mirror Authors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process-wide settings: provider enablement and credentials.
//!
//! ```text
//! SettingsLoader::new()
//!   .add_toml_file_optional("git-mirror.toml")
//!   .add_toml_file(--config FILE)
//!        |
//!        v
//!    build()  (+ GIT_MIRROR_* environment)  -->  Settings
//! ```
//!
//! The engine and providers receive `Settings` by value; nothing below the
//! CLI layer reads the environment directly.

use serde::Deserialize;

use crate::error::SettingsError;

/// GitLab provider settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GitlabSettings {
    /// Register the GitLab provider for this run.
    pub enabled: bool,
    /// Numeric namespace id new projects are created under.
    pub namespace: String,
    /// Personal access token with api scope.
    pub token: String,
    /// API base URL, overridable for self-hosted installations.
    pub api_base: String,
}

impl GitlabSettings {
    /// Default GitLab API base URL.
    pub const DEFAULT_API_BASE: &'static str = "https://gitlab.com/api/v4";
}

/// CodeCommit provider settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CodeCommitSettings {
    /// Register the CodeCommit provider for this run.
    pub enabled: bool,
    /// AWS region passed to the aws CLI, if set.
    pub region: Option<String>,
    /// AWS credentials profile passed to the aws CLI, if set.
    pub profile: Option<String>,
}

/// Application settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub gitlab: GitlabSettings,
    pub codecommit: CodeCommitSettings,
}

impl Settings {
    /// Fills defaults and rejects unusable combinations.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidValue`] when the GitLab provider is
    /// enabled without a token or namespace.
    pub fn resolve_and_validate(&mut self) -> std::result::Result<(), SettingsError> {
        if self.gitlab.api_base.is_empty() {
            self.gitlab.api_base = GitlabSettings::DEFAULT_API_BASE.to_string();
        }
        self.gitlab.api_base = self.gitlab.api_base.trim_end_matches('/').to_string();

        if self.gitlab.enabled {
            if self.gitlab.token.is_empty() {
                return Err(SettingsError::InvalidValue {
                    key: "gitlab.token".to_string(),
                    message: "required when the gitlab provider is enabled".to_string(),
                });
            }
            if self.gitlab.namespace.is_empty() {
                return Err(SettingsError::InvalidValue {
                    key: "gitlab.namespace".to_string(),
                    message: "required when the gitlab provider is enabled".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Builder for loading settings from TOML files and the environment.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
        }
    }

    /// Adds a TOML settings file that must exist.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        self.builder = self.builder.add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(true),
        );
        self
    }

    /// Adds a TOML settings file that is skipped when absent.
    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        self.builder = self.builder.add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(false),
        );
        self
    }

    /// Adds inline TOML, mainly for tests.
    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Builds the settings from all added sources plus `GIT_MIRROR_*`
    /// environment variables. A double underscore separates nesting levels
    /// so multi-word keys stay unambiguous, e.g.
    /// `GIT_MIRROR_GITLAB__TOKEN` and `GIT_MIRROR_GITLAB__API_BASE`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required file is missing, a source is invalid
    /// TOML, or validation fails.
    pub fn build(self) -> std::result::Result<Settings, SettingsError> {
        let cfg = self
            .builder
            .add_source(
                config::Environment::with_prefix("GIT_MIRROR")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(SettingsError::Load)?;

        let mut settings: Settings = cfg.try_deserialize().map_err(SettingsError::Load)?;
        settings.resolve_and_validate()?;
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
