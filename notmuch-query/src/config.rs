//! # Config
//!
//! Module dedicated to the notmuch command configuration.

use std::path::PathBuf;

use shellexpand_utils::shellexpand_path;

/// The default notmuch program.
pub const DEFAULT_PROGRAM: &str = "notmuch";

/// The notmuch command configuration.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub struct NotmuchConfig {
    /// Override the notmuch program.
    ///
    /// The program is inserted as it is at the beginning of the
    /// command line, which allows wrappers like `ssh host notmuch`.
    /// Defaults to [`DEFAULT_PROGRAM`].
    pub program: Option<String>,

    /// Override the default notmuch configuration file path.
    ///
    /// Path is shell-expanded, which means environment variables and
    /// tilde `~` are replaced by their values.
    pub config_path: Option<PathBuf>,

    /// Override the notmuch database path.
    ///
    /// Path is shell-expanded, then exposed to notmuch via the
    /// `NOTMUCH_DATABASE` environment variable.
    #[cfg_attr(feature = "derive", serde(alias = "db-path"))]
    pub database_path: Option<PathBuf>,

    /// Override the default notmuch profile name.
    pub profile: Option<String>,
}

impl NotmuchConfig {
    pub fn get_program(&self) -> &str {
        self.program.as_deref().unwrap_or(DEFAULT_PROGRAM)
    }

    /// Find the shell-expanded notmuch configuration path.
    pub fn find_config_path(&self) -> Option<PathBuf> {
        self.config_path.as_ref().map(shellexpand_path)
    }

    /// Find the shell-expanded notmuch database path.
    pub fn find_database_path(&self) -> Option<PathBuf> {
        self.database_path.as_ref().map(shellexpand_path)
    }

    pub fn find_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Environment variables to prefix the command line with.
    pub(crate) fn envs(&self) -> Vec<(&'static str, String)> {
        let mut envs = Vec::new();

        if let Some(path) = self.find_database_path() {
            envs.push(("NOTMUCH_DATABASE", path.to_string_lossy().to_string()));
        }

        if let Some(profile) = self.find_profile() {
            envs.push(("NOTMUCH_PROFILE", profile.to_owned()));
        }

        envs
    }

    /// Global options to insert between the program and the
    /// subcommand.
    pub(crate) fn global_options(&self) -> Vec<String> {
        let mut opts = Vec::new();

        if let Some(path) = self.find_config_path() {
            opts.push(format!("--config={}", path.to_string_lossy()));
        }

        opts
    }
}
