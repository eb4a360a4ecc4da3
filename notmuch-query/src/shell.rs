//! # Shell command
//!
//! Module dedicated to running notmuch command lines through the
//! platform shell. It exposes the [`ShellCommand`] struct, the
//! [`RunOptions`] controlling previews and the command [`Output`].

use std::{fmt, ops::Deref};

use tracing::{debug, info};

use crate::{Error, Result};

/// Options of a [`ShellCommand`] run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunOptions {
    /// Print the command line instead of running it.
    pub dry: bool,

    /// Print the command line before running it.
    pub verbose: bool,
}

impl RunOptions {
    pub fn with_dry(mut self, dry: bool) -> Self {
        self.dry = dry;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// The shell command structure.
///
/// Holds a full command line, with arguments already quoted for the
/// shell.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShellCommand(process::Command);

impl ShellCommand {
    pub fn new(cmd: impl ToString) -> Self {
        Self(process::Command::new(cmd))
    }

    /// Builds the line printed by dry and verbose runs, or `None`
    /// when neither is enabled.
    pub fn preview(&self, opts: RunOptions) -> Option<String> {
        if opts.dry || opts.verbose {
            Some(self.to_string())
        } else {
            None
        }
    }

    /// Runs the command line according to the given options.
    ///
    /// Returns `None` for dry runs, since nothing is executed.
    pub async fn run(&self, opts: RunOptions) -> Result<Option<Output>> {
        if let Some(preview) = self.preview(opts) {
            info!(cmd = preview.as_str(), dry = opts.dry, "preview notmuch command");
            println!("{preview}");
        }

        if opts.dry {
            debug!("dry run, skip notmuch command");
            return Ok(None);
        }

        let output = self
            .0
            .run()
            .await
            .map_err(|err| Error::RunCommandError(err, self.to_string()))?;

        Ok(Some(Output(output)))
    }
}

impl Deref for ShellCommand {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

/// Wrapper around notmuch command output.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Output(process::Output);

impl Output {
    /// Reads the command output as string lossy.
    pub fn to_string_lossy(&self) -> String {
        self.0.to_string_lossy()
    }

    /// Reads the non-empty lines of the command output, lossy.
    ///
    /// This matches the default text format of `notmuch search`,
    /// which prints one result per line.
    pub fn lines_lossy(&self) -> Vec<String> {
        self.to_string_lossy()
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(ToOwned::to_owned)
            .collect()
    }
}

impl Deref for Output {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for Output {
    fn from(output: Vec<u8>) -> Self {
        Self(process::Output::from(output))
    }
}

impl TryFrom<Output> for String {
    type Error = Error;

    fn try_from(output: Output) -> Result<Self> {
        String::try_from(output.0).map_err(Error::ParseOutputError)
    }
}
