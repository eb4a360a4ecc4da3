//! # Notmuch command
//!
//! Module dedicated to notmuch subcommands taking a search
//! expression. Each subcommand builds its own arguments, this module
//! glues them together with the [`NotmuchConfig`] into a
//! [`ShellCommand`].

mod search;
mod tag;

use tracing::{debug, info};

#[doc(inline)]
pub use self::{search::SearchCommand, tag::TagCommand};
use crate::{
    config::NotmuchConfig,
    expr::Expr,
    shell::{Output, RunOptions, ShellCommand},
    Error, Result,
};

/// The notmuch subcommand abstraction.
pub trait NotmuchCommand {
    /// The subcommand name, for example `tag`.
    fn name(&self) -> &'static str;

    /// The subcommand arguments coming before the search expression,
    /// unquoted.
    fn args(&self) -> Vec<String>;

    /// The search expression the subcommand applies to.
    fn query(&self) -> &Expr;

    /// Builds the full shell command line.
    ///
    /// Every argument is quoted, so the rendered search expression
    /// reaches notmuch as one single argument whatever its content.
    ///
    /// The command line targets POSIX shells (`sh -c`): arguments use
    /// single-quote quoting and configured variables are passed as a
    /// `VAR=value` prefix. Neither is understood by Windows `cmd /C`.
    fn to_shell_command(&self, config: &NotmuchConfig) -> Result<ShellCommand> {
        let mut tokens = Vec::new();

        for (key, val) in config.envs() {
            tokens.push(format!("{key}={}", quote(&val)?));
        }

        tokens.push(config.get_program().to_owned());

        for opt in config.global_options() {
            tokens.push(quote(&opt)?);
        }

        tokens.push(self.name().to_owned());

        for arg in self.args() {
            tokens.push(quote(&arg)?);
        }

        tokens.push(quote(&self.query().render())?);

        let cmd = tokens.join(" ");
        debug!(cmd, "built notmuch {} command", self.name());

        Ok(ShellCommand::new(cmd))
    }
}

/// Builds then runs the given notmuch command.
pub(crate) async fn run(
    cmd: &impl NotmuchCommand,
    config: &NotmuchConfig,
    opts: RunOptions,
) -> Result<Option<Output>> {
    info!("run notmuch {} command", cmd.name());
    cmd.to_shell_command(config)?.run(opts).await
}

/// Quotes the given argument for POSIX shells.
pub(crate) fn quote(arg: &str) -> Result<String> {
    shlex::try_quote(arg)
        .map(|arg| arg.into_owned())
        .map_err(|err| Error::QuoteArgError(arg.to_owned(), err))
}
