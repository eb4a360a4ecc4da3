//! Rust library to build [notmuch] search queries and run notmuch
//! commands against them.
//!
//! The core concept of this library is the search [`Expr`]ession, a
//! tree of boolean operators (`and`, `or`, `xor`, `not`) whose leaves
//! are `field:value` terms. Expressions render to query strings with
//! the minimum amount of parentheses.
//!
//! Rendered expressions are then fed to notmuch subcommands:
//!
//! - [`TagCommand`] to add and remove tags on matching messages;
//! - [`SearchCommand`] to search matching threads or messages.
//!
//! Commands are executed asynchronously through the platform shell,
//! using the [tokio] async runtime by default (or [async-std] via
//! the `async-std` cargo feature).
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> notmuch_query::Result<()> {
//! use notmuch_query::{
//!     expr::{from, to},
//!     NotmuchConfig, RunOptions, TagCommand,
//! };
//!
//! let addrs = ["me@localhost", "me@remotehost"];
//! let from_me = notmuch_query::expr::or(addrs.iter().map(from))?;
//! let to_me = notmuch_query::expr::or(addrs.iter().map(to))?;
//!
//! TagCommand::new(["sent"], ["inbox", "unread"], from_me & !to_me)
//!     .run(&NotmuchConfig::default(), RunOptions::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! [notmuch]: https://notmuchmail.org/
//! [tokio]: https://crates.io/crates/tokio
//! [async-std]: https://crates.io/crates/async-std

pub mod command;
pub mod config;
mod error;
pub mod expr;
pub mod shell;

#[doc(inline)]
pub use crate::{
    command::{NotmuchCommand, SearchCommand, TagCommand},
    config::NotmuchConfig,
    error::{Error, Result},
    expr::{Expr, Field, Operator, Term},
    shell::{Output, RunOptions, ShellCommand},
};
