use crate::{
    config::NotmuchConfig,
    expr::Expr,
    shell::{Output, RunOptions},
    Result,
};

use super::NotmuchCommand;

/// The `notmuch search` command.
///
/// Options are passed as `--key=value` pairs, in insertion order:
/// `notmuch search --key=value… <query>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchCommand {
    options: Vec<(String, String)>,
    query: Expr,
}

impl SearchCommand {
    pub fn new(query: Expr) -> Self {
        Self {
            options: Vec::new(),
            query,
        }
    }

    pub fn with_option(mut self, key: impl ToString, value: impl ToString) -> Self {
        self.options.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_options(
        mut self,
        options: impl IntoIterator<Item = (impl ToString, impl ToString)>,
    ) -> Self {
        for (key, value) in options {
            self = self.with_option(key, value);
        }
        self
    }

    pub async fn run(&self, config: &NotmuchConfig, opts: RunOptions) -> Result<Option<Output>> {
        super::run(self, config, opts).await
    }
}

impl NotmuchCommand for SearchCommand {
    fn name(&self) -> &'static str {
        "search"
    }

    fn args(&self) -> Vec<String> {
        self.options
            .iter()
            .map(|(key, value)| format!("--{key}={value}"))
            .collect()
    }

    fn query(&self) -> &Expr {
        &self.query
    }
}
