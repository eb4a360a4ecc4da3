use crate::{
    config::NotmuchConfig,
    expr::Expr,
    shell::{Output, RunOptions},
    Result,
};

use super::NotmuchCommand;

/// The `notmuch tag` command.
///
/// Adds and removes tags on all messages matching the search
/// expression: `notmuch tag +add… -remove… <query>`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TagCommand {
    add: Vec<String>,
    remove: Vec<String>,
    query: Expr,
}

impl TagCommand {
    pub fn new(
        add: impl IntoIterator<Item = impl ToString>,
        remove: impl IntoIterator<Item = impl ToString>,
        query: Expr,
    ) -> Self {
        Self {
            add: add.into_iter().map(|tag| tag.to_string()).collect(),
            remove: remove.into_iter().map(|tag| tag.to_string()).collect(),
            query,
        }
    }

    pub fn add_tag(mut self, tag: impl ToString) -> Self {
        self.add.push(tag.to_string());
        self
    }

    pub fn remove_tag(mut self, tag: impl ToString) -> Self {
        self.remove.push(tag.to_string());
        self
    }

    pub async fn run(&self, config: &NotmuchConfig, opts: RunOptions) -> Result<Option<Output>> {
        super::run(self, config, opts).await
    }
}

impl NotmuchCommand for TagCommand {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn args(&self) -> Vec<String> {
        let add = self.add.iter().map(|tag| format!("+{tag}"));
        let remove = self.remove.iter().map(|tag| format!("-{tag}"));
        add.chain(remove).collect()
    }

    fn query(&self) -> &Expr {
        &self.query
    }
}
