//! # Search expression
//!
//! Module dedicated to notmuch search expressions (called "search
//! terms" in the notmuch documentation). An [`Expr`] is a tree of
//! boolean operators whose leaves are [`Term`]s, and renders itself
//! to a query string accepted by commands like `notmuch search` and
//! `notmuch tag`.
//!
//! Parentheses are only added around an operand when its
//! [priority](Expr::priority) is strictly lower than the priority of
//! its parent:
//!
//! ```
//! use notmuch_query::expr::{and, from, not, or, to};
//!
//! let expr = and([
//!     or([from("a"), from("b")]).unwrap(),
//!     not(or([to("a"), to("b")]).unwrap()),
//! ])
//! .unwrap();
//!
//! assert_eq!(
//!     expr.render(),
//!     "( from:a or from:b ) and not ( to:a or to:b )"
//! );
//! ```

use std::{fmt, ops};

use tracing::trace;

use crate::{Error, Result};

/// The priority of terms, higher than any operator.
pub const TERM_PRIORITY: u8 = 4;

/// The boolean operators of the notmuch query grammar.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    Or,
    Xor,
    And,
    Not,
}

impl Operator {
    /// Binding strength of the operator, higher binds tighter.
    pub fn priority(&self) -> u8 {
        match self {
            Self::Or | Self::Xor => 1,
            Self::And => 2,
            Self::Not => 3,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::Xor => "xor",
            Self::And => "and",
            Self::Not => "not",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The message fields a [`Term`] can match on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Field {
    From,
    To,
    Subject,
    Tag,
}

impl Field {
    /// The query prefix of the field, without the colon.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::From => "from",
            Self::To => "to",
            Self::Subject => "subject",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// The leaf of a search expression.
///
/// A term renders as `field:value`. The value is inserted verbatim:
/// it is up to the caller to give a value the notmuch query parser
/// understands.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Term {
    field: Field,
    value: String,
}

impl Term {
    pub fn new(field: Field, value: impl ToString) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.value)
    }
}

/// The operands of a n-ary operator.
///
/// Operands can only be built by [`Expr::new`] and its shortcuts,
/// which guarantees they are never empty.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Operands(Vec<Expr>);

impl Operands {
    fn new(op: Operator, exprs: impl IntoIterator<Item = Expr>) -> Result<Self> {
        let exprs: Vec<Expr> = exprs.into_iter().collect();

        if exprs.is_empty() {
            return Err(Error::InvalidExpressionError(op, 0));
        }

        Ok(Self(exprs))
    }
}

impl ops::Deref for Operands {
    type Target = [Expr];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The search expression.
///
/// Expressions are built bottom-up and never mutated afterwards.
/// Rendering is available via [`Expr::render`] or the
/// [`fmt::Display`] implementation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Expr {
    Or(Operands),
    Xor(Operands),
    And(Operands),
    Not(Box<Expr>),
    Term(Term),
}

impl Expr {
    /// Builds an operator expression from the given operands.
    ///
    /// N-ary operators require at least one operand, [`Operator::Not`]
    /// requires exactly one.
    pub fn new(op: Operator, exprs: impl IntoIterator<Item = Expr>) -> Result<Self> {
        match op {
            Operator::Or => Ok(Self::Or(Operands::new(op, exprs)?)),
            Operator::Xor => Ok(Self::Xor(Operands::new(op, exprs)?)),
            Operator::And => Ok(Self::And(Operands::new(op, exprs)?)),
            Operator::Not => {
                let mut exprs = exprs.into_iter();
                match (exprs.next(), exprs.next()) {
                    (Some(expr), None) => Ok(not(expr)),
                    (None, _) => Err(Error::InvalidExpressionError(op, 0)),
                    (Some(_), Some(_)) => Err(Error::InvalidExpressionError(op, 2 + exprs.count())),
                }
            }
        }
    }

    pub fn term(field: Field, value: impl ToString) -> Self {
        Self::Term(Term::new(field, value))
    }

    /// Returns the operator of the expression, or `None` for terms.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::Or(_) => Some(Operator::Or),
            Self::Xor(_) => Some(Operator::Xor),
            Self::And(_) => Some(Operator::And),
            Self::Not(_) => Some(Operator::Not),
            Self::Term(_) => None,
        }
    }

    pub fn priority(&self) -> u8 {
        match self.operator() {
            Some(op) => op.priority(),
            None => TERM_PRIORITY,
        }
    }

    pub fn children(&self) -> &[Expr] {
        match self {
            Self::Or(exprs) | Self::Xor(exprs) | Self::And(exprs) => &**exprs,
            Self::Not(expr) => std::slice::from_ref(expr.as_ref()),
            Self::Term(_) => &[],
        }
    }

    /// Renders the expression to a notmuch query string.
    pub fn render(&self) -> String {
        let query = self.to_string();
        trace!(query, "render notmuch search expression");
        query
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, expr: &Expr) -> fmt::Result {
        if expr.priority() < self.priority() {
            write!(f, "( {expr} )")
        } else {
            write!(f, "{expr}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (op, exprs) = match self {
            Self::Term(term) => return write!(f, "{term}"),
            Self::Not(expr) => {
                write!(f, "{} ", Operator::Not)?;
                return self.fmt_operand(f, expr);
            }
            Self::Or(exprs) => (Operator::Or, exprs),
            Self::Xor(exprs) => (Operator::Xor, exprs),
            Self::And(exprs) => (Operator::And, exprs),
        };

        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                write!(f, " {op} ")?;
            }
            self.fmt_operand(f, expr)?;
        }

        Ok(())
    }
}

impl From<Term> for Expr {
    fn from(term: Term) -> Self {
        Self::Term(term)
    }
}

impl ops::BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Self::Output {
        Self::And(Operands(vec![self, rhs]))
    }
}

impl ops::BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Self::Output {
        Self::Or(Operands(vec![self, rhs]))
    }
}

impl ops::BitXor for Expr {
    type Output = Expr;

    fn bitxor(self, rhs: Expr) -> Self::Output {
        Self::Xor(Operands(vec![self, rhs]))
    }
}

impl ops::Not for Expr {
    type Output = Expr;

    fn not(self) -> Self::Output {
        not(self)
    }
}

pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Result<Expr> {
    Expr::new(Operator::Or, exprs)
}

pub fn xor(exprs: impl IntoIterator<Item = Expr>) -> Result<Expr> {
    Expr::new(Operator::Xor, exprs)
}

pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Result<Expr> {
    Expr::new(Operator::And, exprs)
}

pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(expr))
}

/// Matches messages sent from the given address or name.
pub fn from(addr: impl ToString) -> Expr {
    Expr::term(Field::From, addr)
}

/// Matches messages sent to the given address or name.
pub fn to(addr: impl ToString) -> Expr {
    Expr::term(Field::To, addr)
}

pub fn subject(subject: impl ToString) -> Expr {
    Expr::term(Field::Subject, subject)
}

pub fn tag(tag: impl ToString) -> Expr {
    Expr::term(Field::Tag, tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_renders_field_and_value() {
        assert_eq!(from("a@x.com").render(), "from:a@x.com");
        assert_eq!(to("b@x.com").render(), "to:b@x.com");
        assert_eq!(subject("hello").render(), "subject:hello");
        assert_eq!(tag("inbox").render(), "tag:inbox");
    }

    #[test]
    fn priorities() {
        let term = tag("x");
        let not = !tag("x");
        let and = tag("x") & tag("y");
        let or = tag("x") | tag("y");
        let xor = tag("x") ^ tag("y");

        assert_eq!(term.priority(), 4);
        assert_eq!(not.priority(), 3);
        assert_eq!(and.priority(), 2);
        assert_eq!(or.priority(), 1);
        assert_eq!(xor.priority(), 1);
    }

    #[test]
    fn children() {
        assert!(tag("x").children().is_empty());
        assert_eq!(not(tag("x")).children(), &[tag("x")]);
        assert_eq!(
            or([tag("x"), tag("y"), tag("z")]).unwrap().children(),
            &[tag("x"), tag("y"), tag("z")]
        );
    }

    #[test]
    fn empty_operands() {
        for op in [Operator::Or, Operator::Xor, Operator::And, Operator::Not] {
            match Expr::new(op, []) {
                Err(Error::InvalidExpressionError(err_op, 0)) => assert_eq!(err_op, op),
                res => panic!("unexpected result for {op}: {res:?}"),
            }
        }
    }

    #[test]
    fn not_requires_exactly_one_operand() {
        match Expr::new(Operator::Not, [tag("x"), tag("y"), tag("z")]) {
            Err(Error::InvalidExpressionError(Operator::Not, 3)) => (),
            res => panic!("unexpected result: {res:?}"),
        }

        let expr = Expr::new(Operator::Not, [tag("x")]).unwrap();
        assert_eq!(expr, not(tag("x")));
    }

    #[test]
    fn single_operand_renders_bare() {
        assert_eq!(and([tag("x")]).unwrap().render(), "tag:x");
        assert_eq!(and([or([tag("x")]).unwrap()]).unwrap().render(), "( tag:x )");
    }

    #[test]
    fn operator_sugar() {
        let expr = (from("a") | from("b")) & !(to("a") | to("b"));
        assert_eq!(
            expr.render(),
            "( from:a or from:b ) and not ( to:a or to:b )"
        );

        let expr = tag("x") ^ tag("y");
        assert_eq!(expr.render(), "tag:x xor tag:y");
    }

    #[test]
    fn display_matches_render() {
        let expr = !(tag("x") & subject("y"));
        assert_eq!(expr.to_string(), expr.render());
        assert_eq!(expr.render(), "not ( tag:x and subject:y )");
    }
}
