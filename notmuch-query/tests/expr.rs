use notmuch_query::{
    expr::{and, from, not, or, subject, tag, to, xor},
    Error, Expr, Operator,
};

/// Checks recursively that every child is parenthesized in its
/// parent rendering if and only if it binds looser than its parent.
fn assert_minimal_parens(expr: &Expr) {
    let rendered = expr.render();

    for child in expr.children() {
        let wrapped = format!("( {child} )");

        if child.priority() < expr.priority() {
            assert!(rendered.contains(&wrapped), "{wrapped} not in {rendered}");
        } else {
            assert!(!rendered.contains(&wrapped), "{wrapped} in {rendered}");
        }

        assert_minimal_parens(child);
    }
}

#[test]
fn or_of_senders() {
    let expr = or([from("a@x.com"), from("b@x.com")]).unwrap();
    assert_eq!(expr.render(), "from:a@x.com or from:b@x.com");
}

#[test]
fn from_me_but_not_to_me() {
    let expr = and([
        or([from("a"), from("b")]).unwrap(),
        not(or([to("a"), to("b")]).unwrap()),
    ])
    .unwrap();

    assert_eq!(
        expr.render(),
        "( from:a or from:b ) and not ( to:a or to:b )"
    );
    assert_minimal_parens(&expr);
}

#[test]
fn empty_and() {
    match and([]) {
        Err(Error::InvalidExpressionError(Operator::And, 0)) => (),
        res => panic!("unexpected result: {res:?}"),
    }
}

#[test]
fn not_of_term() {
    assert_eq!(not(tag("inbox")).render(), "not tag:inbox");
}

#[test]
fn nested_same_priority_is_flat() {
    let expr = and([and([tag("x"), tag("y")]).unwrap(), tag("z")]).unwrap();
    assert_eq!(expr.render(), "tag:x and tag:y and tag:z");

    let expr = or([tag("x"), xor([tag("y"), tag("z")]).unwrap()]).unwrap();
    assert_eq!(expr.render(), "tag:x or tag:y xor tag:z");

    let expr = not(not(tag("x")));
    assert_eq!(expr.render(), "not not tag:x");
}

#[test]
fn chained_xor_is_flat() {
    let expr = xor([xor([tag("a"), tag("b")]).unwrap(), tag("c")]).unwrap();
    assert_eq!(expr.render(), "tag:a xor tag:b xor tag:c");

    let expr = (tag("a") ^ tag("b")) ^ tag("c");
    assert_eq!(expr.render(), "tag:a xor tag:b xor tag:c");
    assert_minimal_parens(&expr);
}

#[test]
fn higher_priority_children_are_bare() {
    let expr = or([and([tag("x"), tag("y")]).unwrap(), not(tag("z"))]).unwrap();
    assert_eq!(expr.render(), "tag:x and tag:y or not tag:z");
    assert_minimal_parens(&expr);
}

#[test]
fn lower_priority_children_are_wrapped() {
    let expr = not(and([subject("hello"), tag("unread")]).unwrap());
    assert_eq!(expr.render(), "not ( subject:hello and tag:unread )");

    let expr = and([
        xor([tag("a"), tag("b")]).unwrap(),
        or([tag("c"), tag("d")]).unwrap(),
        tag("e"),
    ])
    .unwrap();
    assert_eq!(
        expr.render(),
        "( tag:a xor tag:b ) and ( tag:c or tag:d ) and tag:e"
    );
    assert_minimal_parens(&expr);
}

#[test]
fn deep_tree() {
    let expr = (tag("inbox") & !(from("boss") | subject("urgent"))) | (tag("todo") ^ tag("done"));
    assert_eq!(
        expr.render(),
        "tag:inbox and not ( from:boss or subject:urgent ) or tag:todo xor tag:done"
    );
    assert_minimal_parens(&expr);
}

#[test]
fn render_is_deterministic() {
    let expr = and([
        or([from("a"), from("b")]).unwrap(),
        not(or([to("a"), to("b")]).unwrap()),
    ])
    .unwrap();

    assert_eq!(expr.render(), expr.render());
    assert_eq!(expr.clone().render(), expr.render());
}

#[test]
fn operands_are_inserted_verbatim() {
    assert_eq!(subject("\"hello world\"").render(), "subject:\"hello world\"");
    assert_eq!(from("").render(), "from:");
}
