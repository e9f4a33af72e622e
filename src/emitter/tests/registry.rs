//! Extension-registry and error-path tests.

use pretty_assertions::assert_eq;

use crate::ast::Node;
use crate::ast::builders::*;
use crate::emitter::{Buffer, Emitter, emit};
use crate::error::{Error, Result};

fn render_now(_: &Emitter, _: &[Node], out: &mut Buffer) -> Result<()> {
    out.append("NOW()");
    Ok(())
}

fn render_paren(emitter: &Emitter, children: &[Node], out: &mut Buffer) -> Result<()> {
    out.append("(");
    emitter.visit(&children[0], out)?;
    out.append(")");
    Ok(())
}

#[test]
fn test_registered_extension_renders() {
    let mut emitter = Emitter::new();
    emitter.register("now", render_now);
    assert_eq!(emitter.emit(&ext("now", [])).unwrap(), "NOW()");
}

#[test]
fn test_extension_renderer_can_recurse() {
    let mut emitter = Emitter::new();
    emitter.register("paren", render_paren);
    let stmt = select([id("name")], id("users"))
        .filter(eq(id("age"), ext("paren", [integer(1)])));
    assert_eq!(
        emitter.emit(&stmt).unwrap(),
        r#"SELECT "name" FROM "users" WHERE "age" = (1)"#
    );
}

#[test]
fn test_reregistering_a_tag_replaces() {
    let mut emitter = Emitter::new();
    emitter.register("now", render_paren);
    emitter.register("now", render_now);
    assert_eq!(emitter.emit(&ext("now", [])).unwrap(), "NOW()");
}

#[test]
fn test_unknown_tag_at_root() {
    let err = emit(&ext("not_supported", [])).unwrap_err();
    assert_eq!(err, Error::UnknownNode("not_supported".into()));
    assert_eq!(err.to_string(), "No emitter for node: :not_supported");
}

#[test]
fn test_unknown_tag_deeply_nested() {
    let stmt = select([id("name")], id("users")).filter(and(
        boolean(true),
        not(ext("not_supported", [])),
    ));
    assert_eq!(
        emit(&stmt).unwrap_err(),
        Error::UnknownNode("not_supported".into())
    );
}

#[test]
fn test_registration_does_not_leak_across_emitters() {
    let mut emitter = Emitter::new();
    emitter.register("now", render_now);
    assert!(emitter.emit(&ext("now", [])).is_ok());
    assert!(emit(&ext("now", [])).is_err());
}

#[test]
fn test_emitter_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Emitter>();
}

#[test]
fn test_trees_of_registered_tags_never_fail() {
    // every built-in kind somewhere in one tree
    let stmt = union([
        select([count(id("id")), max(id("age"))], id("users"))
            .filter(and(
                or(is_null(id("a")), is_not_null(id("b"))),
                between(id("c"), neg(integer(1)), pos(integer(1))),
            ))
            .group_by([id("age")])
            .having(ne(sum(id("x")), float(0.5)))
            .order_by([asc(id("age")), desc(id("id"))]),
        select(
            [id("name")],
            join(id("t"), id("u")).on(eq(
                qualified_id(["t", "k"]),
                qualified_id(["u", "k"]),
            )),
        ),
    ]);
    assert!(emit(&stmt).is_ok());
}
