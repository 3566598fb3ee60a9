use super::{parse_expr, sexpr};
use pretty_assertions::assert_eq;
use quill_ir::{ExprKind, Span};

fn shape(source: &str) -> String {
    sexpr(&parse_expr(source))
}

#[test]
fn literals() {
    assert_eq!(shape("42"), "42");
    assert_eq!(shape("\"hi there\""), "\"hi there\"");
    assert_eq!(shape("name"), "name");
}

#[test]
fn multiplication_binds_tighter() {
    assert_eq!(shape("1 + 2 * 3"), "(+ 1 (* 2 3))");
    assert_eq!(shape("1 * 2 + 3"), "(+ (* 1 2) 3)");
    assert_eq!(shape("8 % 3 - 1"), "(- (% 8 3) 1)");
}

#[test]
fn parentheses_group_without_a_node() {
    assert_eq!(shape("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(shape("((x))"), "x");
    assert_eq!(parse_expr("(x)").span, Span::new(0, 3));
}

#[test]
fn binary_operators_are_left_associative() {
    assert_eq!(shape("10 - 4 - 3"), "(- (- 10 4) 3)");
    assert_eq!(shape("8 / 4 / 2"), "(/ (/ 8 4) 2)");
}

#[test]
fn comparisons_share_the_additive_level() {
    assert_eq!(shape("3 < 5"), "(< 3 5)");
    assert_eq!(shape("1 + 2 > 2"), "(> (+ 1 2) 2)");
    assert_eq!(shape("a < b + c"), "(+ (< a b) c)");
    assert_eq!(shape("a < b * c"), "(< a (* b c))");
}

#[test]
fn assignment_is_right_associative() {
    assert_eq!(shape("a = b = 1 + 2"), "(= a (= b (+ 1 2)))");
}

#[test]
fn assignment_target_is_not_checked_by_the_parser() {
    assert_eq!(shape("o.x = 1"), "(= (. o x) 1)");
    assert_eq!(shape("f() = 2"), "(= (call f) 2)");
}

#[test]
fn calls_chain() {
    assert_eq!(shape("f()"), "(call f)");
    assert_eq!(shape("f(1)(2)"), "(call (call f 1) 2)");
    assert_eq!(shape("f(a, b + 1, g(c))"), "(call f a (+ b 1) (call g c))");
}

#[test]
fn member_access() {
    assert_eq!(shape("o.prop"), "(. o prop)");
    assert_eq!(shape("o[\"prop\"]"), "([] o \"prop\")");
    assert_eq!(shape("a.b.c"), "(. (. a b) c)");
    assert_eq!(shape("o[k].x"), "(. ([] o k) x)");
}

#[test]
fn member_and_call_mix() {
    assert_eq!(shape("o.f(1)"), "(call (. o f) 1)");
    assert_eq!(shape("f(1).x"), "(. (call f 1) x)");
    assert_eq!(shape("o.f(1)(2).g"), "(. (call (call (. o f) 1) 2) g)");
}

#[test]
fn non_computed_property_is_an_identifier() {
    let expr = parse_expr("o.size");
    let ExprKind::Member {
        property, computed, ..
    } = expr.kind
    else {
        panic!("expected member access");
    };
    assert!(!computed);
    assert_eq!(property.kind, ExprKind::Identifier("size".into()));
    assert_eq!(property.span, Span::new(2, 6));
}

#[test]
fn object_literals() {
    assert_eq!(shape("{}"), "{}");
    assert_eq!(shape("{ x, y: 1 }"), "{x, y: 1}");
    assert_eq!(shape("{ a: 1 + 2, b: { c } }"), "{a: (+ 1 2), b: {c}}");
}

#[test]
fn object_literals_allow_a_trailing_comma() {
    assert_eq!(shape("{ x, }"), "{x}");
    assert_eq!(shape("{ x: 1, }"), "{x: 1}");
}

#[test]
fn object_literal_as_assigned_value() {
    assert_eq!(shape("o = { x, y }"), "(= o {x, y})");
}

#[test]
fn object_literal_as_argument() {
    assert_eq!(shape("print({ n: 1 })"), "(call print {n: 1})");
}

#[test]
fn spans_cover_the_whole_expression() {
    assert_eq!(parse_expr("a + b * c").span, Span::new(0, 9));
    assert_eq!(parse_expr("f(1, 2)").span, Span::new(0, 7));
    assert_eq!(parse_expr("o[\"k\"]").span, Span::new(0, 6));
}
