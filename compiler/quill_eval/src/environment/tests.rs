use super::*;
use pretty_assertions::assert_eq;

fn name(s: &str) -> Name {
    s.into()
}

#[test]
fn declare_then_lookup() {
    let env = Environment::new();
    assert_eq!(
        env.declare(name("x"), Value::Number(5.0), Mutability::Mutable),
        Ok(())
    );
    assert_eq!(env.lookup("x"), Some(Value::Number(5.0)));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn redeclaring_in_the_same_frame_fails() {
    let env = Environment::new();
    env.declare(name("x"), Value::Null, Mutability::Mutable)
        .unwrap_or_else(|_| panic!("first declaration"));
    assert_eq!(
        env.declare(name("x"), Value::Number(1.0), Mutability::Mutable),
        Err(AlreadyDeclared)
    );
    assert_eq!(env.lookup("x"), Some(Value::Null));
}

#[test]
fn child_frames_shadow_and_see_through() {
    let root = Environment::new();
    root.define(name("x"), Value::Number(1.0), Mutability::Mutable);
    root.define(name("y"), Value::Number(2.0), Mutability::Mutable);

    let child = root.child();
    assert_eq!(
        child.declare(name("x"), Value::Number(10.0), Mutability::Mutable),
        Ok(())
    );
    assert_eq!(child.lookup("x"), Some(Value::Number(10.0)));
    assert_eq!(child.lookup("y"), Some(Value::Number(2.0)));
    assert_eq!(root.lookup("x"), Some(Value::Number(1.0)));
    assert!(child.is_declared_here("x"));
    assert!(!child.is_declared_here("y"));
}

#[test]
fn child_bindings_are_invisible_to_the_parent() {
    let root = Environment::new();
    let child = root.child();
    child.define(name("local"), Value::Boolean(true), Mutability::Mutable);
    assert_eq!(root.lookup("local"), None);
}

#[test]
fn assign_updates_the_nearest_binding() {
    let root = Environment::new();
    root.define(name("x"), Value::Number(1.0), Mutability::Mutable);
    let child = root.child();

    assert_eq!(child.assign("x", Value::Number(2.0)), Ok(()));
    assert_eq!(root.lookup("x"), Some(Value::Number(2.0)));

    child.define(name("x"), Value::Number(3.0), Mutability::Mutable);
    assert_eq!(child.assign("x", Value::Number(4.0)), Ok(()));
    assert_eq!(child.lookup("x"), Some(Value::Number(4.0)));
    assert_eq!(root.lookup("x"), Some(Value::Number(2.0)));
}

#[test]
fn assign_errors() {
    let root = Environment::new();
    root.define(name("c"), Value::Number(1.0), Mutability::Constant);
    let child = root.child();

    assert_eq!(
        child.assign("c", Value::Number(2.0)),
        Err(AssignError::Constant)
    );
    assert_eq!(
        child.assign("missing", Value::Null),
        Err(AssignError::Undefined)
    );
    assert_eq!(root.lookup("c"), Some(Value::Number(1.0)));
}

#[test]
fn mutability_follows_the_nearest_binding() {
    let root = Environment::new();
    root.define(name("x"), Value::Null, Mutability::Constant);
    let child = root.child();
    assert_eq!(child.mutability("x"), Some(Mutability::Constant));

    child.define(name("x"), Value::Null, Mutability::Mutable);
    assert_eq!(child.mutability("x"), Some(Mutability::Mutable));
    assert_eq!(child.mutability("nope"), None);
}

#[test]
fn clones_share_the_frame() {
    let env = Environment::new();
    let alias = env.clone();
    alias.define(name("x"), Value::Number(7.0), Mutability::Mutable);
    assert_eq!(env.lookup("x"), Some(Value::Number(7.0)));
    assert!(env.ptr_eq(&alias));
    assert!(!env.ptr_eq(&env.child()));
}

#[test]
fn parent_link() {
    let root = Environment::new();
    let child = root.child();
    assert!(root.parent().is_none());
    assert!(child.parent().is_some_and(|p| p.ptr_eq(&root)));
}

#[test]
fn frames_outlive_the_handle_that_created_them() {
    let captured = {
        let root = Environment::new();
        root.define(name("kept"), Value::string("alive"), Mutability::Constant);
        root.child()
    };
    assert_eq!(captured.lookup("kept"), Some(Value::string("alive")));
}
