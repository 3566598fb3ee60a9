use super::ensure_sufficient_stack;

fn nesting_depth(remaining: u32) -> u32 {
    ensure_sufficient_stack(|| {
        if remaining == 0 {
            0
        } else {
            nesting_depth(remaining - 1) + 1
        }
    })
}

#[test]
fn passes_through_the_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| "done"), "done");
}

#[test]
fn propagates_errors_unchanged() {
    let result: Result<u8, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(result, Err("boom".to_string()));
}

#[test]
fn shallow_recursion() {
    assert_eq!(nesting_depth(16), 16);
}

#[test]
fn recursion_deeper_than_the_main_stack() {
    assert_eq!(nesting_depth(200_000), 200_000);
}
