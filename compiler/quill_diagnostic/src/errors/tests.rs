use super::*;
use pretty_assertions::assert_eq;

#[test]
fn docs_start_with_their_code() {
    for code in ErrorCode::ALL {
        let heading = format!("# {}: {}", code, code.summary());
        assert_eq!(ErrorDocs::get(*code).lines().next(), Some(heading.as_str()));
    }
}

#[test]
fn docs_have_a_body() {
    for code in ErrorCode::ALL {
        assert!(
            ErrorDocs::get(*code).lines().skip(1).any(|line| !line.trim().is_empty()),
            "{code} has only a heading"
        );
    }
}
