use super::*;
use pretty_assertions::assert_eq;

fn token(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text, Span::new(4, 5))
}

#[test]
fn messages_describe_the_found_token() {
    let err = ParseError::unexpected("`;`", &token(TokenKind::Identifier, "y"));
    assert_eq!(err.to_string(), "expected `;`, found identifier `y`");

    let err = ParseError::expected_expression(&token(TokenKind::RParen, ")"));
    assert_eq!(err.to_string(), "expected expression, found `)`");

    let err = ParseError::expected_identifier("variable name", &token(TokenKind::Const, "const"));
    assert_eq!(
        err.to_string(),
        "expected variable name, found keyword `const`"
    );

    let eof = Token::new(TokenKind::Eof, "", Span::point(9));
    let err = ParseError::unexpected("`}`", &eof);
    assert_eq!(err.to_string(), "expected `}`, found end of input");
}

#[test]
fn innermost_context_wins() {
    let err = ParseError::expected_expression(&token(TokenKind::Comma, ","))
        .with_context(ErrorContext::CallArguments)
        .with_context(ErrorContext::FunctionDeclaration);
    assert_eq!(err.context, Some(ErrorContext::CallArguments));
}

#[test]
fn diagnostics_carry_codes_and_context_notes() {
    let diag = ParseError::expected_expression(&token(TokenKind::Semicolon, ";"))
        .with_context(ErrorContext::VariableDeclaration)
        .to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1002);
    assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
    assert_eq!(diag.notes, vec!["while parsing a variable declaration"]);
}

#[test]
fn const_without_value_suggests_a_fix() {
    let diag = ParseError::missing_const_initializer("limit".into(), Span::new(6, 11))
        .to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1004);
    assert_eq!(
        diag.message,
        "missing initializer in const declaration of `limit`"
    );
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn every_kind_maps_to_a_parser_code() {
    let dot = token(TokenKind::Dot, ".");
    let errors = [
        ParseError::unexpected("`)`", &dot),
        ParseError::expected_expression(&dot),
        ParseError::expected_identifier("parameter name", &dot),
        ParseError::expected_property_name(&dot),
        ParseError::missing_const_initializer("x".into(), Span::DUMMY),
        ParseError::invalid_number("1", Span::DUMMY),
        ParseError::nesting_too_deep(8, Span::DUMMY),
        ParseError::duplicate_parameter("a".into(), Span::DUMMY, Span::DUMMY),
    ];
    for err in errors {
        assert!(err.code().is_parser_error(), "{err}");
    }
}

#[test]
fn duplicate_parameter_points_at_both_names() {
    let diag = ParseError::duplicate_parameter("a".into(), Span::new(11, 12), Span::new(14, 15))
        .to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E1007);
    assert_eq!(diag.primary_span(), Some(Span::new(14, 15)));
    let secondary: Vec<_> = diag.labels.iter().filter(|l| !l.is_primary()).collect();
    assert_eq!(secondary.len(), 1);
    assert_eq!(secondary[0].span, Span::new(11, 12));
    assert_eq!(secondary[0].message, "first declared here");
}
