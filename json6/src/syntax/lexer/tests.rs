//! Tests for the lexer.
#![allow(clippy::indexing_slicing)]

use super::*;
use float_cmp::approx_eq;

fn tokenize(src: &str) -> Vec<Token> {
    Lexer::new(src.as_bytes()).tokenize().expect("failed to lex")
}

fn lex_error(src: &str) -> Error {
    Lexer::new(src.as_bytes())
        .tokenize()
        .expect_err("lexing should have failed")
}

fn span(start: (u32, u32), end: (u32, u32)) -> Span {
    Span::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
}

fn integer(token: &Token) -> i64 {
    match token.kind() {
        TokenKind::NumericLiteral(Numeric::Integer(num)) => *num,
        other => panic!("expected an integer token, got {other:?}"),
    }
}

fn rational(token: &Token) -> f64 {
    match token.kind() {
        TokenKind::NumericLiteral(Numeric::Rational(num)) => *num,
        other => panic!("expected a rational token, got {other:?}"),
    }
}

#[test]
fn check_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("  \t\n  ").is_empty());
}

#[test]
fn check_punctuators() {
    let tokens = tokenize("{ } [ ] : ,");
    assert_eq!(tokens[0].kind(), &TokenKind::Punctuator(Punctuator::OpenBlock));
    assert_eq!(tokens[1].kind(), &TokenKind::Punctuator(Punctuator::CloseBlock));
    assert_eq!(
        tokens[2].kind(),
        &TokenKind::Punctuator(Punctuator::OpenBracket)
    );
    assert_eq!(
        tokens[3].kind(),
        &TokenKind::Punctuator(Punctuator::CloseBracket)
    );
    assert_eq!(tokens[4].kind(), &TokenKind::Punctuator(Punctuator::Colon));
    assert_eq!(tokens[5].kind(), &TokenKind::Punctuator(Punctuator::Comma));
    assert_eq!(tokens.len(), 6);
}

#[test]
fn check_single_line_comment() {
    let tokens = tokenize("// a comment\n42");
    assert_eq!(tokens[0].kind(), &TokenKind::Comment);
    assert_eq!(tokens[0].raw(), "// a comment");
    assert_eq!(integer(&tokens[1]), 42);
}

#[test]
fn check_single_line_comment_at_eof() {
    let tokens = tokenize("// a comment");
    assert_eq!(tokens[0].kind(), &TokenKind::Comment);
    assert_eq!(tokens.len(), 1);
}

#[test]
fn check_multi_line_comment() {
    let tokens = tokenize("/* first \n second */ 7");
    assert_eq!(tokens[0].kind(), &TokenKind::Comment);
    assert_eq!(tokens[0].raw(), "/* first \n second */");
    assert_eq!(integer(&tokens[1]), 7);
}

#[test]
fn check_unterminated_multi_line_comment() {
    assert!(matches!(
        lex_error("/* never closed"),
        Error::UnexpectedEof { .. }
    ));
}

#[test]
fn check_comment_needs_second_slash_or_star() {
    assert!(matches!(lex_error("/x"), Error::InvalidChar { found: 'x', .. }));
}

#[test]
fn check_keywords() {
    let tokens = tokenize("true false null undefined");
    assert_eq!(tokens[0].kind(), &TokenKind::BooleanLiteral(true));
    assert_eq!(tokens[1].kind(), &TokenKind::BooleanLiteral(false));
    assert_eq!(tokens[2].kind(), &TokenKind::NullLiteral);
    assert_eq!(tokens[3].kind(), &TokenKind::UndefinedLiteral);
}

#[test]
fn check_keyword_fallback_to_identifier() {
    // A diverging keyword attempt keeps every consumed character.
    let tokens = tokenize("nullx tru falsey undefine Infin NaNo");
    assert_eq!(tokens[0].kind(), &TokenKind::identifier("nullx"));
    assert_eq!(tokens[1].kind(), &TokenKind::identifier("tru"));
    assert_eq!(tokens[2].kind(), &TokenKind::identifier("falsey"));
    assert_eq!(tokens[3].kind(), &TokenKind::identifier("undefine"));
    assert_eq!(tokens[4].kind(), &TokenKind::identifier("Infin"));
    assert_eq!(tokens[5].kind(), &TokenKind::identifier("NaNo"));
}

#[test]
fn check_keyword_ended_by_punctuator() {
    let tokens = tokenize("null{");
    assert_eq!(tokens[0].kind(), &TokenKind::NullLiteral);
    assert_eq!(tokens[1].kind(), &TokenKind::Punctuator(Punctuator::OpenBlock));
}

#[test]
fn check_keyword_ended_by_comment() {
    let tokens = tokenize("false//comment");
    assert_eq!(tokens[0].kind(), &TokenKind::BooleanLiteral(false));
    assert_eq!(tokens[1].kind(), &TokenKind::Comment);
}

#[test]
fn check_escaped_keyword_is_identifier() {
    // A word assembled with escapes never becomes a keyword.
    let tokens = tokenize("tru\\u0065");
    assert_eq!(tokens[0].kind(), &TokenKind::identifier("true"));
    assert_eq!(tokens[0].raw(), "tru\\u0065");
}

#[test]
fn check_identifiers() {
    let tokens = tokenize("$_foo \\u0041bc \\u{1D538}x épée");
    assert_eq!(tokens[0].kind(), &TokenKind::identifier("$_foo"));
    assert_eq!(tokens[1].kind(), &TokenKind::identifier("Abc"));
    assert_eq!(tokens[2].kind(), &TokenKind::identifier("\u{1D538}x"));
    assert_eq!(tokens[3].kind(), &TokenKind::identifier("épée"));
}

#[test]
fn check_identifier_invalid_start() {
    assert!(matches!(lex_error("@foo"), Error::InvalidChar { found: '@', .. }));
}

#[test]
fn check_identifier_invalid_part() {
    assert!(matches!(lex_error("foo#"), Error::InvalidChar { found: '#', .. }));
}

#[test]
fn check_identifier_escape_must_be_unicode() {
    assert!(matches!(lex_error("\\x41"), Error::InvalidChar { found: 'x', .. }));
}

#[test]
fn check_identifier_escape_must_decode_to_identifier_char() {
    // U+0035 is a digit, which cannot start an identifier.
    assert!(matches!(lex_error("\\u0035x"), Error::InvalidChar { .. }));
}

#[test]
fn check_string_quote_kinds() {
    let tokens = tokenize("'aaa' \"bbb\" `ccc`");
    assert_eq!(tokens[0].kind(), &TokenKind::string_literal("aaa"));
    assert_eq!(tokens[1].kind(), &TokenKind::string_literal("bbb"));
    assert_eq!(tokens[2].kind(), &TokenKind::string_literal("ccc"));
    assert_eq!(tokens[0].raw(), "'aaa'");
}

#[test]
fn check_string_other_quotes_are_literal() {
    let tokens = tokenize("'a\"b`c'");
    assert_eq!(tokens[0].kind(), &TokenKind::string_literal("a\"b`c"));
}

#[test]
fn check_string_escapes() {
    let tokens = tokenize(r"'\a\b\f\n\r\t\v\0\\\q'");
    assert_eq!(
        tokens[0].kind(),
        &TokenKind::string_literal("\u{7}\u{8}\u{c}\n\r\t\u{b}\0\\q")
    );
}

#[test]
fn check_string_hex_and_unicode_escapes() {
    let tokens = tokenize(r"'hello\u{1F600}\x21'");
    assert_eq!(tokens[0].kind(), &TokenKind::string_literal("hello\u{1F600}!"));
}

#[test]
fn check_string_surrogate_pair_escapes() {
    // Two escapes forming a surrogate pair decode to one character.
    let tokens = tokenize(r"'\ud83d\ude00'");
    assert_eq!(tokens[0].kind(), &TokenKind::string_literal("\u{1F600}"));
}

#[test]
fn check_string_lone_surrogate_escape() {
    let tokens = tokenize(r"'\ud83d'");
    assert_eq!(tokens[0].kind(), &TokenKind::string_literal("\u{FFFD}"));
}

#[test]
fn check_string_line_continuations() {
    let tokens = tokenize("'a\\\nb' 'c\\\r\nd' 'e\\\u{2028}f'");
    assert_eq!(tokens[0].kind(), &TokenKind::string_literal("ab"));
    assert_eq!(tokens[1].kind(), &TokenKind::string_literal("cd"));
    assert_eq!(tokens[2].kind(), &TokenKind::string_literal("ef"));
}

#[test]
fn check_string_preserves_raw_newlines() {
    let tokens = tokenize("`a\nb` 'c\nd'");
    assert_eq!(tokens[0].kind(), &TokenKind::string_literal("a\nb"));
    assert_eq!(tokens[1].kind(), &TokenKind::string_literal("c\nd"));
}

#[test]
fn check_unterminated_string() {
    assert!(matches!(lex_error("'abc"), Error::UnexpectedEof { .. }));
    assert!(matches!(lex_error("\"abc"), Error::UnexpectedEof { .. }));
    assert!(matches!(lex_error("`abc"), Error::UnexpectedEof { .. }));
}

#[test]
fn check_string_invalid_hex_escape() {
    assert!(matches!(lex_error(r"'\xg1'"), Error::InvalidChar { found: 'g', .. }));
}

#[test]
fn check_string_code_point_out_of_range() {
    assert!(matches!(lex_error(r"'\u{110000}'"), Error::InvalidChar { .. }));
}

#[test]
fn check_hexadecimal_literals() {
    assert_eq!(integer(&tokenize("0x123")[0]), 291);
    assert_eq!(integer(&tokenize("0X123")[0]), 291);
    assert_eq!(integer(&tokenize("0x1_2_3")[0]), 291);
}

#[test]
fn check_binary_literals() {
    assert_eq!(integer(&tokenize("0b1_01_0_10_1_0")[0]), 170);
    assert_eq!(integer(&tokenize("0B10101010")[0]), 170);
}

#[test]
fn check_octal_literals() {
    assert_eq!(integer(&tokenize("0o123")[0]), 83);
    assert_eq!(integer(&tokenize("0O123")[0]), 83);
}

#[test]
fn check_number_signs() {
    assert_eq!(integer(&tokenize("---123")[0]), -123);
    assert_eq!(integer(&tokenize("--123")[0]), 123);
    assert_eq!(integer(&tokenize("+123")[0]), 123);
    assert_eq!(integer(&tokenize("-0x4")[0]), -4);
}

#[test]
fn check_zero_literals() {
    assert_eq!(integer(&tokenize("0")[0]), 0);
    assert_eq!(integer(&tokenize("-0")[0]), 0);
    assert_eq!(integer(&tokenize("0123")[0]), 123);
}

#[test]
fn check_rational_literals() {
    assert_eq!(rational(&tokenize(".5")[0]), 0.5);
    assert_eq!(rational(&tokenize("0.5")[0]), 0.5);
    assert_eq!(rational(&tokenize("5e-1")[0]), 0.5);
    assert_eq!(rational(&tokenize("123.")[0]), 123.0);
    assert_eq!(rational(&tokenize("5.e3")[0]), 5000.0);
    assert_eq!(rational(&tokenize("0e5")[0]), 0.0);
    assert_eq!(rational(&tokenize("1_0.2_5e1_0")[0]), 10.25e10);
    assert!(approx_eq!(f64, rational(&tokenize(".1e2")[0]), 10.0, ulps = 2));
}

#[test]
fn check_infinity_and_nan() {
    assert_eq!(rational(&tokenize("Infinity")[0]), f64::INFINITY);
    assert_eq!(rational(&tokenize("-Infinity")[0]), f64::NEG_INFINITY);
    assert_eq!(rational(&tokenize("+Infinity")[0]), f64::INFINITY);
    assert_eq!(rational(&tokenize("--Infinity")[0]), f64::INFINITY);
    assert!(rational(&tokenize("NaN")[0]).is_nan());
    assert!(rational(&tokenize("-NaN")[0]).is_nan());
    assert!(rational(&tokenize("+NaN")[0]).is_nan());
}

#[test]
fn check_signed_infinity_must_complete() {
    assert!(matches!(lex_error("-Infin"), Error::UnexpectedEof { .. }));
    assert!(matches!(lex_error("-Infinityy"), Error::InvalidChar { .. }));
    assert!(matches!(lex_error("+NaNaN"), Error::InvalidChar { .. }));
}

#[test]
fn check_separator_placement() {
    assert!(matches!(lex_error("5__0"), Error::InvalidChar { found: '_', .. }));
    assert!(matches!(lex_error("5_"), Error::UnexpectedEof { .. }));
    assert!(matches!(lex_error("5_ "), Error::InvalidChar { .. }));
    assert!(matches!(lex_error("0x_1"), Error::InvalidChar { .. }));
    assert!(matches!(lex_error("1_.5"), Error::InvalidChar { .. }));
    assert!(matches!(lex_error("1._5"), Error::InvalidChar { .. }));
    assert!(matches!(lex_error("1e_5"), Error::InvalidChar { .. }));
}

#[test]
fn check_number_end_of_value() {
    // A comment may directly terminate a number.
    let tokens = tokenize("123/*c*/");
    assert_eq!(integer(&tokens[0]), 123);
    assert_eq!(tokens[1].kind(), &TokenKind::Comment);

    assert!(matches!(lex_error("12x"), Error::InvalidChar { found: 'x', .. }));
    assert!(matches!(lex_error("1.2.3"), Error::InvalidChar { .. }));
}

#[test]
fn check_sign_needs_numeric_begin() {
    assert!(matches!(lex_error("-x"), Error::InvalidChar { found: 'x', .. }));
    assert!(matches!(lex_error("+-5"), Error::InvalidChar { found: '-', .. }));
    assert!(matches!(lex_error("-"), Error::UnexpectedEof { .. }));
    assert!(matches!(lex_error("."), Error::UnexpectedEof { .. }));
    assert!(matches!(lex_error(".e3"), Error::InvalidChar { found: 'e', .. }));
}

#[test]
fn check_integer_out_of_range() {
    assert!(matches!(
        lex_error("0xFFFFFFFFFFFFFFFF"),
        Error::NumberOutOfRange { .. }
    ));
    assert!(matches!(
        lex_error("9223372036854775808"),
        Error::NumberOutOfRange { .. }
    ));
}

#[test]
fn check_integer_range_bounds() {
    assert_eq!(integer(&tokenize("9223372036854775807")[0]), i64::MAX);
    assert_eq!(integer(&tokenize("-9223372036854775808")[0]), i64::MIN);
    assert_eq!(integer(&tokenize("0x7FFF_FFFF_FFFF_FFFF")[0]), i64::MAX);
}

#[test]
fn check_exotic_whitespace() {
    let tokens = tokenize("\u{00A0}\u{FEFF}\u{2003}\u{000B}1");
    assert_eq!(integer(&tokens[0]), 1);
    assert_eq!(tokens.len(), 1);
}

#[test]
fn check_spans() {
    let tokens = tokenize("-3000");
    assert_eq!(tokens[0].span(), span((1, 1), (1, 6)));

    let tokens = tokenize("{a: 1}");
    assert_eq!(tokens[0].span(), span((1, 1), (1, 2)));
    assert_eq!(tokens[1].span(), span((1, 2), (1, 3)));
    assert_eq!(tokens[2].span(), span((1, 3), (1, 4)));
    assert_eq!(tokens[3].span(), span((1, 5), (1, 6)));
    assert_eq!(tokens[4].span(), span((1, 6), (1, 7)));
}

#[test]
fn check_tokens_do_not_overlap() {
    let tokens = tokenize("{ a: [1, 'two', /*3*/ null], b: 0x4 }");
    for pair in tokens.windows(2) {
        assert!(pair[0].span().end() <= pair[1].span().start());
    }
}

#[test]
fn check_line_terminators() {
    let tokens = tokenize("a\nb\r\nc\rd\u{2028}e\u{2029}f");
    let lines: Vec<u32> = tokens
        .iter()
        .map(|token| token.span().start().line_number())
        .collect();
    assert_eq!(lines, vec![1, 2, 3, 4, 5, 6]);
    // Every identifier starts its line at column one.
    assert!(tokens
        .iter()
        .skip(1)
        .all(|token| token.span().start().column_number() == 1));
}

#[test]
fn check_multi_line_string_spans() {
    let tokens = tokenize("`a\nb` c");
    assert_eq!(tokens[0].span(), span((1, 1), (2, 3)));
    assert_eq!(tokens[1].span(), span((2, 4), (2, 5)));
}

#[test]
fn check_ignore_errors_resumes() {
    let mut lexer = Lexer::new(&b"12x 34"[..]);
    lexer.ignore_errors(true);
    let tokens = lexer.tokenize().expect("lenient mode should not fail");
    assert_eq!(tokens.len(), 1);
    assert_eq!(integer(&tokens[0]), 34);
}

#[test]
fn check_malformed_utf8_is_fatal() {
    let mut lexer = Lexer::new(&b"'\xFF'"[..]);
    lexer.ignore_errors(true);
    assert!(matches!(lexer.tokenize(), Err(Error::Io(_))));
}

#[test]
fn check_number_raw_text() {
    let tokens = tokenize("--0x1_2");
    assert_eq!(tokens[0].raw(), "--0x1_2");
    assert_eq!(integer(&tokens[0]), 18);
}
