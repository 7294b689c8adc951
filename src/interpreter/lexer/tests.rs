use pretty_assertions::assert_eq;
use crate::interpreter::logger::CapturingLogger;
use super::*;

fn scan(source: &str) -> (Vec<Token>, Rc<CapturingLogger>) {
    let logger = Rc::new(CapturingLogger::new());
    let tokens = Lexer::new(source, Rc::clone(&logger) as Rc<dyn Logger>).scan_tokens();
    (tokens, logger)
}

fn types(tokens: &[Token]) -> Vec<TokenType> {
    tokens.iter().map(Token::token_type).collect()
}

#[test]
fn empty_input_is_only_eof() {
    let (tokens, logger) = scan("");

    assert_eq!(vec![TokenType::Eof], types(&tokens));
    assert!(logger.errors().is_empty());
}

#[test]
fn scans_a_command() {
    let (tokens, logger) = scan("(add 12 \"ab c\" x2)");

    assert_eq!(vec![
        TokenType::ParenthesisLeft,
        TokenType::Identifier, TokenType::Number, TokenType::String, TokenType::Identifier,
        TokenType::ParenthesisRight,
        TokenType::Eof,
    ], types(&tokens));

    assert_eq!(Some(&Literal::Identifier(String::from("add"))), tokens[1].literal());
    assert_eq!(Some(&Literal::Number(12)), tokens[2].literal());
    assert_eq!(Some(&Literal::String(String::from("ab c"))), tokens[3].literal());
    assert_eq!(Some(&Literal::Identifier(String::from("x2"))), tokens[4].literal());
    assert_eq!(None, tokens[0].literal());
    assert!(logger.errors().is_empty());
}

#[test]
fn digit_and_letter_runs_are_greedy() {
    let (tokens, _) = scan("123abc4");

    assert_eq!(vec![TokenType::Number, TokenType::Identifier, TokenType::Eof], types(&tokens));
    assert_eq!(Some(&Literal::Number(123)), tokens[0].literal());
    assert_eq!(Some(&Literal::Identifier(String::from("abc4"))), tokens[1].literal());
}

#[test]
fn strings_are_kept_raw() {
    let (tokens, _) = scan("\"a\\n(b)\"");

    assert_eq!(Some(&Literal::String(String::from("a\\n(b)"))), tokens[0].literal());
}

#[test]
fn newlines_advance_the_line() {
    let (tokens, _) = scan("(print\n\t1\r\n  \"x\")");

    let lines: Vec<i32> = tokens.iter().map(Token::line).collect();
    assert_eq!(vec![1, 1, 2, 3, 3, 3], lines);
}

#[test]
fn unterminated_string_is_dropped() {
    let (tokens, logger) = scan("(\"abc");

    assert_eq!(vec![TokenType::ParenthesisLeft, TokenType::Eof], types(&tokens));
    assert_eq!(1, logger.errors().len());
    assert!(logger.errors()[0].contains("Unterminated string"));
}

#[test]
fn unknown_characters_are_skipped() {
    let (tokens, logger) = scan("(a # b_c)");

    assert_eq!(vec![
        TokenType::ParenthesisLeft,
        TokenType::Identifier, TokenType::Identifier, TokenType::Identifier,
        TokenType::ParenthesisRight,
        TokenType::Eof,
    ], types(&tokens));

    assert_eq!(vec![
        String::from("[line 1 column 4] Unknown character '#'"),
        String::from("[line 1 column 7] Unknown character '_'"),
    ], logger.errors());
}

#[test]
fn non_ascii_input_does_not_split_characters() {
    let (tokens, logger) = scan("(\"é\" ü 1)");

    assert_eq!(Some(&Literal::String(String::from("é"))), tokens[1].literal());
    assert_eq!(Some(&Literal::Number(1)), tokens[2].literal());
    assert_eq!(1, logger.errors().len());
}

#[test]
fn number_out_of_range_is_reported() {
    let (tokens, logger) = scan("99999999999999999999");

    assert_eq!(vec![TokenType::Eof], types(&tokens));
    assert_eq!(1, logger.errors().len());
}
