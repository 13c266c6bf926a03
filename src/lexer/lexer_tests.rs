use super::*;

fn lex_all(input: &str) -> Result<Vec<Token>> {
    tokenize(input).map(|tokens| tokens.into_iter().map(Token::from).collect())
}

#[test]
fn test_basic_program() {
    let lexed = lex_all("var x;\nbegin x := 1 end.");
    let expected = vec![
        Token::Var,
        Token::Identifier(String::from("x")),
        Token::Semicolon,
        Token::Begin,
        Token::Identifier(String::from("x")),
        Token::Assign,
        Token::Number(1),
        Token::End,
        Token::Dot,
    ];
    assert_eq!(Ok(expected), lexed);
}

#[test]
fn test_keywords_and_punctuation() {
    let lexed = lex_all("const var procedure call begin end if then while do odd . = , ; # < > + - * / ( )");
    let expected = vec![
        Token::Const,
        Token::Var,
        Token::Procedure,
        Token::Call,
        Token::Begin,
        Token::End,
        Token::If,
        Token::Then,
        Token::While,
        Token::Do,
        Token::Odd,
        Token::Dot,
        Token::Equal,
        Token::Comma,
        Token::Semicolon,
        Token::Hash,
        Token::LessThan,
        Token::GreaterThan,
        Token::Plus,
        Token::Minus,
        Token::Multiply,
        Token::Divide,
        Token::LParen,
        Token::RParen,
    ];
    assert_eq!(Ok(expected), lexed);
}

#[test]
fn test_keywords_are_case_sensitive() {
    let lexed = lex_all("BEGIN _end odd1");
    let expected = vec![
        Token::Identifier(String::from("BEGIN")),
        Token::Identifier(String::from("_end")),
        Token::Identifier(String::from("odd1")),
    ];
    assert_eq!(Ok(expected), lexed);
}

#[test]
fn test_number_separators() {
    let lexed = lex_all("1_000_000 42_");
    assert_eq!(Ok(vec![Token::Number(1_000_000), Token::Number(42)]), lexed);
}

#[test]
fn test_number_at_limit() {
    let lexed = lex_all("9223372036854775807");
    assert_eq!(Ok(vec![Token::Number(i64::MAX)]), lexed);
}

#[test]
fn test_number_too_large() {
    let err = lex_all("x := 9223372036854775808").unwrap_err();
    let expected = InnerLexError::InvalidNumber(
        String::from("9223372036854775808"),
        BoundsError::TooLarge,
    );
    assert_eq!(expected, err.inner);
    assert_eq!("invalid number: 9223372036854775808", err.to_string());
}

#[test]
fn test_comments_count_lines() {
    let mut lexer = Lexer::new("{ one\ntwo\n} var\nx");
    assert_eq!(Ok(Token::Var), lexer.next_token());
    assert_eq!(3, lexer.get_line());
    assert_eq!(Ok(Token::Identifier(String::from("x"))), lexer.next_token());
    assert_eq!(4, lexer.get_line());
    assert_eq!(Ok(Token::Eof), lexer.next_token());
    assert_eq!(Ok(Token::Eof), lexer.next_token());
}

#[test]
fn test_unterminated_comment() {
    let err = lex_all("var x;\n{ never closed\n").unwrap_err();
    assert_eq!(InnerLexError::UnterminatedComment, err.inner);
    assert_eq!(3, err.get_ln());
}

#[test]
fn test_bad_colon() {
    let err = lex_all("x : 1").unwrap_err();
    assert_eq!(InnerLexError::BadAssign(' '), err.inner);
    assert_eq!("unknown token: ': '", err.to_string());
}

#[test]
fn test_unknown_character() {
    let err = lex_all("begin\nx := 1 @ 2\nend.").unwrap_err();
    assert_eq!(InnerLexError::UnknownToken('@'), err.inner);
    assert_eq!(2, err.get_ln());
}

#[test]
fn test_tokens_carry_lines() {
    let tokens = tokenize("var\n\nx").unwrap();
    let lines: Vec<u64> = tokens.iter().map(LinedToken::get_line).collect();
    assert_eq!(vec![1, 3], lines);
    assert_eq!("3: identifier 'x'", tokens[1].to_string());
}

#[test]
fn test_parse_bounded() {
    assert_eq!(Ok(17), parse_bounded("17", 0, 100));
    assert_eq!(Err(BoundsError::TooLarge), parse_bounded("101", 0, 100));
    assert_eq!(Err(BoundsError::TooSmall), parse_bounded("-1", 0, 100));
    assert_eq!(Err(BoundsError::Invalid), parse_bounded("1x", 0, 100));
    assert_eq!(Err(BoundsError::Invalid), parse_bounded("", 0, 100));
    assert_eq!(Err(BoundsError::Invalid), parse_bounded("5", 10, 0));
    assert_eq!(
        Err(BoundsError::TooSmall),
        parse_bounded("-99999999999999999999", 0, 100)
    );
}
