use super::*;

#[test]
fn test_declarations() {
    let mut emitter = Emitter::new();
    emitter.constant("limit");
    emitter.symbol(&Token::Number(10));
    emitter.semicolon();
    emitter.variable("x");
    emitter.variable("y");
    emitter.crlf();
    assert_eq!("const long limit=10;\nlong x;\nlong y;\n\n", emitter.as_str());
}

#[test]
fn test_entry_point_returns_zero() {
    let mut emitter = Emitter::new();
    emitter.procedure(None);
    emitter.epilogue();
    assert_eq!(
        "int\nmain(int argc, char *argv[])\n{\n;return 0;\n}\n\n",
        emitter.as_str()
    );
}

#[test]
fn test_procedure_falls_through() {
    let mut emitter = Emitter::new();
    emitter.set_in_procedure(true);
    emitter.procedure(Some("square"));
    emitter.epilogue();
    assert_eq!("void\nsquare(void)\n{\n;\n}\n\n", emitter.as_str());
}

#[test]
fn test_operator_spelling() {
    let mut emitter = Emitter::new();
    let tokens = [
        Token::Identifier("a".into()),
        Token::Hash,
        Token::Number(0),
        Token::Equal,
        Token::Assign,
        Token::LessThan,
        Token::GreaterThan,
        Token::Plus,
        Token::Minus,
        Token::Multiply,
        Token::Divide,
    ];
    tokens.iter().for_each(|t| emitter.symbol(t));
    assert_eq!("a!=0===<>+-*/", emitter.as_str());
}

#[test]
fn test_odd() {
    let mut emitter = Emitter::new();
    emitter.symbol(&Token::If);
    emitter.symbol(&Token::Odd);
    emitter.symbol(&Token::Identifier("x".into()));
    emitter.odd();
    emitter.symbol(&Token::Then);
    assert_eq!("if((x)&1)", emitter.as_str());
}

#[test]
fn test_tokens_without_fragment() {
    let mut emitter = Emitter::new();
    emitter.symbol(&Token::Dot);
    emitter.symbol(&Token::Semicolon);
    emitter.symbol(&Token::Eof);
    assert!(emitter.as_str().is_empty());
}

#[test]
fn test_call_and_end() {
    let mut emitter = Emitter::new();
    emitter.call("p");
    emitter.end();
    let expected = format!("p();\n{VERSION_COMMENT}\n");
    assert_eq!(expected, emitter.to_string());
    assert!(VERSION_COMMENT.starts_with("/* PL/0 compiler "));
}
