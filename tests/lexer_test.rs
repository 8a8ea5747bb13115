use pretty_assertions::assert_eq;

use bec::lexer::Lexer;
use bec::token::TokenKind;
use bec::LexError;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_basic_tokens() -> Result<(), LexError> {
    init();

    let tokens = Lexer::tokenize(r"(A\/B)")?;

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
    let values: Vec<&str> = tokens.iter().map(|t| t.value.as_str()).collect();
    let ids: Vec<usize> = tokens.iter().map(|t| t.id).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::OpenBracket,
            TokenKind::Symbol,
            TokenKind::Or,
            TokenKind::Symbol,
            TokenKind::CloseBracket,
        ]
    );
    assert_eq!(positions, vec![1, 2, 3, 5, 6]);
    assert_eq!(values, vec!["(", "A", r"\/", "B", ")"]);
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);

    Ok(())
}

#[test]
fn test_operator_spellings() -> Result<(), LexError> {
    let test_strs: Vec<(&str, TokenKind)> = vec![
        ("&", TokenKind::And),
        (r"/\", TokenKind::And),
        ("|", TokenKind::Or),
        (r"\/", TokenKind::Or),
        ("!", TokenKind::Not),
        ("~", TokenKind::Equality),
        ("->", TokenKind::Implication),
        ("=", TokenKind::Assign),
        (";", TokenKind::StatementEnd),
        ("let ", TokenKind::DeclareKeyword),
        ("0", TokenKind::Constant),
        ("1", TokenKind::Constant),
        ("Z", TokenKind::Symbol),
    ];

    for (test_str, kind) in test_strs {
        let tokens = Lexer::tokenize(test_str)?;
        assert_eq!(tokens.len(), 1, "{test_str:?}");
        assert_eq!(tokens[0].kind, kind, "{test_str:?}");
    }

    Ok(())
}

#[test]
fn test_declaration_tokens() -> Result<(), LexError> {
    let tokens = Lexer::tokenize("let A=1; (A->B)")?;

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::DeclareKeyword,
            TokenKind::Symbol,
            TokenKind::Assign,
            TokenKind::Constant,
            TokenKind::StatementEnd,
            TokenKind::OpenBracket,
            TokenKind::Symbol,
            TokenKind::Implication,
            TokenKind::Symbol,
            TokenKind::CloseBracket,
        ]
    );
    assert_eq!(tokens[0].value, "let");
    assert_eq!(tokens[1].position, 5);
    assert_eq!(tokens[7].value, "->");

    Ok(())
}

#[test]
fn test_whitespace_is_skipped() -> Result<(), LexError> {
    let tokens = Lexer::tokenize("  (\tA\n&\r\n B )  \n")?;

    assert_eq!(tokens.len(), 5);
    assert_eq!(tokens[1].position, 5);
    assert_eq!(tokens[2].position, 7);

    Ok(())
}

#[test]
fn test_peek_does_not_consume() -> Result<(), LexError> {
    let mut lexer = Lexer::new("( !A)");

    assert_eq!(lexer.next_token()?.kind, TokenKind::OpenBracket);
    assert_eq!(lexer.peek_kind()?, Some(TokenKind::Not));
    assert_eq!(lexer.peek_kind()?, Some(TokenKind::Not));

    let not = lexer.next_token()?;
    assert_eq!(not.kind, TokenKind::Not);
    assert_eq!(not.id, 1);
    assert_eq!(not.position, 3);

    assert_eq!(lexer.next_token()?.kind, TokenKind::Symbol);
    assert_eq!(lexer.next_token()?.kind, TokenKind::CloseBracket);
    assert_eq!(lexer.peek_kind()?, None);

    Ok(())
}

#[test]
fn test_exhaustion() {
    let mut lexer = Lexer::new(" \n ");

    assert!(lexer.is_exhausted());
    assert_eq!(lexer.next_token(), Err(LexError::UnexpectedEof));

    let mut lexer = Lexer::new("A ");
    assert!(!lexer.is_exhausted());
    assert!(lexer.next_token().is_ok());
    assert!(lexer.is_exhausted());
    assert_eq!(lexer.next_token(), Err(LexError::UnexpectedEof));
}

#[test]
fn test_unsupported_symbols() {
    let test_strs: Vec<(&str, char, usize)> = vec![
        ("a", 'a', 1),
        ("A - B", '-', 3),
        (r"(A \ B)", '\\', 4),
        ("(A / B)", '/', 4),
        ("(A&2)", '2', 4),
        ("lets A", 'l', 1),
        ("(A ^ B)", '^', 4),
    ];

    for (test_str, symbol, position) in test_strs {
        assert_eq!(
            Lexer::tokenize(test_str),
            Err(LexError::UnsupportedSymbol { symbol, position }),
            "{test_str:?}"
        );
    }
}

#[test]
fn test_error_messages() {
    assert_eq!(
        LexError::UnsupportedSymbol {
            symbol: '-',
            position: 3
        }
        .to_string(),
        "unsupported symbol: - at position 3"
    );
    assert_eq!(LexError::UnexpectedEof.to_string(), "unexpected eof");
}

#[test]
fn test_iterator_stops_after_error() {
    let results: Vec<_> = Lexer::new("A?B").collect();

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
}

#[test]
fn test_next_token_after_peek() -> Result<(), LexError> {
    init();

    let mut lexer = Lexer::new("  let A=1;");

    assert_eq!(lexer.peek_kind()?, Some(TokenKind::DeclareKeyword));

    let keyword = lexer.next_token()?;
    assert_eq!(keyword.kind, TokenKind::DeclareKeyword);
    assert_eq!(keyword.value, "let");
    assert_eq!(keyword.position, 3);

    let kinds: Vec<TokenKind> = lexer.map(|token| token.map(|t| t.kind)).collect::<Result<_, _>>()?;
    assert_eq!(
        kinds,
        vec![
            TokenKind::Symbol,
            TokenKind::Assign,
            TokenKind::Constant,
            TokenKind::StatementEnd
        ]
    );

    Ok(())
}
