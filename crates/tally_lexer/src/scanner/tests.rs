use super::*;
use pretty_assertions::assert_eq;

fn scan(source: &str) -> Result<Vec<(Token, usize)>, ScanError> {
    Scanner::new(source).collect()
}

// === Token Streams ===

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(scan(""), Ok(vec![]));
}

#[test]
fn all_spaces_yields_nothing() {
    assert_eq!(scan("   "), Ok(vec![]));
}

#[test]
fn digits_come_out_one_at_a_time() {
    assert_eq!(
        scan("12"),
        Ok(vec![(Token::Digit(1), 0), (Token::Digit(2), 1)])
    );
}

#[test]
fn simple_expression_with_offsets() {
    assert_eq!(
        scan("1 + 2"),
        Ok(vec![
            (Token::Digit(1), 0),
            (Token::Plus, 2),
            (Token::Digit(2), 4),
        ])
    );
}

#[test]
fn parens_and_unary_minus() {
    assert_eq!(
        scan("-(3)"),
        Ok(vec![
            (Token::Minus, 0),
            (Token::Open, 1),
            (Token::Digit(3), 2),
            (Token::Close, 3),
        ])
    );
}

#[test]
fn spaces_are_dropped_not_emitted() {
    let spaced: Vec<_> = Scanner::new(" 1 +  2 ").map(|r| r.map(|(t, _)| t)).collect();
    let tight: Vec<_> = Scanner::new("1+2").map(|r| r.map(|(t, _)| t)).collect();
    assert_eq!(spaced, tight);
}

// === Malformed Input ===

#[test]
fn foreign_byte_is_a_fatal_error() {
    let mut scanner = Scanner::new("1 a 2");
    assert_eq!(scanner.next(), Some(Ok((Token::Digit(1), 0))));
    assert_eq!(
        scanner.next(),
        Some(Err(ScanError::MalformedCharacter { byte: b'a', pos: 2 }))
    );
}

#[test]
fn scanner_advances_past_bad_byte() {
    // The stream stays finite after an error.
    let items: Vec<_> = Scanner::new("1*2").collect();
    assert_eq!(items.len(), 3);
    assert_eq!(
        items[1],
        Err(ScanError::MalformedCharacter { byte: b'*', pos: 1 })
    );
    assert_eq!(items[2], Ok((Token::Digit(2), 2)));
}

#[test]
fn letter_glued_to_digits_is_not_absorbed() {
    // The legacy behavior of folding unknown bytes into a number token
    // must not resurface.
    let items: Vec<_> = Scanner::new("12a3").collect();
    assert_eq!(
        items[2],
        Err(ScanError::MalformedCharacter { byte: b'a', pos: 2 })
    );
}

#[test]
fn tab_is_not_whitespace_here() {
    assert_eq!(
        scan("1\t2"),
        Err(ScanError::MalformedCharacter { byte: b'\t', pos: 1 })
    );
}

#[test]
fn interior_null_is_malformed_not_eof() {
    assert_eq!(
        scan("1\08"),
        Err(ScanError::MalformedCharacter { byte: 0, pos: 1 })
    );
}

#[test]
fn malformed_error_reports_printable_character() {
    let err = ScanError::MalformedCharacter { byte: b'a', pos: 4 };
    assert_eq!(err.to_string(), "malformed character 'a' at byte 4");
}

// === Properties ===

mod proptest_scanner {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any string over the accepted alphabet scans without error, and
        /// the token count equals the number of non-space characters.
        #[test]
        fn alphabet_always_scans(source in "[0-9+\\-() ]{0,64}") {
            let tokens = scan(&source);
            prop_assert!(tokens.is_ok());
            let non_space = source.chars().filter(|c| *c != ' ').count();
            prop_assert_eq!(tokens.map(|t| t.len()), Ok(non_space));
        }

        /// Inserting spaces between characters never changes the token
        /// sequence (offsets aside).
        #[test]
        fn spacing_never_changes_tokens(source in "[0-9+\\-()]{0,32}") {
            let spaced: String = source.chars().flat_map(|c| [c, ' ']).collect();
            let a: Result<Vec<_>, _> =
                Scanner::new(&source).map(|r| r.map(|(t, _)| t)).collect();
            let b: Result<Vec<_>, _> =
                Scanner::new(&spaced).map(|r| r.map(|(t, _)| t)).collect();
            prop_assert_eq!(a, b);
        }
    }
}
