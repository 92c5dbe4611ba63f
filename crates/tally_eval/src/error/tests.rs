use super::*;
use pretty_assertions::assert_eq;

#[test]
fn scan_error_displays_transparently() {
    let err = EvalError::from(ScanError::MalformedCharacter { byte: b'x', pos: 3 });
    assert_eq!(err.to_string(), "malformed character 'x' at byte 3");
}

#[test]
fn unmatched_close_names_the_offset() {
    let err = EvalError::UnmatchedClose { pos: 7 };
    assert_eq!(err.to_string(), "unmatched ')' at byte 7");
}
