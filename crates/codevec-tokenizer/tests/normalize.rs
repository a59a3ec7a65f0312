use codevec_tokenizer::normalize::normalize;

#[test]
fn test_quoted_digits_become_one_string_literal() {
    // String normalization runs before numeric normalization, so the digits
    // inside the quotes never surface as their own placeholder.
    assert_eq!(normalize("\"abc123\""), " STRING_LITERAL ");
    assert_eq!(normalize("'abc123'"), " STRING_LITERAL ");
}

#[test]
fn test_hex_before_decimal() {
    assert_eq!(normalize("0x1a"), " INT_LITERAL ");
    // Not `0x` + a separately-normalized digit run.
    assert!(!normalize("0x1a").contains("0x"));
}

#[test]
fn test_decimal_runs() {
    assert_eq!(normalize("x = 42;"), "x =  INT_LITERAL ;");
}

#[test]
fn test_escaped_quote_stays_inside_the_literal() {
    assert_eq!(normalize(r#""a\"b""#), " STRING_LITERAL ");
    assert_eq!(normalize(r"'\''"), " STRING_LITERAL ");
}

#[test]
fn test_passthrough_without_literals() {
    assert_eq!(normalize("if (ready) return;"), "if (ready) return;");
}

#[test]
fn test_total_on_arbitrary_input() {
    // Unterminated quote, stray backslashes, non-UTF punctuation runs:
    // nothing to match is fine, partial matches are fine, no panics.
    let weird = "\"unterminated \\ \u{1F600} 12abc";
    let out = normalize(weird);
    assert!(out.contains("INT_LITERAL"));
    assert!(out.contains("abc"));
}
