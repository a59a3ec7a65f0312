use codevec_tokenizer::generic::tokenize_generic;

#[test]
fn test_quoted_digits_yield_single_placeholder() {
    assert_eq!(tokenize_generic("\"abc123\""), vec!["STRING_LITERAL"]);
}

#[test]
fn test_hex_literal_is_one_token() {
    // Lower-casing runs first, so uppercase hex spellings normalize too.
    assert_eq!(tokenize_generic("0x1A"), vec!["INT_LITERAL"]);
    assert_eq!(tokenize_generic("0X1A"), vec!["INT_LITERAL"]);
}

#[test]
fn test_words_dots_and_symbol_runs() {
    let tokens = tokenize_generic("obj.method(arg) != 10");
    assert_eq!(
        tokens,
        vec!["obj", ".", "method", "(", "arg", ")", "!=", "INT_LITERAL"]
    );
}

#[test]
fn test_bracket_family_splits_single_characters() {
    // Bracket/quote punctuation tokenizes one character at a time, unlike
    // other symbols which run together.
    let tokens = tokenize_generic("{}[]<>");
    assert_eq!(tokens, vec!["{", "}", "[", "]", "<", ">"]);
}

#[test]
fn test_code_is_lower_cased() {
    assert_eq!(tokenize_generic("Foo BAR"), vec!["foo", "bar"]);
}

#[test]
fn test_no_empty_tokens_on_messy_input() {
    let inputs = [
        "fn main() { println!(\"hi\"); }",
        "SELECT * FROM t WHERE x='1';",
        "<<<<>>>> :::: ;; \t\r\n ..",
        "\"unterminated",
        "λ π → 'ok'",
    ];
    for input in inputs {
        let tokens = tokenize_generic(input);
        for token in &tokens {
            assert!(!token.is_empty(), "empty token from {input:?}");
            assert!(
                !token.chars().any(char::is_whitespace),
                "whitespace inside token {token:?} from {input:?}"
            );
        }
    }
}

#[test]
fn test_empty_input_yields_no_tokens() {
    assert!(tokenize_generic("").is_empty());
    assert!(tokenize_generic("  \t\n  ").is_empty());
}
