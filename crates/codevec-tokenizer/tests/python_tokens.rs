use codevec_core::config::PoolConfig;
use codevec_core::tokens::{
    BOOL_LITERAL_TOKEN, FLOAT_LITERAL_TOKEN, INT_LITERAL_TOKEN, STRING_LITERAL_TOKEN,
    VARIABLE_TOKEN,
};
use codevec_tokenizer::languages::Language;
use codevec_tokenizer::pool::ParserPool;

fn pool() -> ParserPool {
    ParserPool::new(&PoolConfig {
        workers: 1,
        ..PoolConfig::default()
    })
    .expect("pool must start")
}

fn count(tokens: &[String], token: &str) -> usize {
    tokens.iter().filter(|t| t.as_str() == token).count()
}

#[test]
fn test_parameters_and_assignment_targets_are_rewritten() {
    let source = "def scale(values, factor=2):\n    total = 0\n    for v in values:\n        total = total + v * factor\n    return total\n";
    let tokens = pool().tokenize(0, Language::Python, source).unwrap();

    assert_eq!(count(&tokens, "values"), 0);
    assert_eq!(count(&tokens, "factor"), 0);
    assert_eq!(count(&tokens, "total"), 0);
    assert_eq!(count(&tokens, VARIABLE_TOKEN), 8);
    // The loop target is not a declaration site in this scheme.
    assert_eq!(count(&tokens, "v"), 2);
    assert_eq!(count(&tokens, "scale"), 1);
    assert_eq!(count(&tokens, INT_LITERAL_TOKEN), 2);
}

#[test]
fn test_with_alias_and_literals() {
    let source = "def wrap(path):\n    with open(path) as fh:\n        data = fh.read()\n    msg = \"done\"\n    flag = True\n    pi = 3.14\n    return data\n";
    let tokens = pool().tokenize(0, Language::Python, source).unwrap();

    // path (2), fh (2), data (2), msg, flag, pi.
    assert_eq!(count(&tokens, VARIABLE_TOKEN), 9);
    assert_eq!(count(&tokens, "fh"), 0);
    assert_eq!(count(&tokens, "open"), 1);
    assert_eq!(count(&tokens, "read"), 1);
    assert_eq!(count(&tokens, STRING_LITERAL_TOKEN), 1);
    assert_eq!(count(&tokens, BOOL_LITERAL_TOKEN), 1);
    assert_eq!(count(&tokens, FLOAT_LITERAL_TOKEN), 1);
}

#[test]
fn test_function_scope_does_not_leak() {
    let source = "def a():\n    local = 1\n    return local\n\nlocal\n";
    let tokens = pool().tokenize(0, Language::Python, source).unwrap();

    // Inside the function both occurrences rewrite; the module-level
    // occurrence is outside the popped scope.
    assert_eq!(count(&tokens, VARIABLE_TOKEN), 2);
    assert_eq!(count(&tokens, "local"), 1);
}

#[test]
fn test_lambda_parameters_scope() {
    let source = "f = lambda n: n + 1\n";
    let tokens = pool().tokenize(0, Language::Python, source).unwrap();

    // f is an assignment target at module level; n binds inside the lambda.
    assert_eq!(count(&tokens, VARIABLE_TOKEN), 3);
    assert_eq!(count(&tokens, "n"), 0);
    assert_eq!(count(&tokens, INT_LITERAL_TOKEN), 1);
}
