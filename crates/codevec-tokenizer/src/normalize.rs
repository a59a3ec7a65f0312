//! Regex-based canonicalization of literals, applied before splitting.

use codevec_core::tokens::{INT_LITERAL_TOKEN, STRING_LITERAL_TOKEN};
use regex::Regex;
use std::sync::LazyLock;

// Order matters: quoted runs are neutralized before numeric runs so digits
// inside string bodies are not rewritten on their own, and hex literals
// before plain decimal runs so `0x1a` does not split into `0x` + a number.
static SINGLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"'(\\.|[^'\\])*'").expect("hard-coded pattern"));
static DOUBLE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(\\.|[^"\\])*""#).expect("hard-coded pattern"));
static HEX_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x(\d|\w)+").expect("hard-coded pattern"));
static DECIMAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("hard-coded pattern"));

/// Rewrite quoted literal runs (backslash-escape aware), then hex integer
/// literals, then remaining decimal runs into canonical placeholder tokens.
///
/// Total on arbitrary text: anything unmatched passes through unchanged.
pub fn normalize(code: &str) -> String {
    let string_repl = format!(" {STRING_LITERAL_TOKEN} ");
    let int_repl = format!(" {INT_LITERAL_TOKEN} ");

    let code = SINGLE_QUOTED.replace_all(code, string_repl.as_str());
    let code = DOUBLE_QUOTED.replace_all(&code, string_repl.as_str());
    let code = HEX_LITERAL.replace_all(&code, int_repl.as_str());
    let code = DECIMAL_RUN.replace_all(&code, int_repl.as_str());
    code.into_owned()
}
