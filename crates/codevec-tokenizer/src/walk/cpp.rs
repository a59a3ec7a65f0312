//! C++ scope-aware tokenizer.
//!
//! Rewrites occurrences of locally-declared variable names, the declaration
//! site itself included, to VARIABLE while walking the parse tree.
//! Function, type, and member names pass through as source text; literal
//! terminals become their canonical placeholder. Lookup is exact-text,
//! innermost scope first, so shadowing resolves to the nearest declaration.

use super::{ScopeStack, node_text};
use codevec_core::tokens::{
    BOOL_LITERAL_TOKEN, FLOAT_LITERAL_TOKEN, INT_LITERAL_TOKEN, STRING_LITERAL_TOKEN,
    VARIABLE_TOKEN,
};
use tree_sitter::{Node, Tree};

struct WalkContext<'s> {
    source: &'s str,
    scopes: ScopeStack,
    in_declaration: bool,
    tokens: Vec<String>,
}

pub(super) fn tokenize(tree: &Tree, source: &str) -> Vec<String> {
    let mut ctx = WalkContext {
        source,
        scopes: ScopeStack::new(),
        in_declaration: false,
        tokens: Vec::new(),
    };
    visit(&tree.root_node(), false, &mut ctx);
    // Push/pop must balance across the whole traversal.
    debug_assert_eq!(ctx.scopes.depth(), 0);
    ctx.tokens
}

fn visit(node: &Node<'_>, declarator_site: bool, ctx: &mut WalkContext) {
    match node.kind() {
        // The grammar keeps comments out of the token stream.
        "comment" => return,
        "compound_statement" => {
            ctx.scopes.push();
            visit_children(node, declarator_site, ctx);
            ctx.scopes.pop();
            return;
        }
        // A declaration carrying a type specifier declares variables; its
        // declarator subtrees are declared-name sites.
        "declaration" => {
            ctx.in_declaration = true;
            visit_children(node, declarator_site, ctx);
            ctx.in_declaration = false;
            return;
        }
        "string_literal" | "raw_string_literal" | "concatenated_string" | "char_literal" => {
            ctx.tokens.push(STRING_LITERAL_TOKEN.to_string());
            return;
        }
        "number_literal" => {
            ctx.tokens
                .push(number_token(node_text(node, ctx.source)).to_string());
            return;
        }
        "true" | "false" => {
            ctx.tokens.push(BOOL_LITERAL_TOKEN.to_string());
            return;
        }
        "identifier" => {
            let text = node_text(node, ctx.source);
            if ctx.in_declaration && declarator_site {
                // Declared before emission, so the declaration site itself
                // is rewritten along with every later use.
                ctx.scopes.declare(text);
            }
            if ctx.scopes.contains(text) {
                ctx.tokens.push(VARIABLE_TOKEN.to_string());
            } else {
                ctx.tokens.push(text.to_string());
            }
            return;
        }
        _ => {}
    }

    if node.child_count() == 0 {
        let text = node_text(node, ctx.source);
        if !text.is_empty() {
            ctx.tokens.push(text.to_string());
        }
        return;
    }
    visit_children(node, declarator_site, ctx);
}

fn visit_children(node: &Node<'_>, declarator_site: bool, ctx: &mut WalkContext) {
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return;
    }
    loop {
        let child = cursor.node();
        let site = child_declarator_site(node, cursor.field_name(), declarator_site);
        visit(&child, site, ctx);
        if !cursor.goto_next_sibling() {
            break;
        }
    }
}

/// Whether a child sits in declarator position: the `declarator` field chain
/// from a declaration down to the declared identifier. Initializer values
/// and everything outside a declaration are expression territory.
fn child_declarator_site(parent: &Node<'_>, field: Option<&str>, parent_site: bool) -> bool {
    match parent.kind() {
        "declaration" => field == Some("declarator"),
        "init_declarator"
        | "pointer_declarator"
        | "reference_declarator"
        | "array_declarator"
        | "parenthesized_declarator"
        | "function_declarator" => parent_site && field == Some("declarator"),
        _ => false,
    }
}

/// Classify a number literal by spelling: hex floats carry a `p` exponent,
/// decimal floats a dot, an `e` exponent, or an `f` suffix.
fn number_token(text: &str) -> &'static str {
    let lower = text.to_ascii_lowercase();
    let is_float = if lower.starts_with("0x") {
        lower.contains('.') || lower.contains('p')
    } else {
        lower.contains('.') || lower.contains('e') || lower.ends_with('f')
    };
    if is_float {
        FLOAT_LITERAL_TOKEN
    } else {
        INT_LITERAL_TOKEN
    }
}
