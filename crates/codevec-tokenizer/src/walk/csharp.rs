//! C# grammar-backed tokenizer.
//!
//! Scopes are brace-delimited: every `{` opens one and every `}` closes one,
//! which covers method bodies, blocks, and type bodies alike. Declared names
//! come from variable declarators and parameters.

use super::{ScopeStack, node_text};
use codevec_core::tokens::{
    BOOL_LITERAL_TOKEN, FLOAT_LITERAL_TOKEN, INT_LITERAL_TOKEN, STRING_LITERAL_TOKEN,
    VARIABLE_TOKEN,
};
use tree_sitter::{Node, Tree};

struct WalkContext<'s> {
    source: &'s str,
    scopes: ScopeStack,
    tokens: Vec<String>,
}

pub(super) fn tokenize(tree: &Tree, source: &str) -> Vec<String> {
    let mut ctx = WalkContext {
        source,
        scopes: ScopeStack::new(),
        tokens: Vec::new(),
    };
    visit(&tree.root_node(), &mut ctx);
    ctx.tokens
}

fn visit(node: &Node<'_>, ctx: &mut WalkContext) {
    match node.kind() {
        "comment" => return,
        "string_literal" | "verbatim_string_literal" | "raw_string_literal"
        | "character_literal" => {
            ctx.tokens.push(STRING_LITERAL_TOKEN.to_string());
            return;
        }
        "integer_literal" => {
            ctx.tokens.push(INT_LITERAL_TOKEN.to_string());
            return;
        }
        "real_literal" => {
            ctx.tokens.push(FLOAT_LITERAL_TOKEN.to_string());
            return;
        }
        "boolean_literal" => {
            ctx.tokens.push(BOOL_LITERAL_TOKEN.to_string());
            return;
        }
        // Declared before the subtree is emitted, so the name's own token
        // comes out as VARIABLE.
        "variable_declarator" | "parameter" => {
            if let Some(name) = node.child_by_field_name("name")
                && name.kind() == "identifier"
            {
                ctx.scopes.declare(node_text(&name, ctx.source));
            }
        }
        "identifier" => {
            let text = node_text(node, ctx.source);
            if ctx.scopes.contains(text) {
                ctx.tokens.push(VARIABLE_TOKEN.to_string());
            } else {
                ctx.tokens.push(text.to_string());
            }
            return;
        }
        "{" => {
            ctx.tokens.push("{".to_string());
            ctx.scopes.push();
            return;
        }
        "}" => {
            ctx.scopes.pop();
            ctx.tokens.push("}".to_string());
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

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(&child, ctx);
    }
}
