//! Go grammar-backed tokenizer.
//!
//! Scopes are brace-delimited like the C# walker. Declared names come from
//! var/const specs, short variable declarations, parameters, and struct
//! field declarations.

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
        "interpreted_string_literal" | "raw_string_literal" | "rune_literal" => {
            ctx.tokens.push(STRING_LITERAL_TOKEN.to_string());
            return;
        }
        "int_literal" => {
            ctx.tokens.push(INT_LITERAL_TOKEN.to_string());
            return;
        }
        "float_literal" | "imaginary_literal" => {
            ctx.tokens.push(FLOAT_LITERAL_TOKEN.to_string());
            return;
        }
        "true" | "false" => {
            ctx.tokens.push(BOOL_LITERAL_TOKEN.to_string());
            return;
        }
        "var_spec" | "const_spec" | "parameter_declaration" | "variadic_parameter_declaration"
        | "field_declaration" => {
            declare_name_fields(node, ctx);
        }
        "short_var_declaration" => {
            if let Some(left) = node.child_by_field_name("left") {
                declare_identifier_children(&left, ctx);
            }
        }
        // Selector members share the identifier namespace in this scheme,
        // so declared struct fields rewrite at their use sites too.
        "identifier" | "field_identifier" => {
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

/// Declare every child in a `name` field (var/const specs, parameters, and
/// struct fields all use it, possibly more than once).
fn declare_name_fields(node: &Node<'_>, ctx: &mut WalkContext) {
    let mut cursor = node.walk();
    if !cursor.goto_first_child() {
        return;
    }
    loop {
        if cursor.field_name() == Some("name") {
            let name = cursor.node();
            ctx.scopes.declare(node_text(&name, ctx.source));
        }
        if !cursor.goto_next_sibling() {
            break;
        }
    }
}

/// Declare every direct identifier child (the left side of `:=`).
fn declare_identifier_children(node: &Node<'_>, ctx: &mut WalkContext) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "identifier" {
            ctx.scopes.declare(node_text(&child, ctx.source));
        }
    }
}
