//! Python grammar-backed tokenizer.
//!
//! Scopes follow the language's binding constructs rather than braces:
//! function, lambda, and class definitions and match statements each open
//! one. Declared names come from parameters, assignment targets, `with ...
//! as` aliases, and `as` patterns.

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
        // Whole string replaced, interpolations included; mirrors lexing the
        // literal as one token.
        "string" | "concatenated_string" => {
            ctx.tokens.push(STRING_LITERAL_TOKEN.to_string());
            return;
        }
        "integer" => {
            ctx.tokens.push(INT_LITERAL_TOKEN.to_string());
            return;
        }
        "float" => {
            ctx.tokens.push(FLOAT_LITERAL_TOKEN.to_string());
            return;
        }
        "true" | "false" => {
            ctx.tokens.push(BOOL_LITERAL_TOKEN.to_string());
            return;
        }
        "function_definition" | "class_definition" | "lambda" | "match_statement" => {
            ctx.scopes.push();
            visit_children(node, ctx);
            ctx.scopes.pop();
            return;
        }
        "parameters" | "lambda_parameters" => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if child.kind() == "identifier" {
                    ctx.scopes.declare(node_text(&child, ctx.source));
                }
                visit(&child, ctx);
            }
            return;
        }
        "default_parameter" | "typed_default_parameter" => {
            if let Some(name) = node.child_by_field_name("name")
                && name.kind() == "identifier"
            {
                ctx.scopes.declare(node_text(&name, ctx.source));
            }
        }
        "typed_parameter" => {
            if let Some(name) = node.named_child(0)
                && name.kind() == "identifier"
            {
                ctx.scopes.declare(node_text(&name, ctx.source));
            }
        }
        "assignment" | "augmented_assignment" => {
            if let Some(left) = node.child_by_field_name("left") {
                declare_targets(&left, ctx);
            }
        }
        "as_pattern" => {
            if let Some(alias) = node.child_by_field_name("alias") {
                declare_targets(&alias, ctx);
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
        _ => {}
    }

    if node.child_count() == 0 {
        let text = node_text(node, ctx.source);
        if !text.is_empty() {
            ctx.tokens.push(text.to_string());
        }
        return;
    }
    visit_children(node, ctx);
}

fn visit_children(node: &Node<'_>, ctx: &mut WalkContext) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(&child, ctx);
    }
}

/// Declare the names bound by an assignment-like target. Attribute targets
/// declare the member name, matching the scheme's exact-text lookup.
fn declare_targets(node: &Node<'_>, ctx: &mut WalkContext) {
    match node.kind() {
        "identifier" => ctx.scopes.declare(node_text(node, ctx.source)),
        "pattern_list" | "tuple_pattern" | "list_pattern" | "as_pattern_target" => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                declare_targets(&child, ctx);
            }
        }
        "attribute" => {
            if let Some(attr) = node.child_by_field_name("attribute") {
                ctx.scopes.declare(node_text(&attr, ctx.source));
            }
        }
        _ => {}
    }
}
