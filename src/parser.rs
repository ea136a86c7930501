//! Python parser adapter built on tree-sitter
//!
//! Lowers the tree-sitter CST into a small typed syntax tree the detectors
//! and metrics calculator walk. Only the node kinds the analysis cares about
//! get their own variant; everything else becomes `Other` with its children
//! preserved, so an unhandled grammar construct can never silently drop a
//! definition nested inside it.

use thiserror::Error;
use tree_sitter::{Node, Parser};

/// Errors from the parser adapter. Syntax failure is the only category a
/// caller is expected to handle; the rest indicate a broken toolchain.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid syntax at line {line}, column {column}")]
    InvalidSyntax { line: usize, column: usize },
    #[error("parser produced no tree")]
    NoTree,
    #[error("failed to load Python grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
}

/// Category of a lowered syntax-tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Module,
    FunctionDef { name: String },
    ClassDef { name: String },
    Import,
    ImportFrom,
    /// for / while
    Loop,
    /// if / elif
    Conditional,
    With,
    Try,
    /// An expression statement that is just a string (docstring position)
    StringLiteral,
    Other,
}

/// One node of the lowered tree. `line` is 1-based; children are in source
/// order. For function and class definitions the children are exactly the
/// direct statements of the body block.
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub line: u32,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn is_function(&self) -> bool {
        matches!(self.kind, NodeKind::FunctionDef { .. })
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, NodeKind::ClassDef { .. })
    }

    pub fn is_import(&self) -> bool {
        matches!(self.kind, NodeKind::Import | NodeKind::ImportFrom)
    }

    /// Whether this node opens a nesting level for depth scoring
    pub fn is_nesting(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Loop | NodeKind::Conditional | NodeKind::With | NodeKind::Try
        )
    }
}

/// The lowered representation of one parsed source unit
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    pub root: SyntaxNode,
}

impl SyntaxTree {
    /// Depth-first pre-order walk over every node, root included.
    /// Visits nodes of any given kind in ascending line order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![&self.root],
        }
    }
}

pub struct Nodes<'a> {
    stack: Vec<&'a SyntaxNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a SyntaxNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Parse Python source into a lowered syntax tree.
///
/// tree-sitter recovers from bad input instead of failing, so a unit is
/// rejected by scanning for ERROR/MISSING nodes after the parse. On failure
/// no partial tree is exposed.
pub fn parse(source: &str) -> Result<SyntaxTree, ParseError> {
    let mut parser = Parser::new();
    let language = tree_sitter_python::LANGUAGE;
    parser.set_language(&language.into())?;

    let tree = parser.parse(source, None).ok_or(ParseError::NoTree)?;
    let root = tree.root_node();

    if let Some(point) = first_error(root) {
        return Err(ParseError::InvalidSyntax {
            line: point.row + 1,
            column: point.column + 1,
        });
    }

    Ok(SyntaxTree {
        root: lower(root, source.as_bytes()),
    })
}

/// Find the position of the first ERROR or MISSING node, if any
fn first_error(node: Node) -> Option<tree_sitter::Point> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(point) = first_error(child) {
            return Some(point);
        }
    }
    // has_error() was set but no ERROR child surfaced; anchor at the node
    Some(node.start_position())
}

fn lower(node: Node, source: &[u8]) -> SyntaxNode {
    let line = node.start_position().row as u32 + 1;

    let kind = match node.kind() {
        "module" => NodeKind::Module,
        "function_definition" => NodeKind::FunctionDef {
            name: field_text(node, "name", source),
        },
        "class_definition" => NodeKind::ClassDef {
            name: field_text(node, "name", source),
        },
        "import_statement" => NodeKind::Import,
        "import_from_statement" | "future_import_statement" => NodeKind::ImportFrom,
        "for_statement" | "while_statement" => NodeKind::Loop,
        "if_statement" | "elif_clause" => NodeKind::Conditional,
        "with_statement" => NodeKind::With,
        "try_statement" => NodeKind::Try,
        "expression_statement" if is_bare_string(node) => NodeKind::StringLiteral,
        _ => NodeKind::Other,
    };

    // Definitions keep only their body statements as children, so a function
    // node's child count is its direct statement-body length.
    let children = match node.kind() {
        "function_definition" | "class_definition" => node
            .child_by_field_name("body")
            .map(|body| lower_children(body, source))
            .unwrap_or_default(),
        _ if kind == NodeKind::StringLiteral => Vec::new(),
        _ => lower_children(node, source),
    };

    SyntaxNode { kind, line, children }
}

fn lower_children(node: Node, source: &[u8]) -> Vec<SyntaxNode> {
    let mut out = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            // Blocks and else/finally wrappers are transparent: their
            // statements belong to the enclosing construct.
            "block" | "else_clause" | "finally_clause" => {
                out.extend(lower_children(child, source));
            }
            // A decorated definition is the definition it wraps
            "decorated_definition" => {
                if let Some(def) = child.child_by_field_name("definition") {
                    out.push(lower(def, source));
                }
            }
            "comment" => {}
            _ => out.push(lower(child, source)),
        }
    }
    out
}

fn field_text(node: Node, field: &str, source: &[u8]) -> String {
    node.child_by_field_name(field)
        .and_then(|n| n.utf8_text(source).ok())
        .unwrap_or_default()
        .to_string()
}

fn is_bare_string(node: Node) -> bool {
    node.named_child_count() == 1
        && node
            .named_child(0)
            .is_some_and(|c| c.kind() == "string" || c.kind() == "concatenated_string")
}
