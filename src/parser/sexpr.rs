//! Recursive-descent parser for bracketed tree expressions.
//!
//! Grammar: `expr := "(" NAME expr* ")" | INTEGER`. Nodes are allocated
//! before their children, so ids come out in pre-order.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::{FormatError, ParseResult};
use super::tokenizer::tokenize;
use crate::core::{GameTree, NodeId};

/// Parser configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Maximum nesting depth (0 = unlimited).
    /// Bounds work on degenerate input.
    pub max_depth: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self { max_depth: 1000 }
    }
}

impl ParseConfig {
    /// Create a new config with a custom depth limit.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    fn depth_limit(&self) -> usize {
        let hard = u16::MAX as usize;
        if self.max_depth == 0 {
            hard
        } else {
            self.max_depth.min(hard)
        }
    }
}

/// Parse bracketed text into a fresh tree with the default config.
pub fn parse(text: &str) -> ParseResult<GameTree> {
    parse_with(text, &ParseConfig::default())
}

/// Parse bracketed text into a fresh tree.
///
/// Each call owns its id counter, so identical input always yields
/// identical ids.
pub fn parse_with(text: &str, config: &ParseConfig) -> ParseResult<GameTree> {
    let trimmed = text.trim();
    if !trimmed.starts_with('(') || !trimmed.ends_with(')') {
        return Err(FormatError::NotBracketed);
    }

    let mut parser = Parser::new(tokenize(trimmed), config.depth_limit());
    parser.parse_tree()?;
    if let Some(extra) = parser.peek() {
        return Err(FormatError::TrailingTokens(extra.to_string()));
    }

    debug!(nodes = parser.tree.len(), "parsed tree");
    Ok(parser.tree)
}

struct Parser<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
    depth_limit: usize,
    tree: GameTree,
}

impl<'a> Parser<'a> {
    fn new(tokens: Vec<&'a str>, depth_limit: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth_limit,
            tree: GameTree::new(),
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Parse one complete expression.
    ///
    /// Open nodes live on an explicit stack, so nesting is bounded by
    /// `depth_limit` rather than by the native call stack.
    fn parse_tree(&mut self) -> ParseResult<NodeId> {
        let mut open: Vec<NodeId> = Vec::new();
        let root = self.parse_item(0, &mut open)?;

        while let Some(&parent) = open.last() {
            match self.peek() {
                Some(")") => {
                    self.pos += 1;
                    open.pop();
                }
                Some(_) => {
                    let child = self.parse_item(open.len(), &mut open)?;
                    self.tree.add_child(parent, child);
                }
                None => {
                    let name = self.tree.get(parent).name.clone();
                    return Err(FormatError::UnclosedNode(name));
                }
            }
        }

        Ok(root)
    }

    /// Consume a leaf or the head of a bracketed node at `depth`.
    /// A bracketed node is pushed onto `open` until its `)` is seen.
    fn parse_item(&mut self, depth: usize, open: &mut Vec<NodeId>) -> ParseResult<NodeId> {
        if depth >= self.depth_limit {
            return Err(FormatError::TooDeep(self.depth_limit));
        }
        // depth_limit never exceeds u16::MAX, so this cannot truncate.
        let depth = depth as u16;

        let token = self.advance().ok_or(FormatError::UnexpectedEnd)?;
        match token {
            "(" => {
                let name = self.advance().ok_or(FormatError::MissingName)?;
                if name == "(" || name == ")" {
                    return Err(FormatError::InvalidName(name.to_string()));
                }
                let id = self.tree.alloc(name, None, depth, false);
                open.push(id);
                Ok(id)
            }
            ")" => Err(FormatError::UnexpectedClose),
            literal => {
                let value: i64 = literal
                    .parse()
                    .map_err(|_| FormatError::InvalidLeaf(literal.to_string()))?;
                Ok(self.tree.alloc(literal, Some(value), depth, true))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tree: &GameTree) -> Vec<&str> {
        tree.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_parse_simple() {
        let tree = parse("(A (B 3 5) (C 6))").unwrap();

        assert_eq!(tree.len(), 6);
        assert_eq!(names(&tree), vec!["A", "B", "3", "5", "C", "6"]);
        assert_eq!(tree.children(tree.root()), &[NodeId::new(1), NodeId::new(4)]);
        assert_eq!(tree.get(NodeId::new(2)).value, Some(3));
        assert_eq!(tree.get(NodeId::new(1)).value, None);
        assert_eq!(tree.get(NodeId::new(5)).depth, 2);
    }

    #[test]
    fn test_ids_are_preorder() {
        let tree = parse("(A (B (D 3 17) (E 2 12)) (C 1))").unwrap();
        assert_eq!(names(&tree), vec!["A", "B", "D", "3", "17", "E", "2", "12", "C", "1"]);
        for node in tree.iter() {
            for &child in &node.children {
                assert!(child > node.id);
            }
        }
    }

    #[test]
    fn test_ids_reset_per_parse() {
        let first = parse("(A 1 2)").unwrap();
        let second = parse("(A 1 2)").unwrap();
        let ids1: Vec<_> = first.iter().map(|n| n.id).collect();
        let ids2: Vec<_> = second.iter().map(|n| n.id).collect();
        assert_eq!(ids1, ids2);
        assert_eq!(ids1[0], NodeId::new(0));
    }

    #[test]
    fn test_negative_leaves() {
        let tree = parse("(A -3 +4 0)").unwrap();
        let values: Vec<_> = tree.iter().skip(1).map(|n| n.value).collect();
        assert_eq!(values, vec![Some(-3), Some(4), Some(0)]);
    }

    #[test]
    fn test_empty_node_is_leaf_without_value() {
        let tree = parse("(A (B) 4)").unwrap();
        let b = tree.get(NodeId::new(1));
        assert!(b.is_leaf());
        assert!(!b.is_literal);
        assert_eq!(b.value, None);
    }

    #[test]
    fn test_not_bracketed() {
        assert_eq!(parse(""), Err(FormatError::NotBracketed));
        assert_eq!(parse("A 1 2"), Err(FormatError::NotBracketed));
        assert_eq!(parse("(A 1 2"), Err(FormatError::NotBracketed));
        assert_eq!(parse("5"), Err(FormatError::NotBracketed));
    }

    #[test]
    fn test_invalid_leaf() {
        assert_eq!(
            parse("(A (B 3 5) C)"),
            Err(FormatError::InvalidLeaf("C".into()))
        );
        assert_eq!(parse("(A 1.5)"), Err(FormatError::InvalidLeaf("1.5".into())));
    }

    #[test]
    fn test_unclosed() {
        assert_eq!(
            parse("(A (B 1 2)"),
            Err(FormatError::UnclosedNode("A".into()))
        );
    }

    #[test]
    fn test_invalid_name() {
        assert_eq!(parse("()"), Err(FormatError::InvalidName(")".into())));
        assert_eq!(parse("((A 1))"), Err(FormatError::InvalidName("(".into())));
    }

    #[test]
    fn test_trailing_tokens() {
        assert_eq!(
            parse("(A 1) (B 2)"),
            Err(FormatError::TrailingTokens("(".into()))
        );
        assert_eq!(parse("(A 1))"), Err(FormatError::TrailingTokens(")".into())));
    }

    #[test]
    fn test_depth_limit() {
        let config = ParseConfig::default().with_max_depth(2);
        assert!(parse_with("(A (B 1))", &config).is_err());
        assert!(parse_with("(A 1 2)", &config).is_ok());
        assert_eq!(
            parse_with("(A (B (C 1)))", &config),
            Err(FormatError::TooDeep(2))
        );
    }

    #[test]
    fn test_unlimited_depth() {
        let config = ParseConfig::default().with_max_depth(0);
        let text = format!("{}1{}", "(N ".repeat(50), ")".repeat(50));
        let tree = parse_with(&text, &config).unwrap();
        assert_eq!(tree.len(), 51);
    }

    fn chain(levels: usize) -> String {
        format!("{}1{}", "(N ".repeat(levels), ")".repeat(levels))
    }

    #[test]
    fn test_deepest_accepted_tree() {
        // The cap is u16::MAX levels: bracketed nodes at depths 0..65533 and
        // the leaf at 65534.
        let config = ParseConfig::default().with_max_depth(0);
        let tree = parse_with(&chain(65_534), &config).unwrap();
        assert_eq!(tree.len(), 65_535);
        assert_eq!(tree.stats().max_depth, 65_534);

        assert_eq!(
            parse_with(&chain(65_535), &config),
            Err(FormatError::TooDeep(65_535))
        );
    }

    #[test]
    fn test_unclosed_reports_innermost() {
        assert_eq!(
            parse("(A (B (C 1) 2)"),
            Err(FormatError::UnclosedNode("A".into()))
        );
        assert_eq!(
            parse("(A (B (C 1 2) (D 3)"),
            Err(FormatError::UnclosedNode("B".into()))
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = ParseConfig::default().with_max_depth(12);
        let json = serde_json::to_string(&config).unwrap();
        let back: ParseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
