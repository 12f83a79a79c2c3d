//! Explicit-stack pre-order traversal emitting (label, depth, flags) tokens.
//!
//! The pending-sibling stack replaces recursive descent: it keeps the walk
//! safe for very wide or deep topologies and lets first/last-sibling flags be
//! computed for a whole sibling run before descending into any of them.

use std::cmp::Ordering;

use generational_arena::Index;

use crate::arena::TopoTree;

/// Sibling position and leaf markers for one traversal token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// Node is first among its sorted siblings
    pub first: bool,
    /// Node is last among its sorted siblings (a sole child is both)
    pub last: bool,
    /// Node has no children
    pub leaf: bool,
}

/// One pre-order traversal record, borrowed from the tree. Ephemeral: tokens
/// exist only while the stream is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub label: &'a str,
    pub depth: usize,
    pub flags: Flags,
}

/// Order sibling labels ascending by the integer after the last `:`, falling
/// back to plain string order when either side does not parse.
pub fn by_trailing_number(a: &str, b: &str) -> Ordering {
    match (trailing_number(a), trailing_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Plain lexicographic sibling order.
pub fn by_label(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

fn trailing_number(label: &str) -> Option<i64> {
    label.rsplit(':').next()?.trim().parse().ok()
}

impl TopoTree {
    /// Lazy pre-order token stream over the tree.
    ///
    /// `cmp` orders sibling labels; ties keep the relative order the stable
    /// sort sees. The stream starts with a synthetic root token at depth 0
    /// and never mutates the tree, so it can be restarted by calling this
    /// again.
    pub fn tokens<F>(&self, cmp: F) -> Tokens<'_, F>
    where
        F: FnMut(&str, &str) -> Ordering,
    {
        Tokens {
            tree: self,
            cmp,
            pending: Vec::new(),
            cursor: None,
            started: false,
        }
    }
}

/// One-shot, finite pre-order token iterator. See [`TopoTree::tokens`].
pub struct Tokens<'a, F> {
    tree: &'a TopoTree,
    cmp: F,
    /// Siblings not yet descended into, nearest on top
    pending: Vec<(Index, usize, Flags)>,
    /// Node emitted last, whose children are expanded next
    cursor: Option<(Index, usize)>,
    started: bool,
}

impl<'a, F> Iterator for Tokens<'a, F>
where
    F: FnMut(&str, &str) -> Ordering,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            let root = self.tree.root();
            self.cursor = Some((root, 0));
            // The root is an only child relative to nothing above it.
            return Some(Token {
                label: self.tree.label(root),
                depth: 0,
                flags: Flags {
                    first: true,
                    last: true,
                    leaf: false,
                },
            });
        }

        let (idx, depth) = self.cursor?;
        let children = self.tree.children(idx);
        let (next_idx, next_depth, mut flags) = if children.is_empty() {
            match self.pending.pop() {
                Some(item) => item,
                None => {
                    self.cursor = None;
                    return None;
                }
            }
        } else {
            let tree = self.tree;
            let cmp = &mut self.cmp;
            let mut ordered = children.to_vec();
            ordered.sort_by(|&a, &b| cmp(tree.label(a), tree.label(b)));

            let last = ordered.len() - 1;
            // Push everything but the first, reversed so the nearest sibling
            // pops first; descend into the first immediately.
            for pos in (1..=last).rev() {
                let flags = Flags {
                    first: false,
                    last: pos == last,
                    leaf: false,
                };
                self.pending.push((ordered[pos], depth + 1, flags));
            }
            (
                ordered[0],
                depth + 1,
                Flags {
                    first: true,
                    last: last == 0,
                    leaf: false,
                },
            )
        };

        flags.leaf = self.tree.children(next_idx).is_empty();
        self.cursor = Some((next_idx, next_depth));
        Some(Token {
            label: self.tree.label(next_idx),
            depth: next_depth,
            flags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(tree: &TopoTree) -> Vec<(String, usize, Flags)> {
        tree.tokens(by_label)
            .map(|t| (t.label.to_string(), t.depth, t.flags))
            .collect()
    }

    #[test]
    fn given_empty_tree_when_walking_then_only_root_token() {
        let tree = TopoTree::new();

        let tokens = labels(&tree);

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, "*");
        assert_eq!(tokens[0].1, 0);
        assert!(tokens[0].2.first && tokens[0].2.last && !tokens[0].2.leaf);
    }

    #[test]
    fn given_chain_when_walking_then_every_node_is_sole_child() {
        let mut tree = TopoTree::new();
        tree.insert_path(&["a", "b", "c"]);

        let tokens = labels(&tree);

        assert_eq!(tokens.len(), 4);
        for (label, depth, flags) in &tokens {
            assert!(flags.first && flags.last, "{label} not a sole child");
            assert_eq!(flags.leaf, label == "c");
            assert_eq!(*depth, tokens.iter().position(|t| t.0 == *label).unwrap());
        }
    }

    #[test]
    fn given_siblings_when_walking_then_flags_mark_first_and_last() {
        let mut tree = TopoTree::new();
        tree.insert_path(&["a", "x"]);
        tree.insert_path(&["a", "y"]);
        tree.insert_path(&["a", "z"]);

        let tokens = labels(&tree);

        // *, a, x, y, z in pre-order with sorted siblings
        assert_eq!(
            tokens.iter().map(|t| t.0.as_str()).collect::<Vec<_>>(),
            vec!["*", "a", "x", "y", "z"]
        );
        let x = &tokens[2].2;
        let y = &tokens[3].2;
        let z = &tokens[4].2;
        assert!(x.first && !x.last && x.leaf);
        assert!(!y.first && !y.last && y.leaf);
        assert!(!z.first && z.last && z.leaf);
    }

    #[test]
    fn given_insertion_order_when_walking_then_comparator_decides_order() {
        let mut tree = TopoTree::new();
        tree.insert_path(&["n: 10"]);
        tree.insert_path(&["n: 2"]);

        let lexicographic: Vec<_> = tree.tokens(by_label).map(|t| t.label.to_string()).collect();
        let numeric: Vec<_> = tree
            .tokens(by_trailing_number)
            .map(|t| t.label.to_string())
            .collect();

        assert_eq!(lexicographic, vec!["*", "n: 10", "n: 2"]);
        assert_eq!(numeric, vec!["*", "n: 2", "n: 10"]);
    }

    #[test]
    fn given_tree_when_walking_then_token_counts_match_structure() {
        let mut tree = TopoTree::new();
        tree.insert_path(&["a", "b", "c"]);
        tree.insert_path(&["a", "b", "d"]);
        tree.insert_path(&["a", "e", "f"]);

        let tokens: Vec<_> = tree.tokens(by_label).collect();

        let leaves = tokens.iter().filter(|t| t.flags.leaf).count();
        assert_eq!(leaves, tree.leaf_count());
        assert_eq!(tokens.len() - 1, tree.node_count());
    }
}
