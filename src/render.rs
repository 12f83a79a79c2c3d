//! Renders a traversal token stream as an ASCII line drawing.
//!
//! One line is emitted per leaf token: a root-to-leaf path of first-sibling
//! tokens shares a single line, and every non-first token starts a new line
//! indented to its column. Column widths are tracked per depth so sibling
//! branch glyphs line up under their parent's connector.

use std::collections::{HashMap, HashSet};

use tracing::instrument;

use crate::walk::Token;

/// Width of the horizontal connector run after a non-leaf symbol.
const TAIL_LEN: usize = 1;

/// Drawing symbol for one token: branch glyph, `-`, label, then either a
/// horizontal connector run (inner node) or a newline (leaf).
fn symbol(token: &Token) -> String {
    let stem = match (token.flags.first, token.flags.last) {
        (true, true) => '-',
        (true, false) => '+',
        (false, true) => '`',
        (false, false) => '|',
    };
    if token.flags.leaf {
        format!("{stem}-{}\n", token.label)
    } else {
        format!("{stem}-{}{}", token.label, "-".repeat(TAIL_LEN))
    }
}

/// Consume the token stream once and build the complete drawing.
///
/// `widths` records the rendered width of the most recent symbol at each
/// depth; `open` holds the depths whose subtree still has pending siblings,
/// which get a vertical bar as the first character of their indent column.
/// Both tables live only for the duration of one call.
#[instrument(level = "debug", skip(tokens))]
pub fn render<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut out = String::new();
    let mut line = String::new();
    let mut widths: HashMap<usize, usize> = HashMap::new();
    let mut open: HashSet<usize> = HashSet::new();

    for token in tokens {
        if token.flags.last {
            open.remove(&token.depth);
        } else {
            open.insert(token.depth);
        }

        let symbol = symbol(&token);
        widths.insert(token.depth, symbol.len());

        // First siblings continue the current line; everything else starts a
        // fresh line under its ancestors' columns.
        if !token.flags.first {
            for depth in 0..token.depth {
                let width = widths.get(&depth).copied().unwrap_or(0);
                if open.contains(&depth) {
                    line.push('|');
                    line.push_str(&" ".repeat(width.saturating_sub(1)));
                } else {
                    line.push_str(&" ".repeat(width));
                }
            }
        }

        line.push_str(&symbol);
        if token.flags.leaf {
            out.push_str(&line);
            line.clear();
        }
    }

    out
}
