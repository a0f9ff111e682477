// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded edit-distance search over the trie.
//!
//! Walks the trie depth-first from a start node, computing one row of the
//! Levenshtein table per edge taken. A branch is dropped as soon as every
//! cell of its row exceeds the budget.
//!
//! A node is accepted when the last cell of its row is within budget and the
//! node either ends a keyword or continues with a boundary character. The
//! first accepted node in edge insertion order wins, even if a cheaper one
//! exists further along the walk.

use crate::trie::{NodeId, Trie};

/// Result of a successful fuzzy step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyHit {
    /// Node reached after consuming the word.
    pub node: NodeId,
    /// Edit distance between the word and the trie path.
    pub cost: usize,
    /// Number of edges walked from the start node.
    pub depth: usize,
}

struct Frame {
    node: NodeId,
    ch: char,
    parent_row: usize,
    depth: usize,
}

/// Find the first node reachable from `start` whose path is within
/// `max_cost` edits of `word`.
pub fn search<V>(
    trie: &Trie<V>,
    start: NodeId,
    word: &[char],
    max_cost: usize,
    is_boundary: impl Fn(char) -> bool,
) -> Option<FuzzyHit> {
    if word.is_empty() {
        return None;
    }

    let mut rows: Vec<Vec<usize>> = vec![(0..=word.len()).collect()];
    let mut stack: Vec<Frame> = trie
        .children(start)
        .rev()
        .map(|(ch, node)| Frame {
            node,
            ch,
            parent_row: 0,
            depth: 1,
        })
        .collect();

    while let Some(frame) = stack.pop() {
        let row = next_row(&rows[frame.parent_row], word, frame.ch);
        let cost = row[word.len()];

        let accepts = trie.is_terminal(frame.node)
            || trie.children(frame.node).any(|(c, _)| is_boundary(c));
        if cost <= max_cost && accepts {
            return Some(FuzzyHit {
                node: frame.node,
                cost,
                depth: frame.depth,
            });
        }

        if row.iter().min().is_some_and(|&m| m <= max_cost) {
            rows.push(row);
            let parent_row = rows.len() - 1;
            stack.extend(trie.children(frame.node).rev().map(|(ch, node)| Frame {
                node,
                ch,
                parent_row,
                depth: frame.depth + 1,
            }));
        }
    }

    None
}

/// Levenshtein row for `word` after appending `ch` to the trie path.
fn next_row(prev: &[usize], word: &[char], ch: char) -> Vec<usize> {
    let mut row = Vec::with_capacity(prev.len());
    row.push(prev[0] + 1);
    for col in 1..prev.len() {
        let insert = row[col - 1] + 1;
        let delete = prev[col] + 1;
        let replace = prev[col - 1] + usize::from(word[col - 1] != ch);
        row.push(insert.min(delete).min(replace));
    }
    row
}

#[cfg(test)]
#[path = "fuzzy_tests.rs"]
mod tests;
