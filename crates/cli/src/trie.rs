// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Arena-backed character trie.
//!
//! Nodes live in a single `Vec` and are addressed by [`NodeId`]; the root is
//! always at index 0. Removed nodes go onto a free list and are reused by
//! later insertions.
//!
//! Edges are kept in insertion order. Fuzzy search returns the first
//! acceptable node in that order, so it is part of the observable behavior.

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Clone)]
struct Node<V> {
    edges: Vec<(char, NodeId)>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            value: None,
        }
    }

    /// Number of edges plus the terminal slot, if set.
    fn content(&self) -> usize {
        self.edges.len() + usize::from(self.value.is_some())
    }
}

/// Character trie mapping registered keys to values.
#[derive(Debug, Clone)]
pub struct Trie<V> {
    nodes: Vec<Node<V>>,
    free: Vec<NodeId>,
    terminals: usize,
}

impl<V> Default for Trie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Trie<V> {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::empty()],
            free: Vec::new(),
            terminals: 0,
        }
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.terminals
    }

    pub fn is_empty(&self) -> bool {
        self.terminals == 0
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn child(&self, node: NodeId, ch: char) -> Option<NodeId> {
        self.nodes[node.0]
            .edges
            .iter()
            .find(|(c, _)| *c == ch)
            .map(|&(_, id)| id)
    }

    /// Outgoing edges of `node` in insertion order.
    pub fn children(&self, node: NodeId) -> impl DoubleEndedIterator<Item = (char, NodeId)> + '_ {
        self.nodes[node.0].edges.iter().copied()
    }

    pub fn value(&self, node: NodeId) -> Option<&V> {
        self.nodes[node.0].value.as_ref()
    }

    pub fn is_terminal(&self, node: NodeId) -> bool {
        self.nodes[node.0].value.is_some()
    }

    /// Follow `key` from the root. Returns the node spelling the whole key.
    pub fn walk(&self, key: &[char]) -> Option<NodeId> {
        key.iter()
            .try_fold(NodeId::ROOT, |node, &ch| self.child(node, ch))
    }

    /// Value stored for exactly `key`.
    pub fn get(&self, key: &[char]) -> Option<&V> {
        self.walk(key).and_then(|node| self.value(node))
    }

    /// Insert `key`, returning the previous value if it was already present.
    pub fn insert(&mut self, key: &[char], value: V) -> Option<V> {
        let mut node = NodeId::ROOT;
        for &ch in key {
            node = match self.child(node, ch) {
                Some(next) => next,
                None => {
                    let next = self.alloc();
                    self.nodes[node.0].edges.push((ch, next));
                    next
                }
            };
        }

        let previous = self.nodes[node.0].value.replace(value);
        if previous.is_none() {
            self.terminals += 1;
        }
        previous
    }

    /// Remove `key` and prune the nodes that only existed for it.
    ///
    /// Pruning walks back toward the root and stops at the first node that
    /// still has other content (another edge or its own terminal). Nodes of
    /// other keys are never touched.
    pub fn remove(&mut self, key: &[char]) -> Option<V> {
        let mut path = Vec::with_capacity(key.len());
        let mut node = NodeId::ROOT;
        for &ch in key {
            let next = self.child(node, ch)?;
            path.push((node, ch));
            node = next;
        }

        let value = self.nodes[node.0].value.take()?;
        self.terminals -= 1;

        if self.nodes[node.0].content() > 0 {
            return Some(value);
        }

        let mut orphan = node;
        while let Some((parent, ch)) = path.pop() {
            let shared = self.nodes[parent.0].content() > 1;
            self.nodes[parent.0].edges.retain(|&(c, _)| c != ch);
            self.release(orphan);
            if shared {
                break;
            }
            orphan = parent;
        }

        Some(value)
    }

    /// All registered keys with their values, in depth-first insertion order.
    pub fn entries(&self) -> Vec<(String, &V)> {
        let mut out = Vec::with_capacity(self.terminals);
        let mut stack = vec![(NodeId::ROOT, String::new())];

        while let Some((node, prefix)) = stack.pop() {
            if let Some(value) = self.value(node) {
                out.push((prefix.clone(), value));
            }
            for (ch, child) in self.children(node).rev() {
                let mut key = prefix.clone();
                key.push(ch);
                stack.push((child, key));
            }
        }

        out
    }

    fn alloc(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => id,
            None => {
                self.nodes.push(Node::empty());
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    fn release(&mut self, node: NodeId) {
        debug_assert_ne!(node, NodeId::ROOT);
        self.nodes[node.0] = Node::empty();
        self.free.push(node);
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
