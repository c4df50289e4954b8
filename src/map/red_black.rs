//! Red-black tree map.
//!
//! Nodes live in an arena and refer to each other by index, with parent links
//! so the insertion fixup can walk upward. The tree maintains:
//!
//! 1. the root is black,
//! 2. a red node never has a red child,
//! 3. every path from a node down to an empty position crosses the same
//!    number of black nodes.
//!
//! Together these bound the height by `2 * log2(n + 1)`.
//!
//! # Examples
//!
//! ```
//! use word_replacer::map::RedBlackMap;
//!
//! let mut map = RedBlackMap::new();
//! for i in 0..1000 {
//!     map.put(i, i * 2);
//! }
//!
//! assert_eq!(map.get(&500), Some(&1000));
//! assert!(map.height() <= 20);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use crate::map::traits::{MapStats, WordMap};

type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// An ordered map backed by a self-balancing red-black tree.
#[derive(Debug)]
pub struct RedBlackMap<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
}

impl<K, V> Default for RedBlackMap<K, V> {
    fn default() -> Self {
        RedBlackMap {
            nodes: Vec::new(),
            root: None,
        }
    }
}

impl<K: Ord, V> RedBlackMap<K, V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key -> value`, returning the previous value when the key was
    /// already present.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut parent = None;
        let mut current = self.root;
        let mut goes_left = false;

        while let Some(id) = current {
            let node = &mut self.nodes[id];
            parent = Some(id);
            match key.cmp(&node.key) {
                Ordering::Less => {
                    goes_left = true;
                    current = node.left;
                }
                Ordering::Greater => {
                    goes_left = false;
                    current = node.right;
                }
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            }
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            key,
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        });
        match parent {
            None => self.root = Some(id),
            Some(p) if goes_left => self.nodes[p].left = Some(id),
            Some(p) => self.nodes[p].right = Some(id),
        }

        self.insert_fixup(id);
        None
    }

    /// Look up `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left,
                Ordering::Greater => current = node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }
}

impl<K, V> RedBlackMap<K, V> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[id];
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Iterate over entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            map: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.nodes[id].color == Color::Red)
    }

    /// Restore the red-black invariants after inserting the red node `node`.
    fn insert_fixup(&mut self, mut node: NodeId) {
        while let Some(mut parent) = self.nodes[node].parent {
            if self.nodes[parent].color == Color::Black {
                break;
            }
            // A red parent is never the root, so the grandparent exists.
            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };
            let parent_is_left = self.nodes[grandparent].left == Some(parent);
            let uncle = if parent_is_left {
                self.nodes[grandparent].right
            } else {
                self.nodes[grandparent].left
            };

            if self.is_red(uncle) {
                // Red uncle: push the blackness down from the grandparent and
                // continue from there.
                if let Some(uncle) = uncle {
                    self.nodes[uncle].color = Color::Black;
                }
                self.nodes[parent].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            if parent_is_left {
                if self.nodes[parent].right == Some(node) {
                    // left-right: rotate into the left-left shape
                    self.rotate_left(parent);
                    mem::swap(&mut node, &mut parent);
                }
                // left-left
                self.nodes[parent].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                self.rotate_right(grandparent);
            } else {
                if self.nodes[parent].left == Some(node) {
                    // right-left: rotate into the right-right shape
                    self.rotate_right(parent);
                    mem::swap(&mut node, &mut parent);
                }
                // right-right
                self.nodes[parent].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                self.rotate_left(grandparent);
            }
            break;
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }

    fn rotate_left(&mut self, x: NodeId) {
        let Some(y) = self.nodes[x].right else {
            return;
        };
        let inner = self.nodes[y].left;
        self.nodes[x].right = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }
        self.replace_child(self.nodes[x].parent, x, y);
        self.nodes[y].left = Some(x);
        self.nodes[x].parent = Some(y);
    }

    fn rotate_right(&mut self, x: NodeId) {
        let Some(y) = self.nodes[x].left else {
            return;
        };
        let inner = self.nodes[y].right;
        self.nodes[x].left = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(x);
        }
        self.replace_child(self.nodes[x].parent, x, y);
        self.nodes[y].right = Some(x);
        self.nodes[x].parent = Some(y);
    }

    /// Hang `new` where `old` used to hang below `parent`.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        self.nodes[new].parent = parent;
        match parent {
            None => self.root = Some(new),
            Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = Some(new),
            Some(p) => self.nodes[p].right = Some(new),
        }
    }
}

/// In-order iterator over a [`RedBlackMap`].
pub struct Iter<'a, K, V> {
    map: &'a RedBlackMap<K, V>,
    stack: Vec<NodeId>,
}

impl<K, V> Iter<'_, K, V> {
    fn push_left_spine(&mut self, mut node: Option<NodeId>) {
        while let Some(id) = node {
            self.stack.push(id);
            node = self.map.nodes[id].left;
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let map = self.map;
        let node = &map.nodes[id];
        self.push_left_spine(node.right);
        Some((&node.key, &node.value))
    }
}

impl WordMap for RedBlackMap<String, String> {
    fn put(&mut self, key: String, value: String) {
        RedBlackMap::put(self, key, value);
    }

    fn get(&self, key: &str) -> Option<&str> {
        RedBlackMap::get(self, key).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn name(&self) -> &'static str {
        "rbt"
    }

    fn stats(&self) -> MapStats {
        MapStats::tree(WordMap::name(self), self.nodes.len(), self.height())
    }
}
