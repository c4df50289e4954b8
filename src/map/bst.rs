//! Unbalanced binary search tree map.
//!
//! Keys are kept in `Ord` order. Insertion walks from the root to an empty
//! slot or a matching key and never rotates, so sorted input degenerates the
//! tree into a list of height `n`. Random input gives `O(log n)` height on
//! average.
//!
//! # Examples
//!
//! ```
//! use word_replacer::map::BstMap;
//!
//! let mut map = BstMap::new();
//! map.put("cat".to_string(), "dog".to_string());
//! map.put("cat".to_string(), "wolf".to_string());
//!
//! assert_eq!(map.get("cat").map(String::as_str), Some("wolf"));
//! assert_eq!(map.len(), 1);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

use crate::map::traits::{MapStats, WordMap};

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn leaf(key: K, value: V) -> Self {
        Node {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// An ordered map backed by a plain binary search tree.
#[derive(Debug)]
pub struct BstMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for BstMap<K, V> {
    fn default() -> Self {
        BstMap { root: None, len: 0 }
    }
}

impl<K: Ord, V> BstMap<K, V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key -> value`, returning the previous value when the key was
    /// already present.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match key.cmp(&node.key) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => return Some(mem::replace(&mut node.value, value)),
            }
        }
        *slot = Some(Box::new(Node::leaf(key, value)));
        self.len += 1;
        None
    }

    /// Look up `key` by walking the same comparison path as [`BstMap::put`].
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }
}

impl<K, V> BstMap<K, V> {
    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path (0 for an empty tree).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K, V>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    /// Iterate over entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

// A degenerate tree is as deep as it is long; drop it without recursion.
impl<K, V> Drop for BstMap<K, V> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// In-order iterator over a [`BstMap`].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

impl WordMap for BstMap<String, String> {
    fn put(&mut self, key: String, value: String) {
        BstMap::put(self, key, value);
    }

    fn get(&self, key: &str) -> Option<&str> {
        BstMap::get(self, key).map(String::as_str)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn name(&self) -> &'static str {
        "bst"
    }

    fn stats(&self) -> MapStats {
        MapStats::tree(WordMap::name(self), self.len, self.height())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_and_get() {
        let mut map = BstMap::new();
        map.put("mango", 1);
        map.put("apple", 2);
        map.put("zebra", 3);

        assert_eq!(map.get("mango"), Some(&1));
        assert_eq!(map.get("apple"), Some(&2));
        assert_eq!(map.get("zebra"), Some(&3));
        assert_eq!(map.get("kiwi"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_overwrite_keeps_len() {
        let mut map = BstMap::new();
        assert_eq!(map.put("cat".to_string(), "dog".to_string()), None);
        assert_eq!(
            map.put("cat".to_string(), "wolf".to_string()),
            Some("dog".to_string())
        );

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("cat").map(String::as_str), Some("wolf"));
    }

    #[test]
    fn test_sorted_input_degenerates() {
        let mut map = BstMap::new();
        for i in 0..100 {
            map.put(i, i * 10);
        }

        assert_eq!(map.height(), 100);
        assert_eq!(map.get(&42), Some(&420));
    }

    #[test]
    fn test_iter_is_ordered() {
        let mut map = BstMap::new();
        for word in ["pear", "fig", "apple", "quince", "banana"] {
            map.put(word, word.len());
        }

        let keys: Vec<_> = map.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["apple", "banana", "fig", "pear", "quince"]);
    }

    #[test]
    fn test_deep_tree_drops() {
        let mut map = BstMap::new();
        for i in 0..10_000u32 {
            map.put(i, ());
        }
        assert_eq!(map.len(), 10_000);
        assert_eq!(map.height(), 10_000);
        drop(map);
    }

    #[test]
    fn test_word_map_stats() {
        let mut map: BstMap<String, String> = BstMap::new();
        WordMap::put(&mut map, "b".to_string(), "x".to_string());
        WordMap::put(&mut map, "a".to_string(), "y".to_string());
        WordMap::put(&mut map, "c".to_string(), "z".to_string());

        assert_eq!(WordMap::get(&map, "a"), Some("y"));
        assert_eq!(map.stats(), MapStats::tree("bst", 3, 2));
    }
}
