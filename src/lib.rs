//! An in-memory ordered index backed by an avl tree.
//!
//! The index stores a duplicate-free set of elements ordered by their `Ord` implementation and
//! keeps the tree height-balanced across every insertion and removal.

pub mod avl_tree;
