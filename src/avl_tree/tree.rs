use crate::avl_tree::node::Node;
use crate::avl_tree::{Error, Result, Violation};
use log::trace;
use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::mem;

pub type Tree<T> = Option<Box<Node<T>>>;

const ALLOWED_IMBALANCE: i32 = 1;

pub fn height<T>(tree: &Tree<T>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

// k2's left child becomes the root of the subtree
fn rotate_with_left_child<T>(mut k2: Box<Node<T>>) -> Box<Node<T>> {
    let mut k1 = match k2.left.take() {
        Some(k1) => k1,
        None => unreachable!(),
    };
    k2.left = k1.right.take();
    k2.update();
    k1.right = Some(k2);
    k1.update();
    k1
}

// k1's right child becomes the root of the subtree
fn rotate_with_right_child<T>(mut k1: Box<Node<T>>) -> Box<Node<T>> {
    let mut k2 = match k1.right.take() {
        Some(k2) => k2,
        None => unreachable!(),
    };
    k1.right = k2.left.take();
    k1.update();
    k2.left = Some(k1);
    k2.update();
    k2
}

fn double_with_left_child<T>(mut k3: Box<Node<T>>) -> Box<Node<T>> {
    k3.left = k3.left.take().map(rotate_with_right_child);
    rotate_with_left_child(k3)
}

fn double_with_right_child<T>(mut k1: Box<Node<T>>) -> Box<Node<T>> {
    k1.right = k1.right.take().map(rotate_with_left_child);
    rotate_with_right_child(k1)
}

// precondition: both subtrees of node are balanced and their heights differ by at most two
fn balance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    if node.balance() > ALLOWED_IMBALANCE {
        let outer = match node.left {
            Some(ref child) => height(&child.left) >= height(&child.right),
            None => unreachable!(),
        };
        if outer {
            trace!("left-heavy subtree, rotating with left child");
            rotate_with_left_child(node)
        } else {
            trace!("left-heavy subtree, double rotating with left child");
            double_with_left_child(node)
        }
    } else if node.balance() < -ALLOWED_IMBALANCE {
        let outer = match node.right {
            Some(ref child) => height(&child.right) >= height(&child.left),
            None => unreachable!(),
        };
        if outer {
            trace!("right-heavy subtree, rotating with right child");
            rotate_with_right_child(node)
        } else {
            trace!("right-heavy subtree, double rotating with right child");
            double_with_right_child(node)
        }
    } else {
        node.update();
        node
    }
}

// returns the new root of the subtree and the detached minimum element
fn remove_min<T>(mut node: Box<Node<T>>) -> (Tree<T>, T) {
    match node.left.take() {
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(balance(node)), min)
        },
        None => {
            let Node { element, right, .. } = *node;
            (right, element)
        },
    }
}

/// Inserts `element` into `tree` and returns the new root of the tree along with whether the
/// element was absent. An element equal to an existing one is dropped and the tree is left
/// untouched.
pub fn insert<T>(tree: Tree<T>, element: T) -> (Box<Node<T>>, bool)
where
    T: Ord,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (Box::new(Node::new(element)), true),
    };

    let inserted = match element.cmp(&node.element) {
        Ordering::Less => {
            let (left, inserted) = insert(node.left.take(), element);
            node.left = Some(left);
            inserted
        },
        Ordering::Greater => {
            let (right, inserted) = insert(node.right.take(), element);
            node.right = Some(right);
            inserted
        },
        Ordering::Equal => return (node, false),
    };

    if inserted {
        (balance(node), true)
    } else {
        (node, false)
    }
}

/// Removes the element equal to `key` from `tree` and returns the new root of the tree along
/// with the removed element, if any.
pub fn remove<T, Q>(tree: Tree<T>, key: &Q) -> (Tree<T>, Option<T>)
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut node = match tree {
        Some(node) => node,
        None => return (None, None),
    };

    let removed = match key.cmp(node.element.borrow()) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            removed
        },
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            removed
        },
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (Some(left), Some(right)) => {
                let (right, successor) = remove_min(right);
                node.left = Some(left);
                node.right = right;
                Some(mem::replace(&mut node.element, successor))
            },
            (left, right) => {
                let Node { element, .. } = *node;
                return (left.or(right), Some(element));
            },
        },
    };

    if removed.is_some() {
        (Some(balance(node)), removed)
    } else {
        (Some(node), None)
    }
}

pub fn contains<T, Q>(tree: &Tree<T>, key: &Q) -> bool
where
    T: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match key.cmp(node.element.borrow()) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.element
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.element
    })
}

/// Recomputes the height of `tree` from scratch, verifying the search order against the
/// exclusive bounds `lower` and `upper`, the balance of every node, and every cached height.
pub fn check<T>(tree: &Tree<T>, lower: Option<&T>, upper: Option<&T>) -> Result<i32>
where
    T: Ord,
{
    let node = match tree {
        Some(ref node) => node,
        None => return Ok(-1),
    };

    let above_lower = lower.map_or(true, |lower| node.element > *lower);
    let below_upper = upper.map_or(true, |upper| node.element < *upper);
    if !above_lower || !below_upper {
        return Err(Error::InvariantViolation(Violation::Unordered));
    }

    let left = check(&node.left, lower, Some(&node.element))?;
    let right = check(&node.right, Some(&node.element), upper)?;

    if (left - right).abs() > ALLOWED_IMBALANCE {
        return Err(Error::InvariantViolation(Violation::Unbalanced { left, right }));
    }

    let actual = cmp::max(left, right) + 1;
    if node.height != actual {
        return Err(Error::InvariantViolation(Violation::StaleHeight {
            cached: node.height,
            actual,
        }));
    }

    Ok(actual)
}
