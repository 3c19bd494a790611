//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod node;
mod set;
mod tree;

pub use self::set::{AvlSet, AvlSetIntoIter, AvlSetIter};

use std::error;
use std::fmt;
use std::result;

/// A structural defect found by `AvlSet::check_invariant`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    /// A node's element is not strictly between the bounds imposed by its ancestors.
    Unordered,
    /// The heights of a node's two subtrees differ by more than one.
    Unbalanced { left: i32, right: i32 },
    /// A node's cached height disagrees with the height of its subtree.
    StaleHeight { cached: i32, actual: i32 },
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyContainer,
    InvariantViolation(Violation),
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyContainer => write!(f, "container is empty"),
            Error::InvariantViolation(Violation::Unordered) => {
                write!(f, "invariant violated: element out of search order")
            },
            Error::InvariantViolation(Violation::Unbalanced { left, right }) => write!(
                f,
                "invariant violated: subtree heights {} and {} differ by more than one",
                left, right,
            ),
            Error::InvariantViolation(Violation::StaleHeight { cached, actual }) => write!(
                f,
                "invariant violated: cached height {} but subtree height is {}",
                cached, actual,
            ),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
