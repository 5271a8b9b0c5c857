use alloc::vec::Vec;
use core::iter::FusedIterator;

use crate::{ErrorRecord, Key, node::SharedNode};

/// A depth-first iterator over the records of an [`Errors`] subtree.
///
/// Created by [`Errors::iter`]. Each node's own entries are yielded before
/// the entries of its children, and children are visited in creation order.
///
/// The iterator only locks a node for the duration of a single step, so the
/// trie may be written to between calls to [`next`](Iterator::next). Entries
/// appended to a node that has not been fully visited yet will still be
/// yielded.
///
/// [`Errors`]: crate::Errors
/// [`Errors::iter`]: crate::Errors::iter
#[must_use]
pub struct ErrorsIter {
    stack: Vec<Frame>,
}

struct Frame {
    node: SharedNode,
    path: Vec<Key>,
    next_entry: usize,
    next_child: usize,
}

enum Step {
    Yield(ErrorRecord),
    Descend(Frame),
    Finished,
}

impl Frame {
    fn new(node: SharedNode, path: Vec<Key>) -> Self {
        Self {
            node,
            path,
            next_entry: 0,
            next_child: 0,
        }
    }

    fn step(&mut self) -> Step {
        let node = self.node.read();
        if let Some(entry) = node.entries.get(self.next_entry) {
            self.next_entry += 1;
            return Step::Yield(entry.at_path(self.path.clone()));
        }
        if let Some((key, child)) = node.children.get_index(self.next_child) {
            self.next_child += 1;
            let mut path = self.path.clone();
            path.push(key.clone());
            return Step::Descend(Frame::new(child.clone(), path));
        }
        Step::Finished
    }
}

impl ErrorsIter {
    pub(crate) fn new(node: SharedNode, path: Vec<Key>) -> Self {
        Self {
            stack: alloc::vec![Frame::new(node, path)],
        }
    }
}

impl Iterator for ErrorsIter {
    type Item = ErrorRecord;

    fn next(&mut self) -> Option<ErrorRecord> {
        loop {
            let frame = self.stack.last_mut()?;
            match frame.step() {
                Step::Yield(record) => return Some(record),
                Step::Descend(child) => self.stack.push(child),
                Step::Finished => {
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for ErrorsIter {}
