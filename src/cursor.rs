use core::{fmt, marker::PhantomData, mem, ptr::NonNull};

use crate::{links, subtree_min, AvlTree, Link, Links, TreeNode};

/// An in-order cursor over an [`AvlTree`].
///
/// The cursor keeps no stack. Its position is the pair `(current, prev)`, where `prev` is the node
/// it arrived at `current` from: either the parent it descended from or the child whose subtree it
/// just finished. Once every element has been visited the cursor rests at `(None, root)`, which is
/// the position returned by [`AvlTree::end`].
///
/// Two cursors are equal only if both halves of their positions are equal.
pub struct Cursor<'tree, T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    pub(crate) current: Link<T>,
    pub(crate) prev: Link<T>,
    phantom: PhantomData<&'tree AvlTree<T>>,
}

// How the cursor reached `current`.
enum Arrival {
    // Down from the parent, `current` being its left child.
    DescendedLeft,
    // Down from the parent, `current` being its right child.
    DescendedRight,
    // Up from the left child, or at a root with no left child.
    AscendedFromLeft,
}

impl<'tree, T> Cursor<'tree, T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    pub(crate) fn begin(tree: &'tree AvlTree<T>) -> Cursor<'tree, T> {
        let Some(root) = tree.root else {
            return Cursor::new(None, None);
        };

        unsafe {
            let first = subtree_min(root);
            Cursor::new(Some(first), links(first).parent())
        }
    }

    pub(crate) fn end(tree: &'tree AvlTree<T>) -> Cursor<'tree, T> {
        Cursor::new(None, tree.root)
    }

    pub(crate) fn new(current: Link<T>, prev: Link<T>) -> Cursor<'tree, T> {
        Cursor {
            current,
            prev,
            phantom: PhantomData,
        }
    }

    /// Returns a reference to the item the cursor points at.
    ///
    /// This returns `None` once the cursor has passed the last element.
    pub fn get(&self) -> Option<&'tree T> {
        self.current.map(|cur| unsafe { cur.as_ref() })
    }

    /// Returns `true` if the cursor has passed the last element.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Moves the cursor to the next element in key order.
    ///
    /// Moving past the last element leaves the cursor at the tree's end position; moving a cursor
    /// that is already there does nothing.
    pub fn move_next(&mut self) {
        let Some(cur) = self.current else {
            return;
        };

        unsafe {
            match (self.arrival(cur), links(cur).right()) {
                // The right subtree comes next, starting from its minimum.
                (_, Some(right)) => {
                    let min = subtree_min(right);
                    self.current = Some(min);
                    self.prev = links(min).parent();
                }

                // `cur` is a finished left child, so its parent is next.
                (Arrival::DescendedLeft, None) => mem::swap(&mut self.current, &mut self.prev),

                (Arrival::DescendedRight | Arrival::AscendedFromLeft, None) => self.climb(cur),
            }
        }
    }

    unsafe fn arrival(&self, cur: NonNull<T>) -> Arrival {
        unsafe {
            match self.prev {
                Some(prev) if links(prev).left() == Some(cur) => Arrival::DescendedLeft,
                Some(prev) if links(prev).right() == Some(cur) => Arrival::DescendedRight,
                prev => {
                    debug_assert_eq!(
                        links(cur).left(),
                        prev,
                        "cursor position does not match the tree"
                    );
                    Arrival::AscendedFromLeft
                }
            }
        }
    }

    // Ascends from the finished subtree rooted at `cur` until arriving at an ancestor from its left
    // side, or past the root.
    unsafe fn climb(&mut self, cur: NonNull<T>) {
        let mut prev = cur;
        let mut current = unsafe { links(cur).parent() };

        while let Some(node) = current {
            if unsafe { links(node).right() } != Some(prev) {
                break;
            }

            prev = node;
            current = unsafe { links(node).parent() };
        }

        self.current = current;
        self.prev = Some(prev);
    }
}

impl<T> Clone for Cursor<'_, T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> where T: TreeNode<Links<T>> + ?Sized {}

impl<T> PartialEq for Cursor<'_, T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current && self.prev == other.prev
    }
}

impl<T> Eq for Cursor<'_, T> where T: TreeNode<Links<T>> + ?Sized {}

impl<T> fmt::Debug for Cursor<'_, T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current)
            .field("prev", &self.prev)
            .finish()
    }
}
