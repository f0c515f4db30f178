//! An intrusive AVL tree, and an ordered map built on top of it.
#![no_std]

// Conventions used in comments:
// - The height of a node `x` is denoted `h(x)`. It counts the nodes on the longest downward path
//   from `x`, so a leaf has height 1 and a missing child has height 0.
// - The balance factor of a node `x` is `b(x) = h(right(x)) - h(left(x))`.
// - A node is right-heavy if `b(x) > 0` and left-heavy if `b(x) < 0`.
//
// The fundamental invariants of an AVL tree are:
// 1. Every key in the left subtree of `x` is less than the key of `x`, and every key in the right
//    subtree is greater.
// 2. `b(x) ∈ {-1, 0, 1}` for every node `x`.
// 3. `h(x) = 1 + max(h(left(x)), h(right(x)))` for every node `x`.
//
// Corollaries:
// 4. Inserting or removing a single leaf changes heights only on the path from that leaf to the
//    root, and on that path `|b(x)| ≤ 2`.
//
//    Proof sketch: a subtree's height changes by at most one per insertion or removal, and before
//    the change every balance factor on the path was in {-1, 0, 1}.
//
// 5. A single or double rotation at a node `x` with `|b(x)| = 2` leaves every node of the rotated
//    subtree with `|b| ≤ 1`, and the subtree's height either stays the same or drops by one.
//
// Thus walking from the point of change to the root, recomputing heights and rotating wherever
// `|b(x)| = 2`, restores (2) and (3) everywhere.

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

use core::{
    borrow::Borrow, cell::UnsafeCell, cmp::Ordering, marker::PhantomPinned, mem, ops::Not,
    pin::Pin, ptr::NonNull,
};

use cordyceps::Linked;

mod cursor;
mod error;
mod iter;

#[cfg(feature = "alloc")]
mod debug;
#[cfg(feature = "alloc")]
pub mod map;
#[cfg(all(feature = "alloc", any(test, feature = "model")))]
pub mod model;

pub use cursor::Cursor;
pub use error::{Error, InvariantViolation};
pub use iter::Iter;
#[cfg(feature = "alloc")]
pub use map::AvlMap;

pub trait TreeNode<L>: Linked<L> {
    type Key: Ord;

    fn key(&self) -> &Self::Key;
}

/// An intrusive AVL tree.
///
/// Nodes are owned by the tree through their [`Linked::Handle`]. Child links own the subtree
/// below them; parent links are only used for navigation.
pub struct AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    root: Link<T>,
    len: usize,
}

pub struct Links<T: ?Sized> {
    inner: UnsafeCell<LinksInner<T>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Dir {
    Left = 0,
    Right = 1,
}

impl Not for Dir {
    type Output = Dir;

    fn not(self) -> Self::Output {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[repr(C)]
struct LinksInner<T: ?Sized> {
    parent: Link<T>,
    children: [Link<T>; 2],
    height: u8,
    _unpin: PhantomPinned,
}

type Link<T> = Option<NonNull<T>>;

impl<T> AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    /// Returns a new empty tree.
    pub const fn new() -> AvlTree<T> {
        AvlTree { root: None, len: 0 }
    }

    /// Returns `true` if the tree contains no elements.
    pub const fn is_empty(&self) -> bool {
        let empty = self.len() == 0;

        if cfg!(debug_assertions) {
            // Can't use assert_eq!() in const fn.
            assert!(empty == self.root.is_none());
        }

        empty
    }

    /// Returns the number of elements in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the height of the tree: the number of nodes on its longest root-to-leaf path.
    pub fn height(&self) -> usize {
        unsafe { height_of(self.root) as usize }
    }

    /// Checks every structural invariant of the tree.
    ///
    /// This walks the whole tree and completes in _O(n)_ time.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root else {
            return match self.len {
                0 => Ok(()),
                len => Err(InvariantViolation::LengthMismatch { len, counted: 0 }),
            };
        };

        unsafe {
            if links(root).parent().is_some() {
                return Err(InvariantViolation::RootHasParent);
            }

            let mut counted = 0;
            self.check_invariants_at(root, None, None, &mut counted)?;

            if counted != self.len {
                return Err(InvariantViolation::LengthMismatch {
                    len: self.len,
                    counted,
                });
            }
        }

        Ok(())
    }

    #[doc(hidden)]
    pub fn assert_invariants(&self) {
        if let Err(violation) = self.check_invariants() {
            panic!("AVL tree invariant violated: {violation}");
        }
    }

    // Checks the subtree rooted at `node`, whose keys must lie strictly between `lower` and
    // `upper`. Returns the computed height of the subtree.
    #[allow(clippy::only_used_in_recursion)]
    unsafe fn check_invariants_at<'a>(
        &'a self,
        node: NonNull<T>,
        lower: Option<&'a T::Key>,
        upper: Option<&'a T::Key>,
        counted: &mut usize,
    ) -> Result<u8, InvariantViolation> {
        *counted += 1;

        unsafe {
            let key: &'a T::Key = node.as_ref().key();

            if lower.is_some_and(|lower| lower >= key) || upper.is_some_and(|upper| upper <= key) {
                return Err(InvariantViolation::OutOfOrder);
            }

            let mut child_heights = [0; 2];

            for dir in [Dir::Left, Dir::Right] {
                let Some(child) = links(node).child(dir) else {
                    continue;
                };

                // Ensure child's parent link points to this node.
                if links(child).parent() != Some(node) {
                    return Err(InvariantViolation::ParentMismatch);
                }

                let (lower, upper) = match dir {
                    Dir::Left => (lower, Some(key)),
                    Dir::Right => (Some(key), upper),
                };

                child_heights[dir as usize] =
                    self.check_invariants_at(child, lower, upper, counted)?;
            }

            let [left, right] = child_heights;
            let computed = 1 + left.max(right);
            let stored = links(node).height();

            if stored != computed {
                return Err(InvariantViolation::HeightMismatch { stored, computed });
            }

            let balance = right as i8 - left as i8;
            if !(-1..=1).contains(&balance) {
                return Err(InvariantViolation::Unbalanced { balance });
            }

            Ok(computed)
        }
    }

    /// Returns `true` if the tree contains an element with the given key.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        self.get_raw(key).is_some()
    }

    /// Returns a reference to the node corresponding to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<Pin<&T>>
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let ptr = self.get_raw(key)?;
        unsafe { Some(Pin::new_unchecked(ptr.as_ref())) }
    }

    /// Returns a pinned mutable reference to the node corresponding to `key`.
    ///
    /// The key of the returned node must not be modified in a way that changes its ordering
    /// relative to the other keys in the tree.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<Pin<&mut T>>
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let mut ptr = self.get_raw(key)?;
        unsafe { Some(Pin::new_unchecked(ptr.as_mut())) }
    }

    fn get_raw<Q>(&self, key: &Q) -> Link<T>
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let mut opt_cur = self.root;

        loop {
            let cur = opt_cur?;

            unsafe {
                match key.cmp(cur.as_ref().key().borrow()) {
                    Ordering::Less => opt_cur = links(cur).left(),
                    Ordering::Equal => return Some(cur),
                    Ordering::Greater => opt_cur = links(cur).right(),
                }
            }
        }
    }

    /// Returns the minimum element of the tree.
    pub fn first(&self) -> Option<Pin<&T>> {
        let root = self.root?;

        unsafe {
            let first = subtree_min(root);
            Some(Pin::new_unchecked(first.as_ref()))
        }
    }

    /// Returns the maximum element of the tree.
    pub fn last(&self) -> Option<Pin<&T>> {
        let root = self.root?;

        unsafe {
            let last = subtree_max(root);
            Some(Pin::new_unchecked(last.as_ref()))
        }
    }

    /// Returns an iterator over the elements of the tree, in key order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a cursor positioned at the minimum element of the tree.
    ///
    /// For an empty tree the returned cursor equals [`end`](Self::end).
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::begin(self)
    }

    /// Returns the terminal cursor of the tree.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::end(self)
    }

    unsafe fn maybe_set_parent(&mut self, opt_node: Link<T>, parent: Link<T>) {
        let Some(node) = opt_node else {
            return;
        };

        unsafe { links_mut(node).set_parent(parent) };
    }

    #[inline]
    unsafe fn replace_child_or_set_root(
        &mut self,
        parent: Link<T>,
        old_child: NonNull<T>,
        new_child: Link<T>,
    ) {
        match parent {
            Some(parent) => unsafe { self.replace_child(parent, old_child, new_child) },
            None => self.root = new_child,
        }
    }

    // Replaces the child pointer of `parent` pointing at `old_child` with `new_child`.
    //
    // `new_child`'s parent pointer is not updated.
    //
    // # Safety
    //
    // The caller must ensure that `old_child` is a child node of `parent`.
    #[inline]
    unsafe fn replace_child(
        &mut self,
        parent: NonNull<T>,
        old_child: NonNull<T>,
        new_child: Link<T>,
    ) {
        unsafe {
            let dir = self.which_child(parent, old_child);
            debug_assert_eq!(
                links(parent).child(dir),
                Some(old_child),
                "`old_child` must be a child of `parent`"
            );

            links_mut(parent).set_child(dir, new_child);
        }
    }

    // Rotates the subtree rooted at `down` so that `down` moves in direction `dir` and its child
    // on the opposite side takes its place. Returns the new subtree root.
    //
    // The heights of `down` and the promoted child are recomputed; no other node is touched.
    unsafe fn rotate(&mut self, down: NonNull<T>, dir: Dir) -> NonNull<T> {
        unsafe {
            let up = links(down)
                .child(!dir)
                .expect("rotation requires a child on the opposite side");

            // - `down` becomes the `dir` child of `up`.
            // - `across` goes from the `dir` child of `up` to the `!dir` child of `down`.
            let across = links(up).child(dir);
            links_mut(down).set_child(!dir, across);
            self.maybe_set_parent(across, Some(down));

            links_mut(up).set_child(dir, Some(down));
            let parent = links_mut(down).set_parent(Some(up));
            links_mut(up).set_parent(parent);

            self.replace_child_or_set_root(parent, down, Some(up));

            // `down` is now below `up`, so its height must be settled first.
            self.update_height(down);
            self.update_height(up);

            tracing::trace!(
                ?dir,
                down_height = links(down).height(),
                up_height = links(up).height(),
                "rotated"
            );

            up
        }
    }

    // Restores the balance of `node`, whose balance factor is +2 or -2, with a single or double
    // rotation. Returns the node now occupying `node`'s former position.
    unsafe fn rebalance(&mut self, node: NonNull<T>) -> NonNull<T> {
        unsafe {
            let balance = self.balance_factor(node);
            tracing::trace!(balance, "rebalancing");

            let heavy = match balance {
                2 => Dir::Right,
                -2 => Dir::Left,
                -1..=1 => return node,
                _ => unreachable!("balance factor {balance} after a single insertion or removal"),
            };

            let q = links(node)
                .child(heavy)
                .expect("the heavy side of an unbalanced node has a child");

            // If `q` leans away from the heavy side, straighten it first.
            let q_balance = self.balance_factor(q);
            let q_leans_away = match heavy {
                Dir::Right => q_balance < 0,
                Dir::Left => q_balance > 0,
            };

            if q_leans_away {
                self.rotate(q, heavy);
            }

            self.rotate(node, !heavy)
        }
    }

    // Walks from `start` up to the root, recomputing heights and rebalancing where needed.
    fn retrace(&mut self, start: Link<T>) {
        let mut opt_cur = start;

        while let Some(cur) = opt_cur {
            unsafe {
                self.update_height(cur);

                let top = if self.balance_factor(cur).abs() >= 2 {
                    self.rebalance(cur)
                } else {
                    cur
                };

                opt_cur = links(top).parent();
            }
        }
    }

    /// Inserts an item into the tree.
    ///
    /// If the tree already contains an item with an equal key, `item` takes its place without
    /// changing the shape of the tree, and the replaced item is returned.
    ///
    /// This operation completes in _O(log(n))_ time.
    pub fn insert(&mut self, item: T::Handle) -> Option<T::Handle> {
        let ptr = T::into_ptr(item);

        unsafe { links_mut(ptr).reset() };

        let Some(root) = self.root else {
            // Tree is empty. Set `item` as the root and return.
            self.root = Some(ptr);
            self.len += 1;
            return None;
        };

        let mut parent = root;

        // Descend the tree, looking for the empty slot that `item` belongs in.
        loop {
            let ordering = unsafe { ptr.as_ref().key().cmp(parent.as_ref().key()) };

            let dir = match ordering {
                Ordering::Less => Dir::Left,
                Ordering::Equal => return Some(unsafe { self.replace_at(parent, ptr) }),
                Ordering::Greater => Dir::Right,
            };

            unsafe {
                match links(parent).child(dir) {
                    // Descend.
                    Some(child) => parent = child,

                    // Set `item` as child.
                    None => {
                        links_mut(parent).set_child(dir, Some(ptr));
                        links_mut(ptr).set_parent(Some(parent));
                        break;
                    }
                }
            }
        }

        self.len += 1;
        self.retrace(Some(ptr));

        None
    }

    // Puts `new` in the exact position of `old` and returns `old`.
    unsafe fn replace_at(&mut self, old: NonNull<T>, new: NonNull<T>) -> T::Handle {
        unsafe {
            let parent = links(old).parent();
            let left = links(old).left();
            let right = links(old).right();
            let height = links(old).height();

            self.replace_child_or_set_root(parent, old, Some(new));
            self.maybe_set_parent(left, Some(new));
            self.maybe_set_parent(right, Some(new));

            let new_links = links_mut(new);
            new_links.set_parent(parent);
            new_links.set_left(left);
            new_links.set_right(right);
            new_links.set_height(height);

            links_mut(old).reset();

            T::from_ptr(old)
        }
    }

    /// Removes the item with the given key from the tree, if present.
    ///
    /// This operation completes in _O(log(n))_ time.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T::Handle>
    where
        T::Key: Borrow<Q> + Ord,
        Q: Ord + ?Sized,
    {
        let node = self.get_raw(key)?;
        Some(unsafe { self.remove_at(node) })
    }

    /// Removes and returns the minimum element of the tree.
    pub fn pop_first(&mut self) -> Option<T::Handle> {
        let first = unsafe { subtree_min(self.root?) };
        Some(unsafe { self.remove_at(first) })
    }

    /// Removes and returns the maximum element of the tree.
    pub fn pop_last(&mut self) -> Option<T::Handle> {
        let last = unsafe { subtree_max(self.root?) };
        Some(unsafe { self.remove_at(last) })
    }

    /// Removes an arbitrary node from the tree.
    ///
    /// # Safety
    ///
    /// It is the caller's responsibility to ensure that `node` is an element of `self`, and not any
    /// other tree.
    pub unsafe fn remove_at(&mut self, node: NonNull<T>) -> T::Handle {
        // There are three possible cases:
        //
        // 1. `node` has two children.
        //
        //    In this case `node` trades places with its predecessor[^1], taking over the
        //    predecessor's links and height and handing over its own. The predecessor has no
        //    right child, so afterwards `node` falls under case 2 or 3.
        //
        // 2. `node` has one child.
        //
        //    The child is spliced into `node`'s position. Heights may shrink from the child
        //    upwards.
        //
        // 3. `node` is a leaf.
        //
        //    `node` is detached from its parent. Heights may shrink from the parent upwards.
        //
        // [^1]: The predecessor of a node `a` is the greatest node in `a`'s left subtree.

        unsafe {
            if let (Some(left), Some(_)) = (links(node).left(), links(node).right()) {
                let predecessor = subtree_max(left);
                self.swap_with_predecessor(node, predecessor);
            }

            let parent = links(node).parent();
            let child = links(node).left().or(links(node).right());

            self.replace_child_or_set_root(parent, node, child);
            self.maybe_set_parent(child, parent);

            links_mut(node).reset();
            self.len -= 1;

            self.retrace(child.or(parent));

            T::from_ptr(node)
        }
    }

    // Exchanges the positions of `node` and its predecessor `pred`, which lies in `node`'s left
    // subtree and has no right child. Heights stay with the position, so the shape of the tree and
    // all of its heights are unchanged; only the in-order position of `node` moves.
    unsafe fn swap_with_predecessor(&mut self, node: NonNull<T>, pred: NonNull<T>) {
        unsafe {
            let parent = links(node).parent();
            let left = links(node).left();
            let right = links(node).right();
            let height = links(node).height();

            let pred_parent = links(pred).parent();
            let pred_left = links(pred).left();
            let pred_height = links(pred).height();

            debug_assert!(links(pred).right().is_none());

            // `pred` takes `node`'s place.
            self.replace_child_or_set_root(parent, node, Some(pred));
            links_mut(pred).set_parent(parent);
            links_mut(pred).set_right(right);
            self.maybe_set_parent(right, Some(pred));
            links_mut(pred).set_height(height);

            if left == Some(pred) {
                links_mut(pred).set_left(Some(node));
                links_mut(node).set_parent(Some(pred));
            } else {
                let pred_parent =
                    pred_parent.expect("a predecessor below the left child has a parent");

                links_mut(pred).set_left(left);
                self.maybe_set_parent(left, Some(pred));

                links_mut(pred_parent).set_right(Some(node));
                links_mut(node).set_parent(Some(pred_parent));
            }

            // `node` takes `pred`'s place.
            links_mut(node).set_left(pred_left);
            self.maybe_set_parent(pred_left, Some(node));
            links_mut(node).set_right(None);
            links_mut(node).set_height(pred_height);
        }
    }

    /// Clears the tree, removing all elements.
    pub fn clear(&mut self) {
        let mut opt_cur = self.root;

        while let Some(cur) = opt_cur {
            unsafe {
                // Descend to the minimum node.
                let (cur, parent) = min_in_subtree(cur);
                let parent = parent.or_else(|| links(cur).parent());

                let right = links(cur).right();

                // Elevate the node's right child (which may be None).
                self.replace_child_or_set_root(parent, cur, right);
                self.maybe_set_parent(right, parent);

                // Drop the node.
                links_mut(cur).reset();
                drop(T::from_ptr(cur));
                self.len -= 1;

                // If the node had no right child, climb to the parent. If the node had no parent,
                // the tree is empty.
                opt_cur = right.or(parent);
            }
        }

        debug_assert!(self.root.is_none());
        debug_assert_eq!(self.len(), 0);
    }

    // Support methods ========================================================

    #[inline]
    unsafe fn update_height(&mut self, node: NonNull<T>) {
        unsafe {
            let left = height_of(links(node).left());
            let right = height_of(links(node).right());
            links_mut(node).set_height(1 + left.max(right));
        }
    }

    #[inline]
    unsafe fn balance_factor(&self, node: NonNull<T>) -> i8 {
        unsafe {
            let left = height_of(links(node).left());
            let right = height_of(links(node).right());
            right as i8 - left as i8
        }
    }

    unsafe fn which_child(&self, parent: NonNull<T>, child: NonNull<T>) -> Dir {
        if unsafe { links(parent).left() } == Some(child) {
            Dir::Left
        } else {
            Dir::Right
        }
    }
}

impl<T> Default for AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'tree, T> IntoIterator for &'tree AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    type Item = &'tree T;
    type IntoIter = Iter<'tree, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[inline]
unsafe fn links<'a, T>(node: NonNull<T>) -> &'a Links<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    unsafe { T::links(node).as_ref() }
}

#[inline]
unsafe fn links_mut<'a, T>(node: NonNull<T>) -> &'a mut Links<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    unsafe { T::links(node).as_mut() }
}

/// Returns the height of the pointed-to node, or 0 for a missing node.
#[inline]
unsafe fn height_of<T>(node: Link<T>) -> u8
where
    T: TreeNode<Links<T>> + ?Sized,
{
    node.map(|n| unsafe { links(n).height() }).unwrap_or(0)
}

// Returns the minimum node in the subtree.
//
// If the subtree root is not the minimum, also returns the minimum node's parent.
#[inline]
unsafe fn min_in_subtree<T>(root: NonNull<T>) -> (NonNull<T>, Link<T>)
where
    T: TreeNode<Links<T>> + ?Sized,
{
    let mut parent = None;
    let mut cur = root;

    while let Some(left) = unsafe { links(cur).left() } {
        parent = Some(cur);
        cur = left;
    }

    (cur, parent)
}

#[inline]
unsafe fn subtree_min<T>(root: NonNull<T>) -> NonNull<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    unsafe { min_in_subtree(root).0 }
}

#[inline]
unsafe fn subtree_max<T>(root: NonNull<T>) -> NonNull<T>
where
    T: TreeNode<Links<T>> + ?Sized,
{
    let mut cur = root;

    while let Some(right) = unsafe { links(cur).right() } {
        cur = right;
    }

    cur
}

impl<T: ?Sized> Links<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: UnsafeCell::new(LinksInner {
                parent: None,
                children: [None; 2],
                height: 0,
                _unpin: PhantomPinned,
            }),
        }
    }

    #[inline]
    fn height(&self) -> u8 {
        unsafe { (*self.inner.get()).height }
    }

    #[inline]
    fn parent(&self) -> Link<T> {
        unsafe { (*self.inner.get()).parent }
    }

    #[inline]
    fn child(&self, dir: Dir) -> Link<T> {
        unsafe { (*self.inner.get()).children[dir as usize] }
    }

    #[inline]
    fn left(&self) -> Link<T> {
        self.child(Dir::Left)
    }

    #[inline]
    fn right(&self) -> Link<T> {
        self.child(Dir::Right)
    }

    #[inline]
    fn set_parent(&mut self, parent: Link<T>) -> Link<T> {
        mem::replace(&mut self.inner.get_mut().parent, parent)
    }

    #[inline]
    fn set_child(&mut self, dir: Dir, child: Link<T>) -> Link<T> {
        mem::replace(&mut self.inner.get_mut().children[dir as usize], child)
    }

    #[inline]
    fn set_left(&mut self, left: Link<T>) -> Link<T> {
        self.set_child(Dir::Left, left)
    }

    #[inline]
    fn set_right(&mut self, right: Link<T>) -> Link<T> {
        self.set_child(Dir::Right, right)
    }

    #[inline]
    fn set_height(&mut self, height: u8) {
        self.inner.get_mut().height = height;
    }

    // Unlinks the node and gives it the height of a lone leaf.
    #[inline]
    fn reset(&mut self) {
        let inner = self.inner.get_mut();
        inner.parent = None;
        inner.children = [None; 2];
        inner.height = 1;
    }
}

impl<T: ?Sized> Default for Links<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> core::fmt::Debug for Links<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Links")
            .field("parent", &self.parent())
            .field("left", &self.left())
            .field("right", &self.right())
            .field("height", &self.height())
            .finish()
    }
}
