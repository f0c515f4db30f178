use alloc::string::String;
use core::{fmt, ptr::NonNull};

use crate::{links, AvlTree, Links, TreeNode};

impl<T> AvlTree<T>
where
    T: TreeNode<Links<T>> + ?Sized,
    T::Key: fmt::Debug,
{
    /// Writes the shape of the tree as an indented ASCII tree, one key per line.
    ///
    /// Each node is followed by its right subtree and then its left subtree. The output is meant
    /// for debugging and its format is not stable.
    pub fn dump<W: fmt::Write>(&self, mut w: W) -> fmt::Result {
        let Some(root) = self.root else {
            return Ok(());
        };

        let mut prefix = String::new();
        unsafe { self.dump_at(&mut w, root, &mut prefix, true) }
    }

    #[allow(clippy::only_used_in_recursion)]
    unsafe fn dump_at<W: fmt::Write>(
        &self,
        w: &mut W,
        node: NonNull<T>,
        prefix: &mut String,
        is_tail: bool,
    ) -> fmt::Result {
        let key = unsafe { node.as_ref().key() };
        let branch = if is_tail { "└── " } else { "├── " };
        writeln!(w, "{prefix}{branch}{key:?}")?;

        let len = prefix.len();
        prefix.push_str(if is_tail { "    " } else { "│   " });

        let (left, right) = unsafe { (links(node).left(), links(node).right()) };

        if let Some(right) = right {
            unsafe { self.dump_at(w, right, prefix, left.is_none())? };
        }

        if let Some(left) = left {
            unsafe { self.dump_at(w, left, prefix, true)? };
        }

        prefix.truncate(len);

        Ok(())
    }
}
