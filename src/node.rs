//! Nodes of the compressed trie.
//!
//! A node owns its children directly. The discriminating character of each
//! child is kept in `keys`, in a vector parallel to `children`, so a node
//! only ever holds as many child slots as it has branches.
//!
//! The path of a node is the concatenation, from the root down, of each
//! ancestor's `common`, the edge character leading to the next node, and
//! finally the node's own `common`.

/// Length, in bytes, of the longest common prefix of `a` and `b`.
///
/// The result always falls on a `char` boundary of both strings.
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, x), y)| x != y)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| a.len().min(b.len()))
}

#[derive(Debug, PartialEq)]
pub(crate) struct Node {
    pub(crate) common: String,
    pub(crate) value: Option<String>,
    pub(crate) keys: Vec<char>,
    pub(crate) children: Vec<Node>,
}

impl Node {
    pub(crate) fn new(common: String) -> Self {
        #[cfg(test)]
        tracker::created();
        Self {
            common,
            value: None,
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Index of the child reached through `c`, if any.
    pub(crate) fn find_child(&self, c: char) -> Option<usize> {
        self.keys.iter().position(|&k| k == c)
    }

    /// Is `rest` wholly consumed by this node's compressed prefix?
    pub(crate) fn covers(&self, rest: &str) -> bool {
        common_prefix_len(&self.common, rest) == rest.len()
    }

    /// Walk down from this node as far as `key` allows.
    ///
    /// Returns the deepest node reached, together with the part of `key`
    /// still unmatched when that node was entered (its `common` has not
    /// been consumed from it).
    pub(crate) fn locate<'k>(&self, key: &'k str) -> (&Node, &'k str) {
        let mut node = self;
        let mut rest = key;
        while let Some((c, idx)) = node.next_hop(rest) {
            rest = &rest[node.common.len() + c.len_utf8()..];
            node = &node.children[idx];
        }
        (node, rest)
    }

    /// Mutable twin of [`Node::locate`].
    pub(crate) fn locate_mut<'k>(&mut self, key: &'k str) -> (&mut Node, &'k str) {
        let mut node = self;
        let mut rest = key;
        while let Some((c, idx)) = node.next_hop(rest) {
            rest = &rest[node.common.len() + c.len_utf8()..];
            node = &mut node.children[idx];
        }
        (node, rest)
    }

    // Descent is only possible once the whole of `common` has matched and
    // `rest` carries on past it.
    fn next_hop(&self, rest: &str) -> Option<(char, usize)> {
        let at = common_prefix_len(&self.common, rest);
        if at < self.common.len() {
            return None;
        }
        let c = rest[at..].chars().next()?;
        self.find_child(c).map(|idx| (c, idx))
    }

    /// Splice `rest` into the subtree at this node.
    ///
    /// `rest` must be the unmatched remainder returned by `locate` for this
    /// node. Returns the node which terminates `rest`; the caller stores
    /// the value on it.
    pub(crate) fn split(&mut self, rest: &str) -> &mut Node {
        let at = common_prefix_len(&self.common, rest);
        if at < self.common.len() {
            self.demote(at);
        }
        match rest[at..].chars().next() {
            None => self,
            Some(c) => {
                let tail = &rest[at + c.len_utf8()..];
                tracing::trace!(edge = %c, common = %tail, "attaching leaf");
                let leaf = Node::new(tail.to_owned());
                self.attach(c, leaf)
            }
        }
    }

    // Truncate `common` to `at` bytes, pushing the tail of the edge, the
    // value and all existing children down into a single new child.
    fn demote(&mut self, at: usize) {
        let tail = self.common.split_off(at);
        self.common.shrink_to_fit();
        let mut chars = tail.chars();
        let Some(edge) = chars.next() else {
            return;
        };
        tracing::trace!(kept = %self.common, edge = %edge, moved = %chars.as_str(), "splitting edge");

        let mut left = Node::new(chars.as_str().to_owned());
        left.value = self.value.take();
        left.keys = std::mem::take(&mut self.keys);
        left.children = std::mem::take(&mut self.children);

        self.keys = vec![edge];
        self.children = vec![left];
    }

    fn attach(&mut self, c: char, child: Node) -> &mut Node {
        debug_assert!(self.find_child(c).is_none(), "duplicate child key");
        self.keys.reserve_exact(1);
        self.keys.push(c);
        self.children.reserve_exact(1);
        self.children.push(child);
        let idx = self.children.len() - 1;
        &mut self.children[idx]
    }
}

#[cfg(test)]
impl Drop for Node {
    fn drop(&mut self) {
        tracker::dropped();
    }
}
