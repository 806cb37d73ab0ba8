use crate::config::INITIAL_HEIGHT;

/// A forward link: the arena index of the next node on a level, if any.
pub(crate) type Link = Option<usize>;

/// Where a descent currently stands. Predecessors in the update table are
/// either the head sentinel or a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Position {
    Head,
    Node(usize),
}

/// A value plus one forward link per level it participates in. The link array
/// is sized once at construction and never resized.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    value: T,
    forward: Box<[Link]>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, height: usize) -> Self {
        debug_assert!(height >= 1, "nodes must be at least one level tall");
        Node {
            value,
            forward: vec![None; height].into_boxed_slice(),
        }
    }

    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    pub(crate) fn height(&self) -> usize {
        self.forward.len()
    }

    /// # Panics
    ///
    /// Panics if `level >= self.height()`.
    #[inline]
    pub(crate) fn forward(&self, level: usize) -> Link {
        self.forward[level]
    }

    /// # Panics
    ///
    /// Panics if `level >= self.height()`.
    #[inline]
    pub(crate) fn set_forward(&mut self, level: usize, link: Link) {
        self.forward[level] = link;
    }
}

/// The valueless sentinel every descent starts from. Unlike regular nodes its
/// height tracks the tallest node in the list, so the links live in a growable
/// buffer.
#[derive(Debug, Clone)]
pub(crate) struct Head {
    forward: Vec<Link>,
}

impl Head {
    pub(crate) fn new() -> Self {
        Head {
            forward: vec![None; INITIAL_HEIGHT],
        }
    }

    pub(crate) fn height(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub(crate) fn forward(&self, level: usize) -> Link {
        self.forward[level]
    }

    #[inline]
    pub(crate) fn set_forward(&mut self, level: usize, link: Link) {
        self.forward[level] = link;
    }

    /// The link on the topmost level.
    pub(crate) fn top(&self) -> Link {
        self.forward[self.forward.len() - 1]
    }

    pub(crate) fn increment_height(&mut self) {
        self.forward.push(None);
    }

    /// Drops the topmost level. The head never goes below [`INITIAL_HEIGHT`].
    pub(crate) fn decrement_height(&mut self) {
        if self.forward.len() > INITIAL_HEIGHT {
            self.forward.pop();
        }
    }
}

impl Default for Head {
    fn default() -> Self {
        Self::new()
    }
}

/// Backing storage for every node in a list. Links are indices into `slots`,
/// so the list never holds more than one owner for a node. Released slots are
/// recycled by later allocations.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            | Some(id) => {
                self.slots[id] = Some(node);
                id
            },
            | None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            },
        }
    }

    /// Empties the slot and hands the node back to the caller.
    ///
    /// # Panics
    ///
    /// Panics if the slot was already released.
    pub(crate) fn release(&mut self, id: usize) -> Node<T> {
        let node = self.slots[id]
            .take()
            .expect("released a skiplist node twice");
        self.free.push(id);
        node
    }

    /// # Panics
    ///
    /// Panics if `id` points at a released slot, which means a link is
    /// dangling.
    #[inline]
    pub(crate) fn get(&self, id: usize) -> &Node<T> {
        self.slots[id]
            .as_ref()
            .expect("dangling skiplist link")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: usize) -> &mut Node<T> {
        self.slots[id]
            .as_mut()
            .expect("dangling skiplist link")
    }

    /// Total number of slots, live or free.
    #[cfg(test)]
    pub(crate) fn slots(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<T> Default for Arena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        Arena,
        Head,
        Node,
    };

    #[test]
    fn test_node_links() {
        let mut node = Node::new("a", 3);
        assert_eq!(node.height(), 3);
        assert_eq!(*node.value(), "a");
        assert!((0..3).all(|level| node.forward(level).is_none()));

        node.set_forward(2, Some(9));
        assert_eq!(node.forward(2), Some(9));
        assert_eq!(node.forward(1), None);
    }

    #[test]
    #[should_panic]
    fn test_node_out_of_range() {
        let node = Node::new(1, 2);
        node.forward(2);
    }

    #[test]
    fn test_head_grows_and_shrinks() {
        let mut head = Head::new();
        assert_eq!(head.height(), 1);

        head.increment_height();
        assert_eq!(head.height(), 2);
        assert_eq!(head.top(), None);

        head.set_forward(1, Some(4));
        assert_eq!(head.top(), Some(4));

        head.decrement_height();
        head.decrement_height();
        assert_eq!(head.height(), 1, "head must never drop below one level");
    }

    #[test]
    fn test_arena_recycles_slots() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::new(1, 1));
        let b = arena.alloc(Node::new(2, 1));
        assert_ne!(a, b);

        assert_eq!(arena.release(a).into_value(), 1);
        let c = arena.alloc(Node::new(3, 1));
        assert_eq!(c, a, "released slot should be reused");
        assert_eq!(arena.slots(), 2);
        assert_eq!(*arena.get(c).value(), 3);
    }

    #[test]
    #[should_panic]
    fn test_arena_double_release() {
        let mut arena = Arena::new();
        let a = arena.alloc(Node::new(1, 1));
        arena.release(a);
        arena.release(a);
    }
}
