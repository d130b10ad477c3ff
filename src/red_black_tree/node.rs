use crate::arena::Handle;
use crate::entry::Entry;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

/// Selects one of the two children of a node. Every rotation and fixup case is written once in
/// terms of a side and its opposite.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// The structural part of a node: its color and its three links.
///
/// The tree's sentinel is a bare `Links` with no entry attached.
#[derive(Clone, Debug)]
pub struct Links {
    pub color: Color,
    pub left: Handle,
    pub right: Handle,
    pub parent: Handle,
}

impl Links {
    pub fn sentinel() -> Self {
        Links {
            color: Color::Black,
            left: Handle::SENTINEL,
            right: Handle::SENTINEL,
            parent: Handle::SENTINEL,
        }
    }

    pub fn child(&self, side: Side) -> Handle {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Handle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A struct representing an internal node of a red black tree.
#[derive(Clone, Debug)]
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub links: Links,
}

impl<T, U> Node<T, U> {
    /// New nodes are red leaves hanging off `parent`.
    pub fn new(key: T, value: U, parent: Handle) -> Self {
        Node {
            entry: Entry::new(key, value),
            links: Links {
                color: Color::Red,
                left: Handle::SENTINEL,
                right: Handle::SENTINEL,
                parent,
            },
        }
    }
}
