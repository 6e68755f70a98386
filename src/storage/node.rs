//! Filesystem nodes

/// Index of a node inside the filesystem arena.
pub type NodeId = usize;

/// A single entry in the virtual filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Ordered child names, relative to the directory's own path.
    Directory { children: Vec<String> },
    /// Opaque text content.
    File { content: String },
}

impl Node {
    pub fn directory() -> Self {
        Node::Directory {
            children: Vec::new(),
        }
    }

    pub fn file(content: impl Into<String>) -> Self {
        Node::File {
            content: content.into(),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn children(&self) -> Option<&[String]> {
        match self {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }

    pub fn content(&self) -> Option<&str> {
        match self {
            Node::File { content } => Some(content),
            Node::Directory { .. } => None,
        }
    }
}
