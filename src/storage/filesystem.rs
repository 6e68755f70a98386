//! In-memory virtual filesystem
//!
//! Nodes are stored in an arena and addressed through a path index. A move
//! re-keys the arena slot, so node content is never copied.

use std::collections::HashMap;

use crate::error::StorageError;
use crate::storage::node::{Node, NodeId};
use crate::storage::validation::{file_name, is_valid_name, join_path, normalize, parent_path};

/// Path-indexed arena of [`Node`]s rooted at `/`.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    arena: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFs {
    /// Creates a filesystem holding only the root directory.
    pub fn new() -> Self {
        let mut index = HashMap::new();
        index.insert("/".to_string(), 0);
        Self {
            arena: vec![Node::directory()],
            index,
        }
    }

    /// Creates an empty directory at `path`.
    pub fn create_dir(&mut self, path: &str) -> Result<(), StorageError> {
        self.insert(path, Node::directory())
    }

    /// Creates a file at `path` with the given content.
    pub fn create_file(&mut self, path: &str, content: impl Into<String>) -> Result<(), StorageError> {
        self.insert(path, Node::file(content))
    }

    fn insert(&mut self, path: &str, node: Node) -> Result<(), StorageError> {
        let path = normalize(path);
        let name = file_name(&path).to_string();
        if !is_valid_name(&name) {
            return Err(StorageError::InvalidPath(path));
        }
        if self.index.contains_key(&path) {
            return Err(StorageError::AlreadyExists(path));
        }

        let parent = parent_path(&path).to_string();
        let siblings = self
            .children_mut(&parent)
            .ok_or_else(|| StorageError::NotADirectory(parent.clone()))?;
        siblings.push(name);

        let id = self.arena.len();
        self.arena.push(node);
        self.index.insert(path, id);
        Ok(())
    }

    /// Returns the node stored at `path`, if any.
    pub fn node(&self, path: &str) -> Option<&Node> {
        self.index.get(path).map(|&id| &self.arena[id])
    }

    pub fn exists(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn is_dir(&self, path: &str) -> bool {
        self.node(path).is_some_and(Node::is_dir)
    }

    pub fn is_file(&self, path: &str) -> bool {
        self.node(path).is_some_and(Node::is_file)
    }

    /// Child names of the directory at `path`, in insertion order.
    pub fn list(&self, path: &str) -> Result<&[String], StorageError> {
        match self.node(path) {
            Some(node) => node
                .children()
                .ok_or_else(|| StorageError::NotADirectory(path.to_string())),
            None => Err(StorageError::NotFound(path.to_string())),
        }
    }

    /// Content of the file at `path`.
    pub fn read(&self, path: &str) -> Result<&str, StorageError> {
        match self.node(path) {
            Some(node) => node
                .content()
                .ok_or_else(|| StorageError::IsADirectory(path.to_string())),
            None => Err(StorageError::NotFound(path.to_string())),
        }
    }

    /// Moves the file at `src` into the directory `dest_dir`.
    ///
    /// Every check runs before the first mutation. Returns the file's new path.
    pub fn move_file(&mut self, src: &str, dest_dir: &str) -> Result<String, StorageError> {
        let src_node = self
            .node(src)
            .ok_or_else(|| StorageError::NotFound(src.to_string()))?;
        if !self.is_dir(dest_dir) {
            return Err(StorageError::NotADirectory(dest_dir.to_string()));
        }
        if src_node.is_dir() {
            return Err(StorageError::IsADirectory(src.to_string()));
        }

        let name = file_name(src).to_string();
        let new_path = join_path(dest_dir, &name);
        if new_path == src {
            return Err(StorageError::SamePath(new_path));
        }
        if self.exists(&new_path) {
            return Err(StorageError::AlreadyExists(new_path));
        }

        let old_parent = parent_path(src).to_string();
        let id = match self.index.remove(src) {
            Some(id) => id,
            None => return Err(StorageError::NotFound(src.to_string())),
        };
        self.index.insert(new_path.clone(), id);

        if let Some(children) = self.children_mut(&old_parent) {
            children.retain(|child| child != &name);
        }
        if let Some(children) = self.children_mut(dest_dir) {
            children.push(name);
        }

        Ok(new_path)
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.len() <= 1
    }

    fn children_mut(&mut self, path: &str) -> Option<&mut Vec<String>> {
        let id = *self.index.get(path)?;
        match &mut self.arena[id] {
            Node::Directory { children } => Some(children),
            Node::File { .. } => None,
        }
    }
}
