use std::collections::{BTreeMap, BTreeSet};

use base64::{engine::general_purpose, Engine as _};

use crate::error::VfsError;
use crate::path::{self, ROOT};

/// Payload of a file node.
///
/// Binary payloads are stored base64-encoded and never handed out as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    Binary(String),
}

impl FileContent {
    /// Classify raw bytes: valid UTF-8 becomes text, anything else binary.
    pub fn from_bytes(raw: Vec<u8>) -> Self {
        match String::from_utf8(raw) {
            Ok(text) => FileContent::Text(text),
            Err(err) => FileContent::Binary(general_purpose::STANDARD.encode(err.as_bytes())),
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, FileContent::Binary(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Binary(_) => None,
        }
    }

    /// Raw bytes of the payload, decoding base64 for binary content.
    #[cfg(test)]
    pub(crate) fn to_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        match self {
            FileContent::Text(text) => Ok(text.as_bytes().to_vec()),
            FileContent::Binary(encoded) => general_purpose::STANDARD.decode(encoded),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VfsNode {
    Directory,
    File { content: FileContent },
}

impl VfsNode {
    pub fn is_dir(&self) -> bool {
        matches!(self, VfsNode::Directory)
    }
}

/// Flat path -> node mapping plus the current directory.
///
/// Children are never stored; a listing scans the keys under the directory
/// prefix. The current directory always names an existing directory.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    nodes: BTreeMap<String, VfsNode>,
    cwd: String,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem {
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(ROOT.to_string(), VfsNode::Directory);
        Self {
            nodes,
            cwd: ROOT.to_string(),
        }
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn resolve(&self, raw: &str) -> String {
        path::resolve(raw, &self.cwd)
    }

    pub fn node(&self, canonical: &str) -> Option<&VfsNode> {
        self.nodes.get(canonical)
    }

    pub fn exists(&self, canonical: &str) -> bool {
        self.nodes.contains_key(canonical)
    }

    pub fn is_dir(&self, canonical: &str) -> bool {
        self.nodes.get(canonical).is_some_and(VfsNode::is_dir)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    // ls - sorted, deduplicated names of the immediate children
    pub fn list_dir(&self, raw: &str) -> Result<Vec<String>, VfsError> {
        let target = self.resolve(raw);
        if !self.is_dir(&target) {
            return Err(VfsError::NotFound(target));
        }
        let prefix = child_prefix(&target);
        let names: BTreeSet<String> = self
            .descendants(&prefix)
            .filter_map(|key| {
                let rel = &key[prefix.len()..];
                (!rel.is_empty() && !rel.contains('/')).then(|| rel.to_string())
            })
            .collect();
        Ok(names.into_iter().collect())
    }

    fn descendants<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.nodes
            .range(prefix.to_string()..)
            .map(|(key, _)| key)
            .take_while(move |key| key.starts_with(prefix))
            .filter(move |key| key.as_str() != prefix)
    }

    /// A directory may be overwritten by a file only when it is empty and the
    /// cwd does not sit on or under it.
    fn dir_is_replaceable(&self, canonical: &str) -> bool {
        if canonical == ROOT || self.cwd == canonical {
            return false;
        }
        let prefix = child_prefix(canonical);
        !self.cwd.starts_with(&prefix) && self.descendants(&prefix).next().is_none()
    }

    fn check_file_target(&self, canonical: &str) -> Result<(), VfsError> {
        if self.is_dir(canonical) && !self.dir_is_replaceable(canonical) {
            return Err(VfsError::IsDirectory(canonical.to_string()));
        }
        Ok(())
    }

    // cd - cwd untouched on failure
    pub fn change_dir(&mut self, raw: &str) -> Result<(), VfsError> {
        let target = self.resolve(raw);
        if !self.is_dir(&target) {
            return Err(VfsError::NoSuchDirectory(target));
        }
        self.cwd = target;
        Ok(())
    }

    /// Text of a file. Missing paths, directories and binary files are all
    /// reported as not found.
    pub fn read_file(&self, raw: &str) -> Result<&str, VfsError> {
        let target = self.resolve(raw);
        match self.nodes.get(&target) {
            Some(VfsNode::File { content }) => content.as_text().ok_or(VfsError::NotFound(target)),
            _ => Err(VfsError::NotFound(target)),
        }
    }

    /// Create (or truncate) an empty text file. The parent must already exist.
    /// An empty directory may be replaced; one with children, or holding the
    /// cwd, is refused.
    pub fn create_empty_file(&mut self, raw: &str) -> Result<(), VfsError> {
        let target = self.resolve(raw);
        if raw.is_empty() {
            return Err(VfsError::NotFound(target));
        }
        self.check_file_target(&target)?;
        let parent = path::parent_path(&target).unwrap_or_else(|| ROOT.to_string());
        if !self.is_dir(&parent) {
            return Err(VfsError::ParentNotFound(target));
        }
        self.nodes.insert(
            target,
            VfsNode::File {
                content: FileContent::Text(String::new()),
            },
        );
        Ok(())
    }

    /// mkdir -p on a canonical path. Files found along the chain are replaced.
    pub fn ensure_dir_all(&mut self, canonical: &str) {
        for dir in path::ancestors(canonical) {
            self.ensure_dir(dir);
        }
        self.ensure_dir(canonical.to_string());
    }

    fn ensure_dir(&mut self, canonical: String) {
        let entry = self.nodes.entry(canonical).or_insert(VfsNode::Directory);
        if !entry.is_dir() {
            *entry = VfsNode::Directory;
        }
    }

    /// Insert a file at a canonical path, creating missing ancestors. Last
    /// write wins, over an existing file or an empty directory.
    pub fn insert_file(&mut self, canonical: &str, content: FileContent) -> Result<(), VfsError> {
        self.check_file_target(canonical)?;
        if let Some(parent) = path::parent_path(canonical) {
            self.ensure_dir_all(&parent);
        }
        self.nodes
            .insert(canonical.to_string(), VfsNode::File { content });
        Ok(())
    }
}

fn child_prefix(dir: &str) -> String {
    if dir == ROOT {
        ROOT.to_string()
    } else {
        format!("{}/", dir)
    }
}
