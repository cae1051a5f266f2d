//! Directory tree DTO built from a flat list of tracked paths.
//!
//! `DirtreeNode` is a trie over `/`-separated path segments. The root carries
//! the sentinel name `"/"`. Children keep first-seen order and sibling names
//! are unique. A childless node is either a file or an empty directory; the
//! structure does not tell them apart.
//!
//! Used by: `get_dirtree` endpoint to render the file sidebar

use serde::{Deserialize, Serialize};

pub const ROOT_NAME: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirtreeNode {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DirtreeNode>,
}

impl DirtreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new(ROOT_NAME)
    }

    /// Build a tree from paths, in the order given.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = Self::root();
        for path in paths {
            root.insert_path(path.as_ref());
        }
        root
    }

    pub fn insert_path(&mut self, path: &str) {
        let segments: Vec<&str> = path.split('/').collect();
        self.insert_segments(&segments);
    }

    /// Insert a segment sequence below this node. Existing children are
    /// matched by a linear scan; an unmatched segment is appended.
    pub fn insert_segments(&mut self, segments: &[&str]) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };

        match self.children.iter().position(|child| child.name == *first) {
            Some(idx) => self.children[idx].insert_segments(rest),
            None => {
                let mut child = DirtreeNode::new(*first);
                child.insert_segments(rest);
                self.children.push(child);
            }
        }
    }
}

#[cfg(test)]
impl DirtreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Slash-joined paths of every leaf below this node, depth-first.
    pub fn leaf_paths(&self) -> Vec<String> {
        fn collect(node: &DirtreeNode, prefix: &str, out: &mut Vec<String>) {
            for child in &node.children {
                let path = if prefix.is_empty() {
                    child.name.clone()
                } else {
                    format!("{}/{}", prefix, child.name)
                };
                if child.is_leaf() {
                    out.push(path);
                } else {
                    collect(child, &path, out);
                }
            }
        }

        let mut out = Vec::new();
        collect(self, "", &mut out);
        out
    }

    pub fn child(&self, name: &str) -> Option<&DirtreeNode> {
        self.children.iter().find(|c| c.name == name)
    }
}
