use crate::registry::{ComponentKind, ComponentRegistry};

/// One node of the picker menu: a display label, an optional component
/// kind, and its children in creation order.
#[derive(Debug, Clone)]
pub struct MenuNode {
    pub label: String,
    pub kind: Option<ComponentKind>,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: None,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[must_use]
    pub fn child(&self, label: &str) -> Option<&MenuNode> {
        self.children.iter().find(|c| c.label == label)
    }

    fn leaf_count(&self) -> usize {
        if self.is_leaf() {
            1
        } else {
            self.children.iter().map(MenuNode::leaf_count).sum()
        }
    }
}

/// Hierarchical menu over the registry's component kinds.
///
/// Rebuilt each time the picker opens; cheap enough that nothing beyond the
/// registry itself is cached.
#[derive(Debug, Clone)]
pub struct MenuTree {
    root: MenuNode,
}

impl MenuTree {
    /// Builds the menu from the registry.
    ///
    /// Entries are sorted by menu path (ordinal), then each `/`-delimited
    /// path is walked from the root, reusing a child node whenever its
    /// label already exists under the current parent. Shared prefixes
    /// therefore collapse into shared folders. The node reached by an
    /// entry's final segment carries the entry's kind; if that node already
    /// carries one, the earlier kind wins.
    ///
    /// Empty segments are kept and become empty-labeled nodes, so every
    /// entry contributes exactly one leaf at a depth equal to its
    /// segment count.
    #[must_use]
    pub fn build(registry: &ComponentRegistry) -> Self {
        let mut sorted: Vec<(&str, ComponentKind)> = registry
            .entries()
            .iter()
            .map(|entry| (entry.menu_path.as_str(), entry.kind))
            .collect();
        sorted.sort_by(|a, b| a.0.cmp(b.0));

        let mut root = MenuNode::new("Component");
        for (path, kind) in sorted {
            let mut node = &mut root;
            let mut segments = path.split('/').peekable();
            while let Some(segment) = segments.next() {
                let slot = match node.children.iter().position(|c| c.label == segment) {
                    Some(found) => found,
                    None => {
                        node.children.push(MenuNode::new(segment));
                        node.children.len() - 1
                    }
                };
                node = &mut node.children[slot];
                if segments.peek().is_none() && node.kind.is_none() {
                    node.kind = Some(kind);
                }
            }
        }
        Self { root }
    }

    #[must_use]
    pub fn root(&self) -> &MenuNode {
        &self.root
    }

    /// Number of leaf nodes. Equals the registry entry count when every
    /// entry has a distinct path.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        if self.root.is_leaf() {
            0
        } else {
            self.root.leaf_count()
        }
    }

    /// Resolves a `/`-delimited path against the tree.
    ///
    /// Splitting never yields zero segments, so the root itself is not
    /// addressable.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&MenuNode> {
        let mut node = &self.root;
        for segment in path.split('/') {
            node = node.child(segment)?;
        }
        Some(node)
    }
}
