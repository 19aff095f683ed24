use crate::picker::menu::MenuTree;
use crate::registry::{ComponentKind, ComponentRegistry};

type SelectionCallback = Box<dyn FnMut(ComponentKind)>;

/// Picker over the registered component kinds.
///
/// Constructing the dropdown corresponds to opening it: the menu tree is
/// built fresh from the registry each time and discarded with the dropdown.
/// A host UI renders [`tree`](Self::tree) however it likes and reports the
/// chosen path back through [`select`](Self::select).
pub struct ComponentDropdown {
    tree: MenuTree,
    on_selected: Option<SelectionCallback>,
}

impl ComponentDropdown {
    #[must_use]
    pub fn new(registry: &ComponentRegistry) -> Self {
        Self {
            tree: MenuTree::build(registry),
            on_selected: None,
        }
    }

    /// Registers the callback fired when a component kind is picked.
    pub fn on_kind_selected(&mut self, callback: impl FnMut(ComponentKind) + 'static) {
        self.on_selected = Some(Box::new(callback));
    }

    #[must_use]
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Reports a selection at `path`.
    ///
    /// Only a leaf node carrying a kind is a valid terminal action: it
    /// fires the selection callback exactly once and returns `true`.
    /// Folder nodes, unknown paths, and kindless leaves fire nothing.
    pub fn select(&mut self, path: &str) -> bool {
        let Some(node) = self.tree.find(path) else {
            return false;
        };
        if !node.is_leaf() {
            return false;
        }
        let Some(kind) = node.kind else {
            log::warn!("Menu leaf {path:?} carries no component kind.");
            return false;
        };
        if let Some(callback) = self.on_selected.as_mut() {
            callback(kind);
        }
        true
    }
}
