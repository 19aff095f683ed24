//! Animation Component Registry
//!
//! A process-wide catalog of the concrete animation-component kinds an
//! application knows about. Hosts populate it once during initialization
//! (replacing a reflection scan over loaded types) and the picker queries
//! it read-only afterwards.

use std::any::TypeId;

use rustc_hash::FxHashMap;

/// Marker trait for concrete animation-component types.
///
/// Implement it for plain, non-generic types; the registry identifies each
/// component by its [`TypeId`].
pub trait AnimationComponent: 'static {}

/// Opaque identifier for a registered component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentKind(TypeId);

impl ComponentKind {
    #[must_use]
    pub fn of<C: AnimationComponent>() -> Self {
        Self(TypeId::of::<C>())
    }
}

/// One registered component kind with its display path.
#[derive(Debug, Clone)]
pub struct ComponentEntry {
    pub kind: ComponentKind,
    /// Fully qualified Rust type name, kept for diagnostics.
    pub type_name: &'static str,
    /// `/`-delimited menu path the picker groups by.
    pub menu_path: String,
}

/// Registry of known component kinds, iterated in registration order.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    entries: Vec<ComponentEntry>,
    index: FxHashMap<ComponentKind, usize>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `C` under its bare type name.
    pub fn register<C: AnimationComponent>(&mut self) {
        let path = bare_name(std::any::type_name::<C>()).to_string();
        self.insert(ComponentKind::of::<C>(), std::any::type_name::<C>(), path);
    }

    /// Registers `C` under an explicit `/`-delimited menu path.
    pub fn register_as<C: AnimationComponent>(&mut self, menu_path: &str) {
        self.insert(
            ComponentKind::of::<C>(),
            std::any::type_name::<C>(),
            menu_path.to_string(),
        );
    }

    /// Re-registering an existing kind replaces its path instead of
    /// duplicating the entry.
    fn insert(&mut self, kind: ComponentKind, type_name: &'static str, menu_path: String) {
        if let Some(&slot) = self.index.get(&kind) {
            log::debug!("Component {type_name} re-registered; replacing menu path.");
            self.entries[slot].menu_path = menu_path;
        } else {
            self.index.insert(kind, self.entries.len());
            self.entries.push(ComponentEntry {
                kind,
                type_name,
                menu_path,
            });
        }
    }

    /// Entries in registration order.
    #[must_use]
    pub fn entries(&self) -> &[ComponentEntry] {
        &self.entries
    }

    #[must_use]
    pub fn contains<C: AnimationComponent>(&self) -> bool {
        self.index.contains_key(&ComponentKind::of::<C>())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strips the module path from a fully qualified type name.
fn bare_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
