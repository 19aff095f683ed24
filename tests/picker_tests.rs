//! Component Picker Tests
//!
//! Tests for:
//! - ComponentRegistry registration, bare-name fallback, re-registration
//! - MenuTree construction: sorted first level, shared prefixes, leaf kinds
//! - Duplicate full paths (first registration wins)
//! - ComponentDropdown selection dispatch (leaves only)

use std::cell::RefCell;
use std::rc::Rc;

use kinema::{ComponentDropdown, ComponentKind, ComponentRegistry, MenuTree};
use kinema::registry::AnimationComponent;

struct MoveX;
struct MoveY;
struct RotateZ;
struct FadeAlpha;
struct ScaleUniform;

impl AnimationComponent for MoveX {}
impl AnimationComponent for MoveY {}
impl AnimationComponent for RotateZ {}
impl AnimationComponent for FadeAlpha {}
impl AnimationComponent for ScaleUniform {}

fn demo_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry.register_as::<ScaleUniform>("Scale/Uniform");
    registry.register_as::<MoveX>("Move/X");
    registry.register::<FadeAlpha>();
    registry.register_as::<MoveY>("Move/Y");
    registry
}

// ============================================================================
// ComponentRegistry
// ============================================================================

#[test]
fn register_defaults_to_bare_type_name() {
    let mut registry = ComponentRegistry::new();
    registry.register::<FadeAlpha>();

    let entry = &registry.entries()[0];
    assert_eq!(entry.menu_path, "FadeAlpha");
    assert_eq!(entry.kind, ComponentKind::of::<FadeAlpha>());
}

#[test]
fn re_registration_replaces_path_without_duplicating() {
    let mut registry = ComponentRegistry::new();
    registry.register_as::<MoveX>("Move/X");
    registry.register_as::<MoveX>("Translate/X");

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.entries()[0].menu_path, "Translate/X");
    assert!(registry.contains::<MoveX>());
}

#[test]
fn entries_keep_registration_order() {
    let registry = demo_registry();
    let paths: Vec<&str> = registry
        .entries()
        .iter()
        .map(|e| e.menu_path.as_str())
        .collect();
    assert_eq!(paths, vec!["Scale/Uniform", "Move/X", "FadeAlpha", "Move/Y"]);
}

// ============================================================================
// MenuTree construction
// ============================================================================

#[test]
fn leaf_count_matches_registry_len() {
    let registry = demo_registry();
    let tree = MenuTree::build(&registry);
    assert_eq!(tree.leaf_count(), registry.len());
}

#[test]
fn first_level_is_sorted_ordinal() {
    let registry = demo_registry();
    let tree = MenuTree::build(&registry);

    let labels: Vec<&str> = tree
        .root()
        .children
        .iter()
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(labels, vec!["FadeAlpha", "Move", "Scale"]);
}

#[test]
fn shared_prefix_collapses_into_one_folder() {
    let registry = demo_registry();
    let tree = MenuTree::build(&registry);

    let folder = tree.find("Move").expect("Move folder");
    assert!(!folder.is_leaf());
    assert_eq!(folder.children.len(), 2, "X and Y share the Move ancestor");
    assert!(tree.find("Move/X").is_some_and(kinema::MenuNode::is_leaf));
    assert!(tree.find("Move/Y").is_some_and(kinema::MenuNode::is_leaf));
}

#[test]
fn leaf_depth_matches_segment_count() {
    let mut registry = ComponentRegistry::new();
    registry.register_as::<RotateZ>("Transform/Rotate/Z");
    let tree = MenuTree::build(&registry);

    assert!(tree.find("Transform").is_some_and(|n| !n.is_leaf()));
    assert!(tree.find("Transform/Rotate").is_some_and(|n| !n.is_leaf()));
    let leaf = tree.find("Transform/Rotate/Z").expect("leaf at depth 3");
    assert!(leaf.is_leaf());
    assert_eq!(leaf.kind, Some(ComponentKind::of::<RotateZ>()));
}

#[test]
fn folder_nodes_carry_no_kind() {
    let registry = demo_registry();
    let tree = MenuTree::build(&registry);
    assert_eq!(tree.find("Move").expect("folder").kind, None);
}

#[test]
fn duplicate_full_path_first_registration_wins() {
    let mut registry = ComponentRegistry::new();
    registry.register_as::<MoveX>("Dup");
    registry.register_as::<MoveY>("Dup");

    let tree = MenuTree::build(&registry);
    assert_eq!(tree.leaf_count(), 1, "both entries share the final node");
    assert_eq!(
        tree.find("Dup").expect("leaf").kind,
        Some(ComponentKind::of::<MoveX>()),
        "the first-created node keeps its kind"
    );
}

#[test]
fn empty_path_becomes_an_empty_labeled_leaf() {
    let mut registry = ComponentRegistry::new();
    registry.register_as::<MoveX>("");

    let tree = MenuTree::build(&registry);
    assert_eq!(tree.leaf_count(), registry.len());

    let leaf = tree.find("").expect("empty-labeled leaf");
    assert!(leaf.is_leaf());
    assert_eq!(leaf.label, "");
    assert_eq!(leaf.kind, Some(ComponentKind::of::<MoveX>()));
}

#[test]
fn empty_mid_segment_keeps_its_own_level() {
    let mut registry = ComponentRegistry::new();
    registry.register_as::<MoveX>("A//B");

    let tree = MenuTree::build(&registry);
    assert_eq!(tree.leaf_count(), 1);

    // Depth matches the three segments: "A", "", "B".
    let folder = tree.find("A").expect("A folder");
    assert_eq!(folder.children.len(), 1);
    assert_eq!(folder.children[0].label, "");

    let leaf = tree.find("A//B").expect("leaf at depth 3");
    assert!(leaf.is_leaf());
    assert_eq!(leaf.kind, Some(ComponentKind::of::<MoveX>()));
}

#[test]
fn empty_registry_builds_empty_tree() {
    let registry = ComponentRegistry::new();
    let tree = MenuTree::build(&registry);
    assert_eq!(tree.leaf_count(), 0);
    assert!(tree.root().children.is_empty());
    assert!(tree.find("Anything").is_none());
}

// ============================================================================
// ComponentDropdown selection
// ============================================================================

#[test]
fn selecting_a_leaf_fires_exactly_once() {
    let registry = demo_registry();
    let mut dropdown = ComponentDropdown::new(&registry);

    let picked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&picked);
    dropdown.on_kind_selected(move |kind| sink.borrow_mut().push(kind));

    assert!(dropdown.select("Move/X"));
    let got = picked.borrow();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0], ComponentKind::of::<MoveX>());
}

#[test]
fn selecting_a_folder_fires_nothing() {
    let registry = demo_registry();
    let mut dropdown = ComponentDropdown::new(&registry);

    let count = Rc::new(RefCell::new(0_u32));
    let sink = Rc::clone(&count);
    dropdown.on_kind_selected(move |_| *sink.borrow_mut() += 1);

    assert!(!dropdown.select("Move"));
    assert!(!dropdown.select("Nope/Nothing"));
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn selection_works_without_a_callback() {
    let registry = demo_registry();
    let mut dropdown = ComponentDropdown::new(&registry);
    assert!(dropdown.select("FadeAlpha"));
}

#[test]
fn dropdown_rebuilds_tree_per_open() {
    let mut registry = ComponentRegistry::new();
    registry.register_as::<MoveX>("Move/X");

    let first = ComponentDropdown::new(&registry);
    assert_eq!(first.tree().leaf_count(), 1);

    registry.register_as::<MoveY>("Move/Y");
    let second = ComponentDropdown::new(&registry);
    assert_eq!(second.tree().leaf_count(), 2, "reopening sees new entries");
    assert_eq!(first.tree().leaf_count(), 1, "old snapshot is unchanged");
}
