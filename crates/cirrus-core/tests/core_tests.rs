use cirrus_core::{
    ClipboardMode, DisplayedNodes, Node, NodeId, NodeKind, NodeStore, Tab, ViewContext, project,
};
use std::collections::HashSet;

/// Home
/// ├── notes.txt (10)
/// ├── Photos/
/// │   ├── cat.jpg (100, marked)
/// │   └── Trips/ (marked)
/// │       └── beach.jpg (50)
/// └── Work/ (marked)
///     └── plan.tar.gz (5)
fn sample_store() -> NodeStore {
    let mut cat = Node::new_file("cat", "photos", "cat.jpg", 100);
    cat.marked = true;
    let mut trips = Node::new_dir("trips", "photos", "Trips");
    trips.marked = true;
    let mut work = Node::new_dir("work", "home", "Work");
    work.marked = true;

    NodeStore::from_nodes([
        Node::new_dir("home", "root", "Home"),
        Node::new_file("notes", "home", "notes.txt", 10),
        Node::new_dir("photos", "home", "Photos"),
        cat,
        trips,
        Node::new_file("beach", "trips", "beach.jpg", 50),
        work,
        Node::new_file("plan", "work", "plan.tar.gz", 5),
    ])
}

fn ids(view: &DisplayedNodes) -> HashSet<String> {
    view.iter().map(|n| n.id().to_string()).collect()
}

#[test]
fn test_buckets_partition_source_set() {
    let store = sample_store();
    let ctx = ViewContext::new().with_tab(Tab::Marked);
    let view = project(&store, &ctx, false);

    assert!(view.files.iter().all(|n| n.node.kind == NodeKind::File));
    assert!(view.dirs.iter().all(|n| n.node.kind == NodeKind::Dir));

    let files: HashSet<_> = view.files.iter().map(|n| n.id().clone()).collect();
    let dirs: HashSet<_> = view.dirs.iter().map(|n| n.id().clone()).collect();
    assert!(files.is_disjoint(&dirs));

    let expected: HashSet<String> = ["cat", "trips", "work"].map(String::from).into();
    assert_eq!(ids(&view), expected);
}

#[test]
fn test_folder_view_filters_by_location() {
    let store = sample_store();
    let ctx = ViewContext::new().with_location("home");
    let view = project(&store, &ctx, false);

    assert!(view.iter().all(|n| n.node.parent == NodeId::new("home")));
    let expected: HashSet<String> = ["notes", "photos", "work"].map(String::from).into();
    assert_eq!(ids(&view), expected);
}

#[test]
fn test_marked_view_ignores_location() {
    let store = sample_store();
    let ctx = ViewContext::new()
        .with_location("home")
        .with_tab(Tab::Marked);
    let view = project(&store, &ctx, false);

    // cat and trips live under Photos, not under the current location.
    assert_eq!(view.len(), 3);
    assert!(view.iter().any(|n| n.node.parent == NodeId::new("photos")));
}

#[test]
fn test_search_view_lists_results_only() {
    let store = sample_store();
    let mut ctx = ViewContext::new().with_location("home");
    ctx.search
        .activate(vec![NodeId::new("beach"), NodeId::new("notes")]);

    let view = project(&store, &ctx, false);
    let order: Vec<_> = view.files.iter().map(|n| n.id().as_str()).collect();
    assert_eq!(order, ["beach", "notes"]);
    assert!(view.dirs.is_empty());
}

#[test]
fn test_search_takes_priority_over_marked_tab() {
    let store = sample_store();
    let mut ctx = ViewContext::new().with_tab(Tab::Marked);
    ctx.search
        .activate(vec![NodeId::new("notes")]);

    let view = project(&store, &ctx, false);
    assert_eq!(view.len(), 1);
    assert_eq!(view.files[0].id().as_str(), "notes");
}

#[test]
fn test_extension_derivation() {
    let store = NodeStore::from_nodes([
        Node::new_dir("r", "root", "Home"),
        Node::new_file("a", "r", "a.b.txt", 1),
        Node::new_file("b", "r", "noext", 1),
        Node::new_file("c", "r", "plan.tar.gz", 1),
    ]);
    let view = project(&store, &ViewContext::new().with_location("r"), false);
    let exts: Vec<_> = view
        .files
        .iter()
        .map(|n| n.extension.as_deref().unwrap())
        .collect();
    assert_eq!(exts, ["txt", "?", "gz"]);
}

#[test]
fn test_folder_size_aggregation() {
    // One direct file of 10 and a subfolder holding a file of 5.
    let store = NodeStore::from_nodes([
        Node::new_dir("r", "root", "Home"),
        Node::new_dir("d", "r", "D"),
        Node::new_file("f10", "d", "ten.bin", 10),
        Node::new_dir("sub", "d", "Sub"),
        Node::new_file("f5", "sub", "five.bin", 5),
    ]);
    let view = project(&store, &ViewContext::new().with_location("r"), true);
    assert_eq!(view.dirs[0].node.size, 15);

    // The store keeps its cached value.
    assert_eq!(store.get(&"d".into()).unwrap().size, 0);
}

#[test]
fn test_folder_size_scoped_to_marked_set() {
    let store = sample_store();
    let ctx = ViewContext::new().with_tab(Tab::Marked);
    let view = project(&store, &ctx, true);

    // beach.jpg is not marked, so Trips aggregates to nothing; plan.tar.gz
    // is not marked either.
    for dir in &view.dirs {
        assert_eq!(dir.node.size, 0, "{}", dir.id());
    }

    // Under the full store the same folders have real sizes.
    let full = project(&store, &ViewContext::new().with_location("photos"), true);
    let trips = full.dirs.iter().find(|n| n.id().as_str() == "trips").unwrap();
    assert_eq!(trips.node.size, 50);
}

#[test]
fn test_folder_size_scoped_to_search_results() {
    let store = sample_store();
    let mut ctx = ViewContext::new();
    // Photos matched, and so did cat.jpg, but beach.jpg (under Trips) did not.
    ctx.search.activate(vec![
        NodeId::new("photos"),
        NodeId::new("cat"),
        NodeId::new("trips"),
    ]);

    let view = project(&store, &ctx, true);
    let size_of = |id: &str| {
        view.dirs
            .iter()
            .find(|n| n.id().as_str() == id)
            .map(|n| n.node.size)
            .unwrap()
    };
    assert_eq!(size_of("photos"), 100);
    assert_eq!(size_of("trips"), 0);

    // The full store counts beach.jpg as well.
    let full = project(&store, &ViewContext::new().with_location("home"), true);
    let photos = full.dirs.iter().find(|n| n.id().as_str() == "photos").unwrap();
    assert_eq!(photos.node.size, 150);
}

#[test]
fn test_search_results_follow_store() {
    let mut store = sample_store();
    let mut ctx = ViewContext::new();
    ctx.search
        .activate(vec![NodeId::new("notes"), NodeId::new("gone")]);

    store.update_each(&[NodeId::new("notes")], |n| {
        n.name = "todo.md".into();
        n.marked = true;
    });

    // Ids missing from the store are skipped.
    let view = project(&store, &ctx, false);
    assert_eq!(view.len(), 1);
    let shown = &view.files[0];
    assert_eq!(shown.node.name, "todo.md");
    assert!(shown.node.marked);
    assert_eq!(shown.extension.as_deref(), Some("md"));
}

#[test]
fn test_transient_flags_follow_context() {
    let store = sample_store();
    let mut ctx = ViewContext::new().with_location("home");
    ctx.selection.insert("notes".into());
    ctx.clipboard.cut([NodeId::new("photos")]);
    ctx.editable = Some("work".into());

    let view = project(&store, &ctx, false);
    for node in view.iter() {
        let id = node.id().as_str();
        assert_eq!(node.selected, id == "notes", "selected {id}");
        assert_eq!(node.cut, id == "photos", "cut {id}");
        assert_eq!(node.editable, id == "work", "editable {id}");
    }

    // Copy mode never flags nodes as cut.
    ctx.clipboard.mode = ClipboardMode::Copy;
    let view = project(&store, &ctx, false);
    assert!(view.iter().all(|n| !n.cut));
}

#[test]
fn test_flags_recomputed_each_call() {
    let store = sample_store();
    let mut ctx = ViewContext::new().with_location("home");
    ctx.selection.insert("notes".into());
    assert!(project(&store, &ctx, false).files[0].selected);

    ctx.selection.clear();
    assert!(!project(&store, &ctx, false).files[0].selected);
}
