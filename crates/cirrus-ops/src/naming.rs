//! Collision-free names for copied nodes.
//!
//! A copy of `doc.txt` is named `doc (Copy).txt`; further copies into the
//! same folder become `doc (2nd Copy).txt`, `doc (3rd Copy).txt`, and so
//! on. Ordinal suffixes use the fixed mapping 1→st, 2→nd, 3→rd and
//! th for anything else, so 11 becomes `11th` and 21 becomes `21th`.

use std::sync::LazyLock;

use cirrus_core::{NodeId, NodeStore};
use regex::Regex;

static COPY_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<base>.*) \((?:(?P<version>\d+)(?:st|nd|rd|th) )?Copy\)$")
        .expect("copy suffix pattern is valid")
});

/// Split a name at its first dot into base name and extension.
///
/// The extension keeps the dot; names without a dot have an empty one.
pub fn split_name(name: &str) -> (&str, &str) {
    match name.find('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Ordinal form of a copy version.
pub fn ordinal(version: u32) -> String {
    let suffix = match version {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    };
    format!("{version}{suffix}")
}

/// Copy version a sibling name represents for `base`, if any.
///
/// `<base> (Copy)` is version 1, `<base> (<N><ord> Copy)` is version N.
pub fn copy_version(base: &str, sibling_name: &str) -> Option<u32> {
    if !sibling_name.starts_with(base) {
        return None;
    }

    let (sibling_base, _) = split_name(sibling_name);
    let caps = COPY_SUFFIX.captures(sibling_base)?;
    if &caps["base"] != base {
        return None;
    }

    match caps.name("version") {
        Some(version) => version.as_str().parse().ok(),
        None => Some(1),
    }
}

/// Name for version `version` of a copy of `base` + `extension`.
pub fn versioned_name(base: &str, extension: &str, version: u32) -> String {
    if version <= 1 {
        format!("{base} (Copy){extension}")
    } else {
        format!("{base} ({} Copy){extension}", ordinal(version))
    }
}

/// Name for a new copy of `name` placed into `destination`.
///
/// Looks at the existing children of `destination` and picks the next
/// free copy version.
pub fn copy_name(store: &NodeStore, name: &str, destination: &NodeId) -> String {
    let (base, extension) = split_name(name);

    let highest = store
        .children(destination)
        .filter_map(|sibling| copy_version(base, &sibling.name))
        .max()
        .unwrap_or(0);

    versioned_name(base, extension, highest.saturating_add(1))
}
