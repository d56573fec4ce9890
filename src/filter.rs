/*!
 * Extension and directory filters
 */

use std::collections::HashSet;
use std::path::{Component, Path};

use once_cell::sync::Lazy;

/// Extensions (lowercase, with leading dot) whose files are captured
pub static RELEVANT_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [".ts", ".tsx", ".js", ".jsx", ".py", ".html", ".css"]
        .into_iter()
        .collect()
});

/// Directory names that are never descended into or captured from
pub static EXCLUDED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["node_modules", ".git", "__pycache__", "venv", "env"]
        .into_iter()
        .collect()
});

/// Check if a file is relevant based on its extension
pub fn is_relevant(path: &Path) -> bool {
    path.extension().map_or(false, |ext| {
        let suffix = format!(".{}", ext.to_string_lossy().to_lowercase());
        RELEVANT_EXTENSIONS.contains(suffix.as_str())
    })
}

/// Check if a directory name is on the exclusion list
pub fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(name)
}

/// Check if any component of a path is an excluded directory name
pub fn has_excluded_component(path: &Path) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name.to_str().map_or(false, is_excluded_dir),
        _ => false,
    })
}
