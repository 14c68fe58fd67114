use std::path::{Path, PathBuf};

fn module_segments(module: &str) -> Vec<&str> {
    module
        .split("::")
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// `a::b` under `base` becomes `base/a/b.rs`.
pub(crate) fn module_file_path(base: impl AsRef<Path>, module: &str) -> PathBuf {
    let mut path = PathBuf::from(base.as_ref());

    let segments = module_segments(module);
    if segments.is_empty() {
        path.push("matchup");
    }
    for segment in segments {
        path.push(segment);
    }

    path.set_extension("rs");
    path
}
