use std::path::{Path, PathBuf};

/// Visible `*.md` files only; names starting with `.` are skipped.
pub(crate) fn is_markdown(path: &Path) -> bool {
    let hidden = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'));
    !hidden && path.extension().is_some_and(|ext| ext == "md")
}

/// `posts/hello.md` -> `posts/hello.html`
pub(crate) fn html_path(md_path: &Path) -> PathBuf {
    let mut path = md_path.to_path_buf();
    path.set_extension("html");
    path
}
