use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use crate::{metadata::load_metadata_block, renderer::render_entry};

pub(crate) mod data;
pub(crate) mod utils;

use data::Post;
use utils::{html_path, is_markdown};

/// Reads every `*.md` file directly under `folder`, ordered by path (ascending).
pub(crate) fn load_posts(folder: &Path) -> anyhow::Result<Vec<Post>> {
    let mut md_files = vec![];
    for entry in std::fs::read_dir(folder).with_context(|| format!("reading {folder:?}"))? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && is_markdown(&path) {
            md_files.push(path);
        }
    }
    md_files.sort();

    if md_files.is_empty() {
        warn!("No markdown files in {folder:?}.");
    }

    let posts = md_files
        .iter()
        .map(|file_path| -> anyhow::Result<Post> {
            let metadata = load_metadata_block(file_path)
                .with_context(|| format!("while preprocessing {file_path:?}"))?;
            Ok(Post {
                path: html_path(file_path),
                metadata,
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    info!("Loaded {} posts from {folder:?}.", posts.len());

    Ok(posts)
}

/// Same posts as `load_posts`, newest (last by filename) first.
pub(crate) fn load_posts_newest_first(folder: &Path) -> anyhow::Result<Vec<Post>> {
    let mut posts = load_posts(folder)?;
    posts.reverse();
    Ok(posts)
}

pub(crate) fn produce_overview(folder: &Path) -> anyhow::Result<String> {
    let entries = load_posts_newest_first(folder)?
        .iter()
        .map(render_entry)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(entries.join("\n"))
}
