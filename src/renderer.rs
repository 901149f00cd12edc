use anyhow::bail;
use log::debug;
use maud::{html, PreEscaped};

use crate::generator::data::Post;

/// One `<dt>`/`<dd>` pair of the overview list.
pub(crate) fn render_entry(post: &Post) -> anyhow::Result<String> {
    let meta = &post.metadata;
    let Some(title) = meta.get("title") else {
        bail!("{:?} has no title", post.path);
    };
    let href = post.path.to_string_lossy().into_owned();
    debug!("Rendering {href}...");

    // header values are hand-written HTML and go in as written
    Ok(html! {
        dt {
            a href=(PreEscaped(&href)) { (PreEscaped(title)) }
            @if let Some(date) = meta.get("date") {
                " " small { "Written on " (PreEscaped(date)) }
            }
        }
        "\n    "
        dd { (PreEscaped(meta.get("description").unwrap_or_default())) }
    }
    .into_string())
}
