use serde::Serialize;
use std::path::PathBuf;

use crate::metadata::Metadata;

#[derive(Serialize, Debug, Clone)]
pub(crate) struct Post {
    /// Where the rendered post will live, e.g. `posts/hello.html`.
    pub path: PathBuf,
    pub metadata: Metadata,
}
