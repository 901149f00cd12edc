use std::{collections::BTreeMap, path::Path};

use anyhow::{bail, Context};
use log::debug;
use serde::Serialize;

/// Fields of the hand-written header at the top of a post.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub(crate) struct Metadata(BTreeMap<String, String>);

impl Metadata {
    pub(crate) fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub(crate) fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }
}

pub(crate) fn load_metadata_block(path: &Path) -> anyhow::Result<Metadata> {
    debug!("Reading {path:?}...");
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path:?}"))?;
    parse_metadata_block(&content)
}

/// The first line (usually `---`) is skipped, then `key: value` lines are read
/// up to the next line starting with `-`.
pub(crate) fn parse_metadata_block(content: &str) -> anyhow::Result<Metadata> {
    let mut metadata = Metadata::default();
    for line in content
        .lines()
        .skip(1)
        .take_while(|line| !line.starts_with('-'))
    {
        if line.trim().is_empty() {
            continue;
        }
        let Some((name, value)) = line.split_once(':') else {
            bail!("Invalid header: {}", line);
        };
        metadata.insert(name.trim().to_string(), value.trim().to_string());
    }

    Ok(metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_until_dash_line() {
        let meta = parse_metadata_block(
            "---\ntitle: Hello\ndate: 2020-01-01\n---\nignored: body\n",
        )
        .unwrap();
        assert_eq!(meta.get("title"), Some("Hello"));
        assert_eq!(meta.get("date"), Some("2020-01-01"));
        assert_eq!(meta.get("ignored"), None);
    }

    #[test]
    fn test_first_line_is_always_skipped() {
        let meta = parse_metadata_block("title: Skipped\ntitle: Kept\n---\n").unwrap();
        assert_eq!(meta.get("title"), Some("Kept"));
    }

    #[test]
    fn test_value_keeps_colons() {
        let meta =
            parse_metadata_block("---\ndescription: Some text: with colon\n---\n").unwrap();
        assert_eq!(meta.get("description"), Some("Some text: with colon"));
    }

    #[test]
    fn test_key_is_whole_name() {
        let meta = parse_metadata_block("---\ntitle:  Spaced  \r\n- end\r\n").unwrap();
        assert_eq!(meta.get("title"), Some("Spaced"));
        assert_eq!(meta.get("t"), None);
    }

    #[test]
    fn test_block_without_terminator_reads_to_end() {
        let meta = parse_metadata_block("---\ntitle: A\n\ndate: 2021-02-03").unwrap();
        assert_eq!(meta.get("title"), Some("A"));
        assert_eq!(meta.get("date"), Some("2021-02-03"));
    }

    #[test]
    fn test_line_without_colon_is_error() {
        let err = parse_metadata_block("---\nno colon here\n---\n").unwrap_err();
        assert!(err.to_string().contains("no colon here"));
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(load_metadata_block(&temp.path().join("missing.md")).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("post.md");
        fs::write(&path, "---\ntitle: From disk\n---\n# Body\n").unwrap();
        let meta = load_metadata_block(&path).unwrap();
        assert_eq!(meta.get("title"), Some("From disk"));
    }
}
