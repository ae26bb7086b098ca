//! Filesystem collaborators for the pipeline: document discovery, document
//! and stopword loading. Thin wrappers; all the interesting decisions live in
//! [`crate::lsi`].

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::lsi::LsiError;

/// A discovered document: its stable name (file stem) and source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub path: PathBuf,
}

/// List the `.txt` files directly inside `dir`, sorted by path.
///
/// Sorting fixes the column order of the term-document matrix regardless of
/// directory-iteration order. The document name is the file stem, so
/// `poems/ocean.txt` becomes `ocean`. An empty result is not an error here;
/// the decomposer rejects the empty matrix it leads to.
pub fn discover_documents(dir: &Path) -> Result<Vec<SourceDocument>, LsiError> {
    let entries = fs::read_dir(dir).map_err(|source| LsiError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut documents = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LsiError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("txt") {
            continue;
        }
        let name = match path.file_stem() {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => continue,
        };
        documents.push(SourceDocument { name, path });
    }
    documents.sort_by(|a, b| a.path.cmp(&b.path));

    info!("discovered {} documents under {}", documents.len(), dir.display());
    Ok(documents)
}

/// Read a document's full text. No skip-and-continue: an unreadable document
/// aborts the run with the offending path.
pub fn read_document(path: &Path) -> Result<String, LsiError> {
    fs::read_to_string(path).map_err(|source| LsiError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the stopword file: one word per line, trimmed of surrounding
/// whitespace, blank lines ignored.
pub fn load_stopwords(path: &Path) -> Result<HashSet<String>, LsiError> {
    let text = fs::read_to_string(path).map_err(|source| LsiError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let stopwords: HashSet<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    debug!("loaded {} stopwords from {}", stopwords.len(), path.display());
    Ok(stopwords)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn discovery_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.txt"), "beta").unwrap();
        fs::write(dir.path().join("a.txt"), "alpha").unwrap();
        fs::write(dir.path().join("notes.md"), "skip me").unwrap();

        let docs = discover_documents(dir.path()).unwrap();
        let names: Vec<&str> = docs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn stopwords_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stop.txt");
        fs::write(&path, "  the \nand\n\n  of\n").unwrap();

        let stopwords = load_stopwords(&path).unwrap();
        assert_eq!(stopwords.len(), 3);
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("of"));
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = read_document(Path::new("/no/such/doc.txt")).unwrap_err();
        match err {
            LsiError::Io { path, .. } => assert_eq!(path, Path::new("/no/such/doc.txt")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
