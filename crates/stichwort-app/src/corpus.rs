//! The plain-text ebook corpus, one subdirectory per language.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

use stichwort_core::word::Language;

/// Book name to contents for one language. A missing corpus directory
/// is an empty corpus, not an error.
pub fn load(dir: &Path, language: Language) -> io::Result<BTreeMap<String, String>> {
    let mut books = BTreeMap::new();
    let language_dir = dir.join(language.code());
    let entries = match fs::read_dir(&language_dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!("no ebook directory at {}", language_dir.display());
            return Ok(books);
        }
        Err(err) => return Err(err),
    };

    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("txt") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        books.insert(name.to_owned(), fs::read_to_string(&path)?);
    }
    Ok(books)
}
