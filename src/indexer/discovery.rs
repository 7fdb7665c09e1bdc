//! Directory discovery: enumerate artifact files whose name is a positive
//! decimal document ID, ignoring anything else.

use std::fs;
use std::path::Path;

use super::index::IndexError;

pub fn discover_document_ids(dir: &Path) -> Result<Vec<u32>, IndexError> {
    let mut ids = Vec::new();

    for entry in fs::read_dir(dir).map_err(IndexError::DirScan)? {
        let entry = entry.map_err(IndexError::DirScan)?;
        let file_type = entry.file_type().map_err(IndexError::DirScan)?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        match name.parse::<u32>() {
            Ok(id) if id > 0 => ids.push(id),
            _ => tracing::debug!(file = %name, "skipping non-artifact file"),
        }
    }

    ids.sort_unstable();
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn discovers_only_positive_integer_names_in_order() {
        let dir = tempdir().unwrap();
        for name in ["3", "1", "2", "readme.txt", "0", "-1", "notes"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let ids = discover_document_ids(dir.path()).unwrap();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn empty_directory_yields_no_ids() {
        let dir = tempdir().unwrap();
        assert!(discover_document_ids(dir.path()).unwrap().is_empty());
    }
}
