use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// Discover the SSM files directly inside `dir` (non-recursive — exports put
/// all maps of a corpus in one flat directory). Only `.json` files are
/// considered, extension matched case-insensitively. Sorted by path so batch
/// processing order is deterministic.
pub fn discover_ssm_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_lowercase();
        if extension != "json" {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    log::info!("Discovered {} SSM file(s) in {}", files.len(), dir.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_discover_ssm_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("map-1.json"), "{}").unwrap();
        fs::write(root.join("map-2.JSON"), "{}").unwrap();
        fs::write(root.join("notes.txt"), "skip me").unwrap();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested/map-3.json"), "{}").unwrap(); // not recursed into

        let files = discover_ssm_files(root).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["map-1.json", "map-2.JSON"]);
    }

    #[test]
    fn test_discover_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let files = discover_ssm_files(temp_dir.path()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_is_sorted() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("b.json"), "{}").unwrap();
        fs::write(root.join("a.json"), "{}").unwrap();
        let files = discover_ssm_files(root).unwrap();
        assert!(files[0].ends_with("a.json"));
        assert!(files[1].ends_with("b.json"));
    }
}
