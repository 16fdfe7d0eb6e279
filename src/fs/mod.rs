use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Failure to produce the text of a matched file.
///
/// Covers every per-file failure the walk tolerates: the file cannot be
/// opened or read, or its bytes are not valid UTF-8. The `Display` output is
/// the description printed next to the file's path.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
}

/// True for a directory below the root whose base name is in the ignore set.
/// Plain files keep their names out of this check entirely.
fn is_ignored_dir(entry: &DirEntry, ignored: &HashSet<&str>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| ignored.contains(name))
}

pub fn walk_directory(root: &Path, ignored_dirs: &[String], target_suffix: &str) -> Vec<PathBuf> {
    let ignored: HashSet<&str> = ignored_dirs.iter().map(String::as_str).collect();
    let mut files = Vec::new();

    // Pruning happens in filter_entry, before descent: an ignored directory
    // is never listed, so nothing under it can reach the suffix check.
    for result in WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry, &ignored))
    {
        match result {
            Ok(entry) => {
                if entry.file_type().is_file()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| name.ends_with(target_suffix))
                {
                    files.push(entry.into_path());
                }
            }
            Err(err) => eprintln!("Error walking directory: {}", err),
        }
    }

    files.sort();
    files
}

pub fn read_file_text(path: &Path) -> Result<String, ReadError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
