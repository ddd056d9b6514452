//! Resolution of CLI path arguments into concrete log files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Resolves each argument to a file or a directory tree of `.txt` files.
///
/// Arguments are tried relative to the current working directory first, then
/// as given. An argument resolving to nothing prints a warning and is
/// skipped; a failure while walking a resolved directory is fatal.
pub fn resolve_paths(args: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for arg in args {
        match resolve_arg(arg)? {
            Some(found) => files.extend(found),
            None => println!("File '{arg}' is not found!"),
        }
    }
    Ok(files)
}

fn resolve_arg(arg: &str) -> Result<Option<Vec<PathBuf>>> {
    if let Ok(cwd) = std::env::current_dir() {
        let candidate = cwd.join(arg);
        if let Some(files) = collect(&candidate)? {
            return Ok(Some(files));
        }
    }
    collect(Path::new(arg))
}

fn collect(path: &Path) -> Result<Option<Vec<PathBuf>>> {
    if path.is_file() {
        Ok(Some(vec![path.to_path_buf()]))
    } else if path.is_dir() {
        let mut files = Vec::new();
        walk_txt(path, &mut files)
            .with_context(|| format!("failed to scan directory {}", path.display()))?;
        files.sort();
        Ok(Some(files))
    } else {
        Ok(None)
    }
}

/// Iterative directory walk collecting `.txt` files.
fn walk_txt(root: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.is_dir() {
                stack.push(path);
            } else if path.extension().is_some_and(|ext| ext == "txt") {
                files.push(path);
            }
        }
    }
    Ok(())
}
