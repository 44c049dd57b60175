//! Directory walker for candidate collection.
//!
//! Enumerates regular files under a root directory and records their paths
//! and sizes. Traversal is single-threaded on purpose: collection is the
//! sequential phase of the pipeline, and only the comparison phase that
//! follows is parallelized.
//!
//! Only the scan root itself can fail the walk. A single unreadable entry
//! must not abort the whole scan, so per-entry errors are logged at debug
//! level and skipped.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::{FileCandidate, ScanError};

/// Directory walker for candidate discovery.
#[derive(Debug)]
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// Whether to descend into subdirectories
    recursive: bool,
}

impl Walker {
    /// Create a new walker for the given root directory.
    #[must_use]
    pub fn new(root: &Path, recursive: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            recursive,
        }
    }

    /// Walk the directory and collect every regular file as a candidate.
    ///
    /// Directories, symlinks to directories, special files, and inaccessible
    /// entries are skipped silently. A symlink whose target is a regular
    /// file is a candidate; its size is read through the link. Entries are
    /// visited in file-name order within each directory so repeated runs
    /// over an unchanged tree yield candidates in a stable order.
    ///
    /// # Errors
    ///
    /// Fails only if the root does not exist, is not a directory, or cannot
    /// be opened for listing.
    pub fn collect(&self) -> Result<Vec<FileCandidate>, ScanError> {
        self.check_root()?;

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walk = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
            .sort_by_file_name();

        let mut candidates = Vec::new();
        for entry_result in walk {
            let entry = match entry_result {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            let file_type = entry.file_type();
            let size = if file_type.is_file() {
                match entry.metadata() {
                    Ok(metadata) => metadata.len(),
                    Err(e) => {
                        log::debug!("Skipping unstattable file {}: {}", entry.path().display(), e);
                        continue;
                    }
                }
            } else if file_type.is_symlink() {
                // Links are not followed during traversal, but a symlink
                // whose target is a regular file is still that file's bytes;
                // stat through the link for its size.
                match std::fs::metadata(entry.path()) {
                    Ok(metadata) if metadata.is_file() => metadata.len(),
                    Ok(_) => {
                        log::trace!("Skipping symlink to non-file: {}", entry.path().display());
                        continue;
                    }
                    Err(e) => {
                        log::debug!("Skipping broken symlink {}: {}", entry.path().display(), e);
                        continue;
                    }
                }
            } else {
                log::trace!("Skipping non-file entry: {}", entry.path().display());
                continue;
            };

            candidates.push(FileCandidate::new(entry.into_path(), size));
        }

        log::debug!(
            "Collected {} candidate(s) under {}",
            candidates.len(),
            self.root.display()
        );
        Ok(candidates)
    }

    /// Verify the scan root is an openable directory before walking.
    fn check_root(&self) -> Result<(), ScanError> {
        let metadata = std::fs::metadata(&self.root).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ScanError::NotFound(self.root.clone())
            } else {
                ScanError::Io {
                    path: self.root.clone(),
                    source: e,
                }
            }
        })?;

        if !metadata.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }

        // Surface listing failures (e.g. missing read permission) as a
        // traversal error rather than an empty candidate list.
        std::fs::read_dir(&self.root).map_err(|e| ScanError::Io {
            path: self.root.clone(),
            source: e,
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    /// Create a test directory with two top-level files and one nested file.
    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();

        let mut f = File::create(dir.path().join("file1.txt")).unwrap();
        writeln!(f, "Hello, world!").unwrap();

        let mut f = File::create(dir.path().join("file2.txt")).unwrap();
        writeln!(f, "Another file").unwrap();

        let subdir = dir.path().join("subdir");
        fs::create_dir(&subdir).unwrap();
        let mut f = File::create(subdir.join("nested.txt")).unwrap();
        writeln!(f, "Nested file content").unwrap();

        dir
    }

    #[test]
    fn test_walker_recursive_finds_all_files() {
        let dir = create_test_dir();
        let walker = Walker::new(dir.path(), true);

        let candidates = walker.collect().unwrap();

        assert_eq!(candidates.len(), 3);
        for candidate in &candidates {
            assert!(candidate.path.is_file());
            assert!(candidate.size > 0);
        }
    }

    #[test]
    fn test_walker_non_recursive_skips_subdirectories() {
        let dir = create_test_dir();
        let walker = Walker::new(dir.path(), false);

        let candidates = walker.collect().unwrap();

        assert_eq!(candidates.len(), 2);
        for candidate in &candidates {
            assert_eq!(candidate.path.parent().unwrap(), dir.path());
        }
    }

    #[test]
    fn test_walker_includes_empty_files() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("empty.txt")).unwrap();

        let candidates = Walker::new(dir.path(), false).collect().unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].size, 0);
    }

    #[test]
    fn test_walker_sorted_by_file_name() {
        let dir = TempDir::new().unwrap();
        for name in ["c.txt", "a.txt", "b.txt"] {
            let mut f = File::create(dir.path().join(name)).unwrap();
            writeln!(f, "content").unwrap();
        }

        let candidates = Walker::new(dir.path(), false).collect().unwrap();

        let names: Vec<_> = candidates
            .iter()
            .map(|c| c.path.file_name().unwrap().to_str().unwrap().to_owned())
            .collect();
        assert_eq!(names, ["a.txt", "b.txt", "c.txt"]);
    }

    #[test]
    fn test_walker_empty_directory() {
        let dir = TempDir::new().unwrap();
        let candidates = Walker::new(dir.path(), true).collect().unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_walker_missing_root_fails() {
        let walker = Walker::new(Path::new("/nonexistent/path/12345"), false);
        assert!(matches!(walker.collect(), Err(ScanError::NotFound(_))));
    }

    #[test]
    fn test_walker_file_root_fails() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        File::create(&file).unwrap();

        let walker = Walker::new(&file, false);
        assert!(matches!(walker.collect(), Err(ScanError::NotADirectory(_))));
    }

    #[test]
    #[cfg(unix)]
    fn test_walker_collects_file_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = create_test_dir();
        symlink(
            dir.path().join("file1.txt"),
            dir.path().join("link-to-file1.txt"),
        )
        .unwrap();

        let candidates = Walker::new(dir.path(), false).collect().unwrap();

        // The link counts as a candidate, sized through the link
        assert_eq!(candidates.len(), 3);
        let target_size = std::fs::metadata(dir.path().join("file1.txt")).unwrap().len();
        let link = candidates
            .iter()
            .find(|c| c.path.file_name().unwrap() == "link-to-file1.txt")
            .expect("file symlink should be collected");
        assert_eq!(link.size, target_size);
    }

    #[test]
    #[cfg(unix)]
    fn test_walker_skips_directory_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = create_test_dir();
        symlink(dir.path().join("subdir"), dir.path().join("link-to-subdir")).unwrap();

        let candidates = Walker::new(dir.path(), true).collect().unwrap();

        // No candidate through the directory link, and no double-counted
        // nested file
        assert_eq!(candidates.len(), 3);
        for candidate in &candidates {
            assert!(!candidate
                .path
                .components()
                .any(|c| c.as_os_str() == "link-to-subdir"));
        }
    }

    #[test]
    #[cfg(unix)]
    fn test_walker_skips_broken_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = create_test_dir();
        symlink(dir.path().join("missing.txt"), dir.path().join("dangling")).unwrap();

        let candidates = Walker::new(dir.path(), false).collect().unwrap();

        assert_eq!(candidates.len(), 2);
    }
}
