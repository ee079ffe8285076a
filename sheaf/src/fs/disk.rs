//! Real-filesystem capability backed by `std::fs`.

use std::fs;
use std::io;
use std::path::Path;

use super::FileSystem;

/// [`FileSystem`] implementation over the host filesystem.
///
/// Child names are sorted so that repeated traversals of an unchanged tree
/// visit entries in the same order regardless of what order the OS returns
/// them in.
///
/// # Examples
///
/// ```no_run
/// use sheaf::{DiskFileSystem, Workspace};
///
/// let workspace = Workspace::new("/home/user/project", DiskFileSystem);
/// let bundle = workspace.add_paths(&[], &["src".into()]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskFileSystem;

impl FileSystem for DiskFileSystem {
    fn is_directory(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            Ok(metadata) => metadata.is_dir(),
            Err(err) => {
                log::debug!("Failed to stat {}: {err}", path.display());
                false
            }
        }
    }

    fn list_children(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}
