//! Directory traversal using the LIFO/FIFO containers for bookkeeping

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use super::{Queue, Stack};

/// Visiting order for [`walk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkOrder {
    /// Descend into each directory before visiting its siblings (stack)
    #[default]
    DepthFirst,

    /// Visit a whole level before the next one (queue)
    BreadthFirst,
}

/// Pending paths of a traversal
trait Frontier {
    fn put(&mut self, path: String);
    fn take(&mut self) -> Option<String>;
}

impl Frontier for Stack<String> {
    fn put(&mut self, path: String) {
        self.push(path);
    }

    fn take(&mut self) -> Option<String> {
        self.pop()
    }
}

impl Frontier for Queue<String> {
    fn put(&mut self, path: String) {
        self.push(path);
    }

    fn take(&mut self) -> Option<String> {
        self.pop()
    }
}

/// List `root` and everything beneath it
///
/// The root is always the first entry. Siblings are visited in name order.
/// Symlinks are reported but never followed.
pub fn walk(root: impl AsRef<Path>, order: WalkOrder) -> io::Result<Vec<String>> {
    let root = root.as_ref();
    debug!(root = %root.display(), ?order, "walking directory tree");

    match order {
        WalkOrder::DepthFirst => drive(root, Stack::new(), true),
        WalkOrder::BreadthFirst => drive(root, Queue::new(), false),
    }
}

fn drive<F: Frontier>(root: &Path, mut frontier: F, reverse: bool) -> io::Result<Vec<String>> {
    // Fail early on a missing root instead of returning an empty listing
    fs::symlink_metadata(root)?;

    let mut visited = Vec::new();
    frontier.put(root.to_string_lossy().into_owned());

    while let Some(current) = frontier.take() {
        let path = PathBuf::from(&current);
        let is_dir = fs::symlink_metadata(&path)?.is_dir();
        visited.push(current);

        if !is_dir {
            continue;
        }

        let mut children = fs::read_dir(&path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()?;
        children.sort();
        trace!(dir = %path.display(), children = children.len(), "expanding");

        // A stack pops in reverse, so push the last name first
        if reverse {
            children.reverse();
        }
        for child in children {
            frontier.put(child.to_string_lossy().into_owned());
        }
    }

    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let temp = TempDir::new().expect("create temp dir");
        fs::create_dir_all(temp.path().join("a/x")).unwrap();
        fs::create_dir_all(temp.path().join("b")).unwrap();
        fs::write(temp.path().join("a/x/f.txt"), b"1").unwrap();
        fs::write(temp.path().join("b/g.txt"), b"2").unwrap();
        temp
    }

    fn relative(root: &Path, listing: Vec<String>) -> Vec<String> {
        listing
            .into_iter()
            .map(|p| {
                Path::new(&p)
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_depth_first_order() {
        let temp = tree();
        let listing = walk(temp.path(), WalkOrder::DepthFirst).unwrap();
        assert_eq!(
            relative(temp.path(), listing),
            vec!["", "a", "a/x", "a/x/f.txt", "b", "b/g.txt"]
        );
    }

    #[test]
    fn test_breadth_first_order() {
        let temp = tree();
        let listing = walk(temp.path(), WalkOrder::BreadthFirst).unwrap();
        assert_eq!(
            relative(temp.path(), listing),
            vec!["", "a", "b", "a/x", "b/g.txt", "a/x/f.txt"]
        );
    }

    #[test]
    fn test_missing_root_is_error() {
        let temp = TempDir::new().unwrap();
        assert!(walk(temp.path().join("nope"), WalkOrder::DepthFirst).is_err());
    }
}
