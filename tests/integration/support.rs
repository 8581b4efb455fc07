use pathclass::tree::{Listing, TreeSource};
use pathclass::ReadFailure;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::{Path, PathBuf};

#[derive(Default)]
struct Node {
    files: BTreeSet<PathBuf>,
    dirs: BTreeSet<PathBuf>,
}

/// In-memory tree with injectable listing failures.
pub struct MemorySource {
    root: PathBuf,
    nodes: BTreeMap<PathBuf, Node>,
    failing: HashSet<PathBuf>,
}

impl MemorySource {
    pub fn new(root: &str) -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from(root), Node::default());
        Self {
            root: PathBuf::from(root),
            nodes,
            failing: HashSet::new(),
        }
    }

    pub fn file(mut self, path: &str) -> Self {
        let path = PathBuf::from(path);
        let parent = path.parent().unwrap().to_path_buf();
        self.ensure_dir(&parent);
        self.nodes.get_mut(&parent).unwrap().files.insert(path);
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.ensure_dir(Path::new(path));
        self
    }

    pub fn failing(mut self, path: &str) -> Self {
        self.ensure_dir(Path::new(path));
        self.failing.insert(PathBuf::from(path));
        self
    }

    fn ensure_dir(&mut self, dir: &Path) {
        if self.nodes.contains_key(dir) {
            return;
        }
        self.nodes.insert(dir.to_path_buf(), Node::default());
        if dir != self.root {
            let parent = dir.parent().unwrap().to_path_buf();
            self.ensure_dir(&parent);
            self.nodes
                .get_mut(&parent)
                .unwrap()
                .dirs
                .insert(dir.to_path_buf());
        }
    }
}

impl TreeSource for MemorySource {
    fn list(&self, dir: &Path) -> Result<Listing, ReadFailure> {
        if self.failing.contains(dir) {
            return Err(ReadFailure::new(
                dir,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        let node = self.nodes.get(dir).ok_or_else(|| {
            ReadFailure::new(
                dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            )
        })?;
        Ok(Listing {
            files: node.files.iter().cloned().collect(),
            dirs: node.dirs.iter().cloned().collect(),
        }
        .sorted())
    }
}

/// Minted container numbers in order of first declaration.
pub fn declared_folder_numbers(text: &str) -> Vec<u32> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix("public class folder_"))
        .map(|n| n.parse().unwrap())
        .collect()
}

/// Trimmed member declaration lines.
pub fn member_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("public readonly"))
        .map(str::to_string)
        .collect()
}
