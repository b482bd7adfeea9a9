use slotmap::SlotMap;

use crate::{ParametricPath, PathId};

/// A collection of paths, such as the tracks a scene can switch between.
#[derive(Default)]
pub struct PathSet {
    paths: SlotMap<PathId, Box<dyn ParametricPath>>,
}

impl PathSet {
    /// Creates an empty path set.
    pub fn new() -> Self {
        Default::default()
    }

    /// Adds a path to the set.
    pub fn insert(&mut self, path: impl ParametricPath + 'static) -> PathId {
        self.paths.insert(Box::new(path))
    }

    /// Gets a reference to the path with the given ID.
    pub fn get(&self, id: PathId) -> Option<&dyn ParametricPath> {
        self.paths.get(id).map(|path| &**path)
    }

    /// Gets a mutable reference to the path with the given ID.
    pub fn get_mut(&mut self, id: PathId) -> Option<&mut (dyn ParametricPath + 'static)> {
        self.paths.get_mut(id).map(|path| &mut **path)
    }

    /// Removes a path from the set, returning it.
    pub fn remove(&mut self, id: PathId) -> Option<Box<dyn ParametricPath>> {
        self.paths.remove(id)
    }

    /// Finds the first path whose canonical name matches `name`.
    pub fn find(&self, name: &str) -> Option<PathId> {
        self.paths
            .iter()
            .find(|(_, path)| path.name_equals(name))
            .map(|(id, _)| id)
    }

    /// The number of paths in the set.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Returns true if the set holds no paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterates over the paths in the set.
    pub fn iter(&self) -> impl Iterator<Item = (PathId, &dyn ParametricPath)> {
        self.paths.iter().map(|(id, path)| (id, &**path))
    }
}
