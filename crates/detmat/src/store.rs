//! Named-matrix store owned by the application layer.
use crate::error::StoreError;
use crate::math::Matrix;

/// Number of entries a store holds unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 100;

/// A stored matrix together with the label the application gave it.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedMatrix {
    pub name: String,
    pub matrix: Matrix,
}

/// Bounded mapping from names to matrices, kept in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStore {
    entries: Vec<NamedMatrix>,
    capacity: usize,
}

impl MatrixStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Insert `matrix` under `name`, returning the matrix it replaced.
    ///
    /// Replacing an existing name never counts against capacity.
    pub fn insert(&mut self, name: &str, matrix: Matrix) -> Result<Option<Matrix>, StoreError> {
        validate_name(name)?;
        if let Some(idx) = self.position(name) {
            log::debug!("replacing stored matrix '{}'", name);
            let previous = std::mem::replace(&mut self.entries[idx].matrix, matrix);
            return Ok(Some(previous));
        }
        if self.entries.len() >= self.capacity {
            return Err(StoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.entries.push(NamedMatrix {
            name: name.to_string(),
            matrix,
        });
        Ok(None)
    }

    pub fn get(&self, name: &str) -> Option<&Matrix> {
        self.position(name).map(|idx| &self.entries[idx].matrix)
    }

    /// Independent copy of the matrix stored under `name`.
    pub fn snapshot(&self, name: &str) -> Result<Matrix, StoreError> {
        self.get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<Matrix, StoreError> {
        let idx = self
            .position(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(self.entries.remove(idx).matrix)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedMatrix> + '_ {
        self.entries.iter()
    }
}

impl Default for MatrixStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

/// Names appear as a single token in the text format, so they cannot be empty
/// or contain whitespace.
pub fn validate_name(name: &str) -> Result<(), StoreError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(StoreError::InvalidName(name.to_string()));
    }
    Ok(())
}
