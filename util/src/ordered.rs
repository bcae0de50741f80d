//! An insertion-ordered sequence of symbols.
//!
//! Every operation is pure: it leaves `self` untouched and returns a new
//! sequence. The backing store is a persistent vector, so clones are cheap and
//! untouched prefixes are shared between a sequence and the ones derived from it.

use rpds::Vector;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeqError {
    #[error("index {index} is out of range for a sequence of length {len}")]
    OutOfRange { index: usize, len: usize },
}
pub type Result<T, E = SeqError> = std::result::Result<T, E>;

#[derive(Clone)]
pub struct OrderedSeq<T> {
    items: Vector<T>,
}

impl<T> Default for OrderedSeq<T> {
    fn default() -> Self {
        Self {
            items: Vector::new(),
        }
    }
}

impl<T: Clone + PartialEq> OrderedSeq<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(item: T) -> Self {
        Self {
            items: Vector::new().push_back(item),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn push(&self, item: T) -> Self {
        Self {
            items: self.items.push_back(item),
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(SeqError::OutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Builds the sequence `[self[i] for i in indices]`, in the order given.
    /// Indices may repeat.
    pub fn select(&self, indices: &[usize]) -> Result<Self> {
        indices
            .iter()
            .map(|&index| {
                self.get(index).cloned().ok_or(SeqError::OutOfRange {
                    index,
                    len: self.len(),
                })
            })
            .collect()
    }

    /// Appends `other` after `self`. Duplicates are kept; see [`Self::dedup`].
    pub fn concat(&self, other: &Self) -> Self {
        let mut items = self.items.clone();
        for item in other.iter() {
            items.push_back_mut(item.clone());
        }
        Self { items }
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|x| x == item)
    }

    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|x| x == item)
    }

    /// Drops every position listed in `indices`; the remaining items keep
    /// their relative order.
    pub fn remove_at(&self, indices: &[usize]) -> Result<Self> {
        for &i in indices {
            self.check_index(i)?;
        }
        Ok(self
            .iter()
            .enumerate()
            .filter(|(i, _)| !indices.contains(i))
            .map(|(_, x)| x.clone())
            .collect())
    }

    /// Removes the first occurrence of `item`, if any.
    pub fn remove_one(&self, item: &T) -> Self {
        match self.index_of(item) {
            Some(i) => self
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, x)| x.clone())
                .collect(),
            None => self.clone(),
        }
    }

    pub fn remove_all(&self, item: &T) -> Self {
        if !self.contains(item) {
            return self.clone();
        }
        self.iter().filter(|x| *x != item).cloned().collect()
    }

    /// Keeps the first occurrence of each value.
    pub fn dedup(&self) -> Self {
        let mut ret = Self::new();
        for item in self.iter() {
            if !ret.contains(item) {
                ret.items.push_back_mut(item.clone());
            }
        }
        ret
    }
}

impl<T: Clone + PartialEq> FromIterator<T> for OrderedSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: PartialEq> PartialEq for OrderedSeq<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.items.iter().eq(other.items.iter())
    }
}
impl<T: Eq> Eq for OrderedSeq<T> {}

impl<T: std::fmt::Debug> std::fmt::Debug for OrderedSeq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: std::fmt::Display> std::fmt::Display for OrderedSeq<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_fmt(format_args!("{item}"))?;
        }
        f.write_str("]")
    }
}
