//! Compound call keys
//!
//! A [`CallKey`] identifies one call of a memoized function by its positional
//! and keyword arguments. Positional arguments compare in order. Keyword
//! arguments are kept sorted by name, so the order in which they were
//! supplied does not matter.

use std::collections::BTreeMap;
use std::fmt;

/// Cache key built from a call's positional and keyword arguments
///
/// ```
/// use memocache::CallKey;
///
/// let a = CallKey::new().arg(1).kwarg("scale", 2).kwarg("offset", 3);
/// let b = CallKey::new().arg(1).kwarg("offset", 3).kwarg("scale", 2);
/// assert_eq!(a, b);
///
/// let swapped = CallKey::new().arg(2).arg(1);
/// assert_ne!(CallKey::new().arg(1).arg(2), swapped);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CallKey<T> {
    positional: Vec<T>,
    keyword: BTreeMap<String, T>,
}

impl<T> CallKey<T> {
    /// Empty key (a call without arguments)
    pub fn new() -> Self {
        Self { positional: Vec::new(), keyword: BTreeMap::new() }
    }

    /// Append a positional argument
    #[must_use]
    pub fn arg(mut self, value: T) -> Self {
        self.positional.push(value);
        self
    }

    /// Set a keyword argument
    ///
    /// Supplying the same name twice keeps the last value.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: T) -> Self {
        self.keyword.insert(name.into(), value);
        self
    }

    /// Positional arguments in call order
    pub fn positional(&self) -> &[T] {
        &self.positional
    }

    /// Look up one keyword argument
    pub fn keyword(&self, name: &str) -> Option<&T> {
        self.keyword.get(name)
    }

    /// Keyword arguments sorted by name
    pub fn keywords(&self) -> impl Iterator<Item = (&str, &T)> {
        self.keyword.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Total number of arguments
    pub fn len(&self) -> usize {
        self.positional.len() + self.keyword.len()
    }

    /// True for a call without arguments
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for CallKey<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for CallKey<T> {
    /// Collect positional arguments
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self { positional: iter.into_iter().collect(), keyword: BTreeMap::new() }
    }
}

impl<T: fmt::Debug> fmt::Debug for CallKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        let mut first = true;
        for value in &self.positional {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
            first = false;
        }
        for (name, value) in &self.keyword {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value:?}")?;
            first = false;
        }
        write!(f, ")")
    }
}
