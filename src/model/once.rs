//! Write-once value slot.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that may be assigned at most once.
///
/// Later assignments are ignored, which gives "first match wins" semantics
/// to the parser and "write once per run" semantics to enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOnce<T> {
    Unset,
    Set(T),
}

impl<T> SetOnce<T> {
    /// Create an unset slot
    #[must_use]
    pub const fn new() -> Self {
        Self::Unset
    }

    /// Store `value` if the slot is still unset.
    ///
    /// Returns `true` when the value was stored.
    pub fn set(&mut self, value: T) -> bool {
        match self {
            Self::Unset => {
                *self = Self::Set(value);
                true
            }
            Self::Set(_) => false,
        }
    }

    /// Whether a value has been stored
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Borrow the stored value
    #[must_use]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }
}

impl<T> Default for SetOnce<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<Option<T>> for SetOnce<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Unset, Self::Set)
    }
}

// Serialized exactly like `Option<T>`: unset becomes `null`.
impl<T: Serialize> Serialize for SetOnce<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SetOnce<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
