use serde::{Serialize, Serializer};

use crate::Reflect;

/// An ordered, index-addressable list of string values. Its own
/// enumerable keys are the stringified element indices, so a sequence of
/// length n enumerates `"0"` through `"n-1"`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    items: Vec<String>,
}

impl Sequence {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, value: impl Into<String>) {
        self.items.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element values in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl Reflect for Sequence {
    fn own_keys(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new((0..self.items.len()).map(|index| index.to_string()))
    }
}

impl From<Vec<String>> for Sequence {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl<S: Into<String>> FromIterator<S> for Sequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl Serialize for Sequence {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}
