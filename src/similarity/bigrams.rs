use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

/// Two consecutive tokens of one normalized text, in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bigram {
    pub first: String,
    pub second: String,
}

impl Bigram {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for Bigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

// Serialized as a two-element array: ["perro", "corre"]
impl Serialize for Bigram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.first, &self.second).serialize(serializer)
    }
}

pub type BigramSet = BTreeSet<Bigram>;

/// Collect the set of adjacent token pairs. Fewer than two tokens yield an empty set.
pub fn bigrams_of<S: AsRef<str>>(tokens: &[S]) -> BigramSet {
    tokens
        .windows(2)
        .map(|pair| Bigram::new(pair[0].as_ref(), pair[1].as_ref()))
        .collect()
}
