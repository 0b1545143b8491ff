use std::fmt;

use serde::Serialize;

/// One row of a statistics snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.word, self.count)
    }
}

impl<S: Into<String>> From<(S, usize)> for WordCount {
    fn from((word, count): (S, usize)) -> Self {
        Self::new(word, count)
    }
}
