use serde::Serialize;
use std::fmt;
use thiserror::Error as ThisError;

///
/// SchemaError
///
/// Lookup failures against the registered schema. These indicate a
/// programmer or deployment mistake, never malformed client input.
///

#[derive(Debug, ThisError)]
pub enum SchemaError {
    #[error("unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("unknown choice set: {0}")]
    UnknownChoiceSet(String),
}

///
/// ErrorTree
///
/// Ordered accumulator for schema validation issues. Validation is
/// non-failing at the traversal level; all issues are collected and
/// returned to the caller, which may choose how to interpret them.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct ErrorTree {
    issues: Vec<String>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
    }

    pub fn merge(&mut self, other: Self) {
        self.issues.extend(other.issues);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Consume the tree, returning `Err(self)` if any issue was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.issues.join("; "))
    }
}

/// Record a formatted issue on an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_resolves_ok() {
        let errs = ErrorTree::new();

        assert!(errs.is_empty());
        assert!(errs.result().is_ok());
    }

    #[test]
    fn issues_are_kept_in_insertion_order() {
        let mut errs = ErrorTree::new();
        err!(errs, "first: {}", 1);
        err!(errs, "second");

        assert_eq!(errs.issues(), ["first: 1", "second"]);

        let err = errs.result().expect_err("non-empty tree must fail");
        assert_eq!(err.to_string(), "first: 1; second");
    }
}
