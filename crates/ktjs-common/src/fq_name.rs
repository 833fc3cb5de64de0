//! Fully qualified package names.
//!
//! An `FqName` is a dotted path such as `foo.bar.baz`. The empty path is the
//! root package (`FqName::ROOT`), which is where every file without a
//! `package` directive lives.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a dotted path contains an empty segment (`a..b`, `.a`, `a.`).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid qualified name `{0}`: empty segment")]
pub struct InvalidFqName(pub String);

/// A dotted package path. The empty path is the root package.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FqName(String);

impl FqName {
    /// The root package (empty path).
    pub const ROOT: Self = Self(String::new());

    /// Parse a dotted path. An empty string is the root package.
    pub fn parse(text: &str) -> Result<Self, InvalidFqName> {
        if !text.is_empty() && text.split('.').any(str::is_empty) {
            return Err(InvalidFqName(text.to_string()));
        }
        Ok(Self(text.to_string()))
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The enclosing package, or `None` for the root package.
    ///
    /// A top-level package such as `foo` has the root package as its parent.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(match self.0.rfind('.') {
            Some(dot) => Self(self.0[..dot].to_string()),
            None => Self::ROOT,
        })
    }

    /// The last segment (`baz` for `foo.bar.baz`); empty for the root package.
    #[must_use]
    pub fn short_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(dot) => &self.0[dot + 1..],
            None => &self.0,
        }
    }

    /// Append one segment.
    pub fn child(&self, name: &str) -> Result<Self, InvalidFqName> {
        if self.is_root() {
            Self::parse(name)
        } else {
            Self::parse(&format!("{}.{name}", self.0))
        }
    }

    /// Segments outermost first. The root package has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.').filter(|segment| !segment.is_empty())
    }

    /// Number of segments (0 for the root package).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FqName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl FromStr for FqName {
    type Err = InvalidFqName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FqName {
    type Error = InvalidFqName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FqName> for String {
    fn from(value: FqName) -> Self {
        value.0
    }
}

#[cfg(test)]
#[path = "../tests/fq_name_tests.rs"]
mod tests;
