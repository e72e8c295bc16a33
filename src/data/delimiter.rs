use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::error::{LoadError, Result};

// ---------------------------------------------------------------------------
// Delimiter – how a line is cut into tokens
// ---------------------------------------------------------------------------

/// Separator used to tokenize each input line.
///
/// `Literal` text is matched as-is, so `"."` or `"|"` need no escaping.
/// `Pattern` is a regular expression, e.g. `r"\s+"` for runs of whitespace.
///
/// In JSON this reads as `{"literal": ","}` or `{"pattern": "\\s+"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    Literal(String),
    Pattern(String),
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter::Literal(",".to_string())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Literal(s) => write!(f, "{s:?}"),
            Delimiter::Pattern(p) => write!(f, "/{p}/"),
        }
    }
}

impl From<&str> for Delimiter {
    fn from(s: &str) -> Self {
        Delimiter::Literal(s.to_string())
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        Delimiter::Literal(c.to_string())
    }
}

impl Delimiter {
    /// Regular-expression delimiter.
    pub fn pattern(p: impl Into<String>) -> Self {
        Delimiter::Pattern(p.into())
    }

    /// Validate and compile into a [`Splitter`]. Done once per load, before
    /// the first line is read.
    pub fn compile(&self) -> Result<Splitter> {
        match self {
            Delimiter::Literal(s) if s.is_empty() => Err(LoadError::EmptyDelimiter),
            Delimiter::Literal(s) => Ok(Splitter::Literal(s.clone())),
            Delimiter::Pattern(p) if p.is_empty() => Err(LoadError::EmptyDelimiter),
            Delimiter::Pattern(p) => Ok(Splitter::Pattern(Regex::new(p)?)),
        }
    }
}

/// Compiled form of a [`Delimiter`].
#[derive(Debug, Clone)]
pub enum Splitter {
    Literal(String),
    Pattern(Regex),
}

impl Splitter {
    /// Split one (already trimmed) line.
    ///
    /// Trailing empty tokens are dropped, so `"1,2,"` is `["1", "2"]`, and a
    /// zero-width pattern match at the start adds no leading empty token.
    /// An empty line still yields a single empty token, never zero tokens.
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        if line.is_empty() {
            return vec![""];
        }

        let mut tokens: Vec<&str> = match self {
            Splitter::Literal(s) => line.split(s.as_str()).collect(),
            Splitter::Pattern(re) => {
                let mut tokens: Vec<&str> = re.split(line).collect();
                if re.find(line).is_some_and(|m| m.start() == 0 && m.end() == 0) {
                    tokens.remove(0);
                }
                tokens
            }
        };

        while tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }
        tokens
    }
}
