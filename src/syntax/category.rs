//! Token categories
//!
//! The closed set of classes a template token can be styled as.

use serde::{Deserialize, Serialize};

/// A styling class for one token.
///
/// Declaration order is the output order of [`Highlights`](super::Highlights)
/// and the order style handles are created in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Delimiter,
    Keyword,
    Variable,
    String,
    Number,
    Operator,
    Function,
    Method,
    Filter,
    Comment,
    Boolean,
    Builtin,
}

/// Stable category names, indexed by `Category as usize`.
pub const CATEGORY_NAMES: &[&str] = &[
    "delimiter", // {{ }} {% %}
    "keyword",   // if, for, endblock
    "variable",  // user.name
    "string",    // "quoted"
    "number",    // 42, 1.5
    "operator",  // ==, +, and friends
    "function",  // my_macro(...)
    "method",    // items.append(...)
    "filter",    // the `|` in x|upper
    "comment",   // {# ... #}
    "boolean",   // true, None
    "builtin",   // upper, length
];

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 12] = [
        Category::Delimiter,
        Category::Keyword,
        Category::Variable,
        Category::String,
        Category::Number,
        Category::Operator,
        Category::Function,
        Category::Method,
        Category::Filter,
        Category::Comment,
        Category::Boolean,
        Category::Builtin,
    ];

    /// Lower-case identifier used as theme key and JSON key
    pub fn name(self) -> &'static str {
        CATEGORY_NAMES[self as usize]
    }

    /// Look up a category by its name
    pub fn from_name(name: &str) -> Option<Self> {
        CATEGORY_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|idx| Self::ALL[idx])
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
