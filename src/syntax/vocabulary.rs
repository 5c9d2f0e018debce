//! Fixed Jinja vocabulary and identifier precedence
//!
//! Identifiers are looked up lower-cased, except booleans which only match
//! their literal spellings.

use super::category::Category;

/// Statement and expression keywords
pub const KEYWORDS: &[&str] = &[
    "and", "as", "autoescape", "block", "break", "call", "continue", "do", "elif", "else",
    "endautoescape", "endblock", "endcall", "endfilter", "endfor", "endif", "endmacro",
    "endraw", "endset", "endtrans", "endwith", "extends", "filter", "for", "from", "if",
    "ignore", "import", "in", "include", "is", "macro", "missing", "not", "or", "pluralize",
    "raw", "recursive", "scoped", "set", "trans", "with", "without", "context",
];

/// Boolean and null literals, matched case-sensitively
pub const BOOLEANS: &[&str] = &["true", "false", "True", "False", "none", "None"];

/// Built-in filters, tests and global functions
pub const BUILTINS: &[&str] = &[
    "abs", "attr", "batch", "capitalize", "center", "count", "cycler", "default",
    "defined", "dict", "dictsort", "divisibleby", "escape", "even", "filesizeformat",
    "first", "float", "forceescape", "format", "groupby", "indent", "int", "iterable",
    "join", "joiner", "last", "length", "lipsum", "list", "lower", "map", "mapping", "max",
    "min", "namespace", "number", "odd", "pprint", "random", "range", "reject",
    "rejectattr", "replace", "reverse", "round", "safe", "sameas", "select", "selectattr",
    "sequence", "slice", "sort", "string", "striptags", "sum", "super", "title", "tojson",
    "trim", "truncate", "undefined", "unique", "upper", "urlencode", "urlize", "wordcount",
    "wordwrap", "xmlattr", "caller", "loop", "self", "varargs", "kwargs",
];

/// Built-in methods of strings, lists and dicts
pub const METHODS: &[&str] = &[
    "append", "clear", "copy", "count", "endswith", "extend", "find", "get", "index", "insert",
    "isalnum", "isalpha", "isdigit", "islower", "isupper", "items", "keys", "lstrip", "pop",
    "popitem", "remove", "rfind", "rsplit", "rstrip", "setdefault", "split", "splitlines",
    "startswith", "strip", "swapcase", "update", "values", "zfill", "cycle", "reset",
    "next",
];

/// An identifier under classification
#[derive(Debug, Clone, Copy)]
pub struct Identifier<'a> {
    /// Identifier exactly as written
    pub text: &'a str,
    /// ASCII lower-cased spelling
    pub lowered: &'a str,
    /// Followed (after optional whitespace) by `(`
    pub is_call: bool,
}

type Rule = fn(&Identifier<'_>) -> bool;

fn is_keyword(id: &Identifier<'_>) -> bool {
    KEYWORDS.contains(&id.lowered)
}

fn is_boolean(id: &Identifier<'_>) -> bool {
    BOOLEANS.contains(&id.text)
}

fn is_builtin(id: &Identifier<'_>) -> bool {
    BUILTINS.contains(&id.lowered)
}

fn is_method(id: &Identifier<'_>) -> bool {
    METHODS.contains(&id.lowered)
}

fn is_call(id: &Identifier<'_>) -> bool {
    id.is_call
}

/// Identifier rules in precedence order. The first match wins; an identifier
/// matching none of them is a [`Category::Variable`].
pub const IDENTIFIER_RULES: &[(Category, Rule)] = &[
    (Category::Keyword, is_keyword),
    (Category::Boolean, is_boolean),
    (Category::Builtin, is_builtin),
    (Category::Method, is_method),
    (Category::Function, is_call),
];

/// Category of `text`, given whether it is followed by a call paren
pub fn identifier_category(text: &str, is_call: bool) -> Category {
    let lowered = text.to_ascii_lowercase();
    let id = Identifier {
        text,
        lowered: &lowered,
        is_call,
    };
    IDENTIFIER_RULES
        .iter()
        .find(|(_, rule)| rule(&id))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Variable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let order: Vec<Category> = IDENTIFIER_RULES.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                Category::Keyword,
                Category::Boolean,
                Category::Builtin,
                Category::Method,
                Category::Function,
            ]
        );
    }

    #[test]
    fn test_keyword_beats_call() {
        assert_eq!(identifier_category("for", true), Category::Keyword);
        assert_eq!(identifier_category("if", false), Category::Keyword);
    }

    #[test]
    fn test_keywords_ignore_case() {
        assert_eq!(identifier_category("ENDFOR", false), Category::Keyword);
        assert_eq!(identifier_category("Upper", false), Category::Builtin);
    }

    #[test]
    fn test_booleans_are_case_sensitive() {
        assert_eq!(identifier_category("True", false), Category::Boolean);
        assert_eq!(identifier_category("none", false), Category::Boolean);
        assert_eq!(identifier_category("TRUE", false), Category::Variable);
        assert_eq!(identifier_category("NONE", false), Category::Variable);
    }

    #[test]
    fn test_builtin_beats_method() {
        // `count` is both a filter and a list method
        assert!(METHODS.contains(&"count"));
        assert_eq!(identifier_category("count", true), Category::Builtin);
    }

    #[test]
    fn test_method_and_function() {
        assert_eq!(identifier_category("append", true), Category::Method);
        assert_eq!(identifier_category("split", false), Category::Method);
        assert_eq!(identifier_category("myMacro", true), Category::Function);
        assert_eq!(identifier_category("myVar", false), Category::Variable);
    }

    #[test]
    fn test_vocabulary_is_lowercase() {
        for word in KEYWORDS.iter().chain(BUILTINS).chain(METHODS) {
            assert_eq!(*word, word.to_ascii_lowercase(), "{word} must be lower-case");
        }
    }
}
