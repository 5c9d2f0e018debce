//! Content classifier
//!
//! Splits the interior of an expression or statement construct into typed
//! tokens. Input is never rejected: unterminated strings run to the end of
//! the interior, and characters outside every category are skipped.

use super::category::Category;
use super::highlights::Highlights;
use super::position::PositionMapper;
use super::vocabulary::identifier_category;

/// Characters that start an operator
const OPERATOR_CHARS: &[u8] = b"+-*/%=!<>|&~^";

/// Characters that extend an operator to two characters (`==`, `<=`, `||`)
const OPERATOR_SECOND_CHARS: &[u8] = b"=<>|&";

/// Classify `interior`, which starts at byte `base` of the mapper's text,
/// appending one range per token to `highlights`.
pub fn classify(
    interior: &str,
    base: usize,
    mapper: &mut PositionMapper<'_>,
    highlights: &mut Highlights,
) {
    let bytes = interior.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let ch = bytes[i];
        let start = i;

        let category = if ch.is_ascii_whitespace() {
            i += 1;
            continue;
        } else if ch == b'"' || ch == b'\'' {
            i = string_end(bytes, i);
            Category::String
        } else if ch.is_ascii_digit() {
            i = scan_while(bytes, i, |b| b.is_ascii_digit() || b == b'.');
            Category::Number
        } else if OPERATOR_CHARS.contains(&ch) {
            let pair = bytes
                .get(i + 1)
                .is_some_and(|next| OPERATOR_SECOND_CHARS.contains(next));
            i += if pair { 2 } else { 1 };
            if ch == b'|' && !pair {
                Category::Filter
            } else {
                Category::Operator
            }
        } else if is_ident_start(ch) {
            i = scan_while(bytes, i, is_ident_continue);
            let next = scan_while(bytes, i, |b| b.is_ascii_whitespace());
            let is_call = bytes.get(next) == Some(&b'(');
            identifier_category(&interior[start..i], is_call)
        } else {
            i += 1;
            continue;
        };

        let range = mapper.range(base + start, base + i);
        highlights.push(category, range);
    }
}

/// Index just past the string opening at `start`, or the end of input if the
/// string is never closed.
fn string_end(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn scan_while(bytes: &[u8], mut i: usize, pred: impl Fn(u8) -> bool) -> usize {
    while i < bytes.len() && pred(bytes[i]) {
        i += 1;
    }
    i
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Classify a standalone interior and list (category, text) in scan order
    fn tokens(interior: &str) -> Vec<(Category, String)> {
        let mut mapper = PositionMapper::new(interior);
        let mut highlights = Highlights::new();
        classify(interior, 0, &mut mapper, &mut highlights);

        let mut out: Vec<(usize, Category, String)> = Vec::new();
        for (category, ranges) in highlights.iter() {
            for range in ranges {
                // Single-line input: columns are char offsets
                let text: String = interior
                    .chars()
                    .skip(range.start.column)
                    .take(range.end.column - range.start.column)
                    .collect();
                out.push((range.start.column, category, text));
            }
        }
        out.sort_by_key(|(col, _, _)| *col);
        out.into_iter().map(|(_, c, t)| (c, t)).collect()
    }

    fn tok(category: Category, text: &str) -> (Category, String) {
        (category, text.to_string())
    }

    #[test]
    fn test_identifier_call_detection() {
        assert_eq!(
            tokens("myMacro(x)"),
            vec![tok(Category::Function, "myMacro"), tok(Category::Variable, "x")]
        );
        assert_eq!(
            tokens("myMacro   (x)")[0],
            tok(Category::Function, "myMacro")
        );
        assert_eq!(tokens("myVar"), vec![tok(Category::Variable, "myVar")]);
    }

    #[test]
    fn test_filter_pipe() {
        assert_eq!(
            tokens("x|upper"),
            vec![
                tok(Category::Variable, "x"),
                tok(Category::Filter, "|"),
                tok(Category::Builtin, "upper"),
            ]
        );
    }

    #[test]
    fn test_double_pipe_is_operator() {
        assert_eq!(
            tokens("a || b"),
            vec![
                tok(Category::Variable, "a"),
                tok(Category::Operator, "||"),
                tok(Category::Variable, "b"),
            ]
        );
    }

    #[test]
    fn test_two_char_operators() {
        for op in ["==", "!=", "<=", ">=", "&&", "|="] {
            let input = format!("a {op} b");
            assert_eq!(tokens(&input)[1], tok(Category::Operator, op), "{op}");
        }
    }

    #[test]
    fn test_single_char_operators() {
        assert_eq!(
            tokens("a+b*c~d"),
            vec![
                tok(Category::Variable, "a"),
                tok(Category::Operator, "+"),
                tok(Category::Variable, "b"),
                tok(Category::Operator, "*"),
                tok(Category::Variable, "c"),
                tok(Category::Operator, "~"),
                tok(Category::Variable, "d"),
            ]
        );
    }

    #[test]
    fn test_operator_pairs_are_greedy_left_to_right() {
        // `=` then `=` pairs, the trailing `=` stands alone
        assert_eq!(
            tokens("==="),
            vec![tok(Category::Operator, "=="), tok(Category::Operator, "=")]
        );
    }

    #[test]
    fn test_strings() {
        assert_eq!(tokens("'it'"), vec![tok(Category::String, "'it'")]);
        assert_eq!(
            tokens(r#""a \" b" c"#),
            vec![tok(Category::String, r#""a \" b""#), tok(Category::Variable, "c")]
        );
        // the other quote kind does not close
        assert_eq!(tokens(r#""it's""#), vec![tok(Category::String, r#""it's""#)]);
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        assert_eq!(tokens("\"open x"), vec![tok(Category::String, "\"open x")]);
        // escape at the very end must not run past the input
        assert_eq!(tokens("'ab\\"), vec![tok(Category::String, "'ab\\")]);
    }

    #[test]
    fn test_permissive_numbers() {
        assert_eq!(tokens("1.2.3"), vec![tok(Category::Number, "1.2.3")]);
        assert_eq!(
            tokens("42abc"),
            vec![tok(Category::Number, "42"), tok(Category::Variable, "abc")]
        );
    }

    #[test]
    fn test_punctuation_is_skipped() {
        assert_eq!(
            tokens("user.items(), [1]"),
            vec![
                tok(Category::Variable, "user"),
                tok(Category::Method, "items"),
                tok(Category::Number, "1"),
            ]
        );
    }

    #[test]
    fn test_non_ascii_is_skipped() {
        assert_eq!(
            tokens("é x"),
            vec![tok(Category::Variable, "x")]
        );
    }

    #[test]
    fn test_base_offset_shifts_ranges() {
        let text = "{{ name }}";
        let mut mapper = PositionMapper::new(text);
        let mut highlights = Highlights::new();
        classify("name", 3, &mut mapper, &mut highlights);
        let range = highlights.get(Category::Variable)[0];
        assert_eq!(range.start.column, 3);
        assert_eq!(range.end.column, 7);
    }
}
