//! Per-line extraction helpers used by the scanner.
//!
//! All of these are pure: they borrow the line and return new values.

use regex::Regex;
use std::sync::LazyLock;

static RE_BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[[:space:][:cntrl:]]*$").unwrap());

/// Tokens that can never be a class or method name.
pub const PROTECTED_KEYWORDS: &[&str] = &[
    "private", "public", "class", "void", "double", "int", "String",
];

/// True when the line holds nothing but whitespace or control characters.
pub fn is_blank_line(line: &str) -> bool {
    RE_BLANK.is_match(line)
}

/// Collect every token after the one containing `breakpoint`.
///
/// Each kept token is prefixed by a single space, so
/// `" * @param x the value"` with `@param` gives `" x the value"`.
/// Tokens before the match and the matching token itself are dropped.
/// Returns an empty string when no token contains the breakpoint.
///
/// Only spaces and newlines separate tokens here; a tab stays inside its
/// token.
pub fn parse_from(line: &str, breakpoint: &str) -> String {
    let mut tokens = line.split([' ', '\n']).filter(|t| !t.is_empty());
    if tokens.by_ref().all(|t| !t.contains(breakpoint)) {
        return String::new();
    }
    tokens.fold(String::new(), |mut acc, t| {
        acc.push(' ');
        acc.push_str(t);
        acc
    })
}

/// Result of scanning a declaration line for its name.
#[derive(Debug, PartialEq, Eq)]
pub struct NameScan {
    pub name: String,
    /// Whether the terminator token was seen before the line ran out.
    pub terminated: bool,
}

/// Pull a class or method name out of a declaration line.
///
/// Scans tokens left to right, keeping the last one that is not in
/// [`PROTECTED_KEYWORDS`]. The scan stops at the first token containing
/// `terminator`; any text glued in front of the terminator (`bar(int`)
/// is the final candidate.
pub fn scan_name(line: &str, terminator: &str) -> NameScan {
    let mut name = "";
    for token in line.split_ascii_whitespace() {
        if let Some(pos) = token.find(terminator) {
            let head = &token[..pos];
            if !head.is_empty() && !is_protected(head) {
                name = head;
            }
            return NameScan {
                name: name.to_string(),
                terminated: true,
            };
        }
        if !is_protected(token) {
            name = token;
        }
    }
    NameScan {
        name: name.to_string(),
        terminated: false,
    }
}

#[cfg(test)]
fn parse_name(line: &str, terminator: &str) -> String {
    scan_name(line, terminator).name
}

fn is_protected(token: &str) -> bool {
    PROTECTED_KEYWORDS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines() {
        assert!(is_blank_line(""));
        assert!(is_blank_line("   "));
        assert!(is_blank_line(" \t \n"));
        assert!(is_blank_line("\r"));
        assert!(is_blank_line("\x0b\x0c"));
    }

    #[test]
    fn non_blank_lines() {
        assert!(!is_blank_line("x"));
        assert!(!is_blank_line("  }  "));
        assert!(!is_blank_line("\t*/"));
    }

    #[test]
    fn parse_from_author() {
        assert_eq!(parse_from(" * @author Jane", "@author"), " Jane");
        assert_eq!(parse_from(" * @author Jane  Q. Public", "@author"), " Jane Q. Public");
    }

    #[test]
    fn parse_from_keeps_tabs_inside_tokens() {
        assert_eq!(parse_from(" * @param\tx the value", "@param"), " the value");
        assert_eq!(parse_from(" * @author Jane\tDoe", "@author"), " Jane\tDoe");
    }

    #[test]
    fn parse_from_drops_leading_tokens() {
        assert_eq!(parse_from("a b @param x the value", "@param"), " x the value");
    }

    #[test]
    fn parse_from_matches_substring_token() {
        // the breakpoint only has to be contained in the token
        assert_eq!(parse_from("*@return the sum", "@return"), " the sum");
    }

    #[test]
    fn parse_from_missing_breakpoint() {
        assert_eq!(parse_from(" * plain text", "@param"), "");
        assert_eq!(parse_from("", "@param"), "");
    }

    #[test]
    fn parse_from_tag_without_text() {
        assert_eq!(parse_from(" * @return", "@return"), "");
    }

    #[test]
    fn parse_from_is_idempotent_on_output() {
        let first = parse_from(" * @param count number of items", "@param");
        assert_eq!(parse_from(&first, "@param"), "");
    }

    #[test]
    fn parse_from_leaves_input_untouched() {
        let line = String::from(" * @param a b");
        let _ = parse_from(&line, "@param");
        assert_eq!(line, " * @param a b");
    }

    #[test]
    fn class_name() {
        assert_eq!(parse_name("public class Foo {", "{"), "Foo");
        assert_eq!(parse_name("public class Foo{", "{"), "Foo");
    }

    #[test]
    fn method_name_glued_paren() {
        assert_eq!(parse_name("int bar(int x) {", "("), "bar");
        assert_eq!(
            parse_name("    public static void main(String[] args) {", "("),
            "main"
        );
    }

    #[test]
    fn method_name_spaced_paren() {
        assert_eq!(parse_name("public double area ( ) {", "("), "area");
    }

    #[test]
    fn last_candidate_wins() {
        // "static" is not protected, "total" overwrites it
        assert_eq!(parse_name("public static int total(int[] xs)", "("), "total");
    }

    #[test]
    fn missing_terminator_is_not_fatal() {
        let scan = scan_name("private int count;", "(");
        assert_eq!(
            scan,
            NameScan {
                name: "count;".to_string(),
                terminated: false
            }
        );
    }

    #[test]
    fn only_protected_tokens_gives_empty_name() {
        assert_eq!(parse_name("public void", "("), "");
        assert_eq!(parse_name("", "("), "");
    }

    #[test]
    fn never_returns_protected_keyword() {
        let lines = [
            "private public class void double int String (",
            "String String(",
            "int (int",
            "public class {",
        ];
        for line in lines {
            for term in ["(", "{"] {
                let name = parse_name(line, term);
                assert!(
                    !PROTECTED_KEYWORDS.contains(&name.as_str()),
                    "{line:?} / {term:?} gave {name:?}"
                );
            }
        }
    }
}
