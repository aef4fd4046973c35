//! Splitting an input line into tokens.

/// Characters that separate tokens on an input line.
///
/// The classic whitespace set plus the BEL control character, which some
/// terminals leave behind in pasted text.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Split a line into its non-empty tokens.
///
/// Runs of consecutive delimiters collapse, so a line made only of
/// delimiters yields an empty sequence. Tokens borrow from `line`; the end
/// of the returned vector is the "no more tokens" marker (`tokens.first()`
/// is `None` when no command was given).
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(DELIMITERS).filter(|t| !t.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_delimiter_only_line_has_no_tokens() {
        assert!(tokenize("  \t \r \x07 \n").is_empty());
    }

    #[test]
    fn test_splits_on_every_delimiter() {
        assert_eq!(tokenize("a b\tc\rd\x07e\nf"), vec!["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_consecutive_delimiters_collapse() {
        assert_eq!(tokenize("ls   -l \t\t /tmp"), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn test_leading_and_trailing_delimiters_ignored() {
        assert_eq!(tokenize("  cd /home \n"), vec!["cd", "/home"]);
    }

    #[test]
    fn test_tokens_borrow_from_line() {
        let line = String::from("echo hi");
        let tokens = tokenize(&line);
        assert_eq!(tokens[0].as_ptr(), line.as_ptr());
    }
}
