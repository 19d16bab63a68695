/// Split recognized text into trimmed, non-empty lines, keeping their order.
///
/// Order matters downstream: the first line matching a field wins.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let text = "  Artist: Ivan \n\n   \n\tSize: small\t\n";
        assert_eq!(normalize_lines(text), vec!["Artist: Ivan", "Size: small"]);
    }

    #[test]
    fn handles_crlf() {
        assert_eq!(normalize_lines("a\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn empty_text_yields_no_lines() {
        assert!(normalize_lines("").is_empty());
        assert!(normalize_lines(" \n \n").is_empty());
    }

    #[test]
    fn preserves_order() {
        assert_eq!(normalize_lines("3\n1\n2"), vec!["3", "1", "2"]);
    }
}
