use alloc::{string::String, vec::Vec};

/// Splits section text into pacing tokens.
///
/// Runs of CR/LF/TAB collapse to a single space, the text is split on single
/// spaces and empty fragments are dropped. Hyphenated fragments expand into
/// one token per part: `"well-known-fact"` becomes `["well-", "-known-", "-fact"]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let collapsed = collapse_control_runs(text);
    let mut tokens = Vec::new();

    for fragment in collapsed.split(' ').filter(|fragment| !fragment.is_empty()) {
        push_fragment(fragment, &mut tokens);
    }

    tokens
}

fn collapse_control_runs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for ch in text.chars() {
        if matches!(ch, '\r' | '\n' | '\t') {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
            continue;
        }
        in_run = false;
        out.push(ch);
    }

    out
}

fn push_fragment(fragment: &str, tokens: &mut Vec<String>) {
    let parts: Vec<&str> = fragment.split('-').filter(|part| !part.is_empty()).collect();
    if parts.len() < 2 {
        tokens.push(String::from(fragment));
        return;
    }

    let last = parts.len() - 1;
    for (idx, part) in parts.iter().enumerate() {
        let mut token = String::with_capacity(part.len() + 2);
        if idx > 0 {
            token.push('-');
        }
        token.push_str(part);
        if idx < last {
            token.push('-');
        }
        tokens.push(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_spaces_and_drops_empties() {
        assert_eq!(tokenize("a b  c"), ["a", "b", "c"]);
        assert_eq!(tokenize("  leading and trailing  "), ["leading", "and", "trailing"]);
    }

    #[test]
    fn empty_and_blank_text_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("\r\n\t").is_empty());
    }

    #[test]
    fn control_runs_collapse_to_one_separator() {
        assert_eq!(tokenize("one\r\n\r\ntwo\tthree"), ["one", "two", "three"]);
        assert_eq!(tokenize("end\n"), ["end"]);
    }

    #[test]
    fn hyphenated_fragments_expand() {
        assert_eq!(tokenize("well-known-fact"), ["well-", "-known-", "-fact"]);
        assert_eq!(tokenize("a well-known fact"), ["a", "well-", "-known", "fact"]);
    }

    #[test]
    fn edge_hyphens_pass_through() {
        assert_eq!(tokenize("-a"), ["-a"]);
        assert_eq!(tokenize("a-"), ["a-"]);
        assert_eq!(tokenize("-"), ["-"]);
    }

    #[test]
    fn non_ascii_whitespace_is_not_a_separator() {
        assert_eq!(tokenize("a\u{a0}b c"), ["a\u{a0}b", "c"]);
    }

    #[test]
    fn restartable() {
        let text = "same text twice";
        assert_eq!(tokenize(text), tokenize(text));
        assert_eq!(tokenize(text).len(), 3);
    }
}
