//! Shared text shaping and truncation policies for compact UI surfaces.

use core::fmt::Write;

use heapless::String as HeaplessString;

pub const COMPACT_MAX_WORDS: usize = 7;
pub const COMPACT_MAX_CHARS: usize = 34;
pub const PREVIEW_BYTES: usize = 48;

pub type PreviewLabel = HeaplessString<PREVIEW_BYTES>;
pub type PercentLabel = HeaplessString<8>;

pub fn preview_compact(source: &str) -> PreviewLabel {
    preview_limited(source, COMPACT_MAX_WORDS, COMPACT_MAX_CHARS)
}

/// First words of `source` on one line, with `...` when anything was cut.
pub fn preview_limited<const N: usize>(
    source: &str,
    max_words: usize,
    max_chars: usize,
) -> HeaplessString<N> {
    let mut out = HeaplessString::<N>::new();
    let mut char_count = 0usize;
    let mut truncated = false;

    'words: for (word_count, word) in source.split_whitespace().enumerate() {
        if word_count >= max_words {
            truncated = true;
            break;
        }

        if word_count > 0 {
            if char_count >= max_chars || out.push(' ').is_err() {
                truncated = true;
                break;
            }
            char_count += 1;
        }

        for ch in word.chars() {
            if char_count >= max_chars || out.push(ch).is_err() {
                truncated = true;
                break 'words;
            }
            char_count += 1;
        }
    }

    if truncated {
        while out.len() + 3 > N {
            if out.pop().is_none() {
                break;
            }
        }
        let _ = out.push_str("...");
    }

    out
}

/// `progress` rounded to a whole percent, e.g. `"50%"`.
pub fn percent_label(progress: f32) -> PercentLabel {
    let clamped = if progress.is_finite() {
        progress.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let rounded = (clamped + 0.5) as u8;

    let mut out = PercentLabel::new();
    let _ = write!(out, "{rounded}%");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_kept_whole() {
        assert_eq!(preview_compact("hello   world").as_str(), "hello world");
        assert_eq!(preview_compact("").as_str(), "");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let preview = preview_compact("one two three four five six seven eight nine");
        assert_eq!(preview.as_str(), "one two three four five six seven...");
    }

    #[test]
    fn char_limit_applies_mid_word() {
        let preview: HeaplessString<16> = preview_limited("abcdefghij", 5, 4);
        assert_eq!(preview.as_str(), "abcd...");
    }

    #[test]
    fn tiny_buffers_make_room_for_the_ellipsis() {
        let preview: HeaplessString<5> = preview_limited("abcdefghij", 5, 40);
        assert_eq!(preview.as_str(), "ab...");
    }

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(percent_label(0.0).as_str(), "0%");
        assert_eq!(percent_label(49.6).as_str(), "50%");
        assert_eq!(percent_label(33.3).as_str(), "33%");
        assert_eq!(percent_label(100.0).as_str(), "100%");
        assert_eq!(percent_label(250.0).as_str(), "100%");
        assert_eq!(percent_label(f32::NAN).as_str(), "0%");
    }
}
