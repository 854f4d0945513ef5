use alloc::{string::String, vec::Vec};

use log::trace;

use super::{Section, SectionId, tokenize};

/// Memoized tokens for one section, keyed on `(identity, text)`.
///
/// Playback re-reads the active section on every tick; the token list is
/// rebuilt only when the section changes identity or its text is edited.
#[derive(Debug, Default, Clone)]
pub struct TokenCache {
    key: Option<(SectionId, String)>,
    tokens: Vec<String>,
}

impl TokenCache {
    pub const fn new() -> Self {
        Self {
            key: None,
            tokens: Vec::new(),
        }
    }

    pub fn tokens_for(&mut self, section: &Section) -> &[String] {
        let fresh = self
            .key
            .as_ref()
            .is_some_and(|(id, text)| *id == section.id && *text == section.text);

        if fresh {
            trace!("token cache hit: section={}", section.id.raw());
        } else {
            self.tokens = tokenize(&section.text);
            self.key = Some((section.id, section.text.clone()));
            trace!(
                "token cache miss: section={} tokens={}",
                section.id.raw(),
                self.tokens.len()
            );
        }

        &self.tokens
    }

    pub fn invalidate(&mut self) {
        self.key = None;
        self.tokens.clear();
    }
}
