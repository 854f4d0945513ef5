use alloc::{string::String, vec::Vec};

use super::{EditError, Section, SectionId};

/// Ordered, exclusively-owned list of sections.
///
/// After every mutation the store holds at least one section and ends with
/// exactly one empty buffer section, which is where new input lands.
#[derive(Debug, Clone)]
pub struct SectionStore {
    sections: Vec<Section>,
    next_id: u64,
    revision: u32,
}

impl Default for SectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStore {
    /// Store holding only the empty buffer section.
    pub fn new() -> Self {
        let mut store = Self {
            sections: Vec::new(),
            next_id: 0,
            revision: 0,
        };
        store.initialize::<&str>(&[]);
        store
    }

    /// Store seeded from `texts`, normalized.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Self {
        let mut store = Self::new();
        store.initialize(texts);
        store
    }

    /// Replaces all sections with fresh ones built from `texts`. An empty
    /// list seeds a single empty section.
    pub fn initialize<S: AsRef<str>>(&mut self, texts: &[S]) {
        self.sections.clear();
        if texts.is_empty() {
            let section = self.make_section(String::new());
            self.sections.push(section);
        } else {
            for text in texts {
                let section = self.make_section(String::from(text.as_ref()));
                self.sections.push(section);
            }
        }
        self.normalize();
    }

    /// Replaces the text at `index`. Typing into the buffer section promotes
    /// it to a real section and a new buffer is appended behind it.
    pub fn update_text(&mut self, index: usize, text: String) -> Result<(), EditError> {
        self.check_index(index)?;

        let was_last = index == self.sections.len() - 1;
        let non_empty = !text.is_empty();
        self.sections[index].text = text;
        if was_last && non_empty {
            let buffer = self.make_section(String::new());
            self.sections.push(buffer);
        }
        self.normalize();
        Ok(())
    }

    /// Replaces the section at `index` with one fresh section per part.
    pub fn split(&mut self, index: usize, parts: Vec<String>) -> Result<(), EditError> {
        self.check_index(index)?;
        if parts.len() < 2 {
            return Err(EditError::TooFewParts(parts.len()));
        }

        let fresh: Vec<Section> = parts
            .into_iter()
            .map(|text| self.make_section(text))
            .collect();
        self.sections.splice(index..=index, fresh);
        self.normalize();
        Ok(())
    }

    /// Joins the section at `index` onto its predecessor with a single space.
    /// Index `0` has no predecessor and is left alone.
    pub fn merge_up(&mut self, index: usize) -> Result<(), EditError> {
        self.check_index(index)?;
        if index == 0 {
            return Ok(());
        }

        let removed = self.sections.remove(index);
        let target = &mut self.sections[index - 1];
        let mut joined = String::with_capacity(target.text.len() + removed.text.len() + 1);
        joined.push_str(&target.text);
        joined.push(' ');
        joined.push_str(&removed.text);
        target.text = String::from(joined.trim());
        self.normalize();
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Ordered section texts, as handed to the editor surface.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.sections.iter().map(|section| section.text.as_str())
    }

    /// Index of the trailing buffer section.
    pub fn buffer_index(&self) -> usize {
        self.sections.len() - 1
    }

    pub fn is_buffer(&self, index: usize) -> bool {
        index == self.buffer_index()
    }

    /// Number of sections excluding the trailing buffer.
    pub fn content_len(&self) -> usize {
        self.sections.len() - 1
    }

    /// Bumped on every mutation, so observers can tell when to resync.
    pub fn revision(&self) -> u32 {
        self.revision
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.sections.len() {
            Ok(())
        } else {
            Err(EditError::IndexOutOfRange {
                index,
                len: self.sections.len(),
            })
        }
    }

    fn make_section(&mut self, text: String) -> Section {
        let id = SectionId::new(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        Section { id, text }
    }

    fn normalize(&mut self) {
        // Runs of empty sections collapse to their first member, which also
        // leaves at most one empty section at the tail.
        self.sections
            .dedup_by(|next, kept| next.is_empty() && kept.is_empty());

        if self.sections.last().is_none_or(|last| !last.is_empty()) {
            let buffer = self.make_section(String::new());
            self.sections.push(buffer);
        }

        self.revision = self.revision.wrapping_add(1);
    }
}
