impl<IN, OM> ReaderApp<IN, OM>
where
    IN: InputProvider,
    OM: OffsetMapper,
{
    /// Applies the full new text of a section. Embedded newlines split it.
    pub fn edit_section(&mut self, index: usize, text: &str) -> Result<(), EditError> {
        self.ensure_editable(index)?;
        self.apply_outcome(index, partition_lines(text))
    }

    /// Inserts a clipboard payload at char offset `at`, then applies the same
    /// newline rules as a typed edit.
    pub fn paste(&mut self, index: usize, at: usize, payload: &str) -> Result<(), EditError> {
        self.ensure_editable(index)?;
        let current = self.store.get(index).map_or("", |section| section.text.as_str());
        let combined = insert_at(current, at, payload);
        self.apply_outcome(index, partition_lines(&combined))
    }

    /// Splits at the word boundary at or after char offset `offset`.
    pub fn split_at(&mut self, index: usize, offset: usize) -> Result<(), EditError> {
        self.ensure_editable(index)?;
        let text = self.store.get(index).map_or("", |section| section.text.as_str());
        let plan = plan_split(text, offset)?;
        debug!("split section {} at char {}", index, plan.boundary);
        self.mutate_sections(index, |store| store.split(index, plan.into_parts()))
    }

    /// Boundary a click at `offset` would split at, or `None` when the split
    /// affordance should stay hidden.
    pub fn split_preview(&self, index: usize, offset: usize) -> Option<usize> {
        if self.ensure_editable(index).is_err() {
            return None;
        }
        let section = self.store.get(index)?;
        plan_split(&section.text, offset)
            .ok()
            .map(|plan| plan.boundary)
    }

    /// Folds the section into its predecessor.
    pub fn merge_up(&mut self, index: usize) -> Result<(), EditError> {
        check_merge(index, self.store.len(), |i| self.completed.contains(&i))?;
        self.mutate_sections(index - 1, |store| store.merge_up(index))
    }

    fn ensure_editable(&self, index: usize) -> Result<(), EditError> {
        if index >= self.store.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.store.len(),
            });
        }
        if self.completed.contains(&index) {
            return Err(EditError::SectionCompleted(index));
        }
        Ok(())
    }

    fn apply_outcome(&mut self, index: usize, outcome: EditOutcome) -> Result<(), EditError> {
        match outcome {
            EditOutcome::Replace(text) => {
                self.mutate_sections(index, |store| store.update_text(index, text))
            }
            EditOutcome::Split(parts) => {
                debug!("section {} split into {} lines", index, parts.len());
                self.mutate_sections(index, |store| store.split(index, parts))
            }
        }
    }

    /// Runs a store mutation and re-points completion and the active section
    /// at the same sections by identity. When the active section itself was
    /// replaced or emptied into the buffer, playback stops and restarts from
    /// word 0.
    fn mutate_sections<F>(&mut self, fallback: usize, mutate: F) -> Result<(), EditError>
    where
        F: FnOnce(&mut SectionStore) -> Result<(), EditError>,
    {
        let completed_ids: Vec<SectionId> = self
            .completed
            .iter()
            .filter_map(|&index| self.store.get(index).map(|section| section.id))
            .collect();
        let active_id = self
            .store
            .get(self.state.current_section)
            .map(|section| section.id);

        mutate(&mut self.store)?;

        let buffer = self.store.buffer_index();
        self.completed = completed_ids
            .into_iter()
            .filter_map(|id| self.position_of(id))
            .filter(|&index| index != buffer)
            .collect();

        match active_id.and_then(|id| self.position_of(id)) {
            Some(index) if index != buffer => self.state.current_section = index,
            // Active section emptied into the buffer slot; the buffer is never played.
            Some(index) => {
                self.state.current_section = index;
                self.rewind_active();
            }
            None => {
                self.state.current_section = fallback.min(buffer);
                self.rewind_active();
            }
        }

        self.pending_redraw = true;
        Ok(())
    }

    fn position_of(&self, id: SectionId) -> Option<usize> {
        self.store
            .sections()
            .iter()
            .position(|section| section.id == id)
    }

    fn rewind_active(&mut self) {
        if self.state.playing {
            info!(
                "active section {} replaced; playback stopped",
                self.state.current_section
            );
        }
        self.timer.cancel();
        self.state.playing = false;
        self.state.current_word_index = 0;
        self.state.progress = 0.0;
        self.current_word.clear();
    }
}
