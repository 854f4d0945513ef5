impl<IN, OM> ReaderApp<IN, OM>
where
    IN: InputProvider,
    OM: OffsetMapper,
{
    /// Drains pending input, then fires the word timer if it is due.
    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);

        if self.timer.fire_if_due(now_ms) {
            self.tick_reading(now_ms);
        }

        if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn play(&mut self, now_ms: u64) {
        if self.state.playing {
            return;
        }
        if self.all_complete() {
            debug!("play ignored: all sections complete");
            return;
        }

        let index = self.state.current_section;
        if self.store.is_buffer(index) {
            debug!("play ignored: section {} is the input buffer", index);
            return;
        }
        if self.completed.contains(&index) {
            debug!("play ignored: section {} already complete", index);
            return;
        }

        let Some(section) = self.store.get(index) else {
            return;
        };
        if self.tokens.tokens_for(section).is_empty() {
            info!("section {} has no words; marking complete", index);
            self.complete_current_section();
            return;
        }

        self.state.playing = true;
        self.timer.arm(now_ms, self.wait_ms());
        self.pending_redraw = true;
        info!(
            "play: section={} word={} wpm={}",
            index, self.state.current_word_index, self.state.wpm
        );
    }

    /// Cancels the pending tick; section and word position are kept so the
    /// next play resumes on the same word.
    pub fn pause(&mut self) {
        if !self.state.playing {
            return;
        }
        self.timer.cancel();
        self.state.playing = false;
        self.pending_redraw = true;
        info!(
            "pause: section={} word={}",
            self.state.current_section, self.state.current_word_index
        );
    }

    /// Clears progress and completion; sections stay as they are.
    pub fn reset(&mut self) {
        self.timer.cancel();
        self.completed.clear();
        self.state.current_section = 0;
        self.state.current_word_index = 0;
        self.state.progress = 0.0;
        self.state.playing = false;
        self.current_word.clear();
        self.pending_redraw = true;
        info!("reset");
    }

    /// Reset plus a single empty section; the editor surface is told to drop
    /// whatever it buffered.
    pub fn clear(&mut self) {
        self.reset();
        self.store.initialize::<&str>(&[]);
        self.tokens.invalidate();
        self.editor_epoch = self.editor_epoch.wrapping_add(1);
        info!("clear: editor epoch {}", self.editor_epoch);
    }

    fn tick_reading(&mut self, now_ms: u64) {
        if !self.state.playing {
            return;
        }

        let index = self.state.current_section;
        let Some(section) = self.store.get(index) else {
            self.pause();
            return;
        };
        let tokens = self.tokens.tokens_for(section);
        let count = tokens.len();
        if count == 0 {
            self.complete_current_section();
            return;
        }

        let word_index = self.state.current_word_index.min(count - 1);
        let word = tokens[word_index].clone();
        let progress = if count > 1 {
            word_index as f32 / (count - 1) as f32 * 100.0
        } else {
            0.0
        };

        self.current_word.clone_from(&word);
        self.state.progress = progress;
        self.words_since_drain = self.words_since_drain.saturating_add(1);
        self.pending_redraw = true;
        self.events.push(PlaybackEvent::Word {
            section: index,
            word_index,
            word,
            progress,
        });

        if word_index < count - 1 {
            self.state.current_word_index = word_index + 1;
            self.timer.arm(now_ms, self.wait_ms());
        } else {
            self.complete_current_section();
        }
    }

    fn complete_current_section(&mut self) {
        let index = self.state.current_section;
        let newly_completed = !self.store.is_buffer(index) && self.completed.insert(index);

        self.timer.cancel();
        self.state.playing = false;
        self.state.current_word_index = 0;
        self.state.progress = 0.0;
        self.current_word.clear();
        self.state.current_section = (index + 1).min(self.store.buffer_index());
        self.pending_redraw = true;

        if !newly_completed {
            return;
        }
        self.events.push(PlaybackEvent::SectionComplete { section: index });
        info!("section {} complete", index);

        if self.all_complete() {
            self.events.push(PlaybackEvent::AllComplete);
            info!("all {} sections complete", self.completed.len());
        }
    }
}
