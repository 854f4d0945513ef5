impl<IN> ReaderApp<IN, NoPointer>
where
    IN: InputProvider,
{
    pub fn new(input: IN, config: ReaderConfig, app_title: &'static str) -> Self {
        Self::with_sections::<&str>(input, config, app_title, &[])
    }

    /// App seeded with initial section texts.
    pub fn with_sections<S: AsRef<str>>(
        input: IN,
        mut config: ReaderConfig,
        app_title: &'static str,
        texts: &[S],
    ) -> Self {
        if let Err(err) = validate_wpm(config.wpm) {
            debug!("configured wpm {} rejected ({}); using {}", config.wpm, err, DEFAULT_WPM);
            config.wpm = DEFAULT_WPM;
        }
        if validate_wpm(config.wpm_step).is_err() {
            config.wpm_step = DEFAULT_WPM_STEP;
        }

        Self {
            input,
            offset_mapper: NoPointer,
            config,
            app_title,
            store: SectionStore::from_texts(texts),
            tokens: TokenCache::new(),
            state: PlaybackState::new(config.wpm),
            completed: BTreeSet::new(),
            current_word: String::from(INITIAL_WORD),
            timer: TickTimer::new(),
            events: Vec::new(),
            pending_redraw: true,
            editor_epoch: 0,
            status: None,
            words_since_drain: 0,
        }
    }
}

impl<IN, OM> ReaderApp<IN, OM>
where
    IN: InputProvider,
    OM: OffsetMapper,
{
    /// Swaps in the surface-specific pointer-to-offset mapping.
    pub fn with_offset_mapper<M: OffsetMapper>(self, offset_mapper: M) -> ReaderApp<IN, M> {
        ReaderApp {
            input: self.input,
            offset_mapper,
            config: self.config,
            app_title: self.app_title,
            store: self.store,
            tokens: self.tokens,
            state: self.state,
            completed: self.completed,
            current_word: self.current_word,
            timer: self.timer,
            events: self.events,
            pending_redraw: self.pending_redraw,
            editor_epoch: self.editor_epoch,
            status: self.status,
            words_since_drain: self.words_since_drain,
        }
    }

    pub fn with_screen<F>(&self, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let is_completed = |index: usize| self.completed.contains(&index);
        let len = self.store.len();

        let sections: Vec<SectionView<'_>> = self
            .store
            .sections()
            .iter()
            .enumerate()
            .map(|(index, section)| SectionView {
                index,
                text: section.text.as_str(),
                preview: preview_compact(&section.text),
                completed: is_completed(index),
                active: index == self.state.current_section,
                mergeable: check_merge(index, len, is_completed).is_ok(),
                is_buffer: self.store.is_buffer(index),
            })
            .collect();

        let all_complete = self.all_complete();
        let primary = if all_complete {
            PrimaryAction::Reset
        } else if self.state.playing {
            PrimaryAction::Pause
        } else {
            PrimaryAction::Play
        };

        f(Screen {
            title: self.app_title,
            wpm: self.state.wpm,
            word: self.current_word.as_str(),
            progress: self.state.progress,
            progress_label: percent_label(self.state.progress),
            playing: self.state.playing,
            all_complete,
            primary,
            active_section: self.state.current_section,
            sections: &sections,
            content_revision: self.store.revision(),
            editor_epoch: self.editor_epoch,
            status: self.status,
        });
    }

    pub fn playback(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> PlaybackPhase {
        if self.state.playing {
            PlaybackPhase::Running
        } else {
            PlaybackPhase::Idle
        }
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn wpm(&self) -> f64 {
        self.state.wpm
    }

    pub fn wait_ms(&self) -> u64 {
        wait_ms_for(self.state.wpm)
    }

    pub fn store(&self) -> &SectionStore {
        &self.store
    }

    /// Ordered section texts for the editor surface.
    pub fn section_texts(&self) -> Vec<&str> {
        self.store.texts().collect()
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    /// Every non-buffer section has been read through. An empty session is
    /// never complete.
    pub fn all_complete(&self) -> bool {
        let total = self.store.content_len();
        total > 0 && self.completed.len() == total
    }

    pub fn editor_epoch(&self) -> u32 {
        self.editor_epoch
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.timer.deadline_ms()
    }

    pub fn input_mut(&mut self) -> &mut IN {
        &mut self.input
    }

    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        core::mem::take(&mut self.events)
    }

    /// Words emitted since the previous call.
    pub fn drain_word_updates(&mut self) -> u32 {
        let words = self.words_since_drain;
        self.words_since_drain = 0;
        words
    }
}
