impl<IN, OM> ReaderApp<IN, OM>
where
    IN: InputProvider,
    OM: OffsetMapper,
{
    fn process_inputs(&mut self, now_ms: u64) {
        loop {
            match self.input.poll_event() {
                Ok(Some(event)) => {
                    self.status = None;
                    self.apply_input_event(event, now_ms);
                }
                Ok(None) => break,
                Err(_) => {
                    self.set_status("INPUT ERROR");
                    break;
                }
            }
        }
    }

    fn apply_input_event(&mut self, event: InputEvent, now_ms: u64) {
        match event {
            InputEvent::TogglePlay => self.toggle_play(now_ms),
            InputEvent::SetWpm(raw) => match parse_wpm(&raw) {
                Ok(wpm) => self.apply_wpm(wpm),
                Err(err) => debug!("wpm input {:?} rejected: {}", raw, err),
            },
            InputEvent::WpmUp => self.step_wpm(true),
            InputEvent::WpmDown => self.step_wpm(false),
            InputEvent::Reset => self.reset(),
            InputEvent::Clear => self.clear(),
            InputEvent::Edit { section, text } => {
                log_rejected("edit", self.edit_section(section, &text));
            }
            InputEvent::Paste {
                section,
                at,
                payload,
            } => {
                log_rejected("paste", self.paste(section, at, &payload));
            }
            InputEvent::SplitAt { section, offset } => {
                log_rejected("split", self.split_at(section, offset));
            }
            InputEvent::PointerSplit { section, x, y } => {
                match self.offset_mapper.offset_at(section, x, y) {
                    Some(offset) => log_rejected("split", self.split_at(section, offset)),
                    None => debug!("split suppressed: no offset at ({}, {})", x, y),
                }
            }
            InputEvent::MergeUp { section } => {
                log_rejected("merge", self.merge_up(section));
            }
        }
        self.pending_redraw = true;
    }

    /// Play when idle, pause when running.
    pub fn toggle_play(&mut self, now_ms: u64) {
        if self.state.playing {
            self.pause();
        } else {
            self.play(now_ms);
        }
    }

    /// Accepts a positive finite WPM; anything else keeps the previous rate.
    /// A pending tick keeps its deadline; the new rate applies to the next arm.
    pub fn set_wpm(&mut self, wpm: f64) -> Result<(), WpmError> {
        let wpm = validate_wpm(wpm)?;
        self.apply_wpm(wpm);
        Ok(())
    }

    fn apply_wpm(&mut self, wpm: f64) {
        if wpm != self.state.wpm {
            debug!("wpm {} -> {}", self.state.wpm, wpm);
            self.state.wpm = wpm;
            self.pending_redraw = true;
        }
    }

    fn step_wpm(&mut self, increase: bool) {
        let next = if increase {
            self.state.wpm + self.config.wpm_step
        } else {
            self.state.wpm - self.config.wpm_step
        };
        if let Err(err) = self.set_wpm(next) {
            debug!("wpm step to {} rejected: {}", next, err);
        }
    }

    fn set_status(&mut self, line: &'static str) {
        self.status = Some(line);
        self.pending_redraw = true;
    }
}

fn log_rejected(action: &str, result: Result<(), EditError>) {
    if let Err(err) = result {
        debug!("{} ignored: {}", action, err);
    }
}
