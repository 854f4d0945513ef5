//! Line-oriented terminal surface: a section listing redrawn when the content
//! changes, and one status line per frame.

use std::{cell::RefCell, fmt::Write as _, io, rc::Rc};

use pacer_core::{
    input::OffsetMapper,
    render::{PrimaryAction, Screen, SectionView},
};

const PROGRESS_BAR_CELLS: usize = 20;
const MIN_TEXT_COLUMNS: usize = 8;

/// One wrapped row of a section in the listing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowSpan {
    /// Column where the section text starts.
    pub indent: usize,
    /// Char offset of the row's first char within the section.
    pub start: usize,
    pub len: usize,
}

/// Row spans of the last listing, per section.
#[derive(Clone, Debug, Default)]
pub struct ListingLayout {
    sections: Vec<Vec<RowSpan>>,
}

impl ListingLayout {
    pub fn rows(&self, section: usize) -> Option<&[RowSpan]> {
        self.sections.get(section).map(Vec::as_slice)
    }
}

pub type SharedLayout = Rc<RefCell<ListingLayout>>;

/// Monospace column/row to char offset over the last printed listing.
#[derive(Clone, Debug)]
pub struct ColumnOffsetMapper {
    layout: SharedLayout,
}

impl ColumnOffsetMapper {
    pub fn new(layout: SharedLayout) -> Self {
        Self { layout }
    }
}

impl OffsetMapper for ColumnOffsetMapper {
    fn offset_at(&self, section: usize, x: u16, y: u16) -> Option<usize> {
        let layout = self.layout.borrow();
        let row = layout.rows(section)?.get(usize::from(y))?;
        let column = usize::from(x).checked_sub(row.indent)?;
        Some(row.start + column.min(row.len))
    }
}

pub struct TerminalRenderer<W: io::Write> {
    out: W,
    width: usize,
    layout: SharedLayout,
    shown: Option<ListingKey>,
}

/// What the printed listing depends on: content, editor resets, and the
/// completed/active markers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct ListingKey {
    revision: u32,
    epoch: u32,
    completed: usize,
    active: usize,
}

impl ListingKey {
    fn of(screen: &Screen<'_>) -> Self {
        Self {
            revision: screen.content_revision,
            epoch: screen.editor_epoch,
            completed: screen.sections.iter().filter(|view| view.completed).count(),
            active: screen.active_section,
        }
    }
}

impl<W: io::Write> TerminalRenderer<W> {
    pub fn new(out: W, width: usize, layout: SharedLayout) -> Self {
        Self {
            out,
            width,
            layout,
            shown: None,
        }
    }

    pub fn render(&mut self, screen: Screen<'_>) -> io::Result<()> {
        let key = ListingKey::of(&screen);
        if self.shown != Some(key) {
            let (lines, layout) = listing(screen.sections, self.width);
            writeln!(self.out, "--- {} ---", screen.title)?;
            for line in &lines {
                writeln!(self.out, "{line}")?;
            }
            *self.layout.borrow_mut() = layout;
            self.shown = Some(key);
        }

        writeln!(self.out, "{}", status_line(&screen))?;
        self.out.flush()
    }

    /// Free-form line between frames, e.g. completion notices.
    pub fn notice(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "** {line}")?;
        self.out.flush()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

fn marker(view: &SectionView<'_>) -> char {
    if view.is_buffer {
        '+'
    } else if view.active {
        '>'
    } else if view.completed {
        '*'
    } else {
        ' '
    }
}

/// Wraps every section under a `"{marker}[{index}] "` prefix; continuation
/// rows are indented to the same column. Completed sections collapse to their
/// one-line preview and map no rows, since they can no longer be split.
pub fn listing(sections: &[SectionView<'_>], width: usize) -> (Vec<String>, ListingLayout) {
    let mut lines = Vec::new();
    let mut layout = ListingLayout::default();

    for view in sections {
        let mut prefix = String::new();
        let _ = write!(prefix, "{}[{}] ", marker(view), view.index);
        if view.mergeable {
            prefix.insert(0, '^');
        } else {
            prefix.insert(0, ' ');
        }
        if view.completed {
            lines.push(format!("{prefix}{}", view.preview.as_str()));
            layout.sections.push(Vec::new());
            continue;
        }
        let indent = prefix.chars().count();
        let columns = width.saturating_sub(indent).max(MIN_TEXT_COLUMNS);

        let chars: Vec<char> = view.text.chars().collect();
        let mut rows = Vec::new();
        let mut start = 0usize;
        loop {
            let len = columns.min(chars.len() - start);
            let text: String = chars[start..start + len].iter().collect();
            if rows.is_empty() {
                lines.push(format!("{prefix}{text}"));
            } else {
                lines.push(format!("{:indent$}{text}", ""));
            }
            rows.push(RowSpan { indent, start, len });
            start += len;
            if start >= chars.len() {
                break;
            }
        }
        layout.sections.push(rows);
    }

    (lines, layout)
}

pub fn status_line(screen: &Screen<'_>) -> String {
    let state = match screen.primary {
        PrimaryAction::Pause => "playing",
        PrimaryAction::Play => "paused",
        PrimaryAction::Reset => "done",
    };
    let filled = ((screen.progress / 100.0) * PROGRESS_BAR_CELLS as f32).round() as usize;
    let filled = filled.min(PROGRESS_BAR_CELLS);

    let mut line = format!(
        "[{:<7}] {:>4.0} wpm  s{}  [{}{}] {:>4}  {}",
        state,
        screen.wpm,
        screen.active_section,
        "#".repeat(filled),
        ".".repeat(PROGRESS_BAR_CELLS - filled),
        screen.progress_label.as_str(),
        screen.word,
    );
    if let Some(status) = screen.status {
        let _ = write!(line, "  ({status})");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pacer_core::text_policy::{percent_label, preview_compact};

    fn view(index: usize, text: &str) -> SectionView<'_> {
        SectionView {
            index,
            text,
            preview: preview_compact(text),
            completed: false,
            active: false,
            mergeable: false,
            is_buffer: false,
        }
    }

    fn screen<'a>(sections: &'a [SectionView<'a>], revision: u32) -> Screen<'a> {
        Screen {
            title: "Test",
            wpm: 250.0,
            word: "hello",
            progress: 50.0,
            progress_label: percent_label(50.0),
            playing: true,
            all_complete: false,
            primary: PrimaryAction::Pause,
            active_section: 0,
            sections,
            content_revision: revision,
            editor_epoch: 0,
            status: None,
        }
    }

    #[test]
    fn listing_wraps_under_the_prefix() {
        let sections = [view(0, "abcdefghijklmnop"), view(1, "")];
        let (lines, layout) = listing(&sections, 14);
        // prefix "  [0] " is 6 columns, leaving 8 for text.
        assert_eq!(lines, ["  [0] abcdefgh", "      ijklmnop", "  [1] "]);
        assert_eq!(
            layout.rows(0),
            Some(
                &[
                    RowSpan {
                        indent: 6,
                        start: 0,
                        len: 8
                    },
                    RowSpan {
                        indent: 6,
                        start: 8,
                        len: 8
                    },
                ][..]
            )
        );
        assert_eq!(layout.rows(1).map(<[RowSpan]>::len), Some(1));
    }

    #[test]
    fn mapper_resolves_columns_against_the_last_listing() {
        let sections = [view(0, "hello world again")];
        let (_, layout) = listing(&sections, 14);
        let mapper = ColumnOffsetMapper::new(Rc::new(RefCell::new(layout)));

        assert_eq!(mapper.offset_at(0, 6, 0), Some(0));
        assert_eq!(mapper.offset_at(0, 9, 0), Some(3));
        assert_eq!(mapper.offset_at(0, 7, 1), Some(9));
        // Past the end of a row clamps to its last char boundary.
        assert_eq!(mapper.offset_at(0, 40, 2), Some(17));
        // Prefix area, missing rows and missing sections resolve to nothing.
        assert_eq!(mapper.offset_at(0, 2, 0), None);
        assert_eq!(mapper.offset_at(0, 6, 5), None);
        assert_eq!(mapper.offset_at(3, 6, 0), None);
    }

    #[test]
    fn markers_reflect_section_state() {
        let mut active = view(0, "a");
        active.active = true;
        let mut done = view(1, "b");
        done.completed = true;
        let mut mergeable = view(2, "c");
        mergeable.mergeable = true;
        let mut buffer = view(3, "");
        buffer.is_buffer = true;

        let (lines, _) = listing(&[active, done, mergeable, buffer], 40);
        assert_eq!(lines, [" >[0] a", " *[1] b", "^ [2] c", " +[3] "]);
    }

    #[test]
    fn completed_sections_collapse_to_their_preview() {
        let text = "one two three four five six seven eight nine ten";
        let mut done = view(0, text);
        done.completed = true;
        let sections = [done, view(1, "next")];

        let (lines, layout) = listing(&sections, 14);
        assert_eq!(lines[0], " *[0] one two three four five six seven...");
        assert_eq!(lines[1], "  [1] next");
        let mapper = ColumnOffsetMapper::new(Rc::new(RefCell::new(layout)));
        assert_eq!(mapper.offset_at(0, 8, 0), None);
        assert_eq!(mapper.offset_at(1, 7, 0), Some(1));
    }

    #[test]
    fn listing_is_reprinted_when_markers_move() {
        let mut renderer = TerminalRenderer::new(Vec::new(), 40, SharedLayout::default());
        let mut first = view(0, "alpha");
        first.active = true;
        let pending = [first.clone(), view(1, "beta")];
        renderer.render(screen(&pending, 1)).unwrap();

        let mut done = first;
        done.active = false;
        done.completed = true;
        let mut second = view(1, "beta");
        second.active = true;
        let advanced = [done, second];
        let mut moved = screen(&advanced, 1);
        moved.active_section = 1;
        renderer.render(moved).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out.matches("--- Test ---").count(), 2);
        assert!(out.contains(" *[0] alpha"));
        assert!(out.contains(" >[1] beta"));
    }

    #[test]
    fn status_line_shows_progress_and_word() {
        let sections = [view(0, "hello there")];
        let line = status_line(&screen(&sections, 0));
        assert_eq!(
            line,
            "[playing]  250 wpm  s0  [##########..........]  50%  hello"
        );
    }

    #[test]
    fn listing_is_reprinted_only_when_content_changes() {
        let layout = SharedLayout::default();
        let mut renderer = TerminalRenderer::new(Vec::new(), 40, layout.clone());
        let sections = [view(0, "hello there")];

        renderer.render(screen(&sections, 1)).unwrap();
        renderer.render(screen(&sections, 1)).unwrap();
        renderer.render(screen(&sections, 2)).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out.matches("--- Test ---").count(), 2);
        assert_eq!(out.matches("hello there").count(), 2);
        assert_eq!(out.lines().filter(|l| l.starts_with("[playing]")).count(), 3);
        assert!(layout.borrow().rows(0).is_some());
    }
}
