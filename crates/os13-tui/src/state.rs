//! What the surface shows, built up from engine outputs.

use os13_proto::{Output, StyleTag, StyledLine};

/// A run of text in one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: StyleTag,
}

impl Segment {
    fn new(text: impl Into<String>, style: StyleTag) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

type Row = Vec<Segment>;

/// Scrollback, prompt line and the flags the widgets read.
#[derive(Debug, Default)]
pub struct TuiState {
    /// Finished rows, oldest first.
    rows: Vec<Row>,
    /// Inline fragments waiting for the rest of their row.
    open: Row,
    /// `None` between a submission and the engine's next prompt.
    prompt: Option<String>,
    pub input: String,
    pub suggestions: Vec<String>,
    pub inverted: bool,
    pub indicator: bool,
    pub level: u8,
    /// Rows scrolled up from the bottom. 0 follows new output.
    pub scroll_back: usize,
    pub closed: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, output: Output) {
        match output {
            Output::Line(line) => {
                for text in line.rows() {
                    self.open.push(Segment::new(text, line.style));
                    self.commit_open();
                }
            }
            Output::Inline(line) => self.push_inline(&line),
            Output::Clear => {
                self.rows.clear();
                self.open.clear();
                self.scroll_back = 0;
            }
            Output::Prompt(prompt) => self.prompt = Some(prompt),
            Output::Invert(on) => self.inverted = on,
            Output::Indicator(on) => self.indicator = on,
            Output::Close => self.closed = true,
        }
    }

    pub fn apply_all(&mut self, outputs: impl IntoIterator<Item = Output>) {
        for output in outputs {
            self.apply(output);
        }
    }

    fn push_inline(&mut self, line: &StyledLine) {
        let mut rows = line.rows();
        if let Some(first) = rows.next() {
            self.open.push(Segment::new(first, line.style));
        }
        for text in rows {
            self.commit_open();
            self.open.push(Segment::new(text, line.style));
        }
    }

    fn commit_open(&mut self) {
        let row = std::mem::take(&mut self.open);
        self.rows.push(row);
    }

    /// Echoes the prompt line into the scrollback and hands back the typed
    /// text. The prompt stays hidden until the engine sends the next one.
    pub fn take_submission(&mut self) -> String {
        let typed = std::mem::take(&mut self.input);
        if let Some(prompt) = self.prompt.take() {
            self.open.push(Segment::new(prompt, StyleTag::Plain));
        }
        self.open.push(Segment::new(typed.clone(), StyleTag::Plain));
        self.commit_open();
        self.suggestions.clear();
        self.scroll_back = 0;
        typed
    }

    /// Replaces the input with the first suggestion, if one is showing.
    pub fn accept_suggestion(&mut self) -> bool {
        match self.suggestions.first() {
            Some(first) => {
                self.input = first.clone();
                true
            }
            None => false,
        }
    }

    /// Every row the content pane can show, the live prompt line last.
    pub fn display_rows(&self) -> Vec<Row> {
        let mut rows = self.rows.clone();
        let mut live = self.open.clone();
        if let Some(prompt) = &self.prompt {
            live.push(Segment::new(prompt.clone(), StyleTag::Plain));
            live.push(Segment::new(self.input.clone(), StyleTag::Plain));
        }
        if !live.is_empty() {
            rows.push(live);
        }
        rows
    }

    pub fn has_prompt(&self) -> bool {
        self.prompt.is_some()
    }

    /// Width of the live row up to the cursor.
    pub fn cursor_column(&self) -> usize {
        let open: usize = self.open.iter().map(|s| s.text.chars().count()).sum();
        let prompt = self.prompt.as_ref().map_or(0, |p| p.chars().count());
        open + prompt + self.input.chars().count()
    }

    pub fn row_count(&self) -> usize {
        let live = usize::from(!self.open.is_empty() || self.prompt.is_some());
        self.rows.len() + live
    }

    pub fn scroll_up(&mut self, by: usize, viewport_height: usize) {
        let max = self.row_count().saturating_sub(viewport_height);
        self.scroll_back = (self.scroll_back + by).min(max);
    }

    pub fn scroll_down(&mut self, by: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(by);
    }

    /// Viewport row of the prompt line, when the cursor belongs on screen.
    pub fn cursor_row(&self, viewport_height: usize) -> Option<usize> {
        if !self.has_prompt() || self.scroll_back > 0 || viewport_height == 0 {
            return None;
        }
        Some(self.row_count() - self.top_row(viewport_height) - 1)
    }

    /// First row shown in a viewport of the given height.
    pub fn top_row(&self, viewport_height: usize) -> usize {
        self.row_count()
            .saturating_sub(viewport_height)
            .saturating_sub(self.scroll_back)
    }
}
