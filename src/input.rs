/// Multi-line text buffer with a cursor, counted in chars.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    content: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        TextInput::default()
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = self.line_start();
    }

    pub fn move_end(&mut self) {
        let rest = &self.content[self.byte_index(self.cursor)..];
        self.cursor += rest.chars().take_while(|c| *c != '\n').count();
    }

    /// Char index of the start of the cursor's line.
    fn line_start(&self) -> usize {
        let before = &self.content[..self.byte_index(self.cursor)];
        match before.rfind('\n') {
            Some(i) => before[..=i].chars().count(),
            None => 0,
        }
    }

    /// Content with a `|` marker at the cursor, as drawn in the journal box.
    pub fn with_cursor_marker(&self) -> String {
        let mut shown = self.content.clone();
        shown.insert(self.byte_index(self.cursor), '|');
        shown
    }
}
