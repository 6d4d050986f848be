//! Minimal multi-line edit buffer backing the code pane.
//!
//! Every mutation is applied immediately to the owned text; there is no
//! debounce or intermediate widget state. Columns are char indices, so
//! multi-byte input moves the cursor one glyph at a time.

/// Invariant: `lines` always holds at least one (possibly empty) line, and
/// the cursor always points inside the buffer.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

impl EditorBuffer {
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::default();
        buffer.set_text(text);
        buffer
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// (row, col) of the cursor, both zero-based; col is a char index.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Replace the whole buffer and move the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = self.lines.len() - 1;
        self.col = char_len(&self.lines[self.row]);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn insert_char(&mut self, c: char) {
        let idx = byte_index(&self.lines[self.row], self.col);
        self.lines[self.row].insert(idx, c);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let idx = byte_index(&self.lines[self.row], self.col);
        let rest = self.lines[self.row].split_off(idx);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            let idx = byte_index(&self.lines[self.row], self.col - 1);
            self.lines[self.row].remove(idx);
            self.col -= 1;
        } else if self.row > 0 {
            let removed = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&removed);
        }
    }

    pub fn delete(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            let idx = byte_index(&self.lines[self.row], self.col);
            self.lines[self.row].remove(idx);
        } else if self.row + 1 < self.lines.len() {
            let removed = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&removed);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < char_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        } else {
            self.col = 0;
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(char_len(&self.lines[self.row]));
        } else {
            self.col = char_len(&self.lines[self.row]);
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = char_len(&self.lines[self.row]);
    }
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let buffer = EditorBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(buffer.text(), "");
        assert_eq!(buffer.cursor(), (0, 0));
    }

    #[test]
    fn inserts_and_splits_lines() {
        let mut buffer = EditorBuffer::default();
        for c in "ab".chars() {
            buffer.insert_char(c);
        }
        buffer.move_left();
        buffer.insert_newline();
        assert_eq!(buffer.text(), "a\nb");
        assert_eq!(buffer.cursor(), (1, 0));
    }

    #[test]
    fn backspace_joins_lines() {
        let mut buffer = EditorBuffer::from_text("ab\ncd");
        buffer.move_up();
        buffer.move_down();
        buffer.move_home();
        buffer.backspace();
        assert_eq!(buffer.text(), "abcd");
        assert_eq!(buffer.cursor(), (0, 2));
    }

    #[test]
    fn delete_at_line_end_joins_next_line() {
        let mut buffer = EditorBuffer::from_text("ab\ncd");
        buffer.move_up();
        buffer.move_end();
        buffer.delete();
        assert_eq!(buffer.text(), "abcd");
    }

    #[test]
    fn handles_multibyte_chars_by_glyph() {
        let mut buffer = EditorBuffer::default();
        buffer.insert_char('é');
        buffer.insert_char('x');
        buffer.backspace();
        buffer.backspace();
        assert!(buffer.is_empty());
    }

    #[test]
    fn set_text_places_cursor_at_end() {
        let buffer = EditorBuffer::from_text("one\ntwo");
        assert_eq!(buffer.cursor(), (1, 3));
        assert_eq!(buffer.line_count(), 2);
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut buffer = EditorBuffer::from_text("long line\nab");
        buffer.move_up();
        buffer.move_end();
        buffer.move_down();
        assert_eq!(buffer.cursor(), (1, 2));
    }

    #[test]
    fn clear_resets_everything() {
        let mut buffer = EditorBuffer::from_text("abc");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor(), (0, 0));
    }
}
