use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key did to the field. Non-editing keys come back as `Ignored` so the
/// caller can use them for navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputResult {
    Edited,
    Moved,
    Ignored,
}

/// Single-line text field with cursor editing.
#[derive(Clone, Debug, Default)]
pub struct LineInput {
    text: String,
    /// Byte offset of the cursor, always on a char boundary.
    cursor: usize,
}

impl LineInput {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Text before the cursor, the char under it (if any), and the rest.
    pub fn render_parts(&self) -> (&str, Option<char>, &str) {
        let (before, rest) = self.text.split_at(self.cursor);
        let mut chars = rest.chars();
        let under = chars.next();
        (before, under, chars.as_str())
    }

    pub fn handle(&mut self, key: KeyEvent) -> InputResult {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Left => self.move_to(self.prev_boundary()),
            KeyCode::Right => self.move_to(self.next_boundary()),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.text.len()),
            KeyCode::Char('a') if ctrl => self.move_to(0),
            KeyCode::Char('e') if ctrl => self.move_to(self.text.len()),
            KeyCode::Backspace => self.delete_range(self.prev_boundary(), self.cursor),
            KeyCode::Delete => self.delete_range(self.cursor, self.next_boundary()),
            KeyCode::Char('u') if ctrl => {
                self.clear();
                InputResult::Edited
            }
            KeyCode::Char('w') if ctrl => self.delete_range(self.word_start(), self.cursor),
            KeyCode::Char(ch) if !ctrl => {
                self.text.insert(self.cursor, ch);
                self.cursor += ch.len_utf8();
                InputResult::Edited
            }
            _ => InputResult::Ignored,
        }
    }

    fn move_to(&mut self, pos: usize) -> InputResult {
        self.cursor = pos;
        InputResult::Moved
    }

    fn delete_range(&mut self, start: usize, end: usize) -> InputResult {
        self.text.replace_range(start..end, "");
        self.cursor = start;
        InputResult::Edited
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map_or(self.cursor, |c| self.cursor + c.len_utf8())
    }

    /// Start of the word behind the cursor, skipping trailing whitespace first.
    fn word_start(&self) -> usize {
        let before = &self.text[..self.cursor];
        let trimmed = before.trim_end();
        trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8())
    }
}
