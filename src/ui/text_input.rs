//! Text input widget with cursor and keyboard handling
//!
//! Backs the contact form fields. Single-line by default; the message box
//! runs in multiline mode where Enter inserts a newline and long lines are
//! wrapped per character so the cursor always maps to an exact byte offset.

use macroquad::prelude::*;

use super::{theme, Rect};

/// State for one text input field
#[derive(Debug, Clone)]
pub struct TextInputState {
    /// The text content
    pub text: String,
    /// Cursor position (byte index)
    pub cursor: usize,
    /// Blink timer for cursor
    pub blink_timer: f32,
    /// Whether Enter inserts a newline instead of being ignored
    pub multiline: bool,
    /// Refuse input beyond this many bytes
    pub max_len: usize,
}

impl TextInputState {
    pub fn new(multiline: bool) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            blink_timer: 0.0,
            multiline,
            max_len: 2000,
        }
    }

    /// Previous char boundary before `cursor`, or 0
    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Next char boundary after `cursor`, or text end
    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.text.len())
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.next_boundary();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, ch: char) {
        if self.text.len() + ch.len_utf8() > self.max_len {
            return;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Delete the character after the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.next_boundary();
            self.text.drain(self.cursor..next);
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Handle keyboard input for the focused field, returns true if text changed
    pub fn handle_input(&mut self) -> bool {
        let before = self.text.len();
        self.blink_timer += get_frame_time();

        if is_key_pressed(KeyCode::Left) {
            self.move_left();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Right) {
            self.move_right();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Home) {
            self.move_home();
        }
        if is_key_pressed(KeyCode::End) {
            self.move_end();
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
            self.blink_timer = 0.0;
        }
        if is_key_pressed(KeyCode::Delete) {
            self.delete();
            self.blink_timer = 0.0;
        }
        if self.multiline && is_key_pressed(KeyCode::Enter) {
            self.insert_char('\n');
            self.blink_timer = 0.0;
        }

        while let Some(ch) = get_char_pressed() {
            // Printable characters only; Tab moves field focus upstream
            if ch >= ' ' && ch != '\u{7f}' {
                self.insert_char(ch);
                self.blink_timer = 0.0;
            }
        }

        self.text.len() != before
    }
}

/// Split `text` into display lines of at most `max_chars` characters,
/// breaking on explicit newlines first. Returns byte ranges into `text`
/// (newlines excluded) so the cursor can be located exactly.
pub fn layout_lines(text: &str, max_chars: usize) -> Vec<(usize, usize)> {
    let max_chars = max_chars.max(1);
    let mut ranges = Vec::new();
    let mut line_start = 0;
    let mut line_chars = 0;

    for (i, ch) in text.char_indices() {
        if ch == '\n' {
            ranges.push((line_start, i));
            line_start = i + 1;
            line_chars = 0;
            continue;
        }
        if line_chars == max_chars {
            ranges.push((line_start, i));
            line_start = i;
            line_chars = 0;
        }
        line_chars += 1;
    }
    ranges.push((line_start, text.len()));
    ranges
}

/// Locate the display line and column of a byte offset
fn cursor_position(ranges: &[(usize, usize)], cursor: usize) -> (usize, usize) {
    for (line, &(start, end)) in ranges.iter().enumerate() {
        if cursor >= start && cursor <= end {
            return (line, cursor - start);
        }
    }
    let last = ranges.len().saturating_sub(1);
    (last, ranges.get(last).map(|r| r.1 - r.0).unwrap_or(0))
}

/// Draw a text input field and, when focused, handle its keyboard input.
/// Returns true if the field was clicked (caller moves focus here).
pub fn draw_text_input(
    rect: Rect,
    state: &mut TextInputState,
    placeholder: &str,
    focused: bool,
    mouse_clicked: bool,
    mouse_inside: bool,
) -> bool {
    let border = if focused {
        theme::PRIMARY
    } else {
        theme::BORDER_COLOR
    };
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::ROW_BG);
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 1.0, border);

    if focused {
        state.handle_input();
    }

    let font_size = theme::FONT_SIZE_CONTENT;
    let char_width = font_size * 0.55;
    let padding = 8.0;
    let line_height = font_size + 4.0;
    let max_chars = (((rect.w - padding * 2.0) / char_width) as usize).max(1);

    if state.text.is_empty() && !focused {
        draw_text(
            placeholder,
            rect.x + padding,
            rect.y + padding + font_size * 0.75,
            font_size,
            theme::TEXT_DIM,
        );
    } else {
        let ranges = layout_lines(&state.text, max_chars);
        let visible_lines = ((rect.h - padding * 2.0) / line_height).max(1.0) as usize;
        let (cursor_line, cursor_col) = cursor_position(&ranges, state.cursor);

        // Scroll so the cursor line stays visible
        let first = cursor_line.saturating_sub(visible_lines.saturating_sub(1));
        for (row, &(start, end)) in ranges.iter().enumerate().skip(first).take(visible_lines) {
            let y = rect.y + padding + (row - first) as f32 * line_height + font_size * 0.75;
            draw_text(
                &state.text[start..end],
                rect.x + padding,
                y,
                font_size,
                theme::TEXT_COLOR,
            );
            if focused && row == cursor_line && (state.blink_timer % 1.0) < 0.5 {
                let cx = rect.x + padding + cursor_col as f32 * char_width;
                draw_line(cx, y - font_size * 0.75, cx, y + 3.0, 1.5, theme::TEXT_COLOR);
            }
        }
    }

    mouse_clicked && mouse_inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut s = TextInputState::new(false);
        for ch in "hello".chars() {
            s.insert_char(ch);
        }
        assert_eq!(s.text, "hello");
        assert_eq!(s.cursor, 5);
        s.backspace();
        assert_eq!(s.text, "hell");
        s.move_home();
        s.delete();
        assert_eq!(s.text, "ell");
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn test_cursor_moves_respect_utf8() {
        let mut s = TextInputState::new(false);
        s.insert_char('é');
        s.insert_char('x');
        s.move_left();
        s.move_left();
        assert_eq!(s.cursor, 0);
        s.move_right();
        assert_eq!(s.cursor, 'é'.len_utf8());
        s.insert_char('a');
        assert_eq!(s.text, "éax");
    }

    #[test]
    fn test_max_len_is_enforced() {
        let mut s = TextInputState::new(false);
        s.max_len = 3;
        for ch in "abcdef".chars() {
            s.insert_char(ch);
        }
        assert_eq!(s.text, "abc");
    }

    #[test]
    fn test_layout_lines_newlines_and_width() {
        let ranges = layout_lines("ab\ncdef", 3);
        assert_eq!(ranges.len(), 3);
        assert_eq!(&"ab\ncdef"[ranges[0].0..ranges[0].1], "ab");
        assert_eq!(&"ab\ncdef"[ranges[1].0..ranges[1].1], "cde");
        assert_eq!(&"ab\ncdef"[ranges[2].0..ranges[2].1], "f");
    }

    #[test]
    fn test_layout_lines_empty() {
        assert_eq!(layout_lines("", 10), vec![(0, 0)]);
    }
}
