/// A named piece of source text with its line breaks precomputed.
#[derive(Debug, Clone)]
pub struct Source {
    name: String,
    text: String,
    line_breaks: Vec<usize>,

    // lines already seen before this text, for text cut out of a larger input
    line_offset: usize,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let line_breaks = text
            .char_indices()
            .filter_map(|(i, ch)| (ch == '\n').then_some(i))
            .collect();

        Self {
            name: name.into(),
            text,
            line_breaks,

            line_offset: 0,
        }
    }

    /// Numbers the lines of this source as if `offset` lines came before it.
    #[must_use]
    pub fn with_line_offset(mut self, offset: usize) -> Self {
        self.line_offset = offset;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// One-based line and column of a byte offset.
    pub fn byte_to_line_col(&self, byte: usize) -> Option<(usize, usize)> {
        let line = self.byte_to_line_index(byte)?;

        let line_start = self.line_to_byte(line)?;
        let col = byte - line_start;

        Some((self.line_number(line), col + 1))
    }

    /// The one-based number shown for a line index.
    pub fn line_number(&self, index: usize) -> usize {
        self.line_offset + index + 1
    }

    pub fn byte_to_line_index(&self, byte: usize) -> Option<usize> {
        if byte > self.text.len() {
            return None;
        }

        match self.line_breaks.binary_search(&byte) {
            Ok(line) | Err(line) => Some(line),
        }
    }

    pub fn line_to_byte(&self, line: usize) -> Option<usize> {
        match line {
            0 => Some(0),
            _ => self.line_breaks.get(line - 1).map(|&byte| byte + 1),
        }
    }

    /// A line without its terminator.
    pub fn line_str(&self, index: usize) -> Option<&str> {
        let start = self.line_to_byte(index)?;
        let end = self.line_to_byte(index + 1).unwrap_or(self.text.len());

        let s = &self.text[start..end];
        let s = s.strip_suffix('\n').unwrap_or(s);
        let s = s.strip_suffix('\r').unwrap_or(s);

        Some(s)
    }

    pub fn num_lines(&self) -> usize {
        1 + self.line_breaks.len()
    }
}
