/// A buffer for processing one line of source text.  The outer interpreter owns one of these and
/// refills it for every line it is handed.  The buffer acts as a forward only cursor over the
/// text, handing out one token at a time.
///
/// Tokens are normally delimited by whitespace, but a word may request a custom delimiter.  For
/// example `."` parses everything up to the next double quote.
#[derive(Default)]
pub struct SourceBuffer {
    /// The characters of the line currently being processed.
    chars: Vec<char>,

    /// The read cursor.  Always somewhere between 0 and the end of the line.
    cursor: usize,
}

impl SourceBuffer {
    /// Create a new empty buffer.  It will report end of input until it is reset with a line of
    /// text.
    pub fn new() -> SourceBuffer {
        SourceBuffer {
            chars: Vec::new(),
            cursor: 0,
        }
    }

    /// Begin processing a new line of text.  The cursor is rewound to the start of the line.
    pub fn reset(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.cursor = 0;
    }

    /// Extract the next token from the line.
    ///
    /// With the default delimiter, `None`, leading characters with a code of 32 or lower are
    /// skipped and the token runs until the next space or newline.  With a custom delimiter the
    /// token runs until that delimiter, and the cursor is advanced one extra position so that the
    /// delimiter itself is consumed.
    ///
    /// Returns `None` when no token could be collected.  That is the normal end of line signal
    /// rather than an error.
    pub fn parse_token(&mut self, delimiter: Option<char>) -> Option<String> {
        while self.cursor < self.chars.len() {
            let next = self.chars[self.cursor];

            if (next as u32) <= 32 && Some(next) != delimiter {
                self.cursor += 1;
            } else {
                break;
            }
        }

        let mut token = String::new();

        while self.cursor < self.chars.len() {
            let next = self.chars[self.cursor];

            let found_end = match delimiter {
                Some(delimiter) => next == delimiter || next == '\n',
                None => next == ' ' || next == '\n',
            };

            if found_end {
                break;
            }

            token.push(next);
            self.cursor += 1;
        }

        // A custom delimiter is consumed along with the token.
        if delimiter.is_some() {
            self.cursor += 1;
        }

        if token.is_empty() { None } else { Some(token) }
    }
}

#[cfg(test)]
mod tests {
    use super::SourceBuffer;

    #[test]
    fn whitespace_delimited_tokens() {
        let mut buffer = SourceBuffer::new();

        buffer.reset("  3 4  + .");

        assert_eq!(buffer.parse_token(None), Some("3".to_string()));
        assert_eq!(buffer.parse_token(None), Some("4".to_string()));
        assert_eq!(buffer.parse_token(None), Some("+".to_string()));
        assert_eq!(buffer.parse_token(None), Some(".".to_string()));
        assert_eq!(buffer.parse_token(None), None);
    }

    #[test]
    fn custom_delimiter_consumes_terminator() {
        let mut buffer = SourceBuffer::new();

        buffer.reset(" hello world\" after");

        assert_eq!(
            buffer.parse_token(Some('"')),
            Some("hello world".to_string())
        );
        assert_eq!(buffer.parse_token(None), Some("after".to_string()));
    }

    #[test]
    fn empty_line_is_end_of_input() {
        let mut buffer = SourceBuffer::new();

        buffer.reset("   ");
        assert_eq!(buffer.parse_token(None), None);
    }
}
