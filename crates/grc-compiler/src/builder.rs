//! The append-only GRC output buffer.

/// An append-only line buffer. Newlines are LF; every appended line gets a
/// trailing newline. This is intentionally the only way to grow the output —
/// there is no random access or rewriting once a line is appended.
#[derive(Debug, Default)]
pub struct GrcOutputBuilder {
    buf: String,
}

impl GrcOutputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line, followed by `\n`.
    pub fn append_line(&mut self, line: impl AsRef<str>) {
        self.buf.push_str(line.as_ref());
        self.buf.push('\n');
    }

    /// Appends an empty line.
    pub fn append_blank(&mut self) {
        self.buf.push('\n');
    }

    /// Consumes the builder, returning the accumulated text.
    pub fn into_text(self) -> String {
        self.buf
    }
}
