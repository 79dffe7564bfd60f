//! Append-only report buffer with four-space indentation.

const INDENT: &str = "    ";

pub(crate) struct Report {
    buf: String,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }

    fn push_indent(&mut self, indent: usize) {
        for _ in 0..indent {
            self.buf.push_str(INDENT);
        }
    }

    /// One indented line.
    pub(crate) fn line(&mut self, indent: usize, text: &str) {
        self.push_indent(indent);
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// A bare newline, used as a section separator.
    pub(crate) fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Multi-line text, re-indented after every embedded newline so nested
    /// output lines up with the surrounding report.
    pub(crate) fn block(&mut self, indent: usize, text: &str) {
        self.push_indent(indent);
        for ch in text.chars() {
            self.buf.push(ch);
            if ch == '\n' {
                self.push_indent(indent);
            }
        }
        self.buf.push('\n');
    }
}
