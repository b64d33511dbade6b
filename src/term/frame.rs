//! Frame: a plain text render target.
//!
//! Views append lines into a frame; sinks (the terminal renderer, or a
//! test asserting on output) read them back. Reusing one frame across
//! ticks keeps the render hot path free of per-line reallocations.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    lines: Vec<String>,
}

impl Frame {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Drop all lines but keep their allocations for reuse.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Append one line of output.
    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_clear() {
        let mut frame = Frame::new();
        assert!(frame.is_empty());

        frame.push_line("header".to_string());
        frame.push_line("row".to_string());
        assert_eq!(frame.lines(), &["header".to_string(), "row".to_string()]);

        frame.clear();
        assert!(frame.is_empty());
    }
}
