// Tue Jan 13 2026 - Alex

/// Fully buffered dump text with a forward cursor.
///
/// Push-back is a plain decrement of the cursor, so every line can be
/// re-read any number of times until the next `rewind`.
#[derive(Debug, Clone, Default)]
pub struct DebugDump {
    lines: Vec<String>,
    current: usize,
}

impl DebugDump {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines, current: 0 }
    }

    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(str::to_string).collect())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn rewind(&mut self) {
        self.current = 0;
    }

    /// Returns `None` at end of stream without moving the cursor.
    pub fn read_next_line(&mut self) -> Option<&str> {
        let line = self.lines.get(self.current)?;
        self.current += 1;
        Some(line.as_str())
    }

    pub fn push_back_line(&mut self) {
        self.push_back(1);
    }

    pub fn push_back(&mut self, count: usize) {
        debug_assert!(count <= self.current, "push-back past start of dump");
        self.current = self.current.saturating_sub(count);
    }
}
