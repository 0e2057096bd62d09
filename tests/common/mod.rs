use std::collections::VecDeque;
use std::io;

use odyssey::io::{InputReader, OutputWriter};

/// Scripted player input. Runs dry with `UnexpectedEof`, like a closed stdin.
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| format!("{}\n", line)).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputReader for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<String, io::Error> {
        self.lines
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script finished"))
    }
}

#[derive(Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    pub fn count(&self, needle: &str) -> usize {
        self.lines.iter().filter(|line| line.contains(needle)).count()
    }

    pub fn position(&self, needle: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(needle))
    }
}

impl OutputWriter for Transcript {
    fn write(&mut self, message: &str) {
        match self.lines.last_mut() {
            Some(last) => last.push_str(message),
            None => self.lines.push(message.to_string()),
        }
    }

    fn writeln(&mut self, message: &str) {
        self.lines.push(message.to_string());
    }
}
