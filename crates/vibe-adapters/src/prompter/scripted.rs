//! Scripted prompter for tests and non-interactive runs.

use std::collections::VecDeque;

use vibe_core::{application::ports::Prompter, error::VibeResult};

/// Answers prompts from a fixed list of lines and records the transcript.
///
/// Once the script runs out every prompt answers with an empty line.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything written so far: questions and output lines in order.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn say(&mut self, line: &str) -> VibeResult<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn prompt(&mut self, question: &str) -> VibeResult<String> {
        self.transcript.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}
