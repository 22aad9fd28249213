use std::collections::VecDeque;
use std::convert::Infallible;

use crate::PlayerInput;

/// A scripted player input that replays queued lines.
///
/// Records every prompt it is asked, so tests can check what the session
/// asked for. New lines can be appended at any time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one line per line of `script`.
    ///
    /// Lines are taken verbatim, so blank lines queue empty answers.
    pub fn from_script(script: &str) -> Self {
        let mut input = Self::new();
        input.push_script(script);
        input
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.pending.push_back(line.into());
    }

    pub fn push_script(&mut self, script: &str) {
        self.pending.extend(script.lines().map(str::to_owned));
    }

    /// Lines not consumed yet.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Prompts shown so far, in order.
    #[inline]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl<S: Into<String>> FromIterator<S> for ScriptedInput {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            pending: iter.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }
}

impl PlayerInput for ScriptedInput {
    type Error = Infallible;

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Self::Error> {
        self.prompts.push(prompt.to_owned());
        Ok(self.pending.pop_front())
    }
}
