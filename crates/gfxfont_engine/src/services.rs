//! Collaborator services
//!
//! Prompts for text and file paths are opaque to the model: a call either
//! returns a value or nothing (cancelled, failed, empty answer).

use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::Command;

/// Modal prompts used by the editor session
pub trait PromptService {
    /// Ask for a line of text
    fn input(&mut self, prompt: &str, title: &str) -> Option<String>;

    /// Ask for a file path, `save` selects a save dialog instead of an open dialog
    fn select_file(&mut self, title: &str, save: bool) -> Option<PathBuf>;
}

/// Prompts through the KDE `kdialog` tool
#[derive(Clone, Debug)]
pub struct KDialogPrompt {
    program: String,
    start_dir: String,
}

impl Default for KDialogPrompt {
    fn default() -> Self {
        Self {
            program: "kdialog".to_string(),
            start_dir: "~/".to_string(),
        }
    }
}

impl KDialogPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another dialog executable with kdialog compatible arguments
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }

    fn run(&self, args: &[&str]) -> Option<String> {
        match Command::new(&self.program).args(args).output() {
            Ok(output) => {
                let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
            Err(err) => {
                log::warn!("Can't run {}: {}", self.program, err);
                None
            }
        }
    }
}

impl PromptService for KDialogPrompt {
    fn input(&mut self, prompt: &str, title: &str) -> Option<String> {
        self.run(&["--inputbox", prompt, "--title", title])
    }

    fn select_file(&mut self, title: &str, save: bool) -> Option<PathBuf> {
        let mode = if save { "--getsavefilename" } else { "--getopenfilename" };
        let start_dir = self.start_dir.clone();
        self.run(&[mode, &start_dir, "--title", title]).map(PathBuf::from)
    }
}

/// Prompt answers queued in advance
///
/// Each call pops the next answer of its kind; an exhausted queue answers
/// `None` like a cancelled dialog.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPrompt {
    inputs: VecDeque<Option<String>>,
    files: VecDeque<Option<PathBuf>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the answer for the next text prompt
    pub fn push_input(&mut self, answer: Option<&str>) -> &mut Self {
        self.inputs.push_back(answer.map(str::to_string));
        self
    }

    /// Queue the answer for the next file prompt
    pub fn push_file(&mut self, answer: Option<PathBuf>) -> &mut Self {
        self.files.push_back(answer);
        self
    }

    /// Number of answers not yet consumed
    pub fn pending(&self) -> usize {
        self.inputs.len() + self.files.len()
    }
}

impl PromptService for ScriptedPrompt {
    fn input(&mut self, _prompt: &str, _title: &str) -> Option<String> {
        self.inputs.pop_front().flatten()
    }

    fn select_file(&mut self, _title: &str, _save: bool) -> Option<PathBuf> {
        self.files.pop_front().flatten()
    }
}
