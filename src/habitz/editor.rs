use crate::error::{HabitzError, Result};
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// Content parsed from an editor buffer.
/// Format: first line is the title, then a blank line, then the description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorContent {
    pub title: String,
    pub description: String,
}

impl EditorContent {
    pub fn new(title: String, description: String) -> Self {
        Self { title, description }
    }

    /// Formats the content for the editor buffer.
    pub fn to_buffer(&self) -> String {
        if self.description.is_empty() {
            format!("{}\n\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.description)
        }
    }

    /// Parses an editor buffer back into title and description. The blank
    /// line after the title is optional.
    pub fn from_buffer(buffer: &str) -> Self {
        let mut lines = buffer.lines();
        let title = lines.next().unwrap_or("").to_string();
        let mut rest: Vec<&str> = lines.collect();
        if rest.first() == Some(&"") {
            rest.remove(0);
        }
        Self {
            title,
            description: rest.join("\n"),
        }
    }
}

/// Gets the editor command from the environment.
/// Checks $EDITOR, then $VISUAL, then falls back to common editors.
pub fn get_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(HabitzError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
pub fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = get_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| HabitzError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(HabitzError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(HabitzError::Io)
}

/// Opens an editor with initial content and returns the edited content.
pub fn edit_content(initial: &EditorContent) -> Result<EditorContent> {
    let temp_file = env::temp_dir().join("habitz_edit.txt");

    fs::write(&temp_file, initial.to_buffer()).map_err(HabitzError::Io)?;
    let result = open_in_editor(&temp_file)?;
    let _ = fs::remove_file(&temp_file);

    Ok(EditorContent::from_buffer(&result))
}
