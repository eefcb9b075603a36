//! Named string fields used to fill prompt templates.

/// Immutable record threaded through the script-generation stages.
///
/// Each stage adds its output with a consuming `with_*` call, so a context
/// never changes underneath a template that is rendering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptContext {
    input_text: String,
    host_profiles: String,
    outline: Option<String>,
    full_script: Option<String>,
}

impl PromptContext {
    pub fn new(input_text: impl Into<String>, host_profiles: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            host_profiles: host_profiles.into(),
            outline: None,
            full_script: None,
        }
    }

    pub fn with_outline(self, outline: impl Into<String>) -> Self {
        Self {
            outline: Some(outline.into()),
            ..self
        }
    }

    pub fn with_full_script(self, full_script: impl Into<String>) -> Self {
        Self {
            full_script: Some(full_script.into()),
            ..self
        }
    }

    pub fn input_text(&self) -> &str {
        &self.input_text
    }

    pub fn host_profiles(&self) -> &str {
        &self.host_profiles
    }

    pub fn outline(&self) -> Option<&str> {
        self.outline.as_deref()
    }

    pub fn full_script(&self) -> Option<&str> {
        self.full_script.as_deref()
    }

    /// Look a field up by its placeholder name.
    ///
    /// Returns `None` both for unknown names and for stages not yet run.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "input_text" => Some(&self.input_text),
            "host_profiles" => Some(&self.host_profiles),
            "outline" => self.outline(),
            "full_script" => self.full_script(),
            _ => None,
        }
    }
}
