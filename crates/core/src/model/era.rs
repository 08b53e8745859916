/// Narrative overview of a period, shown and narrated as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraOverview {
    label: String,
    text: String,
}

impl EraOverview {
    #[must_use]
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}
