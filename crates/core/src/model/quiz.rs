use std::fmt;

/// One of the four answer slots of a quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionIndex {
    A,
    B,
    C,
    D,
}

impl OptionIndex {
    pub const ALL: [OptionIndex; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Maps a 0-based slot to an option, `None` past the fourth slot.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

impl fmt::Display for OptionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(letter)
    }
}

/// Multiple-choice question with exactly four ordered options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    prompt: String,
    options: [String; 4],
    correct: OptionIndex,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(prompt: impl Into<String>, options: [String; 4], correct: OptionIndex) -> Self {
        Self {
            prompt: prompt.into(),
            options,
            correct,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: OptionIndex) -> &str {
        &self.options[index.index()]
    }

    #[must_use]
    pub fn correct(&self) -> OptionIndex {
        self.correct
    }

    #[must_use]
    pub fn correct_text(&self) -> &str {
        self.option(self.correct)
    }
}
