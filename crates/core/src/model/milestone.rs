use std::fmt;
use std::str::FromStr;

use thiserror::Error;

//
// ─── DECADE LABEL ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecadeLabelError {
    #[error("decade label must look like `1990s`, got {raw:?}")]
    Malformed { raw: String },
    #[error("decade label must start on a multiple of ten, got {start}")]
    NotAligned { start: i32 },
}

/// Decade bucket derived from a year (`1955` and `1959` both map to `1950s`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecadeLabel(i32);

impl DecadeLabel {
    /// Floors the year to its decade.
    #[must_use]
    pub fn from_year(year: i32) -> Self {
        Self(year.div_euclid(10) * 10)
    }

    /// First year of the decade.
    #[must_use]
    pub fn start(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for DecadeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl FromStr for DecadeLabel {
    type Err = DecadeLabelError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let start: i32 = raw
            .trim()
            .strip_suffix('s')
            .and_then(|digits| digits.parse().ok())
            .ok_or_else(|| DecadeLabelError::Malformed {
                raw: raw.to_string(),
            })?;
        if start.rem_euclid(10) != 0 {
            return Err(DecadeLabelError::NotAligned { start });
        }
        Ok(Self(start))
    }
}

//
// ─── MILESTONE ─────────────────────────────────────────────────────────────────
//

/// One entry of the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    year: i32,
    title: String,
    description: String,
    tags: Vec<String>,
    image_ref: Option<String>,
}

impl Milestone {
    #[must_use]
    pub fn new(
        year: i32,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: Vec<String>,
        image_ref: Option<String>,
    ) -> Self {
        Self {
            year,
            title: title.into(),
            description: description.into(),
            tags,
            image_ref,
        }
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Tags in display order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// File name of an optional illustration. The file may not exist.
    #[must_use]
    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    #[must_use]
    pub fn decade(&self) -> DecadeLabel {
        DecadeLabel::from_year(self.year)
    }

    /// Lowercased text searched by free-text queries: year, title,
    /// description and tags separated by single spaces.
    #[must_use]
    pub fn search_text(&self) -> String {
        let mut blob = self.year.to_string();
        for part in [self.title.as_str(), self.description.as_str()] {
            blob.push(' ');
            blob.push_str(&part.to_lowercase());
        }
        blob.push(' ');
        blob.push_str(&self.tags.join(" ").to_lowercase());
        blob
    }

    /// Sentence read aloud when the milestone is narrated.
    #[must_use]
    pub fn narration_text(&self) -> String {
        format!("{}. Año {}. {}", self.title, self.year, self.description)
    }
}
