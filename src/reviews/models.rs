//! Guest review models.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::UnknownVariant;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// A published guest review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    /// Stay date, `YYYY-MM-DD` on the wire
    pub date: NaiveDate,
    pub rating: u8,
    pub text: String,
    /// Times other guests marked the review as useful
    #[serde(default)]
    pub helpful: u32,
}

/// Review ordering offered on the listing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewSort {
    #[default]
    Recent,
    Best,
    Worst,
}

impl ReviewSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewSort::Recent => "recent",
            ReviewSort::Best => "best",
            ReviewSort::Worst => "worst",
        }
    }

    pub fn label_pt(&self) -> &'static str {
        match self {
            ReviewSort::Recent => "Mais recentes",
            ReviewSort::Best => "Melhor avaliadas",
            ReviewSort::Worst => "Pior avaliadas",
        }
    }

    /// Missing or unknown values mean `recent`
    pub fn from_param(param: Option<&str>) -> Self {
        param.and_then(|value| value.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for ReviewSort {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(ReviewSort::Recent),
            "best" => Ok(ReviewSort::Best),
            "worst" => Ok(ReviewSort::Worst),
            other => Err(UnknownVariant {
                kind: "review sort",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReviewSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReviewDraftError {
    #[error("name and text are required")]
    MissingFields,

    #[error("rating {0} is outside 1..=5")]
    RatingOutOfRange(u8),
}

impl ReviewDraftError {
    pub fn code(&self) -> &'static str {
        match self {
            ReviewDraftError::MissingFields => "missing_fields",
            ReviewDraftError::RatingOutOfRange(_) => "rating_out_of_range",
        }
    }

    pub fn message_pt(&self) -> &'static str {
        match self {
            ReviewDraftError::MissingFields => "Preencha nome e comentário.",
            ReviewDraftError::RatingOutOfRange(_) => "Nota deve estar entre 1 e 5.",
        }
    }
}

/// Review as submitted through the review form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
    pub rating: u8,
}

impl ReviewDraft {
    /// Trimmed copy of the draft, or the first problem found
    pub fn validate(&self) -> Result<ReviewDraft, ReviewDraftError> {
        let name = self.name.trim();
        let text = self.text.trim();
        if name.is_empty() || text.is_empty() {
            return Err(ReviewDraftError::MissingFields);
        }
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ReviewDraftError::RatingOutOfRange(self.rating));
        }

        Ok(ReviewDraft {
            name: name.to_string(),
            text: text.to_string(),
            rating: self.rating,
        })
    }

    /// Publish the draft as a review dated `date`
    pub fn into_review(self, id: String, date: NaiveDate) -> Result<Review, ReviewDraftError> {
        let draft = self.validate()?;
        Ok(Review {
            id,
            name: draft.name,
            date,
            rating: draft.rating,
            text: draft.text,
            helpful: 0,
        })
    }
}
