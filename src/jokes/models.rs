//! Joke data models
//!
//! Defines the stored joke entity, the request shapes for create/update,
//! and the validation rules enforced before any write.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Unique identifier for a joke
pub type JokeId = String;

/// Author used when a submission does not name one
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Closed set of accepted joke categories
pub const CATEGORIES: [&str; 4] = ["Dad joke", "Dark Humor", "Funny", "Bad"];

/// Lowest accepted score
pub const MIN_SCORE: i64 = 1;

/// Highest accepted score
pub const MAX_SCORE: i64 = 10;

/// A stored joke
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Joke {
    /// Unique identifier, assigned by the store on creation
    pub id: JokeId,
    /// The joke itself
    pub text: String,
    /// Who submitted the joke
    pub author: String,
    /// How funny the joke is, 1 to 10
    pub score: i64,
    /// One of [`CATEGORIES`]
    pub category: String,
}

impl Joke {
    /// Generate a new unique ID for a joke
    pub fn generate_id() -> JokeId {
        Uuid::new_v4().to_string()
    }
}

/// Request body for creating a joke
///
/// Every field is optional at the serde level so that missing or invalid
/// input surfaces through [`NewJoke::validate`] with a readable message
/// instead of a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct NewJoke {
    /// The joke itself (required)
    pub text: Option<String>,
    /// Who submitted the joke (defaults to [`DEFAULT_AUTHOR`])
    pub author: Option<String>,
    /// Score, 1 to 10 (required)
    pub score: Option<i64>,
    /// Category, one of [`CATEGORIES`] (required)
    pub category: Option<String>,
}

impl NewJoke {
    /// Validate the submission
    /// Returns Ok(()) if valid, Err with message if invalid
    pub fn validate(&self) -> Result<(), String> {
        match &self.text {
            None => return Err("text is required".to_string()),
            Some(text) => validate_text(text)?,
        }
        match self.score {
            None => return Err("score is required".to_string()),
            Some(score) => validate_score(score)?,
        }
        match &self.category {
            None => return Err("category is required".to_string()),
            Some(category) => validate_category(category)?,
        }
        Ok(())
    }

    /// Turn a validated submission into a storable entity with a fresh ID
    ///
    /// # Errors
    /// Returns the validation message if any field fails its constraint.
    pub fn into_joke(self) -> Result<Joke, String> {
        self.validate()?;
        Ok(Joke {
            id: Joke::generate_id(),
            // validate() has established text/score/category are present
            text: self.text.unwrap_or_default(),
            author: self
                .author
                .unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
            score: self.score.unwrap_or(MIN_SCORE),
            category: self.category.unwrap_or_default(),
        })
    }
}

/// Request body for partially updating a joke
///
/// Only the fields present in the body are changed; each present field is
/// re-validated against its constraint.
#[derive(Debug, Default, Deserialize)]
pub struct JokeUpdate {
    /// New joke text
    pub text: Option<String>,
    /// New author
    pub author: Option<String>,
    /// New score, 1 to 10
    pub score: Option<i64>,
    /// New category, one of [`CATEGORIES`]
    pub category: Option<String>,
}

impl JokeUpdate {
    /// Validate the fields that are present
    /// Returns Ok(()) if valid, Err with message if invalid
    pub fn validate(&self) -> Result<(), String> {
        if let Some(text) = &self.text {
            validate_text(text)?;
        }
        if let Some(score) = self.score {
            validate_score(score)?;
        }
        if let Some(category) = &self.category {
            validate_category(category)?;
        }
        Ok(())
    }

    /// Whether the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.text.is_none()
            && self.author.is_none()
            && self.score.is_none()
            && self.category.is_none()
    }
}

/// Validate that joke text is non-empty
pub fn validate_text(text: &str) -> Result<(), String> {
    if text.trim().is_empty() {
        return Err("text cannot be empty".to_string());
    }
    Ok(())
}

/// Validate that a score is within the accepted range
pub fn validate_score(score: i64) -> Result<(), String> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(format!(
            "score must be between {} and {}, got {}",
            MIN_SCORE, MAX_SCORE, score
        ));
    }
    Ok(())
}

/// Validate that a category is a member of the accepted set
pub fn validate_category(category: &str) -> Result<(), String> {
    if !CATEGORIES.contains(&category) {
        return Err(format!(
            "category must be one of {:?}, got {:?}",
            CATEGORIES, category
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> NewJoke {
        NewJoke {
            text: Some("Why did the chicken cross the road?".to_string()),
            author: None,
            score: Some(5),
            category: Some("Dad joke".to_string()),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert!(valid_submission().validate().is_ok());
    }

    #[test]
    fn test_score_bounds() {
        assert!(validate_score(1).is_ok());
        assert!(validate_score(10).is_ok());
        assert!(validate_score(0).is_err());
        assert!(validate_score(11).is_err());
        assert!(validate_score(-3).is_err());
    }

    #[test]
    fn test_category_membership() {
        for category in CATEGORIES {
            assert!(validate_category(category).is_ok());
        }
        assert!(validate_category("Chistoso").is_err());
        assert!(validate_category("dad joke").is_err());
        assert!(validate_category("").is_err());
    }

    #[test]
    fn test_missing_required_fields_rejected() {
        let mut missing_text = valid_submission();
        missing_text.text = None;
        assert!(missing_text.validate().is_err());

        let mut missing_score = valid_submission();
        missing_score.score = None;
        assert!(missing_score.validate().is_err());

        let mut missing_category = valid_submission();
        missing_category.category = None;
        assert!(missing_category.validate().is_err());
    }

    #[test]
    fn test_empty_text_rejected() {
        let mut submission = valid_submission();
        submission.text = Some("   ".to_string());
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_into_joke_fills_default_author() {
        let joke = valid_submission().into_joke().unwrap();
        assert_eq!(joke.author, DEFAULT_AUTHOR);
        assert!(!joke.id.is_empty());
    }

    #[test]
    fn test_into_joke_keeps_supplied_author() {
        let mut submission = valid_submission();
        submission.author = Some("Led".to_string());
        let joke = submission.into_joke().unwrap();
        assert_eq!(joke.author, "Led");
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        let empty = JokeUpdate::default();
        assert!(empty.validate().is_ok());
        assert!(empty.is_empty());

        let score_only = JokeUpdate {
            score: Some(11),
            ..Default::default()
        };
        assert!(score_only.validate().is_err());

        let category_only = JokeUpdate {
            category: Some("Funny".to_string()),
            ..Default::default()
        };
        assert!(category_only.validate().is_ok());
        assert!(!category_only.is_empty());
    }
}
