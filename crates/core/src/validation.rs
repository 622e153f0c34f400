//! Form validation — pure logic, no database access.
//!
//! Each `validate_*` function evaluates every rule for its entity and
//! collects all violations before returning, so the caller can report the
//! complete set of failed fields in one response. On success it yields a
//! typed value (trimmed strings, parsed dates and ids) so nothing
//! downstream re-parses raw form input.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::DbId;

/// A single field-level rule violation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw game form input as decoded at the HTTP boundary.
///
/// `developer_ids` and `genre_ids` are already normalized into sequences:
/// a multi-select submits a scalar when exactly one option is chosen, and
/// the form decoder folds both shapes into a `Vec` before validation.
#[derive(Debug, Default)]
pub struct GameDraft {
    pub title: String,
    pub release_date: String,
    /// Whether a new image file arrived with this submission.
    pub has_image: bool,
    pub developer_ids: Vec<String>,
    pub genre_ids: Vec<String>,
}

/// A game submission that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGame {
    pub title: String,
    pub release_date: NaiveDate,
    pub developer_ids: Vec<DbId>,
    pub genre_ids: Vec<DbId>,
}

/// Validate a game submission.
///
/// `today` is the calendar date to compare the release date against
/// (midnight-normalized by construction of `NaiveDate`). `image_required`
/// is true on create; on edit a missing file means the existing image is
/// retained.
pub fn validate_game(
    draft: &GameDraft,
    today: NaiveDate,
    image_required: bool,
) -> Result<ValidGame, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        violations.push(FieldViolation::new("title", "Game Title is required"));
    }

    let release_date = match NaiveDate::parse_from_str(draft.release_date.trim(), "%Y-%m-%d") {
        Ok(date) if date > today => {
            violations.push(FieldViolation::new(
                "release_date",
                "Release date cannot be in the future",
            ));
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            violations.push(FieldViolation::new("release_date", "Invalid Date Format"));
            None
        }
    };

    if image_required && !draft.has_image {
        violations.push(FieldViolation::new(
            "image_url",
            "Please upload an image for the game",
        ));
    }

    let developer_ids = parse_id_list(
        &draft.developer_ids,
        "developers",
        "Select at least one developer",
        &mut violations,
    );
    let genre_ids = parse_id_list(
        &draft.genre_ids,
        "genres",
        "Select at least one genre",
        &mut violations,
    );

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(ValidGame {
        title: title.to_string(),
        // Both unwraps are guarded by the violation list being empty.
        release_date: release_date.unwrap(),
        developer_ids: developer_ids.unwrap(),
        genre_ids: genre_ids.unwrap(),
    })
}

/// A developer submission that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDeveloper {
    pub name: String,
    pub country: String,
}

pub fn validate_developer(
    name: &str,
    country: &str,
) -> Result<ValidDeveloper, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        violations.push(FieldViolation::new("name", "Developer name is required"));
    }

    let country = country.trim();
    if country.is_empty() {
        violations.push(FieldViolation::new("country", "Country is required"));
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(ValidDeveloper {
        name: name.to_string(),
        country: country.to_string(),
    })
}

/// A genre submission that passed every rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGenre {
    pub name: String,
}

pub fn validate_genre(name: &str) -> Result<ValidGenre, Vec<FieldViolation>> {
    let name = name.trim();
    if name.is_empty() {
        return Err(vec![FieldViolation::new("name", "Genre name is required")]);
    }

    Ok(ValidGenre {
        name: name.to_string(),
    })
}

/// Parse a list of id strings, recording one violation for an empty list
/// or for any entry that is not a valid id.
fn parse_id_list(
    raw: &[String],
    field: &'static str,
    empty_message: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<Vec<DbId>> {
    if raw.is_empty() {
        violations.push(FieldViolation::new(field, empty_message));
        return None;
    }

    let mut ids = Vec::with_capacity(raw.len());
    for entry in raw {
        match entry.trim().parse::<DbId>() {
            Ok(id) => ids.push(id),
            Err(_) => {
                violations.push(FieldViolation::new(field, format!("Invalid id '{entry}'")));
                return None;
            }
        }
    }
    Some(ids)
}
