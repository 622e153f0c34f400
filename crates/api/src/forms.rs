//! Multipart decoding for the game form.
//!
//! The game form carries text fields, two multi-selects, and an optional
//! file. A multi-select submits its field once per chosen option, so a
//! single selection arrives as one scalar occurrence; accumulating every
//! occurrence into a `Vec` here normalizes both shapes before validation.

use axum::extract::Multipart;

use gamedex_core::validation::GameDraft;

use crate::error::AppError;

/// An image file received with a form submission.
#[derive(Debug)]
pub struct UploadedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// The decoded game form.
#[derive(Debug, Default)]
pub struct GameForm {
    pub title: String,
    pub release_date: String,
    pub developers: Vec<String>,
    pub genres: Vec<String>,
    /// Path of the image already on record, carried by the edit form so
    /// a submission without a new file retains it.
    pub existing_image: Option<String>,
    pub image: Option<UploadedImage>,
}

impl GameForm {
    /// The raw input handed to validation.
    pub fn draft(&self) -> GameDraft {
        GameDraft {
            title: self.title.clone(),
            release_date: self.release_date.clone(),
            has_image: self.image.is_some(),
            developer_ids: self.developers.clone(),
            genre_ids: self.genres.clone(),
        }
    }
}

/// Decode a multipart game submission.
///
/// Unknown fields are ignored. A file part with an empty filename or an
/// empty body (a browser submitting an untouched file input) counts as no
/// upload.
pub async fn parse_game_form(mut multipart: Multipart) -> Result<GameForm, AppError> {
    let mut form = GameForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "image_url" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !filename.is_empty() && !bytes.is_empty() {
                    form.image = Some(UploadedImage {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            "title" => form.title = text(field).await?,
            "release_date" => form.release_date = text(field).await?,
            "developers" => form.developers.push(text(field).await?),
            "genres" => form.genres.push(text(field).await?),
            "existing_image" => {
                let value = text(field).await?;
                if !value.is_empty() {
                    form.existing_image = Some(value);
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    Ok(form)
}

async fn text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))
}
