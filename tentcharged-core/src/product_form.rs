//! Admin add-product form: data URI encoding and the pure commit step.
//!
//! Reading the selected file is the caller's job (it is asynchronous and
//! browser-specific). Once the bytes are available they are wrapped in a
//! [`DataUri`] and handed to [`commit`] together with the text fields.

use crate::product::NewProduct;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category choices offered by the admin form.
pub const CATEGORY_SUGGESTIONS: [&str; 6] = [
    "2-Person",
    "Family",
    "Solo",
    "Expedition",
    "Shelter",
    "Glamping",
];

const FALLBACK_MIME: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddProductError {
    #[error("Please fill in the product {0}.")]
    MissingField(&'static str),
    #[error("Please select an image for the product.")]
    MissingImage,
    #[error("There was an error processing the image. Please try again. ({0})")]
    ImageRead(String),
    #[error("Only a logged-in admin can add products.")]
    Unauthorized,
    #[error("The catalog has no room for another product.")]
    CatalogFull,
}

/// Text fields of the add-product form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub category: String,
    pub description: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            price: String::new(),
            category: CATEGORY_SUGGESTIONS[0].to_string(),
            description: String::new(),
        }
    }
}

impl ProductForm {
    /// Blank form preselecting the first configured category.
    #[must_use]
    pub fn with_suggestions(suggestions: &[String]) -> Self {
        suggestions
            .first()
            .map_or_else(Self::default, |first| Self {
                category: first.clone(),
                ..Self::default()
            })
    }

    /// Check that every text field has content.
    ///
    /// # Errors
    ///
    /// Returns [`AddProductError::MissingField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), AddProductError> {
        let fields = [
            ("name", &self.name),
            ("price", &self.price),
            ("category", &self.category),
            ("description", &self.description),
        ];
        for (label, value) in fields {
            if value.trim().is_empty() {
                return Err(AddProductError::MissingField(label));
            }
        }
        Ok(())
    }
}

/// A `data:<mime>;base64,<payload>` string embedding an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUri(String);

impl DataUri {
    /// Encode raw file bytes. An empty mime type falls back to
    /// `application/octet-stream`.
    #[must_use]
    pub fn encode(mime_type: &str, bytes: &[u8]) -> Self {
        let mime = mime_type.trim();
        let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn mime_type(&self) -> &str {
        self.0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(";base64,"))
            .map_or(FALLBACK_MIME, |(mime, _)| mime)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Combine validated form fields with the encoded image.
///
/// # Errors
///
/// Returns [`AddProductError::MissingImage`] without an image and
/// [`AddProductError::MissingField`] for blank text fields.
pub fn commit(form: &ProductForm, image: Option<DataUri>) -> Result<NewProduct, AddProductError> {
    let image = image.ok_or(AddProductError::MissingImage)?;
    form.validate()?;
    Ok(NewProduct {
        name: form.name.trim().to_string(),
        price: form.price.trim().to_string(),
        image_url: image.into_string(),
        description: form.description.trim().to_string(),
        category: form.category.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            name: "X".into(),
            price: "¥100".into(),
            category: "Solo".into(),
            description: "d".into(),
        }
    }

    #[test]
    fn default_form_preselects_first_suggestion() {
        let form = ProductForm::default();
        assert_eq!(form.category, "2-Person");
        assert!(form.name.is_empty());
        let custom = ProductForm::with_suggestions(&["Bivvy".to_string()]);
        assert_eq!(custom.category, "Bivvy");
        assert_eq!(ProductForm::with_suggestions(&[]).category, "2-Person");
    }

    #[test]
    fn encodes_bytes_as_base64_data_uri() {
        let uri = DataUri::encode("image/png", b"\x89PNG");
        assert_eq!(uri.as_str(), "data:image/png;base64,iVBORw==");
        assert_eq!(uri.mime_type(), "image/png");
    }

    #[test]
    fn unknown_mime_falls_back_to_octet_stream() {
        let uri = DataUri::encode("", b"abc");
        assert_eq!(uri.as_str(), "data:application/octet-stream;base64,YWJj");
        assert_eq!(uri.mime_type(), "application/octet-stream");
    }

    #[test]
    fn commit_requires_an_image_first() {
        let err = commit(&ProductForm::default(), None).unwrap_err();
        assert_eq!(err, AddProductError::MissingImage);
        assert_eq!(err.to_string(), "Please select an image for the product.");
    }

    #[test]
    fn commit_reports_first_blank_field() {
        let mut form = filled();
        form.price = "   ".into();
        let err = commit(&form, Some(DataUri::encode("image/jpeg", b"x"))).unwrap_err();
        assert_eq!(err, AddProductError::MissingField("price"));
    }

    #[test]
    fn commit_embeds_image_and_trims_fields() {
        let mut form = filled();
        form.name = "  Trail Tarp ".into();
        let image = DataUri::encode("image/webp", b"img");
        let product = commit(&form, Some(image.clone())).unwrap();
        assert_eq!(product.name, "Trail Tarp");
        assert_eq!(product.image_url, image.as_str());
        assert_eq!(product.category, "Solo");
    }
}
