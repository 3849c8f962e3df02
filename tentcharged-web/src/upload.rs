//! Browser side of the add-product flow: turning a picked `File` into a
//! data URI, and the temporary object URL used for the form preview.

use crate::dom::js_error_message;
use tentcharged_core::DataUri;
use thiserror::Error;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, Url};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileReadError {
    #[error("Could not read the image file: {0}")]
    Read(String),
    #[error("Could not create an image preview: {0}")]
    Preview(String),
}

impl FileReadError {
    /// Browser-reported cause, without the prefix.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Read(reason) | Self::Preview(reason) => reason,
        }
    }
}

/// Read the whole file and encode it as a base64 data URI.
///
/// # Errors
/// Returns [`FileReadError::Read`] when the browser rejects the read.
#[allow(clippy::future_not_send)] // `JsFuture` is not `Send`.
pub async fn read_file_as_data_uri(file: &File) -> Result<DataUri, FileReadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| FileReadError::Read(js_error_message(&err)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::debug!("read {} bytes from {}", bytes.len(), file.name());
    Ok(DataUri::encode(&file.type_(), &bytes))
}

/// An object URL pointing at a picked file. Revoked on drop.
#[derive(Debug, PartialEq, Eq)]
pub struct PreviewUrl {
    url: String,
}

impl PreviewUrl {
    /// # Errors
    /// Returns [`FileReadError::Preview`] when the browser cannot mint a URL.
    pub fn create(file: &File) -> Result<Self, FileReadError> {
        Url::create_object_url_with_blob(file)
            .map(|url| Self { url })
            .map_err(|err| FileReadError::Preview(js_error_message(&err)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

/// First file chosen in an `<input type="file">`, if any.
#[must_use]
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.get(0))
}
