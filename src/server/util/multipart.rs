//! Collection of `multipart/form-data` bodies into an in-memory form.
//!
//! Controllers read the whole body once into a `FormData`, then the parameter types in
//! `server::model` pull typed values out of it. Field names ending in `[]` are stored
//! without the suffix, so `images[]` and `images` address the same list.

use axum::{body::Bytes, extract::Multipart};
use serde::de::DeserializeOwned;
use std::{collections::HashMap, str::FromStr};

use crate::server::error::AppError;

/// A file part of a multipart body.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Form field the file was sent under.
    pub field: String,
    /// Client supplied file name, if any.
    pub file_name: Option<String>,
    /// Media type declared by the client.
    pub content_type: String,
    pub bytes: Bytes,
}

impl UploadedFile {
    /// Name used in validation messages.
    pub fn display_name(&self) -> String {
        match &self.file_name {
            Some(name) => format!("'{}'", name),
            None => format!("in field '{}'", self.field),
        }
    }
}

/// Text fields and files of a decoded multipart body.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, Vec<UploadedFile>>,
}

impl FormData {
    /// Reads every part of the multipart body.
    ///
    /// Parts carrying a file name or a non-text content type are treated as files;
    /// everything else is a text field. A repeated text field keeps its last value.
    ///
    /// # Returns
    /// - `Ok(FormData)` - All parts collected
    /// - `Err(AppError::MultipartErr)` - Malformed body or body limit exceeded
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);

            let is_file = file_name.is_some()
                || content_type
                    .as_deref()
                    .is_some_and(|ct| !ct.starts_with("text/"));

            if is_file {
                let bytes = field.bytes().await?;
                form.insert_file(UploadedFile {
                    field: name,
                    file_name,
                    content_type: content_type.unwrap_or_default(),
                    bytes,
                });
            } else {
                let value = field.text().await?;
                form.insert_text(name, value);
            }
        }

        Ok(form)
    }

    pub fn insert_text(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.fields
            .insert(normalize_name(name.as_ref()), value.into());
    }

    pub fn insert_file(&mut self, mut file: UploadedFile) {
        file.field = normalize_name(&file.field);
        self.files.entry(file.field.clone()).or_default().push(file);
    }

    /// Whether the text field was sent at all, even empty.
    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Trimmed text value, `None` when absent or blank.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    }

    /// Trimmed text value that must be present and non-blank.
    pub fn required_text(&self, name: &str) -> Result<String, AppError> {
        self.text(name)
            .ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
    }

    /// Text value that was sent, keeping an empty string as `Some("")`.
    ///
    /// Used for optional fields where an empty value means "clear".
    pub fn raw_text(&self, name: &str) -> Option<String> {
        self.fields.get(name).map(|value| value.trim().to_string())
    }

    /// Parses a text field, `None` when absent or blank.
    pub fn parse<T>(&self, name: &str) -> Result<Option<T>, AppError>
    where
        T: FromStr,
    {
        self.text(name)
            .map(|value| {
                value.parse::<T>().map_err(|_| {
                    AppError::BadRequest(format!("Invalid value '{}' for {}", value, name))
                })
            })
            .transpose()
    }

    /// Parses a text field that must be present.
    pub fn required_parse<T>(&self, name: &str) -> Result<T, AppError>
    where
        T: FromStr,
    {
        self.parse(name)?
            .ok_or_else(|| AppError::BadRequest(format!("{} is required", name)))
    }

    /// Parses a boolean field accepting `true`/`false`, `1`/`0` and `on`/`off`.
    pub fn bool(&self, name: &str) -> Result<Option<bool>, AppError> {
        self.text(name)
            .map(|value| match value.to_ascii_lowercase().as_str() {
                "true" | "1" | "on" | "yes" => Ok(true),
                "false" | "0" | "off" | "no" => Ok(false),
                _ => Err(AppError::BadRequest(format!(
                    "Invalid value '{}' for {}, expected true or false",
                    value, name
                ))),
            })
            .transpose()
    }

    /// Decodes a JSON-encoded text field, `None` when absent or blank.
    pub fn json<T>(&self, name: &str) -> Result<Option<T>, AppError>
    where
        T: DeserializeOwned,
    {
        self.text(name)
            .map(|value| {
                serde_json::from_str(&value)
                    .map_err(|e| AppError::BadRequest(format!("Invalid JSON in {}: {}", name, e)))
            })
            .transpose()
    }

    /// Files uploaded under the field, in upload order.
    pub fn files(&self, name: &str) -> &[UploadedFile] {
        self.files.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// First file uploaded under the field.
    pub fn file(&self, name: &str) -> Option<&UploadedFile> {
        self.files(name).first()
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().trim_end_matches("[]").to_string()
}
