//! Form definitions, stored as JSON

use std::{
    fs::File,
    io::{self, ErrorKind::NotFound},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidatorKind;

/// Default location of the form definition
pub const DEFAULT_FORM_FILE: &str = "form.json";

/// Environment variable overriding [`DEFAULT_FORM_FILE`]
pub const FORM_FILE_VAR: &str = "SMARTFIELD_FORM";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot access form file: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed form file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One input of a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub header: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub validator: Option<ValidatorKind>,
    /// Replaces the validator's default message
    #[serde(default)]
    pub message: Option<String>,
}

/// An ordered list of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    pub title: String,
    pub fields: Vec<FieldConfig>,
}

impl FormConfig {
    /// Loads the form at `path`. A missing file is created with the default form.
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        match File::open(path) {
            Ok(f) => Ok(serde_json::from_reader(f)?),

            Err(not_found) if not_found.kind() == NotFound => {
                info!("Form file {} not found, creating default form", path.display());
                let form = FormConfig::default();
                form.save(path)?;
                Ok(form)
            }

            Err(other) => Err(other.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

impl Default for FormConfig {
    /// A sign-up form exercising every built-in validator
    fn default() -> Self {
        let field = |header: &str, placeholder: &str, validator: ValidatorKind| FieldConfig {
            header: header.to_owned(),
            placeholder: placeholder.to_owned(),
            validator: Some(validator),
            message: None,
        };

        Self {
            title: "Sign up".to_owned(),
            fields: vec![
                field("Name", "Jane Doe", ValidatorKind::Required),
                field("Email", "jane@example.com", ValidatorKind::Email),
                field("Password", "At least 8 characters", ValidatorKind::Password),
                field("Website", "https://example.com", ValidatorKind::Url),
                field("Passport number", "AB1234567", ValidatorKind::Passport),
                field("Credit card", "4532 0151 1283 0366", ValidatorKind::CreditCard),
            ],
        }
    }
}
