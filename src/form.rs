//! A set of validated fields built from a form definition

use crate::config::{FieldConfig, FormConfig};
use crate::field::ValidatedField;

#[derive(Debug)]
pub struct Form {
    title: String,
    fields: Vec<ValidatedField>,
}

impl Form {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> impl Iterator<Item = &ValidatedField> + '_ {
        self.fields.iter()
    }

    pub fn fields_mut(&mut self) -> impl Iterator<Item = &mut ValidatedField> + '_ {
        self.fields.iter_mut()
    }

    pub fn field(&self, header: &str) -> Option<&ValidatedField> {
        self.fields.iter().find(|f| f.header() == header)
    }

    pub fn field_mut(&mut self, header: &str) -> Option<&mut ValidatedField> {
        self.fields.iter_mut().find(|f| f.header() == header)
    }

    /// True when every field is currently valid
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(ValidatedField::is_valid)
    }

    /// Header and message of every invalid field, in form order
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.fields
            .iter()
            .filter(|f| !f.is_valid())
            .map(|f| (f.header(), f.error_message()))
    }

    /// Runs every validator, including on fields that were never edited
    pub fn validate_all(&mut self) -> bool {
        for field in self.fields.iter_mut() {
            field.revalidate();
        }
        self.is_valid()
    }
}

impl From<&FieldConfig> for ValidatedField {
    fn from(config: &FieldConfig) -> Self {
        let field = ValidatedField::new()
            .with_header(config.header.as_str())
            .with_placeholder(config.placeholder.as_str());

        match config.validator {
            Some(kind) => field.with_validator(kind.build_with_message(config.message.clone())),
            None => field,
        }
    }
}

impl From<&FormConfig> for Form {
    fn from(config: &FormConfig) -> Self {
        Self {
            title: config.title.clone(),
            fields: config.fields.iter().map(ValidatedField::from).collect(),
        }
    }
}
