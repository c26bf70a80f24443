use crate::models::{NewNote, NoteTag};
use std::borrow::Cow;
use std::str::FromStr;
use validator::{Validate, ValidationError, ValidationErrors};

pub(crate) const TITLE_MIN_CHARS: usize = 3;
pub(crate) const TITLE_MAX_CHARS: usize = 50;
pub(crate) const CONTENT_MAX_CHARS: usize = 500;

fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if len == 0 {
        Err(error("required", "Title is required"))
    } else if len < TITLE_MIN_CHARS {
        Err(error("min", "Title must be at least 3 characters"))
    } else if len > TITLE_MAX_CHARS {
        Err(error("max", "Title must be at most 50 characters"))
    } else {
        Ok(())
    }
}

fn validate_tag(tag: &str) -> Result<(), ValidationError> {
    if tag.is_empty() {
        return Err(error("required", "Tag is required"));
    }
    NoteTag::from_str(tag)
        .map(|_| ())
        .map_err(|_| error("one_of", "Invalid tag"))
}

/// Raw values of the "create note" form, exactly as typed.
///
/// `tag` stays a string because the select starts on an empty "Select tag" option.
#[derive(Clone, Debug, Default, PartialEq, Eq, Validate)]
pub(crate) struct NoteFormValues {
    #[validate(custom(function = "validate_title"))]
    pub title: String,

    #[validate(length(max = 500, message = "Content must be at most 500 characters"))]
    pub content: String,

    #[validate(custom(function = "validate_tag"))]
    pub tag: String,
}

/// First error message per field, ready to render under the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag.is_none()
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut out = FieldErrors::default();
        for (field, errs) in errors.field_errors() {
            let message = errs.first().map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            });
            let name: &str = field.as_ref();
            match name {
                "title" => out.title = message,
                "content" => out.content = message,
                "tag" => out.tag = message,
                _ => {}
            }
        }
        out
    }
}

impl NoteFormValues {
    /// Validates the form and builds the request payload. Nothing here touches
    /// the network; an `Err` means the submit must not happen.
    pub fn to_new_note(&self) -> Result<NewNote, FieldErrors> {
        self.validate().map_err(|e| FieldErrors::from(&e))?;

        let tag = NoteTag::from_str(&self.tag).map_err(|_| FieldErrors {
            tag: Some("Invalid tag".to_string()),
            ..Default::default()
        })?;

        Ok(NewNote {
            title: self.title.clone(),
            content: self.content.clone(),
            tag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(title: &str, content: &str, tag: &str) -> NoteFormValues {
        NoteFormValues {
            title: title.to_string(),
            content: content.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_payload() {
        let note = values("Buy milk", "2 liters", "Shopping")
            .to_new_note()
            .expect("form should be valid");
        assert_eq!(note.title, "Buy milk");
        assert_eq!(note.content, "2 liters");
        assert_eq!(note.tag, NoteTag::Shopping);
    }

    #[test]
    fn test_short_title() {
        let errors = values("ab", "", "Todo").to_new_note().expect_err("title too short");
        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be at least 3 characters")
        );
        assert!(errors.content.is_none());
        assert!(errors.tag.is_none());
    }

    #[test]
    fn test_missing_title_and_tag() {
        let errors = NoteFormValues::default().to_new_note().expect_err("empty form");
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.tag.as_deref(), Some("Tag is required"));
        assert!(errors.content.is_none());
    }

    #[test]
    fn test_title_length_bounds() {
        assert!(values(&"a".repeat(3), "", "Work").to_new_note().is_ok());
        assert!(values(&"a".repeat(50), "", "Work").to_new_note().is_ok());

        let errors = values(&"a".repeat(51), "", "Work")
            .to_new_note()
            .expect_err("title too long");
        assert_eq!(
            errors.title.as_deref(),
            Some("Title must be at most 50 characters")
        );
    }

    #[test]
    fn test_title_length_counts_characters() {
        // 3 characters, 9 bytes.
        assert!(values("日本語", "", "Personal").to_new_note().is_ok());
    }

    #[test]
    fn test_content_is_optional_but_bounded() {
        assert!(values("Title", "", "Meeting").to_new_note().is_ok());
        assert!(values("Title", &"x".repeat(500), "Meeting").to_new_note().is_ok());

        let errors = values("Title", &"x".repeat(501), "Meeting")
            .to_new_note()
            .expect_err("content too long");
        assert_eq!(
            errors.content.as_deref(),
            Some("Content must be at most 500 characters")
        );
    }

    #[test]
    fn test_unknown_tag() {
        let errors = values("Title", "", "Holiday").to_new_note().expect_err("bad tag");
        assert_eq!(errors.tag.as_deref(), Some("Invalid tag"));
    }

    #[test]
    fn test_field_errors_is_empty() {
        assert!(FieldErrors::default().is_empty());
        let errors = values("", "", "Todo").to_new_note().expect_err("no title");
        assert!(!errors.is_empty());
    }
}
