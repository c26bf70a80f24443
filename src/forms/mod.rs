mod note;

pub(crate) use note::{FieldErrors, NoteFormValues, CONTENT_MAX_CHARS, TITLE_MAX_CHARS};
