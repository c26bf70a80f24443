use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Closed set of tags the NoteHub backend accepts.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
pub(crate) enum NoteTag {
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
    pub created_at: String,
    // Not part of the documented contract, but the backend sends it.
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// One page of the `GET /notes` listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NoteListResponse {
    pub notes: Vec<Note>,
    pub total_pages: u32,
}

impl NoteListResponse {
    /// The backend reports 0 pages for an empty result; the UI always has at least one.
    pub fn total_pages(&self) -> u32 {
        self.total_pages.max(1)
    }
}

/// Payload of `POST /notes`. Only ever built from a validated form.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub(crate) struct NewNote {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_note_contract_deserialize() {
        let json = r#"{
            "id": "65f1c0",
            "title": "Groceries",
            "content": "milk, eggs",
            "tag": "Shopping",
            "createdAt": "2025-01-02T10:00:00.000Z",
            "updatedAt": "2025-01-02T10:00:00.000Z"
        }"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(note.id, "65f1c0");
        assert_eq!(note.tag, NoteTag::Shopping);
        assert_eq!(note.created_at, "2025-01-02T10:00:00.000Z");
        assert!(note.updated_at.is_some());
    }

    #[test]
    fn test_note_without_content_or_updated_at() {
        let json = r#"{"id":"1","title":"t","tag":"Todo","createdAt":"x"}"#;
        let note: Note = serde_json::from_str(json).expect("note should parse");
        assert_eq!(note.content, "");
        assert!(note.updated_at.is_none());
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let json = r#"{"id":"1","title":"t","content":"","tag":"Holiday","createdAt":"x"}"#;
        assert!(serde_json::from_str::<Note>(json).is_err());
    }

    #[test]
    fn test_list_response_contract_deserialize() {
        let json = r#"{"notes": [], "totalPages": 0}"#;
        let parsed: NoteListResponse = serde_json::from_str(json).expect("list should parse");
        assert!(parsed.notes.is_empty());
        assert_eq!(parsed.total_pages, 0);
        assert_eq!(parsed.total_pages(), 1);
    }

    #[test]
    fn test_new_note_serialization() {
        let v = serde_json::to_value(NewNote {
            title: "Standup".to_string(),
            content: String::new(),
            tag: NoteTag::Meeting,
        })
        .expect("should serialize");
        assert_eq!(v["title"], "Standup");
        assert_eq!(v["tag"], "Meeting");
        assert_eq!(v["content"], "");
    }

    #[test]
    fn test_tag_string_forms() {
        assert_eq!(NoteTag::Personal.to_string(), "Personal");
        assert_eq!(NoteTag::from_str("Work").ok(), Some(NoteTag::Work));
        assert!(NoteTag::from_str("work").is_err());
        assert_eq!(NoteTag::iter().count(), 5);
    }
}
