use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

use super::repo::{Student, StudentPatch};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateStudent {
    pub student_id: i64,
    pub name: String,
    pub major: String,
    pub status: String,
}

/// Partial update payload. `student_id` is required but used only for
/// routing, never for mutation. Each remaining field is double-wrapped so
/// that a key that is absent from the JSON (outer `None`) is distinguishable
/// from a key set to `null` (inner `None`). Absent keys never touch the
/// stored row.
#[derive(Debug, Deserialize)]
pub struct UpdateStudent {
    pub student_id: i64,
    #[serde(default, deserialize_with = "explicit")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub major: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub status: Option<Option<String>>,
}

fn explicit<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateStudent {
    /// Flatten into a store patch. Explicit `null` is rejected: the columns
    /// are non-nullable, so "set to null" is a client error rather than a
    /// silent skip.
    pub fn into_patch(self) -> Result<StudentPatch, ApiError> {
        fn flatten(
            field: Option<Option<String>>,
            name: &str,
        ) -> Result<Option<String>, ApiError> {
            match field {
                Some(None) => Err(ApiError::BadRequest(format!("{name} must not be null"))),
                other => Ok(other.flatten()),
            }
        }

        Ok(StudentPatch {
            name: flatten(self.name, "name")?,
            major: flatten(self.major, "major")?,
            status: flatten(self.status, "status")?,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub student_id: i64,
    pub name: String,
    pub major: String,
    pub status: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            student_id: s.student_id,
            name: s.name,
            major: s.major,
            status: s.status,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_all_fields() {
        let err = serde_json::from_str::<CreateStudent>(
            r#"{"student_id": 1, "name": "Ann", "major": "CS"}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("status"));
    }

    #[test]
    fn update_requires_student_id() {
        let err =
            serde_json::from_str::<UpdateStudent>(r#"{"status": "graduated"}"#).unwrap_err();
        assert!(err.to_string().contains("student_id"));
    }

    #[test]
    fn update_distinguishes_omitted_from_set() {
        let upd: UpdateStudent =
            serde_json::from_str(r#"{"student_id": 1, "status": "graduated"}"#)
                .expect("deserialize");
        assert_eq!(upd.student_id, 1);
        assert!(upd.name.is_none());
        assert!(upd.major.is_none());
        assert_eq!(upd.status, Some(Some("graduated".into())));

        let patch = upd.into_patch().expect("patch");
        assert!(patch.name.is_none());
        assert!(patch.major.is_none());
        assert_eq!(patch.status.as_deref(), Some("graduated"));
    }

    #[test]
    fn update_distinguishes_omitted_from_null() {
        let upd: UpdateStudent =
            serde_json::from_str(r#"{"student_id": 1, "name": null}"#).expect("deserialize");
        assert_eq!(upd.name, Some(None));

        let err = upd.into_patch().unwrap_err();
        assert!(err.to_string().contains("name must not be null"));
    }

    #[test]
    fn id_only_update_is_an_empty_patch() {
        let upd: UpdateStudent =
            serde_json::from_str(r#"{"student_id": 1}"#).expect("deserialize");
        let patch = upd.into_patch().expect("patch");
        assert!(patch.name.is_none() && patch.major.is_none() && patch.status.is_none());
    }

    #[test]
    fn empty_string_is_a_set_value() {
        // "" is an explicit value, not an unset marker
        let upd: UpdateStudent =
            serde_json::from_str(r#"{"student_id": 1, "major": ""}"#).expect("deserialize");
        let patch = upd.into_patch().expect("patch");
        assert_eq!(patch.major.as_deref(), Some(""));
    }

    #[test]
    fn response_serializes_rfc3339_timestamps() {
        let s = Student {
            student_id: 1,
            name: "Ann".into(),
            major: "CS".into(),
            status: "active".into(),
            created_at: time::macros::datetime!(2024-01-02 03:04:05 UTC),
            updated_at: time::macros::datetime!(2024-01-02 03:04:05 UTC),
        };
        let json = serde_json::to_value(StudentResponse::from(s)).expect("serialize");
        assert_eq!(json["created_at"], "2024-01-02T03:04:05Z");
        assert_eq!(json["student_id"], 1);
    }
}
