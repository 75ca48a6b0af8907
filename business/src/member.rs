//! Member record served by the members endpoint.
//!
//! A member is pure data. Anything the table renders next to it (checkbox,
//! edit and delete buttons) is decided by the view from the member id and is
//! never stored here.

use std::fmt;

use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// Stable row identity of a member.
///
/// Ids are compared and copied into selection sets on every frame, so they are
/// interned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(Ustr);

impl MemberId {
    pub fn new(id: &str) -> Self {
        Self(Ustr::from(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user entry as returned by the members endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Value of an editable column.
    pub fn field(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Email => &self.email,
            MemberField::Role => &self.role,
        }
    }

    pub fn set_field(&mut self, field: MemberField, value: String) {
        match field {
            MemberField::Name => self.name = value,
            MemberField::Email => self.email = value,
            MemberField::Role => self.role = value,
        }
    }
}

/// Editable data columns of the members table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MemberField {
    Name,
    Email,
    Role,
}

impl MemberField {
    /// Data columns in display order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Role];

    /// Column key, matching the JSON field name.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Role => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_record() {
        let member: Member = serde_json::from_str(
            r#"{"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}"#,
        )
        .expect("member should deserialize");

        assert_eq!(member.id.as_str(), "1");
        assert_eq!(member.name, "Aaron Miles");
        assert_eq!(member.email, "aaron@mailinator.com");
        assert_eq!(member.role, "member");
    }

    #[test]
    fn rejects_numeric_id() {
        let result = serde_json::from_str::<Member>(
            r#"{"id":1,"name":"Aaron","email":"a@x.com","role":"member"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn field_accessors_follow_column_keys() {
        let mut member = Member::new("7", "Alice", "a@x.com", "admin");

        assert_eq!(member.field(MemberField::Email), "a@x.com");

        member.set_field(MemberField::Role, "owner".to_owned());
        assert_eq!(member.role, "owner");

        let keys: Vec<_> = MemberField::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys, ["name", "email", "role"]);
    }

    #[test]
    fn ids_with_same_text_are_equal() {
        assert_eq!(MemberId::new("42"), MemberId::from("42"));
        assert_ne!(MemberId::new("42"), MemberId::new("43"));
    }
}
