//! User model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Study orientation for a user's practice sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyMode {
    /// The user produces the sign for a given gloss
    Expressive,
    /// The user reads a sign and names the gloss
    Receptive,
}

impl Default for StudyMode {
    fn default() -> Self {
        StudyMode::Receptive
    }
}

impl StudyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyMode::Expressive => "expressive",
            StudyMode::Receptive => "receptive",
        }
    }
}

impl FromStr for StudyMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "expressive" => Ok(StudyMode::Expressive),
            "receptive" => Ok(StudyMode::Receptive),
            _ => Err(()),
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub email_confirmed: bool,
    /// Ordered list of owned deck ids
    pub decks: Vec<Uuid>,
    /// Must be one of `decks`, or unset
    pub current_deck: Option<Uuid>,
    pub current_mode: StudyMode,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User as returned over the wire, without the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub email: String,
    pub is_admin: bool,
    pub email_confirmed: bool,
    pub decks: Vec<Uuid>,
    pub current_deck: Option<Uuid>,
    pub current_mode: StudyMode,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        UserView {
            id: user.id,
            email: user.email,
            is_admin: user.is_admin,
            email_confirmed: user.email_confirmed,
            decks: user.decks,
            current_deck: user.current_deck,
            current_mode: user.current_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_study_mode_round_trip() {
        assert_eq!("expressive".parse(), Ok(StudyMode::Expressive));
        assert_eq!("receptive".parse(), Ok(StudyMode::Receptive));
        assert_eq!(StudyMode::Expressive.as_str(), "expressive");
        assert_eq!(StudyMode::Receptive.as_str(), "receptive");
    }

    #[test]
    fn test_study_mode_rejects_unknown_values() {
        assert!("EXPRESSIVE".parse::<StudyMode>().is_err());
        assert!("passive".parse::<StudyMode>().is_err());
        assert!("".parse::<StudyMode>().is_err());
    }

    #[test]
    fn test_study_mode_defaults_to_receptive() {
        assert_eq!(StudyMode::default(), StudyMode::Receptive);
    }

    #[test]
    fn test_user_view_drops_the_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "bob@example.com".to_string(),
            password_hash: "secret".to_string(),
            is_admin: false,
            email_confirmed: false,
            decks: vec![],
            current_deck: None,
            current_mode: StudyMode::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(UserView::from(user)).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["currentMode"], "receptive");
    }
}
