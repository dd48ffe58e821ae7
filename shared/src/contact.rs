use serde::{Deserialize, Serialize};

use crate::error::ContactError;

pub const CONTACT_PROMPT_TITLE: &str = "Contact Options";
pub const CONTACT_PROMPT_MESSAGE: &str = "Choose an option";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactChoice {
    Call,
    Cancel,
}

impl ContactChoice {
    pub const ALL: [Self; 2] = [Self::Call, Self::Cancel];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Cancel => "Cancel",
        }
    }
}

/// The call-or-cancel question shown after a phone number is tapped.
///
/// Holds nothing beyond the number being asked about. A new tap replaces any
/// prompt still showing; repeated taps are not de-duplicated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactPrompt {
    phone_number: String,
}

impl ContactPrompt {
    /// Only emptiness is checked; the dialer rejects anything else it dislikes.
    pub fn request(phone_number: &str) -> Result<Self, ContactError> {
        let phone_number = phone_number.trim();
        if phone_number.is_empty() {
            return Err(ContactError::EmptyNumber);
        }
        Ok(Self {
            phone_number: phone_number.to_owned(),
        })
    }

    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Consumes the prompt. `Some(uri)` is the one launch to dispatch.
    #[must_use]
    pub fn resolve(self, choice: ContactChoice) -> Option<String> {
        match choice {
            ContactChoice::Call => Some(tel_uri(&self.phone_number)),
            ContactChoice::Cancel => None,
        }
    }
}

#[must_use]
pub fn tel_uri(phone_number: &str) -> String {
    format!("tel:{phone_number}")
}
