// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::participants::models::Participant;

/// Key of the participants slice within the app state.
pub const PARTICIPANTS_STATE_KEY: &str = "features/base/participants";

/// Snapshot of the client's application state. Only the participants slice is typed, all other
/// slices are kept as they are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    #[serde(
        rename = "features/base/participants",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    participants: Option<Vec<Participant>>,
    #[serde(flatten)]
    slices: Map<String, Value>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_participants(mut self, participants: impl IntoIterator<Item = Participant>) -> Self {
        self.participants = Some(participants.into_iter().collect());
        self
    }

    /// The participants in the order they're stored in. Empty if the state doesn't contain a
    /// participants slice.
    pub fn participants(&self) -> &[Participant] {
        self.participants.as_deref().unwrap_or_default()
    }

    pub fn slice(&self, key: &str) -> Option<&Value> {
        self.slices.get(key)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_participants_slice_is_empty() -> Result<()> {
        assert!(AppState::from_json("{}")?.participants().is_empty());
        assert!(AppState::from_json(r#"{ "features/base/participants": null }"#)?
            .participants()
            .is_empty());
        assert!(AppState::new().participants().is_empty());
        Ok(())
    }

    #[test]
    fn test_parses_participants_and_keeps_other_slices() -> Result<()> {
        let state = AppState::from_json(
            r#"{
                "features/base/participants": [
                    { "id": "p-1", "local": true },
                    { "id": "p-2", "email": "jane@example.org" }
                ],
                "features/base/config": { "disableThirdPartyRequests": false }
            }"#,
        )?;

        assert_eq!(
            state.participants(),
            &[
                Participant::local("p-1"),
                Participant::new("p-2").with_email("jane@example.org")
            ]
        );
        assert_eq!(
            state.slice("features/base/config"),
            Some(&json!({ "disableThirdPartyRequests": false }))
        );
        assert_eq!(state.slice(PARTICIPANTS_STATE_KEY), None);
        Ok(())
    }

    #[test]
    fn test_serializes_participants_under_state_key() -> Result<()> {
        let state = AppState::new().with_participants([Participant::new("p-1")]);
        let value = serde_json::to_value(&state)?;

        assert_eq!(
            value,
            json!({ PARTICIPANTS_STATE_KEY: [{ "id": "p-1", "local": false }] })
        );
        Ok(())
    }
}
