// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::avatars::models::AvatarOptions;
use crate::util::OptionStringExt;

use super::{ConferenceCommand, ConferenceCommandError};

/// A conference command together with the value it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantCommand {
    pub command: ConferenceCommand,
    pub value: String,
}

impl ParticipantCommand {
    pub fn new(command: ConferenceCommand, value: impl Into<String>) -> Self {
        Self {
            command,
            value: value.into(),
        }
    }

    pub fn parse(name: &str, value: impl Into<String>) -> Result<Self, ConferenceCommandError> {
        let command = ConferenceCommand::from_str(name)
            .map_err(|_: strum::ParseError| {
            ConferenceCommandError::UnknownCommand(name.to_string())
        })?;
        Ok(Self::new(command, value))
    }

    /// The commands announcing the avatar identity in `options`. Missing or empty fields are
    /// skipped.
    pub fn for_avatar_options(options: &AvatarOptions) -> Vec<Self> {
        [
            (ConferenceCommand::AvatarUrl, options.avatar_url.non_empty()),
            (ConferenceCommand::Email, options.email.non_empty()),
            (ConferenceCommand::AvatarId, options.avatar_id.non_empty()),
        ]
        .into_iter()
        .filter_map(|(command, value)| value.map(|value| Self::new(command, value)))
        .collect()
    }

    /// Returns a copy of `options` updated with this command's value. An empty value clears
    /// the corresponding field.
    pub fn apply_to(&self, options: &AvatarOptions) -> AvatarOptions {
        let value = Some(self.value.as_str()).filter(|value| !value.is_empty());
        let mut options = options.clone();

        match self.command {
            ConferenceCommand::AvatarId => options.avatar_id = value.map(Into::into),
            ConferenceCommand::AvatarUrl => options.avatar_url = value.map(Into::into),
            ConferenceCommand::Email => options.email = value.map(Into::into),
        }

        options
    }
}
