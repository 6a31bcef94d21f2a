// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The command type for updating a participant's avatar id.
pub const AVATAR_ID: &str = "avatar-id";

/// The command type for updating a participant's avatar URL.
pub const AVATAR_URL: &str = "avatar-url";

/// The command type for updating a participant's email address.
pub const EMAIL_COMMAND: &str = "email";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
/// Commands a participant broadcasts to the conference when their avatar identity changes.
pub enum ConferenceCommand {
    AvatarId,
    AvatarUrl,
    Email,
}

impl ConferenceCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ConferenceCommand::AvatarId => AVATAR_ID,
            ConferenceCommand::AvatarUrl => AVATAR_URL,
            ConferenceCommand::Email => EMAIL_COMMAND,
        }
    }
}
