// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{AvatarId, AvatarUrl, EmailAddress, ParticipantId};

/// The inputs an avatar URL is resolved from. All fields are optional, an empty string is treated
/// the same as a missing value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvatarOptions {
    pub avatar_id: Option<AvatarId>,
    pub avatar_url: Option<AvatarUrl>,
    pub email: Option<EmailAddress>,
    pub participant_id: Option<ParticipantId>,
}

impl AvatarOptions {
    pub fn with_avatar_id(mut self, avatar_id: impl Into<AvatarId>) -> Self {
        self.avatar_id = Some(avatar_id.into());
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<AvatarUrl>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<EmailAddress>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_participant_id(mut self, participant_id: impl Into<ParticipantId>) -> Self {
        self.participant_id = Some(participant_id.into());
        self
    }
}
