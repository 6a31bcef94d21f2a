// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::avatars::models::AvatarOptions;
use crate::domain::shared::models::{AvatarId, AvatarUrl, EmailAddress, ParticipantId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A member of a conference as stored in the participants slice of the app state.
pub struct Participant {
    pub id: ParticipantId,
    /// Whether this participant represents the user of this client.
    #[serde(default)]
    pub local: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<AvatarId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<AvatarUrl>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>) -> Self {
        Self {
            id: id.into(),
            local: false,
            name: None,
            avatar_id: None,
            avatar_url: None,
            email: None,
        }
    }

    pub fn local(id: impl Into<ParticipantId>) -> Self {
        Self {
            local: true,
            ..Self::new(id)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

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
}

impl Participant {
    /// Collects the fields the avatar URL is derived from.
    pub fn avatar_options(&self) -> AvatarOptions {
        AvatarOptions {
            avatar_id: self.avatar_id.clone(),
            avatar_url: self.avatar_url.clone(),
            email: self.email.clone(),
            participant_id: Some(self.id.clone()),
        }
    }
}
