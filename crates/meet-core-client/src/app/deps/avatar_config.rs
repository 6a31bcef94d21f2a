// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Conference-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConferenceConfig {
    /// When set, no avatar is ever requested from a third-party service.
    pub disable_third_party_requests: bool,
}

/// Settings of the user interface that affect how avatars are displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterfaceConfig {
    /// Prefix of the service serving random avatars. The avatar's digest is appended to it.
    #[serde(
        rename = "RANDOM_AVATAR_URL_PREFIX",
        skip_serializing_if = "Option::is_none"
    )]
    pub random_avatar_url_prefix: Option<String>,
    /// Appended after the avatar's digest when `random_avatar_url_prefix` is used.
    #[serde(
        rename = "RANDOM_AVATAR_URL_SUFFIX",
        skip_serializing_if = "Option::is_none"
    )]
    pub random_avatar_url_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvatarConfig {
    pub conference: ConferenceConfig,
    pub interface: InterfaceConfig,
}

impl ConferenceConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl InterfaceConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_random_avatar_url(
        prefix: impl Into<String>,
        suffix: Option<impl Into<String>>,
    ) -> Self {
        Self {
            random_avatar_url_prefix: Some(prefix.into()),
            random_avatar_url_suffix: suffix.map(Into::into),
        }
    }
}

impl AvatarConfig {
    pub fn new(conference: ConferenceConfig, interface: InterfaceConfig) -> Self {
        Self {
            conference,
            interface,
        }
    }

    /// Builds the config from the JSON representations of both config objects. A part that
    /// cannot be parsed is treated as absent and replaced by its defaults.
    pub fn from_json_parts(conference: &str, interface: &str) -> Self {
        let conference = ConferenceConfig::from_json(conference).unwrap_or_else(|err| {
            warn!("Ignoring malformed conference config. {}", err.to_string());
            ConferenceConfig::default()
        });
        let interface = InterfaceConfig::from_json(interface).unwrap_or_else(|err| {
            warn!("Ignoring malformed interface config. {}", err.to_string());
            InterfaceConfig::default()
        });

        Self::new(conference, interface)
    }
}
