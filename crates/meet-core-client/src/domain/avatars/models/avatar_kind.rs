// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

/// The scheme an avatar URL was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum AvatarKind {
    /// Third-party requests are disabled, a bundled image is used instead.
    LocalFallback,
    /// The participant announced an avatar URL.
    Explicit,
    /// Identity-keyed avatar derived from an email address.
    Gravatar,
    /// Random avatar served by the configured random avatar service.
    CustomRandom,
    /// Random avatar served by the default random avatar service.
    Adorable,
}

impl AvatarKind {
    /// Whether the avatar isn't correlated with the participant's identity.
    pub fn is_random(&self) -> bool {
        matches!(self, AvatarKind::CustomRandom | AvatarKind::Adorable)
    }
}
