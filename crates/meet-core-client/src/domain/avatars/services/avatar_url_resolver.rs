// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use tracing::{debug, trace};

use crate::app::deps::{AvatarConfig, DigestProvider, DynDigestProvider, Md5DigestProvider};
use crate::domain::avatars::models::{AvatarKind, AvatarOptions};
use crate::domain::participants::models::Participant;
use crate::domain::shared::models::AvatarUrl;
use crate::util::{OptionStringExt, StringExt};

/// Bundled image used when third-party requests are disabled.
pub const LOCAL_FALLBACK_AVATAR: &str = "images/avatar2.png";

pub const GRAVATAR_URL_PREFIX: &str = "https://www.gravatar.com/avatar/";
pub const GRAVATAR_URL_SUFFIX: &str = "?d=wavatar&size=200";

pub const ADORABLE_AVATAR_URL_PREFIX: &str = "https://api.adorable.io/avatars/200/";
pub const ADORABLE_AVATAR_URL_SUFFIX: &str = ".png";

/// Computes the URL of a participant's avatar image.
#[derive(Clone)]
pub struct AvatarUrlResolver {
    config: AvatarConfig,
    digest_provider: DynDigestProvider,
}

impl AvatarUrlResolver {
    pub fn new(config: AvatarConfig, digest_provider: DynDigestProvider) -> Self {
        Self {
            config,
            digest_provider,
        }
    }

    /// A resolver which derives the avatar path from the MD5 digest of the seed.
    pub fn with_md5(config: AvatarConfig) -> Self {
        Self::new(config, Arc::new(Md5DigestProvider::new()))
    }
}

impl AvatarUrlResolver {
    /// Returns the avatar URL for `options` or `None` if neither an avatar URL, email, avatar id
    /// nor participant id is available.
    pub fn resolve(&self, options: &AvatarOptions) -> Option<AvatarUrl> {
        self.resolve_with_kind(options).map(|(url, _)| url)
    }

    pub fn resolve_for_participant(&self, participant: &Participant) -> Option<AvatarUrl> {
        self.resolve(&participant.avatar_options())
    }

    /// Like `resolve` but also returns the scheme the URL was built with.
    ///
    /// Resolution order:
    /// 1. Disabled third-party requests always yield `LOCAL_FALLBACK_AVATAR`.
    /// 2. An explicit avatar URL is returned as is.
    /// 3. The email, or else the avatar id, is the seed. It yields a gravatar URL if it contains
    ///    an '@' and a random avatar otherwise. If neither is available, the participant id is
    ///    the seed of a random avatar.
    /// 4. Random avatars use the configured random avatar service, if any, or adorable.
    #[tracing::instrument(skip(self))]
    pub fn resolve_with_kind(&self, options: &AvatarOptions) -> Option<(AvatarUrl, AvatarKind)> {
        if self.config.conference.disable_third_party_requests {
            debug!("Third-party requests are disabled. Using local avatar.");
            return Some((
                AvatarUrl::from(LOCAL_FALLBACK_AVATAR),
                AvatarKind::LocalFallback,
            ));
        }

        if let Some(avatar_url) = options.avatar_url.non_empty() {
            return Some((AvatarUrl::from(avatar_url), AvatarKind::Explicit));
        }

        let seed = options
            .email
            .non_empty()
            .or_else(|| options.avatar_id.non_empty());
        let is_random = !seed.is_some_and(|seed| seed.contains('@'));

        // The participant id only ever seeds a random avatar.
        let Some(seed) = seed.or_else(|| options.participant_id.non_empty()) else {
            debug!("Cannot determine avatar without any identifying information.");
            return None;
        };

        let digest = self.digest_provider.hex_digest(&seed.to_normalized_seed());
        let (kind, prefix, suffix) = self.url_scheme(is_random);
        trace!("Resolved {} avatar.", kind);

        Some((AvatarUrl::from(format!("{prefix}{digest}{suffix}")), kind))
    }

    fn url_scheme(&self, is_random: bool) -> (AvatarKind, &str, &str) {
        if !is_random {
            return (AvatarKind::Gravatar, GRAVATAR_URL_PREFIX, GRAVATAR_URL_SUFFIX);
        }

        let interface = &self.config.interface;
        match interface.random_avatar_url_prefix.non_empty() {
            // A missing suffix is appended as an empty string, not as a literal "undefined".
            Some(prefix) => (
                AvatarKind::CustomRandom,
                prefix,
                interface.random_avatar_url_suffix.as_deref().unwrap_or(""),
            ),
            None => (
                AvatarKind::Adorable,
                ADORABLE_AVATAR_URL_PREFIX,
                ADORABLE_AVATAR_URL_SUFFIX,
            ),
        }
    }
}

/// Resolves the avatar URL for `options` using the MD5 digest.
pub fn resolve_avatar_url(options: &AvatarOptions, config: &AvatarConfig) -> Option<AvatarUrl> {
    AvatarUrlResolver::with_md5(config.clone()).resolve(options)
}
