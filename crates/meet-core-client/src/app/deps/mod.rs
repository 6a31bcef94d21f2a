// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use avatar_config::{AvatarConfig, ConferenceConfig, InterfaceConfig};
pub use digest_provider::{DigestProvider, DynDigestProvider, Md5DigestProvider};

mod avatar_config;
mod digest_provider;
