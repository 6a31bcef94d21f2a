// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use avatar_url_resolver::{
    resolve_avatar_url, AvatarUrlResolver, ADORABLE_AVATAR_URL_PREFIX,
    ADORABLE_AVATAR_URL_SUFFIX, GRAVATAR_URL_PREFIX, GRAVATAR_URL_SUFFIX, LOCAL_FALLBACK_AVATAR,
};

mod avatar_url_resolver;
