// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use avatar_kind::AvatarKind;
pub use avatar_options::AvatarOptions;

mod avatar_kind;
mod avatar_options;
