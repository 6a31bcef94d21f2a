// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use avatar_id::AvatarId;
pub use avatar_url::AvatarUrl;
pub use email_address::EmailAddress;
pub use participant_id::ParticipantId;

mod avatar_id;
mod avatar_url;
mod email_address;
mod participant_id;
