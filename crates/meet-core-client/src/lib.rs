// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{AvatarConfig, ConferenceConfig, DigestProvider, InterfaceConfig, Md5DigestProvider};
pub use app::services::participant_lookup::{
    find_local_participant, find_participant_by_id, local_participant_from_state,
    participant_by_id_from_state,
};
pub use app::state::{AppState, GetState};
pub use domain::avatars::services::{resolve_avatar_url, AvatarUrlResolver};

pub mod app;
pub mod domain;

pub(crate) mod util;
