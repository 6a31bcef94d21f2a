// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app_state::{AppState, PARTICIPANTS_STATE_KEY};
pub use get_state::GetState;

mod app_state;
mod get_state;
