// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::AppState;

/// Gives access to the current application state.
pub trait GetState {
    fn get_state(&self) -> AppState;
}

impl<F> GetState for F
where
    F: Fn() -> AppState,
{
    fn get_state(&self) -> AppState {
        self()
    }
}
