// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConferenceCommandError {
    #[error("Unknown conference command '{0}'.")]
    UnknownCommand(String),
}
