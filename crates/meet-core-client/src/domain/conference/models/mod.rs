// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use conference_command::{ConferenceCommand, AVATAR_ID, AVATAR_URL, EMAIL_COMMAND};
pub use conference_command_error::ConferenceCommandError;
pub use participant_command::ParticipantCommand;

mod conference_command;
mod conference_command_error;
mod participant_command;
