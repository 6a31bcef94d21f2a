// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::state::GetState;
use crate::domain::participants::models::Participant;
use crate::domain::shared::models::ParticipantId;

/// Returns the first participant representing the user of this client.
pub fn find_local_participant(participants: &[Participant]) -> Option<&Participant> {
    participants.iter().find(|participant| participant.local)
}

/// Returns the first participant with the given id.
pub fn find_participant_by_id<'a>(
    participants: &'a [Participant],
    id: &ParticipantId,
) -> Option<&'a Participant> {
    participants.iter().find(|participant| &participant.id == id)
}

pub fn local_participant_from_state(get_state: &impl GetState) -> Option<Participant> {
    let state = get_state.get_state();
    find_local_participant(state.participants()).cloned()
}

pub fn participant_by_id_from_state(
    get_state: &impl GetState,
    id: &ParticipantId,
) -> Option<Participant> {
    let state = get_state.get_state();
    find_participant_by_id(state.participants(), id).cloned()
}
