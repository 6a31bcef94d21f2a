// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use meet_utils::id_string;

id_string!(
    /// Identifies a participant within a conference. Unique within a conference by convention,
    /// which is not enforced anywhere.
    ParticipantId
);
