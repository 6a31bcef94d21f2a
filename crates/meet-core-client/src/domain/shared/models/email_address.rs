// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use meet_utils::id_string;

id_string!(
    /// A participant's email address as announced by the participant. Not validated.
    EmailAddress
);
