// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use meet_utils::id_string;

id_string!(
    /// The avatar id a participant announces. Either an opaque token (which yields a random
    /// avatar) or something that looks like an email address.
    AvatarId
);

