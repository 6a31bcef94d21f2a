// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use meet_utils::id_string;

id_string!(
    /// URL of an avatar image. Explicit avatar URLs are kept verbatim, so this isn't
    /// necessarily a well-formed URL.
    AvatarUrl
);
