// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use md5::{Digest, Md5};

/// Maps a string to a fixed-length lowercase hexadecimal digest.
pub trait DigestProvider: Send + Sync {
    fn hex_digest(&self, input: &str) -> String;
}

pub type DynDigestProvider = Arc<dyn DigestProvider>;

#[derive(Debug, Default, Clone, Copy)]
pub struct Md5DigestProvider {}

impl Md5DigestProvider {
    pub fn new() -> Self {
        Md5DigestProvider {}
    }
}

impl DigestProvider for Md5DigestProvider {
    fn hex_digest(&self, input: &str) -> String {
        let mut hasher = Md5::new();
        hasher.update(input.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

impl DigestProvider for Arc<dyn DigestProvider> {
    fn hex_digest(&self, input: &str) -> String {
        self.deref().hex_digest(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex_digest() {
        let provider = Md5DigestProvider::new();

        assert_eq!(
            provider.hex_digest(""),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
        assert_eq!(
            provider.hex_digest("abc123"),
            "e99a18c428cb38d5f260853678922e03"
        );
        assert_eq!(
            provider.hex_digest("foo@bar.com"),
            "f3ada405ce890b6f8204094deb12d8a8"
        );
    }

    #[test]
    fn test_dyn_provider_delegates() {
        let provider: DynDigestProvider = Arc::new(Md5DigestProvider::new());
        assert_eq!(provider.hex_digest("abc").len(), 32);
        assert_eq!(
            provider.hex_digest("abc"),
            "900150983cd24fb0d6963f7d28e17f72"
        );
    }
}
