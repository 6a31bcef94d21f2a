// meet-core-client/meet-core-client
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub trait StringExt {
    /// Trims surrounding whitespace and lowercases the result.
    fn to_normalized_seed(&self) -> String;
}

impl<T> StringExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn to_normalized_seed(&self) -> String {
        self.as_ref().trim().to_lowercase()
    }
}

pub trait OptionStringExt {
    /// Returns the contained string unless it's missing or empty.
    fn non_empty(&self) -> Option<&str>;
}

impl<T> OptionStringExt for Option<T>
where
    T: AsRef<str>,
{
    fn non_empty(&self) -> Option<&str> {
        self.as_ref()
            .map(|value| value.as_ref())
            .filter(|value| !value.is_empty())
    }
}
