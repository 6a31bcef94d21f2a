// meet-core-client/meet-utils
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Declares a newtype around `String` for identifiers like participant or avatar ids.
///
/// The generated type (de)serializes as a plain string, converts from anything that is
/// `Into<String>` and can be used as `&str` via `AsRef` or `Borrow`, so it works as a `HashMap`
/// key looked up by `&str`. Parsing never fails. Attributes placed before the type name, doc
/// comments included, are forwarded to the struct.
///
/// An empty identifier is representable, callers decide whether it counts as missing.
#[macro_export]
macro_rules! id_string {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Eq, PartialEq, Hash, Clone, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $t(String);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> String {
                self.0
            }

            #[allow(dead_code)]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            #[allow(dead_code)]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl<T> From<T> for $t
        where
            T: Into<String>,
        {
            fn from(s: T) -> $t {
                $t(s.into())
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl std::borrow::Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.to_string()))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    crate::id_string!(
        /// Identifier used by the tests below.
        SampleId
    );

    #[test]
    fn test_serializes_transparently() {
        let id = SampleId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
        assert_eq!(
            serde_json::from_str::<SampleId>(r#""abc""#).unwrap(),
            id
        );
    }

    #[test]
    fn test_borrows_as_str_key() {
        let map = std::collections::HashMap::from([(SampleId::from("abc"), 1)]);
        assert_eq!(map.get("abc"), Some(&1));
        assert_eq!(map.get("xyz"), None);
    }

    #[test]
    fn test_conversions() {
        let id: SampleId = "xyz".parse().unwrap();
        assert_eq!(id.to_string(), "xyz");
        assert_eq!(id.as_ref(), "xyz");
        assert_eq!(id.as_str(), "xyz");
        assert!(!id.is_empty());
        assert!(SampleId::from("").is_empty());
        assert_eq!(id.into_inner(), "xyz".to_string());
    }
}
