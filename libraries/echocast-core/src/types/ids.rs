//! ID types for Echocast entities
//!
//! String-backed newtypes so a track ID can never be passed where a user ID
//! belongs. All three share the same shape, so a macro stamps them out.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[cfg(feature = "sqlx-support")]
use sqlx::{
    encode::IsNull,
    error::BoxDynError,
    sqlite::{SqliteArgumentValue, SqliteTypeInfo, SqliteValueRef},
    Decode, Encode, Sqlite, Type,
};

macro_rules! entity_id {
    ($(#[$docs:meta])* $name:ident) => {
        $(#[$docs])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh random identifier
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the inner string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        // Stored as plain TEXT; delegate everything to String
        #[cfg(feature = "sqlx-support")]
        impl Type<Sqlite> for $name {
            fn type_info() -> SqliteTypeInfo {
                <String as Type<Sqlite>>::type_info()
            }
        }

        #[cfg(feature = "sqlx-support")]
        impl<'q> Encode<'q, Sqlite> for $name {
            fn encode_by_ref(
                &self,
                args: &mut Vec<SqliteArgumentValue<'q>>,
            ) -> Result<IsNull, BoxDynError> {
                <String as Encode<Sqlite>>::encode_by_ref(&self.0, args)
            }
        }

        #[cfg(feature = "sqlx-support")]
        impl<'r> Decode<'r, Sqlite> for $name {
            fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
                let s = <String as Decode<Sqlite>>::decode(value)?;
                Ok($name(s))
            }
        }
    };
}

entity_id! {
    /// User identifier
    UserId
}

entity_id! {
    /// Track identifier
    TrackId
}

entity_id! {
    /// Playlist identifier
    PlaylistId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_generation_creates_unique_ids() {
        let id1 = UserId::generate();
        let id2 = UserId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn track_id_from_string() {
        let id = TrackId::new("track-123");
        assert_eq!(id.as_str(), "track-123");
    }

    #[test]
    fn playlist_id_display() {
        let id = PlaylistId::new("playlist-456");
        assert_eq!(format!("{}", id), "playlist-456");
    }
}
