use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Named collections persisted by the store, one JSON array per key.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Collection {
    Users,
    Tasks,
    Projects,
    Tables,
    Docs,
    Folders,
    Meetings,
    Activity,
    Statuses,
    Priorities,
}

impl Collection {
    pub fn key(self) -> &'static str {
        self.into()
    }
}

/// Single-value keys that live next to the collections.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ScalarKey {
    Theme,
    Session,
}

impl ScalarKey {
    pub fn key(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn keys_are_lowercase_names() {
        assert_eq!(Collection::Statuses.key(), "statuses");
        assert_eq!(ScalarKey::Session.key(), "session");
        assert_eq!(Collection::iter().count(), 10);
    }
}
