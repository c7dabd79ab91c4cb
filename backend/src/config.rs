pub const DATABASE_URL_KEY: &str = "DATABASE_URL";
pub const DATABASE_URL_FALLBACK_KEY: &str = "POSTGRES_URL";
pub const STORE_KIND_KEY: &str = "TALLY_STORE";

/// Where the tally lives, as chosen by secrets or the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreSettings {
    Postgres(String),
    Memory,
    Unconfigured,
}

impl StoreSettings {
    /// `TALLY_STORE=memory` wins; otherwise the first non-blank database URL is used.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if get(STORE_KIND_KEY).is_some_and(|kind| kind.trim().eq_ignore_ascii_case("memory")) {
            return StoreSettings::Memory;
        }

        match get(DATABASE_URL_KEY).or_else(|| get(DATABASE_URL_FALLBACK_KEY)) {
            Some(url) => StoreSettings::Postgres(url),
            None => StoreSettings::Unconfigured,
        }
    }
}
