pub struct Config {
    pub api_base_url: &'static str,
    pub poll_interval_ms: u32,
    pub storage_key: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            poll_interval_ms: 5_000,
            storage_key: "miradas_vote",
        }
    }
}

pub const CONFIG: Config = Config::new();
