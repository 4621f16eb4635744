//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Table receiving waitlist leads when `LEADS_TABLE` is unset
pub const DEFAULT_LEADS_TABLE: &str = "leads";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted store project
    /// Example: https://abcdefgh.supabase.co
    pub supabase_url: Option<String>,

    /// Public (anon) API key of the project
    pub supabase_anon_key: Option<String>,

    /// Table that receives waitlist leads
    pub leads_table: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            supabase_url: non_empty("SUPABASE_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            supabase_anon_key: non_empty("SUPABASE_ANON_KEY"),
            leads_table: non_empty("LEADS_TABLE")
                .unwrap_or_else(|| DEFAULT_LEADS_TABLE.to_string()),
        }
    }

    /// Check if the lead store is configured
    pub fn has_store(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_anon_key.is_some()
    }
}
