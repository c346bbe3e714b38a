/// Default listen address when `BIND_ADDR` is not set
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default number of swatches per family on the swatch page
pub const DEFAULT_SWATCHES: usize = 4;

/// Runtime configuration read from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP server binds to (`BIND_ADDR`)
    pub bind_addr: String,

    /// Seed for the shared random source (`SHADES_SEED`).
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Swatches per family on the swatch page (`SHADES_SWATCHES`)
    pub swatches: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            seed: None,
            swatches: DEFAULT_SWATCHES,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// Unparseable values are logged and replaced by their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR")
            .filter(|addr| !addr.trim().is_empty())
            .unwrap_or(defaults.bind_addr);

        let seed = lookup("SHADES_SEED").and_then(|raw| match raw.trim().parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!(value = %raw, %e, "Invalid SHADES_SEED, using entropy");
                None
            }
        });

        let swatches = match lookup("SHADES_SWATCHES") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    tracing::warn!(value = %raw, "Invalid SHADES_SWATCHES, using default");
                    defaults.swatches
                }
            },
            None => defaults.swatches,
        };

        let config = Self {
            bind_addr,
            seed,
            swatches,
        };
        tracing::debug!(?config, "Loaded configuration");
        config
    }
}
