//! Command implementations.
//!
//! Each command draws from the session sampler and returns the rendered
//! output; printing is left to `main`.

pub mod check;
pub mod coin;
pub mod dice;
pub mod lottery;
pub mod names;
pub mod numbers;
pub mod quote;
pub mod words;

#[cfg(test)]
pub(crate) mod testing {
    use crate::config::RundomizerConfig;
    use crate::output::OutputFormat;
    use crate::session::Session;

    /// Seeded session for command tests.
    pub fn session(format: OutputFormat) -> Session {
        let config = RundomizerConfig {
            seed: Some(2024),
            ..RundomizerConfig::default()
        };
        Session::from_config(&config, format).unwrap()
    }
}
