//! Runtime configuration loaded from the process environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::types::{TICK_MS, WORD_COUNT};

/// Largest round the game accepts.
pub const MAX_WORD_COUNT: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Line-oriented word list.
    pub dictionary: PathBuf,
    /// Hall of fame store.
    pub records: PathBuf,
    pub word_count: usize,
    /// Input poll timeout, which is also the tick length.
    pub tick: Duration,
    pub log_dir: PathBuf,
    /// Fixed seed for word sampling. `None` seeds from the system time.
    pub seed: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from("palavras"),
            records: PathBuf::from("recordes.txt"),
            word_count: WORD_COUNT,
            tick: Duration::from_millis(TICK_MS as u64),
            log_dir: env::temp_dir(),
            seed: None,
        }
    }
}

impl Config {
    /// Construct configuration from process environment variables.
    ///
    /// - `FALLING_WORDS_DICTIONARY` / `FALLING_WORDS_RECORDS`
    /// - `FALLING_WORDS_WORD_COUNT` (clamped to `1..=50`)
    /// - `FALLING_WORDS_TICK_MS`
    /// - `FALLING_WORDS_LOG_DIR`
    /// - `FALLING_WORDS_SEED`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("FALLING_WORDS_DICTIONARY") {
            config.dictionary = PathBuf::from(path);
        }
        if let Some(path) = lookup("FALLING_WORDS_RECORDS") {
            config.records = PathBuf::from(path);
        }
        if let Some(count) = parse::<usize>(&lookup, "FALLING_WORDS_WORD_COUNT") {
            config.word_count = count.clamp(1, MAX_WORD_COUNT);
        }
        if let Some(ms) = parse::<u64>(&lookup, "FALLING_WORDS_TICK_MS") {
            config.tick = Duration::from_millis(ms.max(1));
        }
        if let Some(dir) = lookup("FALLING_WORDS_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }
        config.seed = parse::<u32>(&lookup, "FALLING_WORDS_SEED");

        config
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = from_pairs(&[]);
        assert_eq!(config.dictionary, PathBuf::from("palavras"));
        assert_eq!(config.records, PathBuf::from("recordes.txt"));
        assert_eq!(config.word_count, 10);
        assert_eq!(config.tick, Duration::from_millis(16));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn overrides_and_clamps() {
        let config = from_pairs(&[
            ("FALLING_WORDS_DICTIONARY", "/usr/share/dict/words"),
            ("FALLING_WORDS_WORD_COUNT", "500"),
            ("FALLING_WORDS_TICK_MS", "0"),
            ("FALLING_WORDS_SEED", " 42 "),
        ]);
        assert_eq!(config.dictionary, PathBuf::from("/usr/share/dict/words"));
        assert_eq!(config.word_count, MAX_WORD_COUNT);
        assert_eq!(config.tick, Duration::from_millis(1));
        assert_eq!(config.seed, Some(42));

        assert_eq!(from_pairs(&[("FALLING_WORDS_WORD_COUNT", "0")]).word_count, 1);
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = from_pairs(&[
            ("FALLING_WORDS_WORD_COUNT", "ten"),
            ("FALLING_WORDS_SEED", "-1"),
        ]);
        assert_eq!(config.word_count, 10);
        assert_eq!(config.seed, None);
    }
}
