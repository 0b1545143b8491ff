use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::ConfigError;

pub const DEFAULT_TIME_BUDGET_MS: u64 = 1500;
pub const DEFAULT_PERF_VOLUME: usize = 50_000;
pub const DEFAULT_COLLISION_WORDS: usize = 1000;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SuiteConfig {
    pub time_budget_ms: Option<u64>,
    pub perf_volume: Option<usize>,
    pub collision_words: Option<usize>,
}

impl SuiteConfig {
    pub fn time_budget_ms(&self) -> u64 {
        self.time_budget_ms.unwrap_or(DEFAULT_TIME_BUDGET_MS)
    }

    pub fn perf_volume(&self) -> usize {
        self.perf_volume.unwrap_or(DEFAULT_PERF_VOLUME)
    }

    pub fn collision_words(&self) -> usize {
        self.collision_words.unwrap_or(DEFAULT_COLLISION_WORDS)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            time_budget_ms: Some(self.time_budget_ms()),
            perf_volume: Some(self.perf_volume()),
            collision_words: Some(self.collision_words()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct HarnessConfig {
    pub mutants: Option<Vec<String>>, // None = whole catalog (semantic)
    pub format: Option<String>,
    pub progress: Option<bool>,
}

impl HarnessConfig {
    pub fn mutants(&self) -> Option<&[String]> {
        self.mutants.as_deref()
    }

    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or("table")
    }

    pub fn progress(&self) -> bool {
        self.progress.unwrap_or(true)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            mutants: self.mutants.clone(),
            format: Some(self.format().to_string()),
            progress: Some(self.progress()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub log: Option<LogConfig>,
    pub suite: Option<SuiteConfig>,
    pub harness: Option<HarnessConfig>,
}

impl Config {
    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn suite(&self) -> SuiteConfig {
        self.suite.clone().unwrap_or_default()
    }

    pub fn harness(&self) -> HarnessConfig {
        self.harness.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            log: Some(self.log().to_effective()),
            suite: Some(self.suite().to_effective()),
            harness: Some(self.harness().to_effective()),
        }
    }

    /// Defaults, then the given config file, then environment overrides
    pub fn layered(file: Option<&Path>, overrides: &EnvOverrides) -> Result<Self, ConfigError> {
        let mut cfg = Config::default();
        if let Some(path) = file {
            let file_cfg = read_config_file(path)?;
            apply_file_config(&mut cfg, &file_cfg);
        }
        apply_env_overrides(&mut cfg, overrides)?;
        Ok(cfg)
    }
}

/// Values taken from `WORDSTATS_*` environment variables
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
    pub format: Option<String>,
    pub mutants: Option<String>, // csv
    pub time_budget_ms: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_level: lookup("WORDSTATS_LOG_LEVEL"),
            log_color: lookup("WORDSTATS_LOG_COLOR"),
            format: lookup("WORDSTATS_FORMAT"),
            mutants: lookup("WORDSTATS_MUTANTS"),
            time_budget_ms: lookup("WORDSTATS_TIME_BUDGET_MS"),
        }
    }
}

pub const CONFIG_FILENAME: &str = "wordstats.toml";

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let file = find_nearest_config_file();
        Config::layered(file.as_deref(), &EnvOverrides::default()).unwrap_or_default()
    })
}

pub fn init_with_overrides(overrides: &EnvOverrides) -> Result<(), ConfigError> {
    // Walk up from cwd and use the first config file found, env wins over it
    let file = find_nearest_config_file();
    let cfg = Config::layered(file.as_deref(), overrides)?;
    let _ = CONFIG.set(cfg);
    Ok(())
}

pub fn read_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str::<Config>(&contents).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    // Merge log section
    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }

    // Merge suite section
    if let Some(file_suite) = &file.suite {
        let mut suite = cfg.suite.clone().unwrap_or_default();
        if file_suite.time_budget_ms.is_some() {
            suite.time_budget_ms = file_suite.time_budget_ms;
        }
        if file_suite.perf_volume.is_some() {
            suite.perf_volume = file_suite.perf_volume;
        }
        if file_suite.collision_words.is_some() {
            suite.collision_words = file_suite.collision_words;
        }
        cfg.suite = Some(suite);
    }

    // Merge harness section
    if let Some(file_harness) = &file.harness {
        let mut harness = cfg.harness.clone().unwrap_or_default();
        if file_harness.mutants.is_some() {
            harness.mutants = file_harness.mutants.clone(); // override semantics
        }
        if file_harness.format.is_some() {
            harness.format = file_harness.format.clone();
        }
        if file_harness.progress.is_some() {
            harness.progress = file_harness.progress;
        }
        cfg.harness = Some(harness);
    }
}

fn apply_env_overrides(cfg: &mut Config, overrides: &EnvOverrides) -> Result<(), ConfigError> {
    // Log overrides
    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = &overrides.log_level
        && !level.trim().is_empty()
    {
        log.level = Some(level.trim().to_string());
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }

    // Suite overrides
    if let Some(budget) = &overrides.time_budget_ms {
        let parsed = budget
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue {
                key: "WORDSTATS_TIME_BUDGET_MS".to_string(),
                value: budget.clone(),
            })?;
        let mut suite = cfg.suite.clone().unwrap_or_default();
        suite.time_budget_ms = Some(parsed);
        cfg.suite = Some(suite);
    }

    // Harness overrides
    let mut harness = cfg.harness.clone().unwrap_or_default();
    if let Some(format) = &overrides.format
        && !format.trim().is_empty()
    {
        harness.format = Some(format.trim().to_lowercase());
    }
    if let Some(muts_csv) = &overrides.mutants {
        let list = parse_csv(muts_csv);
        if !list.is_empty() {
            harness.mutants = Some(list);
        }
    }
    if overrides.format.is_some() || overrides.mutants.is_some() {
        cfg.harness = Some(harness);
    }

    Ok(())
}

fn parse_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled(),
    }
}

pub fn is_mutant_enabled(slug: &str, allow_list: Option<&[String]>) -> bool {
    if let Some(list) = allow_list {
        return list.iter().any(|s| s.eq_ignore_ascii_case(slug));
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> EnvOverrides {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvOverrides::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_without_file_or_env() {
        let cfg = Config::layered(None, &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.log().level(), "info");
        assert_eq!(cfg.suite().time_budget_ms(), DEFAULT_TIME_BUDGET_MS);
        assert_eq!(cfg.suite().perf_volume(), DEFAULT_PERF_VOLUME);
        assert_eq!(cfg.suite().collision_words(), DEFAULT_COLLISION_WORDS);
        assert_eq!(cfg.harness().format(), "table");
        assert!(cfg.harness().mutants().is_none());
    }

    #[test]
    fn env_overrides_beat_defaults() {
        let overrides = env(&[
            ("WORDSTATS_LOG_LEVEL", " debug "),
            ("WORDSTATS_LOG_COLOR", "OFF"),
            ("WORDSTATS_FORMAT", "JSON"),
            ("WORDSTATS_MUTANTS", "L, O1,,999"),
            ("WORDSTATS_TIME_BUDGET_MS", "250"),
        ]);
        let cfg = Config::layered(None, &overrides).unwrap();
        assert_eq!(cfg.log().level(), "debug");
        assert_eq!(cfg.log().color(), Some(false));
        assert_eq!(cfg.harness().format(), "json");
        assert_eq!(
            cfg.harness().mutants(),
            Some(&["L".to_string(), "O1".to_string(), "999".to_string()][..])
        );
        assert_eq!(cfg.suite().time_budget_ms(), 250);
    }

    #[test]
    fn unparsable_budget_is_rejected() {
        let overrides = env(&[("WORDSTATS_TIME_BUDGET_MS", "soon")]);
        let err = Config::layered(None, &overrides).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn mutant_allow_list_is_case_insensitive() {
        let list = vec!["en2".to_string(), "QWE".to_string()];
        assert!(is_mutant_enabled("EN2", Some(&list)));
        assert!(is_mutant_enabled("qwe", Some(&list)));
        assert!(!is_mutant_enabled("EN", Some(&list)));
        assert!(is_mutant_enabled("EN", None));
    }
}
