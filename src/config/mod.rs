//! Layered settings for the front end: defaults, then `.gobirc`, then environment.

use std::{
    collections::HashMap,
    env, fs,
    path::PathBuf,
};

use directories::BaseDirs;

pub const INTERPRETER_PATHS: &str = "GOBI_INTERPRETER_PATHS";
pub const DEFAULT_SOURCE: &str = "GOBI_DEFAULT_SOURCE";
pub const LOG_FILTER: &str = "GOBI_LOG";
pub const LOG_DIR: &str = "GOBI_LOG_DIR";

#[derive(Debug, Clone)]
pub struct Config {
    inner: HashMap<String, String>,
    pub config_path: PathBuf,
}

impl Config {
    pub fn load() -> Self {
        let config_path = default_config_path();
        let rc = fs::read_to_string(&config_path).ok();
        Self::from_sources(config_path, rc.as_deref(), env::vars())
    }

    /// Build from explicit inputs. Environment entries take precedence over
    /// the rc file, which takes precedence over defaults.
    pub fn from_sources(
        config_path: PathBuf,
        rc: Option<&str>,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let mut map = default_map();

        if let Some(text) = rc {
            for line in text.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((k, v)) = line.split_once('=') {
                    map.insert(k.trim().to_string(), v.trim().to_string());
                }
            }
        }

        for (k, v) in vars {
            if is_config_key(&k) {
                map.insert(k, v);
            }
        }

        Self { inner: map, config_path }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key).cloned()
    }

    pub fn get_path(&self, key: &str) -> Option<PathBuf> {
        self.get(key).filter(|v| !v.is_empty()).map(PathBuf::from)
    }

    /// Extra interpreter candidates, searched before the built-in list.
    pub fn interpreter_paths(&self) -> Vec<PathBuf> {
        self.get(INTERPRETER_PATHS)
            .map(|v| env::split_paths(&v).filter(|p| !p.as_os_str().is_empty()).collect())
            .unwrap_or_default()
    }

    pub fn default_source(&self) -> String {
        self.get(DEFAULT_SOURCE).unwrap_or_default()
    }

    pub fn log_filter(&self) -> String {
        self.get(LOG_FILTER).unwrap_or_else(|| "info".into())
    }

    pub fn log_dir(&self) -> PathBuf {
        self.get_path(LOG_DIR).unwrap_or_else(default_log_dir)
    }
}

fn is_config_key(k: &str) -> bool {
    k.starts_with("GOBI_")
}

fn default_config_path() -> PathBuf {
    let base = BaseDirs::new()
        .map(|b| b.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    base.join("gobi").join(".gobirc")
}

fn default_log_dir() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.cache_dir().to_path_buf())
        .unwrap_or_else(env::temp_dir)
        .join("gobi")
}

fn default_map() -> HashMap<String, String> {
    let mut m = HashMap::new();
    m.insert(DEFAULT_SOURCE.into(), "echo \"Hello, World!\";".into());
    m.insert(LOG_FILTER.into(), "info".into());
    m.insert(INTERPRETER_PATHS.into(), String::new());
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_sources(PathBuf::from("/x/.gobirc"), None, vec![]);
        assert_eq!(cfg.default_source(), "echo \"Hello, World!\";");
        assert_eq!(cfg.log_filter(), "info");
        assert!(cfg.interpreter_paths().is_empty());
    }

    #[test]
    fn test_rc_overrides_defaults_and_env_overrides_rc() {
        let rc = "# comment\n\nGOBI_LOG = debug\nGOBI_DEFAULT_SOURCE=echo 1;\n";
        let cfg = Config::from_sources(
            PathBuf::from("/x/.gobirc"),
            Some(rc),
            vars(&[("GOBI_LOG", "trace"), ("HOME", "/root")]),
        );
        assert_eq!(cfg.log_filter(), "trace");
        assert_eq!(cfg.default_source(), "echo 1;");
        assert_eq!(cfg.get("HOME"), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_interpreter_paths_split() {
        let cfg = Config::from_sources(
            PathBuf::from("/x/.gobirc"),
            None,
            vars(&[(INTERPRETER_PATHS, "/opt/php/bin/php::/usr/local/php83/bin/php")]),
        );
        assert_eq!(
            cfg.interpreter_paths(),
            vec![PathBuf::from("/opt/php/bin/php"), PathBuf::from("/usr/local/php83/bin/php")]
        );
    }

    #[test]
    fn test_log_dir_override() {
        let cfg = Config::from_sources(
            PathBuf::from("/x/.gobirc"),
            None,
            vars(&[(LOG_DIR, "/tmp/gobi-logs")]),
        );
        assert_eq!(cfg.log_dir(), PathBuf::from("/tmp/gobi-logs"));
    }
}
