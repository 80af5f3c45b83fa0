//! crates/logging/src/config.rs
//! Verbosity configuration combining info and debug levels.

use super::levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};

/// Combined verbosity configuration for info and debug flags.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbosityConfig {
    /// Info flag levels.
    pub info: InfoLevels,
    /// Debug flag levels.
    pub debug: DebugLevels,
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level (`-v` count).
    ///
    /// Level 0 stays silent. Each additional level keeps everything enabled
    /// by the previous one.
    pub fn from_verbose_level(level: u8) -> Self {
        let mut config = Self::default();

        if level >= 1 {
            config.info.roots = 1;
            config.info.skip = 1;
            config.info.stats = 1;
        }
        if level >= 2 {
            config.info.name = 1;
            config.info.roots = 2;
            config.debug.discover = 1;
            config.debug.dup = 1;
            config.debug.resolve = 1;
        }
        if level >= 3 {
            config.debug.archive = 1;
            config.debug.walk = 1;
            config.debug.dup = 2;
        }
        if level >= 4 {
            config.debug.archive = 2;
            config.debug.discover = 2;
            config.debug.resolve = 2;
            config.debug.walk = 2;
        }

        config
    }

    /// Apply a single info flag token (e.g., "roots2", "stats", "all").
    pub fn apply_info_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        match name {
            "all" => self.info.set_all(level),
            "none" => self.info.set_all(0),
            _ => {
                let flag = InfoFlag::from_token(name)
                    .ok_or_else(|| format!("unknown info flag: {name}"))?;
                self.info.set(flag, level);
            }
        }
        Ok(())
    }

    /// Apply a single debug flag token (e.g., "walk2", "archive", "none").
    pub fn apply_debug_flag(&mut self, token: &str) -> Result<(), String> {
        let (name, level) = parse_flag_token(token)?;

        match name {
            "all" => self.debug.set_all(level),
            "none" => self.debug.set_all(0),
            _ => {
                let flag = DebugFlag::from_token(name)
                    .ok_or_else(|| format!("unknown debug flag: {name}"))?;
                self.debug.set(flag, level);
            }
        }
        Ok(())
    }

    /// Apply a comma-separated list of info tokens, stopping at the first bad one.
    pub fn apply_info_list(&mut self, list: &str) -> Result<(), String> {
        split_flag_list(list).try_for_each(|token| self.apply_info_flag(token))
    }

    /// Apply a comma-separated list of debug tokens, stopping at the first bad one.
    pub fn apply_debug_list(&mut self, list: &str) -> Result<(), String> {
        split_flag_list(list).try_for_each(|token| self.apply_debug_flag(token))
    }
}

fn split_flag_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Parse a flag token like "walk2" into ("walk", 2) or "dup" into ("dup", 1).
fn parse_flag_token(token: &str) -> Result<(&str, u8), String> {
    let token = token.trim();
    if token.is_empty() {
        return Err("empty flag token".to_string());
    }

    let digit_start = token.find(|c: char| c.is_ascii_digit());

    match digit_start {
        Some(0) => Err(format!("flag name missing in: {token}")),
        Some(pos) => {
            let name = &token[..pos];
            let level = token[pos..]
                .parse::<u8>()
                .map_err(|_| format!("invalid level in flag: {token}"))?;
            Ok((name, level))
        }
        None => Ok((token, 1)),
    }
}
