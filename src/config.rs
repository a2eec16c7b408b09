use std::path::PathBuf;

use crate::{locator::Strategy, utils, Error};

pub const DEFAULT_TARGET: &str = r"E:\Programs\Windows Terminal\wt.exe";
pub const DEFAULT_TARGET_NAME: &str = "wt.exe";

/// Strategy picked at build time through `CMDWT_DEFAULT_STRATEGY`.
pub const BUILD_STRATEGY: &str = env!("CMDWT_BUILD_STRATEGY");

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StrategyKind {
    Static,
    Search
}

impl StrategyKind {
    pub fn parse(s: &str) -> Option<StrategyKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "static" => Some(StrategyKind::Static),
            "search" => Some(StrategyKind::Search),
            _ => None
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub strategy: StrategyKind,
    pub target: PathBuf,
    pub target_name: String,
    pub shell: Option<PathBuf>,
    pub pause: bool,
    pub debug: bool
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, Error> {
        let strategy = match lookup("CMDWT_STRATEGY").filter(|v| !v.trim().is_empty()) {
            Some(value) => StrategyKind::parse(&value)
                .ok_or(Error::InvalidConfig { key: "CMDWT_STRATEGY", value })?,
            None => StrategyKind::parse(BUILD_STRATEGY).unwrap_or(StrategyKind::Static)
        };

        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Ok(Config {
            strategy,
            target: non_empty("CMDWT_TARGET").map_or_else(|| PathBuf::from(DEFAULT_TARGET), PathBuf::from),
            target_name: non_empty("CMDWT_TARGET_NAME").unwrap_or_else(|| DEFAULT_TARGET_NAME.to_owned()),
            shell: non_empty("CMDWT_SHELL").map(PathBuf::from),
            pause: flag(&lookup, "CMDWT_PAUSE")?,
            debug: flag(&lookup, "CMDWT_DEBUG")?
        })
    }

    pub fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyKind::Static => Strategy::Static(self.target.clone()),
            StrategyKind::Search => Strategy::Search { file_name: self.target_name.clone() }
        }
    }

    pub fn shell(&self) -> PathBuf {
        self.shell.clone().unwrap_or_else(utils::default_shell)
    }
}

fn flag(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<bool, Error> {
    let Some(value) = lookup(key) else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidConfig { key, value })
    }
}
