//! 凭证加载
//!
//! 优先级（逐字段）：环境变量 > 配置文件 `config.yaml`。
//! 两个环境变量都已设置时不读取配置文件。
//!
//! 配置文件查找顺序（取第一个存在的）：
//!     $XDG_CONFIG_HOME/porkbun-tui/config.yaml
//!     ~/.config/porkbun-tui/config.yaml
//!
//! 文件无法读取或解析时只记录警告，按没有配置文件处理；
//! 只有凭证最终缺失才是致命错误。

use std::path::{Path, PathBuf};

use porkbun_provider::PorkbunCredentials;
use serde::Deserialize;

use crate::error::ConfigError;

pub const API_KEY_ENV: &str = "PORKBUN_API_KEY";
pub const SECRET_KEY_ENV: &str = "PORKBUN_SECRET_KEY";
/// 置为 `1` / `true` 时以演示数据启动，不需要凭证
pub const DEMO_ENV: &str = "PORKBUN_TUI_DEMO";

const APP_DIR: &str = "porkbun-tui";
const CONFIG_FILE: &str = "config.yaml";

/// 配置文件内容
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_key: Option<String>,
    secret_key: Option<String>,
}

/// 候选配置文件路径，按优先级排列
fn config_candidates(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Vec<PathBuf> {
    let xdg = xdg_config_home
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE));
    let fallback = home.map(|home| home.join(".config").join(APP_DIR).join(CONFIG_FILE));
    xdg.into_iter().chain(fallback).collect()
}

/// 获取实际存在的配置文件路径
pub fn config_path() -> Option<PathBuf> {
    config_candidates(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        dirs::home_dir(),
    )
    .into_iter()
    .find(|path| path.is_file())
}

/// 是否以演示模式启动
pub fn demo_mode_requested() -> bool {
    std::env::var(DEMO_ENV)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// 从环境变量和配置文件加载凭证
pub fn load_credentials() -> Result<PorkbunCredentials, ConfigError> {
    let env_api_key = non_empty(std::env::var(API_KEY_ENV).ok());
    let env_secret_key = non_empty(std::env::var(SECRET_KEY_ENV).ok());
    if env_api_key.is_some() && env_secret_key.is_some() {
        return resolve_credentials(env_api_key, env_secret_key, None);
    }
    let path = config_path();
    resolve_credentials(env_api_key, env_secret_key, path.as_deref())
}

/// 合并环境变量与配置文件中的凭证
pub fn resolve_credentials(
    env_api_key: Option<String>,
    env_secret_key: Option<String>,
    config_file: Option<&Path>,
) -> Result<PorkbunCredentials, ConfigError> {
    let mut api_key = env_api_key;
    let mut secret_key = env_secret_key;

    if api_key.is_none() || secret_key.is_none() {
        if let Some(file) = config_file.and_then(read_config_file) {
            api_key = api_key.or_else(|| non_empty(file.api_key));
            secret_key = secret_key.or_else(|| non_empty(file.secret_key));
        }
    }

    match (api_key, secret_key) {
        (Some(api_key), Some(secret_key)) => Ok(PorkbunCredentials {
            api_key,
            secret_key,
        }),
        (None, None) => Err(ConfigError::MissingCredentials {
            missing: "api_key and secret_key",
        }),
        (None, Some(_)) => Err(ConfigError::MissingCredentials { missing: "api_key" }),
        (Some(_), None) => Err(ConfigError::MissingCredentials {
            missing: "secret_key",
        }),
    }
}

/// 读取失败返回 `None`
fn read_config_file(path: &Path) -> Option<FileConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("No config file at {}", path.display());
            return None;
        }
        Err(e) => {
            log::warn!("Ignoring unreadable config file {}: {e}", path.display());
            return None;
        }
    };

    if content.trim().is_empty() {
        return Some(FileConfig::default());
    }

    match serde_yaml::from_str(&content) {
        Ok(file) => Some(file),
        Err(e) => {
            log::warn!("Ignoring malformed config file {}: {e}", path.display());
            None
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 凭证缺失时打印到 stderr 的配置指引
pub fn setup_guidance() -> String {
    let path = format!("~/.config/{APP_DIR}/{CONFIG_FILE}");
    format!(
        "Set your Porkbun API credentials:\n  \
         export {API_KEY_ENV}=pk1_xxx\n  \
         export {SECRET_KEY_ENV}=sk1_xxx\n\n\
         Or create {path}:\n  \
         api_key: pk1_xxx\n  \
         secret_key: sk1_xxx\n\n\
         ($XDG_CONFIG_HOME/{APP_DIR}/{CONFIG_FILE} is used first when it exists)\n\n\
         Get your API keys at: https://porkbun.com/account/api\n\
         To try the interface without an account: {DEMO_ENV}=1 porkbun-tui"
    )
}
