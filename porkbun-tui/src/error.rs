//! 本地错误类型
//!
//! 远程调用的错误直接使用 `porkbun_provider::ProviderError`，
//! 这里只定义配置加载与缓存读写两类本地错误。

use std::path::PathBuf;

use thiserror::Error;

/// 凭证缺失（致命，启动即退出）
///
/// 配置文件读取或解析失败不在此列：那只会记录警告。
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing API credentials: {missing}")]
    MissingCredentials { missing: &'static str },
}

/// 快照缓存错误（只记录日志，不向用户展示）
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("could not determine a cache directory for this platform")]
    NoCacheDir,

    #[error("cache I/O failed for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed cache snapshot {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode cache snapshot: {0}")]
    Encode(#[source] serde_json::Error),
}
