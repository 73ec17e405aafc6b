//! 快照缓存
//!
//! 在 `<cache_dir>/porkbun-tui/` 下保存两份 JSON 快照：
//!     domains.json    域名列表
//!     pricing.json    TLD 价格表
//!
//! 文件格式：
//!     {
//!       "data": ...,
//!       "updated_at": "2026-10-16T08:00:00Z"
//!     }
//!
//! 每次远程拉取成功后整体覆盖写入，启动时同步读取。
//! 文件不存在返回空快照；内容损坏返回 `CacheError::Decode`。

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use porkbun_provider::{Domain, PricingTable};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CacheError;

const APP_DIR: &str = "porkbun-tui";
const DOMAINS_FILE: &str = "domains.json";
const PRICING_FILE: &str = "pricing.json";

/// 一份快照：数据 + 写入时间
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub data: T,
    pub updated_at: Option<DateTime<Utc>>,
}

impl<T> Snapshot<T> {
    pub fn is_empty(&self) -> bool {
        self.updated_at.is_none()
    }
}

/// 基于 JSON 文件的快照缓存
#[derive(Debug, Clone)]
pub struct CacheStore {
    dir: PathBuf,
}

impl CacheStore {
    /// 使用平台缓存目录
    pub fn open_default() -> Result<Self, CacheError> {
        let dir = dirs::cache_dir()
            .ok_or(CacheError::NoCacheDir)?
            .join(APP_DIR);
        Ok(Self::new(dir))
    }

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn load_domains(&self) -> Result<Snapshot<Vec<Domain>>, CacheError> {
        self.load(DOMAINS_FILE)
    }

    pub fn save_domains(&self, domains: &[Domain]) -> Result<(), CacheError> {
        self.save(DOMAINS_FILE, domains)
    }

    pub fn load_pricing(&self) -> Result<Snapshot<PricingTable>, CacheError> {
        self.load(PRICING_FILE)
    }

    pub fn save_pricing(&self, pricing: &PricingTable) -> Result<(), CacheError> {
        self.save(PRICING_FILE, pricing)
    }

    /// 删除全部快照
    pub fn clear(&self) -> Result<(), CacheError> {
        for file in [DOMAINS_FILE, PRICING_FILE] {
            let path = self.dir.join(file);
            match std::fs::remove_file(&path) {
                Ok(()) => log::info!("Removed cache snapshot {}", path.display()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(source) => return Err(CacheError::Io { path, source }),
            }
        }
        Ok(())
    }

    fn load<T>(&self, file: &str) -> Result<Snapshot<T>, CacheError>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.dir.join(file);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Snapshot::default());
            }
            Err(source) => return Err(CacheError::Io { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| CacheError::Decode { path, source })
    }

    fn save<T>(&self, file: &str, data: &T) -> Result<(), CacheError>
    where
        T: Serialize + ?Sized,
    {
        std::fs::create_dir_all(&self.dir).map_err(|source| CacheError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let snapshot = Snapshot {
            data,
            updated_at: Some(Utc::now()),
        };
        let content = serde_json::to_string_pretty(&snapshot).map_err(CacheError::Encode)?;

        let path = self.dir.join(file);
        std::fs::write(&path, content).map_err(|source| CacheError::Io { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use porkbun_provider::TldPricing;

    fn domain(name: &str) -> Domain {
        let expire = Utc.with_ymd_and_hms(2027, 3, 1, 0, 0, 0).unwrap();
        Domain {
            name: name.to_string(),
            tld: name.rsplit('.').next().unwrap_or_default().to_string(),
            status: "ACTIVE".to_string(),
            create_date: Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap(),
            expire_date: expire,
            security_lock: true,
            whois_privacy: false,
            auto_renew: true,
            not_local: false,
            labels: vec!["work".to_string()],
        }
    }

    #[test]
    fn domains_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        let domains = vec![domain("a.com"), domain("b.io")];

        store.save_domains(&domains).unwrap();
        let snapshot = store.load_domains().unwrap();

        assert_eq!(snapshot.data, domains);
        assert!(snapshot.updated_at.is_some());
    }

    #[test]
    fn pricing_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        let mut pricing = PricingTable::new();
        pricing.insert(
            "com".into(),
            TldPricing {
                registration: "9.73".into(),
                renewal: "10.37".into(),
                transfer: "10.37".into(),
            },
        );

        store.save_pricing(&pricing).unwrap();
        assert_eq!(store.load_pricing().unwrap().data, pricing);
    }

    #[test]
    fn missing_snapshot_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path().join("never-created"));

        let snapshot = store.load_domains().unwrap();
        assert!(snapshot.is_empty());
        assert!(snapshot.data.is_empty());
    }

    #[test]
    fn corrupt_snapshot_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DOMAINS_FILE), "{ not json").unwrap();
        let store = CacheStore::new(dir.path());

        assert!(matches!(
            store.load_domains(),
            Err(CacheError::Decode { .. })
        ));
    }

    #[test]
    fn snapshot_file_layout() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        store.save_domains(&[domain("a.com")]).unwrap();

        let raw = std::fs::read_to_string(dir.path().join(DOMAINS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["data"][0]["name"], "a.com");
        assert!(value["updated_at"].is_string());
        assert!(raw.contains('\n'));
    }

    #[test]
    fn clear_removes_both_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::new(dir.path());
        store.save_domains(&[domain("a.com")]).unwrap();
        store.save_pricing(&PricingTable::new()).unwrap();

        store.clear().unwrap();
        assert!(store.load_domains().unwrap().is_empty());
        assert!(store.load_pricing().unwrap().is_empty());

        // 再次清理空目录也不报错
        store.clear().unwrap();
    }
}
