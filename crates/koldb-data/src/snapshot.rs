//! 수집 결과 JSON 스냅샷.
//!
//! 조회와 적재 사이의 캐시로만 사용하며 장기 보관용이 아닙니다.
//! 파일은 레코드 배열 하나로 이루어집니다.

use crate::error::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};

/// 표준 스냅샷 파일 경로.
#[derive(Debug, Clone)]
pub struct SnapshotPaths {
    dir: PathBuf,
}

impl SnapshotPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn items(&self) -> PathBuf {
        self.dir.join("items.json")
    }

    pub fn transactions(&self) -> PathBuf {
        self.dir.join("transactions.json")
    }

    pub fn latest_prices(&self) -> PathBuf {
        self.dir.join("latest_prices.json")
    }

    pub fn reference_prices(&self) -> PathBuf {
        self.dir.join("reference_prices.json")
    }
}

impl Default for SnapshotPaths {
    fn default() -> Self {
        Self::new(".")
    }
}

/// 레코드 목록을 JSON 배열로 기록합니다. 상위 디렉터리가 없으면 생성합니다.
pub async fn write_snapshot<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let content = serde_json::to_vec_pretty(records)?;
    tokio::fs::write(path, content).await?;

    tracing::info!(path = %path.display(), records = records.len(), "스냅샷 저장");
    Ok(())
}

/// JSON 배열 스냅샷을 읽습니다.
pub async fn read_snapshot<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = tokio::fs::read(path).await?;
    let records: Vec<T> = serde_json::from_slice(&content)?;

    tracing::info!(path = %path.display(), records = records.len(), "스냅샷 로드");
    Ok(records)
}
