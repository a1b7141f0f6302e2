//! 환경변수 기반 설정 모듈.
//!
//! `db.env`, `.env` 순서로 읽은 뒤 프로세스 환경변수를 사용합니다.
//! 이미 설정된 변수는 덮어쓰지 않습니다.

use crate::error::CollectorError;
use crate::Result;
use koldb_data::{DatabaseConfig, Endpoints, ParseMode};
use secrecy::{ExposeSecret, SecretString};
use std::path::PathBuf;
use std::time::Duration;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 데이터베이스 설정
    pub database: DatabaseSettings,
    /// 수집/적재 설정
    pub collect: CollectConfig,
    /// 스냅샷 설정
    pub snapshot: SnapshotConfig,
    /// 원천 엔드포인트 설정
    pub endpoints: EndpointConfig,
    /// 데몬 모드 설정
    pub daemon: DaemonConfig,
}

/// 데이터베이스 접속 설정
///
/// `DATABASE_URL`이 있으면 그대로 쓰고, 없으면 `DBUSER`/`DBPASS`/`ADDRESS`/`DBNAME`으로
/// 조합합니다.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: Option<SecretString>,
    pub user: Option<String>,
    pub password: Option<SecretString>,
    /// host:port
    pub address: Option<String>,
    pub name: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
}

/// 수집/적재 설정
#[derive(Debug, Clone)]
pub struct CollectConfig {
    /// 적재 동시 실행 수 (기본: DB 최대 연결 수)
    pub load_concurrency: usize,
    /// 같은 호스트에 대한 연속 요청 간 딜레이 (밀리초)
    pub request_delay_ms: u64,
    /// 거래 내역 조회 구간 (시간)
    pub transaction_window_hours: u32,
    /// 최신가를 조회할 아이템
    pub tracked_items: Vec<i32>,
    /// 아이템 카탈로그 스냅샷 경로
    pub items_file: Option<PathBuf>,
    /// 텍스트 응답 해석 방식
    pub parse_mode: ParseMode,
}

/// 스냅샷 설정
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub dir: PathBuf,
    /// 조회 결과를 스냅샷으로 남길지 여부
    pub write: bool,
}

/// 원천 엔드포인트 설정
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub transactions: String,
    pub latest_prices: String,
    pub reference_prices: String,
}

/// 데몬 모드 설정
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// 워크플로우 실행 주기 (분 단위)
    pub interval_minutes: u64,
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        dotenvy::from_filename("db.env").ok();
        dotenvy::dotenv().ok();

        let max_connections = env_var_parse("DB_MAX_CONNECTIONS", 25);

        Ok(Self {
            database: DatabaseSettings {
                url: env_var_opt("DATABASE_URL").map(SecretString::from),
                user: env_var_opt("DBUSER"),
                password: env_var_opt("DBPASS").map(SecretString::from),
                address: env_var_opt("ADDRESS"),
                name: env_var_opt("DBNAME"),
                max_connections,
                min_connections: env_var_parse("DB_MIN_CONNECTIONS", 1),
                connect_timeout_secs: env_var_parse("DB_CONNECT_TIMEOUT_SECS", 30),
            },
            collect: CollectConfig {
                load_concurrency: env_var_parse("LOAD_CONCURRENCY", max_connections as usize),
                request_delay_ms: env_var_parse("REQUEST_DELAY_MS", 5000),
                transaction_window_hours: env_var_parse("TRANSACTION_WINDOW_HOURS", 24),
                tracked_items: match env_var_opt("TRACKED_ITEMS") {
                    Some(raw) => parse_item_list(&raw)?,
                    None => Vec::new(),
                },
                items_file: env_var_opt("ITEMS_FILE").map(PathBuf::from),
                parse_mode: match env_var_opt("PARSE_MODE") {
                    Some(raw) => raw.parse().map_err(CollectorError::Config)?,
                    None => ParseMode::default(),
                },
            },
            snapshot: SnapshotConfig {
                dir: env_var_opt("SNAPSHOT_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("snapshots")),
                write: env_var_bool("WRITE_SNAPSHOTS", false),
            },
            endpoints: EndpointConfig {
                transactions: env_var_or(
                    "COLDFRONT_EXPORT_URL",
                    koldb_data::provider::COLDFRONT_EXPORT_URL,
                ),
                latest_prices: env_var_or(
                    "COLDFRONT_LATEST_URL",
                    koldb_data::provider::COLDFRONT_LATEST_URL,
                ),
                reference_prices: env_var_or(
                    "MAFIA_PRICES_URL",
                    koldb_data::provider::MAFIA_PRICES_URL,
                ),
            },
            daemon: DaemonConfig {
                interval_minutes: env_var_parse("DAEMON_INTERVAL_MINUTES", 60),
            },
        })
    }
}

impl DatabaseSettings {
    /// 접속 URL을 결정합니다.
    pub fn connection_url(&self) -> Result<SecretString> {
        if let Some(url) = &self.url {
            return Ok(url.clone());
        }

        match (&self.user, &self.address, &self.name) {
            (Some(user), Some(address), Some(name)) => {
                let password = self.password.as_ref().map(|p| p.expose_secret());
                let url = DatabaseConfig::url_from_parts(user, password, address, name)?;
                Ok(SecretString::from(url))
            }
            _ => Err(CollectorError::Config(
                "DATABASE_URL 또는 DBUSER/ADDRESS/DBNAME 환경변수가 설정되지 않았습니다"
                    .to_string(),
            )),
        }
    }

    /// 연결 풀 설정으로 변환합니다.
    pub fn to_database_config(&self) -> Result<DatabaseConfig> {
        Ok(DatabaseConfig {
            url: self.connection_url()?.expose_secret().to_string(),
            max_connections: self.max_connections,
            min_connections: self.min_connections,
            connect_timeout_secs: self.connect_timeout_secs,
            ..Default::default()
        })
    }
}

impl CollectConfig {
    /// 요청 간 딜레이를 Duration으로 반환
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl EndpointConfig {
    pub fn to_endpoints(&self) -> Result<Endpoints> {
        Ok(Endpoints::new(
            &self.transactions,
            &self.latest_prices,
            &self.reference_prices,
        )?)
    }
}

impl DaemonConfig {
    /// 워크플로우 실행 주기를 Duration으로 반환 (최소 1분)
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.max(1) * 60)
    }
}

/// 쉼표로 구분된 아이템 ID 목록 파싱 (예: "194,1398,2")
pub fn parse_item_list(raw: &str) -> Result<Vec<i32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|e| CollectorError::Config(format!("잘못된 아이템 ID {:?}: {}", s, e)))
        })
        .collect()
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// 환경변수에서 bool 값 파싱
fn env_var_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| v == "true" || v == "1")
        .unwrap_or(default)
}

fn env_var_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_var_or(key: &str, default: &str) -> String {
    env_var_opt(key).unwrap_or_else(|| default.to_string())
}
