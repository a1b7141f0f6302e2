//! 데이터 모듈 오류 타입.

use thiserror::Error;

/// 데이터 수집/파싱/저장 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 네트워크(전송 계층) 오류
    #[error("Network error: {0}")]
    Network(String),

    /// 2xx가 아닌 HTTP 응답
    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// XML 문서가 기대한 스키마와 맞지 않음
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// 텍스트 응답의 한 줄을 해석할 수 없음
    #[error("Malformed line {line_number} ({content:?}): {reason}")]
    MalformedLine {
        line_number: usize,
        content: String,
        reason: String,
    },

    /// 한 번에 요청할 수 있는 아이템 수 초과
    #[error("Too many items: {count} requested, max {max}")]
    TooManyItems { count: usize, max: usize },

    /// 저장소 쓰기/조회 오류
    #[error("Storage error: {0}")]
    Storage(String),

    /// 연결 풀 소진
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// 마이그레이션 오류
    #[error("Migration error: {0}")]
    Migration(String),

    /// 직렬화/역직렬화 오류
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// 파일 입출력 오류
    #[error("I/O error: {0}")]
    Io(String),

    /// 잘못된 입력
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DataError {
    /// 네트워크 계열 오류인지 확인합니다.
    pub fn is_network(&self) -> bool {
        matches!(self, DataError::Network(_) | DataError::HttpStatus { .. })
    }

    /// 응답 본문 해석 오류인지 확인합니다.
    pub fn is_malformed_payload(&self) -> bool {
        matches!(
            self,
            DataError::MalformedXml(_) | DataError::MalformedLine { .. }
        )
    }

    /// 저장소 계열 오류인지 확인합니다.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            DataError::Storage(_) | DataError::PoolExhausted | DataError::Migration(_)
        )
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => DataError::HttpStatus {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => DataError::Network(err.to_string()),
        }
    }
}

impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => DataError::PoolExhausted,
            sqlx::Error::Database(db_err) => DataError::Storage(db_err.message().to_string()),
            _ => DataError::Storage(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

impl From<quick_xml::DeError> for DataError {
    fn from(err: quick_xml::DeError) -> Self {
        DataError::MalformedXml(err.to_string())
    }
}

impl From<quick_xml::Error> for DataError {
    fn from(err: quick_xml::Error) -> Self {
        DataError::MalformedXml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let status = DataError::HttpStatus {
            status: 503,
            url: "http://kol.coldfront.net/newmarket/export.php".to_string(),
        };
        assert!(status.is_network());
        assert!(!status.is_storage());

        let line = DataError::MalformedLine {
            line_number: 3,
            content: "abc".to_string(),
            reason: "expected 2 fields".to_string(),
        };
        assert!(line.is_malformed_payload());
        assert!(!line.is_network());

        assert!(DataError::PoolExhausted.is_storage());
        assert!(!DataError::TooManyItems { count: 11, max: 10 }.is_malformed_payload());
    }

    #[test]
    fn test_sqlx_pool_timeout_maps_to_exhausted() {
        let err: DataError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DataError::PoolExhausted));
    }
}
