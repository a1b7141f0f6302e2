//! # KoLDB Core
//!
//! KoL 마켓 데이터베이스의 핵심 레코드 타입을 제공합니다.
//!
//! 이 크레이트는 수집 파이프라인 전반에서 사용되는 기본 타입을 제공합니다:
//! - 아이템 카탈로그 레코드
//! - 거래 내역 레코드
//! - 최신가/참조가 시세 레코드
//! - 거래 구간(epoch 초) 타입
//! - 로깅 인프라

pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
