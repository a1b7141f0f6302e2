//! KoL 마켓 데이터 수집기 CLI.

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use koldb_collector::modules::{self, SnapshotKind};
use koldb_collector::{config::parse_item_list, CollectorConfig, CollectorContext};
use koldb_core::{init_logging, LogConfig, LogFormat, TradingWindow};
use koldb_data::{Database, InMemoryMarketStore, MarketStore, PgMarketStore};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "koldb-collector")]
#[command(about = "KoL Market Data Collector", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 로그 형식 (pretty, json, compact)
    #[arg(long, default_value = "pretty")]
    log_format: LogFormat,

    /// 데이터베이스 대신 메모리 저장소 사용
    #[arg(long)]
    dry_run: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// 데이터베이스 마이그레이션 실행
    Migrate,

    /// 거래 내역 수집
    CollectTransactions {
        /// 특정 아이템만 수집 (없으면 전체)
        #[arg(long)]
        item: Option<i32>,

        /// 조회 구간 (시간, 기본: TRANSACTION_WINDOW_HOURS)
        #[arg(long)]
        hours: Option<u32>,

        /// 조회 결과를 스냅샷으로 저장
        #[arg(long)]
        snapshot: bool,
    },

    /// 최신가 수집
    CollectLatestPrices {
        /// 아이템 ID 목록 (쉼표로 구분, 예: "194,1398", 기본: TRACKED_ITEMS)
        #[arg(long)]
        items: Option<String>,

        #[arg(long)]
        snapshot: bool,
    },

    /// 참조가 수집
    CollectReferencePrices {
        #[arg(long)]
        snapshot: bool,
    },

    /// 아이템 카탈로그 스냅샷 적재
    LoadItems {
        /// 스냅샷 파일 (기본: ITEMS_FILE 또는 SNAPSHOT_DIR/items.json)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// 스냅샷 파일 적재
    LoadSnapshot {
        /// items, transactions, latest-prices, reference-prices
        #[arg(long)]
        kind: SnapshotKind,

        /// 스냅샷 파일 (기본: SNAPSHOT_DIR 아래 표준 파일)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// 전체 워크플로우 실행 (카탈로그 → 참조가 → 거래 내역 → 최신가)
    RunAll,

    /// 데몬 모드: 주기적으로 전체 워크플로우 실행
    Daemon,

    /// 갱신 마커와 테이블 행 수 조회
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 로깅 초기화
    init_logging(LogConfig::for_crates(&cli.log_level).with_format(cli.log_format))
        .map_err(|e| anyhow::anyhow!("로깅 초기화 실패: {}", e))?;

    tracing::info!("KoLDB Data Collector 시작");

    // 설정 로드
    let mut config = CollectorConfig::from_env()?;
    if let Commands::CollectTransactions { snapshot: true, .. }
    | Commands::CollectLatestPrices { snapshot: true, .. }
    | Commands::CollectReferencePrices { snapshot: true } = cli.command
    {
        config.snapshot.write = true;
    }
    tracing::debug!(
        load_concurrency = config.collect.load_concurrency,
        request_delay_ms = config.collect.request_delay_ms,
        parse_mode = %config.collect.parse_mode,
        "설정 로드 완료"
    );

    // 저장소 연결
    let (store, database): (Arc<dyn MarketStore>, Option<Database>) = if cli.dry_run {
        tracing::warn!("dry-run: 메모리 저장소 사용, 데이터베이스에 기록하지 않음");
        (Arc::new(InMemoryMarketStore::without_foreign_keys()), None)
    } else {
        let db_config = config.database.to_database_config()?;
        let db = Database::connect(&db_config)
            .await
            .context("데이터베이스 연결 실패")?;
        tracing::info!("데이터베이스 연결 성공");
        (Arc::new(PgMarketStore::new(db.clone())), Some(db))
    };

    let ctx = CollectorContext::from_config(store, config)?;

    // 명령 실행
    match cli.command {
        Commands::Migrate => match &database {
            Some(db) => db.migrate().await?,
            None => tracing::warn!("dry-run에서는 마이그레이션을 건너뜁니다"),
        },
        Commands::CollectTransactions { item, hours, .. } => {
            let hours = hours.unwrap_or(ctx.config.collect.transaction_window_hours);
            let window = TradingWindow::last_hours(Utc::now(), hours);
            let report = modules::collect_transactions(&ctx, item, window).await?;
            report.log_summary("거래 내역 수집");
        }
        Commands::CollectLatestPrices { items, .. } => {
            let item_ids = match items {
                Some(raw) => parse_item_list(&raw)?,
                None => ctx.config.collect.tracked_items.clone(),
            };
            let report = modules::collect_latest_prices(&ctx, &item_ids).await?;
            report.log_summary("최신가 수집");
        }
        Commands::CollectReferencePrices { .. } => {
            let report = modules::collect_reference_prices(&ctx).await?;
            report.log_summary("참조가 수집");
        }
        Commands::LoadItems { file } => {
            let path = file
                .or_else(|| ctx.config.collect.items_file.clone())
                .unwrap_or_else(|| ctx.snapshot_paths().items());
            let report = modules::load_items(&ctx, &path).await?;
            report.log_summary("아이템 카탈로그 적재");
        }
        Commands::LoadSnapshot { kind, file } => {
            let path = file.unwrap_or_else(|| kind.default_path(&ctx.snapshot_paths()));
            let report = modules::load_snapshot(&ctx, kind, &path).await?;
            report.log_summary("스냅샷 적재");
        }
        Commands::RunAll => {
            tracing::info!("=== 전체 워크플로우 시작 ===");
            modules::run_all(&ctx).await?;
            tracing::info!("=== 전체 워크플로우 완료 ===");
        }
        Commands::Daemon => {
            let interval_minutes = ctx.config.daemon.interval().as_secs() / 60;
            tracing::info!("=== 데몬 모드 시작 (주기: {}분) ===", interval_minutes);

            let mut interval = tokio::time::interval(ctx.config.daemon.interval());
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("종료 신호 수신, 데몬 종료 중...");
                        break;
                    }
                    _ = interval.tick() => {
                        tracing::info!("=== 워크플로우 실행 시작 ===");

                        if let Err(e) = modules::run_all(&ctx).await {
                            tracing::error!("워크플로우 실패: {}", e);
                        }

                        tracing::info!(
                            "=== 워크플로우 완료, 다음 실행: {}분 후 ===",
                            interval_minutes
                        );
                    }
                }
            }
        }
        Commands::Status => {
            let status = modules::show_status(ctx.store()).await?;
            status.log_summary();
        }
    }

    if let Some(db) = database {
        db.close().await;
    }
    tracing::info!("KoLDB Data Collector 종료");

    Ok(())
}
