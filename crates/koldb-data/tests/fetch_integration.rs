//! mock 서버를 이용한 원천 조회 통합 테스트.

use koldb_core::TradingWindow;
use koldb_data::{DataError, Endpoints, KolMarketClient, ParseMode};
use mockito::Matcher;
use rust_decimal_macros::dec;
use std::time::Duration;

const EXPORT_XML: &str = r#"<?xml version="1.0"?>
<marketplace>
  <trans id="52218870">
    <itemid>194</itemid>
    <vol>1</vol>
    <cost>1398000.00</cost>
    <when>1674968512</when>
  </trans>
  <trans id="52218871">
    <itemid>194</itemid>
    <vol>3</vol>
    <cost>1400000.50</cost>
    <when>1674968600</when>
  </trans>
</marketplace>"#;

fn client_for(server: &mockito::Server) -> KolMarketClient {
    let endpoints = Endpoints::with_base(&server.url()).unwrap();
    KolMarketClient::new(endpoints)
}

#[tokio::test]
async fn test_fetch_transactions_sends_window_and_item() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/newmarket/export.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "1674882112".into()),
            Matcher::UrlEncoded("end".into(), "1674968512".into()),
            Matcher::UrlEncoded("itemid".into(), "194".into()),
        ]))
        .with_status(200)
        .with_body(EXPORT_XML)
        .create_async()
        .await;

    let client = client_for(&server);
    let window = TradingWindow::new(1_674_882_112, 1_674_968_512).unwrap();
    let txs = client.fetch_transactions(window, Some(194)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(txs.len(), 2);
    assert_eq!(txs[0].transaction_id, 52_218_870);
    assert_eq!(txs[0].price, dec!(1398000.00));
    assert_eq!(txs[1].volume, 3);
}

#[tokio::test]
async fn test_fetch_transactions_empty_export() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/newmarket/export.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<marketplace></marketplace>")
        .create_async()
        .await;

    let client = client_for(&server);
    let window = TradingWindow::new(0, 86_400).unwrap();
    let txs = client.fetch_transactions(window, None).await.unwrap();
    assert!(txs.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_network_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/newmarket/export.php")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let window = TradingWindow::new(0, 86_400).unwrap();
    let err = client.fetch_transactions(window, None).await.unwrap_err();

    assert!(matches!(err, DataError::HttpStatus { status: 503, .. }));
    assert!(err.is_network());
}

#[tokio::test]
async fn test_latest_prices_batched_in_tens() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/newmarket/latestprice.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("194,1398000<br>\n")
        .expect(3)
        .create_async()
        .await;

    let client = client_for(&server);
    let ids: Vec<i32> = (1..=25).collect();
    let decoded = client
        .fetch_latest_prices_batched(&ids, ParseMode::Lenient, Duration::ZERO)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(decoded.records.len(), 3);
    assert!(decoded.is_clean());
}

#[tokio::test]
async fn test_latest_prices_rejects_more_than_ten() {
    let server = mockito::Server::new_async().await;
    let client = client_for(&server);
    let ids: Vec<i32> = (1..=11).collect();

    let err = client
        .fetch_latest_prices(&ids, ParseMode::Lenient)
        .await
        .unwrap_err();
    assert!(matches!(err, DataError::TooManyItems { count: 11, max: 10 }));
}

#[tokio::test]
async fn test_fetch_reference_prices() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/scripts/updateprices.php")
        .match_query(Matcher::UrlEncoded("action".into(), "getmap".into()))
        .with_status(200)
        .with_body("1674968512\n194\t1674968512\t1398000\nbogus line\n2\t1674968000\t100\n")
        .create_async()
        .await;

    let client = client_for(&server);
    let decoded = client.fetch_reference_prices(ParseMode::Lenient).await.unwrap();

    assert_eq!(decoded.records.len(), 2);
    assert_eq!(decoded.records[0].item_id, 194);
    assert_eq!(decoded.records[0].price, 1_398_000);
    assert_eq!(decoded.rejected.len(), 1);
    assert_eq!(decoded.rejected[0].line_number, 3);

    let strict = client.fetch_reference_prices(ParseMode::Strict).await.unwrap_err();
    assert!(strict.is_malformed_payload());
}
