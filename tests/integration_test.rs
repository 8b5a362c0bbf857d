use chrono::NaiveDate;
use mockito::{Matcher, Server, ServerGuard};
use pretty_assertions::assert_eq;
use std::time::Duration;

use kenall::api::types::*;
use kenall::api::{ClientConfig, KenallApi, KenallClient};
use kenall::error::{ErrorKind, KenallError};

const TOKEN: &str = "opencollector";

fn client_for(server: &ServerGuard) -> KenallClient {
    let config = ClientConfig {
        endpoint: server.url(),
        ..ClientConfig::new(TOKEN)
    };
    KenallClient::new(config).expect("client should build")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_get_address() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/postalcode/1008105")
        .match_header("authorization", "token opencollector")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(include_str!("testdata/addresses.json"))
        .create_async()
        .await;

    let response = client_for(&server).get_address("1008105").await.unwrap();
    mock.assert_async().await;

    assert_eq!(response.version.date(), Some(date(2020, 11, 30)));
    assert_eq!(response.addresses[0].town, "大手町");
}

#[tokio::test]
async fn test_get_city() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/cities/13")
        .match_header("authorization", "token opencollector")
        .with_status(200)
        .with_body(include_str!("testdata/cities.json"))
        .create_async()
        .await;

    let response = client_for(&server).get_city("13").await.unwrap();
    mock.assert_async().await;

    assert_eq!(response.cities.len(), 2);
    assert_eq!(response.cities[0].city, "千代田区");
}

#[tokio::test]
async fn test_get_corporation() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/houjinbangou/2021001052596")
        .with_status(200)
        .with_body(include_str!("testdata/corporation.json"))
        .create_async()
        .await;

    let response = client_for(&server)
        .get_corporation("2021001052596")
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(response.corporation.name, "株式会社ＪＰＭＣ");
    assert_eq!(response.version.to_string(), "2021-09-01");
}

#[tokio::test]
async fn test_get_whoami() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/whoami")
        .with_status(200)
        .with_body(include_str!("testdata/whoami.json"))
        .create_async()
        .await;

    let response = client_for(&server).get_whoami().await.unwrap();
    mock.assert_async().await;

    assert_eq!(response.remote_address.to_string(), "192.168.0.1");
    assert_eq!(response.remote_address.address_type(), "v4");
}

#[tokio::test]
async fn test_get_whoami_undefined_type() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/whoami")
        .with_status(200)
        .with_body(r#"{"remote_addr":{"type":"v8","address":"192.168.0.1"}}"#)
        .create_async()
        .await;

    let err = client_for(&server).get_whoami().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(err.to_string().contains("v8"));
}

#[tokio::test]
async fn test_get_holidays() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/holidays")
        .with_status(200)
        .with_body(include_str!("testdata/holidays.json"))
        .create_async()
        .await;

    let response = client_for(&server).get_holidays().await.unwrap();
    mock.assert_async().await;

    assert_eq!(response.holidays.len(), 3);
    assert_eq!(response.holidays[0], Holiday::new("元日", date(2022, 1, 1)));
}

#[tokio::test]
async fn test_get_holidays_by_year() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/holidays")
        .match_query(Matcher::UrlEncoded("year".into(), "2022".into()))
        .with_status(200)
        .with_body(include_str!("testdata/holidays.json"))
        .create_async()
        .await;

    let response = client_for(&server).get_holidays_by_year(2022).await.unwrap();
    mock.assert_async().await;

    assert!(response.holidays.iter().all(|h| h.date.format("%Y").to_string() == "2022"));
}

#[tokio::test]
async fn test_get_holidays_by_period() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/holidays")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2022-01-01".into()),
            Matcher::UrlEncoded("to".into(), "2022-01-31".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"data":[{"title":"元日","date":"2022-01-01","day_of_week":6,"day_of_week_text":"saturday"}]}"#,
        )
        .create_async()
        .await;

    let response = client_for(&server)
        .get_holidays_by_period(date(2022, 1, 1), date(2022, 1, 31))
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(response.holidays.len(), 1);
}

#[tokio::test]
async fn test_get_holidays_empty() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/holidays")
        .match_query(Matcher::UrlEncoded("year".into(), "1900".into()))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let response = client_for(&server).get_holidays_by_year(1900).await.unwrap();
    assert!(response.holidays.is_empty());
}

#[tokio::test]
async fn test_get_normalize_address() {
    let text = "東京都千代田区麹町三丁目12-14麹町駅前ヒルトップ8階";
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/postalcode/")
        .match_query(Matcher::UrlEncoded("t".into(), text.into()))
        .with_status(200)
        .with_body(include_str!("testdata/normalize.json"))
        .create_async()
        .await;

    let response = client_for(&server)
        .get_normalize_address(text)
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(response.query.town.as_deref(), Some("麹町"));
    assert_eq!(response.version.to_string(), "2023-09-29");
}

#[tokio::test]
async fn test_get_business_days() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/businessdays/check")
        .match_query(Matcher::UrlEncoded("date".into(), "2022-01-01".into()))
        .with_status(200)
        .with_body(r#"{"result":false}"#)
        .create_async()
        .await;

    let response = client_for(&server)
        .get_business_days(date(2022, 1, 1))
        .await
        .unwrap();
    mock.assert_async().await;

    assert_eq!(
        response.business_day,
        BusinessDay {
            date: date(2022, 1, 1),
            legal_holiday: false,
        }
    );
}

#[tokio::test]
async fn test_get_business_days_on_epoch() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/businessdays/check")
        .match_query(Matcher::UrlEncoded("date".into(), "1970-01-01".into()))
        .with_status(200)
        .with_body(r#"{"result":true}"#)
        .create_async()
        .await;

    let response = client_for(&server)
        .get_business_days(date(1970, 1, 1))
        .await
        .unwrap();
    mock.assert_async().await;

    assert!(response.business_day.legal_holiday);
}

#[tokio::test]
async fn test_bad_token_is_unauthorized() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/postalcode/1008105")
        .match_header("authorization", "token bad_token")
        .with_status(401)
        .create_async()
        .await;

    let config = ClientConfig {
        endpoint: server.url(),
        ..ClientConfig::new("bad_token")
    };
    let client = KenallClient::new(config).unwrap();

    let err = client.get_address("1008105").await.unwrap_err();
    assert!(matches!(err, KenallError::Unauthorized));
    assert!(err.is_sentinel());
}

#[tokio::test]
async fn test_status_codes_map_to_errors() {
    let cases = [
        (402, ErrorKind::PaymentRequired),
        (403, ErrorKind::Forbidden),
        (404, ErrorKind::NotFound),
        (405, ErrorKind::MethodNotAllowed),
        (500, ErrorKind::InternalServerError),
    ];

    for (status, kind) in cases {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/cities/13")
            .with_status(status)
            .with_body(r#"{"message":"error"}"#)
            .create_async()
            .await;

        let err = client_for(&server).get_city("13").await.unwrap_err();
        assert_eq!(err.kind(), kind, "status {}", status);
        assert_eq!(err.status_code(), Some(status as u16));
    }
}

#[tokio::test]
async fn test_unregistered_status() {
    for status in [418, 503] {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/whoami")
            .with_status(status)
            .create_async()
            .await;

        let err = client_for(&server).get_whoami().await.unwrap_err();
        assert!(matches!(err, KenallError::UnregisteredStatus(code) if code == status as u16));
        assert!(!err.is_sentinel());
        assert!(err.to_string().contains(&status.to_string()));
    }
}

#[tokio::test]
async fn test_invalid_arguments_skip_network() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;
    let client = client_for(&server);

    for err in [
        client.get_address("alphabet").await.unwrap_err(),
        client.get_address("100810").await.unwrap_err(),
        client.get_city("1").await.unwrap_err(),
        client.get_corporation("12345").await.unwrap_err(),
        client.get_normalize_address("   ").await.unwrap_err(),
        client.get_business_days(date(1, 1, 1)).await.unwrap_err(),
    ] {
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{}", err);
    }

    mock.assert_async().await;
}

#[tokio::test]
async fn test_wrong_body_is_decode_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/postalcode/1008105")
        .with_status(200)
        .with_body("wrong")
        .create_async()
        .await;

    let err = client_for(&server).get_address("1008105").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert!(std::error::Error::source(&err).is_some());
}

#[tokio::test]
async fn test_request_timeout() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept connections and never answer
    let server = tokio::spawn(async move {
        let mut sockets = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            sockets.push(socket);
        }
    });

    let config = ClientConfig {
        endpoint: format!("http://{}", addr),
        timeout: Some(Duration::from_millis(100)),
        ..ClientConfig::new(TOKEN)
    };
    let client = KenallClient::new(config).unwrap();

    let err = client.get_whoami().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Timeout, "{}", err);

    server.abort();
}

#[tokio::test]
async fn test_with_timeout_overrides_deadline() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let mut sockets = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            sockets.push(socket);
        }
    });

    let config = ClientConfig {
        endpoint: format!("http://{}", addr),
        ..ClientConfig::new(TOKEN)
    };
    let client = KenallClient::new(config)
        .unwrap()
        .with_timeout(Duration::from_millis(100));

    let err = client.get_holidays().await.unwrap_err();
    assert!(matches!(err, KenallError::Timeout(_)));

    server.abort();
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };

    let config = ClientConfig {
        endpoint: format!("http://{}", addr),
        ..ClientConfig::new(TOKEN)
    };
    let client = KenallClient::new(config).unwrap();

    let err = client.get_whoami().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport, "{}", err);
}

#[tokio::test]
async fn test_endpoint_with_base_path() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/whoami")
        .with_status(200)
        .with_body(include_str!("testdata/whoami.json"))
        .create_async()
        .await;

    let config = ClientConfig {
        endpoint: format!("{}/v1/", server.url()),
        ..ClientConfig::new(TOKEN)
    };
    let client = KenallClient::new(config).unwrap();

    client.get_whoami().await.unwrap();
    mock.assert_async().await;
}

#[test]
fn test_client_rejects_empty_token_and_bad_endpoint() {
    let err = KenallClient::new(ClientConfig::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let config = ClientConfig {
        endpoint: "not a url".to_string(),
        ..ClientConfig::new(TOKEN)
    };
    assert!(KenallClient::new(config).is_err());
}
