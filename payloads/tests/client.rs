//! Integration tests for the movie-listing client, driven against a local
//! mock server.

use payloads::requests::ListingQuery;
use payloads::{APIClient, ClientError};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(address: String) -> APIClient {
    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[tokio::test]
async fn list_movies_decodes_status() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/list_movies.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "status_message": "Query was successful.",
            "data": { "movie_count": 1, "limit": 20, "movies": [] }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let listing = client.list_movies(&ListingQuery::default()).await.unwrap();

    assert_eq!(listing.status, "ok");
}

#[tokio::test]
async fn list_movies_sends_query_options() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/list_movies.json"))
        .and(query_param("limit", "5"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let query = ListingQuery {
        limit: Some(5),
        page: Some(2),
    };
    let listing = client.list_movies(&query).await.unwrap();

    assert_eq!(listing.status, "ok");
}

#[tokio::test]
async fn each_call_issues_one_request() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/list_movies.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": "ok" })),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    client.list_movies(&ListingQuery::default()).await.unwrap();
    client.list_movies(&ListingQuery::default()).await.unwrap();
    // expect(2) is verified when the server drops.
}

#[tokio::test]
async fn non_success_status_surfaces_response_text() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/list_movies.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server exploded"))
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let err = client
        .list_movies(&ListingQuery::default())
        .await
        .unwrap_err();

    match err {
        ClientError::APIError(status, body) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "server exploded");
        }
        other => panic!("expected APIError, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_body_is_a_network_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/list_movies.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let err = client
        .list_movies(&ListingQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}

#[tokio::test]
async fn unexpected_shape_is_accepted_without_validation() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    // No `status` field at all; the client still decodes it.
    Mock::given(method("GET"))
        .and(path("/api/v2/list_movies.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "movies": [] })),
        )
        .mount(&server)
        .await;

    let client = client_for(server.uri());
    let listing = client.list_movies(&ListingQuery::default()).await.unwrap();

    assert_eq!(listing.status, "");
}

#[tokio::test]
async fn connection_failure_surfaces_network_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    // Grab an address, then shut the server down so the port is closed.
    let (uri, address) = {
        let server = MockServer::start().await;
        (server.uri(), *server.address())
    };

    // An interposed network can keep answering on the freed port, turning
    // the refused connection into a proxied HTTP response.
    if std::net::TcpStream::connect(address).is_ok() {
        eprintln!("Skipping: freed localhost port still answers in this environment.");
        return;
    }

    let client = client_for(uri);
    let err = client
        .list_movies(&ListingQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}
