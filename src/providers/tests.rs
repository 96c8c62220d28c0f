use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::trello::TrelloClient;
use super::{BoardSource, FetchError};

fn client(server: &MockServer) -> TrelloClient {
    TrelloClient::new("k3y".into(), "t0ken".into(), server.uri())
}

#[tokio::test]
async fn fetch_lists_passes_credentials_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/boards/board-1/lists"))
        .and(query_param("key", "k3y"))
        .and(query_param("token", "t0ken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "l1", "name": "Nya leveranser"},
            {"id": "l2", "name": "Klara"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let lists = client(&server).fetch_lists("board-1").await.unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0].name, "Nya leveranser");
    assert_eq!(lists[1].id, "l2");
}

#[tokio::test]
async fn fetch_cards_requests_members_and_labels() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/lists/l1/cards"))
        .and(query_param("members", "true"))
        .and(query_param("labels", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "5f2b8c1e0000000000000000",
                "name": "Order 1042",
                "url": "https://trello.com/c/x",
                "dateLastActivity": "2024-03-05T13:07:00.000Z",
                "desc": "",
                "labels": [{"id": "a", "name": "Express", "color": "red"}]
            }
        ])))
        .mount(&server)
        .await;

    let cards = client(&server).fetch_cards("l1").await.unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Order 1042");
    // idList was not in the response, so it is filled from the request.
    assert_eq!(cards[0].id_list, "l1");
}

#[tokio::test]
async fn non_success_status_is_reported_in_swedish() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/boards/missing/lists"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server).fetch_lists("missing").await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert_eq!(err.to_string(), "Kunde inte hämta listor: HTTP 404: Not Found");
}

#[tokio::test]
async fn server_error_on_cards_uses_card_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/lists/l1/cards"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client(&server).fetch_cards("l1").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Kunde inte hämta kort: HTTP 500: Internal Server Error"
    );
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/boards/b/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_lists("b").await.unwrap_err();
    assert!(matches!(err, FetchError::Decode { .. }));
    assert!(err.to_string().starts_with("Kunde inte hämta listor: "));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = TrelloClient::new("k".into(), "t".into(), format!("http://{addr}"));
    let err = client.fetch_lists("b").await.unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
    assert!(err.to_string().starts_with("Kunde inte hämta listor: "));
}

#[tokio::test]
async fn ids_are_percent_encoded_in_the_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/1/boards/a%2Fb/lists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let lists = client(&server).fetch_lists("a/b").await.unwrap();
    assert!(lists.is_empty());
}
