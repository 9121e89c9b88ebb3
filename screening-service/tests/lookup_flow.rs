//! End-to-end tests of the lookup pipeline against a mock upstream
//! sanctions API: validation short-circuit, request shape, scoring, and
//! upstream failure propagation.

use screening_service::{
    BirthYearInput, LookupResult, MatchOutcome, RawQuery, ScreeningConfig, ScreeningError,
    ScreeningService,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn raw_query(name: &str, year: i64, country: &str) -> RawQuery {
    RawQuery {
        full_name: Some(name.to_string()),
        birth_year: Some(BirthYearInput::Number(year)),
        country: Some(country.to_string()),
    }
}

fn service_for(server: &MockServer) -> ScreeningService {
    let config = ScreeningConfig::new(server.uri(), "test-api-key");
    ScreeningService::new(config).expect("client should build")
}

#[tokio::test]
async fn invalid_input_returns_field_errors_without_calling_upstream() {
    let server = MockServer::start().await;

    // Any request reaching the server is a contract violation.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": {} })))
        .expect(0)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service.lookup(&RawQuery::default()).await.unwrap();

    match result {
        LookupResult::Invalid { errors } => {
            assert!(errors.contains_key("full_name"));
            assert!(errors.contains_key("birth_year"));
            assert!(errors.contains_key("country"));
        }
        other => panic!("expected validation errors, got {:?}", other),
    }
}

#[tokio::test]
async fn request_body_carries_key_and_fixed_search_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_partial_json(json!({
            "apiKey": "test-api-key",
            "minScore": 100,
            "source": ["SDN"],
            "cases": [{ "name": "John Doe" }],
            "type": ["individual"],
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "matches": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .lookup(&raw_query("John Doe", 1970, "Iran"))
        .await
        .unwrap();

    assert_eq!(result, LookupResult::Matches { matches: vec![] });
}

#[tokio::test]
async fn empty_result_set_is_a_no_hit_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "matches": { "John Doe": [] } })),
        )
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .lookup(&raw_query("John Doe", 1970, "Iran"))
        .await
        .unwrap();

    assert_eq!(result, LookupResult::Matches { matches: vec![] });
}

#[tokio::test]
async fn candidates_are_scored_in_upstream_order() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": {
                "John Doe": [
                    {
                        "dob": "12 Jan 1970",
                        "addresses": [{ "country": "Iran", "city": "Tehran" }],
                        "remarks": "ignored upstream field",
                    },
                    {
                        "addresses": [{ "country": "France" }],
                    },
                    {
                        "dob": "circa 1970s",
                    },
                ]
            }
        })))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .lookup(&raw_query("John Doe", 1970, "Iran"))
        .await
        .unwrap();

    let expected = vec![
        MatchOutcome {
            full_name: true,
            birth_year: true,
            country: true,
        },
        MatchOutcome {
            full_name: true,
            birth_year: false,
            country: false,
        },
        MatchOutcome {
            full_name: true,
            birth_year: false,
            country: false,
        },
    ];
    assert_eq!(result, LookupResult::Matches { matches: expected });
}

#[tokio::test]
async fn name_absent_from_response_map_fails_closed_to_no_hit() {
    let server = MockServer::start().await;

    // The upstream echoes a different name string than was submitted.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": { "JOHN DOE": [{ "dob": "1970" }] }
        })))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let result = service
        .lookup(&raw_query("John Doe", 1970, "Iran"))
        .await
        .unwrap();

    assert_eq!(result, LookupResult::Matches { matches: vec![] });
}

#[tokio::test]
async fn upstream_500_surfaces_as_fatal_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service
        .lookup(&raw_query("John Doe", 1970, "Iran"))
        .await
        .unwrap_err();

    match err {
        ScreeningError::Upstream { status, .. } => assert_eq!(status, 500),
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_upstream_surfaces_as_transport_error() {
    // Reserve a port, then release it so the connection is refused.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind to an open port");
    let addr = listener.local_addr().expect("listener has a local address");
    drop(listener);

    let config = ScreeningConfig::new(format!("http://{}", addr), "test-api-key");
    let service = ScreeningService::new(config).expect("client should build");
    let err = service
        .lookup(&raw_query("John Doe", 1970, "Iran"))
        .await
        .unwrap_err();

    assert!(matches!(err, ScreeningError::Transport(_)));
}

#[tokio::test]
async fn lookup_is_idempotent_against_a_fixed_dataset() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "matches": {
                "John Doe": [{ "dob": "1970", "addresses": [{ "country": "Iran" }] }]
            }
        })))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let raw = raw_query("John Doe", 1970, "Iran");

    let first = service.lookup(&raw).await.unwrap();
    let second = service.lookup(&raw).await.unwrap();
    assert_eq!(first, second);
}

#[test]
fn country_reference_list_assigns_ids_by_position() {
    let list = screening_service::countries();
    assert!(list.iter().any(|c| c.name == "Iran"));
    for (i, item) in list.iter().enumerate() {
        assert_eq!(item.id, i);
    }
}
