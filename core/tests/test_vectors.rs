//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use dex_core::{ApiError, HttpMethod, HttpResponse, PokeClient, PokemonPage};

const BASE_URL: &str = "https://pokeapi.co/api/v2";

fn client() -> PokeClient {
    PokeClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    let body = match &sim["body"] {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    HttpResponse::new(sim["status"].as_u64().unwrap() as u16, body)
}

fn assert_expected_error(name: &str, err: ApiError, expected: &str) {
    match expected {
        "NotFound" => assert!(matches!(err, ApiError::NotFound), "{name}: expected NotFound, got {err:?}"),
        "HttpError" => assert!(matches!(err, ApiError::HttpError { .. }), "{name}: expected HttpError, got {err:?}"),
        "DeserializationError" => assert!(
            matches!(err, ApiError::DeserializationError(_)),
            "{name}: expected DeserializationError, got {err:?}"
        ),
        "MalformedResponse" => assert!(
            matches!(err, ApiError::MalformedResponse { .. }),
            "{name}: expected MalformedResponse, got {err:?}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// List page
// ---------------------------------------------------------------------------

#[test]
fn list_page_test_vectors() {
    let raw = include_str!("../../test-vectors/list_page.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let offset = case["input"]["offset"].as_u64().unwrap() as u32;
        let limit = case["input"]["limit"].as_u64().unwrap() as u32;
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_list_page(offset, limit);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        // Verify parse
        let result = c.parse_list_page(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let page = result.unwrap();
            let expected: PokemonPage = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(page, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Detail
// ---------------------------------------------------------------------------

#[test]
fn detail_test_vectors() {
    let raw = include_str!("../../test-vectors/detail.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build, either from a list reference or from a raw identifier.
        let req = match (case.get("input_reference"), case.get("input_id_or_name")) {
            (Some(reference), _) => c.build_get_pokemon_by_reference(reference.as_str().unwrap()),
            (None, Some(id)) => c.build_get_pokemon(id.as_str().unwrap()),
            (None, None) => panic!("{name}: no input"),
        };
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        // Verify parse
        let result = c.parse_pokemon_detail(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, result.unwrap_err(), expected_error.as_str().unwrap());
        } else {
            let detail = serde_json::to_value(result.unwrap()).unwrap();
            assert_eq!(detail, case["expected_result"], "{name}: parsed result");
        }
    }
}
