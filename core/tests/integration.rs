//! Browse-and-search walk against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every core client
//! operation over real HTTP using ureq. Validates that the core's request
//! building and response parsing work end-to-end with the actual server.

use dex_core::{ApiError, HttpMethod, HttpResponse, PokeClient};

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// client handle status interpretation.
fn execute(req: dex_core::HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match req.method {
        HttpMethod::Get => agent.get(&req.path).call(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse::new(status, body)
}

fn start_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });
    addr
}

#[test]
fn browse_and_search() {
    let addr = start_server();
    let client = PokeClient::new(&format!("http://{addr}"));

    // Step 1: first page.
    let page = client.parse_list_page(execute(client.build_list_page(0, 20))).unwrap();
    assert_eq!(page.count, 45);
    assert_eq!(page.results.len(), 20);
    assert!(page.next.is_some());

    // Step 2: walk the remaining pages.
    let mut names: Vec<String> = page.results.iter().map(|s| s.name.clone()).collect();
    let mut offset = 20;
    while offset < page.count {
        let next = client
            .parse_list_page(execute(client.build_list_page(offset, 20)))
            .unwrap();
        names.extend(next.results.into_iter().map(|s| s.name));
        offset += 20;
    }
    assert_eq!(names.len(), 45);
    assert_eq!(names[24], "pikachu");

    // Step 3: resolve a list entry through its detail reference.
    let reference = &page.results[5].url;
    let req = client.build_get_pokemon_by_reference(reference);
    let charizard = client.parse_pokemon_detail(execute(req)).unwrap();
    assert_eq!(charizard.id, 6);
    assert_eq!(charizard.types, vec!["fire", "flying"]);

    // Step 4: exact search by name and by id agree.
    let by_name = client
        .parse_pokemon_detail(execute(client.build_get_pokemon("pikachu")))
        .unwrap();
    let by_id = client
        .parse_pokemon_detail(execute(client.build_get_pokemon("25")))
        .unwrap();
    assert_eq!(by_name, by_id);
    assert!(by_name.sprite_url.ends_with("/25.png"));

    // Step 5: missing front sprite maps to empty string.
    let nidoran = client
        .parse_pokemon_detail(execute(client.build_get_pokemon("nidoran-m")))
        .unwrap();
    assert_eq!(nidoran.sprite_url, "");

    // Step 6: unknown identifier is NotFound.
    let err = client
        .parse_pokemon_detail(execute(client.build_get_pokemon("missingno")))
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 7: URL metacharacters stay inside the identifier and never match.
    for query in ["pikachu?junk=1", "25#nope", "pikachu/", "pokemon/25"] {
        let err = client
            .parse_pokemon_detail(execute(client.build_get_pokemon(query)))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound), "{query:?} gave {err:?}");
    }
}
