use super::*;

#[test]
fn product_endpoints_keep_trailing_slash() {
    assert_eq!(product_endpoint(12), "/api/products/12/");
    assert_eq!(research_endpoint(12), "/api/products/12/research/");
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("tok123"), "Bearer tok123");
}

#[test]
fn user_action_endpoints_live_under_users() {
    assert!(ADD_PRODUCT_ENDPOINT.starts_with(USERS_ENDPOINT));
    assert!(REMOVE_PRODUCT_ENDPOINT.starts_with(USERS_ENDPOINT));
    assert!(ME_ENDPOINT.starts_with(USERS_ENDPOINT));
}

#[test]
fn http_api_is_unavailable_without_browser() {
    let api = HttpCatalogApi;
    let result = futures::executor::block_on(api.list_products("tok"));
    assert_eq!(result, Err(ConsoleError::Unavailable));
}

#[test]
fn recording_fake_tracks_calls_in_order() {
    let api = fake::RecordingApi::new();
    futures::executor::block_on(async {
        let _ = api.list_products("t").await;
        let _ = api.add_product("t", 3).await;
    });
    assert_eq!(api.calls(), vec!["list_products t", "add_product t 3"]);
}
