use ozon_seller_client::OzonClient;

pub const TEST_CLIENT_ID: &str = "836";
pub const TEST_API_KEY: &str = "0c7f1a42-test-key";

/// Set up a test client pointing at the mock server
#[allow(dead_code)]
pub fn setup_test_client(mock_server_uri: &str) -> OzonClient {
    OzonClient::builder()
        .client_id(TEST_CLIENT_ID)
        .api_key(TEST_API_KEY)
        .base_url(mock_server_uri)
        .build()
        .expect("Failed to build OzonClient")
}
