use std::time::Duration;

use ozon_seller_client::{OzonClient, OzonError, DEFAULT_BASE_URL};

#[test]
fn test_config_error() {
    // What it tests: Builder-time validation of the base URL and of the
    // required credentials, before any network I/O.

    // Test invalid URL
    let err = OzonClient::builder()
        .base_url("invalid-url")
        .client_id("836")
        .api_key("key")
        .build()
        .unwrap_err();
    match err {
        OzonError::ConfigurationError(msg) => {
            assert!(msg.contains("Invalid base URL"));
        }
        other => panic!("Expected ConfigurationError for invalid URL, got {other:?}"),
    }

    // Test missing client id
    let err = OzonClient::builder().api_key("key").build().unwrap_err();
    match err {
        OzonError::ConfigurationError(msg) => assert_eq!(msg, "Client-Id is required"),
        other => panic!("Expected ConfigurationError for missing Client-Id, got {other:?}"),
    }

    // Test missing api key
    let err = OzonClient::builder().client_id("836").build().unwrap_err();
    match err {
        OzonError::ConfigurationError(msg) => assert_eq!(msg, "Api-Key is required"),
        other => panic!("Expected ConfigurationError for missing Api-Key, got {other:?}"),
    }
}

#[test]
fn test_builder_rejects_blank_credentials() {
    let err = OzonClient::builder()
        .client_id("   ")
        .api_key("key")
        .build()
        .unwrap_err();
    match err {
        OzonError::ConfigurationError(msg) => assert_eq!(msg, "Client-Id is required"),
        other => panic!("Expected ConfigurationError for Client-Id, got {other:?}"),
    }

    let err = OzonClient::builder()
        .client_id("836")
        .api_key("")
        .build()
        .unwrap_err();
    match err {
        OzonError::ConfigurationError(msg) => assert_eq!(msg, "Api-Key is required"),
        other => panic!("Expected ConfigurationError for Api-Key, got {other:?}"),
    }
}

#[test]
fn test_builder_defaults_to_production_url() {
    let client = OzonClient::builder()
        .client_id("836")
        .api_key("key")
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build");

    assert_eq!(client.base_url().as_str().trim_end_matches('/'), DEFAULT_BASE_URL);
    assert_eq!(client.client_id(), "836");
}

#[test]
fn test_debug_output_hides_api_key() {
    let client = OzonClient::builder()
        .client_id("836")
        .api_key("super-secret-key")
        .build()
        .expect("client should build");

    let debug = format!("{client:?}");
    assert!(debug.contains("836"));
    assert!(!debug.contains("super-secret-key"));
}

#[cfg(feature = "default-client")]
#[test]
fn test_default_client_instance() {
    // Before initialization the instance is not available.
    match ozon_seller_client::instance() {
        Err(OzonError::ConfigurationError(msg)) => assert!(msg.contains("not been initialized")),
        other => panic!("Expected ConfigurationError before initialize, got {other:?}"),
    }

    let client = OzonClient::builder()
        .client_id("836")
        .api_key("key")
        .build()
        .expect("client should build");
    ozon_seller_client::initialize(client);

    let instance = ozon_seller_client::instance().expect("instance should be set");
    assert_eq!(instance.client_id(), "836");
}
