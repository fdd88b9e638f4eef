use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::setup_test_client;
use ozon_seller_client::{
    BulkResponse, FbsWarehouseStocksParams, OzonError, StockUpdate, StocksInfoFilter,
    StocksInfoParams, UpdateStocksParams, UpdateWarehouseStocksParams, Visibility,
    WarehouseStockUpdate,
};

#[tokio::test]
async fn test_update_stocks_partial_success() {
    // What it tests: A bulk update where one item is rejected still succeeds
    // as a call; the rejected item is reported with its errors.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/product/import/stocks"))
        .and(body_json(json!({
            "stocks": [
                { "offer_id": "PG-2404С1", "stocks": 4 },
                { "product_id": 55946, "stocks": 0 }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [
                { "product_id": 55946, "offer_id": "PG-2404С1", "updated": true, "errors": [] },
                {
                    "product_id": 55947,
                    "offer_id": "PG-2404С2",
                    "updated": false,
                    "errors": [{ "code": "NOT_FOUND", "message": "product not found" }]
                }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = UpdateStocksParams {
        stocks: vec![
            StockUpdate {
                offer_id: "PG-2404С1".into(),
                stock: 4,
                ..Default::default()
            },
            StockUpdate {
                product_id: 55946,
                stock: 0,
                ..Default::default()
            },
        ],
    };

    let response = client
        .products()
        .update_stocks(&params)
        .await
        .expect("partial failure must not fail the call");

    assert_eq!(response.common.status_code, 200);
    assert_eq!(response.items().len(), 2);
    assert!(!response.all_succeeded());

    let succeeded: Vec<_> = response.succeeded().map(|item| item.product_id).collect();
    assert_eq!(succeeded, vec![55946]);

    let failed: Vec<_> = response.failed().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].offer_id, "PG-2404С2");
    assert_eq!(failed[0].errors[0].code, "NOT_FOUND");
    assert_eq!(failed[0].errors[0].message, "product not found");
}

#[tokio::test]
async fn test_update_stocks_batch_limit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/product/import/stocks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": [] })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());

    let too_many = UpdateStocksParams {
        stocks: (0..101)
            .map(|i| StockUpdate {
                offer_id: format!("SKU-{i}"),
                stock: 1,
                ..Default::default()
            })
            .collect(),
    };
    match client.products().update_stocks(&too_many).await {
        Err(OzonError::InvalidParameters(msg)) => assert!(msg.contains("at most 100")),
        other => panic!("expected InvalidParameters, got {other:?}"),
    }

    match client.products().update_stocks(&UpdateStocksParams::default()).await {
        Err(OzonError::InvalidParameters(msg)) => assert!(msg.contains("must not be empty")),
        other => panic!("expected InvalidParameters, got {other:?}"),
    }
}

#[tokio::test]
async fn test_update_warehouse_stocks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/products/stocks"))
        .and(body_json(json!({
            "stocks": [
                { "offer_id": "PH11042", "stock": 4, "warehouse_id": 22142605386000_i64 }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{
                "warehouse_id": 22142605386000_i64,
                "product_id": 118597312,
                "quant_size": 1,
                "offer_id": "PH11042",
                "updated": true,
                "errors": []
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = UpdateWarehouseStocksParams {
        stocks: vec![WarehouseStockUpdate {
            offer_id: "PH11042".into(),
            stock: 4,
            warehouse_id: 22142605386000,
            ..Default::default()
        }],
    };

    let response = client
        .products()
        .update_warehouse_stocks(&params)
        .await
        .expect("request should succeed");

    assert!(response.all_succeeded());
    assert_eq!(response.result[0].quant_size, 1);
    assert_eq!(response.result[0].product_id, 118597312);
}

#[tokio::test]
async fn test_stocks_info_omits_unset_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/product/info/stocks"))
        .and(body_json(json!({
            "limit": 100,
            "filter": { "offer_id": ["136834"] }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cursor": "",
            "total": 1,
            "items": [{
                "offer_id": "136834",
                "product_id": 214887921,
                "stocks": [
                    { "present": 13, "reserved": 0, "type": "fbs", "shipment_type": "SHIPMENT_TYPE_GENERAL", "sku": 1234567 }
                ]
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = StocksInfoParams {
        limit: Some(100),
        filter: StocksInfoFilter {
            offer_id: vec!["136834".into()],
            ..Default::default()
        },
        ..Default::default()
    };

    let response = client
        .products()
        .stocks_info(&params)
        .await
        .expect("request should succeed");

    assert_eq!(response.total, 1);
    let stock = &response.items[0].stocks[0];
    assert_eq!(stock.warehouse_type, "fbs");
    assert_eq!(stock.present, 13);
}

#[tokio::test]
async fn test_stocks_info_sends_explicit_visibility() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/product/info/stocks"))
        .and(body_json(json!({
            "filter": { "visibility": "IN_SALE" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "cursor": "", "total": 0, "items": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = StocksInfoParams {
        filter: StocksInfoFilter {
            visibility: Some(Visibility::InSale),
            ..Default::default()
        },
        ..Default::default()
    };

    let response = client
        .products()
        .stocks_info(&params)
        .await
        .expect("request should succeed");
    assert!(response.items.is_empty());
}

#[tokio::test]
async fn test_fbs_warehouse_stocks() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/product/info/stocks-by-warehouse/fbs"))
        .and(body_json(json!({ "sku": ["1234567"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{
                "sku": 1234567,
                "present": 3,
                "product_id": 214887921,
                "reserved": 1,
                "warehouse_id": 22142605386000_i64,
                "warehouse_name": "Main"
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = FbsWarehouseStocksParams {
        sku: vec!["1234567".into()],
    };

    let response = client
        .products()
        .fbs_warehouse_stocks(&params)
        .await
        .expect("request should succeed");

    assert_eq!(response.result.len(), 1);
    assert_eq!(response.result[0].warehouse_name, "Main");
    assert_eq!(response.result[0].reserved, 1);
}
