use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::setup_test_client;
use ozon_seller_client::{
    ArchiveParams, Attribute, AttributeValue, AttributesBySkuFilter, AttributesBySkuParams,
    AttributesFilter, AttributesParams, BulkResponse, ChangeOfferIdsParams,
    DeleteWithoutSkuParams, DeleteWithoutSkuProduct, EconomyInfoParams, ImportProductItem,
    ImportProductsParams, ListByIdsParams, OfferIdChange, OzonError, ProductListFilter,
    ProductListParams, RelatedSkusParams, SkuAvailability, UpdateImagesParams, Vat,
};

fn assert_invalid_parameters<T: std::fmt::Debug>(result: Result<T, OzonError>, needle: &str) {
    match result {
        Err(OzonError::InvalidParameters(msg)) => {
            assert!(msg.contains(needle), "unexpected message: {msg}");
        }
        other => panic!("expected InvalidParameters, got {other:?}"),
    }
}

#[tokio::test]
async fn test_identifier_groups_are_exclusive() {
    // What it tests: Mixing identifier kinds is rejected locally and no
    // request reaches the server.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let products = client.products();

    let list = ProductListParams {
        filter: ProductListFilter {
            offer_id: vec!["136748".into()],
            product_id: vec![223681945],
            ..Default::default()
        },
        ..Default::default()
    };
    assert_invalid_parameters(products.list(&list).await, "offer_id, product_id");

    let by_ids = ListByIdsParams {
        product_id: vec![223681945],
        sku: vec![1234567],
        ..Default::default()
    };
    assert_invalid_parameters(products.list_by_ids(&by_ids).await, "product_id, sku");

    let attributes = AttributesParams {
        filter: AttributesFilter {
            offer_id: vec!["136748".into()],
            product_id: vec![223681945],
            ..Default::default()
        },
        ..Default::default()
    };
    assert_invalid_parameters(products.attributes(&attributes).await, "only one identifier group");

    let by_sku = AttributesBySkuParams {
        filter: AttributesBySkuFilter {
            offer_id: vec!["136748".into()],
            sku: vec!["1234567".into()],
            ..Default::default()
        },
        ..Default::default()
    };
    assert_invalid_parameters(products.attributes_by_sku(&by_sku).await, "offer_id, sku");
}

#[tokio::test]
async fn test_import_sends_default_service_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/product/import"))
        .and(body_json(json!({
            "items": [{
                "attributes": [{
                    "complex_id": 0,
                    "id": 5076,
                    "values": [{ "dictionary_value_id": 971082156, "value": "Stand" }]
                }],
                "description_category_id": 17028922,
                "depth": 10,
                "dimension_unit": "mm",
                "height": 250,
                "images": [],
                "name": "Phone case",
                "offer_id": "143210608",
                "price": "1000",
                "service_type": "IS_CODE_SERVICE",
                "vat": "0.1",
                "weight": 100,
                "weight_unit": "g",
                "width": 150
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": { "task_id": 172549793 }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = ImportProductsParams {
        items: vec![ImportProductItem {
            attributes: vec![Attribute {
                complex_id: 0,
                id: 5076,
                values: vec![AttributeValue {
                    dictionary_value_id: 971082156,
                    value: "Stand".into(),
                }],
            }],
            description_category_id: 17028922,
            depth: 10,
            dimension_unit: "mm".into(),
            height: 250,
            name: "Phone case".into(),
            offer_id: "143210608".into(),
            price: "1000".into(),
            vat: Vat::Ten,
            weight: 100,
            weight_unit: "g".into(),
            width: 150,
            ..Default::default()
        }],
    };

    let response = client.products().import(&params).await.expect("import should succeed");
    assert_eq!(response.result.task_id, 172549793);
}

#[tokio::test]
async fn test_import_limits_are_checked_locally() {
    let mock_server = MockServer::start().await;
    let client = setup_test_client(&mock_server.uri());

    let item = ImportProductItem {
        name: "Phone case".into(),
        offer_id: "143210608".into(),
        ..Default::default()
    };

    let long_offer = ImportProductsParams {
        items: vec![ImportProductItem {
            offer_id: "x".repeat(51),
            ..item.clone()
        }],
    };
    assert_invalid_parameters(client.products().import(&long_offer).await, "offer_id");

    let with_primary = ImportProductsParams {
        items: vec![ImportProductItem {
            primary_image: "https://cdn.example.com/main.jpg".into(),
            images: vec!["https://cdn.example.com/1.jpg".into(); 15],
            ..item.clone()
        }],
    };
    assert_invalid_parameters(client.products().import(&with_primary).await, "at most 14");

    let too_many = ImportProductsParams {
        items: vec![item; 101],
    };
    assert_invalid_parameters(client.products().import(&too_many).await, "at most 100");

    let images = UpdateImagesParams {
        images: vec!["https://cdn.example.com/1.jpg".into(); 16],
        product_id: 1,
        ..Default::default()
    };
    assert_invalid_parameters(client.products().update_images(&images).await, "at most 15");

    let related = RelatedSkusParams {
        skus: vec!["1".into(); 201],
    };
    assert_invalid_parameters(client.products().related_skus(&related).await, "at most 200");

    let change = ChangeOfferIdsParams {
        update_offer_id: vec![OfferIdChange {
            new_offer_id: "n".repeat(51),
            offer_id: "old".into(),
        }],
    };
    assert_invalid_parameters(client.products().change_offer_ids(&change).await, "new_offer_id");

    assert!(mock_server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_list_omits_unset_visibility() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/product/list"))
        .and(body_json(json!({
            "filter": { "product_id": [223681945] },
            "limit": 100
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "items": [{
                    "product_id": 223681945,
                    "offer_id": "136748",
                    "has_fbo_stocks": false,
                    "has_fbs_stocks": true,
                    "archived": false,
                    "is_discounted": false,
                    "quants": [{ "warehouse_id": 1, "quantity": 5, "reserved": 1 }]
                }],
                "total": 1,
                "last_id": ""
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = ProductListParams {
        filter: ProductListFilter {
            product_id: vec![223681945],
            ..Default::default()
        },
        limit: Some(100),
        ..Default::default()
    };

    let response = client.products().list(&params).await.expect("list should succeed");
    let item = &response.result.items[0];
    assert!(item.has_fbs_stocks);
    assert_eq!(item.quants[0].quantity, 5);
}

#[tokio::test]
async fn test_list_rejects_oversized_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let products = client.products();

    let by_product_id = ProductListParams {
        filter: ProductListFilter {
            product_id: (0..1001).collect(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_invalid_parameters(products.list(&by_product_id).await, "filter.product_id");

    let by_offer_id = ProductListParams {
        filter: ProductListFilter {
            offer_id: (0..1001).map(|n| n.to_string()).collect(),
            ..Default::default()
        },
        ..Default::default()
    };
    assert_invalid_parameters(products.list(&by_offer_id).await, "filter.offer_id");
}

#[tokio::test]
async fn test_list_by_ids_decodes_product_details() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/product/info/list"))
        .and(body_json(json!({ "offer_id": ["010", "23"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "id": 78712196,
                "name": "Phone case",
                "offer_id": "010",
                "barcodes": ["OZN653473453"],
                "created_at": "2023-02-09T06:46:44.152Z",
                "currency_code": "RUB",
                "price": "1000.0000",
                "is_autoarchived": true,
                "statuses": {
                    "status": "price_sent",
                    "moderate_status": "approved",
                    "status_updated_at": "2023-02-09T06:46:44.152Z"
                },
                "stocks": {
                    "has_stock": true,
                    "stocks": [{ "present": 7, "reserved": 2, "sku": 1234567, "source": "fbs" }]
                },
                "visibility_details": { "has_price": true, "has_stock": true, "reasons": {} },
                "model_info": { "model_id": 43, "count": 2 }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = ListByIdsParams {
        offer_id: vec!["010".into(), "23".into()],
        ..Default::default()
    };

    let response = client
        .products()
        .list_by_ids(&params)
        .await
        .expect("request should succeed");

    let product = &response.items[0];
    assert_eq!(product.id, 78712196);
    assert!(product.is_auto_archived);
    assert!(product.created_at.is_some());
    assert_eq!(product.statuses.moderate_status, "approved");
    assert_eq!(product.stocks.stocks[0].present, 7);
    assert_eq!(product.model_info.count, 2);
}

#[tokio::test]
async fn test_attributes_by_sku() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v4/product/info/attributes"))
        .and(body_json(json!({
            "filter": { "sku": ["1234567"] },
            "limit": 10
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": [{
                "id": 213761435,
                "offer_id": "21470",
                "name": "Phone case",
                "attributes": [{ "id": 85, "complex_id": 0, "values": [{ "dictionary_value_id": 0, "value": "Brand" }] }],
                "model_info": { "model_id": 1, "count": 3 }
            }],
            "total": 1,
            "last_id": ""
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = AttributesBySkuParams {
        filter: AttributesBySkuFilter {
            sku: vec!["1234567".into()],
            ..Default::default()
        },
        limit: Some(10),
        ..Default::default()
    };

    let response = client
        .products()
        .attributes_by_sku(&params)
        .await
        .expect("request should succeed");

    let product = &response.result[0];
    assert_eq!(product.attributes[0].values[0].value, "Brand");
    assert_eq!(product.model_info.as_ref().map(|info| info.count), Some(3));
}

#[tokio::test]
async fn test_delete_without_sku_reports_per_item() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/products/delete"))
        .and(body_json(json!({ "products": [{ "offer_id": "033" }, { "offer_id": "034" }] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": [
                { "offer_id": "033", "is_deleted": true, "error": "" },
                { "offer_id": "034", "is_deleted": false, "error": "product has sku" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = DeleteWithoutSkuParams {
        products: vec![
            DeleteWithoutSkuProduct { offer_id: "033".into() },
            DeleteWithoutSkuProduct { offer_id: "034".into() },
        ],
    };

    let response = client
        .products()
        .delete_without_sku(&params)
        .await
        .expect("request should succeed");

    let failed: Vec<_> = response.failed().map(|status| status.error.as_str()).collect();
    assert_eq!(failed, vec!["product has sku"]);
    assert_eq!(response.succeeded().count(), 1);
}

#[tokio::test]
async fn test_archive() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/product/archive"))
        .and(body_json(json!({ "product_id": [125529926] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": true })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = ArchiveParams {
        product_id: vec![125529926],
    };

    let response = client.products().archive(&params).await.expect("request should succeed");
    assert!(response.result);
}

#[tokio::test]
async fn test_related_skus() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/product/related-sku/get"))
        .and(body_json(json!({ "sku": ["1234567", "7654321"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "availability": "AVAILABLE",
                "delivery_schema": "FBS",
                "product_id": 100,
                "sku": 1234567
            }],
            "errors": [{ "code": "NOT_FOUND", "sku": 7654321, "message": "sku not found" }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = RelatedSkusParams {
        skus: vec!["1234567".into(), "7654321".into()],
    };

    let response = client
        .products()
        .related_skus(&params)
        .await
        .expect("request should succeed");

    assert_eq!(response.items[0].availability, SkuAvailability::Available);
    assert_eq!(response.items[0].deleted_at, None);
    assert_eq!(response.errors[0].sku, 7654321);
}

#[tokio::test]
async fn test_economy_info_reads_quant_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/product/quant/info"))
        .and(body_json(json!({ "quant_code": ["q-1"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{
                "offer_id": "PH8865",
                "product_id": 100,
                "quant_info": {
                    "quants": [{
                        "quant_code": "q-1",
                        "quant_sice": 6,
                        "price": "120",
                        "dimensions": { "depth": 10, "height": 20, "weight": 300, "width": 40 }
                    }]
                }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let params = EconomyInfoParams {
        quant_code: vec!["q-1".into()],
    };

    let response = client
        .products()
        .economy_info(&params)
        .await
        .expect("request should succeed");

    let quant = &response.items[0].quant_info.quants[0];
    assert_eq!(quant.quant_size, 6);
    assert_eq!(quant.dimensions.weight, 300);
}
