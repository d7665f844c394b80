//! Round-trip coverage for the built-in encoders
//!
//! Encodes through the full negotiation path, then decodes with a
//! structurally compatible decoder and compares field for field.

use grappelli::{EncoderRegistry, JsonEncoder, XmlEncoder};
use grappelli_integration_tests::{Customer, Product, decode_xml, run_negotiation};
use serde::Serialize;
use serde_json::json;

fn registry() -> EncoderRegistry {
	let mut registry = EncoderRegistry::new();
	registry.register(JsonEncoder::new());
	registry.register(XmlEncoder::new());
	registry
}

fn customers() -> (Customer, Customer) {
	(
		Customer {
			id: 7,
			name: "Ada".to_string(),
			nickname: Some("The Countess".to_string()),
		},
		Customer {
			id: 8,
			name: "Charles".to_string(),
			nickname: None,
		},
	)
}

#[tokio::test]
async fn test_json_roundtrip_primitive_record() {
	let original = Product::sample();
	let (_, _, body) = run_negotiation(&registry(), "application/json", original.clone()).await;

	let decoded: Product = serde_json::from_slice(&body).unwrap();
	assert_eq!(decoded, original);
}

#[tokio::test]
async fn test_json_roundtrip_null_optional_field() {
	let (_, without) = customers();
	let (_, _, body) = run_negotiation(&registry(), "application/json", without.clone()).await;

	let decoded: Customer = serde_json::from_slice(&body).unwrap();
	assert_eq!(decoded, without);
	assert_eq!(decoded.nickname, None);
}

#[tokio::test]
async fn test_json_roundtrip_list_of_records() {
	let products = vec![
		Product::sample(),
		Product {
			id: 2,
			name: "Product 2".to_string(),
			price: 250,
		},
		Product {
			id: 3,
			name: "Product 3".to_string(),
			price: 999,
		},
	];
	let (_, _, body) = run_negotiation(&registry(), "application/json", products.clone()).await;

	let decoded: Vec<Product> = serde_json::from_slice(&body).unwrap();
	assert_eq!(decoded, products);
}

#[tokio::test]
async fn test_xml_roundtrip_primitive_record() {
	let original = Product::sample();
	let (_, _, body) = run_negotiation(&registry(), "application/xml", original.clone()).await;

	assert_eq!(decode_xml(&body), serde_json::to_value(&original).unwrap());
}

#[tokio::test]
async fn test_xml_roundtrip_null_optional_field() {
	let (with, without) = customers();

	let (_, _, body) = run_negotiation(&registry(), "application/xml", without.clone()).await;
	assert_eq!(
		decode_xml(&body),
		json!({"id": 8, "name": "Charles", "nickname": null})
	);

	let (_, _, body) = run_negotiation(&registry(), "application/xml", with.clone()).await;
	assert_eq!(
		decode_xml(&body),
		json!({"id": 7, "name": "Ada", "nickname": "The Countess"})
	);
}

#[tokio::test]
async fn test_xml_roundtrip_list_of_records() {
	let products = vec![
		Product::sample(),
		Product {
			id: 2,
			name: "Product 2".to_string(),
			price: 250,
		},
		Product {
			id: 3,
			name: "Product 3".to_string(),
			price: 999,
		},
	];
	let (_, _, body) = run_negotiation(&registry(), "application/xml", products.clone()).await;

	// Lists nest under repeated <item> elements
	let decoded = decode_xml(&body);
	assert_eq!(decoded["item"], serde_json::to_value(&products).unwrap());
}

#[tokio::test]
async fn test_transient_fields_never_reach_the_wire() {
	#[derive(Clone, Serialize)]
	struct Account {
		id: u32,
		#[serde(skip)]
		#[allow(dead_code)]
		secret: String,
	}

	let account = Account {
		id: 42,
		secret: "hunter2".to_string(),
	};

	let (_, _, json_body) = run_negotiation(&registry(), "application/json", account.clone()).await;
	assert!(!String::from_utf8_lossy(&json_body).contains("hunter2"));

	let (_, _, xml_body) = run_negotiation(&registry(), "application/xml", account).await;
	assert_eq!(decode_xml(&xml_body), json!({"id": 42}));
}
