//! End-to-end negotiation scenarios
//!
//! Drives the full path a framework would: build the registry at startup,
//! then per request parse the Accept header, execute the negotiation and
//! inspect what reached the client.

use grappelli::{
	AcceptHeader, BodyBuffer, EncoderRegistry, Error, JsonEncoder, ProducesMetadata,
	ResponseWriter, StatusCode, XmlEncoder, negotiate,
};
use grappelli_integration_tests::{Product, decode_xml, run_negotiation};
use serde_json::json;
use tokio_util::sync::CancellationToken;

fn registry() -> EncoderRegistry {
	let mut registry = EncoderRegistry::new();
	registry.register(JsonEncoder::new());
	registry.register(XmlEncoder::new());
	registry
}

#[tokio::test]
async fn test_xml_only_client_gets_tagged_markup() {
	let (status, content_type, body) =
		run_negotiation(&registry(), "application/xml", Product::sample()).await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(content_type.as_deref(), Some("application/xml"));
	assert_eq!(
		decode_xml(&body),
		json!({"id": 1, "name": "Product 1", "price": 100})
	);
}

#[tokio::test]
async fn test_unsupported_accept_gets_406_and_empty_body() {
	let (status, content_type, body) =
		run_negotiation(&registry(), "text/plain", Product::sample()).await;

	assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
	assert_eq!(content_type, None);
	assert!(body.is_empty());
}

#[tokio::test]
async fn test_registration_order_wins_when_both_match() {
	let (status, content_type, body) = run_negotiation(
		&registry(),
		"application/json, application/xml",
		Product::sample(),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(content_type.as_deref(), Some("application/json"));
	assert_eq!(
		serde_json::from_slice::<serde_json::Value>(&body).unwrap(),
		json!({"id": 1, "name": "Product 1", "price": 100})
	);
}

#[tokio::test]
async fn test_client_preference_does_not_override_registration_order() {
	// XML listed first and with the higher weight; JSON still wins
	let (_, content_type, _) = run_negotiation(
		&registry(),
		"application/xml, application/json; q=0.1",
		Product::sample(),
	)
	.await;

	assert_eq!(content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn test_absent_value_gets_204_regardless_of_accept() {
	for accept in ["application/json", "text/plain", ""] {
		let (status, content_type, body) =
			run_negotiation(&registry(), accept, None::<Product>).await;

		assert_eq!(status, StatusCode::NO_CONTENT);
		assert_eq!(content_type, None);
		assert!(body.is_empty());
	}
}

#[tokio::test]
async fn test_quality_ordering_feeds_the_accept_list() {
	// text/plain is preferred but unsupported; xml is the only match
	let (status, content_type, _) = run_negotiation(
		&registry(),
		"text/plain, application/xml; q=0.2",
		Product::sample(),
	)
	.await;

	assert_eq!(status, StatusCode::OK);
	assert_eq!(content_type.as_deref(), Some("application/xml"));
}

#[tokio::test]
async fn test_cancelled_request_aborts_encoding() {
	let cancellation = CancellationToken::new();
	cancellation.cancel();

	let body = BodyBuffer::new();
	let mut response =
		ResponseWriter::new(body.clone()).with_cancellation(cancellation);

	let result = negotiate(Product::sample())
		.execute(
			&registry(),
			&AcceptHeader::parse("application/xml"),
			&mut response,
		)
		.await;

	assert!(matches!(result, Err(Error::Cancelled)));
	assert!(body.contents().is_empty());
}

#[tokio::test]
async fn test_metadata_advertises_the_registry() {
	let metadata = ProducesMetadata::of::<Product>(&registry());

	assert_eq!(metadata.status, StatusCode::OK);
	assert!(metadata.type_name.ends_with("Product"));
	assert_eq!(
		metadata.media_types,
		vec!["application/json", "application/xml"]
	);
}
