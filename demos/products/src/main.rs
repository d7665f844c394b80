//! Walkthrough of the negotiation flow for a small product catalog
//!
//! Plays the role of the surrounding web stack: builds the registry at
//! startup, then simulates `GET /products` and `GET /products/{id}`
//! requests with different `Accept` headers and prints what a client
//! would receive.

use grappelli::{
	AcceptHeader, BodyBuffer, EncoderRegistry, JsonEncoder, NegotiationResult, ProducesMetadata,
	ResponseWriter, XmlEncoder, negotiate,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Product {
	id: u32,
	name: String,
	price: u32,
}

fn catalog() -> Vec<Product> {
	vec![Product {
		id: 1,
		name: "Product 1".to_string(),
		price: 100,
	}]
}

fn find_product(id: u32) -> Option<Product> {
	catalog().into_iter().find(|product| product.id == id)
}

async fn serve<T: Serialize>(
	registry: &EncoderRegistry,
	accept: &str,
	result: NegotiationResult<T>,
) -> grappelli::Result<()> {
	let body = BodyBuffer::new();
	let mut response = ResponseWriter::new(body.clone());

	result
		.execute(registry, &AcceptHeader::parse(accept), &mut response)
		.await?;

	let content_type = response
		.headers
		.get("content-type")
		.and_then(|value| value.to_str().ok())
		.unwrap_or("-");
	println!(
		"  Accept: {accept:<40} -> {} {content_type}",
		response.status
	);
	let contents = body.contents();
	if !contents.is_empty() {
		println!("    {}", String::from_utf8_lossy(&contents));
	}
	Ok(())
}

#[tokio::main]
async fn main() -> grappelli::Result<()> {
	// Startup: the registration order decides ties
	let mut registry = EncoderRegistry::new();
	registry.register(JsonEncoder::new());
	registry.register(XmlEncoder::new());

	let metadata = ProducesMetadata::of::<Product>(&registry);
	println!(
		"route metadata: {} produces {:?} on {}",
		metadata.type_name, metadata.media_types, metadata.status
	);

	let accepts = [
		"application/json",
		"application/xml",
		"application/xml, application/json",
		"text/plain",
	];

	println!("GET /products");
	for accept in accepts {
		serve(&registry, accept, negotiate(catalog())).await?;
	}

	println!("GET /products/1");
	for accept in accepts {
		serve(&registry, accept, negotiate(find_product(1))).await?;
	}

	// An id nobody has: the absent value resolves to 204 No Content
	println!("GET /products/2");
	serve(&registry, "application/json", negotiate(find_product(2))).await?;

	Ok(())
}
