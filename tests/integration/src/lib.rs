//! Shared fixtures and helpers for the integration tests

use grappelli::{
	AcceptHeader, BodyBuffer, EncoderRegistry, ResponseWriter, StatusCode, negotiate,
};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The sample record the original walkthrough serves
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: u32,
	pub name: String,
	pub price: u32,
}

impl Product {
	pub fn sample() -> Self {
		Self {
			id: 1,
			name: "Product 1".to_string(),
			price: 100,
		}
	}
}

/// A record with an optional field, for null round-trips
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
	pub id: u32,
	pub name: String,
	pub nickname: Option<String>,
}

/// Runs a full negotiation and returns what reached the client
pub async fn run_negotiation<T: Serialize>(
	registry: &EncoderRegistry,
	accept: &str,
	value: T,
) -> (StatusCode, Option<String>, Vec<u8>) {
	let accept = AcceptHeader::parse(accept);
	let body = BodyBuffer::new();
	let mut response = ResponseWriter::new(body.clone());

	negotiate(value)
		.execute(registry, &accept, &mut response)
		.await
		.expect("negotiation execution failed");

	let content_type = response
		.headers
		.get("content-type")
		.and_then(|value| value.to_str().ok())
		.map(str::to_string);
	(response.status, content_type, body.contents().to_vec())
}

/// Decodes the XML encoder's output back into a JSON value
///
/// Structurally compatible inverse of the encoder's mapping: leaf text
/// parses back into numbers, booleans or strings; empty elements become
/// null; repeated sibling elements collapse into arrays. The root element
/// is stripped, so the returned value is the field map (or, for encoded
/// lists, a map with one repeated entry).
pub fn decode_xml(bytes: &[u8]) -> Value {
	let mut reader = Reader::from_reader(bytes);
	let mut stack: Vec<(String, Map<String, Value>)> = Vec::new();
	let mut current_text = String::new();

	loop {
		match reader.read_event() {
			Ok(Event::Start(e)) => {
				let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
				stack.push((name, Map::new()));
				current_text.clear();
			}

			Ok(Event::End(_)) => {
				let (name, children) = stack.pop().expect("unbalanced XML");
				let value = if children.is_empty() {
					parse_scalar(&current_text)
				} else {
					Value::Object(children)
				};
				current_text.clear();

				match stack.last_mut() {
					Some((_, parent)) => add_to_parent(parent, &name, value),
					None => return value,
				}
			}

			Ok(Event::Empty(e)) => {
				let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
				match stack.last_mut() {
					Some((_, parent)) => add_to_parent(parent, &name, Value::Null),
					None => return Value::Null,
				}
			}

			Ok(Event::Text(e)) => {
				current_text.push_str(&e.unescape().expect("undecodable XML text"));
			}

			Ok(Event::Eof) => panic!("XML ended before the root element closed"),

			Ok(_) => {}

			Err(error) => panic!("XML decode error: {error}"),
		}
	}
}

fn add_to_parent(parent: &mut Map<String, Value>, name: &str, value: Value) {
	if let Some(existing) = parent.get_mut(name) {
		match existing {
			Value::Array(items) => items.push(value),
			_ => {
				let first = existing.take();
				*existing = Value::Array(vec![first, value]);
			}
		}
	} else {
		parent.insert(name.to_string(), value);
	}
}

fn parse_scalar(text: &str) -> Value {
	if let Ok(number) = text.parse::<i64>() {
		return Value::from(number);
	}
	if let Ok(number) = text.parse::<f64>() {
		return Value::from(number);
	}
	match text {
		"true" => Value::Bool(true),
		"false" => Value::Bool(false),
		_ => Value::String(text.to_string()),
	}
}
