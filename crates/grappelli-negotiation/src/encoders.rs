//! Built-in response encoders

pub mod json;
pub mod xml;

pub use json::JsonEncoder;
pub use xml::XmlEncoder;
