//! Component input payloads: parsing and normalization.
//!
//! Every component record carries its properties as a serialized JSON
//! string. Older producers wrap values in small envelope objects such as
//! `{"value": "text"}` or `{"value": {...}, "sourceType": "media"}`; this
//! crate parses the payload and strips those envelopes so components only
//! ever see plain values.
//!
//! # Example
//!
//! ```
//! use canvas_inputs::{normalize_input_value, parse_inputs};
//! use serde_json::json;
//!
//! let props = parse_inputs(r#"{"title": {"value": "Hello"}, "level": 2}"#);
//! assert_eq!(props.get("title"), Some(&json!("Hello")));
//! assert_eq!(props.get("level"), Some(&json!(2)));
//!
//! let image = json!({"value": {"src": "a.png"}, "sourceType": "media"});
//! assert_eq!(normalize_input_value(image), json!({"src": "a.png"}));
//! ```

pub mod error;
pub mod normalize;

pub use error::InputsError;
pub use normalize::{normalize_input_value, parse_inputs, try_parse_inputs, Inputs};
