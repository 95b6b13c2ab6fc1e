//! # Envelope Helper Crate
//!
//! This crate defines the uniform response envelope wrapped around every API
//! payload, `{isOk, mssg, data?, expired?}`, together with a runtime validator
//! that narrows untyped JSON to that shape.
//!
//! ## Basic Usage
//!
//! ```rust
//! use envelope::*;
//!
//! let response = ApiResponse::ok("ok", vec![1, 2, 3]);
//! let json = serde_json::to_value(&response).expect("serializable");
//! assert_eq!(json["isOk"], true);
//!
//! let built = ApiResponse::<()>::builder()
//!     .failed()
//!     .mssg("not found")
//!     .build()
//!     .expect("status and message are set");
//! assert!(!built.is_ok);
//! ```
//!
//! ## Validation
//!
//! The shape check only requires the `isOk` and `mssg` keys. Supplying a
//! payload validator additionally requires a non-null `data` accepted by it.
//!
//! ```rust
//! use envelope::*;
//! use serde_json::{json, Value};
//!
//! let value = json!({"isOk": false, "mssg": "not found"});
//! assert!(is_api_response(&value));
//! assert!(!is_api_response_with(&value, |data: &Value| data.is_string()));
//!
//! let value = json!({"isOk": true, "mssg": "ok", "data": "payload"});
//! match narrow_with(&value, |data: &Value| data.is_string()) {
//!     Narrowed::Validated(response) => assert_eq!(response.data(), "payload"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod builder;
mod envelope;
mod validation;

pub use builder::*;
pub use envelope::*;
pub use validation::*;
