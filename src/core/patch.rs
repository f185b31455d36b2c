//! JSON merge-patch (RFC 7396) over an empty customer
//!
//! A PATCH body is merged onto the canonical encoding of [`Customer::default`] and
//! the result decoded back into a [`Customer`]. Keys missing from the body keep the
//! baseline's zero value, so "not mentioned" and "set to zero/empty" end up the same.

use crate::core::customer::Customer;
use crate::core::error::{CustomerError, CustomerResult};
use serde_json::Value;

/// Merge `body` onto an empty customer and decode the result.
///
/// Fails with [`CustomerError::BodyFormat`] when the body is not JSON or when the
/// merged document does not decode into a customer (a top-level array or a string
/// where an integer belongs, for instance).
pub fn merge_onto_empty(body: &[u8]) -> CustomerResult<Customer> {
    let mut target = serde_json::to_value(Customer::default())
        .map_err(|e| CustomerError::operation_failed(format!("baseline encoding: {}", e)))?;

    let patch: Value = serde_json::from_slice(body)
        .map_err(|e| CustomerError::body_format(format!("patch body error: {}", e)))?;

    json_patch::merge(&mut target, &patch);

    serde_json::from_value(target)
        .map_err(|e| CustomerError::body_format(format!("unmarshal error: {}", e)))
}
