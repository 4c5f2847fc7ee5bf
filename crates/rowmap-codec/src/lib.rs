//! Record codecs for rowmap.
//!
//! Two independent codecs over the shapes defined in `rowmap-model`:
//!
//! - the **typed codec** ([`decode`] / [`encode`]) renames keys and coerces
//!   every value to its field's declared semantic type;
//! - the **untyped rename codec** ([`rename`]) is a pure key rename with no
//!   coercion.
//!
//! Both are pure, stateless, and synchronous: no I/O, no shared mutable
//! state, no retries. A mapping is immutable once constructed and every
//! call allocates its own output record, so concurrent use needs no
//! coordination from this crate.

mod coerce;
mod decode;
mod encode;
pub mod error;
pub mod rename;

pub use decode::{decode, decode_internal, decode_with};
pub use encode::encode;
pub use error::CoercionError;
