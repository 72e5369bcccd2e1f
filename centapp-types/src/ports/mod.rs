//! Port traits.
//!
//! Request types implement [`ToParams`] so the client can dispatch any of
//! them through one code path.

use crate::domain::Params;

/// Converts a typed request into the flat parameter mapping sent on the wire.
pub trait ToParams {
    fn to_params(&self) -> Params;
}
