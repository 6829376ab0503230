//! Key resolution by key id

use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::keys::Key;
use std::collections::HashMap;

/// Resolves the verification key named by a token's `kid` header
///
/// `algorithm` is the algorithm the token is being verified for, so a resolver
/// can refuse a key of the wrong type. Implemented by [`JwkSet`](crate::jwks::JwkSet)
/// and by a plain `HashMap<String, Key>`.
pub trait KeySetResolver {
    /// The key for `kid`, or [`Error::KeyIdNotFound`]
    fn resolve(&self, kid: &str, algorithm: AlgorithmId) -> Result<Key>;
}

impl KeySetResolver for HashMap<String, Key> {
    fn resolve(&self, kid: &str, _algorithm: AlgorithmId) -> Result<Key> {
        self.get(kid)
            .cloned()
            .ok_or_else(|| Error::KeyIdNotFound(kid.to_string()))
    }
}

impl<R: KeySetResolver + ?Sized> KeySetResolver for &R {
    fn resolve(&self, kid: &str, algorithm: AlgorithmId) -> Result<Key> {
        (**self).resolve(kid, algorithm)
    }
}
