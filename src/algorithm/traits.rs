use super::AlgorithmId;
use crate::error::Result;
use crate::keys::{Key, SigningKey};

/// Core algorithm trait that all JWT signature algorithms implement
///
/// One implementation per algorithm identifier. Implementations are stateless,
/// so one instance serves any number of threads.
pub trait Algorithm: Send + Sync {
    /// The algorithm this backend implements
    fn id(&self) -> AlgorithmId;

    /// The algorithm identifier as it appears in the `alg` header (e.g., "EdDSA", "RS256")
    fn name(&self) -> &'static str {
        self.id().as_str()
    }

    /// Sign `signing_input` (`header.claims`, both still encoded)
    fn sign(&self, signing_input: &str, key: &SigningKey) -> Result<Vec<u8>>;

    /// Verify a signature
    ///
    /// # Arguments
    /// * `signing_input` - The data that was signed (header.claims)
    /// * `signature` - The decoded signature bytes
    /// * `key` - The key to use for verification
    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()>;
}

/// Type alias for boxed algorithm trait objects
pub type BoxedAlgorithm = Box<dyn Algorithm>;

/// Get the backend for the given algorithm ID
pub fn get_algorithm(algorithm: AlgorithmId) -> BoxedAlgorithm {
    match algorithm {
        AlgorithmId::EdDSA => Box::new(super::eddsa::EdDSA),

        #[cfg(feature = "rsa")]
        AlgorithmId::RS256 => Box::new(super::rsa::RS256),
        #[cfg(feature = "rsa")]
        AlgorithmId::RS384 => Box::new(super::rsa::RS384),
        #[cfg(feature = "rsa")]
        AlgorithmId::RS512 => Box::new(super::rsa::RS512),
    }
}
