mod traits;

pub mod eddsa;

#[cfg(feature = "rsa")]
pub mod rsa;

pub use traits::{get_algorithm, Algorithm, BoxedAlgorithm};

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Algorithm identifier from the JWT `alg` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// EdDSA over Ed25519
    EdDSA,

    /// RSA PKCS#1 v1.5 with SHA-256
    #[cfg(feature = "rsa")]
    RS256,

    /// RSA PKCS#1 v1.5 with SHA-384
    #[cfg(feature = "rsa")]
    RS384,

    /// RSA PKCS#1 v1.5 with SHA-512
    #[cfg(feature = "rsa")]
    RS512,
}

impl AlgorithmId {
    /// Every algorithm compiled into this build
    pub fn all() -> Vec<AlgorithmId> {
        Vec::from([
            AlgorithmId::EdDSA,
            #[cfg(feature = "rsa")]
            AlgorithmId::RS256,
            #[cfg(feature = "rsa")]
            AlgorithmId::RS384,
            #[cfg(feature = "rsa")]
            AlgorithmId::RS512,
        ])
    }

    /// Parse algorithm string from JWT header
    ///
    /// `"none"` is never accepted.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "EdDSA" => Ok(AlgorithmId::EdDSA),

            #[cfg(feature = "rsa")]
            "RS256" => Ok(AlgorithmId::RS256),
            #[cfg(feature = "rsa")]
            "RS384" => Ok(AlgorithmId::RS384),
            #[cfg(feature = "rsa")]
            "RS512" => Ok(AlgorithmId::RS512),

            _ => Err(Error::AlgorithmUnsupported(s.to_string())),
        }
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::EdDSA => "EdDSA",

            #[cfg(feature = "rsa")]
            AlgorithmId::RS256 => "RS256",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS384 => "RS384",
            #[cfg(feature = "rsa")]
            AlgorithmId::RS512 => "RS512",
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signature backends by algorithm name
///
/// Build one at startup and pass it by reference to each
/// [`TokenVerifier`](crate::TokenVerifier). Only verification consults the
/// registry; signing uses the backend named by the token's `alg` header.
/// [`AlgorithmRegistry::new`] registers every algorithm compiled into this build.
pub struct AlgorithmRegistry {
    algorithms: BTreeMap<&'static str, BoxedAlgorithm>,
}

impl AlgorithmRegistry {
    /// Registry with every compiled-in algorithm
    pub fn new() -> Self {
        AlgorithmId::all()
            .into_iter()
            .fold(Self::empty(), |registry, id| registry.with(id))
    }

    /// Registry without any algorithm
    pub fn empty() -> Self {
        Self {
            algorithms: BTreeMap::new(),
        }
    }

    /// Add the built-in backend for `id`
    pub fn with(mut self, id: AlgorithmId) -> Self {
        self.register(get_algorithm(id));
        self
    }

    /// Add a backend, replacing and returning any backend registered under the same name
    pub fn register(&mut self, algorithm: BoxedAlgorithm) -> Option<BoxedAlgorithm> {
        self.algorithms.insert(algorithm.name(), algorithm)
    }

    /// Look up the backend for an `alg` header value
    pub fn get(&self, name: &str) -> Result<&dyn Algorithm> {
        self.algorithms
            .get(name)
            .map(|algorithm| &**algorithm)
            .ok_or_else(|| Error::AlgorithmUnsupported(name.to_string()))
    }

    /// Whether a backend is registered for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    /// Registered algorithm names, sorted
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.algorithms.keys().copied()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
