use crate::algorithm::{Algorithm, AlgorithmId};
use crate::error::{Error, Result};
use crate::keys::{Key, SigningKey};
use ring::rand::SystemRandom;
use ring::signature::{self, RsaEncoding, UnparsedPublicKey, VerificationAlgorithm};

/// RS256 algorithm (RSA with SHA-256)
pub struct RS256;

/// RS384 algorithm (RSA with SHA-384)
pub struct RS384;

/// RS512 algorithm (RSA with SHA-512)
pub struct RS512;

impl Algorithm for RS256 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::RS256
    }

    fn sign(&self, signing_input: &str, key: &SigningKey) -> Result<Vec<u8>> {
        sign_rsa(
            self.name(),
            signing_input,
            key,
            &signature::RSA_PKCS1_SHA256,
        )
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA256,
        )
    }
}

impl Algorithm for RS384 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::RS384
    }

    fn sign(&self, signing_input: &str, key: &SigningKey) -> Result<Vec<u8>> {
        sign_rsa(
            self.name(),
            signing_input,
            key,
            &signature::RSA_PKCS1_SHA384,
        )
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA384,
        )
    }
}

impl Algorithm for RS512 {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::RS512
    }

    fn sign(&self, signing_input: &str, key: &SigningKey) -> Result<Vec<u8>> {
        sign_rsa(
            self.name(),
            signing_input,
            key,
            &signature::RSA_PKCS1_SHA512,
        )
    }

    fn verify(&self, signing_input: &str, signature: &[u8], key: &Key) -> Result<()> {
        verify_rsa(
            signing_input,
            signature,
            key,
            &signature::RSA_PKCS1_2048_8192_SHA512,
        )
    }
}

/// Generic RSA PKCS#1 v1.5 signing
fn sign_rsa(
    name: &str,
    signing_input: &str,
    key: &SigningKey,
    encoding: &'static dyn RsaEncoding,
) -> Result<Vec<u8>> {
    let key_pair = key.as_rsa()?;
    let rng = SystemRandom::new();
    let mut signature = vec![0u8; key_pair.public().modulus_len()];
    key_pair
        .sign(encoding, &rng, signing_input.as_bytes(), &mut signature)
        .map_err(|_| Error::SigningFailed(name.to_string()))?;
    Ok(signature)
}

/// Generic RSA PKCS#1 v1.5 signature verification
fn verify_rsa(
    signing_input: &str,
    signature: &[u8],
    key: &Key,
    algorithm: &'static dyn VerificationAlgorithm,
) -> Result<()> {
    let rsa_key = key.as_rsa()?;

    UnparsedPublicKey::new(algorithm, rsa_key.as_der())
        .verify(signing_input.as_bytes(), signature)
        .map_err(|_| Error::SignatureInvalid)
}
