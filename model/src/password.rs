//! Password hashing for the `createUser` mutation.
//!
//! Passwords are persisted only as salted bcrypt hashes. Every call to
//! [`hash`] draws a fresh random salt, so two users with the same password end
//! up with different stored values, and the cost factor keeps each hash
//! deliberately slow to compute.

use bcrypt::BcryptError;

/// The bcrypt cost factor, attached to the GraphQL context at startup.
///
/// Higher values trade `createUser` latency for brute-force resistance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashCost(pub u32);

impl Default for HashCost {
    fn default() -> Self {
        Self(10)
    }
}

/// Hash a plaintext password with a random salt at the given cost.
pub fn hash(plaintext: &str, cost: HashCost) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, cost.0)
}

/// Check a plaintext password against a stored hash.
pub fn verify(plaintext: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, hash)
}
