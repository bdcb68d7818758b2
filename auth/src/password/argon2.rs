use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::cost::HashingCost;
use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Produces Argon2id hashes in PHC string format with a fresh random salt per
/// call. Holds no state besides the cost parameters, so it is cheap to clone
/// and safe to share across threads.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl PasswordHasher {
    /// Create a password hasher with the default cost.
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    /// Create a password hasher with an explicit cost.
    ///
    /// # Errors
    /// * `InvalidCost` - Argon2 rejects the parameter combination
    pub fn with_cost(cost: HashingCost) -> Result<Self, PasswordError> {
        let params = Params::new(cost.memory_kib, cost.iterations, cost.parallelism, None)
            .map_err(|e| PasswordError::InvalidCost(e.to_string()))?;

        Ok(Self { params })
    }

    /// Cost applied to new hashes.
    pub fn cost(&self) -> HashingCost {
        HashingCost {
            memory_kib: self.params.m_cost(),
            iterations: self.params.t_cost(),
            parallelism: self.params.p_cost(),
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `EmptyPassword` - The plaintext is empty
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);

        self.argon2()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// The parameters and salt embedded in `hash` are used, not this
    /// hasher's cost, so hashes created under an older cost still verify.
    /// A hash declaring parameters above [`HashingCost::ceiling`] is refused
    /// without running Argon2. Digest comparison is constant time.
    ///
    /// # Returns
    /// True if the password matches. False on mismatch and on any stored
    /// hash that cannot be parsed.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed_hash) => parsed_hash,
            Err(e) => {
                tracing::debug!(reason = %e, "Stored password hash is malformed");
                return false;
            }
        };

        let declared = match Params::try_from(&parsed_hash) {
            Ok(params) => HashingCost {
                memory_kib: params.m_cost(),
                iterations: params.t_cost(),
                parallelism: params.p_cost(),
            },
            Err(e) => {
                tracing::debug!(reason = %e, "Stored password hash has invalid parameters");
                return false;
            }
        };

        let ceiling = self.cost().ceiling();
        if declared.exceeds(&ceiling) {
            tracing::debug!(
                memory_kib = declared.memory_kib,
                iterations = declared.iterations,
                parallelism = declared.parallelism,
                "Stored password hash exceeds the cost ceiling"
            );
            return false;
        }

        self.argon2()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
