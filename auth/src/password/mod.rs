pub mod argon2;
pub mod cost;
pub mod errors;

pub use self::argon2::PasswordHasher;
pub use cost::HashingCost;
pub use errors::PasswordError;
