pub mod claims;
pub mod errors;
pub mod handler;
pub mod token;

pub use claims::Role;
pub use claims::SessionClaims;
pub use errors::JwtError;
pub use errors::RoleError;
pub use handler::JwtHandler;
pub use token::SessionToken;
