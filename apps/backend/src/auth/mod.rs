pub mod bearer;
pub mod claims;
pub mod jwt;
pub mod password;

pub use claims::{AccessClaims, UserRole};
pub use jwt::{mint_access_token, verify_access_token};
