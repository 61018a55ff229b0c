//! Credential hashing and token issuance

mod jwt;
mod password;

pub use jwt::{Claims, TokenIssuer, TOKEN_ISSUER};
pub use password::PasswordService;
