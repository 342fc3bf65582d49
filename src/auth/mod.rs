//! Authentication: token storage, local JWT inspection and the session manager.

pub mod jwt;
pub mod session;
pub mod token_store;

pub use jwt::Claims;
pub use session::{AuthSession, LoginOutcome, TokenResponse, TwoFactorSetup};
pub use token_store::{FileTokenStore, MemoryTokenStore, StoredTokens, TokenStore};
