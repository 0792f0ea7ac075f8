//! Authentication subsystem.
//!
//! # Data Flow
//! ```text
//! Login:
//!     GET  /api/v1/auth/state    → state.rs issues a one-time state
//!     browser → OAuth server     → redirect back with ?code&state
//!     POST /api/v1/auth/callback → state.rs consumes state
//!                                → provider.rs exchanges code for a token
//!
//! Every protected request:
//!     http::middleware::auth → provider.rs resolves the bearer token's user
//! ```

pub mod provider;
pub mod state;

#[cfg(test)]
pub mod mock;

pub use provider::{AuthError, AuthenticatedUser, IdentityProvider, OpenShiftIdentityProvider, TokenResponse};
pub use state::OAuthStateStore;

#[cfg(test)]
pub use mock::StaticIdentityProvider;
