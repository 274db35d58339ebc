//! Authentication: token persistence, session bootstrap, Google sign-in.

pub mod google;
pub mod session;
pub mod tokens;
