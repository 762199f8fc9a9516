//! Per-request database sessions.
mod postgres;
mod session;

#[cfg(test)]
pub mod spy;

pub use postgres::PgSessionFactory;
pub use session::{DbSession, SessionError, SessionFactory, SessionResult};
