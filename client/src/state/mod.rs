//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`cart`, `checkout`, `catalog`) so individual
//! components can depend on small focused models. Each model is plain data
//! with pure transitions; the app shell wraps them in signals and provides
//! them via context.

pub mod cart;
pub mod catalog;
pub mod checkout;
