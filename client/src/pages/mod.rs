//! Route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (filter selection, navigation)
//! and delegates rendering to `components`.

pub mod cart;
pub mod checkout;
pub mod menu;
