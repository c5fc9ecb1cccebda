//! Storefront UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared catalog and cart state from Leptos context and
//! report user intent through callbacks or `CartAction`s. Pages compose them.

pub mod cart;
pub mod checkout;
pub mod floating_cart_button;
pub mod footer;
pub mod header;
pub mod menu;
pub mod menu_item_card;
pub mod sub_nav;
