//! Order composition and hand-off.
//!
//! SYSTEM CONTEXT
//! ==============
//! `message` turns checkout + cart state into the text the merchant reads;
//! `submit` delivers that text through a pluggable [`submit::OrderSubmitter`].

pub mod message;
pub mod submit;
