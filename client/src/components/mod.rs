//! Reusable UI components.

pub mod header;
pub mod pagination;
pub mod post_card;
pub mod post_form;
