//! Route-level page components.

pub mod home;
pub mod login;
pub mod post_detail;
pub mod post_edit;
pub mod post_new;
pub mod register;
