//! Route handlers organized by resource

pub mod guestbook;
pub mod health;
