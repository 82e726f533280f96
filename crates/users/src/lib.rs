//! `userdesk-users` — the user domain: entity, change sets, password transform.

pub mod password;
pub mod user;

pub use user::{CreateUser, NewUser, User, UserUpdate};
