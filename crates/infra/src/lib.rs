//! `userdesk-infra` — persistence and collaborator ports plus their
//! in-process reference implementations.

pub mod memory;
pub mod notify;
pub mod repository;

pub use memory::InMemoryUserRepository;
pub use notify::{FailingNotifier, MessageTemplate, Notifier, RecordingNotifier, TracingNotifier};
pub use repository::UserRepository;
