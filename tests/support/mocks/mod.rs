// tests/support/mocks/mod.rs
pub mod article_repos;
pub mod notifications;
pub mod permissions;
pub mod security;
pub mod time;

pub use article_repos::InMemoryArticleRepo;
pub use notifications::{FlakyMailer, RecordingQueue, StaticDirectory};
pub use permissions::{AllowAllGate, DenyAllGate, KeyedGate};
pub use security::{DummyTokenManager, OTHER_TOKEN, TEST_TOKEN};
pub use time::{FixedClock, fixed_now};
