//! Fixed credentials and sample content for development and tests.

pub const EMAIL: &str = "caroline@example.com";
pub const PASSWORD: &str = "correct horse battery staple";
pub const GUEST_EMAIL: &str = "guest@example.com";
pub const GUEST_NAME: &str = "Maria Silva";
pub const GUEST_MESSAGE: &str = "Que essa nova fase seja repleta de alegrias!";
