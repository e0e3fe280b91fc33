mod record;
mod user;

pub use record::{Record, RecordKind, SUGGESTED_CATEGORIES};
pub use user::User;

#[cfg(test)]
mod tests;
