/// Users are identified by an opaque 128-bit UUID assigned at creation.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
