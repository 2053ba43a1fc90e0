pub mod m20251001_000001_create_users;
pub mod m20251001_000002_create_assignments;
pub mod m20251001_000003_create_submissions;
