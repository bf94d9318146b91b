pub const SITE_NAME: &str = "Freelance Desk";

/// Longest service or project name accepted, in characters
pub const MAX_NAME_LENGTH: usize = 250;

/// Largest photo accepted for a project, 10 MiB
pub const MAX_PHOTO_BYTES: u64 = 10 * 1024 * 1024;

/// File picker filter for project photos
pub const PHOTO_ACCEPT: &str = "image/*";
