pub const PROFILES_PER_PAGE: i64 = 10;

pub const MIN_BATCH_COUNT: i64 = 1;
pub const MAX_BATCH_COUNT: i64 = 5000;

pub const DEFAULT_SEED_COUNT: u32 = 1000;
pub const DEFAULT_RANDOM_USER_URL: &str = "https://randomuser.me/api/";
