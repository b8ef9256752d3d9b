/// Cash granted to every newly registered account, as a decimal string.
pub const STARTING_CASH: &str = "10000";

/// Default database file name.
pub const DB_FILE_NAME: &str = "tradebook.db";
