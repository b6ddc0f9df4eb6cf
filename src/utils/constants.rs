/// Header title shown on every authenticated page
pub const APP_TITLE: &str = "Logistics Inventory Management System";

/// Keys written by older builds of the client; removed on logout
pub const STORAGE_KEY_SESSION: &str = "session";
pub const STORAGE_KEY_PROFILE: &str = "profile";

/// Query parameter carrying the page requested before a login redirect
pub const RETURN_TO_PARAM: &str = "from";

pub const LOGIN_FAILED: &str = "Login failed. Please try again.";

/// Page size requested by the user management table
pub const USERS_PER_PAGE: u32 = 10;
