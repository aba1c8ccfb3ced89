// Site-wide constants. Build/deploy settings live in Trunk.toml and index.html.

pub const SITE_NAME: &str = "Harbor & Pine Goods";
pub const CONTACT_EMAIL: &str = "support@harborandpine.shop";
pub const POLICIES_UPDATED: &str = "January 15, 2025";

pub const LANDING_TITLE: &str = "Welcome to Harbor & Pine";
pub const LANDING_SUBTITLE: &str = "Small-batch goods, shipped with care.";

// Entrance timings (ms)
pub const ENTRANCE_DURATION_MS: u32 = 500;
pub const SUBTITLE_DELAY_MS: u32 = 300;
pub const ENTRANCE_OFFSET_PX: f64 = -20.0;

// Give the browser one frame to paint the initial styles before flipping.
pub const ENTRANCE_MOUNT_DELAY_MS: u32 = 16;
