mod landing;
mod policy_layout;

pub use landing::LandingDisplay;
pub use policy_layout::{PolicyLayout, PolicySection};
