mod home;
mod not_found;
mod policy_index;
mod privacy;
mod refund;
mod returns;
mod shipping;
mod terms;

pub use home::Home;
pub use not_found::NotFound;
pub use policy_index::PolicyIndex;
pub use privacy::PrivacyPolicy;
pub use refund::RefundPolicy;
pub use returns::ReturnPolicy;
pub use shipping::ShippingPolicy;
pub use terms::TermsAndConditions;
