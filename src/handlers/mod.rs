pub mod auth;
pub mod system;
pub mod dashboard;
pub mod members;
pub mod visitors;
pub mod attendance;
pub mod donations;
pub mod events;
pub mod certificates;
pub mod photos;
pub mod profile;

pub use auth::auth_config;
pub use system::{health_config, system_config};
pub use dashboard::dashboard_config;
pub use members::member_config;
pub use visitors::visitor_config;
pub use attendance::attendance_config;
pub use donations::donation_config;
pub use events::event_config;
pub use certificates::certificate_config;
pub use photos::photo_config;
pub use profile::profile_config;
