pub mod attendance;
pub mod certificate;
pub mod common;
pub mod dashboard;
pub mod donation;
pub mod event;
pub mod member;
pub mod photo;
pub mod profile;
pub mod user;
pub mod visitor;

pub use attendance::*;
pub use certificate::*;
pub use common::*;
pub use dashboard::*;
pub use donation::*;
pub use event::*;
pub use member::*;
pub use photo::*;
pub use profile::*;
pub use user::*;
pub use visitor::*;
