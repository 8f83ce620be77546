pub mod jwt;
pub mod password;
pub mod receipt;

pub use jwt::*;
pub use password::*;
pub use receipt::*;
