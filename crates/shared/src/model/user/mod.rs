mod new;
pub use new::*;

mod user;
pub use user::*;
