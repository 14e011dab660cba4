mod uuid;
pub use uuid::*;

mod date;
pub use date::*;
