mod exercise;
pub use exercise::*;

mod filter;
pub use filter::*;

mod new;
pub use new::*;
