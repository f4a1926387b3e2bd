pub mod delete;
pub mod error;
pub mod health;
pub mod item;

pub use delete::*;
pub use error::*;
pub use health::*;
pub use item::*;
