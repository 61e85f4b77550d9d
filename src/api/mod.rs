pub mod client;
pub mod search;
pub mod slides;
pub mod upload;


pub use client::*;
pub use search::*;
pub use slides::*;
pub use upload::*;
