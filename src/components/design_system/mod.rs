//! Design System Components
//!
//! Small presentational building blocks shared by the pages.

mod badge;
mod card;
mod loading;
mod notice;


pub use badge::{Badge, BadgeVariant};
pub use card::{Card, CardBody};
pub use loading::LoadingSpinner;
pub use notice::{Notice, NoticeKind};
