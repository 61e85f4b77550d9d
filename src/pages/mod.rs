pub mod home;
pub mod search;
pub mod slide_detail;
pub mod upload;

pub use home::HomePage;
pub use search::SearchPage;
pub use slide_detail::SlideDetailPage;
pub use upload::UploadPage;
