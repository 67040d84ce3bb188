pub mod cancel;
pub mod courses_service;

pub use cancel::with_cancellation;
pub use courses_service::CoursesService;
