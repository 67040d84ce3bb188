pub mod course;
pub mod envelope;
pub mod lesson;

pub use course::{Course, CourseChanges, CourseTitles};
pub use envelope::ListEnvelope;
pub use lesson::{Lesson, LessonQuery, SortOrder};
