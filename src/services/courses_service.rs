use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::models::{Course, CourseChanges, Lesson, LessonQuery, ListEnvelope};
use crate::transport::{HttpRequest, HttpTransport};

const COURSES_PATH: &str = "/api/courses";
const LESSONS_PATH: &str = "/api/lessons";

/// Data access for courses and lessons. Each call issues exactly one request
/// and keeps no state between calls.
#[derive(Clone)]
pub struct CoursesService {
    transport: Arc<dyn HttpTransport>,
}

impl CoursesService {
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn find_all_courses(&self) -> Result<Vec<Course>, AppError> {
        let courses: Vec<Course> = self.fetch_list(HttpRequest::get(COURSES_PATH)).await?;
        debug!("Fetched {} courses", courses.len());
        Ok(courses)
    }

    pub async fn find_course_by_id(&self, id: i64) -> Result<Course, AppError> {
        let request = HttpRequest::get(format!("{}/{}", COURSES_PATH, id));
        let course: Course = self.fetch_one(request).await?;
        debug!("Fetched course {}", course.id);
        Ok(course)
    }

    pub async fn save_course(&self, id: i64, changes: &CourseChanges) -> Result<Course, AppError> {
        let body = serde_json::to_value(changes)
            .map_err(|e| AppError::InvalidRequest(format!("Failed to encode course changes: {}", e)))?;
        let request = HttpRequest::put(format!("{}/{}", COURSES_PATH, id), body);
        let course: Course = self.fetch_one(request).await?;
        debug!("Saved course {}", course.id);
        Ok(course)
    }

    pub async fn find_lessons(
        &self,
        course_id: i64,
        query: &LessonQuery,
    ) -> Result<Vec<Lesson>, AppError> {
        let request = HttpRequest::get(LESSONS_PATH).with_query(query.to_pairs(course_id));
        let lessons: Vec<Lesson> = self.fetch_list(request).await?;
        debug!("Fetched {} lessons for course {}", lessons.len(), course_id);
        Ok(lessons)
    }

    pub async fn find_lessons_default(&self, course_id: i64) -> Result<Vec<Lesson>, AppError> {
        self.find_lessons(course_id, &LessonQuery::default()).await
    }

    async fn execute(&self, request: HttpRequest) -> Result<String, AppError> {
        let method = request.method.clone();
        let target = request.target();
        debug!("{} {}", method, target);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            warn!(
                "{} {} failed: {} {}",
                method, target, response.status, response.status_text
            );
            return Err(AppError::Http {
                status: response.status,
                status_text: response.status_text,
                body: response.body,
            });
        }
        Ok(response.body)
    }

    async fn fetch_one<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, AppError> {
        let body = self.execute(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse entity: {}", e);
            AppError::MalformedResponse(format!("Failed to parse entity: {}", e))
        })
    }

    async fn fetch_list<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<Vec<T>, AppError> {
        let body = self.execute(request).await?;
        unwrap_payload(&body)
    }
}

/// Parses a `{ "payload": [...] }` body and returns the items.
pub(crate) fn unwrap_payload<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, AppError> {
    let value: Value = serde_json::from_str(body).map_err(|e| {
        warn!("Response is not JSON: {}", e);
        AppError::MalformedResponse(format!("Response is not JSON: {}", e))
    })?;

    if value.get("payload").is_none() {
        warn!("List response has no payload field");
        return Err(AppError::MalformedResponse(
            "List response has no payload field".to_string(),
        ));
    }

    let envelope: ListEnvelope<T> = serde_json::from_value(value).map_err(|e| {
        warn!("Failed to parse payload: {}", e);
        AppError::MalformedResponse(format!("Failed to parse payload: {}", e))
    })?;
    Ok(envelope.into_inner())
}
