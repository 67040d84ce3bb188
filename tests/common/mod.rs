#![allow(dead_code)]

use courses_client::models::{Course, Lesson};
use serde_json::json;

const COURSE_TITLES: [(i64, &str, &str); 12] = [
    (1, "Serverless Angular with Firebase Course", "ADVANCED"),
    (2, "Angular Core Deep Dive", "BEGINNER"),
    (3, "RxJs In Practice Course", "BEGINNER"),
    (4, "NgRx In Depth", "ADVANCED"),
    (5, "Angular for Beginners", "BEGINNER"),
    (6, "Angular Security Course - Web Security Fundamentals", "ADVANCED"),
    (7, "Angular PWA - Progressive Web Apps Course", "ADVANCED"),
    (8, "Angular Advanced Library Laboratory: Build Your Own Library", "ADVANCED"),
    (9, "The Complete Typescript Course", "BEGINNER"),
    (10, "Rxjs and Reactive Patterns Angular Architecture Course", "BEGINNER"),
    (11, "Angular Material Course", "BEGINNER"),
    (12, "Angular Testing Course", "BEGINNER"),
];

pub fn courses() -> Vec<Course> {
    COURSE_TITLES
        .iter()
        .map(|(id, description, category)| {
            serde_json::from_value(json!({
                "id": id,
                "seqNo": id - 1,
                "url": format!("course-{}", id),
                "iconUrl": format!("https://example.com/courses/{}.png", id),
                "courseListIcon": "https://example.com/icons/angular.svg",
                "titles": {
                    "description": description,
                    "longDescription": format!("Learn the essentials of {}", description)
                },
                "category": category,
                "lessonsCount": 10,
                "promo": false
            }))
            .expect("seed course is valid")
        })
        .collect()
}

pub fn course(id: i64) -> Course {
    courses()
        .into_iter()
        .find(|c| c.id == id)
        .expect("seed course exists")
}

const TESTING_LESSONS: [(&str, &str); 10] = [
    ("Angular Testing Course - Helicopter View", "04:17"),
    ("Setting Up the Development Environment", "06:05"),
    ("Introduction to Jasmine, Spies and specs", "07:35"),
    ("Introduction to Service Testing", "05:31"),
    ("Settting up the Angular TestBed", "05:51"),
    ("Mocking Angular HTTP requests", "04:12"),
    ("Simulating Failing HTTP Requests", "05:21"),
    ("Introduction to Angular Component Testing", "06:01"),
    ("Testing Angular Components with @Input", "03:48"),
    ("Testing Angular Components with @Output", "04:10"),
];

pub fn lessons_for_course(course_id: i64) -> Vec<Lesson> {
    if course_id != 12 {
        return Vec::new();
    }
    TESTING_LESSONS
        .iter()
        .enumerate()
        .map(|(i, (description, duration))| Lesson {
            id: 120 + i as i64,
            description: description.to_string(),
            duration: Some(duration.to_string()),
            seq_no: i as i32 + 1,
            course_id,
        })
        .collect()
}
