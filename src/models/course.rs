use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseTitles {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub titles: CourseTitles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_list_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<bool>,
}

impl Course {
    /// Overlays the set fields of `changes`, the way the remote API merges a PUT body.
    /// The merge is shallow: a set `titles` replaces the whole titles object.
    pub fn apply(&mut self, changes: &CourseChanges) {
        if let Some(titles) = &changes.titles {
            self.titles = titles.clone();
        }
        if changes.seq_no.is_some() {
            self.seq_no = changes.seq_no;
        }
        if changes.url.is_some() {
            self.url = changes.url.clone();
        }
        if changes.icon_url.is_some() {
            self.icon_url = changes.icon_url.clone();
        }
        if changes.course_list_icon.is_some() {
            self.course_list_icon = changes.course_list_icon.clone();
        }
        if changes.category.is_some() {
            self.category = changes.category.clone();
        }
        if changes.lessons_count.is_some() {
            self.lessons_count = changes.lessons_count;
        }
        if changes.promo.is_some() {
            self.promo = changes.promo;
        }
    }
}

/// Partial course used as a PUT body. Unset fields are left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub titles: Option<CourseTitles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_no: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_list_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<bool>,
}

impl CourseChanges {
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            titles: Some(CourseTitles {
                description: description.into(),
                long_description: None,
            }),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_camel_case_and_ignores_unknown_fields() {
        let course: Course = serde_json::from_value(json!({
            "id": 12,
            "titles": {
                "description": "Angular Testing Course",
                "longDescription": "In-depth guide to Unit Testing and E2E Testing"
            },
            "iconUrl": "https://example.com/angular-testing.png",
            "lessonsCount": 10,
            "category": "BEGINNER",
            "seqNo": 0,
            "unknown": "ignored"
        }))
        .unwrap();

        assert_eq!(course.id, 12);
        assert_eq!(course.titles.description, "Angular Testing Course");
        assert_eq!(course.lessons_count, Some(10));
        assert_eq!(course.seq_no, Some(0));
        assert!(course.promo.is_none());
    }

    #[test]
    fn changes_serialize_only_set_fields() {
        let body = serde_json::to_value(CourseChanges::description("Testing Course")).unwrap();
        assert_eq!(body, json!({ "titles": { "description": "Testing Course" } }));
    }

    #[test]
    fn apply_keeps_unset_fields() {
        let mut course: Course = serde_json::from_value(json!({
            "id": 3,
            "titles": { "description": "Old", "longDescription": "Long" },
            "category": "ADVANCED"
        }))
        .unwrap();

        course.apply(&CourseChanges {
            promo: Some(true),
            ..CourseChanges::default()
        });

        assert_eq!(course.titles.description, "Old");
        assert_eq!(course.titles.long_description.as_deref(), Some("Long"));
        assert_eq!(course.category.as_deref(), Some("ADVANCED"));
        assert_eq!(course.promo, Some(true));
    }

    #[test]
    fn apply_replaces_titles_as_a_whole() {
        let mut course: Course = serde_json::from_value(json!({
            "id": 12,
            "titles": { "description": "Old", "longDescription": "Long" }
        }))
        .unwrap();

        course.apply(&CourseChanges::description("New"));

        assert_eq!(course.titles.description, "New");
        assert!(course.titles.long_description.is_none());
    }
}
