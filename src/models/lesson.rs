use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: i64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub seq_no: i32,
    pub course_id: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("unknown sort order: {}", other)),
        }
    }
}

/// Filter, sort and paging parameters passed through to the lessons endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonQuery {
    pub filter: String,
    pub sort_order: SortOrder,
    pub page_number: u32,
    pub page_size: u32,
}

impl Default for LessonQuery {
    fn default() -> Self {
        Self {
            filter: String::new(),
            sort_order: SortOrder::Asc,
            page_number: 0,
            page_size: 3,
        }
    }
}

impl LessonQuery {
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn page(mut self, page_number: u32) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Query pairs in wire order; `courseId` always comes first.
    pub fn to_pairs(&self, course_id: i64) -> Vec<(String, String)> {
        vec![
            ("courseId".to_string(), course_id.to_string()),
            ("filter".to_string(), self.filter.clone()),
            ("sortOrder".to_string(), self.sort_order.to_string()),
            ("pageNumber".to_string(), self.page_number.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ]
    }
}
