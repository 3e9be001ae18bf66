//! Course - A unit of training an employee may be required to complete
//!
//! Course is a Value Object, compared by value.
//! Courses come from the Catalog and are immutable once loaded.

/// Unique identifier for a Course
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CourseId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course - A training course from the Catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    title: String,
}

impl Course {
    /// Create a new Course
    pub fn new(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }

    pub fn id(&self) -> &CourseId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_ids_order_lexically() {
        let mut ids = vec![CourseId::new("C10"), CourseId::new("C02"), CourseId::new("C1")];
        ids.sort();

        let ordered: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        assert_eq!(ordered, vec!["C02", "C1", "C10"]);
    }

    #[test]
    fn test_course_accessors() {
        let course = Course::new(CourseId::new("C1"), "Safety Basics");
        assert_eq!(course.id().as_str(), "C1");
        assert_eq!(course.title(), "Safety Basics");
    }
}
