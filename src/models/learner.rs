//! Learner model.
//!
//! This module defines the Learner struct for representing students
//! whose results the engine aggregates.

use serde::{Deserialize, Serialize};

/// Represents a learner enrolled at the school.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Learner {
    /// Unique identifier for the learner.
    pub id: String,
    /// The learner's first name.
    pub first_name: String,
    /// The learner's last name.
    pub last_name: String,
    /// The admission number printed on report cards (e.g., "WIS/24/001").
    pub admission_number: String,
    /// The class the learner belongs to (e.g., "JSS1A").
    pub class_name: String,
}

impl Learner {
    /// Returns the learner's full name as printed on report cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_engine::models::Learner;
    ///
    /// let learner = Learner {
    ///     id: "lrn_001".to_string(),
    ///     first_name: "Terngu".to_string(),
    ///     last_name: "Adakole".to_string(),
    ///     admission_number: "WIS/24/001".to_string(),
    ///     class_name: "JSS1A".to_string(),
    /// };
    /// assert_eq!(learner.full_name(), "Terngu Adakole");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_learner() -> Learner {
        Learner {
            id: "lrn_001".to_string(),
            first_name: "Terngu".to_string(),
            last_name: "Adakole".to_string(),
            admission_number: "WIS/24/001".to_string(),
            class_name: "JSS1A".to_string(),
        }
    }

    #[test]
    fn test_full_name_joins_first_and_last() {
        let learner = create_test_learner();
        assert_eq!(learner.full_name(), "Terngu Adakole");
    }

    #[test]
    fn test_deserialize_learner() {
        let json = r#"{
            "id": "lrn_002",
            "first_name": "Msendoo",
            "last_name": "Iorfa",
            "admission_number": "WIS/24/002",
            "class_name": "JSS1A"
        }"#;

        let learner: Learner = serde_json::from_str(json).unwrap();
        assert_eq!(learner.id, "lrn_002");
        assert_eq!(learner.first_name, "Msendoo");
        assert_eq!(learner.last_name, "Iorfa");
        assert_eq!(learner.admission_number, "WIS/24/002");
        assert_eq!(learner.class_name, "JSS1A");
    }

    #[test]
    fn test_serialize_learner_round_trip() {
        let learner = create_test_learner();
        let json = serde_json::to_string(&learner).unwrap();

        let deserialized: Learner = serde_json::from_str(&json).unwrap();
        assert_eq!(learner, deserialized);
    }
}
