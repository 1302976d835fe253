use crate::registry::EntityKind;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Row identifier, unique per entity type and assigned by the store.
pub type EntityId = i64;

/// A typed relational row that the store can persist and retrieve.
///
/// `foreign_key` exposes the row's belongs-to ids by field name so generic
/// relation traversal can be driven by registry metadata instead of
/// per-entity code.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    const KIND: EntityKind;

    fn id(&self) -> EntityId;
    fn set_id(&mut self, id: EntityId);
    fn foreign_key(&self, field: &str) -> Option<EntityId>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    pub class_id: EntityId,
    pub class_name: String,
    pub class_level: i64,
    pub school_year: String,
}

impl Entity for Class {
    const KIND: EntityKind = EntityKind::Class;

    fn id(&self) -> EntityId {
        self.class_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.class_id = id;
    }

    fn foreign_key(&self, _field: &str) -> Option<EntityId> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub class_id: EntityId,
    pub created_at: DateTime<Utc>,
}

impl Entity for Student {
    const KIND: EntityKind = EntityKind::Student;

    fn id(&self) -> EntityId {
        self.student_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.student_id = id;
    }

    fn foreign_key(&self, field: &str) -> Option<EntityId> {
        match field {
            "class_id" => Some(self.class_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub grade_id: EntityId,
    pub value: f64,
    pub date: String,
    pub student_id: EntityId,
    pub course_id: EntityId,
}

impl Entity for Grade {
    const KIND: EntityKind = EntityKind::Grade;

    fn id(&self) -> EntityId {
        self.grade_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.grade_id = id;
    }

    fn foreign_key(&self, field: &str) -> Option<EntityId> {
        match field {
            "student_id" => Some(self.student_id),
            "course_id" => Some(self.course_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub teacher_id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Teacher {
    const KIND: EntityKind = EntityKind::Teacher;

    fn id(&self) -> EntityId {
        self.teacher_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.teacher_id = id;
    }

    fn foreign_key(&self, _field: &str) -> Option<EntityId> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub program_id: EntityId,
    pub program_name: String,
    pub program_description: String,
}

impl Entity for Program {
    const KIND: EntityKind = EntityKind::Program;

    fn id(&self) -> EntityId {
        self.program_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.program_id = id;
    }

    fn foreign_key(&self, _field: &str) -> Option<EntityId> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub subject_id: EntityId,
    pub subject_name: String,
    pub subject_description: String,
    pub program_id: EntityId,
}

impl Entity for Subject {
    const KIND: EntityKind = EntityKind::Subject;

    fn id(&self) -> EntityId {
        self.subject_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.subject_id = id;
    }

    fn foreign_key(&self, field: &str) -> Option<EntityId> {
        match field {
            "program_id" => Some(self.program_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: EntityId,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub teacher_id: EntityId,
    pub subject_id: EntityId,
    pub class_id: EntityId,
}

impl Entity for Course {
    const KIND: EntityKind = EntityKind::Course;

    fn id(&self) -> EntityId {
        self.course_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.course_id = id;
    }

    fn foreign_key(&self, field: &str) -> Option<EntityId> {
        match field {
            "teacher_id" => Some(self.teacher_id),
            "subject_id" => Some(self.subject_id),
            "class_id" => Some(self.class_id),
            _ => None,
        }
    }
}
