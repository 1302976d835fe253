use serde::{Deserialize, Serialize};

/// The entity types of the school domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Class,
    Student,
    Grade,
    Teacher,
    Program,
    Subject,
    Course,
}

impl EntityKind {
    /// Prefix under which rows of this entity are keyed in the store.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Student => "student",
            EntityKind::Grade => "grade",
            EntityKind::Teacher => "teacher",
            EntityKind::Program => "program",
            EntityKind::Subject => "subject",
            EntityKind::Course => "course",
        }
    }

    /// Wire-level entity name, as it appears in result shapes.
    pub fn wire_name(&self) -> &'static str {
        match self {
            EntityKind::Class => "Class",
            EntityKind::Student => "Student",
            EntityKind::Grade => "Grade",
            EntityKind::Teacher => "Teacher",
            EntityKind::Program => "Program",
            EntityKind::Subject => "Subject",
            EntityKind::Course => "Course",
        }
    }

    /// Name of the primary-key field in a serialized row.
    pub fn id_field(&self) -> &'static str {
        match self {
            EntityKind::Class => "class_id",
            EntityKind::Student => "student_id",
            EntityKind::Grade => "grade_id",
            EntityKind::Teacher => "teacher_id",
            EntityKind::Program => "program_id",
            EntityKind::Subject => "subject_id",
            EntityKind::Course => "course_id",
        }
    }

    /// All registered entity kinds.
    pub fn all() -> &'static [EntityKind] {
        &[
            EntityKind::Class,
            EntityKind::Student,
            EntityKind::Grade,
            EntityKind::Teacher,
            EntityKind::Program,
            EntityKind::Subject,
            EntityKind::Course,
        ]
    }
}

/// Direction of a relation between two entity types. The belongs-to side
/// holds the foreign-key field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    BelongsTo,
    HasMany,
}

/// What happens to dependents when the parent of a has-many relation is
/// deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Reject the delete while dependents exist.
    Restrict,
    /// Remove dependents (and their own dependents) with the parent.
    Cascade,
}

/// A single declared relation of an entity type.
#[derive(Debug, Clone)]
pub struct Relation {
    /// Relation name as it appears in result shapes and errors.
    pub name: &'static str,
    pub kind: RelationKind,
    /// The entity type on the other side of the relation.
    pub target: EntityKind,
    /// Foreign-key field; lives on this entity for belongs-to, on the
    /// target entity for has-many.
    pub fk_field: &'static str,
    /// Delete policy; meaningful for has-many relations only.
    pub on_delete: DeletePolicy,
}

/// Static description of one entity type: scalar fields, unique keys, and
/// relations to other entity types.
#[derive(Debug, Clone)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub fields: &'static [&'static str],
    /// Scalar fields whose values must be unique across rows of this entity.
    pub unique_keys: &'static [&'static str],
    pub relations: Vec<Relation>,
}

impl EntitySchema {
    /// The belongs-to relation pointing at `target`, if declared.
    pub fn belongs_to(&self, target: EntityKind) -> Option<&Relation> {
        self.relations
            .iter()
            .find(|r| r.kind == RelationKind::BelongsTo && r.target == target)
    }

    /// All has-many relations of this entity.
    pub fn has_many(&self) -> impl Iterator<Item = &Relation> {
        self.relations
            .iter()
            .filter(|r| r.kind == RelationKind::HasMany)
    }

    /// Looks up a relation by its declared name.
    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|r| r.name == name)
    }
}
