use super::types::{DeletePolicy, EntityKind, EntitySchema, Relation, RelationKind};
use crate::error::ResolveError;
use std::collections::HashMap;

/// Single source of truth for entity metadata.
///
/// EntityRegistry is responsible for:
/// - Describing every entity type's scalar fields and unique keys
/// - Declaring the relations between entity types, including the fixed
///   delete policy of every has-many relation
/// - Resolving wire-level entity names
///
/// The registry is built once at startup and is read-only afterwards; it is
/// owned by the database handle and passed into resolver logic explicitly.
pub struct EntityRegistry {
    schemas: HashMap<EntityKind, EntitySchema>,
    by_name: HashMap<&'static str, EntityKind>,
}

fn belongs_to(name: &'static str, target: EntityKind, fk_field: &'static str) -> Relation {
    Relation {
        name,
        kind: RelationKind::BelongsTo,
        target,
        fk_field,
        on_delete: DeletePolicy::Restrict,
    }
}

fn has_many(
    name: &'static str,
    target: EntityKind,
    fk_field: &'static str,
    on_delete: DeletePolicy,
) -> Relation {
    Relation {
        name,
        kind: RelationKind::HasMany,
        target,
        fk_field,
        on_delete,
    }
}

impl EntityRegistry {
    /// Builds the full static registry for the school domain.
    ///
    /// Delete policies: grades follow their student or course; every other
    /// has-many relation restricts deletion while dependents exist.
    pub fn bootstrap() -> Self {
        let mut registry = Self {
            schemas: HashMap::new(),
            by_name: HashMap::new(),
        };

        registry.register(EntitySchema {
            kind: EntityKind::Class,
            fields: &["class_name", "class_level", "school_year"],
            unique_keys: &[],
            relations: vec![
                has_many("students", EntityKind::Student, "class_id", DeletePolicy::Restrict),
                has_many("courses", EntityKind::Course, "class_id", DeletePolicy::Restrict),
            ],
        });

        registry.register(EntitySchema {
            kind: EntityKind::Student,
            fields: &[
                "first_name",
                "last_name",
                "date_of_birth",
                "gender",
                "address",
                "created_at",
            ],
            unique_keys: &[],
            relations: vec![
                belongs_to("class", EntityKind::Class, "class_id"),
                has_many("grades", EntityKind::Grade, "student_id", DeletePolicy::Cascade),
            ],
        });

        registry.register(EntitySchema {
            kind: EntityKind::Grade,
            fields: &["value", "date"],
            unique_keys: &[],
            relations: vec![
                belongs_to("student", EntityKind::Student, "student_id"),
                belongs_to("course", EntityKind::Course, "course_id"),
            ],
        });

        registry.register(EntitySchema {
            kind: EntityKind::Teacher,
            fields: &[
                "first_name",
                "last_name",
                "email_address",
                "password",
                "created_at",
            ],
            unique_keys: &["email_address"],
            relations: vec![has_many(
                "courses",
                EntityKind::Course,
                "teacher_id",
                DeletePolicy::Restrict,
            )],
        });

        registry.register(EntitySchema {
            kind: EntityKind::Program,
            fields: &["program_name", "program_description"],
            unique_keys: &["program_name"],
            relations: vec![has_many(
                "subjects",
                EntityKind::Subject,
                "program_id",
                DeletePolicy::Restrict,
            )],
        });

        registry.register(EntitySchema {
            kind: EntityKind::Subject,
            fields: &["subject_name", "subject_description"],
            unique_keys: &["subject_name"],
            relations: vec![
                belongs_to("program", EntityKind::Program, "program_id"),
                has_many("courses", EntityKind::Course, "subject_id", DeletePolicy::Restrict),
            ],
        });

        registry.register(EntitySchema {
            kind: EntityKind::Course,
            fields: &["date", "start_time", "end_time"],
            unique_keys: &[],
            relations: vec![
                belongs_to("teacher", EntityKind::Teacher, "teacher_id"),
                belongs_to("subject", EntityKind::Subject, "subject_id"),
                belongs_to("class", EntityKind::Class, "class_id"),
                has_many("grades", EntityKind::Grade, "course_id", DeletePolicy::Cascade),
            ],
        });

        registry
    }

    fn register(&mut self, schema: EntitySchema) {
        self.by_name.insert(schema.kind.wire_name(), schema.kind);
        self.schemas.insert(schema.kind, schema);
    }

    /// Returns the schema for a known entity kind.
    pub fn describe(&self, kind: EntityKind) -> &EntitySchema {
        self.schemas
            .get(&kind)
            .expect("bootstrap registers every entity kind")
    }

    /// Resolves a wire-level entity name to its schema.
    pub fn describe_name(&self, name: &str) -> Result<&EntitySchema, ResolveError> {
        self.by_name
            .get(name)
            .map(|kind| self.describe(*kind))
            .ok_or_else(|| ResolveError::UnknownEntity(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_registers_every_entity_kind() {
        let registry = EntityRegistry::bootstrap();
        for kind in EntityKind::all() {
            let schema = registry.describe(*kind);
            assert_eq!(schema.kind, *kind);
        }
    }

    #[test]
    fn describe_name_resolves_wire_names() {
        let registry = EntityRegistry::bootstrap();
        assert_eq!(registry.describe_name("Student").unwrap().kind, EntityKind::Student);
        assert!(matches!(
            registry.describe_name("Janitor"),
            Err(ResolveError::UnknownEntity(_))
        ));
    }

    #[test]
    fn grade_relations_cascade_from_student_and_course() {
        let registry = EntityRegistry::bootstrap();

        let student = registry.describe(EntityKind::Student);
        let grades = student.relation("grades").unwrap();
        assert_eq!(grades.on_delete, DeletePolicy::Cascade);

        let course = registry.describe(EntityKind::Course);
        let grades = course.relation("grades").unwrap();
        assert_eq!(grades.on_delete, DeletePolicy::Cascade);

        // Everything else restricts.
        let class = registry.describe(EntityKind::Class);
        assert!(class.has_many().all(|r| r.on_delete == DeletePolicy::Restrict));
        let teacher = registry.describe(EntityKind::Teacher);
        assert!(teacher.has_many().all(|r| r.on_delete == DeletePolicy::Restrict));
    }

    #[test]
    fn belongs_to_lookup_finds_fk_field() {
        let registry = EntityRegistry::bootstrap();
        let course = registry.describe(EntityKind::Course);
        let rel = course.belongs_to(EntityKind::Teacher).unwrap();
        assert_eq!(rel.fk_field, "teacher_id");
        assert!(course.belongs_to(EntityKind::Program).is_none());
    }
}
