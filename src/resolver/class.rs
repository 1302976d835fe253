use crate::campusdb::CampusDb;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{Class, ClassRecord, Course, EntityId, Student};
use crate::registry::EntityKind;
use crate::resolver::args::{
    CreateClassArgs, DeleteClassArgs, GetClassByIdArgs, GetClassByStudentNameArgs, UpdateClassArgs,
};
use crate::resolver::validate;
use log::info;

impl CampusDb {
    pub(crate) fn shape_class(&self, class: Class) -> ResolveResult<ClassRecord> {
        let students_rel = self.relation(EntityKind::Class, "students")?;
        let courses_rel = self.relation(EntityKind::Class, "courses")?;
        let students = self.load_children::<Student>(&students_rel, class.class_id)?;
        let courses = self.load_children::<Course>(&courses_rel, class.class_id)?;
        Ok(ClassRecord {
            class,
            students,
            courses,
        })
    }

    pub fn get_all_class(&self) -> ResolveResult<Vec<ClassRecord>> {
        let classes: Vec<Class> = self.db_ops().scan_rows()?;
        classes.into_iter().map(|c| self.shape_class(c)).collect()
    }

    pub fn get_class_by_id(&self, args: GetClassByIdArgs) -> ResolveResult<ClassRecord> {
        let class: Class = self
            .db_ops()
            .get_row(args.class_id)?
            .ok_or(ResolveError::NotFound {
                entity: "Class",
                id: args.class_id,
            })?;
        self.shape_class(class)
    }

    /// Classes having at least one student whose first or last name contains
    /// the given fragment.
    pub fn get_class_by_student_name(
        &self,
        args: GetClassByStudentNameArgs,
    ) -> ResolveResult<Vec<ClassRecord>> {
        let fragment = args.student_name;
        let students: Vec<Student> = self.db_ops().scan_filter(|s: &Student| {
            s.first_name.contains(&fragment) || s.last_name.contains(&fragment)
        })?;

        let mut class_ids: Vec<EntityId> = students.iter().map(|s| s.class_id).collect();
        class_ids.sort_unstable();
        class_ids.dedup();

        class_ids
            .into_iter()
            .map(|id| {
                let class = self.load_parent::<Class>(id)?;
                self.shape_class(class)
            })
            .collect()
    }

    pub fn create_class(&self, args: CreateClassArgs) -> ResolveResult<Class> {
        validate::non_blank("class_name", &args.class_name)?;
        validate::non_blank("school_year", &args.school_year)?;

        let mut guard = self.db_ops().begin_write()?;
        let class_id = guard.allocate_id(EntityKind::Class)?;
        let class = Class {
            class_id,
            class_name: args.class_name,
            class_level: args.class_level,
            school_year: args.school_year,
        };
        guard.put_row(&class)?;
        guard.commit()?;

        info!("created Class {}", class_id);
        Ok(class)
    }

    pub fn update_class(&self, args: UpdateClassArgs) -> ResolveResult<Class> {
        let mut guard = self.db_ops().begin_write()?;
        let mut class: Class = self
            .db_ops()
            .get_row(args.class_id)?
            .ok_or(ResolveError::NotFound {
                entity: "Class",
                id: args.class_id,
            })?;

        if let Some(name) = args.class_name {
            validate::non_blank("className", &name)?;
            class.class_name = name;
        }
        if let Some(level) = args.class_level {
            class.class_level = level;
        }
        if let Some(year) = args.school_year {
            validate::non_blank("schoolYear", &year)?;
            class.school_year = year;
        }

        guard.put_row(&class)?;
        guard.commit()?;
        Ok(class)
    }

    pub fn delete_class(&self, args: DeleteClassArgs) -> ResolveResult<bool> {
        let mut guard = self.db_ops().begin_write()?;
        if !self.db_ops().exists(EntityKind::Class, args.class_id)? {
            return Err(ResolveError::NotFound {
                entity: "Class",
                id: args.class_id,
            });
        }
        self.stage_delete(&mut guard, EntityKind::Class, args.class_id)?;
        guard.commit()?;

        info!("deleted Class {}", args.class_id);
        Ok(true)
    }
}
