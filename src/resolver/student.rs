use crate::campusdb::CampusDb;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{Class, Grade, Student, StudentRecord};
use crate::registry::EntityKind;
use crate::resolver::args::{
    CreateStudentArgs, DeleteStudentArgs, GetStudentByClassArgs, GetStudentByIdArgs,
    GetStudentByLastNameArgs, UpdateStudentArgs,
};
use crate::resolver::validate;
use chrono::Utc;
use log::info;

impl CampusDb {
    pub(crate) fn shape_student(&self, student: Student) -> ResolveResult<StudentRecord> {
        let grades_rel = self.relation(EntityKind::Student, "grades")?;
        let class = self.load_parent::<Class>(student.class_id)?;
        let grades = self.load_children::<Grade>(&grades_rel, student.student_id)?;
        Ok(StudentRecord {
            student,
            class,
            grades,
        })
    }

    pub fn get_all_students(&self) -> ResolveResult<Vec<StudentRecord>> {
        let students: Vec<Student> = self.db_ops().scan_rows()?;
        students
            .into_iter()
            .map(|s| self.shape_student(s))
            .collect()
    }

    /// Exact match on last name; returns an empty collection on a miss.
    pub fn get_student_by_last_name(
        &self,
        args: GetStudentByLastNameArgs,
    ) -> ResolveResult<Vec<StudentRecord>> {
        let last_name = args.last_name;
        let students: Vec<Student> = self
            .db_ops()
            .scan_filter(|s: &Student| s.last_name == last_name)?;
        students
            .into_iter()
            .map(|s| self.shape_student(s))
            .collect()
    }

    pub fn get_student_by_class(
        &self,
        args: GetStudentByClassArgs,
    ) -> ResolveResult<Vec<StudentRecord>> {
        let students: Vec<Student> = self
            .db_ops()
            .scan_filter(|s: &Student| s.class_id == args.class_id)?;
        students
            .into_iter()
            .map(|s| self.shape_student(s))
            .collect()
    }

    pub fn get_student_by_id(&self, args: GetStudentByIdArgs) -> ResolveResult<StudentRecord> {
        let student: Student =
            self.db_ops()
                .get_row(args.student_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Student",
                    id: args.student_id,
                })?;
        self.shape_student(student)
    }

    pub fn create_student(&self, args: CreateStudentArgs) -> ResolveResult<Student> {
        validate::non_blank("first_name", &args.first_name)?;
        validate::non_blank("last_name", &args.last_name)?;

        let class_rel = self.relation(EntityKind::Student, "class")?;
        let mut guard = self.db_ops().begin_write()?;
        self.ensure_reference(&class_rel, args.class_id)?;

        let student_id = guard.allocate_id(EntityKind::Student)?;
        let student = Student {
            student_id,
            first_name: args.first_name,
            last_name: args.last_name,
            date_of_birth: args.date_of_birth,
            gender: args.gender,
            address: args.address,
            class_id: args.class_id,
            created_at: Utc::now(),
        };
        guard.put_row(&student)?;
        guard.commit()?;

        info!("created Student {}", student_id);
        Ok(student)
    }

    pub fn update_student(&self, args: UpdateStudentArgs) -> ResolveResult<Student> {
        let mut guard = self.db_ops().begin_write()?;
        let mut student: Student =
            self.db_ops()
                .get_row(args.student_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Student",
                    id: args.student_id,
                })?;

        if let Some(first_name) = args.first_name {
            validate::non_blank("first_name", &first_name)?;
            student.first_name = first_name;
        }
        if let Some(last_name) = args.last_name {
            validate::non_blank("last_name", &last_name)?;
            student.last_name = last_name;
        }
        if let Some(date_of_birth) = args.date_of_birth {
            student.date_of_birth = date_of_birth;
        }
        if let Some(gender) = args.gender {
            student.gender = gender;
        }
        if let Some(address) = args.address {
            student.address = address;
        }
        if let Some(class_id) = args.class_id {
            let class_rel = self.relation(EntityKind::Student, "class")?;
            self.ensure_reference(&class_rel, class_id)?;
            student.class_id = class_id;
        }

        guard.put_row(&student)?;
        guard.commit()?;
        Ok(student)
    }

    /// Removes the student and, by policy, all of the student's grades.
    pub fn delete_student(&self, args: DeleteStudentArgs) -> ResolveResult<bool> {
        let mut guard = self.db_ops().begin_write()?;
        if !self.db_ops().exists(EntityKind::Student, args.student_id)? {
            return Err(ResolveError::NotFound {
                entity: "Student",
                id: args.student_id,
            });
        }
        self.stage_delete(&mut guard, EntityKind::Student, args.student_id)?;
        guard.commit()?;

        info!("deleted Student {}", args.student_id);
        Ok(true)
    }
}
