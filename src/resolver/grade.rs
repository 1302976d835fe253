use crate::campusdb::CampusDb;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{Course, Grade, GradeRecord, Student};
use crate::registry::EntityKind;
use crate::resolver::args::{
    CreateGradeArgs, DeleteGradeArgs, GetGradeByCourseIdArgs, GetGradeByIdArgs,
    GetGradeByStudentIdArgs, UpdateGradeArgs,
};
use crate::resolver::validate;
use log::info;

impl CampusDb {
    pub(crate) fn shape_grade(&self, grade: Grade) -> ResolveResult<GradeRecord> {
        let student = self.load_parent::<Student>(grade.student_id)?;
        let course = self.load_parent::<Course>(grade.course_id)?;
        Ok(GradeRecord {
            grade,
            student,
            course,
        })
    }

    pub fn get_grade_by_id(&self, args: GetGradeByIdArgs) -> ResolveResult<GradeRecord> {
        let grade: Grade = self
            .db_ops()
            .get_row(args.grade_id)?
            .ok_or(ResolveError::NotFound {
                entity: "Grade",
                id: args.grade_id,
            })?;
        self.shape_grade(grade)
    }

    pub fn get_grade_by_student_id(
        &self,
        args: GetGradeByStudentIdArgs,
    ) -> ResolveResult<Vec<GradeRecord>> {
        let grades: Vec<Grade> = self
            .db_ops()
            .scan_filter(|g: &Grade| g.student_id == args.student_id)?;
        grades.into_iter().map(|g| self.shape_grade(g)).collect()
    }

    pub fn get_grade_by_course_id(
        &self,
        args: GetGradeByCourseIdArgs,
    ) -> ResolveResult<Vec<GradeRecord>> {
        let grades: Vec<Grade> = self
            .db_ops()
            .scan_filter(|g: &Grade| g.course_id == args.course_id)?;
        grades.into_iter().map(|g| self.shape_grade(g)).collect()
    }

    pub fn create_grade(&self, args: CreateGradeArgs) -> ResolveResult<Grade> {
        validate::finite("value", args.value)?;

        let student_rel = self.relation(EntityKind::Grade, "student")?;
        let course_rel = self.relation(EntityKind::Grade, "course")?;

        let mut guard = self.db_ops().begin_write()?;
        self.ensure_reference(&student_rel, args.student_id)?;
        self.ensure_reference(&course_rel, args.course_id)?;

        let grade_id = guard.allocate_id(EntityKind::Grade)?;
        let grade = Grade {
            grade_id,
            value: args.value,
            date: args.date,
            student_id: args.student_id,
            course_id: args.course_id,
        };
        guard.put_row(&grade)?;
        guard.commit()?;

        info!("created Grade {}", grade_id);
        Ok(grade)
    }

    pub fn update_grade(&self, args: UpdateGradeArgs) -> ResolveResult<Grade> {
        let mut guard = self.db_ops().begin_write()?;
        let mut grade: Grade = self
            .db_ops()
            .get_row(args.grade_id)?
            .ok_or(ResolveError::NotFound {
                entity: "Grade",
                id: args.grade_id,
            })?;

        if let Some(value) = args.value {
            validate::finite("value", value)?;
            grade.value = value;
        }
        if let Some(date) = args.date {
            grade.date = date;
        }
        if let Some(student_id) = args.student_id {
            let student_rel = self.relation(EntityKind::Grade, "student")?;
            self.ensure_reference(&student_rel, student_id)?;
            grade.student_id = student_id;
        }
        if let Some(course_id) = args.course_id {
            let course_rel = self.relation(EntityKind::Grade, "course")?;
            self.ensure_reference(&course_rel, course_id)?;
            grade.course_id = course_id;
        }

        guard.put_row(&grade)?;
        guard.commit()?;
        Ok(grade)
    }

    pub fn delete_grade(&self, args: DeleteGradeArgs) -> ResolveResult<Grade> {
        let mut guard = self.db_ops().begin_write()?;
        let grade: Grade = self
            .db_ops()
            .get_row(args.grade_id)?
            .ok_or(ResolveError::NotFound {
                entity: "Grade",
                id: args.grade_id,
            })?;
        self.stage_delete(&mut guard, EntityKind::Grade, args.grade_id)?;
        guard.commit()?;

        info!("deleted Grade {}", args.grade_id);
        Ok(grade)
    }
}
