use crate::campusdb::CampusDb;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{Class, Course, CourseRecord, Grade, Subject, Teacher};
use crate::registry::EntityKind;
use crate::resolver::args::{
    CreateCourseArgs, DeleteCourseArgs, GetCourseByIdArgs, GetCoursesByClassIdArgs,
    GetCoursesBySubjectIdArgs, GetCoursesByTeacherIdArgs, UpdateCourseArgs,
};
use log::info;

impl CampusDb {
    pub(crate) fn shape_course(&self, course: Course) -> ResolveResult<CourseRecord> {
        let grades_rel = self.relation(EntityKind::Course, "grades")?;
        let teacher = self.load_parent::<Teacher>(course.teacher_id)?;
        let subject = self.load_parent::<Subject>(course.subject_id)?;
        let class = self.load_parent::<Class>(course.class_id)?;
        let grades = self.load_children::<Grade>(&grades_rel, course.course_id)?;
        Ok(CourseRecord {
            course,
            teacher,
            subject,
            class,
            grades,
        })
    }

    pub fn get_course_by_id(&self, args: GetCourseByIdArgs) -> ResolveResult<CourseRecord> {
        let course: Course =
            self.db_ops()
                .get_row(args.course_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Course",
                    id: args.course_id,
                })?;
        self.shape_course(course)
    }

    pub fn get_courses_by_teacher_id(
        &self,
        args: GetCoursesByTeacherIdArgs,
    ) -> ResolveResult<Vec<CourseRecord>> {
        let courses: Vec<Course> = self
            .db_ops()
            .scan_filter(|c: &Course| c.teacher_id == args.teacher_id)?;
        courses.into_iter().map(|c| self.shape_course(c)).collect()
    }

    pub fn get_courses_by_subject_id(
        &self,
        args: GetCoursesBySubjectIdArgs,
    ) -> ResolveResult<Vec<CourseRecord>> {
        let courses: Vec<Course> = self
            .db_ops()
            .scan_filter(|c: &Course| c.subject_id == args.subject_id)?;
        courses.into_iter().map(|c| self.shape_course(c)).collect()
    }

    pub fn get_courses_by_class_id(
        &self,
        args: GetCoursesByClassIdArgs,
    ) -> ResolveResult<Vec<CourseRecord>> {
        let courses: Vec<Course> = self
            .db_ops()
            .scan_filter(|c: &Course| c.class_id == args.class_id)?;
        courses.into_iter().map(|c| self.shape_course(c)).collect()
    }

    pub fn create_course(&self, args: CreateCourseArgs) -> ResolveResult<Course> {
        let teacher_rel = self.relation(EntityKind::Course, "teacher")?;
        let subject_rel = self.relation(EntityKind::Course, "subject")?;
        let class_rel = self.relation(EntityKind::Course, "class")?;

        let mut guard = self.db_ops().begin_write()?;
        self.ensure_reference(&teacher_rel, args.teacher_id)?;
        self.ensure_reference(&subject_rel, args.subject_id)?;
        self.ensure_reference(&class_rel, args.class_id)?;

        let course_id = guard.allocate_id(EntityKind::Course)?;
        let course = Course {
            course_id,
            date: args.date,
            start_time: args.start_time,
            end_time: args.end_time,
            teacher_id: args.teacher_id,
            subject_id: args.subject_id,
            class_id: args.class_id,
        };
        guard.put_row(&course)?;
        guard.commit()?;

        info!("created Course {}", course_id);
        Ok(course)
    }

    pub fn update_course(&self, args: UpdateCourseArgs) -> ResolveResult<Course> {
        let mut guard = self.db_ops().begin_write()?;
        let mut course: Course =
            self.db_ops()
                .get_row(args.course_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Course",
                    id: args.course_id,
                })?;

        if let Some(date) = args.date {
            course.date = date;
        }
        if let Some(start_time) = args.start_time {
            course.start_time = start_time;
        }
        if let Some(end_time) = args.end_time {
            course.end_time = end_time;
        }
        if let Some(teacher_id) = args.teacher_id {
            let teacher_rel = self.relation(EntityKind::Course, "teacher")?;
            self.ensure_reference(&teacher_rel, teacher_id)?;
            course.teacher_id = teacher_id;
        }
        if let Some(subject_id) = args.subject_id {
            let subject_rel = self.relation(EntityKind::Course, "subject")?;
            self.ensure_reference(&subject_rel, subject_id)?;
            course.subject_id = subject_id;
        }
        if let Some(class_id) = args.class_id {
            let class_rel = self.relation(EntityKind::Course, "class")?;
            self.ensure_reference(&class_rel, class_id)?;
            course.class_id = class_id;
        }

        guard.put_row(&course)?;
        guard.commit()?;
        Ok(course)
    }

    /// Removes the course and, by policy, all grades recorded for it.
    pub fn delete_course(&self, args: DeleteCourseArgs) -> ResolveResult<Course> {
        let mut guard = self.db_ops().begin_write()?;
        let course: Course =
            self.db_ops()
                .get_row(args.course_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Course",
                    id: args.course_id,
                })?;
        self.stage_delete(&mut guard, EntityKind::Course, args.course_id)?;
        guard.commit()?;

        info!("deleted Course {}", args.course_id);
        Ok(course)
    }
}
