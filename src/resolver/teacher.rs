use crate::campusdb::CampusDb;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{Course, Teacher, TeacherRecord};
use crate::registry::EntityKind;
use crate::resolver::args::{
    CreateTeacherArgs, DeleteTeacherArgs, GetTeacherByEmailArgs, GetTeacherByIdArgs,
    GetTeacherByLastNameArgs, UpdateTeacherArgs,
};
use crate::resolver::validate;
use chrono::Utc;
use log::info;

impl CampusDb {
    pub(crate) fn shape_teacher(&self, teacher: Teacher) -> ResolveResult<TeacherRecord> {
        let courses_rel = self.relation(EntityKind::Teacher, "courses")?;
        let courses = self.load_children::<Course>(&courses_rel, teacher.teacher_id)?;
        Ok(TeacherRecord { teacher, courses })
    }

    pub fn get_all_teachers(&self) -> ResolveResult<Vec<TeacherRecord>> {
        let teachers: Vec<Teacher> = self.db_ops().scan_rows()?;
        teachers
            .into_iter()
            .map(|t| self.shape_teacher(t))
            .collect()
    }

    pub fn get_teacher_by_id(&self, args: GetTeacherByIdArgs) -> ResolveResult<TeacherRecord> {
        let teacher: Teacher =
            self.db_ops()
                .get_row(args.teacher_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Teacher",
                    id: args.teacher_id,
                })?;
        self.shape_teacher(teacher)
    }

    pub fn get_teacher_by_last_name(
        &self,
        args: GetTeacherByLastNameArgs,
    ) -> ResolveResult<Vec<TeacherRecord>> {
        let last_name = args.last_name;
        let teachers: Vec<Teacher> = self
            .db_ops()
            .scan_filter(|t: &Teacher| t.last_name == last_name)?;
        teachers
            .into_iter()
            .map(|t| self.shape_teacher(t))
            .collect()
    }

    /// Unique-key lookup; resolves through the email index and returns
    /// `None` on a miss.
    pub fn get_teacher_by_email(
        &self,
        args: GetTeacherByEmailArgs,
    ) -> ResolveResult<Option<TeacherRecord>> {
        let owner =
            self.db_ops()
                .unique_owner(EntityKind::Teacher, "email_address", &args.email_address)?;
        match owner {
            Some(id) => {
                let teacher = self.load_parent::<Teacher>(id)?;
                Ok(Some(self.shape_teacher(teacher)?))
            }
            None => Ok(None),
        }
    }

    pub fn create_teacher(&self, args: CreateTeacherArgs) -> ResolveResult<Teacher> {
        validate::non_blank("first_name", &args.first_name)?;
        validate::non_blank("last_name", &args.last_name)?;
        validate::email("email_address", &args.email_address)?;
        validate::non_blank("password", &args.password)?;

        let mut guard = self.db_ops().begin_write()?;
        self.ensure_unique(EntityKind::Teacher, "email_address", &args.email_address, None)?;

        let teacher_id = guard.allocate_id(EntityKind::Teacher)?;
        let teacher = Teacher {
            teacher_id,
            first_name: args.first_name,
            last_name: args.last_name,
            email_address: args.email_address,
            password: args.password,
            created_at: Utc::now(),
        };
        guard.put_row(&teacher)?;
        guard.put_unique(
            EntityKind::Teacher,
            "email_address",
            &teacher.email_address,
            teacher_id,
        )?;
        guard.commit()?;

        info!("created Teacher {}", teacher_id);
        Ok(teacher)
    }

    pub fn update_teacher(&self, args: UpdateTeacherArgs) -> ResolveResult<Teacher> {
        let mut guard = self.db_ops().begin_write()?;
        let mut teacher: Teacher =
            self.db_ops()
                .get_row(args.teacher_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Teacher",
                    id: args.teacher_id,
                })?;

        if let Some(first_name) = args.first_name {
            validate::non_blank("first_name", &first_name)?;
            teacher.first_name = first_name;
        }
        if let Some(last_name) = args.last_name {
            validate::non_blank("last_name", &last_name)?;
            teacher.last_name = last_name;
        }
        if let Some(email_address) = args.email_address {
            validate::email("email_address", &email_address)?;
            if email_address != teacher.email_address {
                self.ensure_unique(
                    EntityKind::Teacher,
                    "email_address",
                    &email_address,
                    Some(teacher.teacher_id),
                )?;
                guard.delete_unique(EntityKind::Teacher, "email_address", &teacher.email_address);
                guard.put_unique(
                    EntityKind::Teacher,
                    "email_address",
                    &email_address,
                    teacher.teacher_id,
                )?;
            }
            teacher.email_address = email_address;
        }
        if let Some(password) = args.password {
            validate::non_blank("password", &password)?;
            teacher.password = password;
        }

        guard.put_row(&teacher)?;
        guard.commit()?;
        Ok(teacher)
    }

    /// Rejected while the teacher still has courses.
    pub fn delete_teacher(&self, args: DeleteTeacherArgs) -> ResolveResult<Teacher> {
        let mut guard = self.db_ops().begin_write()?;
        let teacher: Teacher =
            self.db_ops()
                .get_row(args.teacher_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Teacher",
                    id: args.teacher_id,
                })?;
        self.stage_delete(&mut guard, EntityKind::Teacher, args.teacher_id)?;
        guard.commit()?;

        info!("deleted Teacher {}", args.teacher_id);
        Ok(teacher)
    }
}
