use crate::campusdb::CampusDb;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{Course, Program, Subject, SubjectRecord};
use crate::registry::EntityKind;
use crate::resolver::args::{
    CreateSubjectArgs, DeleteSubjectArgs, GetSubjectByIdArgs, GetSubjectByNameArgs,
    GetSubjectsByProgramArgs, UpdateSubjectArgs,
};
use crate::resolver::validate;
use log::info;

impl CampusDb {
    pub(crate) fn shape_subject(&self, subject: Subject) -> ResolveResult<SubjectRecord> {
        let courses_rel = self.relation(EntityKind::Subject, "courses")?;
        let program = self.load_parent::<Program>(subject.program_id)?;
        let courses = self.load_children::<Course>(&courses_rel, subject.subject_id)?;
        Ok(SubjectRecord {
            subject,
            program,
            courses,
        })
    }

    pub fn get_subject_by_id(&self, args: GetSubjectByIdArgs) -> ResolveResult<SubjectRecord> {
        let subject: Subject = self.db_ops().get_row(args.id)?.ok_or(ResolveError::NotFound {
            entity: "Subject",
            id: args.id,
        })?;
        self.shape_subject(subject)
    }

    /// Unique-key lookup; returns `None` on a miss.
    pub fn get_subject_by_name(
        &self,
        args: GetSubjectByNameArgs,
    ) -> ResolveResult<Option<SubjectRecord>> {
        let owner = self
            .db_ops()
            .unique_owner(EntityKind::Subject, "subject_name", &args.name)?;
        match owner {
            Some(id) => {
                let subject = self.load_parent::<Subject>(id)?;
                Ok(Some(self.shape_subject(subject)?))
            }
            None => Ok(None),
        }
    }

    pub fn get_subjects_by_program(
        &self,
        args: GetSubjectsByProgramArgs,
    ) -> ResolveResult<Vec<SubjectRecord>> {
        let subjects: Vec<Subject> = self
            .db_ops()
            .scan_filter(|s: &Subject| s.program_id == args.program_id)?;
        subjects
            .into_iter()
            .map(|s| self.shape_subject(s))
            .collect()
    }

    pub fn create_subject(&self, args: CreateSubjectArgs) -> ResolveResult<Subject> {
        validate::non_blank("subjectName", &args.subject_name)?;

        let program_rel = self.relation(EntityKind::Subject, "program")?;
        let mut guard = self.db_ops().begin_write()?;
        self.ensure_reference(&program_rel, args.program_id)?;
        self.ensure_unique(EntityKind::Subject, "subject_name", &args.subject_name, None)?;

        let subject_id = guard.allocate_id(EntityKind::Subject)?;
        let subject = Subject {
            subject_id,
            subject_name: args.subject_name,
            subject_description: args.subject_description,
            program_id: args.program_id,
        };
        guard.put_row(&subject)?;
        guard.put_unique(
            EntityKind::Subject,
            "subject_name",
            &subject.subject_name,
            subject_id,
        )?;
        guard.commit()?;

        info!("created Subject {}", subject_id);
        Ok(subject)
    }

    pub fn update_subject(&self, args: UpdateSubjectArgs) -> ResolveResult<Subject> {
        let mut guard = self.db_ops().begin_write()?;
        let mut subject: Subject =
            self.db_ops()
                .get_row(args.subject_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Subject",
                    id: args.subject_id,
                })?;

        if let Some(subject_name) = args.subject_name {
            validate::non_blank("subjectName", &subject_name)?;
            if subject_name != subject.subject_name {
                self.ensure_unique(
                    EntityKind::Subject,
                    "subject_name",
                    &subject_name,
                    Some(subject.subject_id),
                )?;
                guard.delete_unique(EntityKind::Subject, "subject_name", &subject.subject_name);
                guard.put_unique(
                    EntityKind::Subject,
                    "subject_name",
                    &subject_name,
                    subject.subject_id,
                )?;
            }
            subject.subject_name = subject_name;
        }
        if let Some(subject_description) = args.subject_description {
            subject.subject_description = subject_description;
        }
        if let Some(program_id) = args.program_id {
            let program_rel = self.relation(EntityKind::Subject, "program")?;
            self.ensure_reference(&program_rel, program_id)?;
            subject.program_id = program_id;
        }

        guard.put_row(&subject)?;
        guard.commit()?;
        Ok(subject)
    }

    /// Rejected while the subject still has courses.
    pub fn delete_subject(&self, args: DeleteSubjectArgs) -> ResolveResult<Subject> {
        let mut guard = self.db_ops().begin_write()?;
        let subject: Subject =
            self.db_ops()
                .get_row(args.subject_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Subject",
                    id: args.subject_id,
                })?;
        self.stage_delete(&mut guard, EntityKind::Subject, args.subject_id)?;
        guard.commit()?;

        info!("deleted Subject {}", args.subject_id);
        Ok(subject)
    }
}
