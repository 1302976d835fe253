use crate::campusdb::CampusDb;
use crate::error::{ResolveError, ResolveResult};
use crate::model::{Program, ProgramRecord, Subject};
use crate::registry::EntityKind;
use crate::resolver::args::{
    CreateProgramArgs, DeleteProgramArgs, GetProgramByIdArgs, GetProgramByNameArgs,
    GetProgramBySubjectArgs, UpdateProgramArgs,
};
use crate::resolver::validate;
use log::info;

impl CampusDb {
    pub(crate) fn shape_program(&self, program: Program) -> ResolveResult<ProgramRecord> {
        let subjects_rel = self.relation(EntityKind::Program, "subjects")?;
        let subjects = self.load_children::<Subject>(&subjects_rel, program.program_id)?;
        Ok(ProgramRecord { program, subjects })
    }

    pub fn get_program_by_id(&self, args: GetProgramByIdArgs) -> ResolveResult<ProgramRecord> {
        let program: Program =
            self.db_ops()
                .get_row(args.program_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Program",
                    id: args.program_id,
                })?;
        self.shape_program(program)
    }

    /// Unique-key lookup; returns `None` on a miss.
    pub fn get_program_by_name(
        &self,
        args: GetProgramByNameArgs,
    ) -> ResolveResult<Option<ProgramRecord>> {
        let owner =
            self.db_ops()
                .unique_owner(EntityKind::Program, "program_name", &args.program_name)?;
        match owner {
            Some(id) => {
                let program = self.load_parent::<Program>(id)?;
                Ok(Some(self.shape_program(program)?))
            }
            None => Ok(None),
        }
    }

    /// Programs owning the given subject; empty when the subject does not
    /// exist.
    pub fn get_program_by_subject(
        &self,
        args: GetProgramBySubjectArgs,
    ) -> ResolveResult<Vec<ProgramRecord>> {
        let subject: Option<Subject> = self.db_ops().get_row(args.subject_id)?;
        match subject {
            Some(subject) => {
                let program = self.load_parent::<Program>(subject.program_id)?;
                Ok(vec![self.shape_program(program)?])
            }
            None => Ok(Vec::new()),
        }
    }

    pub fn create_program(&self, args: CreateProgramArgs) -> ResolveResult<Program> {
        validate::non_blank("program_name", &args.program_name)?;

        let mut guard = self.db_ops().begin_write()?;
        self.ensure_unique(EntityKind::Program, "program_name", &args.program_name, None)?;

        let program_id = guard.allocate_id(EntityKind::Program)?;
        let program = Program {
            program_id,
            program_name: args.program_name,
            program_description: args.program_description,
        };
        guard.put_row(&program)?;
        guard.put_unique(
            EntityKind::Program,
            "program_name",
            &program.program_name,
            program_id,
        )?;
        guard.commit()?;

        info!("created Program {}", program_id);
        Ok(program)
    }

    pub fn update_program(&self, args: UpdateProgramArgs) -> ResolveResult<Program> {
        let mut guard = self.db_ops().begin_write()?;
        let mut program: Program =
            self.db_ops()
                .get_row(args.program_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Program",
                    id: args.program_id,
                })?;

        if let Some(program_name) = args.program_name {
            validate::non_blank("program_name", &program_name)?;
            if program_name != program.program_name {
                self.ensure_unique(
                    EntityKind::Program,
                    "program_name",
                    &program_name,
                    Some(program.program_id),
                )?;
                guard.delete_unique(EntityKind::Program, "program_name", &program.program_name);
                guard.put_unique(
                    EntityKind::Program,
                    "program_name",
                    &program_name,
                    program.program_id,
                )?;
            }
            program.program_name = program_name;
        }
        if let Some(program_description) = args.program_description {
            program.program_description = program_description;
        }

        guard.put_row(&program)?;
        guard.commit()?;
        Ok(program)
    }

    /// Rejected while the program still has subjects.
    pub fn delete_program(&self, args: DeleteProgramArgs) -> ResolveResult<Program> {
        let mut guard = self.db_ops().begin_write()?;
        let program: Program =
            self.db_ops()
                .get_row(args.program_id)?
                .ok_or(ResolveError::NotFound {
                    entity: "Program",
                    id: args.program_id,
                })?;
        self.stage_delete(&mut guard, EntityKind::Program, args.program_id)?;
        guard.commit()?;

        info!("deleted Program {}", args.program_id);
        Ok(program)
    }
}
