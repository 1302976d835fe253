//! Operation parsing and dispatch.
//!
//! The transport hands over a typed operation name plus a JSON map of
//! argument names to values. `Request::parse` turns that pair into a typed
//! request or rejects it with `InvalidArgument`; `CampusDb::execute` runs the
//! matching handler and returns the shaped result as JSON.

use crate::campusdb::CampusDb;
use crate::error::{ResolveError, ResolveResult};
use crate::resolver::args::*;
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A parsed operation, one variant per wire-level operation name.
#[derive(Debug, Clone)]
pub enum Request {
    // Class
    GetAllClass,
    GetClassById(GetClassByIdArgs),
    GetClassByStudentName(GetClassByStudentNameArgs),
    CreateClass(CreateClassArgs),
    UpdateClass(UpdateClassArgs),
    DeleteClass(DeleteClassArgs),
    // Student
    GetAllStudents,
    GetStudentByLastName(GetStudentByLastNameArgs),
    GetStudentByClass(GetStudentByClassArgs),
    GetStudentById(GetStudentByIdArgs),
    CreateStudent(CreateStudentArgs),
    UpdateStudent(UpdateStudentArgs),
    DeleteStudent(DeleteStudentArgs),
    // Grade
    GetGradeById(GetGradeByIdArgs),
    GetGradeByStudentId(GetGradeByStudentIdArgs),
    GetGradeByCourseId(GetGradeByCourseIdArgs),
    CreateGrade(CreateGradeArgs),
    UpdateGrade(UpdateGradeArgs),
    DeleteGrade(DeleteGradeArgs),
    // Teacher
    GetTeacherById(GetTeacherByIdArgs),
    GetTeacherByLastName(GetTeacherByLastNameArgs),
    GetTeacherByEmail(GetTeacherByEmailArgs),
    GetAllTeachers,
    CreateTeacher(CreateTeacherArgs),
    UpdateTeacher(UpdateTeacherArgs),
    DeleteTeacher(DeleteTeacherArgs),
    // Program
    GetProgramById(GetProgramByIdArgs),
    GetProgramByName(GetProgramByNameArgs),
    GetProgramBySubject(GetProgramBySubjectArgs),
    CreateProgram(CreateProgramArgs),
    UpdateProgram(UpdateProgramArgs),
    DeleteProgram(DeleteProgramArgs),
    // Subject
    GetSubjectById(GetSubjectByIdArgs),
    GetSubjectByName(GetSubjectByNameArgs),
    GetSubjectsByProgram(GetSubjectsByProgramArgs),
    CreateSubject(CreateSubjectArgs),
    UpdateSubject(UpdateSubjectArgs),
    DeleteSubject(DeleteSubjectArgs),
    // Course
    GetCourseById(GetCourseByIdArgs),
    GetCoursesByTeacherId(GetCoursesByTeacherIdArgs),
    GetCoursesBySubjectId(GetCoursesBySubjectIdArgs),
    GetCoursesByClassId(GetCoursesByClassIdArgs),
    CreateCourse(CreateCourseArgs),
    UpdateCourse(UpdateCourseArgs),
    DeleteCourse(DeleteCourseArgs),
}

fn typed<T: DeserializeOwned>(operation: &str, args: Value) -> ResolveResult<T> {
    serde_json::from_value(args).map_err(|e| ResolveError::InvalidArgument {
        field: operation.to_string(),
        reason: e.to_string(),
    })
}

impl Request {
    /// Parses a wire-level operation name and argument map into a typed
    /// request. Unknown names and mistyped arguments fail with
    /// `InvalidArgument`.
    pub fn parse(operation: &str, args: Value) -> ResolveResult<Request> {
        match operation {
            "getAllClass" => Ok(Request::GetAllClass),
            "getClassById" => Ok(Request::GetClassById(typed(operation, args)?)),
            "getClassByStudentName" => {
                Ok(Request::GetClassByStudentName(typed(operation, args)?))
            }
            "createClass" => Ok(Request::CreateClass(typed(operation, args)?)),
            "updateClass" => Ok(Request::UpdateClass(typed(operation, args)?)),
            "deleteClass" => Ok(Request::DeleteClass(typed(operation, args)?)),

            "getAllStudents" => Ok(Request::GetAllStudents),
            "getStudentByLastName" => {
                Ok(Request::GetStudentByLastName(typed(operation, args)?))
            }
            "getStudentByClass" => Ok(Request::GetStudentByClass(typed(operation, args)?)),
            "getStudentById" => Ok(Request::GetStudentById(typed(operation, args)?)),
            "createStudent" => Ok(Request::CreateStudent(typed(operation, args)?)),
            "updateStudent" => Ok(Request::UpdateStudent(typed(operation, args)?)),
            "deleteStudent" => Ok(Request::DeleteStudent(typed(operation, args)?)),

            "getGradeById" => Ok(Request::GetGradeById(typed(operation, args)?)),
            "getGradeByStudentId" => Ok(Request::GetGradeByStudentId(typed(operation, args)?)),
            "getGradeByCourseId" => Ok(Request::GetGradeByCourseId(typed(operation, args)?)),
            "createGrade" => Ok(Request::CreateGrade(typed(operation, args)?)),
            "updateGrade" => Ok(Request::UpdateGrade(typed(operation, args)?)),
            "deleteGrade" => Ok(Request::DeleteGrade(typed(operation, args)?)),

            "getTeacherById" => Ok(Request::GetTeacherById(typed(operation, args)?)),
            "getTeacherByLastName" => {
                Ok(Request::GetTeacherByLastName(typed(operation, args)?))
            }
            "getTeacherByEmail" => Ok(Request::GetTeacherByEmail(typed(operation, args)?)),
            "getAllTeachers" => Ok(Request::GetAllTeachers),
            "createTeacher" => Ok(Request::CreateTeacher(typed(operation, args)?)),
            "updateTeacher" => Ok(Request::UpdateTeacher(typed(operation, args)?)),
            "deleteTeacher" => Ok(Request::DeleteTeacher(typed(operation, args)?)),

            "getProgramById" => Ok(Request::GetProgramById(typed(operation, args)?)),
            "getProgramByName" => Ok(Request::GetProgramByName(typed(operation, args)?)),
            "getProgramBySubject" => Ok(Request::GetProgramBySubject(typed(operation, args)?)),
            "createProgram" => Ok(Request::CreateProgram(typed(operation, args)?)),
            "updateProgram" => Ok(Request::UpdateProgram(typed(operation, args)?)),
            "deleteProgram" => Ok(Request::DeleteProgram(typed(operation, args)?)),

            "getSubjectById" => Ok(Request::GetSubjectById(typed(operation, args)?)),
            "getSubjectByName" => Ok(Request::GetSubjectByName(typed(operation, args)?)),
            "getSubjectsByProgram" => {
                Ok(Request::GetSubjectsByProgram(typed(operation, args)?))
            }
            "createSubject" => Ok(Request::CreateSubject(typed(operation, args)?)),
            "updateSubject" => Ok(Request::UpdateSubject(typed(operation, args)?)),
            "deleteSubject" => Ok(Request::DeleteSubject(typed(operation, args)?)),

            "getCourseById" => Ok(Request::GetCourseById(typed(operation, args)?)),
            "getCoursesByTeacherId" => {
                Ok(Request::GetCoursesByTeacherId(typed(operation, args)?))
            }
            "getCoursesBySubjectId" => {
                Ok(Request::GetCoursesBySubjectId(typed(operation, args)?))
            }
            "getCoursesByClassId" => Ok(Request::GetCoursesByClassId(typed(operation, args)?)),
            "createCourse" => Ok(Request::CreateCourse(typed(operation, args)?)),
            "updateCourse" => Ok(Request::UpdateCourse(typed(operation, args)?)),
            "deleteCourse" => Ok(Request::DeleteCourse(typed(operation, args)?)),

            _ => Err(ResolveError::InvalidArgument {
                field: "operation".to_string(),
                reason: format!("unknown operation '{}'", operation),
            }),
        }
    }
}

fn respond<T: Serialize>(value: &T) -> ResolveResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| ResolveError::StoreUnavailable(format!("failed to serialize response: {}", e)))
}

impl CampusDb {
    /// Executes a parsed request and returns the shaped result as JSON.
    pub fn execute(&self, request: Request) -> ResolveResult<Value> {
        debug!("executing {:?}", request);
        match request {
            Request::GetAllClass => respond(&self.get_all_class()?),
            Request::GetClassById(args) => respond(&self.get_class_by_id(args)?),
            Request::GetClassByStudentName(args) => {
                respond(&self.get_class_by_student_name(args)?)
            }
            Request::CreateClass(args) => respond(&self.create_class(args)?),
            Request::UpdateClass(args) => respond(&self.update_class(args)?),
            Request::DeleteClass(args) => respond(&self.delete_class(args)?),

            Request::GetAllStudents => respond(&self.get_all_students()?),
            Request::GetStudentByLastName(args) => {
                respond(&self.get_student_by_last_name(args)?)
            }
            Request::GetStudentByClass(args) => respond(&self.get_student_by_class(args)?),
            Request::GetStudentById(args) => respond(&self.get_student_by_id(args)?),
            Request::CreateStudent(args) => respond(&self.create_student(args)?),
            Request::UpdateStudent(args) => respond(&self.update_student(args)?),
            Request::DeleteStudent(args) => respond(&self.delete_student(args)?),

            Request::GetGradeById(args) => respond(&self.get_grade_by_id(args)?),
            Request::GetGradeByStudentId(args) => respond(&self.get_grade_by_student_id(args)?),
            Request::GetGradeByCourseId(args) => respond(&self.get_grade_by_course_id(args)?),
            Request::CreateGrade(args) => respond(&self.create_grade(args)?),
            Request::UpdateGrade(args) => respond(&self.update_grade(args)?),
            Request::DeleteGrade(args) => respond(&self.delete_grade(args)?),

            Request::GetTeacherById(args) => respond(&self.get_teacher_by_id(args)?),
            Request::GetTeacherByLastName(args) => {
                respond(&self.get_teacher_by_last_name(args)?)
            }
            Request::GetTeacherByEmail(args) => respond(&self.get_teacher_by_email(args)?),
            Request::GetAllTeachers => respond(&self.get_all_teachers()?),
            Request::CreateTeacher(args) => respond(&self.create_teacher(args)?),
            Request::UpdateTeacher(args) => respond(&self.update_teacher(args)?),
            Request::DeleteTeacher(args) => respond(&self.delete_teacher(args)?),

            Request::GetProgramById(args) => respond(&self.get_program_by_id(args)?),
            Request::GetProgramByName(args) => respond(&self.get_program_by_name(args)?),
            Request::GetProgramBySubject(args) => respond(&self.get_program_by_subject(args)?),
            Request::CreateProgram(args) => respond(&self.create_program(args)?),
            Request::UpdateProgram(args) => respond(&self.update_program(args)?),
            Request::DeleteProgram(args) => respond(&self.delete_program(args)?),

            Request::GetSubjectById(args) => respond(&self.get_subject_by_id(args)?),
            Request::GetSubjectByName(args) => respond(&self.get_subject_by_name(args)?),
            Request::GetSubjectsByProgram(args) => {
                respond(&self.get_subjects_by_program(args)?)
            }
            Request::CreateSubject(args) => respond(&self.create_subject(args)?),
            Request::UpdateSubject(args) => respond(&self.update_subject(args)?),
            Request::DeleteSubject(args) => respond(&self.delete_subject(args)?),

            Request::GetCourseById(args) => respond(&self.get_course_by_id(args)?),
            Request::GetCoursesByTeacherId(args) => {
                respond(&self.get_courses_by_teacher_id(args)?)
            }
            Request::GetCoursesBySubjectId(args) => {
                respond(&self.get_courses_by_subject_id(args)?)
            }
            Request::GetCoursesByClassId(args) => respond(&self.get_courses_by_class_id(args)?),
            Request::CreateCourse(args) => respond(&self.create_course(args)?),
            Request::UpdateCourse(args) => respond(&self.update_course(args)?),
            Request::DeleteCourse(args) => respond(&self.delete_course(args)?),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_resolves_camel_case_wire_names() {
        let request = Request::parse("getClassById", json!({"classId": 3})).unwrap();
        match request {
            Request::GetClassById(args) => assert_eq!(args.class_id, 3),
            other => panic!("unexpected request: {:?}", other),
        }

        let request =
            Request::parse("getTeacherByEmail", json!({"emailAddress": "a@school.org"})).unwrap();
        match request {
            Request::GetTeacherByEmail(args) => assert_eq!(args.email_address, "a@school.org"),
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn parse_accepts_partial_update_arguments() {
        let request =
            Request::parse("updateStudent", json!({"student_id": 1, "last_name": "Martin"}))
                .unwrap();
        match request {
            Request::UpdateStudent(args) => {
                assert_eq!(args.last_name.as_deref(), Some("Martin"));
                assert!(args.first_name.is_none());
                assert!(args.class_id.is_none());
            }
            other => panic!("unexpected request: {:?}", other),
        }
    }

    #[test]
    fn parse_rejects_unknown_operations() {
        let err = Request::parse("expelStudent", json!({})).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidArgument { .. }));
    }

    #[test]
    fn parse_rejects_missing_and_unknown_arguments() {
        let err = Request::parse("getClassById", json!({})).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidArgument { .. }));

        let err = Request::parse("getClassById", json!({"classId": 1, "bogus": true})).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidArgument { .. }));
    }

    #[test]
    fn parse_ignores_arguments_on_nullary_operations() {
        assert!(matches!(
            Request::parse("getAllClass", Value::Null).unwrap(),
            Request::GetAllClass
        ));
        assert!(matches!(
            Request::parse("getAllTeachers", json!({})).unwrap(),
            Request::GetAllTeachers
        ));
    }
}
