//! Typed per-operation argument structs.
//!
//! Field names reproduce the wire contract exactly; camelCase wire names map
//! onto snake_case fields through serde renames. Unknown argument names are
//! rejected at parse time. On update operations every field except the
//! primary key is optional; only fields present in the request are changed.

use crate::model::EntityId;
use serde::Deserialize;

/* Class */

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetClassByIdArgs {
    #[serde(rename = "classId")]
    pub class_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetClassByStudentNameArgs {
    #[serde(rename = "studentName")]
    pub student_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateClassArgs {
    pub class_name: String,
    pub class_level: i64,
    pub school_year: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateClassArgs {
    #[serde(rename = "classId")]
    pub class_id: EntityId,
    #[serde(rename = "className")]
    pub class_name: Option<String>,
    #[serde(rename = "classLevel")]
    pub class_level: Option<i64>,
    #[serde(rename = "schoolYear")]
    pub school_year: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteClassArgs {
    #[serde(rename = "classId")]
    pub class_id: EntityId,
}

/* Student */

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetStudentByLastNameArgs {
    #[serde(rename = "lastName")]
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetStudentByClassArgs {
    #[serde(rename = "classId")]
    pub class_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetStudentByIdArgs {
    #[serde(rename = "studentId")]
    pub student_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateStudentArgs {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub class_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateStudentArgs {
    pub student_id: EntityId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub class_id: Option<EntityId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteStudentArgs {
    pub student_id: EntityId,
}

/* Grade */

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetGradeByIdArgs {
    pub grade_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetGradeByStudentIdArgs {
    pub student_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetGradeByCourseIdArgs {
    pub course_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateGradeArgs {
    pub value: f64,
    pub date: String,
    #[serde(rename = "studentId")]
    pub student_id: EntityId,
    #[serde(rename = "courseId")]
    pub course_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateGradeArgs {
    #[serde(rename = "gradeId")]
    pub grade_id: EntityId,
    pub value: Option<f64>,
    pub date: Option<String>,
    #[serde(rename = "studentId")]
    pub student_id: Option<EntityId>,
    #[serde(rename = "courseId")]
    pub course_id: Option<EntityId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteGradeArgs {
    #[serde(rename = "gradeId")]
    pub grade_id: EntityId,
}

/* Teacher */

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetTeacherByIdArgs {
    #[serde(rename = "teacherId")]
    pub teacher_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetTeacherByLastNameArgs {
    pub last_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetTeacherByEmailArgs {
    #[serde(rename = "emailAddress")]
    pub email_address: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTeacherArgs {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTeacherArgs {
    pub teacher_id: EntityId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteTeacherArgs {
    pub teacher_id: EntityId,
}

/* Program */

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetProgramByIdArgs {
    pub program_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetProgramByNameArgs {
    pub program_name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetProgramBySubjectArgs {
    pub subject_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateProgramArgs {
    pub program_name: String,
    pub program_description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateProgramArgs {
    pub program_id: EntityId,
    pub program_name: Option<String>,
    pub program_description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteProgramArgs {
    pub program_id: EntityId,
}

/* Subject */

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetSubjectByIdArgs {
    pub id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetSubjectByNameArgs {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetSubjectsByProgramArgs {
    #[serde(rename = "programId")]
    pub program_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateSubjectArgs {
    #[serde(rename = "subjectName")]
    pub subject_name: String,
    #[serde(rename = "subjectDescription")]
    pub subject_description: String,
    #[serde(rename = "programId")]
    pub program_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateSubjectArgs {
    #[serde(rename = "subjectId")]
    pub subject_id: EntityId,
    #[serde(rename = "subjectName")]
    pub subject_name: Option<String>,
    #[serde(rename = "subjectDescription")]
    pub subject_description: Option<String>,
    #[serde(rename = "programId")]
    pub program_id: Option<EntityId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteSubjectArgs {
    #[serde(rename = "subjectId")]
    pub subject_id: EntityId,
}

/* Course */

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetCourseByIdArgs {
    pub course_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetCoursesByTeacherIdArgs {
    pub teacher_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetCoursesBySubjectIdArgs {
    pub subject_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetCoursesByClassIdArgs {
    pub class_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateCourseArgs {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub teacher_id: EntityId,
    pub subject_id: EntityId,
    pub class_id: EntityId,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCourseArgs {
    pub course_id: EntityId,
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub teacher_id: Option<EntityId>,
    pub subject_id: Option<EntityId>,
    pub class_id: Option<EntityId>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteCourseArgs {
    pub course_id: EntityId,
}
