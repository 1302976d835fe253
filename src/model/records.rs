//! Relation-populated result shapes.
//!
//! Query resolvers always return an entity together with the relations its
//! declared shape names, populated one level deep with bare rows. Mutations
//! return bare rows only.

use super::entities::{Class, Course, Grade, Program, Student, Subject, Teacher};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ClassRecord {
    #[serde(flatten)]
    pub class: Class,
    pub students: Vec<Student>,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentRecord {
    #[serde(flatten)]
    pub student: Student,
    pub class: Class,
    pub grades: Vec<Grade>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradeRecord {
    #[serde(flatten)]
    pub grade: Grade,
    pub student: Student,
    pub course: Course,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherRecord {
    #[serde(flatten)]
    pub teacher: Teacher,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgramRecord {
    #[serde(flatten)]
    pub program: Program,
    pub subjects: Vec<Subject>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubjectRecord {
    #[serde(flatten)]
    pub subject: Subject,
    pub program: Program,
    pub courses: Vec<Course>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseRecord {
    #[serde(flatten)]
    pub course: Course,
    pub teacher: Teacher,
    pub subject: Subject,
    pub class: Class,
    pub grades: Vec<Grade>,
}
