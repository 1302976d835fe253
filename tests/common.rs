//! Common test utilities and fixtures.
//!
//! Provides a temporary database fixture plus helpers that seed the usual
//! entity graph (program → subject, class, teacher, course, student, grade).

#![allow(dead_code)]

use campusdb::model::{Class, Course, Grade, Program, Student, Subject, Teacher};
use campusdb::resolver::args::{
    CreateClassArgs, CreateCourseArgs, CreateGradeArgs, CreateProgramArgs, CreateStudentArgs,
    CreateSubjectArgs, CreateTeacherArgs,
};
use campusdb::CampusDb;
use tempfile::TempDir;

pub struct TestFixture {
    pub db: CampusDb,
    _temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp directory");
        let db = CampusDb::new(temp_dir.path()).expect("failed to open test database");
        Self {
            db,
            _temp_dir: temp_dir,
        }
    }
}

pub fn create_class(db: &CampusDb, name: &str) -> Class {
    db.create_class(CreateClassArgs {
        class_name: name.to_string(),
        class_level: 5,
        school_year: "2024-2025".to_string(),
    })
    .expect("failed to create class")
}

pub fn create_student(db: &CampusDb, first: &str, last: &str, class_id: i64) -> Student {
    db.create_student(CreateStudentArgs {
        first_name: first.to_string(),
        last_name: last.to_string(),
        date_of_birth: "2012-03-14".to_string(),
        gender: "F".to_string(),
        address: "12 rue des Lilas".to_string(),
        class_id,
    })
    .expect("failed to create student")
}

pub fn create_teacher(db: &CampusDb, last: &str, email: &str) -> Teacher {
    db.create_teacher(CreateTeacherArgs {
        first_name: "Paul".to_string(),
        last_name: last.to_string(),
        email_address: email.to_string(),
        password: "hunter2!".to_string(),
    })
    .expect("failed to create teacher")
}

pub fn create_program(db: &CampusDb, name: &str) -> Program {
    db.create_program(CreateProgramArgs {
        program_name: name.to_string(),
        program_description: "General curriculum".to_string(),
    })
    .expect("failed to create program")
}

pub fn create_subject(db: &CampusDb, name: &str, program_id: i64) -> Subject {
    db.create_subject(CreateSubjectArgs {
        subject_name: name.to_string(),
        subject_description: "Core subject".to_string(),
        program_id,
    })
    .expect("failed to create subject")
}

pub fn create_course(db: &CampusDb, teacher_id: i64, subject_id: i64, class_id: i64) -> Course {
    db.create_course(CreateCourseArgs {
        date: "2025-01-20".to_string(),
        start_time: "08:30".to_string(),
        end_time: "10:00".to_string(),
        teacher_id,
        subject_id,
        class_id,
    })
    .expect("failed to create course")
}

pub fn create_grade(db: &CampusDb, value: f64, student_id: i64, course_id: i64) -> Grade {
    db.create_grade(CreateGradeArgs {
        value,
        date: "2025-02-03".to_string(),
        student_id,
        course_id,
    })
    .expect("failed to create grade")
}

/// Seeds one row of everything and returns the graph.
pub struct SeededGraph {
    pub class: Class,
    pub student: Student,
    pub teacher: Teacher,
    pub program: Program,
    pub subject: Subject,
    pub course: Course,
    pub grade: Grade,
}

pub fn seed_graph(db: &CampusDb) -> SeededGraph {
    let class = create_class(db, "5A");
    let student = create_student(db, "Alice", "Durand", class.class_id);
    let teacher = create_teacher(db, "Morel", "morel@school.org");
    let program = create_program(db, "Sciences");
    let subject = create_subject(db, "Mathematics", program.program_id);
    let course = create_course(db, teacher.teacher_id, subject.subject_id, class.class_id);
    let grade = create_grade(db, 15.5, student.student_id, course.course_id);
    SeededGraph {
        class,
        student,
        teacher,
        program,
        subject,
        course,
        grade,
    }
}
