mod common;

use campusdb::resolver::args::{
    DeleteClassArgs, DeleteCourseArgs, DeleteGradeArgs, DeleteProgramArgs, DeleteStudentArgs,
    DeleteSubjectArgs, DeleteTeacherArgs, GetClassByIdArgs, GetGradeByCourseIdArgs,
    GetGradeByStudentIdArgs, GetTeacherByEmailArgs,
};
use campusdb::ResolveError;
use common::{create_course, create_grade, create_student, seed_graph, TestFixture};

#[test]
fn deleting_a_student_cascades_to_grades() {
    let fixture = TestFixture::new();
    let graph = seed_graph(&fixture.db);
    create_grade(&fixture.db, 11.0, graph.student.student_id, graph.course.course_id);

    let deleted = fixture
        .db
        .delete_student(DeleteStudentArgs {
            student_id: graph.student.student_id,
        })
        .unwrap();
    assert!(deleted);

    // No orphaned grades remain.
    let grades = fixture
        .db
        .get_grade_by_student_id(GetGradeByStudentIdArgs {
            student_id: graph.student.student_id,
        })
        .unwrap();
    assert!(grades.is_empty());
    let grades = fixture
        .db
        .get_grade_by_course_id(GetGradeByCourseIdArgs {
            course_id: graph.course.course_id,
        })
        .unwrap();
    assert!(grades.is_empty());
}

#[test]
fn deleting_a_course_cascades_to_grades_and_returns_prior_state() {
    let fixture = TestFixture::new();
    let graph = seed_graph(&fixture.db);

    let deleted = fixture
        .db
        .delete_course(DeleteCourseArgs {
            course_id: graph.course.course_id,
        })
        .unwrap();
    assert_eq!(deleted.course_id, graph.course.course_id);
    assert_eq!(deleted.start_time, "08:30");

    let grades = fixture
        .db
        .get_grade_by_student_id(GetGradeByStudentIdArgs {
            student_id: graph.student.student_id,
        })
        .unwrap();
    assert!(grades.is_empty());
}

#[test]
fn class_delete_is_rejected_while_dependents_exist() {
    let fixture = TestFixture::new();
    let graph = seed_graph(&fixture.db);

    let err = fixture
        .db
        .delete_class(DeleteClassArgs {
            class_id: graph.class.class_id,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::ReferentialConflict {
            entity: "Class",
            ..
        }
    ));

    // The failed delete removed nothing.
    let record = fixture
        .db
        .get_class_by_id(GetClassByIdArgs {
            class_id: graph.class.class_id,
        })
        .unwrap();
    assert_eq!(record.students.len(), 1);
    assert_eq!(record.courses.len(), 1);
}

#[test]
fn class_delete_succeeds_once_dependents_are_gone() {
    let fixture = TestFixture::new();
    let graph = seed_graph(&fixture.db);

    fixture
        .db
        .delete_student(DeleteStudentArgs {
            student_id: graph.student.student_id,
        })
        .unwrap();
    fixture
        .db
        .delete_course(DeleteCourseArgs {
            course_id: graph.course.course_id,
        })
        .unwrap();

    assert!(fixture
        .db
        .delete_class(DeleteClassArgs {
            class_id: graph.class.class_id,
        })
        .unwrap());
    let err = fixture
        .db
        .get_class_by_id(GetClassByIdArgs {
            class_id: graph.class.class_id,
        })
        .unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { .. }));
}

#[test]
fn teacher_program_and_subject_deletes_restrict() {
    let fixture = TestFixture::new();
    let graph = seed_graph(&fixture.db);

    let err = fixture
        .db
        .delete_teacher(DeleteTeacherArgs {
            teacher_id: graph.teacher.teacher_id,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::ReferentialConflict {
            entity: "Teacher",
            relation: "courses",
            ..
        }
    ));

    let err = fixture
        .db
        .delete_program(DeleteProgramArgs {
            program_id: graph.program.program_id,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::ReferentialConflict {
            entity: "Program",
            relation: "subjects",
            ..
        }
    ));

    let err = fixture
        .db
        .delete_subject(DeleteSubjectArgs {
            subject_id: graph.subject.subject_id,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::ReferentialConflict {
            entity: "Subject",
            relation: "courses",
            ..
        }
    ));
}

#[test]
fn deleting_a_teacher_frees_its_email_address() {
    let fixture = TestFixture::new();
    let graph = seed_graph(&fixture.db);

    // Remove the blocking course first (which also removes its grades).
    fixture
        .db
        .delete_course(DeleteCourseArgs {
            course_id: graph.course.course_id,
        })
        .unwrap();

    let deleted = fixture
        .db
        .delete_teacher(DeleteTeacherArgs {
            teacher_id: graph.teacher.teacher_id,
        })
        .unwrap();
    assert_eq!(deleted.email_address, "morel@school.org");

    assert!(fixture
        .db
        .get_teacher_by_email(GetTeacherByEmailArgs {
            email_address: "morel@school.org".to_string(),
        })
        .unwrap()
        .is_none());
}

#[test]
fn delete_miss_fails_with_not_found() {
    let fixture = TestFixture::new();
    let err = fixture
        .db
        .delete_grade(DeleteGradeArgs { grade_id: 31 })
        .unwrap_err();
    assert!(matches!(
        err,
        ResolveError::NotFound {
            entity: "Grade",
            id: 31
        }
    ));
}

#[test]
fn cascade_only_touches_the_target_students_grades() {
    let fixture = TestFixture::new();
    let graph = seed_graph(&fixture.db);
    let other_student = create_student(&fixture.db, "Benoit", "Petit", graph.class.class_id);
    let other_course = create_course(
        &fixture.db,
        graph.teacher.teacher_id,
        graph.subject.subject_id,
        graph.class.class_id,
    );
    let kept = create_grade(
        &fixture.db,
        9.0,
        other_student.student_id,
        other_course.course_id,
    );

    fixture
        .db
        .delete_student(DeleteStudentArgs {
            student_id: graph.student.student_id,
        })
        .unwrap();

    let grades = fixture
        .db
        .get_grade_by_student_id(GetGradeByStudentIdArgs {
            student_id: other_student.student_id,
        })
        .unwrap();
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].grade.grade_id, kept.grade_id);
}
