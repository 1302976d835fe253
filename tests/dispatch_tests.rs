mod common;

use campusdb::{Request, ResolveError};
use common::TestFixture;
use serde_json::{json, Value};

fn run(fixture: &TestFixture, operation: &str, args: Value) -> Result<Value, ResolveError> {
    let request = Request::parse(operation, args)?;
    fixture.db.execute(request)
}

#[test]
fn create_class_then_get_class_by_id_over_the_wire() {
    let fixture = TestFixture::new();

    let created = run(
        &fixture,
        "createClass",
        json!({"class_name": "5A", "class_level": 5, "school_year": "2024-2025"}),
    )
    .unwrap();
    assert_eq!(created["class_name"], json!("5A"));
    assert_eq!(created["class_level"], json!(5));
    assert_eq!(created["school_year"], json!("2024-2025"));
    let class_id = created["class_id"].as_i64().unwrap();

    let fetched = run(&fixture, "getClassById", json!({"classId": class_id})).unwrap();
    assert_eq!(fetched["class_name"], json!("5A"));
    assert_eq!(fetched["students"], json!([]));
    assert_eq!(fetched["courses"], json!([]));
}

#[test]
fn student_flow_over_the_wire_uses_declared_argument_names() {
    let fixture = TestFixture::new();
    let class = run(
        &fixture,
        "createClass",
        json!({"class_name": "5A", "class_level": 5, "school_year": "2024-2025"}),
    )
    .unwrap();
    let class_id = class["class_id"].as_i64().unwrap();

    let student = run(
        &fixture,
        "createStudent",
        json!({
            "first_name": "Alice",
            "last_name": "Durand",
            "date_of_birth": "2012-03-14",
            "gender": "F",
            "address": "12 rue des Lilas",
            "class_id": class_id
        }),
    )
    .unwrap();
    let student_id = student["student_id"].as_i64().unwrap();

    let updated = run(
        &fixture,
        "updateStudent",
        json!({"student_id": student_id, "last_name": "Martin"}),
    )
    .unwrap();
    assert_eq!(updated["last_name"], json!("Martin"));
    assert_eq!(updated["first_name"], json!("Alice"));

    let fetched = run(&fixture, "getStudentById", json!({"studentId": student_id})).unwrap();
    assert_eq!(fetched["class"]["class_id"], json!(class_id));
    assert_eq!(fetched["grades"], json!([]));

    let empty = run(&fixture, "getStudentByClass", json!({"classId": class_id + 1})).unwrap();
    assert_eq!(empty, json!([]));
}

#[test]
fn delete_results_follow_the_per_entity_policy() {
    let fixture = TestFixture::new();
    let graph = common::seed_graph(&fixture.db);

    // Course deletes return the prior row; student deletes return a flag.
    let deleted = run(
        &fixture,
        "deleteCourse",
        json!({"course_id": graph.course.course_id}),
    )
    .unwrap();
    assert_eq!(deleted["course_id"], json!(graph.course.course_id));

    let deleted = run(
        &fixture,
        "deleteStudent",
        json!({"student_id": graph.student.student_id}),
    )
    .unwrap();
    assert_eq!(deleted, json!(true));
}

#[test]
fn wire_errors_surface_as_typed_failures() {
    let fixture = TestFixture::new();

    let err = run(&fixture, "getStudentById", json!({"studentId": 7})).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound { entity: "Student", id: 7 }));

    let err = run(&fixture, "getStudentById", json!({"student": 7})).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidArgument { .. }));

    let err = run(&fixture, "enrollEveryone", json!({})).unwrap_err();
    assert!(matches!(err, ResolveError::InvalidArgument { .. }));
}

#[test]
fn teacher_email_lookup_serializes_null_on_miss() {
    let fixture = TestFixture::new();
    let missing = run(
        &fixture,
        "getTeacherByEmail",
        json!({"emailAddress": "ghost@school.org"}),
    )
    .unwrap();
    assert_eq!(missing, Value::Null);
}
