mod common;

use common::{day, exam, school_with_class, student, today};
use escola::{
    models::ids::{ExamId, UserId},
    services::{class_service, exam_service},
    AppError,
};

#[test]
fn grade_for_pair_never_created_is_rejected() {
    let (mut school, _, class_id) = school_with_class();
    let enrolled = student(&mut school, "A");
    let outsider = student(&mut school, "B");
    class_service::enroll_students(&mut school, class_id, &[enrolled], today()).unwrap();
    let e1 = exam(&mut school, class_id, "P1", day(2025, 4, 1));

    let err = exam_service::submit_grade(&mut school, e1, outsider, 8.0).unwrap_err();
    assert!(matches!(
        err,
        AppError::StudentNotInExam { exam, student } if exam == e1 && student == outsider
    ));

    assert!(matches!(
        exam_service::submit_grade(&mut school, ExamId(77), enrolled, 8.0),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn students_enrolled_after_exam_only_get_rows_through_enrollment() {
    let (mut school, _, class_id) = school_with_class();
    let first = student(&mut school, "A");
    class_service::enroll_students(&mut school, class_id, &[first], today()).unwrap();
    let e1 = exam(&mut school, class_id, "P1", day(2025, 4, 1));

    assert_eq!(exam_service::exam_results_for_exam(&school, e1).len(), 1);

    let second = student(&mut school, "B");
    class_service::enroll_students(&mut school, class_id, &[second], today()).unwrap();
    assert_eq!(exam_service::exam_results_for_exam(&school, e1).len(), 2);
    exam_service::submit_grade(&mut school, e1, second, 6.5).unwrap();
}

#[test]
fn regrading_overwrites_previous_value() {
    let (mut school, _, class_id) = school_with_class();
    let a = student(&mut school, "A");
    class_service::enroll_students(&mut school, class_id, &[a], today()).unwrap();
    let e1 = exam(&mut school, class_id, "P1", day(2025, 4, 1));

    exam_service::submit_grade(&mut school, e1, a, 4.0).unwrap();
    exam_service::submit_grade(&mut school, e1, a, 9.25).unwrap();
    assert_eq!(exam_service::exam_results_for_exam(&school, e1)[0].grade, Some(9.25));
}

#[test]
fn out_of_range_grades_are_rejected() {
    let (mut school, _, class_id) = school_with_class();
    let a = student(&mut school, "A");
    class_service::enroll_students(&mut school, class_id, &[a], today()).unwrap();
    let e1 = exam(&mut school, class_id, "P1", day(2025, 4, 1));

    for bad in [-1.0, 10.5, f64::INFINITY] {
        assert!(matches!(
            exam_service::submit_grade(&mut school, e1, a, bad),
            Err(AppError::InvalidGrade(_))
        ));
    }
    assert_eq!(exam_service::exam_results_for_exam(&school, e1)[0].grade, None);
}

#[test]
fn bulk_grading_is_all_or_nothing_and_closes_exam() {
    let (mut school, _, class_id) = school_with_class();
    let a = student(&mut school, "A");
    let b = student(&mut school, "B");
    class_service::enroll_students(&mut school, class_id, &[a, b], today()).unwrap();
    let e1 = exam(&mut school, class_id, "P1", day(2025, 4, 1));
    let e2 = exam(&mut school, class_id, "P2", day(2025, 5, 1));

    // O segundo par é de um aluno fora da prova: nada é gravado
    let err = exam_service::grade_exam(&mut school, e1, &[(a, 7.0), (UserId(999), 5.0)]).unwrap_err();
    assert!(matches!(err, AppError::StudentNotInExam { .. }));
    assert!(exam_service::exam_results_for_exam(&school, e1)
        .iter()
        .all(|r| r.grade.is_none()));
    assert!(!exam_service::find_exam(&school, e1).unwrap().grades_submitted);

    exam_service::grade_exam(&mut school, e1, &[(a, 7.0), (b, 8.0)]).unwrap();
    assert!(exam_service::find_exam(&school, e1).unwrap().grades_submitted);

    let open: Vec<ExamId> = exam_service::exams_for_class_without_grades(&school, class_id)
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(open, vec![e2]);
    assert_eq!(exam_service::exams_for_class(&school, class_id).len(), 2);

    assert!(matches!(
        exam_service::grade_exam(&mut school, e1, &[(a, 1.0)]),
        Err(AppError::GradingClosed(id)) if id == e1
    ));
}

#[test]
fn exam_needs_existing_class_and_name() {
    let (mut school, _, class_id) = school_with_class();
    let blank = exam_service::schedule_exam(
        &mut school,
        class_id,
        escola::models::exam::NewExam {
            name: "  ".into(),
            date: day(2025, 4, 1),
        },
    );
    assert!(matches!(blank, Err(AppError::InvalidInput(_))));

    let missing = exam_service::schedule_exam(
        &mut school,
        escola::models::ids::ClassId(5),
        escola::models::exam::NewExam {
            name: "P1".into(),
            date: day(2025, 4, 1),
        },
    );
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}
