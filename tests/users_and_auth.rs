mod common;

use common::{class, professor, student};
use escola::{
    models::{
        ids::UserId,
        user::{NewUser, Position, UserKind},
    },
    services::{auth_service, user_service},
    AppError, School,
};

#[test]
fn authentication_is_repeatable_and_read_only() {
    let mut school = School::new();
    let id = student(&mut school, "João");

    let first = auth_service::authenticate(&school, "João", "123").unwrap();
    let second = auth_service::authenticate(&school, "João", "123").unwrap();
    assert_eq!(first.id, id);
    assert_eq!(second.id, id);
    assert_eq!(first.name, second.name);
    assert_eq!(school.users().len(), 1);
}

#[test]
fn wrong_name_and_wrong_password_look_the_same() {
    let mut school = School::new();
    student(&mut school, "João");

    let bad_password = auth_service::authenticate(&school, "João", "999").unwrap_err();
    let bad_name = auth_service::authenticate(&school, "Joana", "123").unwrap_err();
    assert!(matches!(bad_password, AppError::InvalidCredentials));
    assert!(matches!(bad_name, AppError::InvalidCredentials));
    assert_eq!(bad_password.user_message(), bad_name.user_message());
}

#[test]
fn ids_increase_across_interleaved_entity_kinds() {
    let mut school = School::new();
    let t = professor(&mut school, "Carlos");
    let c1 = class(&mut school, t, "7A", 5);
    let s1 = student(&mut school, "A");
    let c2 = class(&mut school, t, "7B", 5);
    let s2 = student(&mut school, "B");

    assert!(t < s1 && s1 < s2);
    assert!(c1 < c2);
    assert_eq!(c1.0, 1);
    assert_eq!(s2, UserId(3));
}

#[test]
fn guardian_must_point_to_an_existing_student() {
    let mut school = School::new();
    let kid = student(&mut school, "João");
    let teacher = professor(&mut school, "Carlos");

    let ana = user_service::register_user(&mut school, NewUser::guardian("Ana", "123", kid)).unwrap();
    assert_eq!(
        user_service::find_user(&school, ana).unwrap().kind,
        UserKind::Guardian { student: kid }
    );

    for target in [teacher, UserId(404)] {
        assert!(matches!(
            user_service::register_user(&mut school, NewUser::guardian("Beto", "123", target)),
            Err(AppError::InvalidEnrollment(_))
        ));
    }
}

#[test]
fn blank_fields_are_rejected() {
    let mut school = School::new();
    assert!(matches!(
        user_service::register_user(&mut school, NewUser::student(" ", "123")),
        Err(AppError::UserCreation(_))
    ));
    assert!(matches!(
        user_service::register_user(&mut school, NewUser::student("A", "")),
        Err(AppError::UserCreation(_))
    ));
    assert!(school.users().is_empty());
}

#[test]
fn teacher_queries() {
    let mut school = School::new();
    let carlos = professor(&mut school, "Carlos");
    let fernanda = user_service::register_user(
        &mut school,
        NewUser::employee("Fernanda", "123", Position::Director),
    )
    .unwrap();
    student(&mut school, "A");
    let c = class(&mut school, fernanda, "8A", 3);

    let teaching: Vec<UserId> = user_service::employees_teaching(&school, c)
        .unwrap()
        .iter()
        .map(|u| u.id)
        .collect();
    assert_eq!(teaching, vec![fernanda]);
    assert_ne!(teaching[0], carlos);
    assert_eq!(user_service::list_students(&school).len(), 1);
}

#[test]
fn demo_seed_matches_login_flow() {
    let mut school = School::new();
    escola::state::seed_demo_data(&mut school).unwrap();

    let ana = auth_service::authenticate(&school, "Ana", "123").unwrap();
    let joao = auth_service::authenticate(&school, "João", "123").unwrap();
    assert_eq!(ana.kind, UserKind::Guardian { student: joao.id });
    assert_eq!(
        auth_service::authenticate(&school, "José", "123").unwrap().type_label(),
        "Funcionário (motorista)"
    );
    assert_eq!(user_service::list_students(&school).len(), 2);
}

#[test]
fn employee_positions_need_subject_or_title() {
    let mut school = School::new();
    let blank_subject = NewUser::employee(
        "X",
        "1",
        Position::Professor {
            subject: "  ".into(),
        },
    );
    assert!(matches!(
        user_service::register_user(&mut school, blank_subject),
        Err(AppError::UserCreation(_))
    ));
    assert!(matches!(
        user_service::register_user(&mut school, NewUser::employee("Y", "1", Position::Other(String::new()))),
        Err(AppError::UserCreation(_))
    ));
    assert!(school.users().is_empty());

    let clerk = user_service::register_user(
        &mut school,
        NewUser::employee("Rita", "1", Position::Other("secretária".into())),
    )
    .unwrap();
    assert_eq!(
        user_service::find_user(&school, clerk).unwrap().type_label(),
        "Funcionário (secretária)"
    );
}
