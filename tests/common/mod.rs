#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use escola::{
    models::{
        activity::NewClass,
        exam::NewExam,
        ids::{ClassId, ExamId, UserId},
        user::{NewUser, Position},
    },
    services::{class_service, exam_service, user_service},
    School,
};

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn today() -> NaiveDate {
    day(2025, 6, 10)
}

pub fn student(school: &mut School, name: &str) -> UserId {
    user_service::register_user(school, NewUser::student(name, "123")).expect("register student")
}

pub fn professor(school: &mut School, name: &str) -> UserId {
    user_service::register_user(
        school,
        NewUser::employee(
            name,
            "123",
            Position::Professor {
                subject: "Matemática".into(),
            },
        ),
    )
    .expect("register professor")
}

pub fn class(school: &mut School, teacher: UserId, name: &str, total: u32) -> ClassId {
    class_service::create_class(
        school,
        NewClass {
            name: name.into(),
            teacher,
            schedule: NaiveTime::from_hms_opt(8, 0, 0).expect("time"),
            n_classes_total: total,
        },
    )
    .expect("create class")
}

pub fn exam(school: &mut School, class_id: ClassId, name: &str, date: NaiveDate) -> ExamId {
    exam_service::schedule_exam(
        school,
        class_id,
        NewExam {
            name: name.into(),
            date,
        },
    )
    .expect("schedule exam")
}

/// Escola com um professor e uma turma vazia de 10 aulas.
pub fn school_with_class() -> (School, UserId, ClassId) {
    let mut school = School::new();
    let teacher = professor(&mut school, "Carlos");
    let class_id = class(&mut school, teacher, "7A", 10);
    (school, teacher, class_id)
}
