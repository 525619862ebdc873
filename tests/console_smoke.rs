mod common;

use common::today;
use escola::{
    audit::{AuditLog, AuditOutcome},
    console::Console,
    services::{class_service, user_service},
    state, School,
};
use std::io::Cursor;

fn run_script(school: &mut School, audit: &mut AuditLog, lines: &[&str]) -> String {
    let script = lines.join("\n") + "\n";
    let mut console = Console::new(Cursor::new(script.into_bytes()), Vec::new()).with_today(today());
    console.run(school, audit).expect("console run");
    String::from_utf8(console.into_output()).expect("utf8 output")
}

#[test]
fn teacher_creates_class_enrolls_and_holds_session_then_guardian_reads_report() {
    let mut school = School::new();
    state::seed_demo_data(&mut school).unwrap();
    let mut audit = AuditLog::in_memory();

    let output = run_script(
        &mut school,
        &mut audit,
        &[
            "1", "Carlos", "123", // login do professor
            "7", "7A", "08:00", "10", // criar turma
            "8", "1", "1,2", // matricular João e Maria
            "1", "1", "s", "n", // aula: João presente, Maria ausente
            "0", // voltar
            "1", "Ana", "123", // login da responsável
            "1", "0", // boletim do João
            "0",
        ],
    );

    assert!(output.contains("Login realizado como Funcionário (professor de Matemática)"));
    assert!(output.contains("Turma 7A (ID 1) criada com sucesso!"));
    assert!(output.contains("2 aluno(s) adicionado(s) à turma."));
    assert!(output.contains("Aula 1 registrada: 1 presente(s), 1 ausente(s)."));
    assert!(output.contains("Dados do aluno João"));
    assert!(output.contains("Presença (%): 100.00 (registradas 1 aulas)"));
    assert!(output.contains("Saindo do sistema..."));

    let sclass = class_service::classes_taught_by(&school, escola::models::ids::UserId(3));
    assert_eq!(sclass.len(), 1);
    assert_eq!(sclass[0].n_classes_passed, 1);

    let actions: Vec<(&str, &str)> = audit
        .entries()
        .iter()
        .map(|e| (e.actor.as_str(), e.action.as_str()))
        .collect();
    assert_eq!(
        actions,
        vec![
            ("Carlos", "escolheu a opção 7 no menu funcionário"),
            ("Carlos", "escolheu a opção 8 no menu funcionário"),
            ("Carlos", "escolheu a opção 1 no menu funcionário"),
            ("Ana", "escolheu a opção 1 no menu responsável"),
        ]
    );
    assert!(audit.entries().iter().all(|e| e.outcome == AuditOutcome::Ok));
}

#[test]
fn bad_login_and_end_of_input_are_handled() {
    let mut school = School::new();
    state::seed_demo_data(&mut school).unwrap();
    let mut audit = AuditLog::in_memory();

    let output = run_script(&mut school, &mut audit, &["1", "Carlos", "errada"]);
    assert!(output.contains("Nome ou senha inválidos."));
    assert!(output.contains("Sistema encerrado."));
    assert!(audit.entries().is_empty());
}

#[test]
fn staff_without_classes_only_sees_attendance_option() {
    let mut school = School::new();
    state::seed_demo_data(&mut school).unwrap();
    let mut audit = AuditLog::in_memory();

    // José é motorista: a opção 7 não existe para ele
    let output = run_script(&mut school, &mut audit, &["1", "José", "123", "7", "0", "0"]);
    assert!(output.contains("Registrar presença"));
    assert!(!output.contains("Criar turma"));
    assert!(output.contains("Opção inválida."));
    assert_eq!(audit.entries().len(), 1);
    assert_eq!(user_service::list_students(&school).len(), 2);
}

#[test]
fn enrollment_selection_can_be_cancelled() {
    let mut school = School::new();
    state::seed_demo_data(&mut school).unwrap();
    let mut audit = AuditLog::in_memory();

    let output = run_script(
        &mut school,
        &mut audit,
        &["1", "Carlos", "123", "7", "7A", "08:00", "10", "8", "1", "0", "0", "0"],
    );

    assert!(!output.contains("adicionado(s) à turma"));
    let sclass = &class_service::classes_taught_by(&school, escola::models::ids::UserId(3))[0];
    assert!(sclass.roster.students.is_empty());
    assert_eq!(audit.entries().len(), 2);
    assert!(audit.entries().iter().all(|e| e.outcome == AuditOutcome::Ok));
}
