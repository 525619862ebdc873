// src/console/render.rs
// Formatação de texto dos relatórios. Não toca no estado.
use crate::models::report::{ClassOverview, StudentReport};
use std::fmt::Write;

pub fn percentage(value: Option<f64>) -> String {
    match value {
        Some(ratio) => format!("{:.2}", ratio * 100.0),
        None => "sem aulas registradas".to_string(),
    }
}

pub fn student_report(report: &StudentReport) -> String {
    let mut text = String::new();
    // Escrever numa String não falha
    let _ = writeln!(text, "\n📋 Dados do aluno {}:", report.student_name);

    if report.classes.is_empty() {
        let _ = writeln!(text, "📭 O aluno não está matriculado em nenhuma turma.");
    }

    for class in &report.classes {
        let _ = writeln!(text, "🏫 Turma {} ({})", class.name, class.schedule.format("%H:%M"));

        if class.resources.is_empty() {
            let _ = writeln!(text, "    📭 Nenhum material disponível.");
        } else {
            let _ = writeln!(text, "    📚 Materiais:");
            for resource in &class.resources {
                let _ = writeln!(text, "        {} ({})", resource.name, resource.url);
            }
        }

        if class.exams.is_empty() {
            let _ = writeln!(text, "    📭 Nenhuma prova ou nota disponível.");
        } else {
            let _ = writeln!(text, "    📈 Provas e Notas:");
            for exam in &class.exams {
                let _ = writeln!(text, "        [{}] {} ({})", exam.date, exam.name, exam.status.label());
            }
        }

        let _ = writeln!(
            text,
            "    ✅ Presença (%): {} (registradas {} aulas)",
            percentage(class.attendance),
            class.sessions_held
        );
    }

    if report.activities.is_empty() {
        let _ = writeln!(text, "📭 O aluno não participa de nenhuma atividade extracurricular.");
    } else {
        let _ = writeln!(text, "\n🎯 Atividades extracurriculares:");
        for activity in &report.activities {
            let _ = writeln!(text, "   {} [{}]", activity.name, activity.schedule.format("%H:%M"));
        }
    }

    text
}

pub fn class_overview(overview: &ClassOverview) -> String {
    let mut text = String::new();
    let _ = writeln!(text, "--- Informações da Turma ---");
    let _ = writeln!(text, "Nome: {}", overview.name);
    let _ = writeln!(text, "ID: {}", overview.class_id);
    let _ = writeln!(text, "Horário: {}", overview.schedule.format("%H:%M"));
    let _ = writeln!(text, "Aulas totais: {}", overview.n_classes_total);
    let _ = writeln!(text, "Aulas dadas: {}", overview.n_classes_passed);

    let _ = writeln!(text, "\nAlunos matriculados:");
    if overview.students.is_empty() {
        let _ = writeln!(text, "Nenhum aluno matriculado.");
    }
    for (id, name) in &overview.students {
        let _ = writeln!(text, "    {} (ID: {})", name, id);
    }

    let _ = writeln!(text, "\nProvas:");
    if overview.exams.is_empty() {
        let _ = writeln!(text, "Nenhuma prova cadastrada.");
    }
    for exam in &overview.exams {
        let _ = writeln!(text, "    [{}] {} ({})", exam.date, exam.name, exam.progress.label());
    }

    text
}
