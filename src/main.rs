// src/main.rs
use escola::{audit::AuditLog, config::AppConfig, console::Console, state, School};
use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()
        .map_err(|e| anyhow::anyhow!("Falha ao ler a configuração: {}", e))?;

    // --- Configuração do Logging (Tracing) ---
    // Vai para stderr para não se misturar com os menus no stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "escola=info".into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("🚀 Iniciando o Sistema de Gestão Escolar...");

    // --- Estado da escola (criado uma vez, passado a todos) ---
    let mut school = School::new();
    if config.seed_demo_data {
        state::seed_demo_data(&mut school)
            .map_err(|e| anyhow::anyhow!("Falha ao carregar o banco de exemplos: {}", e))?;
    }

    let mut audit = match &config.audit_log_path {
        Some(path) => {
            tracing::info!("📝 Registo de auditoria em {}", path.display());
            AuditLog::with_file(path)
        }
        None => AuditLog::in_memory(),
    };

    // --- Sessão interativa ---
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    if let Err(e) = console.run(&mut school, &mut audit) {
        tracing::error!("❌ Erro fatal na sessão: {}", e);
        return Err(e.into());
    }

    tracing::info!("👋 Sessão terminada ({} ações registadas).", audit.entries().len());
    Ok(())
}
