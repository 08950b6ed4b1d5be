//! Payday Desk - terminal front end
//!
//! Signs the session gate, loads every list plus the dashboard counts and
//! prints them. The interesting logic lives in the library; this binary is
//! the smallest front end that exercises it end to end.

use std::path::{Path, PathBuf};

use clap::Parser;
use payday_client::{ClientConfig, PaydayClient};
use payday_desk::view::{
    dashboard_cards, departments_table, designations_table, employees_table, payrolls_table,
};
use payday_desk::{DeskContext, NoticeLevel, SessionStore, nav};
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(name = "payday-desk", about = "HR/payroll administration desk")]
struct Cli {
    /// Backend base URL including the API prefix
    #[arg(long, env = payday_client::ENV_API_URL)]
    api_url: Option<String>,

    /// Directory for the persisted session and logs
    #[arg(long, env = "PAYDAY_DATA_DIR", default_value = ".payday")]
    data_dir: PathBuf,
}

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

fn init_tracing(data_dir: &Path) -> anyhow::Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_dir = data_dir.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = rolling::daily(&log_dir, "payday-desk.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,payday_desk=debug,payday_client=debug"));

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking_file);

    let stdout_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _guard = init_tracing(&cli.data_dir)?;

    let config = match &cli.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    tracing::info!(base_url = %config.base_url, "Connecting to payroll backend");

    let session_store = SessionStore::new(&cli.data_dir);
    let Some(session) = session_store.load()? else {
        println!("No active session. Sign in first.");
        return Ok(());
    };
    if nav::resolve(nav::Route::Dashboard, Some(&session)) != nav::NavDecision::Allow {
        println!("No active session. Sign in first.");
        return Ok(());
    }
    println!(
        "Signed in as {}\n",
        session.display_name.as_deref().unwrap_or(&session.username)
    );

    let client = PaydayClient::connect(&config)?;
    let mut ctx = DeskContext::new(client);

    // Best effort: a failed load already cleared its list and queued a
    // notice, so the summary below stays coherent.
    let _ = ctx.load_dashboard().await;
    let _ = ctx.load_employees().await;
    let _ = ctx.load_departments().await;
    let _ = ctx.load_designations().await;
    if nav::resolve(nav::Route::Payroll, Some(&session)) == nav::NavDecision::Allow {
        let _ = ctx.load_payrolls().await;
    }

    for card in dashboard_cards(&ctx.stats) {
        println!("{}: {}", card.label, card.value);
    }

    println!("\n== Employees ==\n{}", employees_table(&ctx.employees));
    println!("== Departments ==\n{}", departments_table(&ctx.departments));
    println!(
        "== Designations ==\n{}",
        designations_table(&ctx.designations)
    );
    if nav::resolve(nav::Route::Payroll, Some(&session)) == nav::NavDecision::Allow {
        println!("== Payrolls ==\n{}", payrolls_table(&ctx.payrolls));
    }

    for notice in ctx.notices.drain() {
        match notice.level {
            NoticeLevel::Error => eprintln!("[error] {}", notice.message),
            _ => println!("{}", notice.message),
        }
    }

    Ok(())
}
