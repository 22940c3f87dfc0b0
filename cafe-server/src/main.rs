use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use cafe_server::db::{DbService, backup};
use cafe_server::{Config, Server, ServerState, print_banner, setup_environment};

#[derive(Parser)]
#[command(name = "cafe-server", version, about = "Café table ledger server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Write a consistent copy of the database to TARGET
    Backup {
        /// Backup file to create (must not exist)
        target: PathBuf,
    },
    /// Replace the database with a backup. Stop the server first.
    Restore {
        /// Backup file to restore from
        source: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. 设置环境 (dotenv, 工作目录, 日志)
    let config = setup_environment().context("Failed to set up environment")?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(config).await,
        Command::Backup { target } => {
            let db = DbService::new(&config.database_path()).await?;
            backup::backup_to(&db.pool, &target).await?;
            db.pool.close().await;
            println!("Backup written to {}", target.display());
            Ok(())
        }
        Command::Restore { source } => {
            backup::restore_from(&source, &config.database_path()).await?;
            println!("Database restored from {}", source.display());
            Ok(())
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    print_banner();
    tracing::info!("☕ Cafe Server starting...");

    // 2. 初始化服务器状态 (数据库、默认菜单、打印机)
    let state = ServerState::initialize(&config).await?;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
