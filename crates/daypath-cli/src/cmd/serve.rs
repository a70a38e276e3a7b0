use anyhow::Context;
use daypath_core::config::Config;
use daypath_core::db::open_db;
use daypath_core::seed::{ensure_content_seeded, SeedOutcome};

pub fn run(mut config: Config, port: Option<u16>, open: bool) -> anyhow::Result<()> {
    if let Some(port) = port {
        config.port = port;
    }

    // Seed before binding.
    let conn = open_db(&config.db_path)
        .with_context(|| format!("opening {}", config.db_path.display()))?;
    match ensure_content_seeded(&conn).context("seeding content")? {
        SeedOutcome::Seeded(counts) => tracing::info!(lessons = counts.lessons, "content seeded"),
        SeedOutcome::Skipped(_) => tracing::debug!("content already present"),
    }
    drop(conn);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("binding port {}", config.port))?;
        let local = listener.local_addr()?;
        println!("daypath → http://localhost:{}", local.port());

        tokio::select! {
            res = daypath_server::serve_on(config, listener, open) => res,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutting down");
                Ok(())
            }
        }
    })
}
