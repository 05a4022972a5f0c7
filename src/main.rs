use wimwsop::config::{Config, CONFIG_PATH};
use wimwsop::server::{Listener, WorkerPool};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load(CONFIG_PATH)?;

    // One OS thread per worker
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(cfg.thread_limit.max(1))
        .enable_all()
        .build()?;

    runtime.block_on(serve(cfg))
}

async fn serve(cfg: Config) -> anyhow::Result<()> {
    let listener = Listener::bind(cfg.listen_port, cfg.thread_limit)?;
    let pool = WorkerPool::new(listener, &cfg);

    tokio::select! {
        res = pool.run() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
