#[macro_use]
mod macros;
mod context;
mod error;
mod filters;
mod forms;
mod handlers;
mod naming;
mod page;
mod routes;
mod serde;
mod store;
mod templates;

use anyhow::Context as _;
use context::{Config, Context};
use tokio::runtime;

async fn run() -> Result<(), anyhow::Error> {
    let cfg = Config::from_env().context("Invalid configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.0)
        .init();

    let ctx = Context::new(cfg)?;
    let addr = (ctx.config.ip_addr, ctx.config.port);
    tracing::info!(
        "Serving pages from {} and assets from {} on {}:{}",
        ctx.store.data_dir().display(),
        ctx.config.static_dir.display(),
        addr.0,
        addr.1
    );

    warp::serve(routes::routes(ctx)).run(addr).await;

    Ok(())
}

fn main() {
    let rt = match runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Can't start runtime: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = rt.block_on(run()) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
