mod config;
mod demo;

fn main() -> anyhow::Result<()> {
    stockledger_observability::init();

    let config = config::DemoConfig::from_env();
    tracing::info!(
        path = %config.store_path.display(),
        low_threshold = config.low_threshold,
        "starting stock ledger demo"
    );

    let stdout = std::io::stdout();
    demo::run(&config, &mut stdout.lock())
}
