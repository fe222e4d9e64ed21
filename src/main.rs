use anyhow::Context;
use bananatoon::cli::{preset_listing, run_transform, startup_api_key, Cli, Command};
use bananatoon::gemini::GeminiClient;
use bananatoon::logging::{init_cli_tracing, init_tui_tracing};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Command::Presets) => {
            for line in preset_listing() {
                println!("{}", line);
            }
            Ok(())
        }
        Some(Command::Transform(args)) => {
            init_cli_tracing();
            let config = cli.load_config()?;
            let api_key = startup_api_key(&config);
            let client = GeminiClient::new(&config.gemini, api_key)?;

            let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
            let path = runtime.block_on(run_transform(args, &config.download.dir, &client))?;
            println!("{}", path.display());
            Ok(())
        }
        Some(Command::Tui) | None => {
            init_tui_tracing();
            let config = cli.load_config()?;
            let api_key = startup_api_key(&config);
            bananatoon::ui::run(&config, api_key)?;
            Ok(())
        }
    }
}
