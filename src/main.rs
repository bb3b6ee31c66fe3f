use botranges::app::App;
use botranges::cli::Cli;
use botranges::config::Config;

#[tokio::main]
async fn main() {
    let cli = Cli::from_args();

    // Load configuration: defaults -> environment -> CLI
    let mut config = Config::from_env();
    config.merge_with_cli(&cli);

    let error_enabled = cli.error_enabled();
    let app = App::new(cli, config);

    match app.run().await {
        Ok(0) => {}
        Ok(failed) => {
            // Partial failure: siblings already succeeded and were written,
            // but the run as a whole must not look clean.
            if error_enabled {
                eprintln!("{failed} source(s) failed");
            }
            std::process::exit(1);
        }
        Err(e) => {
            if error_enabled {
                eprintln!("{e}");
            }
            std::process::exit(2);
        }
    }
}
