use clap::Parser;
use ripplescope::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        println!("{}", ripplescope::scene_config_json()?);
        return Ok(());
    }

    ripplescope::init_logging(cli.log_json)?;
    ripplescope::run(&cli)
}
