use clap::Parser;
use pgc_drv::{init_logging, run, Cli};

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    run(cli)
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = try_main(&cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
