//! Command-line entry point: replay a script and write a PNG.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "paintkit", version, about = "Replay a paint script into a PNG")]
struct Cli {
    /// JSON script to replay
    script: PathBuf,

    /// Where to write the image
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,
}

fn run(cli: &Cli) -> paintkit_app::AppResult<()> {
    let script = paintkit_app::load_script(&cli.script)?;
    log::info!(
        "Replaying {} steps on a {}x{} image",
        script.steps.len(),
        script.width,
        script.height
    );
    let image = paintkit_app::run_script(&script)?;
    image.save_png(&cli.output)?;
    log::info!("Wrote {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("paintkit: {}", err);
            ExitCode::FAILURE
        }
    }
}
