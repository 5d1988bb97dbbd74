use clap::Parser;
use std::process::ExitCode;
use tabpad::app::{CliArgs, Config, Program};
use tabpad::tui::CrosstermSession;

mod logging;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let _logging = match &args.log_dir {
        Some(dir) => match logging::init(dir) {
            Ok(guard) => guard,
            Err(err) => {
                println!("Alas, there's been an error: cannot create log dir: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "fatal");
            println!("Alas, there's been an error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> tabpad::Result<()> {
    let config = Config::load_with_args(args)?;
    let options = config.render_options()?;
    let state = config.build_state(&options.theme);

    let mut session = CrosstermSession::new()?;
    let state = Program::new(state, options).run(&mut session)?;
    session.close()?;

    tracing::debug!(chars = state.textarea.value().chars().count(), "exit");
    Ok(())
}
