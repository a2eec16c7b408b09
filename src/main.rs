use std::{io, process::ExitCode};

use cmdwt::{args, launcher::DetachedSpawner, logging, utils, Config, Error};

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            logging::init(false);
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };
    logging::init(config.debug);

    let raw = utils::raw_command_line();
    let forwarded = args::forwarded_args(raw.as_deref(), &args::self_references());

    let result = cmdwt::run(&config, forwarded, utils::get_drives, &mut DetachedSpawner, &mut io::stdout());
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::TargetNotFound(_)) => {
            println!("{}", e);
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
