use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = scope_cli::command().get_matches();

    scope_cli::init_tracing(matches.get_one::<String>("log-level").map(String::as_str));

    let stdout = std::io::stdout();
    match scope_cli::run(&matches, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
