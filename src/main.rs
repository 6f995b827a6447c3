use std::process::ExitCode;
use yaml_fmt::cli::{App, Args};
use yaml_fmt::report::PREFIX;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse_args();

    if let Some(code) = App::skip_if_unsupported(&args) {
        return code;
    }

    let app = match App::from_args(&args) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{} {:#}", PREFIX, err);
            return ExitCode::FAILURE;
        }
    };

    match app.run(&args).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", PREFIX, err);
            ExitCode::FAILURE
        }
    }
}
