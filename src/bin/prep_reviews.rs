use std::process::ExitCode;

fn main() -> ExitCode {
    match polarity::app::run_prep_reviews(std::env::args().skip(1)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
