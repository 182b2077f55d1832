use std::process::ExitCode;

fn main() -> ExitCode {
    html_grader_lib::run()
}
