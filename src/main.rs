use clap::Parser;
use easyservice::cli::Args;
use easyservice::error::{EXIT_FAILURE, ServiceError};

fn main() {
    // Warnings only unless RUST_LOG says otherwise; user-facing output goes
    // to stdout, log records to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {} {}:{}] {}",
                buf.timestamp_millis(),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    let code = match easyservice::run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e:#}");
            e.downcast_ref::<ServiceError>()
                .map_or(EXIT_FAILURE, ServiceError::exit_code)
        }
    };
    std::process::exit(code);
}
