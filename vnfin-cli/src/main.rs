use std::process::ExitCode;

use vnfin_cli::{CliConfig, Console, Envelope, logging};

fn main() -> ExitCode {
    logging::setup_tracing();

    let mut console = Console::stdout();
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to start runtime");
            let _ = console.emit(&Envelope::failure(format!("runtime: {e}")));
            return ExitCode::FAILURE;
        }
    };

    let config = CliConfig::from_env();
    let code = runtime.block_on(vnfin_cli::run(std::env::args_os(), &config, &mut console));
    ExitCode::from(code)
}
