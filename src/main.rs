use std::process::ExitCode;

use basic_calc::config::WindowLayout;
use basic_calc::{AppError, logging};
use tracing::error;

fn main() -> ExitCode {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "Calculator exited with an error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(windows)]
fn run() -> Result<(), AppError> {
    use basic_calc::ui::CalculatorWindow;

    let layout = WindowLayout::default();
    layout.validate()?;

    let mut window = CalculatorWindow::open(&layout)?;
    window.run()?;
    Ok(())
}

#[cfg(not(windows))]
fn run() -> Result<(), AppError> {
    WindowLayout::default().validate()?;
    Err(AppError::UnsupportedPlatform)
}
