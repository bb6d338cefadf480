use std::process::ExitCode;

use mandelbrot_zoom::{MandelbrotConfig, PixelsPresenterFactory, RunGuiCommand};

fn main() -> ExitCode {
    env_logger::init();

    let presenter_factory = PixelsPresenterFactory::new();
    let command = RunGuiCommand::new(presenter_factory, MandelbrotConfig::default());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
