#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use wavesim::cli::Parser;
    use wavesim::{app, cli, config::Config, context::Context, utils::logger};

    let arg: wavesim::config::LaunchArg = cli::Args::parse().into();
    logger::init(arg.level_filter());

    let (config, sim) = match Config::resolve(&arg)
        .and_then(|config| Context::with_launch_arg(&config, &arg).map(|sim| (config, sim)))
    {
        Ok(res) => res,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(config.canvas_size()),
        resizable: false,
        ..Default::default()
    };
    eframe::run_native(
        "wavesim",
        native_options,
        Box::new(move |cc| Box::new(app::Model::new(cc, &config, sim))),
    )
}

// the web build starts from `wavesim::WebHandle` instead
#[cfg(target_arch = "wasm32")]
fn main() {}
