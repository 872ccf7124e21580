use log::{error, info};
use minifb::{Scale, Window, WindowOptions};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;
use wireframe_renderer::{
    create_clap_command, fatal_message, handle_clap_matches,
    pipeline::{FrameLoop, Pipeline},
    Options, RenderConfig,
};

fn main() -> ExitCode {
    let matches = create_clap_command().get_matches();
    match start(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Renderer stopped with an error: {}", e);
            eprintln!("{}", fatal_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn start(matches: &clap::ArgMatches) -> io::Result<()> {
    let options = handle_clap_matches(matches)?;
    init_logging(&options)?;

    info!("Starting with {:?}", options.render);
    run_win(&options.render)
}

/// Logs go to stderr unless a file was asked for; nothing is written to disk by default.
fn init_logging(options: &Options) -> io::Result<()> {
    let result = match &options.log_file {
        Some(path) => {
            let log_file = OpenOptions::new().create(true).append(true).open(path)?;
            WriteLogger::init(options.log_level, Config::default(), log_file)
        }
        None => TermLogger::init(
            options.log_level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };
    result.map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

pub fn run_win(config: &RenderConfig) -> io::Result<()> {
    // Validate the shape before anything is put on screen.
    let mut pipeline = Pipeline::new(config)?;

    let mut window = Window::new(
        &config.title,
        config.width,
        config.height,
        WindowOptions {
            resize: false,
            scale: Scale::X1,
            ..WindowOptions::default()
        },
    )
    .map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("unable to open {}x{} window: {}", config.width, config.height, e),
        )
    })?;
    // The frame loop does its own throttling.
    window.set_target_fps(0);

    let mut frame_loop = FrameLoop::new(config);
    let rotation = frame_loop.run(&mut window, &mut pipeline)?;
    info!("Final rotation {:?}", rotation);
    Ok(())
}
