use sphere_tracer::{render, save_film, Config};

use anyhow::Result;
use structopt::StructOpt;
use tracing::{error, info, Level};

use std::path::PathBuf;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    /// TOML file with [image], [camera], [scene.sphere] and [render] tables
    #[structopt(long, parse(from_os_str))]
    pub config_file: Option<PathBuf>,
    /// Output image, `.png` writes PNG and anything else PPM
    #[structopt(short, long, parse(from_os_str))]
    pub output: Option<PathBuf>,
    #[structopt(long)]
    pub width: Option<usize>,
    #[structopt(long)]
    pub height: Option<usize>,
    #[structopt(long)]
    pub threads: Option<usize>,
    #[structopt(long, default_value = "info")]
    pub log_level: Level,
}

fn build_config(opts: &Opt) -> Result<Config> {
    let mut config = match &opts.config_file {
        Some(path) => {
            info!("reading config from {}", path.display());
            Config::load(path)?
        }
        None => Config::default(),
    };

    // Command line values override the config file
    if let Some(output) = &opts.output {
        config.image.output = output.clone();
    }
    if let Some(width) = opts.width {
        config.image.width = width;
    }
    if let Some(height) = opts.height {
        config.image.height = height;
    }
    if let Some(threads) = opts.threads {
        config.render.threads = threads;
    }

    config.validate()?;
    Ok(config)
}

fn run(opts: &Opt) -> Result<()> {
    let config = build_config(opts)?;
    let film = render(&config)?;
    save_film(&film, &config.image.output)?;
    info!("wrote {}", config.image.output.display());
    Ok(())
}

fn main() {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(opts.log_level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&opts) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}
