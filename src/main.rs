use clap::Parser;
use log::{debug, info};
use mousepad_generator::config::{Cli, JobConfig};
use mousepad_generator::error::Result;
use mousepad_generator::image::io::write_json_file;
use mousepad_generator::{write_outputs, GridRenderer};

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.verbosity().level_filter().to_string()),
    )
    .init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let job = cli.resolve()?;
    debug!("resolved job: {:?}", job);

    if cli.print_geometry {
        print_geometry(&job)?;
        return Ok(());
    }

    let reports = write_outputs(&job)?;
    if let Some(path) = &job.report_json {
        write_json_file(path, &reports)?;
        info!("render report written to {}", path.display());
    }
    Ok(())
}

fn print_geometry(job: &JobConfig) -> Result<()> {
    let renderer = GridRenderer::new(job.grid.clone())?;
    let (cfg, g) = (renderer.config(), renderer.geometry());
    println!("Grid geometry ({}x{})", cfg.width, cfg.height);
    println!(
        "  latitude:  {} lines from y={} every {}px",
        g.latitude_line_count, g.latitude_start_offset, g.pitch
    );
    println!(
        "  longitude: {} lines from x={} every {}px",
        g.longitude_line_count, g.longitude_start_offset, g.pitch
    );
    println!("  intersections: {}", g.intersection_count());
    Ok(())
}
