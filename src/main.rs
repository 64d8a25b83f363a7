#[cfg(test)]
#[macro_use]
mod test_utils;

mod camera;
mod color;
mod input;
mod lights;
mod materials;
mod mathutil;
mod matrix;
mod obj;
mod ray;
mod renderer;
mod scene;
mod scenes;
mod shapes;
mod vector;

use std::process::ExitCode;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::{Duration, Instant};

use clap::Parser;
use pbr::ProgressBar;
use rayon::ThreadPoolBuilder;

use crate::color::ColorRGB;
use crate::input::NoInput;
use crate::renderer::{LightingMode, Renderer};
use crate::scenes::SceneName;

#[derive(Parser)]
#[command(
    version = "0.1.0",
    author = "Gordon Tyler <gordon@doxxx.net>",
    about = "Offline CPU ray tracer"
)]
struct CommandLineOptions {
    /// Scene from the built-in catalogue: w1, w2, w3-test, w3, w4-test, w4-reference, w4-bunny
    scene: String,

    /// Image width
    #[arg(long, default_value = "1024", value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Image height
    #[arg(long, default_value = "768", value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Number of render threads
    #[arg(short('t'), long, value_parser = clap::value_parser!(usize))]
    threads: Option<usize>,

    /// MSAA samples per pixel
    #[arg(short('s'), long, default_value = "1", value_parser = ["1", "4", "16"])]
    samples: String,

    /// Lighting mode: observed-area, radiance, brdf, combined
    #[arg(long, default_value = "combined")]
    lighting_mode: String,

    /// Disable shadow rays
    #[arg(long)]
    no_shadows: bool,

    /// Output PNG path
    #[arg(short('o'), long, default_value = "out.png")]
    output: String,
}

fn parse_lighting_mode(value: &str) -> Result<LightingMode, String> {
    match value {
        "observed-area" => Ok(LightingMode::ObservedArea),
        "radiance" => Ok(LightingMode::Radiance),
        "brdf" => Ok(LightingMode::Brdf),
        "combined" => Ok(LightingMode::Combined),
        other => Err(format!("unknown lighting mode {:?} (expected one of observed-area, radiance, brdf, combined)", other)),
    }
}

fn run(opts: CommandLineOptions) -> Result<(), String> {
    let scene_name = SceneName::from_key(&opts.scene)
        .ok_or_else(|| format!("unknown scene {:?} (run with --help to see the catalogue)", opts.scene))?;
    let lighting_mode = parse_lighting_mode(&opts.lighting_mode)?;

    ThreadPoolBuilder::new()
        .num_threads(opts.threads.unwrap_or_else(num_cpus::get))
        .build_global()
        .map_err(|e| format!("could not configure thread pool: {}", e))?;

    let mut scene = scenes::build(scene_name);
    scene.update(0.0, &NoInput);

    let mut renderer = Renderer::new(opts.width, opts.height);
    renderer.lighting_mode = lighting_mode;
    renderer.shadows_enabled = !opts.no_shadows;
    renderer.set_sample_count(opts.samples.parse().expect("validated by clap's possible_values"));

    let progress = Arc::new(Mutex::new(CliRenderProgress::new(opts.width, opts.height, renderer.sample_count())));
    let (stop_ticker, ticker_handle) = spawn_progress_ticker(&progress);

    progress.lock().unwrap().render_started();
    let framebuffer = renderer.render(&scene);
    progress.lock().unwrap().render_finished();

    stop_ticker.store(true, Ordering::Relaxed);
    ticker_handle.join().expect("progress ticker thread panicked");

    write_png(&opts.output, opts.width, opts.height, &framebuffer)
        .map_err(|e| format!("could not write {}: {}", opts.output, e))?;

    Ok(())
}

fn main() -> ExitCode {
    let opts = CommandLineOptions::parse();
    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn spawn_progress_ticker(progress: &Arc<Mutex<CliRenderProgress>>) -> (Arc<AtomicBool>, std::thread::JoinHandle<()>) {
    let stop = Arc::new(AtomicBool::new(false));
    let handle = {
        let stop = stop.clone();
        let progress = progress.clone();
        std::thread::spawn(move || {
            while !stop.load(Ordering::Relaxed) {
                progress.lock().unwrap().tick();
                sleep(Duration::from_millis(250));
            }
        })
    };
    (stop, handle)
}

fn color_to_rgb(c: ColorRGB) -> image::Rgb<u8> {
    let bytes = c.to_bytes();
    image::Rgb(bytes)
}

fn write_png(path: &str, width: u32, height: u32, framebuffer: &[ColorRGB]) -> Result<(), Box<dyn std::error::Error>> {
    let mut image_buffer = image::RgbImage::new(width, height);
    for (x, y, pixel) in image_buffer.enumerate_pixels_mut() {
        *pixel = color_to_rgb(framebuffer[(y * width + x) as usize]);
    }
    image_buffer.save(path)?;
    Ok(())
}

struct CliRenderProgress {
    start_time: Instant,
    pb: ProgressBar<std::io::Stdout>,
}

impl CliRenderProgress {
    fn new(width: u32, height: u32, samples: u32) -> CliRenderProgress {
        println!(
            "Rendering {}x{}, {} samples per pixel, using {} threads.",
            width,
            height,
            samples,
            rayon::current_num_threads()
        );
        println!("Started at {}", format_timestamp(time::OffsetDateTime::now_utc()));
        let mut pb = ProgressBar::new(1);
        pb.show_tick = true;
        pb.message("Rendering: ");
        CliRenderProgress {
            start_time: Instant::now(),
            pb,
        }
    }

    fn tick(&mut self) {
        self.pb.tick();
    }

    fn render_started(&mut self) {
        self.pb.set(0);
    }

    fn render_finished(&mut self) {
        self.pb.finish_println(&format!(
            "Finished at {} ({})",
            format_timestamp(time::OffsetDateTime::now_utc()),
            format_duration(self.start_time.elapsed())
        ));
    }
}

fn format_timestamp(t: time::OffsetDateTime) -> String {
    t.format(&time::format_description::well_known::Rfc2822)
        .unwrap_or_else(|_| t.to_string())
}

fn format_duration(d: Duration) -> String {
    let total_seconds = d.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    let millis = d.subsec_millis();

    let mut s = String::new();
    if hours > 0 {
        s += &format!("{}h ", hours);
    }
    if hours > 0 || minutes > 0 {
        s += &format!("{}m ", minutes);
    }
    s += &format!("{}.{:03}s", seconds, millis);
    s
}
