use page_detector::config::load_config;
use page_detector::diagnostics::DetailedDetection;
use page_detector::image::io::{load_grayscale_image, write_json_file};
use page_detector::PageDetector;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "Usage: page_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input_path)?;
    let image = gray.as_view();

    let detector = PageDetector::new(config.page_params.clone());
    let detailed = detector.detect_with_diagnostics(image, config.scale);

    print_text_summary(&detailed);

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &detailed)?;
        println!("\nJSON report written to {}", path.display());
    }

    Ok(())
}

fn print_text_summary(detailed: &DetailedDetection) {
    let result = &detailed.result;
    let diag = &detailed.diagnostics;

    println!(
        "input {}x{} -> working {}x{} ({} pyramid levels)",
        diag.input_width,
        diag.input_height,
        diag.working_width,
        diag.working_height,
        diag.pyramid_levels
    );
    println!(
        "segments={} bundles={} families=({}, {}) quads={} kept={}",
        diag.segments_total,
        diag.bundles_total,
        diag.family_u_count,
        diag.family_v_count,
        diag.quads_synthesized,
        result.candidates
    );
    if result.found {
        println!(
            "page found: rectangularity={:.3} area_ratio={:.3}",
            result.rectangularity, result.area_ratio
        );
        for (i, corner) in result.corners.iter().enumerate() {
            println!("  corner {i}: ({:.1}, {:.1})", corner[0], corner[1]);
        }
    } else {
        println!("no page boundary found");
    }
    println!("latency: {:.3} ms", result.latency_ms);
}
