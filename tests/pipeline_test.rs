use os_arch_chart::charts::{PNG_FILE_NAME, SVG_FILE_NAME};
use os_arch_chart::{build_chart, run, RenderSettings, StaticChartRenderer};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use tempfile::TempDir;

/// Text layout needs a system sans-serif font; skip rendering tests without one.
fn fonts_available() -> bool {
    let available = FontDesc::new(FontFamily::SansSerif, 14.0, FontStyle::Normal)
        .box_size("Architecture")
        .is_ok();
    if !available {
        eprintln!("no sans-serif font found, skipping render test");
    }
    available
}

#[test]
fn test_end_to_end_export_writes_both_files() {
    if !fonts_available() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let settings = RenderSettings::headless(temp_dir.path());

    let files = run(&settings).unwrap();

    assert_eq!(files.png, temp_dir.path().join(PNG_FILE_NAME));
    assert_eq!(files.svg, temp_dir.path().join(SVG_FILE_NAME));
    assert_eq!(
        files.png.file_name().unwrap(),
        "os_architecture_comparison.png"
    );
    assert_eq!(
        files.svg.file_name().unwrap(),
        "os_architecture_comparison.svg"
    );

    assert!(std::fs::metadata(&files.png).unwrap().len() > 0);
    assert!(std::fs::metadata(&files.svg).unwrap().len() > 0);
}

#[test]
fn test_png_matches_configured_size() {
    if !fonts_available() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let settings = RenderSettings {
        width: 640,
        height: 480,
        ..RenderSettings::headless(temp_dir.path())
    };

    let files = run(&settings).unwrap();
    assert_eq!(image::image_dimensions(&files.png).unwrap(), (640, 480));
}

#[test]
fn test_svg_output_is_byte_stable() {
    if !fonts_available() {
        return;
    }

    let fig = build_chart().unwrap();
    let first = StaticChartRenderer::render_svg(&fig, (700, 500)).unwrap();
    let second = StaticChartRenderer::render_svg(&fig, (700, 500)).unwrap();
    assert_eq!(first, second);

    let temp_dir = TempDir::new().unwrap();
    let settings = RenderSettings::headless(temp_dir.path());
    run(&settings).unwrap();
    let on_disk_first = std::fs::read(temp_dir.path().join(SVG_FILE_NAME)).unwrap();
    run(&settings).unwrap();
    let on_disk_second = std::fs::read(temp_dir.path().join(SVG_FILE_NAME)).unwrap();
    assert_eq!(on_disk_first, on_disk_second);
    assert_eq!(on_disk_first, first.into_bytes());
}

#[test]
fn test_svg_contains_chart_text_and_palette() {
    if !fonts_available() {
        return;
    }

    let fig = build_chart().unwrap();
    let svg = StaticChartRenderer::render_svg(&fig, (700, 500)).unwrap();

    for text in [
        "OS Architecture Comparison",
        "Architecture",
        "Score (1-5)",
        "Performance",
        "Security",
        "Dev Complexity",
        "Scalability",
        "Монолитная",
        "Микроядерная",
        "Гибридная",
    ] {
        assert!(svg.contains(text), "missing {text:?} in svg");
    }

    for color in ["#1FB8CD", "#DB4545", "#2E8B57", "#5D878F"] {
        assert!(
            svg.to_uppercase().contains(color),
            "missing color {color} in svg"
        );
    }
}

#[test]
fn test_export_into_missing_directory_creates_it() {
    if !fonts_available() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("charts").join("os");
    let files = run(&RenderSettings::headless(&nested)).unwrap();
    assert!(files.png.starts_with(&nested));
    assert!(files.svg.exists());
}
