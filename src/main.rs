use std::path::PathBuf;

use anyhow::Context;

use pixelmeasure::{load_image, run_measure, MeasureConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => pick_image().context("no image selected")?,
    };

    let image = load_image(&path)?;
    run_measure(image, MeasureConfig::default())
}

fn pick_image() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Open image to measure")
        .add_filter(
            "Images",
            &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"],
        )
        .pick_file()
}
