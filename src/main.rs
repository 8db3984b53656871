use std::path::{Path, PathBuf};

use mandart::{
    CliController, FilePresenterPort, PictureDefinition, PngFilePresenter, PpmFilePresenter,
};

const DEFAULT_OUTPUT: &str = "output/mandart.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let definition = match args.next() {
        Some(path) => PictureDefinition::from_json_file(path)?,
        None => PictureDefinition::default(),
    };
    let output = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    if is_ppm(&output) {
        run(PpmFilePresenter::new(), definition, &output)
    } else {
        if !is_png(&output) {
            log::warn!("Unrecognised extension on {}, writing PNG", output.display());
        }
        run(PngFilePresenter::new(), definition, &output)
    }
}

fn run<P: FilePresenterPort>(
    presenter: P,
    definition: PictureDefinition,
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = CliController::new(presenter, definition);

    controller.generate()?;
    controller.write(output)?;

    Ok(())
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

fn is_ppm(path: &Path) -> bool {
    has_extension(path, "ppm")
}

fn is_png(path: &Path) -> bool {
    has_extension(path, "png")
}
