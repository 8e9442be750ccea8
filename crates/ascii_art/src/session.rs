use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use ascii_render::{AsciiRenderer, RenderOutput, TargetGeometry};
use log::{debug, warn};

use crate::samples::Sample;
use crate::source::{ImageLoader, ImageSource, LoadError};

pub const BANNER: &str = "ASCII art generator.\n\
You'll be given two samples, horizontal and vertical.\n\
Then, you can enter a custom image!\n\
------------------------------------------------------\n";

pub const PROMPT: &str = "Enter a URL for your own image (empty to exit): ";

pub const LOAD_FAILURE: &str = "The image could not be loaded.";

/// Cosmetic delays between the steps of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// Before each image is rendered.
    pub before_image: Duration,
    /// Between the caption and the art.
    pub before_art: Duration,
}

impl Pacing {
    pub fn standard() -> Self {
        Self { before_image: Duration::from_secs(3), before_art: Duration::from_secs(1) }
    }

    pub fn none() -> Self {
        Self { before_image: Duration::ZERO, before_art: Duration::ZERO }
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}

/// Caption printed above the art.
pub fn caption(title: Option<&str>, geometry: &TargetGeometry) -> String {
    match title {
        Some(title) => format!("Generating ASCII art for {title}"),
        None if geometry.columns > geometry.rows => {
            "Generating ASCII art for Landscape Image".to_string()
        },
        None => "Generating ASCII art for Portrait Image".to_string(),
    }
}

/// Renders the built-in samples, then whatever the user asks for.
pub struct Session<L> {
    loader: L,
    renderer: AsciiRenderer,
    pacing: Pacing,
}

impl<L: ImageLoader> Session<L> {
    pub fn new(loader: L, renderer: AsciiRenderer, pacing: Pacing) -> Self {
        Self { loader, renderer, pacing }
    }

    /// Run until the user enters an empty location or input ends.
    ///
    /// A sample that cannot be loaded aborts the session. Interactive failures
    /// are reported and the prompt is shown again.
    pub fn run<R: BufRead, W: Write>(
        &self,
        samples: &[Sample],
        input: &mut R,
        output: &mut W,
    ) -> Result<()> {
        output.write_all(BANNER.as_bytes())?;
        output.flush()?;

        for sample in samples {
            self.render_sample(sample, output)?;
        }

        self.prompt_loop(input, output)
    }

    fn render_sample<W: Write>(&self, sample: &Sample, output: &mut W) -> Result<()> {
        pause(self.pacing.before_image);
        writeln!(output)?;

        let rendered = self
            .prepare(&ImageSource::parse(sample.location))
            .with_context(|| format!("failed to load sample image {:?}", sample.title))?;
        self.print_art(&rendered, Some(sample.title), output)
    }

    fn prompt_loop<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<()> {
        loop {
            output.write_all(PROMPT.as_bytes())?;
            output.flush()?;

            let mut line = Vec::new();
            let read =
                input.read_until(b'\n', &mut line).context("failed to read image location")?;
            writeln!(output)?;

            if read == 0 {
                debug!("input closed, ending session");
                return Ok(());
            }

            let location = match std::str::from_utf8(&line) {
                Ok(location) => location.trim(),
                Err(err) => {
                    warn!("image location is not valid UTF-8: {err}");
                    writeln!(output, "{LOAD_FAILURE}")?;
                    writeln!(output)?;
                    continue;
                },
            };
            if location.is_empty() {
                return Ok(());
            }

            match self.prepare(&ImageSource::parse(location)) {
                Ok(rendered) => {
                    pause(self.pacing.before_image);
                    self.print_art(&rendered, None, output)?;
                },
                Err(err) => {
                    warn!("failed to load {location}: {err}");
                    writeln!(output, "{LOAD_FAILURE}")?;
                },
            }
            writeln!(output)?;
        }
    }

    fn prepare(&self, source: &ImageSource) -> Result<RenderOutput, LoadError> {
        let image = self.loader.load(source)?;
        Ok(self.renderer.render_image(&image)?)
    }

    fn print_art<W: Write>(
        &self,
        rendered: &RenderOutput,
        title: Option<&str>,
        output: &mut W,
    ) -> Result<()> {
        writeln!(output, "{}", caption(title, &rendered.geometry))?;
        writeln!(output)?;
        output.flush()?;

        pause(self.pacing.before_art);
        writeln!(output, "{}", rendered.grid)?;
        output.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Cursor;

    use ascii_render::Orientation;
    use image::{DynamicImage, Rgb, RgbImage};
    use reqwest::StatusCode;

    use super::*;

    const WIDE: &str = "https://example.test/wide.jpg";
    const TALL: &str = "https://example.test/tall.jpg";

    const TEST_SAMPLES: [Sample; 2] = [
        Sample { location: WIDE, title: "Wide sample" },
        Sample { location: TALL, title: "Tall sample" },
    ];

    struct FakeLoader {
        images: HashMap<ImageSource, DynamicImage>,
    }

    impl FakeLoader {
        fn new() -> Self {
            let mut images = HashMap::new();
            images.insert(ImageSource::parse(WIDE), solid(200, 100, [255, 255, 255]));
            images.insert(ImageSource::parse(TALL), solid(100, 200, [0, 0, 0]));
            images.insert(ImageSource::parse("empty.png"), solid(0, 0, [0, 0, 0]));
            images.insert(ImageSource::parse("strip.png"), solid(1, 1000, [255, 255, 255]));
            Self { images }
        }
    }

    impl ImageLoader for FakeLoader {
        fn load(&self, source: &ImageSource) -> Result<DynamicImage, LoadError> {
            self.images.get(source).cloned().ok_or(LoadError::Status(StatusCode::NOT_FOUND))
        }
    }

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(rgb)))
    }

    fn run_session(samples: &[Sample], input: impl AsRef<[u8]>) -> (Result<()>, String) {
        let session = Session::new(FakeLoader::new(), AsciiRenderer::default(), Pacing::none());
        let mut input = Cursor::new(input.as_ref().to_vec());
        let mut output = Vec::new();
        let result = session.run(samples, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn empty_input_after_samples_exits_cleanly() {
        let (result, output) = run_session(&TEST_SAMPLES, "\n");

        assert!(result.is_ok());
        assert!(output.starts_with(BANNER));
        assert!(output.contains("Generating ASCII art for Wide sample\n\n"));
        assert!(output.contains("Generating ASCII art for Tall sample\n\n"));
        assert!(!output.contains(LOAD_FAILURE));
        assert!(output.ends_with(&format!("{PROMPT}\n")));
    }

    #[test]
    fn sample_layout() {
        let (result, output) = run_session(&TEST_SAMPLES[..1], "");
        assert!(result.is_ok());

        let art = format!("{}\n", "#".repeat(120)).repeat(33);
        let expected = format!(
            "{BANNER}\nGenerating ASCII art for Wide sample\n\n{art}\n{PROMPT}\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn no_samples_goes_straight_to_prompt() {
        let (result, output) = run_session(&[], "   \n");
        assert!(result.is_ok());
        assert_eq!(output, format!("{BANNER}{PROMPT}\n"));
    }

    #[test]
    fn interactive_failure_is_reported_and_loop_continues() {
        let input = format!("https://example.test/nope.png\n{TALL}\n\n");
        let (result, output) = run_session(&[], &input);

        assert!(result.is_ok());
        assert_eq!(output.matches(LOAD_FAILURE).count(), 1);
        assert_eq!(output.matches(PROMPT).count(), 3);
        assert!(output.contains(&format!("{PROMPT}\n{LOAD_FAILURE}\n\n{PROMPT}")));
        assert!(output.contains("Generating ASCII art for Portrait Image\n\n"));

        let art = format!("{}\n", " ".repeat(54)).repeat(60);
        assert!(output.contains(&format!("Portrait Image\n\n{art}\n\n{PROMPT}")));
    }

    #[test]
    fn untitled_landscape_caption() {
        let (result, output) = run_session(&[], &format!("{WIDE}\n"));
        assert!(result.is_ok());
        assert!(output.contains("Generating ASCII art for Landscape Image\n"));
    }

    #[test]
    fn render_failure_is_a_load_failure() {
        let (result, output) = run_session(&[], "empty.png\n\n");
        assert!(result.is_ok());
        assert_eq!(output.matches(LOAD_FAILURE).count(), 1);
    }

    #[test]
    fn too_elongated_image_is_a_load_failure() {
        let (result, output) = run_session(&[], "strip.png\n\n");

        assert!(result.is_ok());
        assert_eq!(output, format!("{BANNER}{PROMPT}\n{LOAD_FAILURE}\n\n{PROMPT}\n"));
        assert!(!output.contains("Generating ASCII art"));
    }

    #[test]
    fn invalid_utf8_input_reprompts() {
        let (result, output) = run_session(&[], b"\xff\xfe\n\n");

        assert!(result.is_ok());
        assert_eq!(output, format!("{BANNER}{PROMPT}\n{LOAD_FAILURE}\n\n{PROMPT}\n"));
    }

    #[test]
    fn failing_sample_aborts_session() {
        let broken = [Sample { location: "https://example.test/gone.jpg", title: "Gone" }];
        let (result, output) = run_session(&broken, "\n");

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("\"Gone\""));
        assert!(!output.contains(PROMPT));
    }

    #[test]
    fn caption_follows_grid_shape() {
        let wide = TargetGeometry { columns: 120, rows: 33, orientation: Orientation::Landscape };
        let tall = TargetGeometry { columns: 54, rows: 60, orientation: Orientation::Portrait };

        assert_eq!(caption(None, &wide), "Generating ASCII art for Landscape Image");
        assert_eq!(caption(None, &tall), "Generating ASCII art for Portrait Image");
        assert_eq!(caption(Some("Emperor Penguin"), &wide), "Generating ASCII art for Emperor Penguin");
    }
}
