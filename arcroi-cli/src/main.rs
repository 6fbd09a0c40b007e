//! Command-line interface for annular-sector ROI geometry and masks.
#![allow(clippy::uninlined_format_args, clippy::cast_precision_loss)]

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use arcroi_algorithms::{
    count_selected, rasterize, resolve_geometry, AnnularSectorGeometry, HandleSet, MaskShape,
    Point, RoiConfig,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{debug, info};
use ndarray::ArrayView2;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Core error: {0}")]
    Core(#[from] arcroi_core::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Mask output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MaskFormat {
    /// `#` for selected pixels, `.` otherwise, one row per line
    Text,
    /// Comma-separated 0/1, one row per line
    Csv,
    /// Nested JSON arrays of booleans, outer array over rows
    Json,
}

/// Annular-sector ROI geometry and masking.
#[derive(Parser)]
#[command(name = "arcroi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Convention selection shared by all subcommands.
#[derive(Args, Debug)]
struct ConventionArgs {
    /// JSON file with inner_radius / angles / parallel settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reproduce legacy ArcROI numbers exactly (overrides --config)
    #[arg(long)]
    parity: bool,
}

impl ConventionArgs {
    fn load(&self) -> Result<RoiConfig> {
        if self.parity {
            return Ok(RoiConfig::parity());
        }
        match &self.config {
            Some(path) => {
                debug!("loading config from {}", path.display());
                Ok(RoiConfig::from_file(path)?)
            }
            None => Ok(RoiConfig::default()),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve radii and sweep from handle offsets and print them as JSON
    Resolve {
        /// Sector center "x,y"; handle offsets are relative to it
        #[arg(long, default_value = "0,0", value_parser = parse_point, allow_hyphen_values = true)]
        center: Point,

        /// Construction radius, used for handles not given explicitly
        #[arg(long, default_value = "1.0")]
        radius: f64,

        /// Inner handle offset "x,y"
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        inner: Option<Point>,

        /// Outer handle offset "x,y"
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        outer: Option<Point>,

        /// Left azimuth handle offset "x,y"
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        left: Option<Point>,

        /// Right azimuth handle offset "x,y"
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        right: Option<Point>,

        #[command(flatten)]
        conventions: ConventionArgs,
    },

    /// Rasterize a sector into a boolean mask
    Mask {
        /// Mask width (columns)
        #[arg(long)]
        width: usize,

        /// Mask height (rows)
        #[arg(long)]
        height: usize,

        /// Sector center in pixel coordinates "x,y"
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        center: Point,

        /// Inner radius (pixels)
        #[arg(long, default_value = "0.0")]
        inner_radius: f64,

        /// Outer radius (pixels)
        #[arg(long)]
        outer_radius: f64,

        /// Start angle (degrees)
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        start: f64,

        /// Signed sweep (degrees)
        #[arg(long, allow_hyphen_values = true)]
        arc: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: MaskFormat,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        conventions: ConventionArgs,
    },
}

fn parse_point(value: &str) -> std::result::Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected \"x,y\", got \"{value}\""))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate \"{}\": {e}", part.trim()))
    };
    Ok(Point::new(parse(x)?, parse(y)?))
}

/// JSON document printed by `resolve`: the center echoed back with the
/// geometry resolved around it.
fn resolve_report(center: Point, geometry: &AnnularSectorGeometry) -> serde_json::Value {
    serde_json::json!({
        "center": center,
        "geometry": geometry,
    })
}

fn render_mask(mask: ArrayView2<'_, bool>, format: MaskFormat) -> Result<String> {
    let mut out = String::with_capacity(mask.len() * 2);
    match format {
        MaskFormat::Text => {
            for row in mask.rows() {
                out.extend(row.iter().map(|&selected| if selected { '#' } else { '.' }));
                out.push('\n');
            }
        }
        MaskFormat::Csv => {
            for row in mask.rows() {
                let cells: Vec<&str> = row
                    .iter()
                    .map(|&selected| if selected { "1" } else { "0" })
                    .collect();
                let _ = writeln!(out, "{}", cells.join(","));
            }
        }
        MaskFormat::Json => {
            let rows: Vec<Vec<bool>> = mask.rows().into_iter().map(|row| row.to_vec()).collect();
            out = serde_json::to_string(&rows)?;
            out.push('\n');
        }
    }
    Ok(out)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Resolve {
            center,
            radius,
            inner,
            outer,
            left,
            right,
            conventions,
        } => {
            let config = conventions.load()?;
            let initial = HandleSet::initial(radius);
            let handles = HandleSet::new(
                inner.unwrap_or(initial.inner),
                outer.unwrap_or(initial.outer),
                left.unwrap_or(initial.azimuth_left),
                right.unwrap_or(initial.azimuth_right),
            );
            debug!("handles: {:?}", handles);

            let geometry = resolve_geometry(&handles, &config);
            if geometry.is_degenerate() {
                info!("geometry is degenerate and selects no pixels");
            }
            let report = resolve_report(center, &geometry);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Mask {
            width,
            height,
            center,
            inner_radius,
            outer_radius,
            start,
            arc,
            format,
            output,
            conventions,
        } => {
            let config = conventions.load()?;
            let geometry = AnnularSectorGeometry::new(inner_radius, outer_radius, start, arc);
            let mask = rasterize(MaskShape::new(width, height), center, &geometry, &config)?;
            info!(
                "{} of {} pixels selected",
                count_selected(mask.view()),
                mask.len()
            );

            let rendered = render_mask(mask.view(), format)?;
            match output {
                Some(path) => {
                    fs::write(&path, rendered)?;
                    info!("mask written to {}", path.display());
                }
                None => print!("{rendered}"),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use ndarray::array;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("1.5,-2").unwrap(), Point::new(1.5, -2.0));
        assert_eq!(parse_point(" 3 , 4 ").unwrap(), Point::new(3.0, 4.0));
        assert!(parse_point("3").is_err());
        assert!(parse_point("a,1").is_err());
    }

    #[test]
    fn test_render_mask_formats() {
        let mask = array![[true, false, false], [false, true, true]];
        assert_eq!(
            render_mask(mask.view(), MaskFormat::Text).unwrap(),
            "#..\n.##\n"
        );
        assert_eq!(
            render_mask(mask.view(), MaskFormat::Csv).unwrap(),
            "1,0,0\n0,1,1\n"
        );
        assert_eq!(
            render_mask(mask.view(), MaskFormat::Json).unwrap(),
            "[[true,false,false],[false,true,true]]\n"
        );
    }

    #[test]
    fn test_parse_mask_command() {
        let cli = Cli::try_parse_from([
            "arcroi", "mask", "--width", "10", "--height", "8", "--center", "5,4",
            "--outer-radius", "3", "--start", "-45", "--arc", "90", "--parity",
        ])
        .unwrap();
        let Commands::Mask {
            width,
            height,
            center,
            start,
            conventions,
            ..
        } = cli.command
        else {
            panic!("expected mask command");
        };
        assert_eq!((width, height), (10, 8));
        assert_eq!(center, Point::new(5.0, 4.0));
        assert_eq!(start, -45.0);
        assert_eq!(conventions.load().unwrap(), RoiConfig::parity());
    }

    #[test]
    fn test_parse_resolve_command_with_center() {
        let cli = Cli::try_parse_from([
            "arcroi", "resolve", "--center", "-12.5,40", "--radius", "8", "--outer", "0,6",
        ])
        .unwrap();
        let Commands::Resolve {
            center,
            radius,
            outer,
            inner,
            ..
        } = cli.command
        else {
            panic!("expected resolve command");
        };
        assert_eq!(center, Point::new(-12.5, 40.0));
        assert_eq!(radius, 8.0);
        assert_eq!(outer, Some(Point::new(0.0, 6.0)));
        assert_eq!(inner, None);
    }

    #[test]
    fn test_resolve_center_defaults_to_origin() {
        let cli = Cli::try_parse_from(["arcroi", "resolve"]).unwrap();
        let Commands::Resolve { center, .. } = cli.command else {
            panic!("expected resolve command");
        };
        assert_eq!(center, Point::origin());
    }

    #[test]
    fn test_resolve_report_echoes_center() {
        let geometry = AnnularSectorGeometry::new(2.0, 4.0, 30.0, 120.0);
        let report = resolve_report(Point::new(-3.0, 7.5), &geometry);
        assert_eq!(report["center"]["x"], -3.0);
        assert_eq!(report["center"]["y"], 7.5);
        assert_eq!(report["geometry"]["outer_radius"], 4.0);
        assert_eq!(report["geometry"]["arc_length"], 120.0);
    }

    #[test]
    fn test_config_file_is_loaded() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "angles": "parity" }}"#).unwrap();
        let args = ConventionArgs {
            config: Some(file.path().to_path_buf()),
            parity: false,
        };
        let config = args.load().unwrap();
        assert_eq!(config.angles, arcroi_algorithms::AngleConvention::Parity);
        assert_eq!(
            config.inner_radius,
            arcroi_algorithms::InnerRadiusScale::Ratio
        );
    }
}
