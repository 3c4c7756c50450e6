//! ndagen CLI - NDA document generation tool

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use ndagen::{Error, LibreOfficeConverter, NdaFields, NdaPipeline, PdfConverter};

#[derive(Parser)]
#[command(name = "ndagen")]
#[command(version)]
#[command(about = "Generate NDA documents from a Word template", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the NDA document and its PDF
    #[command(alias = "gen")]
    Generate {
        /// Client name
        #[arg(long)]
        client: String,

        /// Company name
        #[arg(long)]
        company: String,

        /// Client address
        #[arg(long)]
        address: String,

        /// Client designation
        #[arg(long)]
        designation: String,

        /// Agreement date as YYYY-MM-DD (today if omitted)
        #[arg(long, value_name = "DATE")]
        date: Option<String>,

        /// Template document
        #[arg(
            short,
            long,
            value_name = "FILE",
            env = "NDAGEN_TEMPLATE",
            default_value = "Non Disclosure Agreement.docx"
        )]
        template: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,

        /// Skip PDF conversion
        #[arg(long)]
        docx_only: bool,

        /// LibreOffice binary to use for conversion
        #[arg(long, value_name = "PATH")]
        soffice: Option<PathBuf>,

        /// Print artifact paths as JSON
        #[arg(long)]
        json: bool,
    },

    /// Convert an existing Word document to PDF
    Convert {
        /// Input Word document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output PDF (input path with .pdf extension if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// LibreOffice binary to use for conversion
        #[arg(long, value_name = "PATH")]
        soffice: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            client,
            company,
            address,
            designation,
            date,
            template,
            out_dir,
            docx_only,
            soffice,
            json,
        }) => cmd_generate(
            client,
            company,
            address,
            designation,
            date.as_deref(),
            &template,
            &out_dir,
            docx_only,
            soffice,
            json,
        ),
        Some(Commands::Convert {
            input,
            output,
            soffice,
        }) => cmd_convert(&input, output.as_deref(), soffice),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!(
                "{}",
                "Usage: ndagen generate --client <NAME> --company <NAME> \
                 --address <ADDR> --designation <TITLE>"
                    .yellow()
            );
            println!("       ndagen --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    client: String,
    company: String,
    address: String,
    designation: String,
    date: Option<&str>,
    template: &Path,
    out_dir: &Path,
    docx_only: bool,
    soffice: Option<PathBuf>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let date = match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| format!("invalid --date {:?}: {}", s, e))?,
        None => Local::now().date_naive(),
    };
    let fields = NdaFields::new(client, company, address, designation, date);

    fs::create_dir_all(out_dir)?;

    let mut pipeline = NdaPipeline::new(template, out_dir);
    if let Some(binary) = soffice {
        pipeline = pipeline.with_converter(Box::new(LibreOfficeConverter::with_binary(binary)));
    }

    if docx_only {
        let document = pipeline.generate_document(&fields)?;
        println!("{} {}", "Generated".green().bold(), document.display());
        return Ok(());
    }

    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Filling template...");
    let document = pipeline.generate_document(&fields)?;
    pb.inc(1);

    pb.set_message("Converting to PDF...");
    let artifacts = match pipeline.convert_document(&fields) {
        Ok(pdf) => ndagen::Artifacts { document, pdf },
        Err(e @ Error::Conversion(_)) => {
            pb.finish_and_clear();
            // The Word artifact survives a conversion failure.
            eprintln!(
                "{} {}",
                "Word document kept at".yellow(),
                document.display()
            );
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    pb.inc(1);
    pb.finish_with_message("Done!");

    if json {
        println!("{}", serde_json::to_string_pretty(&artifacts)?);
    } else {
        println!("\n{}", "Output files:".green().bold());
        println!("  {} {}", "├─".dimmed(), artifacts.document.display());
        println!("  {} {}", "└─".dimmed(), artifacts.pdf.display());
    }

    Ok(())
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    soffice: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| input.with_extension("pdf"));

    let converter: Box<dyn PdfConverter> = match soffice {
        Some(binary) => Box::new(LibreOfficeConverter::with_binary(binary)),
        None => ndagen::for_host_platform(),
    };

    let pdf = converter.convert(input, &output)?;
    println!("{} {}", "Saved to".green(), pdf.display());

    Ok(())
}

fn cmd_version() {
    println!("ndagen {}", env!("CARGO_PKG_VERSION"));
}
