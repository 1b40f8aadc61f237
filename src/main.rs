use anyhow::Result;
use clap::{Parser, Subcommand};
use image::DynamicImage;
use ios_icon_gen::config::Config;
use ios_icon_gen::manifest::Manifest;
use ios_icon_gen::placeholder::create_placeholder;
use ios_icon_gen::resize::{generate_icons, load_source};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ios-icon-gen")]
#[command(about = "Generate the iOS AppIcon set from a 1024px source icon", long_about = None)]
struct Cli {
    /// YAML settings file overriding paths and placeholder appearance
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory receiving the generated icons
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resize the source icon into every AppIcon slot (default)
    Resize {
        /// Source icon. Defaults to icon_1024x1024.png in the output directory
        #[arg(short, long)]
        source: Option<PathBuf>,
    },
    /// Draw a placeholder source icon, save it, and resize it into every slot
    Placeholder,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    let manifest = Manifest::ios();

    match cli.command.unwrap_or(Commands::Resize { source: None }) {
        Commands::Resize { source } => {
            if source.is_some() {
                config.source = source;
            }
            let img = load_source(&config.source_path())?;
            generate_icons(&img, &manifest, &config.output_dir)?;
        }
        Commands::Placeholder => {
            let spec = config.placeholder_spec()?;
            let img = create_placeholder(&spec, &config.output_dir)?;
            // Resize from the in-memory image rather than re-reading the saved file
            generate_icons(&DynamicImage::ImageRgb8(img), &manifest, &config.output_dir)?;
        }
    }

    Ok(())
}
