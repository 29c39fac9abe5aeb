use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use block_level::{
    BlockScene, LevelConfig, LevelSession, SpriteLoader, data_structures::texture::Texture,
    init_logging,
};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "block-level")]
#[command(about = "Inspect, normalize and re-save block level files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct LevelArgs {
    /// Logical level name, the file stem under Data/ (or Save/)
    level: String,

    /// Asset root containing Data/, Save/ and Resources/
    #[arg(long, default_value = "assets")]
    root: PathBuf,

    /// Read the level from Save/ instead of Data/
    #[arg(long)]
    from_save: bool,

    /// Register sprite ids as tags while placing
    #[arg(long)]
    tags: bool,
}

impl LevelArgs {
    fn config(&self) -> LevelConfig {
        LevelConfig::new(&self.root, &self.level)
            .with_save_data(self.from_save)
            .with_tags(self.tags)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create the Data/, Save/ and Resources/ directory layout
    Init {
        #[arg(long, default_value = "assets")]
        root: PathBuf,
    },
    /// Load a level and print its normalized blocks
    Inspect(LevelArgs),
    /// Load a level and save it to Save/ in normalized form
    Resave(LevelArgs),
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { root } => {
            LevelConfig::new(&root, "")
                .bootstrap()
                .with_context(|| {
                    format!("Could not create level directories in {}", root.display())
                })?;
            println!("Initialized level directories in {}", root.display());
        }
        Commands::Inspect(args) => {
            let mut session = open(&args);
            let report = session
                .load()
                .with_context(|| format!("Could not load level {}", args.level))?;
            println!(
                "{}: {} blocks, unit width {}",
                session.level().name,
                report.placed(),
                report
                    .unit_width
                    .map_or_else(|| "-".to_string(), |u| u.to_string())
            );
            for line in session.level().to_lines() {
                println!("  {line}");
            }
            if !report.missing_textures.is_empty() {
                println!("missing textures: {}", report.missing_textures.join(", "));
            }
        }
        Commands::Resave(args) => {
            let mut session = open(&args);
            session
                .load()
                .with_context(|| format!("Could not load level {}", args.level))?;
            let written = session
                .save()
                .with_context(|| format!("Could not save level {}", args.level))?;
            println!(
                "Wrote {} blocks to {}",
                written,
                session.config().save_path().display()
            );
        }
    }

    Ok(())
}

type SpriteSession = LevelSession<BlockScene<Arc<Texture>>, SpriteLoader>;

fn open(args: &LevelArgs) -> SpriteSession {
    let config = args.config();
    let loader = SpriteLoader::new(config.resources_dir());
    LevelSession::new(config, BlockScene::new(), loader)
}
