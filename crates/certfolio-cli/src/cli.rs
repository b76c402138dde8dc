use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "certfolio")]
#[command(about = "Browse portfolio certifications from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Supabase project URL (overrides SUPABASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub supabase_url: Option<String>,

    /// Supabase anon/public key (overrides SUPABASE_ANON_KEY)
    #[arg(long, global = true, value_name = "KEY")]
    pub supabase_anon_key: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List active certifications in display order
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract or print a certification's document
    Document {
        /// Certification ID or unique ID prefix
        id: String,
        /// Where to write inline PDFs (defaults to a file named after the certificate)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
