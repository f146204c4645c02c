// CLI module for command-line interface

pub mod create;
pub mod list;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::error::Result;

use self::create::CreateCommand;
use self::list::ListCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "tmpl")]
#[command(about = "Create new projects from reusable template directories")]
#[command(long_about = r#"tmpl scaffolds new projects from template directories.

Templates are plain directories discovered across several search paths:
  • templates/ bundled next to the tmpl executable
  • ~/.tmpl/templates
  • templates/ under the current directory
  • any directories listed in the TMPL_TEMPLATE_DIR environment variable

Creating a project copies the template tree (honoring its .gitignore plus a
built-in skip list) and rewrites the template's project name in package.json,
README.md, and optionally every other text file.

Examples:
  tmpl list                                 Show discovered templates
  tmpl create                               Pick a template interactively
  tmpl create --template basic-cli --name my-app
                                            Scripted, non-interactive create"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// List all available templates
    #[command(long_about = r#"List every template discovered under the search paths.

Templates are grouped by the directory they were found in, with descriptions
read from each template's package.json when present. The search paths are
printed afterwards so it is clear where to add new templates.

Examples:
  tmpl list                                 Human-readable listing
  tmpl list --json                          Machine-readable listing
  tmpl list --template-dir ./my-templates   Include an extra directory"#)]
    List {
        /// Additional template directory to search
        #[arg(short = 't', long)]
        template_dir: Option<PathBuf>,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Create a new project from a template
    #[command(long_about = r#"Create a new project from a template.

With --template and --name the command runs non-interactively; otherwise it
prompts for the template, project name, target path, and whether to replace
the project name across the whole tree. The project is created under
<target>/<name>.

Project names may contain lowercase letters, numbers, hyphens, and
underscores.

Examples:
  tmpl create                               Interactive prompts
  tmpl create --template basic-cli --name my-app
  tmpl create --template basic-cli --name my-app --target ~/work --replace-all
  tmpl create --template-dir ./my-templates"#)]
    Create {
        /// Additional template directory to search
        #[arg(short = 't', long)]
        template_dir: Option<PathBuf>,

        /// Template name (skips the selection prompt)
        #[arg(long)]
        template: Option<String>,

        /// New project name (skips the name prompt)
        #[arg(long)]
        name: Option<String>,

        /// Directory to create the project in (default: current directory)
        #[arg(long)]
        target: Option<PathBuf>,

        /// Replace all occurrences of the project name across the tree
        #[arg(long)]
        replace_all: bool,

        /// Do not honor the template's .gitignore when copying
        #[arg(long)]
        no_gitignore: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::List { template_dir, json } => {
                let cmd = ListCommand { template_dir, json };
                cmd.run().await
            }

            Commands::Create {
                template_dir,
                template,
                name,
                target,
                replace_all,
                no_gitignore,
            } => {
                let cmd = CreateCommand {
                    template_dir,
                    template,
                    name,
                    target,
                    replace_all,
                    no_gitignore,
                };
                cmd.run().await
            }
        }
    }
}
