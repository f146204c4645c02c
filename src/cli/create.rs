use crate::models::create_options::CreateOptions;
use crate::models::template::Template;
use crate::services::creator::create_from_template;
use crate::services::locator::TemplateLocator;
use crate::utils::error::{Result, TmplError};
use crate::utils::validation::validate_project_name;
use clap::Args;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::path::{Path, PathBuf};

/// Create a new project from a template
#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Additional template directory to search
    #[arg(short = 't', long)]
    pub template_dir: Option<PathBuf>,

    /// Template name (skips the selection prompt)
    #[arg(long)]
    pub template: Option<String>,

    /// New project name (skips the name prompt)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to create the project in (default: current directory)
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Replace all occurrences of the project name across the tree
    #[arg(long)]
    pub replace_all: bool,

    /// Do not honor the template's .gitignore when copying
    #[arg(long)]
    pub no_gitignore: bool,
}

impl CreateCommand {
    /// Execute the create command
    pub async fn run(&self) -> Result<()> {
        let extra = self.template_dir.clone().into_iter().collect::<Vec<_>>();
        let locator = TemplateLocator::with_extra_dirs(&extra);
        let templates = locator.list_templates()?;

        if templates.is_empty() {
            println!("No templates available. Please add templates to one of these directories:");
            for dir in locator.search_dirs() {
                println!("- {}", dir.display());
            }
            return Ok(());
        }

        match (&self.template, &self.name) {
            (Some(template_name), Some(project_name)) => {
                self.run_non_interactive(&templates, template_name, project_name)
            }
            _ => self.run_interactive(&templates),
        }
    }

    /// Scripted path: any failure propagates and exits non-zero
    fn run_non_interactive(
        &self,
        templates: &[Template],
        template_name: &str,
        project_name: &str,
    ) -> Result<()> {
        let template = templates
            .iter()
            .find(|t| t.name == template_name)
            .ok_or_else(|| {
                TmplError::Config(format!(
                    "Template '{}' not found. Run 'tmpl list' to see available templates.",
                    template_name
                ))
            })?;

        validate_project_name(project_name)?;

        let target_path = self.resolve_target_path(project_name)?;
        let options = self.build_options(&template.path, &target_path, project_name);
        create_from_template(&options)?;

        print_success(project_name, &target_path);
        Ok(())
    }

    /// Interactive path: a creation failure is reported to the console and
    /// does not force a non-zero exit
    fn run_interactive(&self, templates: &[Template]) -> Result<()> {
        let theme = ColorfulTheme::default();

        let labels: Vec<String> = templates.iter().map(Template::display_label).collect();
        let selection = Select::with_theme(&theme)
            .with_prompt("Select a template")
            .items(&labels)
            .default(0)
            .interact()?;
        let template = &templates[selection];

        let project_name: String = Input::with_theme(&theme)
            .with_prompt("Enter the new project name")
            .validate_with(|input: &String| match validate_project_name(input) {
                Ok(()) => Ok(()),
                Err(err) => Err(err.to_string()),
            })
            .interact_text()?;

        let default_target = self
            .target
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));
        let target_input: String = Input::with_theme(&theme)
            .with_prompt("Enter the target path (relative to current directory)")
            .default(default_target.display().to_string())
            .interact_text()?;

        let replace_all = Confirm::with_theme(&theme)
            .with_prompt("Replace all occurrences of the project name in the template?")
            .default(false)
            .interact()?;

        let target_path = resolve_target(Path::new(&target_input), &project_name)?;
        let mut options = self.build_options(&template.path, &target_path, &project_name);
        options.replace_all = replace_all;

        match create_from_template(&options) {
            Ok(()) => {
                print_success(&project_name, &target_path);
            }
            Err(err) => {
                eprintln!(
                    "{} {}",
                    style("❌ Failed to create project:").red().bold(),
                    err
                );
            }
        }

        Ok(())
    }

    fn resolve_target_path(&self, project_name: &str) -> Result<PathBuf> {
        let base = self
            .target
            .clone()
            .map_or_else(std::env::current_dir, Ok)?;
        resolve_target(&base, project_name)
    }

    fn build_options(
        &self,
        template_path: &Path,
        target_path: &Path,
        project_name: &str,
    ) -> CreateOptions {
        CreateOptions::new(template_path, target_path)
            .with_project_name(project_name)
            .with_replace_all(self.replace_all)
            .with_git_ignore(!self.no_gitignore)
    }
}

/// The project lands at `<base>/<project-name>`, with a relative base
/// resolved against the current directory
fn resolve_target(base: &Path, project_name: &str) -> Result<PathBuf> {
    let absolute_base = if base.is_absolute() {
        base.to_path_buf()
    } else {
        std::env::current_dir()?.join(base)
    };
    Ok(absolute_base.join(project_name))
}

fn print_success(project_name: &str, target_path: &Path) {
    println!(
        "{} {}",
        style("✅ Successfully created project:").green().bold(),
        style(project_name).cyan().bold()
    );
    println!("   {}", target_path.display());
}
