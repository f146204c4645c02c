use crate::models::template::Template;
use crate::services::locator::TemplateLocator;
use crate::utils::error::Result;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List all available templates
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Additional template directory to search
    #[arg(short = 't', long)]
    pub template_dir: Option<PathBuf>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for the list command
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub templates: Vec<Template>,
    pub search_paths: Vec<String>,
}

impl ListCommand {
    /// Execute the list command
    pub async fn run(&self) -> Result<()> {
        let extra = self.template_dir.clone().into_iter().collect::<Vec<_>>();
        let locator = TemplateLocator::with_extra_dirs(&extra);
        let templates = locator.list_templates()?;

        if self.json {
            let response = ListResponse {
                templates,
                search_paths: locator
                    .search_dirs()
                    .iter()
                    .map(|dir| dir.display().to_string())
                    .collect(),
            };

            let json_output = serde_json::to_string_pretty(&response)?;
            println!("{}", json_output);
            return Ok(());
        }

        if templates.is_empty() {
            println!("No templates found.");
        } else {
            println!("\nAvailable templates:");
            for template in &templates {
                println!("\n- {} (from {})", template.name, template.source);
                if let Some(description) = &template.description {
                    println!("  {}", description);
                }
            }
        }

        println!("\nTemplate search paths:");
        for dir in locator.search_dirs() {
            println!("- {}", dir.display());
        }

        Ok(())
    }
}
