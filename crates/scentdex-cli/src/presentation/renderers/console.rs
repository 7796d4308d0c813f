use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, StatusBadge, ViewMode,
};

pub struct ConsoleRenderer {
    json_mode: bool,
    view_mode: ViewMode,
    styled: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, view_mode: ViewMode) -> Self {
        Self {
            json_mode: format == OutputFormat::Json,
            view_mode,
            styled: std::io::stdout().is_terminal(),
        }
    }

    fn badge_line(&self, badge: &StatusBadge) -> String {
        if self.styled {
            format!("{} {}", badge.icon(), badge.label.bold())
        } else {
            format!("{} {}", badge.icon(), badge.label)
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        // Minimal output is for pipes: content only.
        if self.view_mode == ViewMode::Minimal {
            print!("{}", result.content.create_view(self.view_mode));
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{}", self.badge_line(badge));
            println!();
        }

        print!("{}", result.content.create_view(self.view_mode));

        if !result.suggestions.is_empty() {
            if self.styled {
                println!("\n{}", "💡 Tips:".yellow().bold());
            } else {
                println!("\n💡 Tips:");
            }
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.styled {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
