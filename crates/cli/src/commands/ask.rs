//! Ask command handler.
//!
//! Runs one question through the research pipeline and prints the
//! answer to stdout (logs go to stderr).

use clap::Args;
use scout_core::{AppConfig, AppResult};

use super::build_pipeline;

/// Research a single question and print the answer
#[derive(Args, Debug)]
pub struct AskCommand {
    /// The question to research
    pub question: String,

    /// Output the full response as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskCommand {
    /// Execute the ask command.
    pub async fn execute(&self, config: &AppConfig) -> AppResult<()> {
        let pipeline = build_pipeline(config)?;

        let response = pipeline.run(&self.question).await;

        if self.json {
            let json = serde_json::to_string_pretty(&response)?;
            println!("{}", json);
        } else {
            println!("{}", response.answer);

            if !response.citations.is_empty() {
                println!();
                println!("Sources:");
                for url in &response.citations {
                    println!("  {}", url);
                }
            }
        }

        Ok(())
    }
}
