//! One-shot CLI: read a form submission as JSON, print the share-ready recipe.
//! Run with: cargo run --bin recetas -- submission.json
//! Reads stdin when no file is given.

use std::io::Read;

use anyhow::Context;

use recetas_8020::recipe::{FormSubmission, RecipeConfig, RecipeService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("could not read submission file {path}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("could not read stdin")?;
            buffer
        }
    };

    let submission: FormSubmission =
        serde_json::from_str(&raw).context("submission is not valid JSON")?;
    submission.validate()?;

    let service = RecipeService::new(RecipeConfig::from_env())?;
    let record = service.generate(&submission).await?;

    println!("{}", record.share_text());
    Ok(())
}
