use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

pub struct CheckEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CheckEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Reading registry and scanning directories");
        let data = self.pipeline.extract()?;
        tracing::info!(
            "Extracted {} identifiers, {} recipe files, {} loot files",
            data.identifiers.len(),
            data.recipe_stems.len(),
            data.loot_stems.len()
        );

        tracing::info!("Matching files against identifiers");
        let result = self.pipeline.transform(data)?;

        tracing::info!("Writing Markdown report");
        let report_path = self.pipeline.load(result)?;

        Ok(report_path)
    }
}
