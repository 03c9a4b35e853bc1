/// Source of the command stream fed through the engine.
#[derive(Debug, Clone)]
pub enum OrchestratorMode {
    Csv { file_path: String },
}
