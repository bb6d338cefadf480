#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("render {generation} failed: {message}")]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}
