/// Construction-time misconfiguration of the [`Brain`](crate::Brain)
#[derive(Debug, thiserror::Error)]
pub enum BrainError {
    #[error("handler '{0}' is already registered with the brain")]
    Duplicate(String),
}
