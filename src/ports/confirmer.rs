use crate::domain::AppError;

/// Port for asking the user a yes/no question before a destructive action.
pub trait Confirmer {
    fn confirm(&self, message: &str) -> Result<bool, AppError>;
}

/// Confirmer that answers every question with a fixed reply.
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirmer(pub bool);

impl Confirmer for FixedConfirmer {
    fn confirm(&self, _message: &str) -> Result<bool, AppError> {
        Ok(self.0)
    }
}
