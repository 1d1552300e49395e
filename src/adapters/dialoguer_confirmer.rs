use dialoguer::Confirm;

use crate::domain::AppError;
use crate::ports::Confirmer;

/// Terminal yes/no confirmation. Defaults to "no".
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerConfirmer;

impl Confirmer for DialoguerConfirmer {
    fn confirm(&self, message: &str) -> Result<bool, AppError> {
        let answer = Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact_opt()
            .map_err(|err| AppError::InteractionError(format!("Failed to read answer: {}", err)))?;
        Ok(answer.unwrap_or(false))
    }
}
