//! Short code generation.

use crate::error::AppError;
use base64::Engine as _;

/// Number of random bytes drawn per code.
pub const CODE_LENGTH_BYTES: usize = 12;

/// Length of a generated code: 12 bytes in unpadded base64.
pub const CODE_LENGTH: usize = CODE_LENGTH_BYTES / 3 * 4;

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 16-character code.
///
/// Uniqueness is probabilistic; a collision surfaces later as
/// [`AppError::UniqueViolation`] from the repository.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random source fails.
pub fn generate_code() -> Result<String, AppError> {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::internal(format!("random source failed: {e}")))?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}
