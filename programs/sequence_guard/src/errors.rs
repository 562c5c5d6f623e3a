use anchor_lang::prelude::*;

#[error_code]
pub enum GuardError {
    #[msg("Caller is not the tracker owner")]
    Unauthorized,

    #[msg("Sequence number below the tracked range")]
    SequenceTooOld,

    #[msg("Sequence number already executed")]
    SequenceAlreadyExecuted,

    #[msg("Sequence number too far ahead of the tracked range")]
    SequenceGapTooLarge,

    #[msg("Invalid emitter chain ID")]
    InvalidChainId,
}
