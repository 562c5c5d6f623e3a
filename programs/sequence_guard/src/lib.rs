use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

/// VAA Sequence Guard Program
///
/// Exactly-once execution guard for attestation sequence numbers arriving
/// from remote chains, using a fixed-size two-window sliding bitmap per
/// chain instead of unbounded history
#[program]
pub mod sequence_guard {
    use super::*;

    /// Create the sequence tracker for a remote emitter chain
    pub fn initialize_tracker(
        ctx: Context<InitializeTracker>,
        emitter_chain_id: u16,
    ) -> Result<()> {
        instructions::initialize_tracker::handler(ctx, emitter_chain_id)
    }

    /// Consume one attestation sequence number, rejecting replays
    pub fn check_sequence(ctx: Context<CheckSequence>, sequence: u64) -> Result<()> {
        instructions::check_sequence::handler(ctx, sequence)
    }
}
