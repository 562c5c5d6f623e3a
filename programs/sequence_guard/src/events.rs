use anchor_lang::prelude::*;

/// Event emitted when a sequence tracker is created for a remote chain
#[event]
pub struct TrackerInitialized {
    pub emitter_chain_id: u16,
    pub tracker: Pubkey,
    pub owner: Pubkey,
}

/// Event emitted when a sequence number is consumed
#[event]
pub struct SequenceConsumed {
    pub emitter_chain_id: u16,
    pub sequence: u64,
    /// Lower bound of the tracked range after any window slides
    pub next: u64,
}
