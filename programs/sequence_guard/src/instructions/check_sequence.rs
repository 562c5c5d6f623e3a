use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::SequenceConsumed;
use crate::state::SequenceTracker;

pub fn handler(ctx: Context<CheckSequence>, sequence: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let tracker = &mut ctx.accounts.tracker;

    // The tracker enforces ownership, range, and replay rules itself; any
    // failure reverts the transaction with the account untouched
    tracker.check(caller, sequence)?;

    emit!(SequenceConsumed {
        emitter_chain_id: tracker.emitter_chain_id,
        sequence,
        next: tracker.next,
    });

    msg!(
        "Sequence {} consumed for emitter_chain_id={} (next={})",
        sequence,
        tracker.emitter_chain_id,
        tracker.next
    );

    Ok(())
}

#[derive(Accounts)]
pub struct CheckSequence<'info> {
    #[account(
        mut,
        seeds = [TRACKER_SEED, tracker.emitter_chain_id.to_le_bytes().as_ref()],
        bump = tracker.bump
    )]
    pub tracker: Account<'info, SequenceTracker>,

    /// Must match the tracker's owner; verified inside the state transition
    pub caller: Signer<'info>,
}
