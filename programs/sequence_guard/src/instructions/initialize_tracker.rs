use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::GuardError;
use crate::events::TrackerInitialized;
use crate::state::SequenceTracker;

pub fn handler(ctx: Context<InitializeTracker>, emitter_chain_id: u16) -> Result<()> {
    // Chain ID 0 is reserved as an uninitialized marker
    require!(emitter_chain_id > 0, GuardError::InvalidChainId);

    let tracker_key = ctx.accounts.tracker.key();
    let tracker = &mut ctx.accounts.tracker;

    tracker.owner = ctx.accounts.owner.key();
    tracker.emitter_chain_id = emitter_chain_id;
    tracker.next = 0;
    tracker.window1 = [false; WINDOW_SIZE];
    tracker.window2 = [false; WINDOW_SIZE];
    tracker.bump = ctx.bumps.tracker;

    emit!(TrackerInitialized {
        emitter_chain_id,
        tracker: tracker_key,
        owner: tracker.owner,
    });

    msg!(
        "Sequence tracker initialized for emitter_chain_id={}, owner={}",
        emitter_chain_id,
        tracker.owner
    );

    Ok(())
}

#[derive(Accounts)]
#[instruction(emitter_chain_id: u16)]
pub struct InitializeTracker<'info> {
    // Using init (NOT init_if_needed) so an existing tracker can never be
    // overwritten and reset its consumption history
    #[account(
        init,
        payer = owner,
        space = 8 + SequenceTracker::SIZE,
        seeds = [TRACKER_SEED, emitter_chain_id.to_le_bytes().as_ref()],
        bump
    )]
    pub tracker: Account<'info, SequenceTracker>,

    /// The bridge-channel entity that will own this tracker
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
