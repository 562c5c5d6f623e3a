use anchor_lang::prelude::*;

use crate::constants::{MAX_SEQUENCE_GAP, WINDOW_SIZE};
use crate::errors::GuardError;

/// Sequence tracker PDA, one per remote emitter chain.
///
/// Replay protection with fixed-size state: two sliding windows of
/// consumption bits cover the range [next, next + 2 * WINDOW_SIZE). When a
/// sequence lands beyond the second window, the windows slide forward in
/// WINDOW_SIZE steps, discarding the oldest window. Discarded sequence
/// numbers can never be admitted again.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct SequenceTracker {
    /// Sole identity allowed to consume sequence numbers
    pub owner: Pubkey,

    /// Remote chain this tracker serves
    pub emitter_chain_id: u16,

    /// Lower bound of the tracked range; advances only in multiples
    /// of WINDOW_SIZE
    pub next: u64,

    /// Consumption bits for [next, next + WINDOW_SIZE)
    pub window1: [bool; WINDOW_SIZE],

    /// Consumption bits for [next + WINDOW_SIZE, next + 2 * WINDOW_SIZE)
    pub window2: [bool; WINDOW_SIZE],

    /// PDA bump seed
    pub bump: u8,
}

impl SequenceTracker {
    pub const SIZE: usize = 32  // owner
        + 2                     // emitter_chain_id
        + 8                     // next
        + WINDOW_SIZE           // window1
        + WINDOW_SIZE           // window2
        + 1;                    // bump

    /// Consume `sequence` exactly once on behalf of `caller`.
    ///
    /// Fails with `Unauthorized` for any caller other than the owner,
    /// `SequenceTooOld` below the tracked range, `SequenceGapTooLarge` beyond
    /// MAX_SEQUENCE_GAP ahead of it, and `SequenceAlreadyExecuted` on replay.
    /// Every failure leaves the tracker unchanged; success flips exactly one
    /// bit and advances `next` by however many slides the sequence required.
    pub fn check(&mut self, caller: Pubkey, sequence: u64) -> Result<()> {
        require_keys_eq!(caller, self.owner, GuardError::Unauthorized);

        require!(sequence >= self.next, GuardError::SequenceTooOld);
        require!(
            sequence - self.next <= MAX_SEQUENCE_GAP,
            GuardError::SequenceGapTooLarge
        );

        let window = WINDOW_SIZE as u64;
        let mut offset = sequence - self.next;

        // Slide until the sequence is representable. The first window is
        // dropped wholesale; its unconsumed numbers become un-replayable
        // through the too-old check above.
        while offset >= 2 * window {
            self.next += window;
            self.window1 = self.window2;
            self.window2 = [false; WINDOW_SIZE];
            offset -= window;
        }

        // After any slide the target bit sits in the freshly cleared second
        // window, so a replay failure here implies no slide happened and the
        // tracker is still untouched.
        let slot = if offset < window {
            &mut self.window1[offset as usize]
        } else {
            &mut self.window2[(offset - window) as usize]
        };
        require!(!*slot, GuardError::SequenceAlreadyExecuted);
        *slot = true;

        Ok(())
    }
}
