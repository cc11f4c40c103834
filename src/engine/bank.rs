//! The escalating point bank carried across tied holes.

/// Bank state machine. Invariant: the pot is at least 1.
///
/// A win pays out the whole pot plus this hole's penalty pool and any birdie
/// transfer, then resets the pot to 1. A tie grows the pot by 1 plus the
/// penalty pool, so deducted points are redistributed rather than destroyed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankLedger {
    pot: i64,
}

impl BankLedger {
    pub fn new() -> Self {
        BankLedger { pot: 1 }
    }

    pub fn pot(&self) -> i64 {
        self.pot
    }

    /// Award the pot on a win; returns the total points the winner receives.
    pub fn settle_win(&mut self, penalty_pool: i64, birdie_bonus: i64) -> i64 {
        let award = self.pot + penalty_pool + birdie_bonus;
        self.pot = 1;
        award
    }

    /// Carry the pot forward on a tie; returns the new pot.
    pub fn carry_tie(&mut self, penalty_pool: i64) -> i64 {
        self.pot += 1 + penalty_pool;
        self.pot
    }
}

impl Default for BankLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_one() {
        assert_eq!(BankLedger::new().pot(), 1);
    }

    #[test]
    fn test_win_awards_pot_and_resets() {
        let mut bank = BankLedger::new();
        bank.carry_tie(0);
        bank.carry_tie(0);
        assert_eq!(bank.pot(), 3);

        let award = bank.settle_win(0, 0);
        assert_eq!(award, 3);
        assert_eq!(bank.pot(), 1);
    }

    #[test]
    fn test_win_includes_penalties_and_birdie_transfer() {
        let mut bank = BankLedger::new();
        let award = bank.settle_win(2, 3);
        assert_eq!(award, 6);
        assert_eq!(bank.pot(), 1);
    }

    #[test]
    fn test_tie_carries_penalty_pool() {
        let mut bank = BankLedger::new();
        assert_eq!(bank.carry_tie(2), 4);
        assert_eq!(bank.carry_tie(0), 5);
    }
}
