//! Tiered cut penalties.
//!
//! Cutting away one beat after a cut is jarring; cutting after a long-held
//! shot is routine. The penalty table encodes that as tiers over the cut
//! age (decision points since the last cut): the first tier whose
//! threshold exceeds the age applies, and ages past every threshold pay
//! the final catch-all penalty.

use podcut_common::error::{PodcutError, PodcutResult};

/// Tiered penalty schedule over cut age.
#[derive(Debug, Clone, PartialEq)]
pub struct CutPenaltyTable {
    /// (age threshold, penalty) tiers in increasing threshold order.
    tiers: Vec<(u32, f64)>,

    /// Penalty once the age is at or past every threshold.
    fallback: f64,
}

impl CutPenaltyTable {
    /// Build a table from age thresholds and per-tier penalties.
    ///
    /// `splits` must be strictly increasing, and `penalties` must hold
    /// exactly one more entry than `splits`; the extra entry is the
    /// catch-all for long-held shots.
    pub fn new(splits: Vec<u32>, penalties: Vec<f64>) -> PodcutResult<Self> {
        if penalties.len() != splits.len() + 1 {
            return Err(PodcutError::config(format!(
                "cut penalty table needs one more penalty than splits (got {} splits, {} penalties)",
                splits.len(),
                penalties.len()
            )));
        }
        if splits.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(PodcutError::config(
                "cut penalty splits must be strictly increasing",
            ));
        }

        let fallback = penalties[splits.len()];
        let tiers = splits.into_iter().zip(penalties).collect();

        Ok(Self { tiers, fallback })
    }

    /// Penalty for cutting away after `cut_age` decision points on the
    /// current camera.
    pub fn penalty_for(&self, cut_age: usize) -> f64 {
        for &(threshold, penalty) in &self.tiers {
            if cut_age < threshold as usize {
                return penalty;
            }
        }
        self.fallback
    }
}

impl Default for CutPenaltyTable {
    /// Cuts within 15 decision points cost 60, within 35 cost 35, and
    /// anything held longer cuts almost freely at 2.
    fn default() -> Self {
        Self {
            tiers: vec![(15, 60.0), (35, 35.0)],
            fallback: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_lookup() {
        let table = CutPenaltyTable::default();
        assert_eq!(table.penalty_for(0), 60.0);
        assert_eq!(table.penalty_for(5), 60.0);
        assert_eq!(table.penalty_for(14), 60.0);
        assert_eq!(table.penalty_for(15), 35.0);
        assert_eq!(table.penalty_for(20), 35.0);
        assert_eq!(table.penalty_for(34), 35.0);
        assert_eq!(table.penalty_for(35), 2.0);
        assert_eq!(table.penalty_for(400), 2.0);
    }

    #[test]
    fn test_single_entry_is_constant() {
        let table = CutPenaltyTable::new(vec![], vec![7.5]).unwrap();
        assert_eq!(table.penalty_for(0), 7.5);
        assert_eq!(table.penalty_for(1000), 7.5);
    }

    #[test]
    fn test_new_matches_default() {
        let table = CutPenaltyTable::new(vec![15, 35], vec![60.0, 35.0, 2.0]).unwrap();
        assert_eq!(table, CutPenaltyTable::default());
    }

    #[test]
    fn test_empty_penalties_rejected() {
        assert!(CutPenaltyTable::new(vec![], vec![]).is_err());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        assert!(CutPenaltyTable::new(vec![15, 35], vec![60.0, 35.0]).is_err());
        assert!(CutPenaltyTable::new(vec![15], vec![60.0, 35.0, 2.0]).is_err());
    }

    #[test]
    fn test_non_increasing_splits_rejected() {
        assert!(CutPenaltyTable::new(vec![35, 15], vec![60.0, 35.0, 2.0]).is_err());
        assert!(CutPenaltyTable::new(vec![15, 15], vec![60.0, 35.0, 2.0]).is_err());
    }
}
