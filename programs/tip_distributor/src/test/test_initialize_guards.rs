use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use crate::error::TipDistributorError;
use crate::state::DistributionConfig;

const CANONICAL_BUMP: u8 = 254;

/// Mirrors handle_initialize: validate against the current config value,
/// write fields only when validation passes.
fn try_initialize(
    config: &mut DistributionConfig,
    distribution_authority: Pubkey,
    max_tip_amount: u64,
    bump: u8,
) -> Result<()> {
    config.validate_initialize(&distribution_authority, max_tip_amount, bump, CANONICAL_BUMP)?;
    config.bump = bump;
    config.distribution_authority = distribution_authority;
    config.max_tip_amount = max_tip_amount;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_fails_with(result: Result<()>, expected: TipDistributorError) {
        assert_eq!(result.unwrap_err(), Error::from(expected));
    }

    #[test]
    fn test_second_initialize_rejected() {
        let authority = Pubkey::new_unique();
        let mut config = DistributionConfig::default();

        try_initialize(&mut config, authority, 50_000_000, CANONICAL_BUMP)
            .expect("first initialize should succeed");

        // Any re-run fails, even with different values
        assert_fails_with(
            try_initialize(&mut config, Pubkey::new_unique(), 1, CANONICAL_BUMP),
            TipDistributorError::AlreadyInitialized,
        );

        // The first initialize's values survive the attempt
        assert_eq!(config.distribution_authority, authority);
        assert_eq!(config.max_tip_amount, 50_000_000);
        assert_eq!(config.bump, CANONICAL_BUMP);
    }

    #[test]
    fn test_initialize_rejects_default_authority() {
        let mut config = DistributionConfig::default();
        assert_fails_with(
            try_initialize(&mut config, Pubkey::default(), 1_000, CANONICAL_BUMP),
            TipDistributorError::InvalidAuthority,
        );
        // Nothing was written
        assert!(!config.is_initialized());
    }

    #[test]
    fn test_initialize_rejects_zero_cap() {
        let mut config = DistributionConfig::default();
        assert_fails_with(
            try_initialize(&mut config, Pubkey::new_unique(), 0, CANONICAL_BUMP),
            TipDistributorError::InvalidAmount,
        );
        assert!(!config.is_initialized());
    }

    #[test]
    fn test_initialize_rejects_non_canonical_bump() {
        let mut config = DistributionConfig::default();
        assert_fails_with(
            try_initialize(
                &mut config,
                Pubkey::new_unique(),
                1_000,
                CANONICAL_BUMP - 1,
            ),
            TipDistributorError::DerivationBumpMismatch,
        );
        assert!(!config.is_initialized());

        // The matching bump still goes through afterwards
        try_initialize(&mut config, Pubkey::new_unique(), 1_000, CANONICAL_BUMP)
            .expect("canonical bump should succeed");
        assert!(config.is_initialized());
    }
}
