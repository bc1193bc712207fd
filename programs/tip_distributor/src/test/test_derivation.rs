use anchor_lang::solana_program::pubkey::Pubkey;

use crate::constants::{CLAIM_SEED, CONFIG_SEED};

fn config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED.as_bytes()], &crate::ID)
}

fn claim_status_address(config: &Pubkey, claimant: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[CLAIM_SEED.as_bytes(), config.as_ref(), claimant.as_ref()],
        &crate::ID,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_derivation_is_deterministic() {
        let (address_a, bump_a) = config_address();
        let (address_b, bump_b) = config_address();

        // Same label, same program id: derivation is a pure function
        assert_eq!(address_a, address_b);
        assert_eq!(bump_a, bump_b);
    }

    #[test]
    fn test_config_bump_revalidates_address() {
        let (address, bump) = config_address();

        // The stored bump must reproduce the address exactly; that is what
        // later instructions rely on when revalidating the config PDA
        let recreated =
            Pubkey::create_program_address(&[CONFIG_SEED.as_bytes(), &[bump]], &crate::ID)
                .expect("canonical bump must yield a valid off-curve address");
        assert_eq!(address, recreated);
    }

    #[test]
    fn test_claim_status_addresses_are_per_claimant() {
        let (config, _) = config_address();
        let claimant_x = Pubkey::new_unique();
        let claimant_y = Pubkey::new_unique();

        let (status_x, _) = claim_status_address(&config, &claimant_x);
        let (status_x_again, _) = claim_status_address(&config, &claimant_x);
        let (status_y, _) = claim_status_address(&config, &claimant_y);

        // One address per claimant, stable across derivations
        assert_eq!(status_x, status_x_again);
        assert_ne!(status_x, status_y);

        // Claim markers never collide with the config itself
        assert_ne!(status_x, config);
        assert_ne!(status_y, config);
    }
}
