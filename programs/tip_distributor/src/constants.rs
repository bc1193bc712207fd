use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines the constant values used throughout the tip distributor
 * program. These constants control PDA derivation for the protocol's accounts.
 */

#[constant]
/// ===== PDA SEED CONSTANTS =====

/// Seed for the distribution config PDA derivation
/// - Used in: ["DISTRIBUTION_CONFIG_ACCOUNT"]
/// - The config is a singleton: one account per program deployment
/// - Any client can recompute the address without a lookup service
pub const CONFIG_SEED: &str = "DISTRIBUTION_CONFIG_ACCOUNT";

/// Seed for claim status PDA derivation
/// - Used in: ["CLAIM_STATUS", config_key, claimant_key]
/// - Creates a unique claim marker for each claimant
/// - Account existence is the "already claimed" signal that prevents
///   double-claiming
pub const CLAIM_SEED: &str = "CLAIM_STATUS";
