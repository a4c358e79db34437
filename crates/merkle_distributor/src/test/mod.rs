pub mod test_assembler;

use alloy_primitives::{Address, U256};

use crate::ledger::{MerkleInput, RewardsLedger};

/// 2^128, does not fit in u64 or u128 arithmetic on the JSON side
pub const LARGE_AMOUNT: &str = "340282366920938463463374607431768211456";

pub fn address(byte: u8) -> Address {
    Address::repeat_byte(byte)
}

pub fn large_amount() -> U256 {
    LARGE_AMOUNT.parse().unwrap()
}

/// Two users, cycle 5: 0x11.. holds one token, 0x22.. holds two
pub fn get_two_user_ledger() -> RewardsLedger {
    let mut ledger = RewardsLedger::new(5);
    ledger
        .increase_user_rewards(address(0x11), address(0xaa), U256::from(1000u64))
        .unwrap();
    ledger
        .increase_user_rewards(address(0x22), address(0xaa), U256::from(250u64))
        .unwrap();
    ledger
        .increase_user_rewards(address(0x22), address(0xbb), large_amount())
        .unwrap();
    ledger
}

pub fn get_two_user_input() -> MerkleInput {
    get_two_user_ledger().to_merkle_format().unwrap()
}
