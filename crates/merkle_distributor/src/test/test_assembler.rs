use alloy_primitives::{b256, Address, U256};

use crate::assembler::build_distribution;
use crate::error::DistributorError;
use crate::ledger::MerkleInput;
use crate::merkle::MerkleTree;
use crate::state::ClaimRecord;
use crate::test::{address, get_two_user_input};
use crate::utils::{verify, Keccak256Hasher, MerkleHasher};

const HASHER: Keccak256Hasher = Keccak256Hasher;

fn record(index: u64, user: Address, cycle: u64) -> ClaimRecord {
    ClaimRecord::new(index, user, cycle, vec![address(0xaa)], vec![U256::from(index + 1)]).unwrap()
}

fn input_from(nodes: Vec<ClaimRecord>) -> MerkleInput {
    let encoded_nodes = nodes.iter().map(ClaimRecord::encode_packed).collect();
    MerkleInput {
        nodes,
        encoded_nodes,
        totals: Default::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_user_distribution() {
        let input = get_two_user_input();
        let distribution = build_distribution(&HASHER, &input).unwrap();

        assert_eq!(distribution.cycle, 5);
        assert_eq!(distribution.claims.len(), 2);
        assert_eq!(
            distribution.merkle_root,
            b256!("92f6357f4fb51b29e238f64ffed899d565805277def2e2caaa052e4a73d483a0")
        );

        for node in &input.nodes {
            let entry = distribution.claim(&node.user()).unwrap();
            assert_eq!(entry.index, node.index());
            assert_eq!(entry.cycle, 5);
            assert_eq!(entry.proof.len(), 1);

            let leaf = node.leaf(&HASHER);
            assert!(verify(&HASHER, &entry.proof, distribution.merkle_root, leaf));
            assert!(distribution.verify_claim(&HASHER, &node.user()).unwrap());
        }

        // Each user's proof is the other user's leaf
        let leaves: Vec<_> = input.nodes.iter().map(|n| n.leaf(&HASHER)).collect();
        assert_eq!(distribution.claim(&address(0x11)).unwrap().proof, vec![leaves[1]]);
        assert_eq!(distribution.claim(&address(0x22)).unwrap().proof, vec![leaves[0]]);

        assert_eq!(distribution.token_totals, input.totals);
        distribution.verify_all(&HASHER).unwrap();
    }

    #[test]
    fn test_proofs_match_tree() {
        let nodes: Vec<_> = (0..7).map(|i| record(i, address(0x10 + i as u8), 3)).collect();
        let input = input_from(nodes);
        let distribution = build_distribution(&HASHER, &input).unwrap();

        let tree = MerkleTree::build(
            &HASHER,
            input.encoded_nodes.iter().map(|encoded| HASHER.hash(encoded)),
        )
        .unwrap();
        assert_eq!(distribution.merkle_root, tree.root());

        for node in &input.nodes {
            let expected = tree.proof_for(&node.leaf(&HASHER)).unwrap();
            assert_eq!(distribution.claim(&node.user()).unwrap().proof, expected);
        }
        distribution.verify_all(&HASHER).unwrap();
    }

    #[test]
    fn test_root_ignores_record_order() {
        let nodes: Vec<_> = (0..5).map(|i| record(i, address(0x30 + i as u8), 9)).collect();
        let mut reversed = nodes.clone();
        reversed.reverse();

        let forward = build_distribution(&HASHER, &input_from(nodes)).unwrap();
        let backward = build_distribution(&HASHER, &input_from(reversed)).unwrap();

        assert_eq!(forward.merkle_root, backward.merkle_root);
        assert_eq!(forward.claims, backward.claims);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let result = build_distribution(&HASHER, &MerkleInput::default());
        assert!(matches!(result, Err(DistributorError::EmptyLedger)));
    }

    #[test]
    fn test_duplicate_index_is_rejected() {
        let input = input_from(vec![record(0, address(0x11), 1), record(0, address(0x22), 1)]);
        let result = build_distribution(&HASHER, &input);
        assert!(matches!(result, Err(DistributorError::DuplicateIndex(0))));
    }

    #[test]
    fn test_duplicate_user_is_rejected() {
        let input = input_from(vec![record(0, address(0x11), 1), record(1, address(0x11), 1)]);
        match build_distribution(&HASHER, &input) {
            Err(DistributorError::DuplicateUser(user)) => assert_eq!(user, address(0x11)),
            other => panic!("expected DuplicateUser, got {other:?}"),
        }
    }

    #[test]
    fn test_sparse_index_is_rejected() {
        let input = input_from(vec![record(0, address(0x11), 1), record(2, address(0x22), 1)]);
        let result = build_distribution(&HASHER, &input);
        assert!(matches!(
            result,
            Err(DistributorError::IndexOutOfRange { index: 2, count: 2 })
        ));
    }

    #[test]
    fn test_mixed_cycles_are_rejected() {
        let input = input_from(vec![record(0, address(0x11), 1), record(1, address(0x22), 2)]);
        let result = build_distribution(&HASHER, &input);
        assert!(matches!(
            result,
            Err(DistributorError::CycleMismatch { expected: 1, found: 2 })
        ));
    }

    #[test]
    fn test_missing_encodings_are_rejected() {
        let mut input = input_from(vec![record(0, address(0x11), 1), record(1, address(0x22), 1)]);
        input.encoded_nodes.pop();
        let result = build_distribution(&HASHER, &input);
        assert!(matches!(
            result,
            Err(DistributorError::EncodingCountMismatch { nodes: 2, encoded: 1 })
        ));
    }

    #[test]
    fn test_verify_claim_for_unknown_user() {
        let distribution = build_distribution(&HASHER, &get_two_user_input()).unwrap();
        let result = distribution.verify_claim(&HASHER, &address(0x99));
        assert!(matches!(result, Err(DistributorError::UnknownClaimant(_))));
    }

    #[test]
    fn test_tampered_amount_fails_verification() {
        let mut distribution = build_distribution(&HASHER, &get_two_user_input()).unwrap();
        let user = address(0x11);
        distribution.claims.get_mut(&user).unwrap().cumulative_amounts[0] = U256::from(1001u64);

        assert!(!distribution.verify_claim(&HASHER, &user).unwrap());
        assert!(matches!(
            distribution.verify_all(&HASHER),
            Err(DistributorError::InvalidProof(u)) if u == user
        ));
    }
}
