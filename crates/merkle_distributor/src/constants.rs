/**
 * Distributor Constants
 *
 * Fixed sizes of the on-chain leaf encoding and defaults for publishing.
 * The encoding sizes mirror what `abi.encodePacked` produces on the verifier side.
 */

/// ===== ENCODING CONSTANTS =====

/// Size of a keccak256 digest
pub const HASH_LENGTH: usize = 32;

/// Size of an account or token address
/// - Addresses are packed without padding when they appear as scalars
pub const ADDRESS_LENGTH: usize = 20;

/// Size of one ABI word
/// - `uint256` scalars are always a full word
/// - Every array element (address or uint256) is padded to a full word in packed mode
pub const WORD_LENGTH: usize = 32;

/// ===== PUBLISHING CONSTANTS =====

/// Default directory distribution documents are written into
pub const DEFAULT_OUTPUT_DIR: &str = "rewards";

/// Default file name prefix: `<prefix>-<cycle>-<content hash>.json`
pub const DEFAULT_FILE_PREFIX: &str = "rewards";

/// Number of content hash bytes embedded in the file name (8 hex characters)
pub const CONTENT_HASH_PREFIX_BYTES: usize = 4;
