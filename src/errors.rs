use failure::Fail;
pub use failure::Error;

#[derive(Debug, Fail)]
pub enum AlgorandTxnError {
  #[fail(display = "Error: {}", _0)]
  GenericError(String),

  // Address Errors
  #[fail(display = "Invalid checksum address {}", _0)]
  InvalidChecksumAddress(String),
  #[fail(display = "Wrong address length, should be {} length got {}", _0, _1)]
  WrongAddressLength(usize, usize),
  #[fail(display = "Wrong address byte length, should be {} length got {}", _0, _1)]
  WrongAddressByteLength(usize, usize),
  #[fail(display = "Zero address not allowed for optional field [{}], leave it unset instead", _0)]
  ZeroAddress(String),

  // Transaction Validation Errors
  #[fail(display = "Unknown transaction type {}", _0)]
  UnknownTransactionType(String),
  #[fail(display = "Missing required field [{}]", _0)]
  MissingField(String),
  #[fail(display = "Field [{}] must be {} bytes, got {}", _0, _1, _2)]
  WrongFieldLength(String, usize, usize),
  #[fail(display = "Invalid key registration fields: {}", _0)]
  InvalidKeyRegParams(String),
  #[fail(display = "Fee calculation overflowed a u64")]
  FeeOverflow,
  #[fail(display = "Transaction group already set")]
  GroupAlreadySet,
  #[fail(display = "Box reference app id {} not found in foreign apps", _0)]
  ForeignAppNotFound(u64),
  #[fail(display = "Box reference index {} out of range for {} foreign apps", _0, _1)]
  BoxIndexOutOfRange(u64, usize),

  // Signature Errors
  #[fail(display = "Wrong signature length, should be {} got {}", _0, _1)]
  WrongSignatureLength(usize, usize),

  // Multisig Errors
  #[fail(display = "Invalid multisig threshold {} for {} keys", _0, _1)]
  InvalidMultisigThreshold(u8, usize),
  #[fail(display = "Public key of {} is not part of the multisig preimage", _0)]
  KeyNotInMultisig(String),
  #[fail(display = "Blob is not a multisig transaction")]
  MissingMultisig,
  #[fail(display = "Need at least 2 multisig blobs to merge, got {}", _0)]
  MultisigMergeCount(usize),
  #[fail(display = "Cannot merge multisig blobs for different transactions: {} != {}", _0, _1)]
  MultisigMergeTxnIdMismatch(String, String),
  #[fail(display = "Cannot merge multisig blobs with different auth addresses")]
  MultisigMergeAuthAddrMismatch,
  #[fail(display = "Cannot merge multisig blobs with different preimages")]
  MultisigMergePreImageMismatch,
  #[fail(display = "Multisig blobs carry conflicting signatures for slot {}", _0)]
  MultisigSubsigConflict(usize),
}
