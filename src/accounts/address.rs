use sha2::{Digest, Sha512Trunc256};
use crate::helpers::ToArray;
use crate::encoding::{base32_decode, base32_encode};
use crate::errors::{AlgorandTxnError, Error};

pub const CHECKSUM_BYTES_LENGTH: usize = 4;
pub const ADDRESS_BYTES_LENGTH: usize = 32;

// domain separation prefix for hashing a multisig preimage into an address
const MULTISIG_ADDR_PREFIX: &[u8] = b"MultisigAddr";

pub type AddressBytes = [u8; ADDRESS_BYTES_LENGTH];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Address(AddressBytes);

impl Address {
  /// Creates an Address from the checksum address string
  ///
  /// # Examples
  ///
  /// ```
  /// use rust_algorand_txn::accounts::Address;
  ///
  /// let address = Address::from_string("47YPQTIGQEO7T4Y4RWDYWEKV6RTR2UNBQXBABEEGM72ESWDQNCQ52OPASU").unwrap();
  /// ```
  pub fn from_string(address_str: &str) -> Result<Address, Error> {
    let optional_address_with_checksum = base32_decode(address_str);
    if let None = optional_address_with_checksum {
      return Err(AlgorandTxnError::InvalidChecksumAddress(String::from(address_str)))?;
    }

    let address_with_checksum = optional_address_with_checksum.unwrap();
    let address_length = address_with_checksum.len();
    let expected_address_length = CHECKSUM_BYTES_LENGTH + ADDRESS_BYTES_LENGTH;
    if address_length != expected_address_length {
      return Err(AlgorandTxnError::WrongAddressLength(expected_address_length, address_length))?;
    }

    let address_bytes = &address_with_checksum[..ADDRESS_BYTES_LENGTH];
    let checksum_bytes = &address_with_checksum[ADDRESS_BYTES_LENGTH..];

    // compute and compare checksum
    let checksum = Sha512Trunc256::default().chain(address_bytes).result();
    let expected_checksum_bytes = &checksum[ADDRESS_BYTES_LENGTH - CHECKSUM_BYTES_LENGTH..];

    if expected_checksum_bytes != checksum_bytes {
      return Err(AlgorandTxnError::InvalidChecksumAddress(String::from(address_str)))?;
    }

    Ok(Address(address_bytes.to_array()))
  }

  /// Create an `Address` instance from a byte reference. It is a convenience alternative to `from_fixed_bytes`
  ///
  /// It will return an Error if the length of the slice is not `ADDRESS_BYTES_LENGTH` (32)
  pub fn from_bytes(address_bytes: &[u8]) -> Result<Address, Error> {
    if address_bytes.len() != ADDRESS_BYTES_LENGTH {
      Err(AlgorandTxnError::WrongAddressByteLength(ADDRESS_BYTES_LENGTH, address_bytes.len()))?;
    }

    let mut result_bytes: [u8; ADDRESS_BYTES_LENGTH] = Default::default();
    result_bytes.copy_from_slice(address_bytes);
    Ok(Address(result_bytes))
  }

  /// Create an `Address` instance from a valid `ADDRESS_BYTES_LENGTH`(32) byte array
  pub fn from_fixed_bytes(address_bytes: [u8; ADDRESS_BYTES_LENGTH]) -> Address {
    Address(address_bytes)
  }

  /// The all-zero public key address
  pub fn zero() -> Address {
    Address([0; ADDRESS_BYTES_LENGTH])
  }

  pub fn is_zero(&self) -> bool {
    self.0 == [0; ADDRESS_BYTES_LENGTH]
  }

  /// Derive the address of a multisig account from its preimage.
  ///
  /// The preimage is the version, the threshold and the ordered list of
  /// participating public keys. Reordering the keys yields a different
  /// address.
  pub fn from_multisig_preimage(version: u8, threshold: u8, keys: &[AddressBytes]) -> Address {
    let mut hasher = Sha512Trunc256::default()
      .chain(MULTISIG_ADDR_PREFIX)
      .chain([version])
      .chain([threshold]);
    for key in keys {
      hasher = hasher.chain(&key[..]);
    }

    let digest = hasher.result();
    Address((&digest[..]).to_array())
  }

  /// Get checksum string representation of Address
  ///
  /// # Returns
  /// A human-readable representation of the address. This representation
  /// includes a 4-byte checksum
  pub fn to_string(&self) -> String {
    // compute checksum
    let checksum = Sha512Trunc256::default().chain(self.0).result();
    let checksum_len_bytes = &checksum[ADDRESS_BYTES_LENGTH - CHECKSUM_BYTES_LENGTH..];

    // append checksum to address bytes
    let mut address_with_checksum = Vec::from(&self.0[..]);
    address_with_checksum.extend(checksum_len_bytes);

    base32_encode(address_with_checksum.as_ref())
  }

  pub fn as_bytes(&self) -> &[u8] {
    &self.0
  }

  pub fn into_bytes(self) -> AddressBytes {
    self.0
  }

  pub fn to_vec(&self) -> Vec<u8> {
    self.as_bytes().to_vec()
  }
}

impl Into<AddressBytes> for Address {
  fn into(self) -> AddressBytes {
    self.into_bytes()
  }
}
