mod address;

use rand::rngs::OsRng;
use sha2::{Digest, Sha512Trunc256};
use ed25519_dalek::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use ed25519_dalek::ExpandedSecretKey;

pub use ed25519_dalek::{PublicKey, SecretKey, Signature, SIGNATURE_LENGTH};
pub use address::{Address, AddressBytes, ADDRESS_BYTES_LENGTH, CHECKSUM_BYTES_LENGTH};

use crate::helpers::ToArray;
use crate::errors::{Error};

pub type PublicKeyBytes = [u8; PUBLIC_KEY_LENGTH];
pub type SecretKeyBytes = [u8; SECRET_KEY_LENGTH];

/// An account used for signing transactions.
///
/// An `Account` represents the fully formed account containing
/// both the public key/address and private key.
/// You can only use an Account instance to sign messages.
///
/// If you are interested in only a public key/address representation of a user
/// to verify a signed transaction then you should use the `Address` object instead
///
pub struct Account {
  private_key: SecretKey,
  public_key: PublicKey,
  pub address: Address,
}

impl Account {
  /// This generates a random Account.
  /// If you have seed bytes from an existing account, you should use the
  /// [`Account::from_key()`] function instead to create an account.
  ///
  /// # Example
  /// ```rust
  /// use rust_algorand_txn::accounts::Account;
  ///
  /// let account = Account::generate();
  /// let signature = account.sign(&[1, 2, 3]);
  /// // signature represents the signed bytes
  /// println!("Signature {:?}", signature)
  /// ```
  pub fn generate() -> Account {
    let mut csprng: OsRng = OsRng::new().unwrap();
    let private_key = SecretKey::generate(&mut csprng);
    let public_key: PublicKey = (&private_key).into();
    Account {
      address: Address::from_fixed_bytes(public_key.to_bytes()),
      private_key,
      public_key,
    }
  }

  /// Create an account from a known secret key.
  ///
  /// Note: the bytes must be of size `SECRET_KEY_LENGTH` which is 32
  pub fn from_key(bytes: &[u8]) -> Result<Account, Error> {
    let private_key = SecretKey::from_bytes(bytes)?;
    let public_key: PublicKey = (&private_key).into();

    Ok(Account {
      address: Address::from_fixed_bytes(public_key.to_bytes()),
      private_key,
      public_key,
    })
  }

  pub fn sign(&self, message: &[u8]) -> Signature {
    let expanded: ExpandedSecretKey = (&self.private_key).into();
    expanded.sign(&message, &self.public_key)
  }

  pub fn public_key(&self) -> &PublicKey {
    &self.public_key
  }
}

/// Verify an ed25519 signature over `message` against the public key behind
/// `address`. A bad signature is a `false` result, never an error.
pub fn verify_bytes(message: &[u8], signature: &Signature, address: &Address) -> bool {
  match PublicKey::from_bytes(address.as_bytes()) {
    Ok(public_key) => public_key.verify(message, signature).is_ok(),
    Err(_) => false,
  }
}

/// SHA-512/256 of `message`. The hash behind transaction ids, address
/// checksums and multisig address derivation.
pub fn generic_hash(message: &[u8]) -> [u8; 32] {
  let digest = Sha512Trunc256::default().chain(message).result();
  (&digest[..]).to_array()
}

pub fn is_valid_signature_length(length: usize) -> bool {
  length == SIGNATURE_LENGTH
}
