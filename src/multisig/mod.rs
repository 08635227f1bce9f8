//! Multisig coordination: build, partially sign, merge and verify
//! collaboratively signed transaction blobs.
//!
//! The preimage (version, threshold, ordered public keys) deterministically
//! yields the multisig address and is fixed for the lifetime of a blob. Every
//! operation here produces a new blob; none can alter the preimage, since a
//! changed preimage invalidates every existing signature.

use serde_bytes::ByteBuf;
use crate::accounts::{
  is_valid_signature_length, verify_bytes, Account, Address, AddressBytes, Signature,
  ADDRESS_BYTES_LENGTH, SIGNATURE_LENGTH,
};
use crate::errors::{AlgorandTxnError, Error};
use crate::helpers::ToArray;
use crate::transaction::{MultisigSig, MultisigSubsig, SignedTransaction, Transaction};

/// A multisig account preimage
///
/// Holds the version, threshold and ordered participating addresses that
/// together derive the multisig address. The fields are deliberately
/// private: a preimage cannot be changed once signatures exist against it.
pub struct MultisigAccount {
  version: u8,
  threshold: u8,
  public_keys: Vec<AddressBytes>,
}

impl MultisigAccount {
  pub fn new(version: u8, threshold: u8, addresses: Vec<Address>) -> Result<MultisigAccount, Error> {
    if threshold == 0 || addresses.is_empty() || (threshold as usize) > addresses.len() {
      return Err(AlgorandTxnError::InvalidMultisigThreshold(threshold, addresses.len()))?;
    }

    Ok(MultisigAccount {
      version,
      threshold,
      public_keys: addresses.iter().map(|address| address.into_bytes()).collect(),
    })
  }

  /// The address this preimage derives to
  pub fn address(&self) -> Address {
    Address::from_multisig_preimage(self.version, self.threshold, &self.public_keys)
  }

  pub fn version(&self) -> u8 {
    self.version
  }

  pub fn threshold(&self) -> u8 {
    self.threshold
  }

  // slot of the given signer within the preimage
  fn key_index(&self, address: &Address) -> Result<usize, Error> {
    match self.public_keys.iter().position(|key| key == address.as_bytes()) {
      Some(index) => Ok(index),
      None => Err(AlgorandTxnError::KeyNotInMultisig(address.to_string()))?,
    }
  }

  fn blank_multisig(&self) -> MultisigSig {
    MultisigSig {
      subsigs: self
        .public_keys
        .iter()
        .map(|key| MultisigSubsig { key: ByteBuf::from(key.to_vec()), signature: None })
        .collect(),
      threshold: self.threshold,
      version: self.version,
    }
  }
}

/// Wrap a transaction into an unsigned multisig blob: every preimage key gets
/// an empty subsig slot. The auth address is recorded when the multisig
/// address is not the transaction sender.
pub fn create_multisig_transaction(
  transaction: &Transaction,
  multisig_account: &MultisigAccount,
) -> Result<SignedTransaction, Error> {
  transaction.with_multisig(multisig_account.blank_multisig(), &multisig_account.address())
}

/// Sign a transaction with one participant of a multisig account.
///
/// The account's public key must appear in the preimage. Returns the
/// transaction id and the encoded partially-signed blob.
pub fn sign_multisig_transaction(
  transaction: &Transaction,
  multisig_account: &MultisigAccount,
  account: &Account,
) -> Result<(String, Vec<u8>), Error> {
  let index = multisig_account.key_index(&account.address)?;
  let signature = account.sign(transaction.bytes_to_sign()?.as_ref());

  partial_blob(transaction, multisig_account, index, signature)
}

/// Like [`sign_multisig_transaction`], but with an externally produced raw
/// signature and the address of the participant that made it.
pub fn sign_multisig_transaction_with_signature(
  transaction: &Transaction,
  multisig_account: &MultisigAccount,
  signature: &[u8],
  signer: &Address,
) -> Result<(String, Vec<u8>), Error> {
  if !is_valid_signature_length(signature.len()) {
    return Err(AlgorandTxnError::WrongSignatureLength(SIGNATURE_LENGTH, signature.len()))?;
  }

  let index = multisig_account.key_index(signer)?;
  let signature = Signature::from_bytes(signature)?;

  partial_blob(transaction, multisig_account, index, signature)
}

fn partial_blob(
  transaction: &Transaction,
  multisig_account: &MultisigAccount,
  index: usize,
  signature: Signature,
) -> Result<(String, Vec<u8>), Error> {
  let mut multisig_sig = multisig_account.blank_multisig();
  multisig_sig.subsigs[index].signature = Some(signature);

  let signed = transaction.with_multisig(multisig_sig, &multisig_account.address())?;
  Ok((signed.txn_id.clone(), signed.encode()?))
}

/// Merge partially-signed multisig blobs for the same transaction into one.
///
/// The first blob provides the reference transaction id, auth address and
/// preimage; every other blob must match all three. Signatures fill empty
/// slots; two signatures in the same slot must agree bit for bit. The merge
/// is commutative, associative and idempotent on conflict-free inputs.
pub fn merge_multisig_transactions(blobs: &[&[u8]]) -> Result<Vec<u8>, Error> {
  if blobs.len() < 2 {
    return Err(AlgorandTxnError::MultisigMergeCount(blobs.len()))?;
  }

  let mut merged = SignedTransaction::decode(blobs[0])?;
  let mut merged_msig = match merged.multisig_sig.take() {
    Some(multisig_sig) => multisig_sig,
    None => return Err(AlgorandTxnError::MissingMultisig)?,
  };
  let reference_address = preimage_address(&merged_msig)?;

  for blob in &blobs[1..] {
    let other = SignedTransaction::decode(blob)?;
    let other_msig = match other.multisig_sig {
      Some(ref multisig_sig) => multisig_sig,
      None => return Err(AlgorandTxnError::MissingMultisig)?,
    };

    if other.txn_id != merged.txn_id {
      return Err(AlgorandTxnError::MultisigMergeTxnIdMismatch(
        merged.txn_id.clone(),
        other.txn_id.clone(),
      ))?;
    }
    if other.auth_address != merged.auth_address {
      return Err(AlgorandTxnError::MultisigMergeAuthAddrMismatch)?;
    }
    if other_msig.subsigs.len() != merged_msig.subsigs.len()
      || preimage_address(other_msig)? != reference_address
    {
      return Err(AlgorandTxnError::MultisigMergePreImageMismatch)?;
    }

    for (slot, subsig) in other_msig.subsigs.iter().enumerate() {
      match (&merged_msig.subsigs[slot].signature, &subsig.signature) {
        (Some(mine), Some(theirs)) if mine != theirs => {
          return Err(AlgorandTxnError::MultisigSubsigConflict(slot))?;
        }
        (None, Some(theirs)) => {
          merged_msig.subsigs[slot].signature = Some(theirs.clone());
        }
        _ => {}
      }
    }
  }

  merged.multisig_sig = Some(merged_msig);
  merged.encode()
}

/// Decode an existing multisig blob, add a fresh participant signature over
/// the contained transaction and merge the result with the original.
/// Returns the stable transaction id and the new blob.
pub fn append_sign_multisig_transaction(
  blob: &[u8],
  multisig_account: &MultisigAccount,
  account: &Account,
) -> Result<(String, Vec<u8>), Error> {
  let transaction = SignedTransaction::decode(blob)?.transaction()?;
  let (txn_id, partial) = sign_multisig_transaction(&transaction, multisig_account, account)?;
  let merged = merge_multisig_transactions(&[blob, partial.as_ref()])?;

  Ok((txn_id, merged))
}

/// Verify a multisig record over a signed byte string against the expected
/// multisig address.
///
/// True iff the preimage derives to `address`, at least `threshold` slots
/// carry a signature, and every carried signature verifies against its key.
/// A bad record is a `false` result, never an error.
pub fn verify_multisig(message: &[u8], multisig_sig: &MultisigSig, address: &Address) -> bool {
  let derived = match preimage_address(multisig_sig) {
    Ok(derived) => derived,
    Err(_) => return false,
  };
  if derived != *address || multisig_sig.threshold == 0 {
    return false;
  }

  let mut signed_slots = 0;
  for subsig in &multisig_sig.subsigs {
    if let Some(ref signature) = subsig.signature {
      signed_slots += 1;
      let key = match Address::from_bytes(&subsig.key) {
        Ok(key) => key,
        Err(_) => return false,
      };
      if !verify_bytes(message, signature, &key) {
        return false;
      }
    }
  }

  signed_slots >= multisig_sig.threshold as usize
}

// derive the multisig address from the preimage a record carries
fn preimage_address(multisig_sig: &MultisigSig) -> Result<Address, Error> {
  let mut keys: Vec<AddressBytes> = Vec::with_capacity(multisig_sig.subsigs.len());
  for subsig in &multisig_sig.subsigs {
    if subsig.key.len() != ADDRESS_BYTES_LENGTH {
      return Err(AlgorandTxnError::WrongAddressByteLength(ADDRESS_BYTES_LENGTH, subsig.key.len()))?;
    }
    keys.push((&subsig.key[..]).to_array());
  }

  Ok(Address::from_multisig_preimage(multisig_sig.version, multisig_sig.threshold, &keys))
}
