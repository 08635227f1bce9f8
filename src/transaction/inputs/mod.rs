use super::{
  AppCallParams, AssetConfigParams, AssetFreezeParams, AssetTransferParams, BoxReference,
  KeyRegParams, MicroAlgos, PaymentParams, Round, StateProofParams, TransactionHeader, TxnPayload,
};
use super::app_call::encode_box_references;
use super::tx_type::{DIGEST_BYTE_LENGTH, STATE_PROOF_KEY_BYTE_LENGTH};
use crate::accounts::{Address, AddressBytes};
use crate::errors::{AlgorandTxnError, Error};
use crate::encoding::base64_decode;
use crate::helpers::ToArray;

/// Suggested network parameters shared by every transaction input.
///
/// - `fee` is the fee per byte if `flat_fee` is false, else it is used as is
/// - `min_fee` is the minimum fee the network accepts; per-byte fees are
///   clamped up to it (1000 microalgos on mainnet at the time of writing)
/// - `first_valid` is the first round the transaction is valid
/// - `last_valid` is the last round the transaction is valid
/// - `genesis_id` corresponds to the id of the network
/// - `genesis_hash` corresponds to the base64-encoded hash of the genesis of the network
#[derive(Clone, Debug)]
pub struct SuggestedParams {
  pub fee: MicroAlgos,
  pub min_fee: MicroAlgos,
  pub flat_fee: bool,
  pub first_valid: Round,
  pub last_valid: Round,
  pub genesis_id: String,
  pub genesis_hash: String,
}

pub trait TransactionInput {
  fn build_header(&self) -> Result<TransactionHeader, Error>;

  fn build_payload(&self) -> Result<TxnPayload, Error>;

  fn suggested_params(&self) -> &SuggestedParams;
}

// default implementation of the header build shared by every input; relies on
// each input carrying `from`, `params`, `note`, `lease` and `rekey_to` fields
macro_rules! build_header_impl {
  () => {
    fn build_header(&self) -> Result<TransactionHeader, Error> {
      Ok(TransactionHeader {
        sender: Address::from_string(&self.from)?.into(),
        fee: self.params.fee,
        first_valid: self.params.first_valid,
        last_valid: self.params.last_valid,
        note: self.note.clone().filter(|note| !note.is_empty()),
        genesis_id: self.params.genesis_id.clone(),
        genesis_hash: decode_genesis_hash(&self.params.genesis_hash)?,
        group: None,
        lease: fixed_digest_field("lease", self.lease.as_ref())?,
        rekey_to: optional_address_field("rekey_to", self.rekey_to.as_ref())?,
      })
    }

    fn suggested_params(&self) -> &SuggestedParams {
      &self.params
    }
  };
}

/// Builds a payment transaction from the passed in parameters.
///
/// - `from` is the checksummed, human readable address of the sender
/// - `params` are the suggested network parameters
/// - `note` is an arbitrary byte array
/// - `lease` locks out other transactions with the same (sender, lease) pair,
///   32 bytes when present
/// - `rekey_to` authorizes this address to sign all future transactions of the sender
/// - `to` is the checksummed, human readable address of the recipient
/// - `amount` is the amount to pay the recipient in microalgos
/// - `close_remainder_to` if specified, the from account will be closed and
///   the remaining funds sent to this address
pub struct PaymentTransactionInput {
  pub from: String,
  pub params: SuggestedParams,
  pub note: Option<Vec<u8>>,
  pub lease: Option<Vec<u8>>,
  pub rekey_to: Option<String>,
  // payment fields
  pub to: String,
  pub amount: MicroAlgos,
  pub close_remainder_to: Option<String>,
}

impl TransactionInput for PaymentTransactionInput {
  build_header_impl!();

  fn build_payload(&self) -> Result<TxnPayload, Error> {
    Ok(TxnPayload::Payment(PaymentParams {
      receiver: Address::from_string(&self.to)?.into(),
      amount: self.amount,
      close_remainder_to: optional_address_field("close_remainder_to", self.close_remainder_to.as_ref())?,
    }))
  }
}

/// Builds a keyreg transaction from the passed in parameters.
///
/// Exactly three shapes are accepted: all participation fields absent
/// (going offline), `vote_pk`, `selection_pk`, `vote_first`, `vote_last` and
/// `vote_key_dilution` all present with `state_proof_pk` optional (going
/// online), or `non_participation` alone.
///
/// - `vote_pk` is the base64 encoded root participation public key
/// - `selection_pk` is the base64 encoded vrf public key
/// - `state_proof_pk` is the base64 encoded 64-byte state proof commitment
/// - `vote_first` is the first round the participation key is valid
/// - `vote_last` is the last round the participation key is valid
/// - `vote_key_dilution` is the dilution of the 2-level participation key
/// - `non_participation` permanently marks the account as not earning rewards
pub struct KeyRegTransactionInput {
  pub from: String,
  pub params: SuggestedParams,
  pub note: Option<Vec<u8>>,
  pub lease: Option<Vec<u8>>,
  pub rekey_to: Option<String>,
  // keyreg fields
  pub vote_pk: Option<String>,
  pub selection_pk: Option<String>,
  pub state_proof_pk: Option<String>,
  pub vote_first: Option<Round>,
  pub vote_last: Option<Round>,
  pub vote_key_dilution: Option<u64>,
  pub non_participation: bool,
}

impl TransactionInput for KeyRegTransactionInput {
  build_header_impl!();

  fn build_payload(&self) -> Result<TxnPayload, Error> {
    let key_reg = KeyRegParams {
      vote_pk: decode_key_32("vote_pk", self.vote_pk.as_ref())?,
      selection_pk: decode_key_32("selection_pk", self.selection_pk.as_ref())?,
      state_proof_pk: decode_key_64("state_proof_pk", self.state_proof_pk.as_ref())?,
      vote_first: self.vote_first,
      vote_last: self.vote_last,
      vote_key_dilution: self.vote_key_dilution,
      non_participation: self.non_participation,
    };
    key_reg.validate()?;

    Ok(TxnPayload::KeyReg(key_reg))
  }
}

/// Builds an asset config transaction from the passed in parameters.
///
/// An `asset_id` of 0 allocates a new asset; a nonzero id with every
/// parameter left at its default destroys the asset.
///
/// - `total` is the total number of base units of the asset to create
/// - `decimals` is the number of digits after the decimal place in displays
/// - `default_frozen` freezes holdings of this asset by default when set
/// - `manager`, `reserve`, `freeze`, `clawback` are the special addresses of
///   the asset, each optional
/// - `unit_name`, `asset_name`, `url` are display hints
/// - `metadata_hash` is a 32-byte commitment to asset metadata
pub struct AssetConfigTransactionInput {
  pub from: String,
  pub params: SuggestedParams,
  pub note: Option<Vec<u8>>,
  pub lease: Option<Vec<u8>>,
  pub rekey_to: Option<String>,
  // asset config fields
  pub asset_id: u64,
  pub total: u64,
  pub decimals: u32,
  pub default_frozen: bool,
  pub manager: Option<String>,
  pub reserve: Option<String>,
  pub freeze: Option<String>,
  pub clawback: Option<String>,
  pub unit_name: String,
  pub asset_name: String,
  pub url: String,
  pub metadata_hash: Option<Vec<u8>>,
}

impl TransactionInput for AssetConfigTransactionInput {
  build_header_impl!();

  fn build_payload(&self) -> Result<TxnPayload, Error> {
    Ok(TxnPayload::AssetConfig(AssetConfigParams {
      asset_id: self.asset_id,
      total: self.total,
      decimals: self.decimals,
      default_frozen: self.default_frozen,
      manager: optional_address_field("manager", self.manager.as_ref())?,
      reserve: optional_address_field("reserve", self.reserve.as_ref())?,
      freeze: optional_address_field("freeze", self.freeze.as_ref())?,
      clawback: optional_address_field("clawback", self.clawback.as_ref())?,
      unit_name: self.unit_name.clone(),
      asset_name: self.asset_name.clone(),
      url: self.url.clone(),
      metadata_hash: fixed_digest_field("metadata_hash", self.metadata_hash.as_ref())?,
    }))
  }
}

/// Builds an asset transfer transaction from the passed in parameters.
///
/// - `asset_id` is the asset being moved
/// - `amount` is the number of base units to move
/// - `to` is the checksummed, human readable address of the recipient
/// - `close_remainder_to` if specified, the sender's holding of the asset is
///   closed out to this address after the transfer
/// - `revocation_target` if specified, units are pulled from that account
///   instead of the sender; the sender must then be the asset's clawback
pub struct AssetTransferTransactionInput {
  pub from: String,
  pub params: SuggestedParams,
  pub note: Option<Vec<u8>>,
  pub lease: Option<Vec<u8>>,
  pub rekey_to: Option<String>,
  // asset transfer fields
  pub asset_id: u64,
  pub amount: u64,
  pub to: String,
  pub close_remainder_to: Option<String>,
  pub revocation_target: Option<String>,
}

impl TransactionInput for AssetTransferTransactionInput {
  build_header_impl!();

  fn build_payload(&self) -> Result<TxnPayload, Error> {
    Ok(TxnPayload::AssetTransfer(AssetTransferParams {
      asset_id: self.asset_id,
      amount: self.amount,
      sender: optional_address_field("revocation_target", self.revocation_target.as_ref())?,
      receiver: Address::from_string(&self.to)?.into(),
      close_remainder_to: optional_address_field("close_remainder_to", self.close_remainder_to.as_ref())?,
    }))
  }
}

/// Builds an asset freeze transaction from the passed in parameters.
///
/// - `asset_id` is the asset whose holding changes state
/// - `freeze_target` is the checksummed address of the holding to change
/// - `frozen` is the new state of the holding
pub struct AssetFreezeTransactionInput {
  pub from: String,
  pub params: SuggestedParams,
  pub note: Option<Vec<u8>>,
  pub lease: Option<Vec<u8>>,
  pub rekey_to: Option<String>,
  // asset freeze fields
  pub asset_id: u64,
  pub freeze_target: String,
  pub frozen: bool,
}

impl TransactionInput for AssetFreezeTransactionInput {
  build_header_impl!();

  fn build_payload(&self) -> Result<TxnPayload, Error> {
    Ok(TxnPayload::AssetFreeze(AssetFreezeParams {
      asset_id: self.asset_id,
      freeze_account: Address::from_string(&self.freeze_target)?.into(),
      frozen: self.frozen,
    }))
  }
}

/// Builds an application call transaction from the passed in parameters.
///
/// An `app_id` of 0 creates a new application from the approval and clear
/// programs; the schema counts and `extra_pages` only matter on creation.
///
/// - `on_complete` selects the effect of a successful call on the caller's
///   local state (0 is a plain NoOp)
/// - `app_args`, `accounts`, `foreign_apps`, `foreign_assets` are the call's
///   arguments and reference arrays
/// - `boxes` name the box storage touched by the call; each referenced app
///   id must be 0 (the called app) or listed in `foreign_apps`
pub struct AppCallTransactionInput {
  pub from: String,
  pub params: SuggestedParams,
  pub note: Option<Vec<u8>>,
  pub lease: Option<Vec<u8>>,
  pub rekey_to: Option<String>,
  // application call fields
  pub app_id: u64,
  pub on_complete: u64,
  pub app_args: Vec<Vec<u8>>,
  pub accounts: Vec<String>,
  pub foreign_apps: Vec<u64>,
  pub foreign_assets: Vec<u64>,
  pub boxes: Vec<BoxReference>,
  pub approval_program: Vec<u8>,
  pub clear_program: Vec<u8>,
  pub local_num_uints: u64,
  pub local_num_byte_slices: u64,
  pub global_num_uints: u64,
  pub global_num_byte_slices: u64,
  pub extra_pages: u64,
}

impl TransactionInput for AppCallTransactionInput {
  build_header_impl!();

  fn build_payload(&self) -> Result<TxnPayload, Error> {
    // surface bad box references at construction time
    encode_box_references(&self.boxes, &self.foreign_apps, self.app_id)?;

    let mut accounts = Vec::with_capacity(self.accounts.len());
    for account in &self.accounts {
      accounts.push(Address::from_string(account)?.into());
    }

    Ok(TxnPayload::AppCall(AppCallParams {
      app_id: self.app_id,
      on_complete: self.on_complete,
      app_args: self.app_args.clone(),
      accounts,
      foreign_apps: self.foreign_apps.clone(),
      foreign_assets: self.foreign_assets.clone(),
      boxes: self.boxes.clone(),
      approval_program: self.approval_program.clone(),
      clear_program: self.clear_program.clone(),
      local_num_uints: self.local_num_uints,
      local_num_byte_slices: self.local_num_byte_slices,
      global_num_uints: self.global_num_uints,
      global_num_byte_slices: self.global_num_byte_slices,
      extra_pages: self.extra_pages,
    }))
  }
}

/// Builds a state proof transaction from the passed in parameters.
///
/// The proof and its message are opaque byte strings produced by the state
/// proof machinery; they are carried as given.
pub struct StateProofTransactionInput {
  pub from: String,
  pub params: SuggestedParams,
  pub note: Option<Vec<u8>>,
  pub lease: Option<Vec<u8>>,
  pub rekey_to: Option<String>,
  // state proof fields
  pub state_proof_type: u64,
  pub state_proof: Vec<u8>,
  pub state_proof_message: Vec<u8>,
}

impl TransactionInput for StateProofTransactionInput {
  build_header_impl!();

  fn build_payload(&self) -> Result<TxnPayload, Error> {
    Ok(TxnPayload::StateProof(StateProofParams {
      state_proof_type: self.state_proof_type,
      state_proof: self.state_proof.clone(),
      message: self.state_proof_message.clone(),
    }))
  }
}

fn decode_genesis_hash(genesis_hash_b64: &str) -> Result<[u8; DIGEST_BYTE_LENGTH], Error> {
  let genesis_hash = base64_decode(genesis_hash_b64)?;
  if genesis_hash.is_empty() {
    return Err(AlgorandTxnError::MissingField("genesis_hash".into()))?;
  }
  if genesis_hash.len() != DIGEST_BYTE_LENGTH {
    return Err(AlgorandTxnError::WrongFieldLength(
      "genesis_hash".into(),
      DIGEST_BYTE_LENGTH,
      genesis_hash.len(),
    ))?;
  }

  Ok(genesis_hash.to_array())
}

// exact length required; an all-zero value equals the default and elides to absent
fn fixed_digest_field(field: &str, value: Option<&Vec<u8>>) -> Result<Option<[u8; DIGEST_BYTE_LENGTH]>, Error> {
  match value {
    None => Ok(None),
    Some(bytes) => {
      if bytes.len() != DIGEST_BYTE_LENGTH {
        return Err(AlgorandTxnError::WrongFieldLength(field.into(), DIGEST_BYTE_LENGTH, bytes.len()))?;
      }
      if bytes.iter().all(|&byte| byte == 0) {
        return Ok(None);
      }
      Ok(Some(bytes.to_array()))
    }
  }
}

// optional address slots reject the zero address; leave the slot unset instead
fn optional_address_field(field: &str, value: Option<&String>) -> Result<Option<AddressBytes>, Error> {
  match value {
    None => Ok(None),
    Some(address_str) => {
      let address = Address::from_string(address_str)?;
      if address.is_zero() {
        return Err(AlgorandTxnError::ZeroAddress(field.into()))?;
      }
      Ok(Some(address.into()))
    }
  }
}

fn decode_key_32(field: &str, value: Option<&String>) -> Result<Option<[u8; 32]>, Error> {
  match value {
    None => Ok(None),
    Some(key_b64) => {
      let key = base64_decode(key_b64)?;
      if key.len() != 32 {
        return Err(AlgorandTxnError::WrongFieldLength(field.into(), 32, key.len()))?;
      }
      Ok(Some(key.to_array()))
    }
  }
}

fn decode_key_64(field: &str, value: Option<&String>) -> Result<Option<[u8; STATE_PROOF_KEY_BYTE_LENGTH]>, Error> {
  match value {
    None => Ok(None),
    Some(key_b64) => {
      let key = base64_decode(key_b64)?;
      if key.len() != STATE_PROOF_KEY_BYTE_LENGTH {
        return Err(AlgorandTxnError::WrongFieldLength(
          field.into(),
          STATE_PROOF_KEY_BYTE_LENGTH,
          key.len(),
        ))?;
      }
      Ok(Some(key.to_array()))
    }
  }
}
