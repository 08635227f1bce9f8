use std::fmt;
use serde_bytes::ByteBuf;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use super::asset::AssetParams;
use super::app_call::{RawBoxReference, StateSchema};
use crate::accounts::{PublicKeyBytes, AddressBytes};
use crate::errors::{Error, AlgorandTxnError};

pub const DIGEST_BYTE_LENGTH: usize = 32;
pub const STATE_PROOF_KEY_BYTE_LENGTH: usize = 64;

/// Identifies the type of the transaction
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TxType {
  // Type for payment transactions
  Payment,
  // Type for key registrations
  KeyReg,
  // Type for transactions that create, re-configure or destroy an asset
  AssetConfig,
  // Type for transactions that move an asset, including clawback revocations
  AssetTransfer,
  // Type for transactions that freeze or unfreeze an asset holding
  AssetFreeze,
  // Type for application calls
  AppCall,
  // Type for state proof transactions
  StateProof,
}

impl TxType {
  pub fn from_str(tx_type: &str) -> Result<TxType, Error> {
    match tx_type {
      "pay" => Ok(TxType::Payment),
      "keyreg" => Ok(TxType::KeyReg),
      "acfg" => Ok(TxType::AssetConfig),
      "axfer" => Ok(TxType::AssetTransfer),
      "afrz" => Ok(TxType::AssetFreeze),
      "appl" => Ok(TxType::AppCall),
      "stpf" => Ok(TxType::StateProof),
      others => Err(AlgorandTxnError::UnknownTransactionType(others.into()))?,
    }
  }

  pub fn to_str(&self) -> &'static str {
    match self {
      TxType::Payment => "pay",
      TxType::KeyReg => "keyreg",
      TxType::AssetConfig => "acfg",
      TxType::AssetTransfer => "axfer",
      TxType::AssetFreeze => "afrz",
      TxType::AppCall => "appl",
      TxType::StateProof => "stpf",
    }
  }
}

struct TxTypeStringVisitor;

impl<'de> de::Visitor<'de> for TxTypeStringVisitor {
    type Value = TxType;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string containing transaction type data")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        TxType::from_str(v).map_err(E::custom)
    }
}

impl Serialize for TxType {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where S: Serializer
  {
    serializer.serialize_str(self.to_str())
  }
}

impl<'de> Deserialize<'de> for TxType {
  fn deserialize<D>(deserializer: D) -> Result<TxType, D::Error>
  where D: Deserializer<'de>
  {
    deserializer.deserialize_str(TxTypeStringVisitor)
  }
}

pub type MicroAlgos = u64;
pub type Round = u64;

/// This is for internal use only. Primarily for encoding and sending over the network
///
/// Every field of every transaction kind lives here under its wire key. A
/// field equal to its default is `None` and never hits the wire; decoding
/// fills defaults back in symmetrically. `snd`, `gh` and `type` are always
/// emitted, as are `sp` and `spmsg` for state proof transactions.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RawTransaction {
  // NOTE: All fields must stay in the lexicographic order of their wire keys
  // for the canonical encoding to hold.
  #[serde(rename = "aamt", default, skip_serializing_if = "Option::is_none")]
  pub asset_amount: Option<u64>,

  #[serde(rename = "aclose", default, skip_serializing_if = "Option::is_none")]
  pub asset_close_to: Option<ByteBuf>,

  #[serde(rename = "afrz", default, skip_serializing_if = "Option::is_none")]
  pub asset_frozen: Option<bool>,

  #[serde(rename = "amt", default, skip_serializing_if = "Option::is_none")]
  pub amount: Option<MicroAlgos>,

  #[serde(rename = "apaa", default, skip_serializing_if = "Option::is_none")]
  pub app_args: Option<Vec<ByteBuf>>,

  #[serde(rename = "apan", default, skip_serializing_if = "Option::is_none")]
  pub on_complete: Option<u64>,

  #[serde(rename = "apap", default, skip_serializing_if = "Option::is_none")]
  pub approval_program: Option<ByteBuf>,

  #[serde(rename = "apar", default, skip_serializing_if = "Option::is_none")]
  pub asset_params: Option<AssetParams>,

  #[serde(rename = "apas", default, skip_serializing_if = "Option::is_none")]
  pub foreign_assets: Option<Vec<u64>>,

  #[serde(rename = "apat", default, skip_serializing_if = "Option::is_none")]
  pub app_accounts: Option<Vec<ByteBuf>>,

  #[serde(rename = "apbx", default, skip_serializing_if = "Option::is_none")]
  pub boxes: Option<Vec<RawBoxReference>>,

  #[serde(rename = "apep", default, skip_serializing_if = "Option::is_none")]
  pub extra_pages: Option<u64>,

  #[serde(rename = "apfa", default, skip_serializing_if = "Option::is_none")]
  pub foreign_apps: Option<Vec<u64>>,

  #[serde(rename = "apgs", default, skip_serializing_if = "Option::is_none")]
  pub global_schema: Option<StateSchema>,

  #[serde(rename = "apid", default, skip_serializing_if = "Option::is_none")]
  pub app_id: Option<u64>,

  #[serde(rename = "apls", default, skip_serializing_if = "Option::is_none")]
  pub local_schema: Option<StateSchema>,

  #[serde(rename = "apsu", default, skip_serializing_if = "Option::is_none")]
  pub clear_program: Option<ByteBuf>,

  #[serde(rename = "arcv", default, skip_serializing_if = "Option::is_none")]
  pub asset_receiver: Option<ByteBuf>,

  /// For a clawback revocation this is the account the asset units are
  /// pulled from; the transaction sender is the clawback account.
  #[serde(rename = "asnd", default, skip_serializing_if = "Option::is_none")]
  pub asset_sender: Option<ByteBuf>,

  #[serde(rename = "caid", default, skip_serializing_if = "Option::is_none")]
  pub config_asset: Option<u64>,

  /// When close_remainder_to is set, it indicates that the
  /// transaction is requesting that the account should be closed, and all
  /// remaining funds be transferred to this address.
  #[serde(rename = "close", default, skip_serializing_if = "Option::is_none")]
  pub close_remainder_to: Option<ByteBuf>,

  #[serde(rename = "fadd", default, skip_serializing_if = "Option::is_none")]
  pub freeze_account: Option<ByteBuf>,

  #[serde(rename = "faid", default, skip_serializing_if = "Option::is_none")]
  pub freeze_asset: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fee: Option<MicroAlgos>,

  #[serde(rename = "fv", default, skip_serializing_if = "Option::is_none")]
  pub first_valid: Option<Round>,

  #[serde(rename = "gen", default, skip_serializing_if = "Option::is_none")]
  pub genesis_id: Option<String>,

  #[serde(rename = "gh", default, skip_serializing_if = "Option::is_none")]
  pub genesis_hash: Option<ByteBuf>,

  /// Group specifies that this transaction is part of a transaction group
  /// (and if so specifies the hash of a TxGroup)
  #[serde(rename = "grp", default, skip_serializing_if = "Option::is_none")]
  pub group: Option<ByteBuf>,

  #[serde(rename = "lv", default, skip_serializing_if = "Option::is_none")]
  pub last_valid: Option<Round>,

  /// A lease locks out any other transaction with the same (sender, lease)
  /// pair until last_valid passes.
  #[serde(rename = "lx", default, skip_serializing_if = "Option::is_none")]
  pub lease: Option<ByteBuf>,

  #[serde(rename = "nonpart", default, skip_serializing_if = "Option::is_none")]
  pub non_participation: Option<bool>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub note: Option<ByteBuf>,

  #[serde(rename = "rcv", default, skip_serializing_if = "Option::is_none")]
  pub receiver: Option<ByteBuf>,

  /// Authorizes rekey_to to sign all future transactions for this sender.
  #[serde(rename = "rekey", default, skip_serializing_if = "Option::is_none")]
  pub rekey_to: Option<ByteBuf>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub selkey: Option<ByteBuf>,

  #[serde(rename = "snd", default, skip_serializing_if = "Option::is_none")]
  pub sender: Option<ByteBuf>,

  #[serde(rename = "sp", default, skip_serializing_if = "Option::is_none")]
  pub state_proof: Option<ByteBuf>,

  #[serde(rename = "spmsg", default, skip_serializing_if = "Option::is_none")]
  pub state_proof_message: Option<ByteBuf>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sprfkey: Option<ByteBuf>,

  #[serde(rename = "sptype", default, skip_serializing_if = "Option::is_none")]
  pub state_proof_type: Option<u64>,

  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub tx_type: Option<TxType>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub votefst: Option<Round>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub votekd: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub votekey: Option<ByteBuf>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub votelst: Option<Round>,

  #[serde(rename = "xaid", default, skip_serializing_if = "Option::is_none")]
  pub xfer_asset: Option<u64>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionHeader {
  pub sender: AddressBytes,
  pub fee: MicroAlgos,
  pub first_valid: Round,
  pub last_valid: Round,
  pub note: Option<Vec<u8>>,
  pub genesis_id: String,
  pub genesis_hash: [u8; DIGEST_BYTE_LENGTH],
  pub group: Option<[u8; DIGEST_BYTE_LENGTH]>,
  pub lease: Option<[u8; DIGEST_BYTE_LENGTH]>,
  pub rekey_to: Option<AddressBytes>,
}

/// Payment transaction fields
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentParams {
  pub receiver: AddressBytes,
  pub amount: MicroAlgos,

  /// When close_remainder_to is set, it indicates that the
  /// transaction is requesting that the account should be
  /// closed, and all remaining funds be transferred to this
  /// address.
  pub close_remainder_to: Option<AddressBytes>,
}

/// Key registration fields.
///
/// A registration is one of exactly three shapes: offline (no participation
/// fields), online (vote key, selection key, vote first, vote last and key
/// dilution all present, state proof key optional) or non-participation
/// (the flag alone). `validate` rejects everything else.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyRegParams {
  pub vote_pk: Option<PublicKeyBytes>,
  pub selection_pk: Option<PublicKeyBytes>,
  pub state_proof_pk: Option<[u8; STATE_PROOF_KEY_BYTE_LENGTH]>,
  pub vote_first: Option<Round>,
  pub vote_last: Option<Round>,
  pub vote_key_dilution: Option<u64>,
  pub non_participation: bool,
}

impl KeyRegParams {
  pub fn validate(&self) -> Result<(), Error> {
    let has_all_vote_fields = self.vote_pk.is_some()
      && self.selection_pk.is_some()
      && self.vote_first.is_some()
      && self.vote_last.is_some()
      && self.vote_key_dilution.is_some();
    let has_any_vote_field = self.vote_pk.is_some()
      || self.selection_pk.is_some()
      || self.state_proof_pk.is_some()
      || self.vote_first.is_some()
      || self.vote_last.is_some()
      || self.vote_key_dilution.is_some();

    if self.non_participation {
      if has_any_vote_field {
        return Err(AlgorandTxnError::InvalidKeyRegParams(
          "a non-participation registration cannot carry participation fields".into(),
        ))?;
      }
    } else if has_any_vote_field && !has_all_vote_fields {
      return Err(AlgorandTxnError::InvalidKeyRegParams(
        "an online registration needs vote key, selection key, vote first, vote last and key dilution".into(),
      ))?;
    }

    Ok(())
  }
}

/// State proof transaction fields. The proof and message are opaque byte
/// strings produced elsewhere; they are carried, never interpreted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateProofParams {
  pub state_proof_type: u64,
  pub state_proof: Vec<u8>,
  pub message: Vec<u8>,
}
