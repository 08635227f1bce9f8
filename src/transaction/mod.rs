mod asset;
mod tx_type;
mod app_call;
mod inputs;

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;
use sha2::{Digest, Sha512Trunc256};
use asset::AssetParams;
use app_call::{decode_box_references, encode_box_references, StateSchema};
use tx_type::{RawTransaction, STATE_PROOF_KEY_BYTE_LENGTH};
use crate::accounts::{is_valid_signature_length, Account, Address, AddressBytes, Signature, SIGNATURE_LENGTH, ADDRESS_BYTES_LENGTH};
use crate::errors::{AlgorandTxnError, Error};
use crate::encoding::{base32_encode, rmp_decode, rmp_encode};
use crate::helpers::ToArray;

pub use inputs::{
  AppCallTransactionInput, AssetConfigTransactionInput, AssetFreezeTransactionInput,
  AssetTransferTransactionInput, KeyRegTransactionInput, PaymentTransactionInput,
  StateProofTransactionInput, SuggestedParams, TransactionInput,
};
pub use tx_type::{
  KeyRegParams, MicroAlgos, PaymentParams, Round, StateProofParams, TransactionHeader, TxType,
  DIGEST_BYTE_LENGTH,
};
pub use asset::{AssetConfigParams, AssetFreezeParams, AssetTransferParams};
pub use app_call::{AppCallParams, BoxReference};

// Bytes a signature envelope adds on top of the bare transaction encoding,
// used when turning a per-byte fee into a final fee.
const SIGNED_OVERHEAD_BYTES: u64 = 75;

/// Transaction describes a transaction that can appear in a block.
///
/// A transaction is immutable once constructed; the group id is the single
/// exception and can be assigned exactly once.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
  header: TransactionHeader,
  payload: TxnPayload,
}

/// The variant fields of each of the seven transaction kinds. Exactly one
/// payload exists per transaction, by construction.
#[derive(Clone, Debug, PartialEq)]
pub enum TxnPayload {
  Payment(PaymentParams),
  KeyReg(KeyRegParams),
  AssetConfig(AssetConfigParams),
  AssetTransfer(AssetTransferParams),
  AssetFreeze(AssetFreezeParams),
  AppCall(AppCallParams),
  StateProof(StateProofParams),
}

impl Transaction {
  /// Constructs a new transaction based on the type of the input.
  ///
  /// The fee of the finished transaction is the suggested fee taken verbatim
  /// when `flat_fee` is set, otherwise the per-byte suggested fee times the
  /// estimated signed size, clamped up to `min_fee`.
  pub fn from_input<T: TransactionInput>(input: T) -> Result<Transaction, Error> {
    let header = input.build_header()?;
    let payload = input.build_payload()?;
    let mut txn = Transaction { header, payload };

    let params = input.suggested_params();
    if params.flat_fee {
      txn.header.fee = params.fee;
    } else {
      // the size estimate runs with the per-byte fee still in the fee
      // field; the final fee replaces it without re-encoding
      let fee = params
        .fee
        .checked_mul(txn.estimate_size()?)
        .ok_or(AlgorandTxnError::FeeOverflow)?;
      txn.header.fee = if fee < params.min_fee { params.min_fee } else { fee };
    }

    Ok(txn)
  }

  pub fn header(&self) -> &TransactionHeader {
    &self.header
  }

  pub fn payload(&self) -> &TxnPayload {
    &self.payload
  }

  pub fn tx_type(&self) -> TxType {
    match self.payload {
      TxnPayload::Payment(_) => TxType::Payment,
      TxnPayload::KeyReg(_) => TxType::KeyReg,
      TxnPayload::AssetConfig(_) => TxType::AssetConfig,
      TxnPayload::AssetTransfer(_) => TxType::AssetTransfer,
      TxnPayload::AssetFreeze(_) => TxType::AssetFreeze,
      TxnPayload::AppCall(_) => TxType::AppCall,
      TxnPayload::StateProof(_) => TxType::StateProof,
    }
  }

  pub fn sender(&self) -> Address {
    Address::from_fixed_bytes(self.header.sender)
  }

  pub fn group(&self) -> Option<[u8; DIGEST_BYTE_LENGTH]> {
    self.header.group
  }

  /// Assign the group id shared by all transactions executed atomically with
  /// this one. The id can be set exactly once; it changes the transaction id.
  pub fn set_group(&mut self, group: [u8; DIGEST_BYTE_LENGTH]) -> Result<(), Error> {
    if self.header.group.is_some() {
      return Err(AlgorandTxnError::GroupAlreadySet)?;
    }
    self.header.group = Some(group);
    Ok(())
  }

  // Signs this transaction with the account/private key provided
  pub fn sign(&self, account: &Account) -> Result<SignedTransaction, Error> {
    let bytes_to_sign = self.bytes_to_sign()?;
    let signature = account.sign(bytes_to_sign.as_ref());
    self.with_signature(signature, &account.address)
  }

  /// Produce the bare ed25519 signature over this transaction's signing bytes
  pub fn raw_sign(&self, account: &Account) -> Result<Signature, Error> {
    Ok(account.sign(self.bytes_to_sign()?.as_ref()))
  }

  /// Wrap an externally produced signature into a signed transaction. The
  /// signer address decides whether an auth address is recorded.
  pub fn attach_signature(&self, signature: &[u8], signer: &Address) -> Result<SignedTransaction, Error> {
    if !is_valid_signature_length(signature.len()) {
      return Err(AlgorandTxnError::WrongSignatureLength(SIGNATURE_LENGTH, signature.len()))?;
    }

    let signature = Signature::from_bytes(signature)?;
    self.with_signature(signature, signer)
  }

  // Get raw bytes from encoding this transaction
  // The returned bytes can be signed for a signed transaction
  pub fn bytes_to_sign(&self) -> Result<Vec<u8>, Error> {
    let raw_txn = self.to_raw()?;
    Ok(Transaction::with_encode_tag(&rmp_encode(&raw_txn)?))
  }

  /// The canonical msgpack encoding of this transaction, without the signing
  /// tag. `from_encoded` is the inverse.
  pub fn encode(&self) -> Result<Vec<u8>, Error> {
    Ok(rmp_encode(&self.to_raw()?)?)
  }

  /// Decode a canonically encoded transaction. The wire form carries the
  /// final fee, so no fee arithmetic is re-run.
  pub fn from_encoded(buffer: &[u8]) -> Result<Transaction, Error> {
    Transaction::from_raw(rmp_decode(buffer)?)
  }

  /// The 32-byte transaction id: SHA-512/256 over the signing bytes
  pub fn raw_id(&self) -> Result<[u8; DIGEST_BYTE_LENGTH], Error> {
    let bytes_to_sign = self.bytes_to_sign()?;
    let checksum = Sha512Trunc256::default().chain(bytes_to_sign).result();
    Ok((&checksum[..]).to_array())
  }

  /// The transaction id in its textual form, base32 without padding
  pub fn id(&self) -> Result<String, Error> {
    Ok(base32_encode(self.raw_id()?.as_ref()))
  }

  fn with_encode_tag(bytes: &[u8]) -> Vec<u8> {
    let mut tag: Vec<u8> = Vec::new();
    tag.extend(b"TX");
    tag.extend(bytes);
    tag
  }

  /// Estimates the byte size of the transaction when signed and sent
  pub(crate) fn estimate_size(&self) -> Result<u64, Error> {
    Ok(self.encode()?.len() as u64 + SIGNED_OVERHEAD_BYTES)
  }

  fn with_signature(&self, signature: Signature, signer: &Address) -> Result<SignedTransaction, Error> {
    Ok(SignedTransaction {
      logic_sig: None,
      multisig_sig: None,
      auth_address: auth_address_for(&self.header.sender, signer),
      signature: Some(signature),
      transaction: self.to_raw()?,
      txn_id: self.id()?,
    })
  }

  /// Wrap this transaction with a multisig record; `signer` is the multisig
  /// address and decides whether an auth address is recorded.
  pub(crate) fn with_multisig(&self, multisig_sig: MultisigSig, signer: &Address) -> Result<SignedTransaction, Error> {
    Ok(SignedTransaction {
      logic_sig: None,
      multisig_sig: Some(multisig_sig),
      auth_address: auth_address_for(&self.header.sender, signer),
      signature: None,
      transaction: self.to_raw()?,
      txn_id: self.id()?,
    })
  }

  // Convert `Transaction` to the encodable `RawTransaction`, eliding every
  // default-valued field. `snd`, `gh` and `type` are always emitted, as are
  // `sp` and `spmsg` on state proof transactions.
  fn to_raw(&self) -> Result<RawTransaction, Error> {
    let mut raw = RawTransaction::default();

    raw.sender = Some(ByteBuf::from(self.header.sender.to_vec()));
    raw.genesis_hash = Some(ByteBuf::from(self.header.genesis_hash.to_vec()));
    raw.tx_type = Some(self.tx_type());
    raw.fee = elide_u64(self.header.fee);
    raw.first_valid = elide_u64(self.header.first_valid);
    raw.last_valid = elide_u64(self.header.last_valid);
    raw.genesis_id = elide_str(&self.header.genesis_id);
    raw.note = self.header.note.as_ref().and_then(|note| elide_bytes(note));
    raw.group = self.header.group.map(|group| ByteBuf::from(group.to_vec()));
    raw.lease = self.header.lease.map(|lease| ByteBuf::from(lease.to_vec()));
    raw.rekey_to = self.header.rekey_to.map(|rekey| ByteBuf::from(rekey.to_vec()));

    match &self.payload {
      TxnPayload::Payment(payment) => {
        raw.receiver = elide_address(&payment.receiver);
        raw.amount = elide_u64(payment.amount);
        raw.close_remainder_to = payment.close_remainder_to.map(|close| ByteBuf::from(close.to_vec()));
      }

      TxnPayload::KeyReg(key_reg) => {
        raw.votekey = key_reg.vote_pk.map(|key| ByteBuf::from(key.to_vec()));
        raw.selkey = key_reg.selection_pk.map(|key| ByteBuf::from(key.to_vec()));
        raw.sprfkey = key_reg.state_proof_pk.map(|key| ByteBuf::from(key.to_vec()));
        raw.votefst = key_reg.vote_first;
        raw.votelst = key_reg.vote_last;
        raw.votekd = key_reg.vote_key_dilution;
        raw.non_participation = elide_bool(key_reg.non_participation);
      }

      TxnPayload::AssetConfig(config) => {
        raw.config_asset = elide_u64(config.asset_id);
        raw.asset_params = elide_asset_params(config);
      }

      TxnPayload::AssetTransfer(transfer) => {
        raw.asset_amount = elide_u64(transfer.amount);
        raw.asset_receiver = elide_address(&transfer.receiver);
        raw.asset_sender = transfer.sender.map(|sender| ByteBuf::from(sender.to_vec()));
        raw.asset_close_to = transfer.close_remainder_to.map(|close| ByteBuf::from(close.to_vec()));
        raw.xfer_asset = elide_u64(transfer.asset_id);
      }

      TxnPayload::AssetFreeze(freeze) => {
        raw.freeze_asset = elide_u64(freeze.asset_id);
        raw.freeze_account = elide_address(&freeze.freeze_account);
        raw.asset_frozen = elide_bool(freeze.frozen);
      }

      TxnPayload::AppCall(app_call) => {
        raw.app_id = elide_u64(app_call.app_id);
        raw.on_complete = elide_u64(app_call.on_complete);
        if !app_call.app_args.is_empty() {
          raw.app_args = Some(app_call.app_args.iter().map(|arg| ByteBuf::from(arg.clone())).collect());
        }
        if !app_call.accounts.is_empty() {
          raw.app_accounts = Some(
            app_call.accounts.iter().map(|account| ByteBuf::from(account.to_vec())).collect(),
          );
        }
        if !app_call.foreign_apps.is_empty() {
          raw.foreign_apps = Some(app_call.foreign_apps.clone());
        }
        if !app_call.foreign_assets.is_empty() {
          raw.foreign_assets = Some(app_call.foreign_assets.clone());
        }
        if !app_call.boxes.is_empty() {
          raw.boxes = Some(encode_box_references(
            &app_call.boxes,
            &app_call.foreign_apps,
            app_call.app_id,
          )?);
        }
        raw.approval_program = elide_bytes(&app_call.approval_program);
        raw.clear_program = elide_bytes(&app_call.clear_program);
        raw.local_schema = elide_schema(app_call.local_num_uints, app_call.local_num_byte_slices);
        raw.global_schema = elide_schema(app_call.global_num_uints, app_call.global_num_byte_slices);
        raw.extra_pages = elide_u64(app_call.extra_pages);
      }

      TxnPayload::StateProof(state_proof) => {
        raw.state_proof_type = elide_u64(state_proof.state_proof_type);
        // sp and spmsg are always present on the wire, even when empty
        raw.state_proof = Some(ByteBuf::from(state_proof.state_proof.clone()));
        raw.state_proof_message = Some(ByteBuf::from(state_proof.message.clone()));
      }
    }

    Ok(raw)
  }

  // Rebuild a `Transaction` from its wire record, filling elided defaults
  // back in and re-checking the construction invariants.
  fn from_raw(raw: RawTransaction) -> Result<Transaction, Error> {
    let tx_type = match raw.tx_type {
      Some(tx_type) => tx_type,
      None => return Err(AlgorandTxnError::MissingField("type".into()))?,
    };

    let genesis_hash = match raw.genesis_hash {
      Some(hash) => required_digest("gh", &hash)?,
      None => return Err(AlgorandTxnError::MissingField("gh".into()))?,
    };

    let header = TransactionHeader {
      sender: address_or_zero("snd", raw.sender.as_ref())?,
      fee: raw.fee.unwrap_or(0),
      first_valid: raw.first_valid.unwrap_or(0),
      last_valid: raw.last_valid.unwrap_or(0),
      note: raw.note.as_ref().map(|note| note.to_vec()).filter(|note| !note.is_empty()),
      genesis_id: raw.genesis_id.unwrap_or_default(),
      genesis_hash,
      group: optional_digest("grp", raw.group.as_ref())?,
      lease: optional_digest("lx", raw.lease.as_ref())?,
      rekey_to: optional_address("rekey", raw.rekey_to.as_ref())?,
    };

    let payload = match tx_type {
      TxType::Payment => TxnPayload::Payment(PaymentParams {
        receiver: address_or_zero("rcv", raw.receiver.as_ref())?,
        amount: raw.amount.unwrap_or(0),
        close_remainder_to: optional_address("close", raw.close_remainder_to.as_ref())?,
      }),

      TxType::KeyReg => {
        let key_reg = KeyRegParams {
          vote_pk: optional_fixed_32("votekey", raw.votekey.as_ref())?,
          selection_pk: optional_fixed_32("selkey", raw.selkey.as_ref())?,
          state_proof_pk: optional_fixed_64("sprfkey", raw.sprfkey.as_ref())?,
          vote_first: raw.votefst,
          vote_last: raw.votelst,
          vote_key_dilution: raw.votekd,
          non_participation: raw.non_participation.unwrap_or(false),
        };
        key_reg.validate()?;
        TxnPayload::KeyReg(key_reg)
      }

      TxType::AssetConfig => {
        let params = raw.asset_params.unwrap_or_default();
        TxnPayload::AssetConfig(AssetConfigParams {
          asset_id: raw.config_asset.unwrap_or(0),
          total: params.total.unwrap_or(0),
          decimals: params.decimals.unwrap_or(0),
          default_frozen: params.default_frozen.unwrap_or(false),
          manager: optional_address("apar.m", params.manager.as_ref())?,
          reserve: optional_address("apar.r", params.reserve.as_ref())?,
          freeze: optional_address("apar.f", params.freeze.as_ref())?,
          clawback: optional_address("apar.c", params.clawback.as_ref())?,
          unit_name: params.unit_name.unwrap_or_default(),
          asset_name: params.asset_name.unwrap_or_default(),
          url: params.url.unwrap_or_default(),
          metadata_hash: optional_digest("apar.am", params.metadata_hash.as_ref())?,
        })
      }

      TxType::AssetTransfer => TxnPayload::AssetTransfer(AssetTransferParams {
        asset_id: raw.xfer_asset.unwrap_or(0),
        amount: raw.asset_amount.unwrap_or(0),
        sender: optional_address("asnd", raw.asset_sender.as_ref())?,
        receiver: address_or_zero("arcv", raw.asset_receiver.as_ref())?,
        close_remainder_to: optional_address("aclose", raw.asset_close_to.as_ref())?,
      }),

      TxType::AssetFreeze => TxnPayload::AssetFreeze(AssetFreezeParams {
        asset_id: raw.freeze_asset.unwrap_or(0),
        freeze_account: address_or_zero("fadd", raw.freeze_account.as_ref())?,
        frozen: raw.asset_frozen.unwrap_or(false),
      }),

      TxType::AppCall => {
        let foreign_apps = raw.foreign_apps.unwrap_or_default();
        let mut accounts = Vec::new();
        for account in raw.app_accounts.unwrap_or_default() {
          accounts.push(address_or_zero("apat", Some(&account))?);
        }
        let local_schema = raw.local_schema.unwrap_or_default();
        let global_schema = raw.global_schema.unwrap_or_default();

        TxnPayload::AppCall(AppCallParams {
          app_id: raw.app_id.unwrap_or(0),
          on_complete: raw.on_complete.unwrap_or(0),
          app_args: raw
            .app_args
            .unwrap_or_default()
            .into_iter()
            .map(|arg| arg.into_vec())
            .collect(),
          accounts,
          boxes: decode_box_references(&raw.boxes.unwrap_or_default(), &foreign_apps)?,
          foreign_apps,
          foreign_assets: raw.foreign_assets.unwrap_or_default(),
          approval_program: raw.approval_program.map(|program| program.into_vec()).unwrap_or_default(),
          clear_program: raw.clear_program.map(|program| program.into_vec()).unwrap_or_default(),
          local_num_uints: local_schema.num_uints.unwrap_or(0),
          local_num_byte_slices: local_schema.num_byte_slices.unwrap_or(0),
          global_num_uints: global_schema.num_uints.unwrap_or(0),
          global_num_byte_slices: global_schema.num_byte_slices.unwrap_or(0),
          extra_pages: raw.extra_pages.unwrap_or(0),
        })
      }

      TxType::StateProof => TxnPayload::StateProof(StateProofParams {
        state_proof_type: raw.state_proof_type.unwrap_or(0),
        state_proof: raw.state_proof.map(|proof| proof.into_vec()).unwrap_or_default(),
        message: raw.state_proof_message.map(|message| message.into_vec()).unwrap_or_default(),
      }),
    };

    Ok(Transaction { header, payload })
  }
}

fn auth_address_for(sender: &AddressBytes, signer: &Address) -> Option<ByteBuf> {
  if signer.as_bytes() != &sender[..] {
    Some(ByteBuf::from(signer.to_vec()))
  } else {
    None
  }
}

fn elide_u64(value: u64) -> Option<u64> {
  if value == 0 { None } else { Some(value) }
}

fn elide_bool(value: bool) -> Option<bool> {
  if value { Some(true) } else { None }
}

fn elide_str(value: &str) -> Option<String> {
  if value.is_empty() { None } else { Some(value.into()) }
}

fn elide_bytes(value: &[u8]) -> Option<ByteBuf> {
  if value.is_empty() { None } else { Some(ByteBuf::from(value.to_vec())) }
}

fn elide_address(address: &AddressBytes) -> Option<ByteBuf> {
  if address == &[0; ADDRESS_BYTES_LENGTH] {
    None
  } else {
    Some(ByteBuf::from(address.to_vec()))
  }
}

fn elide_schema(num_uints: u64, num_byte_slices: u64) -> Option<StateSchema> {
  if num_uints == 0 && num_byte_slices == 0 {
    None
  } else {
    Some(StateSchema {
      num_byte_slices: elide_u64(num_byte_slices),
      num_uints: elide_u64(num_uints),
    })
  }
}

fn elide_asset_params(config: &AssetConfigParams) -> Option<AssetParams> {
  let params = AssetParams {
    metadata_hash: config.metadata_hash.map(|hash| ByteBuf::from(hash.to_vec())),
    asset_name: elide_str(&config.asset_name),
    url: elide_str(&config.url),
    clawback: config.clawback.map(|clawback| ByteBuf::from(clawback.to_vec())),
    decimals: if config.decimals == 0 { None } else { Some(config.decimals) },
    default_frozen: elide_bool(config.default_frozen),
    freeze: config.freeze.map(|freeze| ByteBuf::from(freeze.to_vec())),
    manager: config.manager.map(|manager| ByteBuf::from(manager.to_vec())),
    reserve: config.reserve.map(|reserve| ByteBuf::from(reserve.to_vec())),
    total: elide_u64(config.total),
    unit_name: elide_str(&config.unit_name),
  };

  // an asset destroy carries no parameters at all
  if params == AssetParams::default() { None } else { Some(params) }
}

fn required_digest(field: &str, value: &ByteBuf) -> Result<[u8; DIGEST_BYTE_LENGTH], Error> {
  if value.len() != DIGEST_BYTE_LENGTH {
    return Err(AlgorandTxnError::WrongFieldLength(field.into(), DIGEST_BYTE_LENGTH, value.len()))?;
  }
  Ok((&value[..]).to_array())
}

fn optional_digest(field: &str, value: Option<&ByteBuf>) -> Result<Option<[u8; DIGEST_BYTE_LENGTH]>, Error> {
  match value {
    None => Ok(None),
    Some(bytes) => {
      let digest = required_digest(field, bytes)?;
      if digest == [0; DIGEST_BYTE_LENGTH] {
        Ok(None)
      } else {
        Ok(Some(digest))
      }
    }
  }
}

fn address_or_zero(field: &str, value: Option<&ByteBuf>) -> Result<AddressBytes, Error> {
  match value {
    None => Ok([0; ADDRESS_BYTES_LENGTH]),
    Some(bytes) => required_digest(field, bytes),
  }
}

// optional address slots reject the zero address; absent means unset
fn optional_address(field: &str, value: Option<&ByteBuf>) -> Result<Option<AddressBytes>, Error> {
  match value {
    None => Ok(None),
    Some(bytes) => {
      let address = required_digest(field, bytes)?;
      if address == [0; ADDRESS_BYTES_LENGTH] {
        return Err(AlgorandTxnError::ZeroAddress(field.into()))?;
      }
      Ok(Some(address))
    }
  }
}

fn optional_fixed_32(field: &str, value: Option<&ByteBuf>) -> Result<Option<[u8; 32]>, Error> {
  match value {
    None => Ok(None),
    Some(bytes) => Ok(Some(required_digest(field, bytes)?)),
  }
}

fn optional_fixed_64(field: &str, value: Option<&ByteBuf>) -> Result<Option<[u8; STATE_PROOF_KEY_BYTE_LENGTH]>, Error> {
  match value {
    None => Ok(None),
    Some(bytes) => {
      if bytes.len() != STATE_PROOF_KEY_BYTE_LENGTH {
        return Err(AlgorandTxnError::WrongFieldLength(field.into(), STATE_PROOF_KEY_BYTE_LENGTH, bytes.len()))?;
      }
      Ok(Some((&bytes[..]).to_array()))
    }
  }
}

// compute the textual transaction id straight from a wire record
fn raw_txn_id(raw_txn: &RawTransaction) -> Result<String, Error> {
  let bytes_to_sign = Transaction::with_encode_tag(&rmp_encode(raw_txn)?);
  let checksum = Sha512Trunc256::default().chain(bytes_to_sign).result();
  Ok(base32_encode(checksum.as_ref()))
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MultisigSubsig {
  #[serde(rename = "pk")]
  pub key: ByteBuf, // ed25519 public key

  #[serde(rename = "s", default, skip_serializing_if = "Option::is_none")]
  pub signature: Option<Signature>,
}

/// MultisigSig holds multiple Subsigs, as well as threshold and version info
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MultisigSig {
  #[serde(rename = "subsig")]
  pub subsigs: Vec<MultisigSubsig>,

  #[serde(rename = "thr")]
  pub threshold: u8,

  #[serde(rename = "v")]
  pub version: u8,
}

/// Logic signature record. Programs are assembled and validated elsewhere;
/// the record is carried through decode and re-encode untouched.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct LogicSig {
  // NOTE: fields stay in the lexicographic order of their wire keys
  #[serde(rename = "arg", default, skip_serializing_if = "Option::is_none")]
  pub args: Option<Vec<ByteBuf>>,

  #[serde(rename = "l")]
  pub logic: ByteBuf,

  #[serde(rename = "msig", default, skip_serializing_if = "Option::is_none")]
  pub multisig_sig: Option<MultisigSig>,

  #[serde(rename = "sig", default, skip_serializing_if = "Option::is_none")]
  pub signature: Option<Signature>,
}

/// SignedTransaction wraps a transaction and its signature, multisig or
/// logic signature. The rmp encoding of this struct is suitable to broadcast
/// on the network
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SignedTransaction {
  // NOTE: fields stay in the lexicographic order of their wire keys
  #[serde(rename = "lsig", default, skip_serializing_if = "Option::is_none")]
  pub logic_sig: Option<LogicSig>,

  #[serde(rename = "msig", default, skip_serializing_if = "Option::is_none")]
  pub multisig_sig: Option<MultisigSig>,

  /// Public key of the account that actually signed, recorded only when it
  /// differs from the transaction sender (after a rekey, or for a multisig
  /// sender).
  #[serde(rename = "sgnr", default, skip_serializing_if = "Option::is_none")]
  pub auth_address: Option<ByteBuf>,

  #[serde(rename = "sig", default, skip_serializing_if = "Option::is_none")]
  pub signature: Option<Signature>,

  #[serde(rename = "txn")]
  transaction: RawTransaction,

  #[serde(skip)]
  pub txn_id: String,
}

impl SignedTransaction {
  pub fn encode(&self) -> Result<Vec<u8>, Error> {
    Ok(rmp_encode(self)?)
  }

  pub fn decode(buffer: &[u8]) -> Result<SignedTransaction, Error> {
    let mut signed: SignedTransaction = rmp_decode(buffer)?;
    signed.txn_id = raw_txn_id(&signed.transaction)?;
    Ok(signed)
  }

  /// Rebuild the wrapped transaction, re-running the construction checks
  pub fn transaction(&self) -> Result<Transaction, Error> {
    Transaction::from_raw(self.transaction.clone())
  }
}

#[cfg(test)]
mod tests;
