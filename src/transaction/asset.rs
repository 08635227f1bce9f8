use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;
use crate::accounts::AddressBytes;
use super::tx_type::DIGEST_BYTE_LENGTH;

/// AssetParams describes the parameters of an asset: the canonical `apar`
/// sub-record of an asset config transaction.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AssetParams {
  // NOTE: fields must stay in the lexicographic order of their wire keys.

  /// metadata_hash is a commitment to some unspecified asset metadata,
  /// 32 bytes when present
  #[serde(rename = "am", default, skip_serializing_if = "Option::is_none")]
  pub metadata_hash: Option<ByteBuf>,

  /// asset_name is a hint for the name of the asset
  #[serde(rename = "an", default, skip_serializing_if = "Option::is_none")]
  pub asset_name: Option<String>,

  /// url is a hint for where more information about the asset can be found
  #[serde(rename = "au", default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,

  /// clawback specifies an account that is allowed to take units
  /// of this asset from any account.
  #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
  pub clawback: Option<ByteBuf>,

  /// decimals specifies the number of digits to display after the decimal
  /// place when displaying this asset
  #[serde(rename = "dc", default, skip_serializing_if = "Option::is_none")]
  pub decimals: Option<u32>,

  /// default_frozen specifies whether slots for this asset
  /// in user accounts are frozen by default or not.
  #[serde(rename = "df", default, skip_serializing_if = "Option::is_none")]
  pub default_frozen: Option<bool>,

  /// freeze specifies an account that is allowed to change the frozen state
  /// of holdings of this asset.
  #[serde(rename = "f", default, skip_serializing_if = "Option::is_none")]
  pub freeze: Option<ByteBuf>,

  /// manager specifies an account that is allowed to change the
  /// non-zero addresses in this AssetParams
  #[serde(rename = "m", default, skip_serializing_if = "Option::is_none")]
  pub manager: Option<ByteBuf>,

  /// reserve specifies an account whose holdings of this asset should
  /// be reported as "not minted".
  #[serde(rename = "r", default, skip_serializing_if = "Option::is_none")]
  pub reserve: Option<ByteBuf>,

  /// total specifies the total number of units of this asset created
  #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
  pub total: Option<u64>,

  /// unit_name is a hint for the name of a unit of this asset
  #[serde(rename = "un", default, skip_serializing_if = "Option::is_none")]
  pub unit_name: Option<String>,
}

/// Captures the fields used for asset allocation, re-configuration
/// and destruction.
///
/// `asset_id` 0 allocates a new asset; destruction is a nonzero id with
/// every parameter left at its default.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetConfigParams {
  pub asset_id: u64,
  pub total: u64,
  pub decimals: u32,
  pub default_frozen: bool,
  pub manager: Option<AddressBytes>,
  pub reserve: Option<AddressBytes>,
  pub freeze: Option<AddressBytes>,
  pub clawback: Option<AddressBytes>,
  pub unit_name: String,
  pub asset_name: String,
  pub url: String,
  pub metadata_hash: Option<[u8; DIGEST_BYTE_LENGTH]>,
}

/// Captures the fields used to move asset units between accounts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetTransferParams {
  pub asset_id: u64,
  pub amount: u64,

  /// For a clawback revocation, the account the units are pulled from.
  /// The transaction sender must then be the asset's clawback account.
  pub sender: Option<AddressBytes>,

  pub receiver: AddressBytes,

  /// When set, the sender's holding of the asset is closed out to this
  /// address after the transfer.
  pub close_remainder_to: Option<AddressBytes>,
}

/// Captures the fields used to freeze or unfreeze an asset holding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetFreezeParams {
  pub asset_id: u64,
  pub freeze_account: AddressBytes,
  pub frozen: bool,
}
