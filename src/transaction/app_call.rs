use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;
use crate::accounts::AddressBytes;
use crate::errors::{AlgorandTxnError, Error};

/// Schema slot counts for an application's local or global state: the
/// canonical `apls`/`apgs` sub-record.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct StateSchema {
  // NOTE: fields must stay in the lexicographic order of their wire keys.
  #[serde(rename = "nbs", default, skip_serializing_if = "Option::is_none")]
  pub num_byte_slices: Option<u64>,

  #[serde(rename = "nui", default, skip_serializing_if = "Option::is_none")]
  pub num_uints: Option<u64>,
}

/// A box reference as it travels on the wire: `i` is 0 for the called app
/// itself, otherwise the 1-based index of the owning app within the
/// transaction's foreign apps array.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct RawBoxReference {
  #[serde(rename = "i", default, skip_serializing_if = "Option::is_none")]
  pub index: Option<u64>,

  #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
  pub name: Option<ByteBuf>,
}

/// A box reference as callers provide it: the id of the app owning the box
/// (0 for the called app) and the box name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoxReference {
  pub app_index: u64,
  pub name: Vec<u8>,
}

/// Captures the fields of an application call.
///
/// `app_id` 0 creates a new application from the approval and clear
/// programs; `on_complete` selects what happens to the caller's local state
/// when the call succeeds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppCallParams {
  pub app_id: u64,
  pub on_complete: u64,
  pub app_args: Vec<Vec<u8>>,
  pub accounts: Vec<AddressBytes>,
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

/// Rewrite caller box references into their wire form. A reference to the
/// called app (by 0 or by its actual id) becomes index 0; any other app id
/// must appear in `foreign_apps` and becomes its 1-based position there.
pub(crate) fn encode_box_references(
  boxes: &[BoxReference],
  foreign_apps: &[u64],
  app_id: u64,
) -> Result<Vec<RawBoxReference>, Error> {
  let mut raw_boxes = Vec::with_capacity(boxes.len());

  for box_reference in boxes {
    let index = if box_reference.app_index == 0 || box_reference.app_index == app_id {
      0
    } else {
      match foreign_apps.iter().position(|&id| id == box_reference.app_index) {
        Some(position) => (position as u64) + 1,
        None => return Err(AlgorandTxnError::ForeignAppNotFound(box_reference.app_index))?,
      }
    };

    raw_boxes.push(RawBoxReference {
      index: if index == 0 { None } else { Some(index) },
      name: if box_reference.name.is_empty() {
        None
      } else {
        Some(ByteBuf::from(box_reference.name.clone()))
      },
    });
  }

  Ok(raw_boxes)
}

/// Invert the wire rewriting. Index 0 always decodes to `app_index` 0 even
/// when the called app id is known, so a decoded transaction re-encodes to
/// the same bytes.
pub(crate) fn decode_box_references(
  raw_boxes: &[RawBoxReference],
  foreign_apps: &[u64],
) -> Result<Vec<BoxReference>, Error> {
  let mut boxes = Vec::with_capacity(raw_boxes.len());

  for raw_box in raw_boxes {
    let index = raw_box.index.unwrap_or(0);
    let app_index = if index == 0 {
      0
    } else if (index as usize) <= foreign_apps.len() {
      foreign_apps[(index as usize) - 1]
    } else {
      return Err(AlgorandTxnError::BoxIndexOutOfRange(index, foreign_apps.len()))?;
    };

    boxes.push(BoxReference {
      app_index,
      name: raw_box.name.as_ref().map(|name| name.to_vec()).unwrap_or_default(),
    });
  }

  Ok(boxes)
}

#[cfg(test)]
mod tests {
  use super::{decode_box_references, encode_box_references, BoxReference};

  fn named_box(app_index: u64, name: &str) -> BoxReference {
    BoxReference { app_index, name: name.as_bytes().to_vec() }
  }

  #[test]
  fn foreign_app_becomes_one_based_index() {
    let boxes = [named_box(100, "x"), named_box(0, "y")];

    let raw = encode_box_references(&boxes, &[100, 200], 1).unwrap();

    assert_eq!(raw[0].index, Some(1));
    assert_eq!(raw[1].index, None);
  }

  #[test]
  fn called_app_id_normalizes_to_zero_on_round_trip() {
    let boxes = [named_box(42, "self box")];

    let raw = encode_box_references(&boxes, &[], 42).unwrap();
    assert_eq!(raw[0].index, None);

    let decoded = decode_box_references(&raw, &[]).unwrap();
    assert_eq!(decoded[0].app_index, 0);
    assert_eq!(decoded[0].name, b"self box".to_vec());
  }

  #[test]
  fn unknown_app_id_is_rejected() {
    let boxes = [named_box(300, "x")];

    assert!(encode_box_references(&boxes, &[100, 200], 1).is_err());
  }

  #[test]
  fn out_of_range_index_is_rejected() {
    let raw = encode_box_references(&[named_box(200, "x")], &[100, 200], 1).unwrap();

    assert!(decode_box_references(&raw, &[100]).is_err());
  }
}
