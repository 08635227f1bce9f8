// Unit tests for the transaction module

use super::tx_type::RawTransaction;
use super::{
  AppCallTransactionInput, AssetConfigTransactionInput, AssetFreezeTransactionInput,
  AssetTransferTransactionInput, BoxReference, KeyRegTransactionInput, LogicSig,
  PaymentTransactionInput, SignedTransaction, StateProofTransactionInput, SuggestedParams,
  Transaction, TxType, TxnPayload,
};
use crate::accounts::{verify_bytes, Account, Address};
use crate::encoding::{base64_encode, rmp_decode, rmp_encode};
use crate::errors::AlgorandTxnError;

// 32 bytes of 0x01
const GENESIS_HASH: &str = "AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE=";

fn flat_params() -> SuggestedParams {
  SuggestedParams {
    fee: 1000,
    min_fee: 1000,
    flat_fee: true,
    first_valid: 1,
    last_valid: 1001,
    genesis_id: "testnet-v1.0".into(),
    genesis_hash: GENESIS_HASH.into(),
  }
}

fn payment_input(from: &Address, to: &Address) -> PaymentTransactionInput {
  PaymentTransactionInput {
    from: from.to_string(),
    params: flat_params(),
    note: None,
    lease: None,
    rekey_to: None,
    to: to.to_string(),
    amount: 1000,
    close_remainder_to: None,
  }
}

fn keyreg_input(from: &Address) -> KeyRegTransactionInput {
  KeyRegTransactionInput {
    from: from.to_string(),
    params: flat_params(),
    note: None,
    lease: None,
    rekey_to: None,
    vote_pk: None,
    selection_pk: None,
    state_proof_pk: None,
    vote_first: None,
    vote_last: None,
    vote_key_dilution: None,
    non_participation: false,
  }
}

fn asset_config_input(from: &Address) -> AssetConfigTransactionInput {
  AssetConfigTransactionInput {
    from: from.to_string(),
    params: flat_params(),
    note: None,
    lease: None,
    rekey_to: None,
    asset_id: 0,
    total: 0,
    decimals: 0,
    default_frozen: false,
    manager: None,
    reserve: None,
    freeze: None,
    clawback: None,
    unit_name: String::new(),
    asset_name: String::new(),
    url: String::new(),
    metadata_hash: None,
  }
}

fn app_call_input(from: &Address) -> AppCallTransactionInput {
  AppCallTransactionInput {
    from: from.to_string(),
    params: flat_params(),
    note: None,
    lease: None,
    rekey_to: None,
    app_id: 0,
    on_complete: 0,
    app_args: Vec::new(),
    accounts: Vec::new(),
    foreign_apps: Vec::new(),
    foreign_assets: Vec::new(),
    boxes: Vec::new(),
    approval_program: Vec::new(),
    clear_program: Vec::new(),
    local_num_uints: 0,
    local_num_byte_slices: 0,
    global_num_uints: 0,
    global_num_byte_slices: 0,
    extra_pages: 0,
  }
}

// position of a msgpack fixstr key within encoded bytes
fn key_position(encoded: &[u8], key: &str) -> Option<usize> {
  let mut pattern = vec![0xa0u8 + key.len() as u8];
  pattern.extend_from_slice(key.as_bytes());
  encoded.windows(pattern.len()).position(|window| window == &pattern[..])
}

fn assert_key_order(encoded: &[u8], keys: &[&str]) {
  let mut last_position = None;
  for key in keys {
    let position = key_position(encoded, key);
    assert!(position.is_some(), "key {} missing from encoding", key);
    assert!(position > last_position, "key {} out of order", key);
    last_position = position;
  }
}

#[test]
fn payment_encodes_canonically() {
  let to = Address::from_fixed_bytes([2; 32]);
  let txn = Transaction::from_input(payment_input(&Address::zero(), &to)).unwrap();

  let encoded = txn.encode().unwrap();

  // nine keys, lexicographically ordered; the zero-address sender still appears
  assert_eq!(encoded[0], 0x89);
  assert_key_order(&encoded, &["amt", "fee", "fv", "gen", "gh", "lv", "rcv", "snd", "type"]);
  assert!(key_position(&encoded, "note").is_none());
  assert!(key_position(&encoded, "grp").is_none());

  let txn_id = txn.id().unwrap();
  assert_eq!(txn_id.len(), 52);
  assert_eq!(txn_id, txn.id().unwrap());
  assert_eq!(txn.raw_id().unwrap().len(), 32);
}

#[test]
fn payment_round_trips_through_wire_form() {
  let sender = Address::from_fixed_bytes([5; 32]);
  let to = Address::from_fixed_bytes([2; 32]);
  let close = Address::from_fixed_bytes([3; 32]);
  let rekey = Address::from_fixed_bytes([4; 32]);

  let mut input = payment_input(&sender, &to);
  input.note = Some(b"expense 17".to_vec());
  input.lease = Some(vec![9; 32]);
  input.rekey_to = Some(rekey.to_string());
  input.close_remainder_to = Some(close.to_string());
  let txn = Transaction::from_input(input).unwrap();

  let decoded = Transaction::from_encoded(&txn.encode().unwrap()).unwrap();

  assert_eq!(decoded, txn);
  assert_eq!(decoded.encode().unwrap(), txn.encode().unwrap());
  assert_eq!(decoded.id().unwrap(), txn.id().unwrap());
}

#[test]
fn empty_note_encodes_like_no_note() {
  let to = Address::from_fixed_bytes([2; 32]);

  let with_empty = {
    let mut input = payment_input(&Address::zero(), &to);
    input.note = Some(Vec::new());
    Transaction::from_input(input).unwrap()
  };
  let without = Transaction::from_input(payment_input(&Address::zero(), &to)).unwrap();

  assert_eq!(with_empty.encode().unwrap(), without.encode().unwrap());
}

#[test]
fn all_zero_lease_elides_to_absent() {
  let to = Address::from_fixed_bytes([2; 32]);

  let mut input = payment_input(&Address::zero(), &to);
  input.lease = Some(vec![0; 32]);
  let txn = Transaction::from_input(input).unwrap();

  assert!(key_position(&txn.encode().unwrap(), "lx").is_none());
  assert_eq!(
    txn.encode().unwrap(),
    Transaction::from_input(payment_input(&Address::zero(), &to)).unwrap().encode().unwrap(),
  );
}

#[test]
fn wrong_length_fixed_fields_are_rejected() {
  let to = Address::from_fixed_bytes([2; 32]);

  let mut short_lease = payment_input(&Address::zero(), &to);
  short_lease.lease = Some(vec![1; 31]);
  assert!(Transaction::from_input(short_lease).is_err());

  let mut bad_genesis = payment_input(&Address::zero(), &to);
  bad_genesis.params.genesis_hash = base64_encode(&[1u8; 16]);
  assert!(Transaction::from_input(bad_genesis).is_err());

  let mut long_metadata = asset_config_input(&Address::zero());
  long_metadata.metadata_hash = Some(vec![1; 33]);
  assert!(Transaction::from_input(long_metadata).is_err());
}

#[test]
fn zero_address_in_optional_slots_is_rejected() {
  let to = Address::from_fixed_bytes([2; 32]);
  let zero = Address::zero().to_string();

  let mut zero_rekey = payment_input(&Address::zero(), &to);
  zero_rekey.rekey_to = Some(zero.clone());
  let error = Transaction::from_input(zero_rekey).unwrap_err();
  match error.downcast_ref::<AlgorandTxnError>() {
    Some(AlgorandTxnError::ZeroAddress(_)) => {}
    other => panic!("expected zero address error, got {:?}", other),
  }

  let mut zero_close = payment_input(&Address::zero(), &to);
  zero_close.close_remainder_to = Some(zero.clone());
  assert!(Transaction::from_input(zero_close).is_err());

  let mut zero_manager = asset_config_input(&Address::zero());
  zero_manager.manager = Some(zero);
  assert!(Transaction::from_input(zero_manager).is_err());
}

#[test]
fn group_can_be_set_exactly_once_and_changes_the_id() {
  let to = Address::from_fixed_bytes([2; 32]);
  let mut txn = Transaction::from_input(payment_input(&Address::zero(), &to)).unwrap();

  let ungrouped_id = txn.id().unwrap();
  txn.set_group([7; 32]).unwrap();

  assert_ne!(txn.id().unwrap(), ungrouped_id);
  assert!(key_position(&txn.encode().unwrap(), "grp").is_some());

  let error = txn.set_group([8; 32]).unwrap_err();
  match error.downcast_ref::<AlgorandTxnError>() {
    Some(AlgorandTxnError::GroupAlreadySet) => {}
    other => panic!("expected group already set error, got {:?}", other),
  }
}

#[test]
fn sign_produces_a_verifiable_envelope() {
  let account = Account::generate();
  let to = Address::from_fixed_bytes([2; 32]);
  let txn = Transaction::from_input(payment_input(&account.address, &to)).unwrap();

  let signed = txn.sign(&account).unwrap();
  let signature = signed.signature.as_ref().unwrap();

  assert!(verify_bytes(&txn.bytes_to_sign().unwrap(), signature, &account.address));
  assert_eq!(signed.txn_id, txn.id().unwrap());
  // signer is the sender, so no auth address
  assert!(signed.auth_address.is_none());

  let decoded = SignedTransaction::decode(&signed.encode().unwrap()).unwrap();
  assert_eq!(decoded, signed);
  assert_eq!(decoded.txn_id, signed.txn_id);
  assert_eq!(decoded.transaction().unwrap(), txn);
}

#[test]
fn auth_address_present_when_signer_is_not_the_sender() {
  let sender = Account::generate();
  let signer = Account::generate();
  let to = Address::from_fixed_bytes([2; 32]);
  let txn = Transaction::from_input(payment_input(&sender.address, &to)).unwrap();

  let signed = txn.sign(&signer).unwrap();

  assert_eq!(signed.auth_address.as_ref().map(|sgnr| &sgnr[..]), Some(signer.address.as_bytes()));
}

#[test]
fn attach_signature_matches_direct_signing() {
  let account = Account::generate();
  let to = Address::from_fixed_bytes([2; 32]);
  let txn = Transaction::from_input(payment_input(&account.address, &to)).unwrap();

  let raw_signature = txn.raw_sign(&account).unwrap();
  let attached = txn.attach_signature(raw_signature.to_bytes().as_ref(), &account.address).unwrap();

  assert_eq!(attached, txn.sign(&account).unwrap());
  assert!(txn.attach_signature(&raw_signature.to_bytes()[..63], &account.address).is_err());
}

#[test]
fn per_byte_fee_scales_with_estimated_size() {
  let to = Address::from_fixed_bytes([2; 32]);

  let mut input = payment_input(&Address::zero(), &to);
  input.params.flat_fee = false;
  input.params.fee = 10;
  input.params.min_fee = 1000;
  let txn = Transaction::from_input(input).unwrap();

  // the estimate ran with the per-byte fee in the fee field, so a flat-fee
  // twin carrying that value reproduces the measured encoding
  let mut twin_input = payment_input(&Address::zero(), &to);
  twin_input.params.fee = 10;
  let twin = Transaction::from_input(twin_input).unwrap();
  let estimated_size = twin.encode().unwrap().len() as u64 + 75;

  let expected = 10 * estimated_size;
  assert!(expected > 1000);
  assert_eq!(txn.header().fee, expected);
}

#[test]
fn per_byte_fee_clamps_up_to_the_minimum() {
  let to = Address::from_fixed_bytes([2; 32]);

  let mut input = payment_input(&Address::zero(), &to);
  input.params.flat_fee = false;
  input.params.fee = 0;
  input.params.min_fee = 1000;

  assert_eq!(Transaction::from_input(input).unwrap().header().fee, 1000);
}

#[test]
fn flat_fee_is_taken_verbatim() {
  let to = Address::from_fixed_bytes([2; 32]);

  let mut input = payment_input(&Address::zero(), &to);
  input.params.fee = 1;
  input.params.min_fee = 1000;

  // no clamp on flat fees
  assert_eq!(Transaction::from_input(input).unwrap().header().fee, 1);
}

#[test]
fn keyreg_offline_encodes_only_common_fields() {
  let txn = Transaction::from_input(keyreg_input(&Address::zero())).unwrap();

  let encoded = txn.encode().unwrap();

  assert_eq!(txn.tx_type(), TxType::KeyReg);
  assert_eq!(encoded[0], 0x87);
  assert_key_order(&encoded, &["fee", "fv", "gen", "gh", "lv", "snd", "type"]);
  assert!(key_position(&encoded, "votekey").is_none());
  assert!(key_position(&encoded, "nonpart").is_none());
}

#[test]
fn keyreg_online_round_trips() {
  let mut input = keyreg_input(&Address::zero());
  input.vote_pk = Some(base64_encode(&[1u8; 32]));
  input.selection_pk = Some(base64_encode(&[2u8; 32]));
  input.state_proof_pk = Some(base64_encode(&[3u8; 64]));
  input.vote_first = Some(10000);
  input.vote_last = Some(10111);
  input.vote_key_dilution = Some(11);
  let txn = Transaction::from_input(input).unwrap();

  let encoded = txn.encode().unwrap();
  assert_key_order(&encoded, &["selkey", "snd", "sprfkey", "type", "votefst", "votekd", "votekey", "votelst"]);

  assert_eq!(Transaction::from_encoded(&encoded).unwrap(), txn);
}

#[test]
fn keyreg_rejects_invalid_shapes() {
  // non-participation with a vote key
  let mut nonpart_with_key = keyreg_input(&Address::zero());
  nonpart_with_key.non_participation = true;
  nonpart_with_key.vote_pk = Some(base64_encode(&[1u8; 32]));
  let error = Transaction::from_input(nonpart_with_key).unwrap_err();
  match error.downcast_ref::<AlgorandTxnError>() {
    Some(AlgorandTxnError::InvalidKeyRegParams(_)) => {}
    other => panic!("expected keyreg validation error, got {:?}", other),
  }

  // online registration missing the dilution
  let mut missing_dilution = keyreg_input(&Address::zero());
  missing_dilution.vote_pk = Some(base64_encode(&[1u8; 32]));
  missing_dilution.selection_pk = Some(base64_encode(&[2u8; 32]));
  missing_dilution.vote_first = Some(1);
  missing_dilution.vote_last = Some(100);
  assert!(Transaction::from_input(missing_dilution).is_err());

  // a state proof key alone is not a valid registration
  let mut stray_state_proof_key = keyreg_input(&Address::zero());
  stray_state_proof_key.state_proof_pk = Some(base64_encode(&[3u8; 64]));
  assert!(Transaction::from_input(stray_state_proof_key).is_err());

  // pure non-participation is fine
  let mut nonpart = keyreg_input(&Address::zero());
  nonpart.non_participation = true;
  let txn = Transaction::from_input(nonpart).unwrap();
  assert!(key_position(&txn.encode().unwrap(), "nonpart").is_some());
  assert_eq!(Transaction::from_encoded(&txn.encode().unwrap()).unwrap(), txn);
}

#[test]
fn asset_create_encodes_params_submap() {
  let mut input = asset_config_input(&Address::zero());
  input.total = 1_000_000;
  input.decimals = 6;
  input.unit_name = "FOO".into();
  input.asset_name = "Foo Coin".into();
  let txn = Transaction::from_input(input).unwrap();

  let encoded = txn.encode().unwrap();

  // creation elides caid; the params sub-map holds an, dc, t, un in order
  assert!(key_position(&encoded, "caid").is_none());
  let apar_position = key_position(&encoded, "apar").unwrap();
  assert_eq!(encoded[apar_position + 5], 0x84);
  assert_key_order(&encoded, &["apar", "an", "dc", "t", "un", "fee"]);

  assert_eq!(Transaction::from_encoded(&encoded).unwrap(), txn);
}

#[test]
fn asset_reconfigure_and_destroy_round_trip() {
  let manager = Address::from_fixed_bytes([6; 32]);

  let mut reconfigure = asset_config_input(&Address::zero());
  reconfigure.asset_id = 1234;
  reconfigure.manager = Some(manager.to_string());
  let txn = Transaction::from_input(reconfigure).unwrap();
  let encoded = txn.encode().unwrap();
  assert!(key_position(&encoded, "caid").is_some());
  assert_eq!(Transaction::from_encoded(&encoded).unwrap(), txn);

  // destruction carries the id and no parameters at all
  let mut destroy = asset_config_input(&Address::zero());
  destroy.asset_id = 1234;
  let txn = Transaction::from_input(destroy).unwrap();
  let encoded = txn.encode().unwrap();
  assert!(key_position(&encoded, "apar").is_none());
  assert_eq!(Transaction::from_encoded(&encoded).unwrap(), txn);
}

#[test]
fn asset_transfer_round_trips() {
  let to = Address::from_fixed_bytes([2; 32]);
  let revoked = Address::from_fixed_bytes([3; 32]);
  let close = Address::from_fixed_bytes([4; 32]);

  let txn = Transaction::from_input(AssetTransferTransactionInput {
    from: Address::zero().to_string(),
    params: flat_params(),
    note: None,
    lease: None,
    rekey_to: None,
    asset_id: 77,
    amount: 500,
    to: to.to_string(),
    close_remainder_to: Some(close.to_string()),
    revocation_target: Some(revoked.to_string()),
  })
  .unwrap();

  let encoded = txn.encode().unwrap();
  assert_eq!(txn.tx_type(), TxType::AssetTransfer);
  assert_key_order(&encoded, &["aamt", "aclose", "arcv", "asnd", "fee", "xaid"]);
  assert_eq!(Transaction::from_encoded(&encoded).unwrap(), txn);
}

#[test]
fn asset_freeze_round_trips_and_elides_false() {
  let target = Address::from_fixed_bytes([2; 32]);

  let freeze = Transaction::from_input(AssetFreezeTransactionInput {
    from: Address::zero().to_string(),
    params: flat_params(),
    note: None,
    lease: None,
    rekey_to: None,
    asset_id: 77,
    freeze_target: target.to_string(),
    frozen: true,
  })
  .unwrap();
  let encoded = freeze.encode().unwrap();
  assert_key_order(&encoded, &["afrz", "fadd", "faid", "fee"]);
  assert_eq!(Transaction::from_encoded(&encoded).unwrap(), freeze);

  let unfreeze = Transaction::from_input(AssetFreezeTransactionInput {
    from: Address::zero().to_string(),
    params: flat_params(),
    note: None,
    lease: None,
    rekey_to: None,
    asset_id: 77,
    freeze_target: target.to_string(),
    frozen: false,
  })
  .unwrap();
  assert!(key_position(&unfreeze.encode().unwrap(), "afrz").is_none());
}

#[test]
fn box_references_rewrite_to_foreign_app_indices() {
  let mut input = app_call_input(&Address::zero());
  input.app_id = 1;
  input.foreign_apps = vec![100, 200];
  input.boxes = vec![
    BoxReference { app_index: 100, name: b"x".to_vec() },
    BoxReference { app_index: 0, name: b"y".to_vec() },
  ];
  let txn = Transaction::from_input(input).unwrap();

  let encoded = txn.encode().unwrap();
  let raw: RawTransaction = rmp_decode(&encoded).unwrap();
  let raw_boxes = raw.boxes.unwrap();
  assert_eq!(raw_boxes[0].index, Some(1));
  assert_eq!(raw_boxes[0].name.as_ref().unwrap().as_ref(), b"x");
  assert_eq!(raw_boxes[1].index, None);
  assert_eq!(raw_boxes[1].name.as_ref().unwrap().as_ref(), b"y");

  // round trip preserves the caller's view
  let decoded = Transaction::from_encoded(&encoded).unwrap();
  match decoded.payload() {
    TxnPayload::AppCall(app_call) => {
      assert_eq!(app_call.boxes[0], BoxReference { app_index: 100, name: b"x".to_vec() });
      assert_eq!(app_call.boxes[1], BoxReference { app_index: 0, name: b"y".to_vec() });
    }
    other => panic!("expected app call payload, got {:?}", other),
  }
}

#[test]
fn box_reference_to_called_app_normalizes_to_zero() {
  let mut input = app_call_input(&Address::zero());
  input.app_id = 42;
  input.boxes = vec![BoxReference { app_index: 42, name: b"state".to_vec() }];
  let txn = Transaction::from_input(input).unwrap();

  let encoded = txn.encode().unwrap();
  let decoded = Transaction::from_encoded(&encoded).unwrap();

  match decoded.payload() {
    TxnPayload::AppCall(app_call) => {
      // the wire form holds index 0, which decodes to app id 0 rather than 42
      assert_eq!(app_call.boxes[0].app_index, 0);
    }
    other => panic!("expected app call payload, got {:?}", other),
  }
  // and a second encode is byte-stable
  assert_eq!(decoded.encode().unwrap(), encoded);
}

#[test]
fn box_reference_to_unlisted_app_is_rejected() {
  let mut input = app_call_input(&Address::zero());
  input.app_id = 1;
  input.foreign_apps = vec![100];
  input.boxes = vec![BoxReference { app_index: 300, name: b"x".to_vec() }];

  let error = Transaction::from_input(input).unwrap_err();
  match error.downcast_ref::<AlgorandTxnError>() {
    Some(AlgorandTxnError::ForeignAppNotFound(300)) => {}
    other => panic!("expected foreign app error, got {:?}", other),
  }
}

#[test]
fn app_call_round_trips_with_all_fields() {
  let participant = Address::from_fixed_bytes([8; 32]);

  let mut input = app_call_input(&Address::zero());
  input.app_id = 0;
  input.on_complete = 1;
  input.app_args = vec![b"method".to_vec(), Vec::new()];
  input.accounts = vec![participant.to_string()];
  input.foreign_apps = vec![11];
  input.foreign_assets = vec![22, 33];
  input.approval_program = vec![0x06, 0x81, 0x01];
  input.clear_program = vec![0x06, 0x81, 0x01];
  input.local_num_uints = 1;
  input.local_num_byte_slices = 2;
  input.global_num_uints = 3;
  input.global_num_byte_slices = 0;
  input.extra_pages = 1;
  let txn = Transaction::from_input(input).unwrap();

  let encoded = txn.encode().unwrap();
  assert_key_order(
    &encoded,
    &["apaa", "apan", "apap", "apas", "apat", "apep", "apfa", "apgs", "apls", "apsu", "fee"],
  );
  // app creation elides apid
  assert!(key_position(&encoded, "apid").is_none());

  assert_eq!(Transaction::from_encoded(&encoded).unwrap(), txn);
}

#[test]
fn state_proof_always_emits_proof_and_message() {
  let txn = Transaction::from_input(StateProofTransactionInput {
    from: Address::zero().to_string(),
    params: flat_params(),
    note: None,
    lease: None,
    rekey_to: None,
    state_proof_type: 0,
    state_proof: Vec::new(),
    state_proof_message: Vec::new(),
  })
  .unwrap();

  let encoded = txn.encode().unwrap();

  // sp and spmsg stay on the wire even when empty; sptype 0 still elides
  assert!(key_position(&encoded, "sp").is_some());
  assert!(key_position(&encoded, "spmsg").is_some());
  assert!(key_position(&encoded, "sptype").is_none());
  assert_eq!(Transaction::from_encoded(&encoded).unwrap(), txn);
}

#[test]
fn state_proof_round_trips_with_data() {
  let txn = Transaction::from_input(StateProofTransactionInput {
    from: Address::zero().to_string(),
    params: flat_params(),
    note: None,
    lease: None,
    rekey_to: None,
    state_proof_type: 1,
    state_proof: vec![1, 2, 3, 4],
    state_proof_message: vec![5, 6, 7],
  })
  .unwrap();

  let encoded = txn.encode().unwrap();
  assert_key_order(&encoded, &["sp", "spmsg", "sptype", "type"]);
  assert_eq!(Transaction::from_encoded(&encoded).unwrap(), txn);
}

#[test]
fn logic_sig_envelope_survives_decode_and_reencode() {
  use serde_bytes::ByteBuf;

  let to = Address::from_fixed_bytes([2; 32]);
  let txn = Transaction::from_input(payment_input(&Address::zero(), &to)).unwrap();
  let raw: RawTransaction = rmp_decode(&txn.encode().unwrap()).unwrap();

  let signed = SignedTransaction {
    logic_sig: Some(LogicSig {
      args: Some(vec![ByteBuf::from(b"arg0".to_vec())]),
      logic: ByteBuf::from(vec![0x01, 0x20, 0x01, 0x01, 0x22]),
      multisig_sig: None,
      signature: None,
    }),
    multisig_sig: None,
    auth_address: None,
    signature: None,
    transaction: raw,
    txn_id: txn.id().unwrap(),
  };

  let encoded = signed.encode().unwrap();
  let decoded = SignedTransaction::decode(&encoded).unwrap();

  assert_eq!(decoded.logic_sig, signed.logic_sig);
  assert_eq!(decoded.encode().unwrap(), encoded);
  assert_eq!(decoded.transaction().unwrap(), txn);
}

#[test]
fn decode_rejects_missing_or_unknown_type() {
  // no type at all
  let untyped = RawTransaction::default();
  assert!(Transaction::from_encoded(&rmp_encode(&untyped).unwrap()).is_err());

  // a type label outside the known seven
  #[derive(serde::Serialize)]
  struct BogusTxn<'a> {
    #[serde(rename = "type")]
    tx_type: &'a str,
  }
  let encoded = rmp_encode(&BogusTxn { tx_type: "zzz" }).unwrap();
  assert!(Transaction::from_encoded(&encoded).is_err());
}

#[test]
fn decode_fills_defaults_for_elided_fields() {
  let to = Address::from_fixed_bytes([2; 32]);
  let mut input = payment_input(&Address::zero(), &to);
  input.amount = 0;
  input.params.fee = 0;
  let txn = Transaction::from_input(input).unwrap();

  let encoded = txn.encode().unwrap();
  assert!(key_position(&encoded, "amt").is_none());
  assert!(key_position(&encoded, "fee").is_none());

  let decoded = Transaction::from_encoded(&encoded).unwrap();
  assert_eq!(decoded.header().fee, 0);
  match decoded.payload() {
    TxnPayload::Payment(payment) => assert_eq!(payment.amount, 0),
    other => panic!("expected payment payload, got {:?}", other),
  }
  assert_eq!(decoded, txn);
}
