//! Incoming transfer protocol: listing, validator confirmation and payout.

mod suite;

use common::AssetInfo;
use cosmwasm_std::{coins, Addr, Binary, Uint128};
use cw_multi_test::Executor;

use relay_bridge::hash::bytes32_to_hex;
use relay_bridge::msg::{
    ConfirmedByResponse, ExecuteMsg, IsConfirmedResponse, QueryMsg, TransferResponse,
};
use suite::{
    attr, err_string, list_entry, setup, tx_hash, wasm_events, Suite, DENOM, REMOTE_CHAIN,
    REMOTE_RECIPIENT,
};

struct Fixture {
    suite: Suite,
    plain: Addr,
    owned: Addr,
    v1: Addr,
    v2: Addr,
    recipient: Addr,
}

/// Two validators, a custody-backed CW20 with 1000 units of liquidity, an
/// owned CW20 and the native denom, all registered.
fn fixture() -> Fixture {
    let mut suite = setup();
    let provider = suite.provider.clone();
    let plain = suite.create_token(false, &[(&provider, 1_000)]);
    let owned = suite.create_token(true, &[]);
    suite.register(vec![
        AssetInfo::cw20(plain.as_str()),
        AssetInfo::cw20(owned.as_str()),
        AssetInfo::Native {},
    ]);
    suite.fund_cw20(&plain, 1_000);

    let v1 = Addr::unchecked("terra1validator1");
    let v2 = Addr::unchecked("terra1validator2");
    suite.add_validators(&[&v1, &v2]);

    Fixture {
        suite,
        plain,
        owned,
        v1,
        v2,
        recipient: Addr::unchecked("terra1recipient"),
    }
}

fn query_transfer(suite: &Suite, hash: &Binary) -> TransferResponse {
    suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::Transfer {
                tx_hash: hash.clone(),
            },
        )
        .unwrap()
}

fn hex(hash: &Binary) -> String {
    let bytes: [u8; 32] = hash.as_slice().try_into().unwrap();
    bytes32_to_hex(&bytes)
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_zero_quorum_pays_out_exactly_once() {
    let Fixture {
        mut suite,
        plain,
        recipient,
        ..
    } = fixture();
    let hash = tx_hash(1);

    let res = suite
        .list(vec![list_entry(AssetInfo::cw20(plain.as_str()), &recipient, 100, 1)])
        .unwrap();
    let listed = wasm_events(&res, "Listed");
    assert_eq!(attr(listed[0], "tx_hash"), hex(&hash));
    assert_eq!(attr(listed[0], "source_chain_id"), REMOTE_CHAIN.to_string());

    let res = suite.transfer(vec![hash.clone()]).unwrap();
    let transfers = wasm_events(&res, "Transfer");
    assert_eq!(transfers.len(), 1);
    assert_eq!(attr(transfers[0], "tx_hash"), hex(&hash));
    assert_eq!(attr(transfers[0], "amount"), "100");
    assert_eq!(suite.cw20_balance(&plain, &recipient), 100);
    assert_eq!(suite.cw20_balance(&plain, &suite.bridge), 900);

    // Already sent: skipped without an error or a second payout
    let res = suite.transfer(vec![hash.clone()]).unwrap();
    assert!(wasm_events(&res, "Transfer").is_empty());
    assert_eq!(suite.cw20_balance(&plain, &recipient), 100);
    assert!(query_transfer(&suite, &hash).is_sent);
}

#[test]
fn test_transfer_waits_for_quorum() {
    let Fixture {
        mut suite,
        plain,
        v1,
        v2,
        recipient,
        ..
    } = fixture();
    let hash = tx_hash(2);
    suite.set_required_confirmations(2);

    suite
        .list(vec![list_entry(AssetInfo::cw20(plain.as_str()), &recipient, 250, 2)])
        .unwrap();

    let res = suite.confirm(&v1, vec![hash.clone()]).unwrap();
    let confirmed = wasm_events(&res, "Confirmed");
    assert_eq!(attr(confirmed[0], "validator_id"), "1");

    let res = suite.transfer(vec![hash.clone()]).unwrap();
    assert!(wasm_events(&res, "Transfer").is_empty());
    let record = query_transfer(&suite, &hash);
    assert!(!record.is_sent);
    assert_eq!(record.confirmation_count, 1);

    suite.confirm(&v2, vec![hash.clone()]).unwrap();
    let res = suite.transfer(vec![hash.clone()]).unwrap();
    let transfers = wasm_events(&res, "Transfer");
    assert_eq!(attr(transfers[0], "amount"), "250");
    assert!(query_transfer(&suite, &hash).is_sent);
    assert_eq!(suite.cw20_balance(&plain, &recipient), 250);

    let confirmed_by: ConfirmedByResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::ConfirmedBy {
                tx_hash: hash.clone(),
            },
        )
        .unwrap();
    assert_eq!(confirmed_by.validator_ids, vec![1, 2]);

    let is_confirmed: IsConfirmedResponse = suite
        .app
        .wrap()
        .query_wasm_smart(
            &suite.bridge,
            &QueryMsg::IsConfirmed {
                tx_hash: hash,
                validator: v1.to_string(),
            },
        )
        .unwrap();
    assert!(is_confirmed.confirmed);
}

#[test]
fn test_raised_quorum_stalls_listed_transfer() {
    let Fixture {
        mut suite,
        plain,
        v1,
        recipient,
        ..
    } = fixture();
    let hash = tx_hash(3);
    suite.set_required_confirmations(1);

    suite
        .list(vec![list_entry(AssetInfo::cw20(plain.as_str()), &recipient, 10, 3)])
        .unwrap();
    suite.confirm(&v1, vec![hash.clone()]).unwrap();
    suite.set_required_confirmations(2);

    let res = suite.transfer(vec![hash.clone()]).unwrap();
    assert!(wasm_events(&res, "Transfer").is_empty());
    assert_eq!(query_transfer(&suite, &hash).confirmation_count, 1);
}

#[test]
fn test_owned_tokens_are_minted_and_native_is_sent() {
    let Fixture {
        mut suite,
        owned,
        recipient,
        ..
    } = fixture();

    // Native custody comes from a user deposit
    let user = suite.user.clone();
    suite
        .app
        .execute_contract(
            user,
            suite.bridge.clone(),
            &ExecuteMsg::Deposit {
                recipient: REMOTE_RECIPIENT.to_string(),
                token: AssetInfo::Native {},
                amount: Uint128::new(500),
                destination_chain_id: REMOTE_CHAIN,
            },
            &coins(500, DENOM),
        )
        .unwrap();

    suite
        .list(vec![
            list_entry(AssetInfo::cw20(owned.as_str()), &recipient, 50, 4),
            list_entry(AssetInfo::Native {}, &recipient, 200, 5),
        ])
        .unwrap();

    let res = suite.transfer(vec![tx_hash(4), tx_hash(5)]).unwrap();
    assert_eq!(wasm_events(&res, "Transfer").len(), 2);
    assert_eq!(suite.cw20_balance(&owned, &recipient), 50);
    assert_eq!(suite.native_balance(&recipient), 200);
    assert_eq!(suite.native_balance(&suite.bridge), 300);
}

#[test]
fn test_batch_payout_is_bounded_by_custody() {
    let Fixture {
        mut suite,
        plain,
        recipient,
        ..
    } = fixture();

    // 1000 in custody: two payouts of 600 cannot both be covered
    suite
        .list(vec![
            list_entry(AssetInfo::cw20(plain.as_str()), &recipient, 600, 6),
            list_entry(AssetInfo::cw20(plain.as_str()), &recipient, 600, 7),
            list_entry(AssetInfo::Native {}, &recipient, 1, 8),
        ])
        .unwrap();

    let res = suite.transfer(vec![tx_hash(6), tx_hash(7)]);
    assert_eq!(err_string(res), "TransferHelper: TRANSFER_FAILED");
    assert!(!query_transfer(&suite, &tx_hash(6)).is_sent);
    assert_eq!(suite.cw20_balance(&plain, &recipient), 0);

    let res = suite.transfer(vec![tx_hash(8)]);
    assert_eq!(err_string(res), "TransferHelper: NATIVE_TRANSFER_FAILED");

    // Each one alone fits
    suite.transfer(vec![tx_hash(6)]).unwrap();
    assert_eq!(suite.cw20_balance(&plain, &recipient), 600);
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_list_rejections() {
    let Fixture {
        mut suite,
        plain,
        recipient,
        ..
    } = fixture();
    let unregistered = suite.create_token(false, &[]);
    let token = AssetInfo::cw20(plain.as_str());

    let res = suite.app.execute_contract(
        suite.user.clone(),
        suite.bridge.clone(),
        &ExecuteMsg::List {
            entries: vec![list_entry(token.clone(), &recipient, 1, 9)],
        },
        &[],
    );
    assert_eq!(err_string(res), "Unauthorized");

    let res = suite.list(vec![list_entry(
        AssetInfo::cw20(unregistered.as_str()),
        &recipient,
        1,
        9,
    )]);
    assert_eq!(err_string(res), "bridge: trying to list unregistered token");

    let res = suite.list(vec![list_entry(token.clone(), &recipient, 0, 9)]);
    assert_eq!(err_string(res), "bridge: amount must be more than zero");

    let res = suite.list(vec![
        list_entry(token.clone(), &recipient, 1, 9),
        list_entry(token.clone(), &recipient, 2, 9),
    ]);
    assert_eq!(err_string(res), "bridge: txHash already listed");

    let mut short = list_entry(token.clone(), &recipient, 1, 9);
    short.tx_hash = Binary::from(vec![9u8; 31]);
    let res = suite.list(vec![short]);
    assert_eq!(
        err_string(res),
        "Invalid hash length: expected 32 bytes, got 31"
    );

    suite
        .list(vec![list_entry(token.clone(), &recipient, 1, 9)])
        .unwrap();
    let res = suite.list(vec![list_entry(token, &recipient, 1, 9)]);
    assert_eq!(err_string(res), "bridge: txHash already listed");
}

// ============================================================================
// Confirmation
// ============================================================================

#[test]
fn test_confirm_rejections() {
    let Fixture {
        mut suite,
        plain,
        v1,
        v2,
        recipient,
        ..
    } = fixture();
    let token = AssetInfo::cw20(plain.as_str());
    suite
        .list(vec![
            list_entry(token.clone(), &recipient, 1, 10),
            list_entry(token, &recipient, 1, 11),
        ])
        .unwrap();

    let stranger = Addr::unchecked("terra1stranger");
    let res = suite.confirm(&stranger, vec![tx_hash(10)]);
    assert_eq!(err_string(res), "Unauthorized");

    let res = suite.confirm(&v1, vec![tx_hash(12)]);
    assert_eq!(err_string(res), "bridge: txHash not listed");

    let res = suite.confirm(&v1, vec![tx_hash(10), tx_hash(10)]);
    assert_eq!(err_string(res), "bridge: already confirmed");

    suite.confirm(&v1, vec![tx_hash(10)]).unwrap();
    let res = suite.confirm(&v1, vec![tx_hash(10)]);
    assert_eq!(err_string(res), "bridge: already confirmed");

    suite.transfer(vec![tx_hash(10)]).unwrap();
    let res = suite.confirm(&v2, vec![tx_hash(10)]);
    assert_eq!(err_string(res), "bridge: transfer already sent");

    // A removed validator keeps its id but loses the right to confirm
    let admin = suite.admin.clone();
    suite
        .app
        .execute_contract(
            admin,
            suite.bridge.clone(),
            &ExecuteMsg::ChangeValidatorState {
                validator: v2.to_string(),
                removed: true,
            },
            &[],
        )
        .unwrap();
    let res = suite.confirm(&v2, vec![tx_hash(11)]);
    assert_eq!(err_string(res), "Unauthorized");
}

// ============================================================================
// Execution
// ============================================================================

#[test]
fn test_transfer_of_unknown_hash_faults() {
    let Fixture {
        mut suite,
        plain,
        recipient,
        ..
    } = fixture();
    suite
        .list(vec![list_entry(AssetInfo::cw20(plain.as_str()), &recipient, 5, 13)])
        .unwrap();

    // The listed hash is not paid either: the batch reverts as a whole
    let res = suite.transfer(vec![tx_hash(13), tx_hash(14)]);
    let err = err_string(res);
    assert!(err.contains("not found"), "unexpected error: {err}");
    assert!(!err.starts_with("bridge:"));
    assert!(!query_transfer(&suite, &tx_hash(13)).is_sent);
    assert_eq!(suite.cw20_balance(&plain, &recipient), 0);
}

#[test]
fn test_transfer_requires_signer() {
    let Fixture {
        mut suite,
        plain,
        recipient,
        ..
    } = fixture();
    suite
        .list(vec![list_entry(AssetInfo::cw20(plain.as_str()), &recipient, 5, 15)])
        .unwrap();

    let owner = suite.owner.clone();
    let res = suite.app.execute_contract(
        owner,
        suite.bridge.clone(),
        &ExecuteMsg::Transfer {
            hashes: vec![tx_hash(15)],
        },
        &[],
    );
    assert_eq!(err_string(res), "Unauthorized");
}
