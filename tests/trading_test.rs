use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use tradebook_core::accounts::AccountServiceTrait;
use tradebook_core::ledger::LedgerServiceTrait;
use tradebook_core::positions::PositionServiceTrait;
use tradebook_core::trading::{TradeError, TradeExecutorTrait};
use tradebook_core::Error;

mod common;

#[tokio::test]
async fn buy_then_oversell_then_sell_out() {
    let engine = common::setup("buy-sell-cycle");
    let account = common::register(&engine, "alice");

    // Buy 10 AAPL at 150: cash 10000 -> 8500, position 10.
    engine.quotes.set_quote("AAPL", dec!(150));
    let receipt = engine.executor.buy(&account.id, "AAPL", "10").await.unwrap();
    assert_eq!(receipt.new_cash, dec!(8500));
    assert_eq!(receipt.trade.shares, 10);
    assert_eq!(receipt.trade.price, dec!(150));

    let positions = engine.positions.positions(&account.id).unwrap();
    assert_eq!(positions.get("AAPL"), Some(&10));

    // Selling 15 against 10 held is rejected and changes nothing.
    let err = engine
        .executor
        .sell(&account.id, "AAPL", "15")
        .await
        .unwrap_err();
    match err {
        Error::Trade(TradeError::InsufficientShares { requested, held }) => {
            assert_eq!(requested, 15);
            assert_eq!(held, 10);
        }
        other => panic!("Expected InsufficientShares, got {other}"),
    }
    assert_eq!(engine.accounts.get_cash(&account.id).unwrap(), dec!(8500));

    // Sell all 10 at 160: cash 8500 -> 10100, position gone entirely.
    engine.quotes.set_quote("AAPL", dec!(160));
    let receipt = engine.executor.sell(&account.id, "AAPL", "10").await.unwrap();
    assert_eq!(receipt.new_cash, dec!(10100));
    assert_eq!(receipt.trade.shares, -10);

    let positions = engine.positions.positions(&account.id).unwrap();
    assert!(positions.is_empty());
}

#[tokio::test]
async fn buy_rejected_when_total_exceeds_cash() {
    let engine = common::setup("insufficient-funds");
    let account = common::register(&engine, "bob");

    // Drain the account down to 100 first.
    engine.quotes.set_quote("SINK", dec!(9900));
    engine.executor.buy(&account.id, "SINK", "1").await.unwrap();
    assert_eq!(engine.accounts.get_cash(&account.id).unwrap(), dec!(100));

    engine.quotes.set_quote("GOOG", dec!(150));
    let err = engine
        .executor
        .buy(&account.id, "GOOG", "1")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Trade(TradeError::InsufficientFunds { .. })
    ));

    // Cash untouched, no GOOG row appended.
    assert_eq!(engine.accounts.get_cash(&account.id).unwrap(), dec!(100));
    let history = engine.ledger.get_history(&account.id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].symbol, "SINK");
}

#[tokio::test]
async fn selling_a_symbol_never_traded_is_not_held() {
    let engine = common::setup("not-held");
    let account = common::register(&engine, "carol");
    engine.quotes.set_quote("TSLA", dec!(200));

    let err = engine
        .executor
        .sell(&account.id, "TSLA", "1")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Trade(TradeError::NotHeld(_))));

    // NotHeld wins even when the share count is garbage.
    let err = engine
        .executor
        .sell(&account.id, "TSLA", "lots")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Trade(TradeError::NotHeld(_))));
}

#[tokio::test]
async fn negative_share_count_is_rejected_before_funds_check() {
    let engine = common::setup("invalid-share-count");
    let account = common::register(&engine, "dave");
    engine.quotes.set_quote("XYZ", dec!(10));

    let err = engine
        .executor
        .buy(&account.id, "XYZ", "-5")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Trade(TradeError::InvalidShareCount(_))
    ));
    assert_eq!(engine.accounts.get_cash(&account.id).unwrap(), dec!(10000));
}

#[tokio::test]
async fn astronomical_trade_total_is_rejected_not_a_panic() {
    let engine = common::setup("total-overflow");
    let account = common::register(&engine, "judy");
    engine.quotes.set_quote("HUGE", Decimal::MAX);

    let err = engine
        .executor
        .buy(&account.id, "HUGE", "2")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Trade(TradeError::InvalidInput(_))));
    assert_eq!(engine.accounts.get_cash(&account.id).unwrap(), dec!(10000));
}

#[tokio::test]
async fn symbol_validation_order_on_buy() {
    let engine = common::setup("buy-validation-order");
    let account = common::register(&engine, "erin");

    // Empty symbol first.
    let err = engine.executor.buy(&account.id, "  ", "10").await.unwrap_err();
    assert!(matches!(err, Error::Trade(TradeError::InvalidInput(_))));

    // Unknown symbol beats a malformed share count.
    let err = engine
        .executor
        .buy(&account.id, "NOPE", "abc")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Trade(TradeError::UnknownSymbol(_))));

    // Known symbol, malformed share count.
    engine.quotes.set_quote("AAPL", dec!(150));
    let err = engine
        .executor
        .buy(&account.id, "AAPL", "abc")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Trade(TradeError::InvalidShareCount(_))
    ));
}

#[tokio::test]
async fn gateway_outage_surfaces_without_touching_state() {
    let engine = common::setup("gateway-outage");
    let account = common::register(&engine, "frank");

    engine.quotes.set_quote("AAPL", dec!(150));
    engine.executor.buy(&account.id, "AAPL", "5").await.unwrap();

    engine.quotes.set_offline(true);
    let err = engine
        .executor
        .sell(&account.id, "AAPL", "5")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Trade(TradeError::QuoteUnavailable(_))
    ));

    assert_eq!(engine.accounts.get_cash(&account.id).unwrap(), dec!(9250));
    assert_eq!(engine.positions.position(&account.id, "AAPL").unwrap(), 5);
    assert_eq!(engine.ledger.get_history(&account.id).unwrap().len(), 1);
}

#[tokio::test]
async fn conservation_of_cash_and_shares() {
    let engine = common::setup("conservation");
    let account = common::register(&engine, "grace");
    engine.quotes.set_quote("MSFT", dec!(150));

    let before = engine.accounts.get_cash(&account.id).unwrap();
    engine.executor.buy(&account.id, "MSFT", "10").await.unwrap();

    let after = engine.accounts.get_cash(&account.id).unwrap();
    assert_eq!(before - after, dec!(1500));
    assert_eq!(engine.positions.position(&account.id, "MSFT").unwrap(), 10);

    engine.executor.sell(&account.id, "MSFT", "10").await.unwrap();
    assert_eq!(engine.accounts.get_cash(&account.id).unwrap(), before);
    assert_eq!(engine.positions.position(&account.id, "MSFT").unwrap(), 0);
}

#[tokio::test]
async fn decimal_cash_is_exact_across_a_round_trip() {
    let engine = common::setup("decimal-exactness");
    let account = common::register(&engine, "heidi");
    engine.quotes.set_quote("BRK", dec!(123.45));

    engine.executor.buy(&account.id, "BRK", "7").await.unwrap();
    let receipt = engine.executor.sell(&account.id, "BRK", "7").await.unwrap();

    // 7 x 123.45 out and back in again leaves cash bit-for-bit intact.
    assert_eq!(receipt.new_cash, dec!(10000));
}

#[tokio::test]
async fn symbols_are_normalized_to_uppercase() {
    let engine = common::setup("symbol-normalization");
    let account = common::register(&engine, "ivan");
    engine.quotes.set_quote("NFLX", dec!(400));

    let receipt = engine
        .executor
        .buy(&account.id, " nflx ", "2")
        .await
        .unwrap();
    assert_eq!(receipt.trade.symbol, "NFLX");

    // The sell side resolves the same position.
    engine.executor.sell(&account.id, "nflx", "2").await.unwrap();
    assert_eq!(engine.positions.position(&account.id, "NFLX").unwrap(), 0);
}
