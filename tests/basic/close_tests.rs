use crate::assert_rejected;
use crate::context::*;
use teller::domain::{AccountState, CLOSE_ADVISORY};

#[tokio::test]
async fn test_close_settled_account_resets_to_initial() {
    let mut ctx = TestContext::new();

    ctx.process(open()).await.unwrap();
    ctx.process(stage_withdrawal(500)).await.unwrap();
    ctx.process(withdraw()).await.unwrap();
    ctx.assert_account(0, 0);

    ctx.process(close()).await.unwrap();

    assert!(!ctx.is_active());
    assert_eq!(ctx.account_state, AccountState::initial());
}

#[tokio::test]
async fn test_close_with_balance_is_refused_with_advisory() {
    let mut ctx = TestContext::new();

    ctx.process(open()).await.unwrap();
    ctx.process(close()).await.unwrap();

    assert!(ctx.is_active());
    ctx.assert_account(500, 0);
    assert_eq!(ctx.error_message(), Some(CLOSE_ADVISORY.to_string()));
}

#[tokio::test]
async fn test_close_with_outstanding_loan_is_refused() {
    let mut ctx = TestContext::new();

    ctx.process(open()).await.unwrap();
    ctx.process(stage_loan(500)).await.unwrap();
    ctx.process(request_loan()).await.unwrap();
    ctx.process(withdraw_all()).await.unwrap();
    ctx.assert_account(0, 500);

    ctx.process(close()).await.unwrap();

    assert!(ctx.is_active());
    ctx.assert_account(0, 500);
    assert_eq!(ctx.error_message(), Some(CLOSE_ADVISORY.to_string()));
}

#[tokio::test]
async fn test_advisory_persists_until_successful_close() {
    let mut ctx = TestContext::new();

    ctx.process(open()).await.unwrap();
    ctx.process(close()).await.unwrap();
    assert_eq!(ctx.error_message(), Some(CLOSE_ADVISORY.to_string()));

    // Other operations do not clear the advisory.
    ctx.process(stage_deposit(100)).await.unwrap();
    ctx.process(deposit()).await.unwrap();
    assert_eq!(ctx.error_message(), Some(CLOSE_ADVISORY.to_string()));

    // A successful close does.
    ctx.process(withdraw_all()).await.unwrap();
    ctx.process(close()).await.unwrap();
    assert_eq!(ctx.account_state, AccountState::initial());
}

#[tokio::test]
async fn test_close_while_inactive_is_a_guard_noop() {
    let mut ctx = TestContext::new();

    // The uniform inactive guard swallows the close entirely: no advisory
    // is written.
    assert_rejected!(ctx, close());
    assert_eq!(ctx.account_state, AccountState::initial());
}

#[tokio::test]
async fn test_account_can_reopen_after_close() {
    let mut ctx = TestContext::new();

    ctx.process(open()).await.unwrap();
    ctx.process(stage_withdrawal(500)).await.unwrap();
    ctx.process(withdraw()).await.unwrap();
    ctx.process(close()).await.unwrap();
    assert!(!ctx.is_active());

    ctx.process(open()).await.unwrap();

    assert!(ctx.is_active());
    ctx.assert_account(500, 0);
}
