use crate::assert_rejected;
use crate::context::*;
use teller::port::Journal;

#[tokio::test]
async fn test_open_starts_at_opening_balance() {
    let mut ctx = TestContext::new();

    ctx.process(open()).await.unwrap();

    assert!(ctx.is_active());
    ctx.assert_account(500, 0);
    assert_eq!(ctx.error_message(), None);
}

#[tokio::test]
async fn test_reopen_resets_balance_only() {
    let mut ctx = TestContext::new();

    ctx.process(open()).await.unwrap();
    ctx.process(stage_deposit(200)).await.unwrap();
    ctx.process(deposit()).await.unwrap();
    ctx.assert_account(700, 0);

    // Opening again is not gated on inactivity: the balance snaps back to
    // the opening amount and everything else is kept.
    ctx.process(open()).await.unwrap();

    assert!(ctx.is_active());
    ctx.assert_account(500, 0);
}

#[tokio::test]
async fn test_reopen_keeps_outstanding_loan() {
    let mut ctx = TestContext::new();

    ctx.process(open()).await.unwrap();
    ctx.process(stage_loan(1000)).await.unwrap();
    ctx.process(request_loan()).await.unwrap();
    ctx.assert_account(1500, 1000);

    ctx.process(open()).await.unwrap();

    ctx.assert_account(500, 1000);
}

#[tokio::test]
async fn test_inactive_guard_covers_every_other_action() {
    let mut ctx = TestContext::new();

    assert!(!ctx.is_active());

    assert_rejected!(ctx, stage_deposit(100));
    assert_rejected!(ctx, stage_withdrawal(100));
    assert_rejected!(ctx, stage_loan(100));
    assert_rejected!(ctx, stage_loan_payment(100));
    assert_rejected!(ctx, deposit());
    assert_rejected!(ctx, withdraw());
    assert_rejected!(ctx, withdraw_all());
    assert_rejected!(ctx, request_loan());
    assert_rejected!(ctx, pay_loan());
    assert_rejected!(ctx, close());

    // Nothing was persisted either
    assert_eq!(ctx.journal.replay(None).await.unwrap().len(), 0);
}
