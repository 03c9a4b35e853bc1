use rand::Rng;
use std::fs::File;

/// Generate a mock CSV session with plausible random activity. This is used
/// to exercise the teller pipeline.
///
/// The session opens the account, runs random stage/commit cycles (deposits,
/// withdrawals, a loan round-trip), then settles and closes: any remaining
/// loan is repaid, the balance is emptied, and the final row is a close that
/// should succeed.
pub fn generator(output: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["action", "amount"])?;

    let mut rng = rand::rng();
    let mut rows: Vec<(&str, Option<i64>)> = vec![("openAccount", None)];

    // Shadow bookkeeping so the generated session stays mostly valid.
    let mut balance: i64 = 500;
    let mut loan: i64 = 0;

    let target = count.clamp(6, 10_000);

    while rows.len() + 6 < target {
        match rng.random_range(0..4) {
            0 => {
                let amount = rng.random_range(50..500);
                rows.push(("setDeposit", Some(amount)));
                rows.push(("deposit", None));
                balance += amount;
            }
            1 => {
                let amount = rng.random_range(10..200);
                rows.push(("setWithdraw", Some(amount)));
                rows.push(("withdraw", None));
                // Over-withdrawals are left in on purpose: they exercise the
                // rejection path and leave the balance alone.
                if balance >= amount {
                    balance -= amount;
                }
            }
            2 if loan == 0 => {
                let amount = rng.random_range(100..1000);
                rows.push(("setLoan", Some(amount)));
                rows.push(("requestLoan", None));
                loan = amount;
                balance += amount;
            }
            3 if loan > 0 && balance > 0 => {
                let amount = rng.random_range(1..=loan);
                rows.push(("setLoanPay", Some(amount)));
                rows.push(("payLoan", None));
                loan -= amount;
                balance -= amount;
            }
            _ => {}
        }
    }

    // Settle the account so the closing row can succeed.
    if loan > 0 {
        if balance == 0 {
            rows.push(("setDeposit", Some(loan)));
            rows.push(("deposit", None));
            balance += loan;
        }
        rows.push(("setLoanPay", Some(loan)));
        rows.push(("payLoan", None));
    }
    rows.push(("withdrawAll", None));
    rows.push(("closeAccount", None));

    for (action, amount) in &rows {
        let amount_str = amount.map(|a| a.to_string()).unwrap_or_default();
        wtr.write_record([*action, &amount_str])?;
    }

    wtr.flush()?;
    println!("✓ Generated {} actions to {}", rows.len(), output);
    Ok(())
}
