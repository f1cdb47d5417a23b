use spend_core::init;
use spend_core::ledger::{round_to_cents, Account};

#[test]
fn deposit_withdraw_statement_flow() {
    init();

    let mut food = Account::new("Food");
    food.deposit(1000.0, "deposit").expect("valid deposit");
    assert!(food.withdraw(105.55, "groceries").expect("valid amount"));

    assert_eq!(food.balance(), 894.45);
    assert_eq!(food.expenses(), 105.55);
    assert_eq!(
        food.to_string(),
        [
            "*************Food*************",
            "deposit                1000.00",
            "groceries              -105.55",
            "Total: 894.45",
        ]
        .join("\n")
    );
}

#[test]
fn transfer_moves_funds_and_labels_both_ledgers() {
    let mut food = Account::new("Food");
    let mut clothing = Account::new("Clothing");
    food.deposit(300.0, "deposit").expect("valid deposit");

    let transferred = food.transfer(120.0, &mut clothing).expect("valid amount");
    assert!(transferred);

    assert_eq!(food.balance(), 180.0);
    assert_eq!(clothing.balance(), 120.0);
    assert_eq!(food.balance() + clothing.balance(), 300.0);
    assert_eq!(food.entries().len(), 2);
    assert_eq!(clothing.entries().len(), 1);
    assert_eq!(food.entries()[1].description, "Transfer to Clothing");
    assert_eq!(clothing.entries()[0].description, "Transfer from Food");
    // Incoming transfers are credits, not expenses.
    assert_eq!(clothing.expenses(), 0.0);
    assert_eq!(food.expenses(), 120.0);
}

#[test]
fn failed_transfer_leaves_both_accounts_untouched() {
    let mut food = Account::new("Food");
    let mut auto = Account::new("Auto");
    food.deposit(10.0, "deposit").expect("valid deposit");
    let before_food = food.clone();
    let before_auto = auto.clone();

    let transferred = food.transfer(50.0, &mut auto).expect("valid amount");
    assert!(!transferred);
    assert_eq!(food, before_food);
    assert_eq!(auto, before_auto);
}

#[test]
fn balance_always_equals_the_sum_of_entries() {
    let mut checking = Account::new("Checking");
    let mut savings = Account::new("Savings");

    checking.deposit(250.75, "salary").expect("valid deposit");
    checking.withdraw(42.10, "utilities").expect("valid amount");
    checking.transfer(75.25, &mut savings).expect("valid amount");
    savings.withdraw(5.05, "fees").expect("valid amount");
    // A refused withdrawal must not disturb the invariant either.
    assert!(!savings.withdraw(9999.0, "").expect("valid amount"));

    for account in [&checking, &savings] {
        let total: f64 = account.entries().iter().map(|entry| entry.amount).sum();
        assert_eq!(account.balance(), round_to_cents(total));
    }
}
