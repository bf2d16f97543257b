use anchor_lang::prelude::Pubkey;
use anchor_lang::require;
use multi_vesting::constants::SECONDS_PER_EPOCH;
use multi_vesting::error::VestingError;
use multi_vesting::ledger::{self, Allocation, TokenPool, VestingLedger};
use multi_vesting::state::{LedgerState, VestingBook};
use multi_vesting::utils::math::vested_amount;
use proptest::prelude::*;

const START: i64 = 1_767_225_600;

struct Pool {
    balance: u64,
}

impl TokenPool for Pool {
    fn balance(&self) -> u64 {
        self.balance
    }

    fn transfer(&mut self, _to: &Pubkey, amount: u64) -> anchor_lang::Result<()> {
        require!(self.balance >= amount, VestingError::InsufficientFunds);
        self.balance -= amount;
        Ok(())
    }
}

#[derive(Debug, Clone)]
enum Op {
    Deposit(u64),
    Add {
        who: usize,
        total: u64,
        start_pct: u64,
        cliff_days: i64,
        months: u32,
    },
    Withdraw(usize),
    Recover,
    Advance(i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..1_000_000).prop_map(Op::Deposit),
        (0usize..3, 1u64..500_000, 0u64..=100, 0i64..90, 0u32..24).prop_map(
            |(who, total, start_pct, cliff_days, months)| Op::Add {
                who,
                total,
                start_pct,
                cliff_days,
                months,
            }
        ),
        (0usize..3).prop_map(Op::Withdraw),
        Just(Op::Recover),
        (0i64..100 * 86_400).prop_map(Op::Advance),
    ]
}

proptest! {
    #[test]
    fn vested_is_bounded_and_monotone(
        total in 1u64..u64::MAX,
        start_pct in 0u64..=100,
        months in 0u32..240,
        t1 in 0i64..20 * 365 * 86_400,
        dt in 0i64..5 * 365 * 86_400,
    ) {
        let start_amount = (total as u128 * start_pct as u128 / 100) as u64;
        let now = START - 86_400 + t1;
        let a = vested_amount(total, start_amount, START, months, now).unwrap();
        let b = vested_amount(total, start_amount, START, months, now + dt).unwrap();
        prop_assert!(a <= b);
        prop_assert!(b <= total);
    }

    #[test]
    fn vested_matches_epoch_formula(
        total in 1u64..1_000_000_000_000,
        start_pct in 0u64..=100,
        months in 1u32..60,
        k in 0u32..120,
    ) {
        let start_amount = total * start_pct / 100;
        let now = START + SECONDS_PER_EPOCH * k as i64;
        let expected = start_amount
            + ((total - start_amount) as u128 * k.min(months) as u128 / months as u128) as u64;
        prop_assert_eq!(
            vested_amount(total, start_amount, START, months, now).unwrap(),
            expected
        );
    }

    #[test]
    fn ledger_never_pays_more_than_vested_or_held(ops in prop::collection::vec(op(), 1..60)) {
        let admin = Pubkey::new_unique();
        let users = [Pubkey::new_unique(), Pubkey::new_unique(), Pubkey::new_unique()];
        let mut state = LedgerState { admin, ..Default::default() };
        let mut book = VestingBook::default();
        let mut pool = Pool { balance: 0 };
        let mut now = START;
        let mut paid = [0u64; 3];

        for op in ops {
            match op {
                Op::Deposit(amount) => pool.balance += amount,
                Op::Add { who, total, start_pct, cliff_days, months } => {
                    let allocation = Allocation {
                        beneficiary: users[who],
                        total_amount: total,
                        start_amount: total * start_pct / 100,
                        duration_months: months,
                    };
                    let before = (state.allocated_total, book.records.len());
                    let res = VestingLedger::new(&mut state, &mut book).add_vesting(
                        &admin,
                        allocation,
                        now + cliff_days * 86_400,
                        pool.balance,
                        now,
                    );
                    if res.is_err() {
                        prop_assert_eq!(before, (state.allocated_total, book.records.len()));
                    }
                }
                Op::Withdraw(who) => {
                    let first = VestingLedger::new(&mut state, &mut book)
                        .withdraw_all_available(&users[who], &mut pool, now)
                        .unwrap();
                    let second = VestingLedger::new(&mut state, &mut book)
                        .withdraw_all_available(&users[who], &mut pool, now)
                        .unwrap();
                    prop_assert_eq!(second, 0);
                    paid[who] += first;
                }
                Op::Recover => {
                    let _ = ledger::withdraw_unallocated_funds(&state, &admin, &admin, &mut pool);
                }
                Op::Advance(secs) => now += secs,
            }

            // Solvency: every outstanding promise is still in the pool.
            prop_assert!(pool.balance >= state.allocated_total - state.withdrawn_total);
            for (i, user) in users.iter().enumerate() {
                let mut vested = 0u64;
                let mut withdrawn = 0u64;
                for (_, r) in book.records_of(user) {
                    vested += r.vested_amount(now).unwrap();
                    withdrawn += r.withdrawn_amount;
                    prop_assert!(r.withdrawn_amount <= r.total_amount);
                }
                prop_assert!(withdrawn <= vested);
                prop_assert_eq!(withdrawn, paid[i]);
            }
        }
    }
}
