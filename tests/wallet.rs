//! Wallet integration tests.

use bjtable::{HISTORY_LIMIT, HistoryEntry, MemoryWallet, Outcome, STARTING_BALANCE, Stats, Wallet};

#[test]
fn spend_and_credit() {
    let mut wallet = MemoryWallet::default();
    assert_eq!(wallet.balance(), STARTING_BALANCE);

    assert!(wallet.spend(40_000));
    assert_eq!(wallet.balance(), 60_000);

    assert!(!wallet.spend(60_001));
    assert_eq!(wallet.balance(), 60_000);

    wallet.credit(0);
    wallet.credit(5_000);
    assert_eq!(wallet.balance(), 65_000);
}

#[test]
fn history_is_bounded_and_most_recent_first() {
    let mut wallet = MemoryWallet::default();

    for i in 0..15_i64 {
        wallet.record_outcome(Outcome::PlayerWin, 10_000, i);
    }

    assert_eq!(wallet.history_len(), HISTORY_LIMIT);
    let rounds: Vec<u64> = wallet.history().map(|h| h.round).collect();
    assert_eq!(rounds, (6..=15).rev().collect::<Vec<_>>());
    assert_eq!(wallet.history().next().map(|h| h.profit), Some(14));
}

#[test]
fn stats_track_wins_and_profit() {
    let mut wallet = MemoryWallet::default();
    wallet.record_outcome(Outcome::PlayerWin, 10_000, 10_000);
    wallet.record_outcome(Outcome::Push, 10_000, 0);
    wallet.record_outcome(Outcome::DealerWin, 20_000, -20_000);
    wallet.record_outcome(Outcome::DealerBust, 10_000, 10_000);

    let stats = wallet.stats();
    assert_eq!(stats.total_games, 4);
    assert_eq!(stats.wins, 2);
    assert_eq!(stats.total_profit, 0);
    assert!((stats.win_rate() - 50.0).abs() < f64::EPSILON);

    assert!(Stats::default().win_rate().abs() < f64::EPSILON);
}

#[test]
fn reset_stats_keeps_balance() {
    let mut wallet = MemoryWallet::new(30_000);
    wallet.record_outcome(Outcome::PlayerBust, 10_000, -10_000);
    wallet.reset_stats();

    assert_eq!(wallet.history_len(), 0);
    assert_eq!(wallet.stats(), Stats::default());
    assert_eq!(wallet.balance(), 30_000);
}

#[test]
fn reset_balance_returns_to_start() {
    let mut wallet = MemoryWallet::new(30_000);
    assert!(wallet.spend(25_000));
    wallet.reset_balance();
    assert_eq!(wallet.balance(), 30_000);
}

#[test]
fn restore_resets_bankrupt_balance() {
    let wallet = MemoryWallet::restore(9_999, [], Stats::default(), STARTING_BALANCE, 10_000);
    assert_eq!(wallet.balance(), STARTING_BALANCE);

    let wallet = MemoryWallet::restore(10_000, [], Stats::default(), STARTING_BALANCE, 10_000);
    assert_eq!(wallet.balance(), 10_000);
}

#[test]
fn restore_keeps_history_and_continues_numbering() {
    let saved = [
        HistoryEntry {
            round: 2,
            outcome: Outcome::Push,
            bet: 10_000,
            profit: 0,
        },
        HistoryEntry {
            round: 1,
            outcome: Outcome::DealerWin,
            bet: 10_000,
            profit: -10_000,
        },
    ];
    let stats = Stats {
        total_games: 2,
        wins: 0,
        total_profit: -10_000,
    };

    let mut wallet = MemoryWallet::restore(90_000, saved, stats, STARTING_BALANCE, 10_000);
    wallet.record_outcome(Outcome::PlayerWin, 10_000, 10_000);

    let rounds: Vec<u64> = wallet.history().map(|h| h.round).collect();
    assert_eq!(rounds, vec![3, 2, 1]);
    assert_eq!(wallet.stats().total_games, 3);
    assert_eq!(wallet.stats().total_profit, 0);
}

#[test]
fn outcome_labels_and_multipliers() {
    assert_eq!(Outcome::PlayerWin.to_string(), "PLAYER WIN");
    assert_eq!(Outcome::DealerBust.to_string(), "DEALER BUST");
    assert_eq!(Outcome::PlayerBust.label(), "PLAYER BUST");
    assert_eq!(Outcome::Push.multiplier(), 1);
    assert_eq!(Outcome::DealerWin.multiplier(), 0);
    assert_eq!(Outcome::DealerBust.multiplier(), 2);
}

#[test]
fn outcomes_parse_from_their_labels() {
    for outcome in Outcome::ALL {
        assert_eq!(Outcome::from_label(outcome.label()), Some(outcome));
    }
    assert_eq!(Outcome::from_label("BLACKJACK"), None);
}

#[test]
fn credit_and_profit_saturate() {
    let mut wallet = MemoryWallet::new(u64::MAX - 1);
    wallet.credit(10);
    assert_eq!(wallet.balance(), u64::MAX);

    wallet.record_outcome(Outcome::PlayerWin, u64::MAX, i64::MAX);
    wallet.record_outcome(Outcome::PlayerWin, u64::MAX, i64::MAX);
    assert_eq!(wallet.stats().total_profit, i64::MAX);
}

#[test]
fn restore_accepts_history_parsed_from_labels() {
    let saved = [("PUSH", 2_u64, 0_i64), ("DEALER BUST", 1, 10_000)];
    let history = saved.iter().map(|&(label, round, profit)| HistoryEntry {
        round,
        outcome: Outcome::from_label(label).unwrap(),
        bet: 10_000,
        profit,
    });

    let wallet = MemoryWallet::restore(50_000, history, Stats::default(), STARTING_BALANCE, 10_000);
    let outcomes: Vec<Outcome> = wallet.history().map(|h| h.outcome).collect();
    assert_eq!(outcomes, vec![Outcome::Push, Outcome::DealerBust]);
}
