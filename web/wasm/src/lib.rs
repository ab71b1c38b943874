use bjtable::{
    Card, Event, Game, GameOptions, HistoryEntry, MemoryWallet, Outcome, RoundState, Seat, Stats,
    Suit, Wallet,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game<MemoryWallet, Vec<Event>>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let options = GameOptions::default();
        let wallet = MemoryWallet::new(options.starting_balance);
        Self {
            game: Game::new(options, wallet, Vec::new(), u64::from(seed)),
        }
    }

    /// Rebuilds the table around a saved wallet.
    ///
    /// `history` is an array shaped like the snapshot's `history` field,
    /// most recent first.
    pub fn restore(
        seed: u32,
        balance: u32,
        history: JsValue,
        total_games: u32,
        wins: u32,
        total_profit: i32,
    ) -> Result<Self, JsValue> {
        let options = GameOptions::default();
        let saved: Vec<SavedHistory> = if history.is_undefined() || history.is_null() {
            Vec::new()
        } else {
            serde_wasm_bindgen::from_value(history).map_err(js_err)?
        };
        let history = saved
            .into_iter()
            .map(HistoryEntry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let stats = Stats {
            total_games: u64::from(total_games),
            wins: u64::from(wins),
            total_profit: i64::from(total_profit),
        };
        let wallet = MemoryWallet::restore(
            u64::from(balance),
            history,
            stats,
            options.starting_balance,
            options.bankrupt_threshold,
        );
        Ok(Self {
            game: Game::new(options, wallet, Vec::new(), u64::from(seed)),
        })
    }

    pub fn bet(&mut self, amount: u32) -> Result<JsValue, JsValue> {
        let result = self.game.place_bet(u64::from(amount));
        let events = self.drain_events()?;
        result.map_err(js_err)?;
        Ok(events)
    }

    pub fn deal(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.deal();
        let events = self.drain_events()?;
        result.map_err(js_err)?;
        Ok(events)
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.hit();
        let events = self.drain_events()?;
        result.map_err(js_err)?;
        Ok(events)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.stand();
        let events = self.drain_events()?;
        result.map_err(js_err)?;
        Ok(events)
    }

    pub fn double_down(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.double_down();
        let events = self.drain_events()?;
        result.map_err(js_err)?;
        Ok(events)
    }

    pub fn split(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.split();
        let events = self.drain_events()?;
        result.map_err(js_err)?;
        Ok(events)
    }

    pub fn new_round(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.new_round();
        let events = self.drain_events()?;
        result.map_err(js_err)?;
        Ok(events)
    }

    pub fn reset_stats(&mut self) {
        self.game.wallet_mut().reset_stats();
    }

    pub fn reset_wallet(&mut self) -> Result<JsValue, JsValue> {
        self.game.wallet_mut().reset_balance();
        if self.game.state() == RoundState::Finished {
            self.game.new_round().map_err(js_err)?;
        }
        self.drain_events()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let wallet = self.game.wallet();
        let stats = wallet.stats();

        let snapshot = Snapshot {
            state: self.game.state().as_str(),
            balance: wallet.balance(),
            bet: self.game.bet(),
            player: self.game.player_hand().cards().iter().map(JsCard::from).collect(),
            dealer: self.game.dealer_hand().cards().iter().map(JsCard::from).collect(),
            player_score: self.game.player_score(),
            dealer_score: self.game.dealer_score(),
            outcome: self.game.outcome().map(Outcome::label),
            dealer_peeked: self.game.dealer_peeked(),
            actions: JsActions {
                deal: self.game.can_deal(),
                hit: self.game.can_hit(),
                stand: self.game.can_stand(),
                double: self.game.can_double(),
                split: self.game.can_split(),
            },
            stats: JsStats {
                total_games: stats.total_games,
                wins: stats.wins,
                win_rate: stats.win_rate(),
                total_profit: stats.total_profit,
            },
            history: wallet.history().map(JsHistory::from).collect(),
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self.game.sink_mut().drain(..).map(JsEvent::from).collect();
        to_js_value(&events)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    balance: u64,
    bet: u64,
    player: Vec<JsCard>,
    dealer: Vec<JsCard>,
    player_score: u8,
    dealer_score: Option<u8>,
    outcome: Option<&'static str>,
    dealer_peeked: bool,
    actions: JsActions,
    stats: JsStats,
    history: Vec<JsHistory>,
}

#[derive(Serialize)]
struct JsActions {
    deal: bool,
    hit: bool,
    stand: bool,
    double: bool,
    split: bool,
}

#[derive(Serialize)]
struct JsStats {
    total_games: u64,
    wins: u64,
    win_rate: f64,
    total_profit: i64,
}

#[derive(Serialize)]
struct JsHistory {
    round: u64,
    result: &'static str,
    bet: u64,
    profit: i64,
}

impl From<&HistoryEntry> for JsHistory {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            round: entry.round,
            result: entry.outcome.label(),
            bet: entry.bet,
            profit: entry.profit,
        }
    }
}

#[derive(Deserialize)]
struct SavedHistory {
    round: u64,
    result: String,
    bet: u64,
    profit: i64,
}

impl TryFrom<SavedHistory> for HistoryEntry {
    type Error = JsValue;

    fn try_from(saved: SavedHistory) -> Result<Self, Self::Error> {
        let outcome = Outcome::from_label(&saved.result)
            .ok_or_else(|| JsValue::from_str(&format!("unknown result: {}", saved.result)))?;
        Ok(Self {
            round: saved.round,
            outcome,
            bet: saved.bet,
            profit: saved.profit,
        })
    }
}

/// A card as the table shows it; face-down cards hide suit and rank.
#[derive(Serialize)]
struct JsCard {
    suit: Option<&'static str>,
    rank: Option<&'static str>,
    red: bool,
    hidden: bool,
}

impl From<&Card> for JsCard {
    fn from(card: &Card) -> Self {
        if card.concealed {
            return Self {
                suit: None,
                rank: None,
                red: false,
                hidden: true,
            };
        }
        Self {
            suit: Some(suit_to_str(card.suit)),
            rank: Some(card.rank.label()),
            red: card.suit.is_red(),
            hidden: false,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum JsEvent {
    BetPlaced { amount: u64, total: u64 },
    FundsRejected { amount: u64 },
    CardDealt { who: &'static str, card: JsCard },
    CardRevealed { card: JsCard },
    ScoreChanged { who: &'static str, score: Option<u8> },
    StateChanged { state: &'static str },
    DealerPeek { card: JsCard },
    SplitUnavailable,
    RoundFinished { outcome: &'static str, profit: i64 },
    RoundAborted { refund: u64 },
}

impl From<Event> for JsEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::BetPlaced { amount, total } => Self::BetPlaced { amount, total },
            Event::FundsRejected { amount } => Self::FundsRejected { amount },
            Event::CardDealt { seat, card } => Self::CardDealt {
                who: seat_to_str(seat),
                card: JsCard::from(&card),
            },
            Event::CardRevealed { card } => Self::CardRevealed {
                card: JsCard::from(&card),
            },
            Event::ScoreChanged { seat, score } => Self::ScoreChanged {
                who: seat_to_str(seat),
                score,
            },
            Event::StateChanged(state) => Self::StateChanged {
                state: state.as_str(),
            },
            Event::DealerPeek { up_card } => Self::DealerPeek {
                card: JsCard::from(&up_card),
            },
            Event::SplitUnavailable => Self::SplitUnavailable,
            Event::RoundFinished { outcome, profit } => Self::RoundFinished {
                outcome: outcome.label(),
                profit,
            },
            Event::RoundAborted { refund } => Self::RoundAborted { refund },
        }
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Spades => "♠",
        Suit::Clubs => "♣",
        Suit::Hearts => "♥",
        Suit::Diamonds => "♦",
    }
}

fn seat_to_str(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "player",
        Seat::Dealer => "dealer",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
