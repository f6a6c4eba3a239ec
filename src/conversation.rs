//! Conversation state machine for collecting `(from, to, amount)` one
//! message at a time.
//!
//! The machine is a pure transition function over an explicit state enum:
//! the transport layer maps Telegram updates to [`Event`]s, feeds them
//! through [`apply_event`], and renders the resulting [`Outcome`] back to
//! the user. Absence of a record in the store is the implicit initial
//! state ("awaiting direction selection").

use serde::{Deserialize, Serialize};

use crate::amount::parse_amount;
use crate::store::ConversationStore;

/// Per-user conversation state. Currency codes are carried inside the
/// variants, so a state that needs a code always has one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationState {
    /// Manual entry: waiting for the source currency code.
    AwaitingFromCurrency,
    /// Manual entry: source known, waiting for the target currency code.
    AwaitingToCurrency { from: String },
    /// Direction known (via buttons or manual entry), waiting for the amount.
    AwaitingAmount { from: String, to: String },
}

/// One inbound user action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// A quick-select button carrying a ready `(from, to)` pair.
    PairSelected { from: String, to: String },
    /// The manual-entry button.
    ManualRequested,
    /// A free-form text message.
    Text(String),
}

/// The fully resolved conversion input. Built once the amount parses;
/// never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
}

/// What the transport layer should do after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// No conversation in progress: re-offer the direction keyboard.
    AskDirection,
    /// Prompt for the source currency code (manual entry).
    AskFromCurrency,
    /// Prompt for the target currency code (manual entry).
    AskToCurrency,
    /// Prompt for the amount, denominated in `from`.
    AskAmount { from: String },
    /// The amount did not parse; prompt again, keeping the record.
    InvalidAmount,
    /// All three inputs collected: run the conversion. The record is
    /// already cleared, so a failed lookup cannot strand stale state.
    Convert(ConversionRequest),
}

/// The single transition function: `(state, event) -> (state', outcome)`.
///
/// `None` on either side is the no-record state. Pure and total over all
/// state/event combinations.
pub fn transition(
    state: Option<ConversationState>,
    event: Event,
) -> (Option<ConversationState>, Outcome) {
    match (state, event) {
        // A direction choice always (re)starts the flow, discarding any
        // partially collected manual entry.
        (_, Event::PairSelected { from, to }) => (
            Some(ConversationState::AwaitingAmount {
                from: from.clone(),
                to,
            }),
            Outcome::AskAmount { from },
        ),
        (_, Event::ManualRequested) => (
            Some(ConversationState::AwaitingFromCurrency),
            Outcome::AskFromCurrency,
        ),
        (None, Event::Text(_)) => (None, Outcome::AskDirection),
        (Some(ConversationState::AwaitingFromCurrency), Event::Text(text)) => (
            Some(ConversationState::AwaitingToCurrency {
                from: text.trim().to_uppercase(),
            }),
            Outcome::AskToCurrency,
        ),
        (Some(ConversationState::AwaitingToCurrency { from }), Event::Text(text)) => (
            Some(ConversationState::AwaitingAmount {
                from: from.clone(),
                to: text.trim().to_uppercase(),
            }),
            Outcome::AskAmount { from },
        ),
        (Some(ConversationState::AwaitingAmount { from, to }), Event::Text(text)) => {
            match parse_amount(&text) {
                Some(amount) => (
                    None,
                    Outcome::Convert(ConversionRequest { from, to, amount }),
                ),
                None => (
                    Some(ConversationState::AwaitingAmount { from, to }),
                    Outcome::InvalidAmount,
                ),
            }
        }
    }
}

/// Run one event through the user's record in the store: read, transition,
/// write back (or delete), and hand the outcome to the caller.
///
/// Per-user event processing is sequential at the transport layer, and the
/// store serializes mutation, so two interleaved messages cannot corrupt a
/// record.
pub async fn apply_event(store: &ConversationStore, user_id: u64, event: Event) -> Outcome {
    let current = store.get(user_id).await;
    let (next, outcome) = transition(current, event);
    match next {
        Some(state) => store.put(user_id, state).await,
        None => store.delete(user_id).await,
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair_event() -> Event {
        Event::PairSelected {
            from: "USD".to_string(),
            to: "RUB".to_string(),
        }
    }

    #[test]
    fn test_pair_selection_from_no_record() {
        let (state, outcome) = transition(None, pair_event());
        assert_eq!(
            state,
            Some(ConversationState::AwaitingAmount {
                from: "USD".to_string(),
                to: "RUB".to_string(),
            })
        );
        assert_eq!(
            outcome,
            Outcome::AskAmount {
                from: "USD".to_string()
            }
        );
    }

    #[test]
    fn test_manual_entry_collects_both_codes() {
        let (state, outcome) = transition(None, Event::ManualRequested);
        assert_eq!(state, Some(ConversationState::AwaitingFromCurrency));
        assert_eq!(outcome, Outcome::AskFromCurrency);

        let (state, outcome) = transition(state, Event::Text("  usd ".to_string()));
        assert_eq!(
            state,
            Some(ConversationState::AwaitingToCurrency {
                from: "USD".to_string()
            })
        );
        assert_eq!(outcome, Outcome::AskToCurrency);

        let (state, outcome) = transition(state, Event::Text("kzt".to_string()));
        assert_eq!(
            state,
            Some(ConversationState::AwaitingAmount {
                from: "USD".to_string(),
                to: "KZT".to_string(),
            })
        );
        assert_eq!(
            outcome,
            Outcome::AskAmount {
                from: "USD".to_string()
            }
        );
    }

    #[test]
    fn test_text_without_record_asks_for_direction() {
        let (state, outcome) = transition(None, Event::Text("100".to_string()));
        assert_eq!(state, None);
        assert_eq!(outcome, Outcome::AskDirection);
    }

    #[test]
    fn test_valid_amount_produces_conversion_and_clears_state() {
        let awaiting = Some(ConversationState::AwaitingAmount {
            from: "USD".to_string(),
            to: "RUB".to_string(),
        });
        let (state, outcome) = transition(awaiting, Event::Text("1 234,56".to_string()));
        assert_eq!(state, None);
        assert_eq!(
            outcome,
            Outcome::Convert(ConversionRequest {
                from: "USD".to_string(),
                to: "RUB".to_string(),
                amount: 1234.56,
            })
        );
    }

    #[test]
    fn test_invalid_amount_keeps_record() {
        let awaiting = Some(ConversationState::AwaitingAmount {
            from: "USD".to_string(),
            to: "RUB".to_string(),
        });
        let (state, outcome) = transition(awaiting.clone(), Event::Text("abc".to_string()));
        assert_eq!(state, awaiting);
        assert_eq!(outcome, Outcome::InvalidAmount);
    }

    #[test]
    fn test_reselect_overwrites_partial_manual_entry() {
        let mid_manual = Some(ConversationState::AwaitingToCurrency {
            from: "GBP".to_string(),
        });
        let (state, outcome) = transition(mid_manual, pair_event());
        assert_eq!(
            state,
            Some(ConversationState::AwaitingAmount {
                from: "USD".to_string(),
                to: "RUB".to_string(),
            })
        );
        assert_eq!(
            outcome,
            Outcome::AskAmount {
                from: "USD".to_string()
            }
        );
    }

    #[test]
    fn test_manual_button_restarts_from_any_state() {
        let awaiting = Some(ConversationState::AwaitingAmount {
            from: "USD".to_string(),
            to: "RUB".to_string(),
        });
        let (state, outcome) = transition(awaiting, Event::ManualRequested);
        assert_eq!(state, Some(ConversationState::AwaitingFromCurrency));
        assert_eq!(outcome, Outcome::AskFromCurrency);
    }
}
