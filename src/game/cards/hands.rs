use thiserror::Error;

use super::basic::Card;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Hand does not hold card: {0}")]
    CardNotInHand(Card),
}

/// Remove `meld` from `hand`, one card at a time in meld order.
///
/// Each meld card takes out the first equal card still in the hand, so with
/// duplicates the earliest copy goes first. Ownership of every card is checked
/// before anything is removed; on error the hand is unchanged.
pub fn remove_meld(meld: &[Card], hand: &mut Vec<Card>) -> Result<(), HandError> {
    let mut claimed = vec![false; hand.len()];
    for card in meld {
        let pos = hand
            .iter()
            .zip(claimed.iter())
            .position(|(c, taken)| !taken && c == card)
            .ok_or(HandError::CardNotInHand(*card))?;
        claimed[pos] = true;
    }

    let mut claimed = claimed.into_iter();
    hand.retain(|_| !claimed.next().unwrap_or(false));
    Ok(())
}
