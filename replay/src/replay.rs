use dobutsu::{Game, InputEvent, InputOutcome};
use tracing::{debug, info};

use crate::recording::{Frame, Recorder};

/// Counts of what the inputs of a replay did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub moves: usize,
    pub captures: usize,
    pub drops: usize,
    pub selections: usize,
    pub deselections: usize,
    pub ignored: usize,
}

impl ReplaySummary {
    /// Moves plus drops, i.e. how often the turn passed.
    pub fn turns(&self) -> usize {
        self.moves + self.drops
    }
}

/// Feeds all events to the game, in order.
///
/// Illegal inputs are not errors, they are just counted and logged.
/// `on_turn` is called after every move and drop.
pub fn replay_events(
    game: &mut Game,
    events: &[InputEvent],
    recorder: &mut Option<Recorder>,
    mut on_turn: impl FnMut(&Game),
) -> ReplaySummary {
    let mut summary = ReplaySummary::default();
    if let Some(rec) = recorder {
        rec.store_frame(Frame {
            event: None,
            outcome: None,
            view: game.view(),
        });
    }

    for (event_idx, &event) in events.iter().enumerate() {
        let side = game.turn();
        let outcome = game.apply(event);
        match outcome {
            InputOutcome::Moved { from, to, captured } => {
                summary.moves += 1;
                if let Some(kind) = captured {
                    summary.captures += 1;
                    info!(event_idx, %side, %from, %to, captured = %kind, "Capture");
                } else {
                    info!(event_idx, %side, %from, %to, "Move");
                }
            }
            InputOutcome::Dropped { kind, at } => {
                summary.drops += 1;
                info!(event_idx, %side, %kind, %at, "Drop");
            }
            InputOutcome::Selected { at, candidates } => {
                summary.selections += 1;
                debug!(event_idx, %side, %at, candidates, "Selected piece");
            }
            InputOutcome::ReserveSelected { kind, candidates } => {
                summary.selections += 1;
                debug!(event_idx, %side, %kind, candidates, "Selected reserve piece");
            }
            InputOutcome::Deselected => {
                summary.deselections += 1;
                debug!(event_idx, ?event, "Deselected");
            }
            InputOutcome::Ignored => {
                summary.ignored += 1;
                debug!(event_idx, ?event, "Ignored");
            }
        }
        if outcome.is_turn() {
            on_turn(game);
        }
        if let Some(rec) = recorder {
            rec.store_frame(Frame {
                event: Some(event),
                outcome: Some(outcome),
                view: game.view(),
            });
        }
    }
    summary
}
