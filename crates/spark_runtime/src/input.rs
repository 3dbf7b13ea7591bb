//! Pointer input to burst cues
//!
//! Left click completes a one-off task, right click a daily one. Holding
//! Shift marks it due soon, Ctrl marks it overdue.

use spark_services::{BurstCue, Urgency};
use winit::event::MouseButton;
use winit::keyboard::ModifiersState;

pub fn cue_for(button: MouseButton, modifiers: ModifiersState) -> Option<BurstCue> {
    let daily = match button {
        MouseButton::Left => false,
        MouseButton::Right => true,
        _ => return None,
    };
    let urgency = if modifiers.control_key() {
        Urgency::Overdue
    } else if modifiers.shift_key() {
        Urgency::DueSoon
    } else {
        Urgency::None
    };
    Some(BurstCue { daily, urgency })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_pick_category() {
        let none = ModifiersState::empty();
        assert_eq!(
            cue_for(MouseButton::Left, none),
            Some(BurstCue { daily: false, urgency: Urgency::None })
        );
        assert_eq!(
            cue_for(MouseButton::Right, none),
            Some(BurstCue { daily: true, urgency: Urgency::None })
        );
        assert_eq!(cue_for(MouseButton::Middle, none), None);
    }

    #[test]
    fn modifiers_pick_urgency() {
        let cue = cue_for(MouseButton::Left, ModifiersState::SHIFT).map(|c| c.urgency);
        assert_eq!(cue, Some(Urgency::DueSoon));

        // ctrl wins when both are held
        let both = ModifiersState::SHIFT | ModifiersState::CONTROL;
        let cue = cue_for(MouseButton::Right, both).map(|c| c.urgency);
        assert_eq!(cue, Some(Urgency::Overdue));
    }
}
