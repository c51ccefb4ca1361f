//! The daily-routine transition table.
//!
//! | event        | accepted from     | next state |
//! |--------------|-------------------|------------|
//! | `study`      | normal            | busy       |
//! | `get_tired`  | busy              | sleeping   |
//! | `get_hungry` | busy, sleeping    | hungry     |
//! | `eat`        | hungry            | normal     |
//! | `get_up`     | sleeping          | normal     |

use crate::core::TransitionTable;
use crate::engine::Fsm;

crate::state_enum! {
    /// What the subject is currently doing.
    pub enum Activity {
        Normal => "normal",
        Busy => "busy",
        Hungry => "hungry",
        Sleeping => "sleeping",
    }
}

crate::event_enum! {
    /// Something that happens to the subject.
    pub enum RoutineEvent {
        Study => "study",
        GetTired => "get_tired",
        GetHungry => "get_hungry",
        Eat => "eat",
        GetUp => "get_up",
    }
}

/// Fixed table for [`Activity`] and [`RoutineEvent`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DailyRoutine;

impl TransitionTable for DailyRoutine {
    type State = Activity;
    type Event = RoutineEvent;

    fn next(from: Activity, event: RoutineEvent) -> Option<Activity> {
        use Activity::*;
        use RoutineEvent::*;

        match (event, from) {
            (Study, Normal) => Some(Busy),
            (Study, Busy | Hungry | Sleeping) => None,

            (GetTired, Busy) => Some(Sleeping),
            (GetTired, Normal | Hungry | Sleeping) => None,

            (GetHungry, Busy | Sleeping) => Some(Hungry),
            (GetHungry, Normal | Hungry) => None,

            (Eat, Hungry) => Some(Normal),
            (Eat, Normal | Busy | Sleeping) => None,

            (GetUp, Sleeping) => Some(Normal),
            (GetUp, Normal | Busy | Hungry) => None,
        }
    }

    fn sources(event: RoutineEvent) -> &'static [Activity] {
        match event {
            RoutineEvent::Study => &[Activity::Normal],
            RoutineEvent::GetTired => &[Activity::Busy],
            RoutineEvent::GetHungry => &[Activity::Busy, Activity::Sleeping],
            RoutineEvent::Eat => &[Activity::Hungry],
            RoutineEvent::GetUp => &[Activity::Sleeping],
        }
    }
}

/// Engine driven by the daily-routine table.
pub type RoutineFsm = Fsm<DailyRoutine>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, State};

    #[test]
    fn table_targets() {
        assert_eq!(
            DailyRoutine::next(Activity::Normal, RoutineEvent::Study),
            Some(Activity::Busy)
        );
        assert_eq!(
            DailyRoutine::next(Activity::Busy, RoutineEvent::GetTired),
            Some(Activity::Sleeping)
        );
        assert_eq!(
            DailyRoutine::next(Activity::Busy, RoutineEvent::GetHungry),
            Some(Activity::Hungry)
        );
        assert_eq!(
            DailyRoutine::next(Activity::Sleeping, RoutineEvent::GetHungry),
            Some(Activity::Hungry)
        );
        assert_eq!(
            DailyRoutine::next(Activity::Hungry, RoutineEvent::Eat),
            Some(Activity::Normal)
        );
        assert_eq!(
            DailyRoutine::next(Activity::Sleeping, RoutineEvent::GetUp),
            Some(Activity::Normal)
        );
    }

    #[test]
    fn sources_agree_with_next() {
        for event in RoutineEvent::ALL {
            for state in Activity::ALL {
                let listed = DailyRoutine::sources(*event).contains(state);
                assert_eq!(listed, DailyRoutine::accepts(*state, *event));
            }
        }
    }

    #[test]
    fn normal_only_accepts_study() {
        assert_eq!(
            DailyRoutine::events_from(Activity::Normal),
            vec![RoutineEvent::Study]
        );
        assert_eq!(
            DailyRoutine::events_from(Activity::Sleeping),
            vec![RoutineEvent::GetHungry, RoutineEvent::GetUp]
        );
    }

    #[test]
    fn token_names_match_wire_identifiers() {
        let states: Vec<_> = Activity::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(states, ["normal", "busy", "hungry", "sleeping"]);

        let events: Vec<_> = RoutineEvent::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(events, ["study", "get_tired", "get_hungry", "eat", "get_up"]);
    }
}
