/// Progress derivation for event checklists
///
/// Pure functions computing the completion percentage and the derived event
/// status from a list of task statuses. Both are referentially transparent;
/// the same input always yields the same output.
///
/// # Rounding Policy
///
/// `completion_percent` rounds half up, using integer arithmetic so the
/// policy cannot drift with floating-point behavior: two of three tasks
/// done is 67%, one of eight is 13%.
///
/// # Example
///
/// ```
/// use eventhub_core::models::task::TaskStatus;
/// use eventhub_core::models::event::EventStatus;
/// use eventhub_core::progress::{completion_percent, derive_event_status};
///
/// let tasks = [TaskStatus::Done, TaskStatus::Done, TaskStatus::Pending];
///
/// assert_eq!(completion_percent(tasks), 67);
/// assert_eq!(derive_event_status(tasks), EventStatus::Planning);
/// ```

use crate::models::event::EventStatus;
use crate::models::task::TaskStatus;

/// Computes the checklist completion percentage, 0..=100
///
/// Returns 0 for an empty checklist. Otherwise `100 * done / total`,
/// rounded half up.
pub fn completion_percent<I>(statuses: I) -> u8
where
    I: IntoIterator<Item = TaskStatus>,
{
    let mut done: u32 = 0;
    let mut total: u32 = 0;

    for status in statuses {
        total += 1;
        if status.is_done() {
            done += 1;
        }
    }

    if total == 0 {
        return 0;
    }

    // round(100 * done / total), half up
    ((200 * done + total) / (2 * total)) as u8
}

/// Derives an event's status from its checklist
///
/// `Completed` iff the checklist is non-empty and every task is done;
/// otherwise `Planning`. Invoked after every task mutation so the persisted
/// event status tracks its tasks.
pub fn derive_event_status<I>(statuses: I) -> EventStatus
where
    I: IntoIterator<Item = TaskStatus>,
{
    let mut total = 0usize;

    for status in statuses {
        if !status.is_done() {
            return EventStatus::Planning;
        }
        total += 1;
    }

    if total > 0 {
        EventStatus::Completed
    } else {
        EventStatus::Planning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use TaskStatus::{Done, Pending};

    #[test]
    fn test_empty_checklist_is_zero_percent() {
        assert_eq!(completion_percent([]), 0);
    }

    #[test]
    fn test_completion_percent_vectors() {
        assert_eq!(completion_percent([Done]), 100);
        assert_eq!(completion_percent([Pending]), 0);
        assert_eq!(completion_percent([Done, Pending]), 50);
        assert_eq!(completion_percent([Done, Done, Pending]), 67);
        assert_eq!(completion_percent([Done, Pending, Pending]), 33);
    }

    #[test]
    fn test_completion_percent_rounds_half_up() {
        // 1/8 = 12.5% -> 13
        assert_eq!(
            completion_percent([Done, Pending, Pending, Pending, Pending, Pending, Pending, Pending]),
            13
        );
    }

    #[test]
    fn test_completion_percent_is_deterministic() {
        let tasks = [Done, Done, Pending, Done];
        assert_eq!(completion_percent(tasks), completion_percent(tasks));
    }

    #[test]
    fn test_empty_checklist_derives_planning() {
        assert_eq!(derive_event_status([]), EventStatus::Planning);
    }

    #[test]
    fn test_all_done_derives_completed() {
        assert_eq!(derive_event_status([Done, Done]), EventStatus::Completed);
        assert_eq!(derive_event_status([Done]), EventStatus::Completed);
    }

    #[test]
    fn test_open_task_derives_planning() {
        assert_eq!(derive_event_status([Done, Pending]), EventStatus::Planning);
        assert_eq!(derive_event_status([Pending]), EventStatus::Planning);
    }
}
