//! Machine model.
//!
//! Machines are identical: any task can run on any machine at the same
//! speed. A machine carries the tasks assigned to it, in assignment order,
//! and the resulting load.

use serde::{Deserialize, Serialize};

use super::Task;

/// A machine and the tasks currently assigned to it.
///
/// `load` always equals the sum of the assigned task durations. Mutation
/// goes through [`push`](Machine::push) and [`remove`](Machine::remove)
/// so the two cannot drift apart. Deserialization ignores any stored
/// `load` and recomputes it from the tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MachineRecord")]
pub struct Machine {
    /// Machine identifier, in `[0, m)`.
    pub id: usize,
    tasks: Vec<Task>,
    load: i64,
}

/// Serialized form of a [`Machine`] as read back from input.
#[derive(Deserialize)]
struct MachineRecord {
    id: usize,
    tasks: Vec<Task>,
}

impl TryFrom<MachineRecord> for Machine {
    type Error = String;

    fn try_from(record: MachineRecord) -> Result<Self, Self::Error> {
        let load = record
            .tasks
            .iter()
            .try_fold(0i64, |acc, t| acc.checked_add(t.duration))
            .ok_or_else(|| format!("machine {} load exceeds i64", record.id))?;
        Ok(Self {
            id: record.id,
            tasks: record.tasks,
            load,
        })
    }
}

impl Machine {
    /// Creates an empty machine.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            tasks: Vec::new(),
            load: 0,
        }
    }

    /// Assigned tasks in assignment order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Current load (sum of assigned durations).
    #[inline]
    pub fn load(&self) -> i64 {
        self.load
    }

    /// Number of assigned tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks are assigned.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// IDs of assigned tasks in assignment order.
    pub fn task_ids(&self) -> Vec<usize> {
        self.tasks.iter().map(|t| t.id).collect()
    }

    /// Appends a task and adds its duration to the load.
    pub fn push(&mut self, task: Task) {
        self.load += task.duration;
        self.tasks.push(task);
    }

    /// Removes the task at `position` and subtracts its duration.
    ///
    /// Returns `None` if the position is out of range.
    pub fn remove(&mut self, position: usize) -> Option<Task> {
        if position >= self.tasks.len() {
            return None;
        }
        let task = self.tasks.remove(position);
        self.load -= task.duration;
        Some(task)
    }

    /// Position of the longest task; ties resolve to the earliest position.
    pub fn longest_task_position(&self) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (pos, task) in self.tasks.iter().enumerate() {
            match best {
                Some((_, d)) if task.duration <= d => {}
                _ => best = Some((pos, task.duration)),
            }
        }
        best.map(|(pos, _)| pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove() {
        let mut m = Machine::new(0);
        m.push(Task::new(0, 5));
        m.push(Task::new(1, 7));
        assert_eq!(m.load(), 12);
        assert_eq!(m.task_ids(), vec![0, 1]);

        let removed = m.remove(0).unwrap();
        assert_eq!(removed, Task::new(0, 5));
        assert_eq!(m.load(), 7);
        assert_eq!(m.task_count(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut m = Machine::new(0);
        assert!(m.remove(0).is_none());
        assert_eq!(m.load(), 0);
    }

    #[test]
    fn test_longest_task_earliest_tie() {
        let mut m = Machine::new(0);
        m.push(Task::new(3, 4));
        m.push(Task::new(1, 9));
        m.push(Task::new(2, 9));
        assert_eq!(m.longest_task_position(), Some(1));
    }

    #[test]
    fn test_deserialize_recomputes_load() {
        let json = r#"{"id":1,"tasks":[{"id":0,"duration":5},{"id":3,"duration":4}],"load":999}"#;
        let m: Machine = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, 1);
        assert_eq!(m.load(), 9);
        assert_eq!(m.task_ids(), vec![0, 3]);
    }

    #[test]
    fn test_deserialize_round_trip_keeps_load() {
        let mut m = Machine::new(2);
        m.push(Task::new(0, 6));
        let json = serde_json::to_string(&m).unwrap();
        let back: Machine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_deserialize_rejects_load_overflow() {
        let json = format!(
            r#"{{"id":0,"tasks":[{{"id":0,"duration":{max}}},{{"id":1,"duration":1}}]}}"#,
            max = i64::MAX
        );
        assert!(serde_json::from_str::<Machine>(&json).is_err());
    }

    #[test]
    fn test_longest_task_empty() {
        assert_eq!(Machine::new(0).longest_task_position(), None);
        assert!(Machine::new(0).is_empty());
    }
}
