//! Schedule (solution) model.
//!
//! A schedule maps every machine, including idle ones, to the ordered
//! list of tasks it processes. Since machines are identical and tasks are
//! non-preemptive, a machine's completion time is simply its load.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5 (P||C_max)

use serde::{Deserialize, Serialize};

use super::{Machine, Task};

/// A complete assignment of tasks to identical parallel machines.
///
/// Always holds exactly `machine_count` machines, indexed by their ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    machines: Vec<Machine>,
}

impl Schedule {
    /// Creates a schedule of `machine_count` empty machines.
    pub fn new(machine_count: usize) -> Self {
        Self {
            machines: (0..machine_count).map(Machine::new).collect(),
        }
    }

    /// Number of machines (idle ones included).
    pub fn machine_count(&self) -> usize {
        self.machines.len()
    }

    /// All machines, indexed by ID.
    pub fn machines(&self) -> &[Machine] {
        &self.machines
    }

    /// Looks up a machine by ID.
    pub fn machine(&self, machine_id: usize) -> Option<&Machine> {
        self.machines.get(machine_id)
    }

    /// Appends a task to a machine.
    ///
    /// # Panics
    /// Panics if `machine_id` is out of range.
    pub fn assign(&mut self, machine_id: usize, task: Task) {
        self.machines[machine_id].push(task);
    }

    /// Moves the task at `position` on machine `from` to the end of machine `to`.
    ///
    /// Returns the moved task, or `None` if either machine or the position
    /// does not exist (the schedule is left untouched in that case).
    pub fn move_task(&mut self, from: usize, position: usize, to: usize) -> Option<Task> {
        if to >= self.machines.len() {
            return None;
        }
        let task = self.machines.get_mut(from)?.remove(position)?;
        self.machines[to].push(task);
        Some(task)
    }

    /// Per-machine loads, indexed by machine ID.
    pub fn loads(&self) -> Vec<i64> {
        self.machines.iter().map(Machine::load).collect()
    }

    /// Sum of all machine loads.
    pub fn total_load(&self) -> i64 {
        self.machines.iter().map(Machine::load).sum()
    }

    /// Makespan (C_max): the largest machine load, 0 when all are idle.
    pub fn makespan(&self) -> i64 {
        self.machines.iter().map(Machine::load).max().unwrap_or(0)
    }

    /// Smallest machine load.
    pub fn min_load(&self) -> i64 {
        self.machines.iter().map(Machine::load).min().unwrap_or(0)
    }

    /// Most loaded machine; ties resolve to the lowest ID.
    pub fn bottleneck(&self) -> Option<usize> {
        let mut best: Option<&Machine> = None;
        for m in &self.machines {
            match best {
                Some(b) if m.load() <= b.load() => {}
                _ => best = Some(m),
            }
        }
        best.map(|m| m.id)
    }

    /// Least loaded machine; ties resolve to the lowest ID.
    pub fn least_loaded(&self) -> Option<usize> {
        let mut best: Option<&Machine> = None;
        for m in &self.machines {
            match best {
                Some(b) if m.load() >= b.load() => {}
                _ => best = Some(m),
            }
        }
        best.map(|m| m.id)
    }

    /// Task IDs assigned to a machine, in assignment order.
    pub fn task_ids(&self, machine_id: usize) -> Option<Vec<usize>> {
        self.machine(machine_id).map(Machine::task_ids)
    }

    /// Machine holding the given task.
    pub fn machine_of(&self, task_id: usize) -> Option<usize> {
        self.machines
            .iter()
            .find(|m| m.tasks().iter().any(|t| t.id == task_id))
            .map(|m| m.id)
    }

    /// Total number of assigned tasks.
    pub fn task_count(&self) -> usize {
        self.machines.iter().map(Machine::task_count).sum()
    }

    /// Whether every task in `tasks` appears on exactly one machine and
    /// nothing else is assigned.
    pub fn covers_exactly(&self, tasks: &[Task]) -> bool {
        if self.task_count() != tasks.len() {
            return false;
        }
        let mut seen = vec![false; tasks.len()];
        for task in self.machines.iter().flat_map(|m| m.tasks()) {
            match seen.get_mut(task.id) {
                Some(flag) if !*flag && tasks[task.id] == *task => *flag = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|s| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        let mut s = Schedule::new(3);
        s.assign(0, Task::new(0, 5));
        s.assign(0, Task::new(1, 3));
        s.assign(1, Task::new(2, 8));
        s
    }

    #[test]
    fn test_new_has_all_machines() {
        let s = Schedule::new(4);
        assert_eq!(s.machine_count(), 4);
        assert_eq!(s.loads(), vec![0, 0, 0, 0]);
        assert_eq!(s.makespan(), 0);
    }

    #[test]
    fn test_loads_and_makespan() {
        let s = sample();
        assert_eq!(s.loads(), vec![8, 8, 0]);
        assert_eq!(s.total_load(), 16);
        assert_eq!(s.makespan(), 8);
        assert_eq!(s.min_load(), 0);
    }

    #[test]
    fn test_bottleneck_and_trough_tie_lowest_id() {
        let s = sample();
        assert_eq!(s.bottleneck(), Some(0));
        assert_eq!(s.least_loaded(), Some(2));

        let empty = Schedule::new(3);
        assert_eq!(empty.bottleneck(), Some(0));
        assert_eq!(empty.least_loaded(), Some(0));
    }

    #[test]
    fn test_move_task() {
        let mut s = sample();
        let moved = s.move_task(0, 0, 2).unwrap();
        assert_eq!(moved.id, 0);
        assert_eq!(s.loads(), vec![3, 8, 5]);
        assert_eq!(s.task_ids(2), Some(vec![0]));
        assert_eq!(s.machine_of(0), Some(2));
    }

    #[test]
    fn test_move_task_invalid() {
        let mut s = sample();
        assert!(s.move_task(0, 5, 1).is_none());
        assert!(s.move_task(0, 0, 9).is_none());
        assert!(s.move_task(9, 0, 1).is_none());
        assert_eq!(s, sample());
    }

    #[test]
    fn test_deserialize_recomputes_loads() {
        let json = r#"{"machines":[
            {"id":0,"tasks":[{"id":0,"duration":5}],"load":0},
            {"id":1,"tasks":[],"load":42}
        ]}"#;
        let s: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(s.loads(), vec![5, 0]);
        assert_eq!(s.makespan(), 5);
    }

    #[test]
    fn test_covers_exactly() {
        let tasks = Task::from_durations(&[5, 3, 8]);
        let s = sample();
        assert!(s.covers_exactly(&tasks));
        assert!(!s.covers_exactly(&tasks[..2]));

        let mut dup = sample();
        dup.assign(2, Task::new(0, 5));
        assert!(!dup.covers_exactly(&Task::from_durations(&[5, 3, 8, 1])));
    }
}
