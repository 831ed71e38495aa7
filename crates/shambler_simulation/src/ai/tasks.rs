//! Fire-once отложенные задачи (замена engine Invoke)
//!
//! Очередь принадлежит владельцу (одному агенту) и продвигается тем же тиком,
//! что и FSM. Никаких потоков: `advance` возвращает созревшие задачи,
//! владелец применяет их сам.

use std::time::Duration;

/// Порядковый номер планирования (tie-break при равном due)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct TaskId(u64);

#[derive(Debug)]
struct PendingTask<T> {
    id: TaskId,
    due: Duration,
    task: T,
}

#[derive(Debug)]
pub struct DeferredTasks<T> {
    clock: Duration,
    next_id: u64,
    pending: Vec<PendingTask<T>>,
}

impl<T> Default for DeferredTasks<T> {
    fn default() -> Self {
        Self {
            clock: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> DeferredTasks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запланировать задачу через `delay` от текущего clock
    ///
    /// Due насыщается на `Duration::MAX`: такая задача просто никогда не созреет.
    pub fn schedule(&mut self, delay: Duration, task: T) {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        self.pending.push(PendingTask {
            id,
            due: self.clock.saturating_add(delay),
            task,
        });
    }

    /// Продвинуть clock и забрать созревшие задачи
    ///
    /// Порядок: по времени срабатывания, при равенстве: по порядку планирования.
    pub fn advance(&mut self, delta: Duration) -> Vec<T> {
        self.clock = self.clock.saturating_add(delta);

        let clock = self.clock;
        let (mut due, rest): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|pending| pending.due <= clock);
        self.pending = rest;

        due.sort_by_key(|pending| (pending.due, pending.id));
        due.into_iter().map(|pending| pending.task).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: f32) -> Duration {
        Duration::from_secs_f32(value)
    }

    #[test]
    fn test_task_not_fired_early() {
        let mut tasks = DeferredTasks::new();
        tasks.schedule(secs(1.5), "reset");

        assert!(tasks.advance(secs(0.5)).is_empty());
        assert!(tasks.advance(secs(0.5)).is_empty());
        assert_eq!(tasks.len(), 1);

        assert_eq!(tasks.advance(secs(0.5)), vec!["reset"]);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_task_fires_once() {
        let mut tasks = DeferredTasks::new();
        tasks.schedule(secs(0.25), 7);

        assert_eq!(tasks.advance(secs(1.0)), vec![7]);
        assert!(tasks.advance(secs(1.0)).is_empty());
    }

    #[test]
    fn test_tasks_fire_in_due_order() {
        let mut tasks = DeferredTasks::new();
        tasks.schedule(secs(2.0), "late");
        tasks.schedule(secs(1.0), "early");
        tasks.schedule(secs(1.0), "early_second");

        // Один большой шаг: все созрели, порядок по due, затем по id
        assert_eq!(tasks.advance(secs(3.0)), vec!["early", "early_second", "late"]);
    }

    #[test]
    fn test_delay_is_relative_to_current_clock() {
        let mut tasks = DeferredTasks::new();
        tasks.advance(secs(10.0));
        tasks.schedule(secs(1.0), ());

        assert!(tasks.advance(secs(0.5)).is_empty());
        assert_eq!(tasks.advance(secs(0.5)).len(), 1);
    }

    #[test]
    fn test_huge_delay_saturates_instead_of_overflowing() {
        let mut tasks = DeferredTasks::new();
        tasks.advance(secs(1.0));
        tasks.schedule(Duration::MAX, "never");

        assert!(tasks.advance(secs(1000.0)).is_empty());
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut tasks = DeferredTasks::new();
        tasks.schedule(Duration::ZERO, "now");

        assert_eq!(tasks.advance(Duration::ZERO), vec!["now"]);
    }
}
