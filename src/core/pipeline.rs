//! Scheduling pipeline: a dedicated coordinator thread that owns the
//! `TaskAssigner` and is reached only through rendezvous channels.
//!
//! # Protocol
//!
//! - **roster**: delivers a developer roster; each roster replaces the
//!   assigner and therefore starts a fresh ledger.
//! - **task**: delivers one task for placement. Every received task is
//!   answered with exactly one message on the result channel.
//! - **result**: the assignments produced for the tasks processed in
//!   response to the last task message (possibly empty).
//! - **stop**: terminates the coordinator loop.
//!
//! Tasks that arrive before any roster are buffered and answered with an empty
//! result; they are placed, in arrival order, ahead of the next task received
//! once a roster exists.
//!
//! All channels are zero-capacity, so a send blocks until the other side
//! receives. Callers keep a single task in flight: send a task, then receive its
//! result before sending the next one.

use std::collections::VecDeque;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, Receiver, RecvTimeoutError, Sender};
use tracing::{debug, info, warn};

use crate::core::{Assignment, Developer, PlannerError, Task, TaskAssigner};

/// Handle to a running scheduling coordinator.
pub struct SchedulingPipeline {
    roster_tx: Sender<Vec<Developer>>,
    task_tx: Sender<Task>,
    result_rx: Receiver<Vec<Assignment>>,
    stop_tx: Sender<()>,
    /// Disconnects when the coordinator thread exits.
    exited_rx: Receiver<()>,
    handle: Option<JoinHandle<()>>,
    result_timeout: Option<Duration>,
}

impl SchedulingPipeline {
    /// Spawn the coordinator thread.
    ///
    /// `result_timeout` bounds how long [`Self::receive_assignments`] waits;
    /// `None` waits indefinitely.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Runtime` if the thread cannot be spawned.
    pub fn start(max_hours: f64, result_timeout: Option<Duration>) -> Result<Self, PlannerError> {
        let (roster_tx, roster_rx) = bounded::<Vec<Developer>>(0);
        let (task_tx, task_rx) = bounded::<Task>(0);
        let (result_tx, result_rx) = bounded::<Vec<Assignment>>(0);
        let (stop_tx, stop_rx) = bounded::<()>(0);
        let (exited_tx, exited_rx) = bounded::<()>(0);

        let coordinator = Coordinator {
            roster_rx,
            task_rx,
            result_tx,
            stop_rx,
            state: SchedulerState {
                max_hours,
                assigner: None,
                backlog: VecDeque::new(),
            },
        };

        let handle = thread::Builder::new()
            .name("planner-coordinator".into())
            .spawn(move || {
                let _exited = exited_tx;
                coordinator.run();
            })
            .map_err(|e| PlannerError::Runtime(format!("failed to spawn coordinator: {e}")))?;

        Ok(Self {
            roster_tx,
            task_tx,
            result_rx,
            stop_tx,
            exited_rx,
            handle: Some(handle),
            result_timeout,
        })
    }

    /// Deliver a roster, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PipelineClosed` if the coordinator has exited.
    pub fn send_roster(&self, roster: Vec<Developer>) -> Result<(), PlannerError> {
        self.roster_tx
            .send(roster)
            .map_err(|_| PlannerError::PipelineClosed)
    }

    /// Deliver one task for placement.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidTask` for a task without storage identity
    /// and `PlannerError::PipelineClosed` if the coordinator has exited.
    pub fn send_task(&self, task: Task) -> Result<(), PlannerError> {
        if !task.has_identity() {
            return Err(PlannerError::InvalidTask(format!(
                "task {} has no storage identity",
                task.key()
            )));
        }
        self.task_tx.send(task).map_err(|_| PlannerError::PipelineClosed)
    }

    /// Receive the result of the task sent last.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PipelineTimeout` when a result timeout is set and
    /// expires, and `PlannerError::PipelineClosed` if the coordinator has exited.
    pub fn receive_assignments(&self) -> Result<Vec<Assignment>, PlannerError> {
        match self.result_timeout {
            None => self.result_rx.recv().map_err(|_| PlannerError::PipelineClosed),
            Some(timeout) => self.result_rx.recv_timeout(timeout).map_err(|e| match e {
                RecvTimeoutError::Timeout => PlannerError::PipelineTimeout(timeout),
                RecvTimeoutError::Disconnected => PlannerError::PipelineClosed,
            }),
        }
    }

    /// Send one task and wait for its assignments.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`Self::send_task`] and
    /// [`Self::receive_assignments`].
    pub fn schedule(&self, task: Task) -> Result<Vec<Assignment>, PlannerError> {
        self.send_task(task)?;
        self.receive_assignments()
    }

    /// Signal stop and give the coordinator `grace` to exit.
    ///
    /// This is a best-effort drain: a coordinator still busy after `grace` is
    /// detached and exits on its own once its channels disconnect.
    pub fn shutdown(mut self, grace: Duration) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        if self.stop_tx.send_timeout((), grace).is_err() {
            debug!("coordinator did not take the stop signal");
        }

        match self.exited_rx.recv_timeout(grace) {
            Err(RecvTimeoutError::Disconnected) => {
                if handle.join().is_err() {
                    warn!("coordinator thread panicked");
                } else {
                    debug!("coordinator joined");
                }
            }
            Ok(()) | Err(RecvTimeoutError::Timeout) => {
                warn!(
                    grace_ms = grace.as_millis(),
                    "coordinator did not exit within grace period - detaching"
                );
            }
        }
    }
}

impl Drop for SchedulingPipeline {
    fn drop(&mut self) {
        if self.handle.take().is_some() {
            // Dropping the senders disconnects the coordinator's channels;
            // it exits on its next select without being joined here.
            let _ = self.stop_tx.try_send(());
            debug!("pipeline dropped without explicit shutdown - coordinator detached");
        }
    }
}

/// Coordinator side of the channels plus the state only it may touch.
struct Coordinator {
    roster_rx: Receiver<Vec<Developer>>,
    task_rx: Receiver<Task>,
    result_tx: Sender<Vec<Assignment>>,
    stop_rx: Receiver<()>,
    state: SchedulerState,
}

/// Mutable scheduling state owned by the coordinator thread.
struct SchedulerState {
    max_hours: f64,
    assigner: Option<TaskAssigner>,
    backlog: VecDeque<Task>,
}

impl Coordinator {
    fn run(mut self) {
        debug!("coordinator started");
        loop {
            select! {
                recv(self.task_rx) -> msg => {
                    let Ok(task) = msg else {
                        debug!("task channel closed");
                        break;
                    };
                    let assignments = self.state.handle_task(task);
                    debug!(count = assignments.len(), "sending assignments");
                    if self.result_tx.send(assignments).is_err() {
                        debug!("result channel closed");
                        break;
                    }
                }
                recv(self.roster_rx) -> msg => {
                    let Ok(roster) = msg else {
                        debug!("roster channel closed");
                        break;
                    };
                    info!(developers = roster.len(), "received roster");
                    self.state.install_roster(roster);
                }
                recv(self.stop_rx) -> _ => {
                    debug!("stop received");
                    break;
                }
            }
        }
        if !self.state.backlog.is_empty() {
            warn!(pending = self.state.backlog.len(), "coordinator exiting with buffered tasks");
        }
        debug!("coordinator exiting");
    }
}

impl SchedulerState {
    fn install_roster(&mut self, roster: Vec<Developer>) {
        self.assigner = Some(TaskAssigner::new(roster, self.max_hours));
    }

    fn handle_task(&mut self, task: Task) -> Vec<Assignment> {
        if !task.has_identity() {
            warn!(task = %task.key(), "ignoring task without storage identity");
            return Vec::new();
        }
        debug!(task_id = task.id, task = %task.key(), "received task");

        let Some(assigner) = self.assigner.as_mut() else {
            debug!(task_id = task.id, "no roster yet, buffering task");
            self.backlog.push_back(task);
            return Vec::new();
        };

        let mut assignments = Vec::with_capacity(self.backlog.len() + 1);
        for buffered in self.backlog.drain(..).chain(std::iter::once(task)) {
            if let Some(assignment) = assigner.assign_task(&buffered) {
                assignments.push(assignment);
            }
        }
        assignments
    }
}
