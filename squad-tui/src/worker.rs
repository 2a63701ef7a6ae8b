//! Background worker thread — the roster load runs here.
//!
//! Communication with the TUI main thread is via `mpsc` channels, so a slow
//! file system or HTTP source never blocks input handling.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use squad_core::{RosterSource, RosterStore};

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    LoadRoster { source: RosterSource },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    RosterLoaded { roster: RosterStore },
    RosterFailed { error: String },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("squad-worker".into())
        .spawn(move || worker_loop(rx, tx))
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>) {
    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(WorkerCommand::LoadRoster { source }) => {
                let response = load_roster(&source);
                if tx.send(response).is_err() {
                    break;
                }
            }
        }
    }
}

fn load_roster(source: &RosterSource) -> WorkerResponse {
    match RosterStore::load(source) {
        Ok(roster) => WorkerResponse::RosterLoaded { roster },
        Err(e) => WorkerResponse::RosterFailed {
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn loads_roster_and_shuts_down() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("players.json");
        std::fs::write(&path, r#"{"players": []}"#).unwrap();

        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_worker(cmd_rx, resp_tx).unwrap();

        cmd_tx
            .send(WorkerCommand::LoadRoster { source: RosterSource::File(path) })
            .unwrap();
        match resp_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            WorkerResponse::RosterLoaded { roster } => assert!(roster.is_empty()),
            other => panic!("expected RosterLoaded, got {other:?}"),
        }

        cmd_tx.send(WorkerCommand::Shutdown).unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn missing_roster_reports_failure() {
        let response = load_roster(&RosterSource::File(PathBuf::from("/nonexistent.json")));
        assert!(matches!(response, WorkerResponse::RosterFailed { .. }));
    }
}
