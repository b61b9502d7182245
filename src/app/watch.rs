//! `folio watch`: re-emit CSS whenever the effective variables change.
//!
//! Stored preferences can be rewritten by other `folio` processes and the
//! host scheme can flip underneath `system` mode, so the loop polls both on a
//! fixed interval and prints from the store's subscription.

use std::time::Duration;

use folio::store::{PreferenceSnapshot, PreferenceStore};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;

use super::commands::CommandContext;

/// Run until Ctrl-C or until the store's publisher goes away.
///
/// Polls do file reads and may spawn desktop-settings processes, so each one
/// runs on the blocking pool with the store moved into it. The loop keeps
/// reacting to Ctrl-C meanwhile; a poll still in flight at shutdown is left
/// to finish on its own.
pub(crate) async fn run_watch(
    ctx: &CommandContext<'_>,
    store: PreferenceStore,
    interval_secs: u64,
) -> Result<(), String> {
    let mut updates = store.subscribe();
    emit_snapshot(ctx, &updates.borrow_and_update())?;

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately.
    ticker.tick().await;

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut idle = Some(store);
    let mut in_flight: Option<JoinHandle<PreferenceStore>> = None;

    loop {
        tokio::select! {
            _ = ticker.tick(), if in_flight.is_none() => {
                if let Some(store) = idle.take() {
                    in_flight = Some(spawn_poll(store));
                }
            }
            joined = join_poll(&mut in_flight), if in_flight.is_some() => {
                in_flight = None;
                let store = joined.map_err(|err| format!("preference poll failed: {err}"))?;
                idle = Some(store);
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                emit_snapshot(ctx, &snapshot)?;
            }
            result = &mut shutdown => {
                if let Err(err) = result {
                    tracing::warn!("failed to listen for Ctrl-C: {err}");
                }
                break;
            }
        }
    }
    Ok(())
}

/// Run one poll on the blocking pool and hand the store back.
fn spawn_poll(mut store: PreferenceStore) -> JoinHandle<PreferenceStore> {
    tokio::task::spawn_blocking(move || {
        poll_once(&mut store);
        store
    })
}

/// Await the in-flight poll; pends forever when there is none.
async fn join_poll(
    in_flight: &mut Option<JoinHandle<PreferenceStore>>,
) -> Result<PreferenceStore, JoinError> {
    match in_flight {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}

/// Re-read storage and the host scheme; the store publishes on change.
fn poll_once(store: &mut PreferenceStore) -> bool {
    let changed = store.reload();
    if changed {
        tracing::debug!("watch picked up a preference change");
    }
    changed
}

fn emit_snapshot(ctx: &CommandContext<'_>, snapshot: &PreferenceSnapshot) -> Result<(), String> {
    if ctx.json {
        let line = serde_json::to_string(snapshot)
            .map_err(|err| format!("failed to encode JSON output: {err}"))?;
        println!("{line}");
        return Ok(());
    }
    ctx.renderer.section(&format!(
        "{} mode, accent {}",
        snapshot.vars.mode(),
        snapshot.vars.accent()
    ));
    print!("{}", snapshot.vars.to_css());
    Ok(())
}
