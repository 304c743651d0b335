use std::any::Any;
use std::time::Duration;

use diesel::SqliteConnection;
use log::{debug, error};
use maintenance_core::errors::{DatabaseError, Error, Result};
use tokio::sync::{mpsc, oneshot};

use super::DbPool;
use crate::errors::StorageError;

// A write job runs against the writer's dedicated connection. The return
// value is type-erased so one channel can carry every job.
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<Box<dyn Any + Send>> + Send + 'static>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send>>>;
type Envelope = (&'static str, Job, Reply);

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<Envelope>,
    timeout: Duration,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection,
    /// inside an immediate transaction.
    ///
    /// Waiting for the writer is bounded by the handle's timeout. A job whose
    /// caller has timed out is never committed: it is skipped if the writer
    /// has not started it, and rolled back if it is already running.
    pub async fn exec<F, T>(&self, operation: &'static str, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();
        let job: Job = Box::new(move |conn| job(conn).map(|v| Box::new(v) as Box<dyn Any + Send>));

        let round_trip = async {
            self.tx
                .send((operation, job, ret_tx))
                .await
                .map_err(|_| writer_stopped(operation))?;
            ret_rx.await.map_err(|_| writer_stopped(operation))?
        };

        let boxed = tokio::time::timeout(self.timeout, round_trip)
            .await
            .map_err(|_| {
                Error::Database(DatabaseError::Timeout(format!(
                    "{} after {:?}",
                    operation, self.timeout
                )))
            })??;

        boxed.downcast::<T>().map(|v| *v).map_err(|_| {
            Error::Unexpected(format!("{}: writer returned an unexpected type", operation))
        })
    }
}

fn writer_stopped(operation: &str) -> Error {
    Error::Database(DatabaseError::Internal(format!(
        "{}: database writer is not running",
        operation
    )))
}

/// Spawns the single database writer on a blocking thread.
///
/// The writer owns one pooled connection for its whole lifetime and processes
/// jobs serially. It stops when every `WriteHandle` has been dropped. If no
/// connection can be acquired, every queued job is answered with that error.
pub fn spawn_writer(pool: DbPool, timeout: Duration) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<Envelope>(1024);

    tokio::task::spawn_blocking(move || {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                error!("Database writer could not acquire a connection: {}", e);
                let message = e.to_string();
                while let Some((_, _, reply_tx)) = rx.blocking_recv() {
                    let _ = reply_tx.send(Err(Error::Database(DatabaseError::ConnectionFailed(
                        message.clone(),
                    ))));
                }
                return;
            }
        };

        while let Some((operation, job, reply_tx)) = rx.blocking_recv() {
            if reply_tx.is_closed() {
                debug!("Skipping {}: requester is no longer waiting", operation);
                continue;
            }
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    let value = job(c)?;
                    // Checked after the job so time spent waiting on the lock counts.
                    if reply_tx.is_closed() {
                        return Err(StorageError::Abandoned(operation));
                    }
                    Ok(value)
                })
                .map_err(Error::from);
            if let Err(Error::Database(DatabaseError::Timeout(reason))) = &result {
                debug!("{}", reason);
            }
            let _ = reply_tx.send(result);
        }
        debug!("Database writer stopped");
    });

    WriteHandle { tx, timeout }
}
