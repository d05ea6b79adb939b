//! Single-owner task serializing every state-changing session operation

use tokio::sync::{mpsc, oneshot};

use super::{GameSession, GameStatus};
use crate::error::{SessionError, StoreError};
use crate::persistence::{PersistedRecord, PersistenceGateway, RemoteFetch, RemoteSave};
use crate::progress::GuessResult;
use crate::puzzle::PuzzleCatalog;
use crate::reconcile::{reconcile, ActiveRecord, ConfirmOverride, LocalReason};

const QUEUE_DEPTH: usize = 32;

type Reply<T> = oneshot::Sender<Result<T, SessionError>>;

/// Where a reloaded game came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Local(LocalReason),
    Remote,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReloadReport {
    pub source: RecordSource,
    pub status: GameStatus,
    /// Set when the remote bin couldn't be read and only local state was considered
    pub remote_unavailable: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuessReport {
    pub result: GuessResult,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SaveReport {
    pub record: PersistedRecord,
    pub remote: RemoteSave,
}

enum Command {
    StartNew {
        catalog: PuzzleCatalog,
        reply: Reply<GameStatus>,
    },
    Reload {
        confirm: Option<Box<dyn ConfirmOverride>>,
        reply: Reply<ReloadReport>,
    },
    ResumeLocal {
        reply: Reply<GameStatus>,
    },
    Guess {
        word: String,
        reply: Reply<GuessReport>,
    },
    Save {
        reply: Reply<SaveReport>,
    },
    Status {
        reply: Reply<GameStatus>,
    },
}

/// Cheap, cloneable handle to the session task.
///
/// Commands are processed strictly in the order they were sent; a save that
/// is waiting on the network holds back every later command.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<Command>,
}

impl SessionHandle {
    /// Spawn the session task. `player` keys this player's remote save.
    pub fn spawn(gateway: PersistenceGateway, player: impl Into<String>) -> Self {
        let (tx, rx) = mpsc::channel(QUEUE_DEPTH);
        let actor = SessionActor {
            gateway,
            player: player.into(),
            session: None,
        };
        tokio::spawn(actor.run(rx));
        Self { tx }
    }

    /// Replace any current game with a fresh one on `catalog`
    pub async fn start_new(&self, catalog: PuzzleCatalog) -> Result<GameStatus, SessionError> {
        self.request(|reply| Command::StartNew { catalog, reply }).await
    }

    /// Restore the saved game, reconciling the local and remote saves
    pub async fn reload(
        &self,
        confirm: Option<Box<dyn ConfirmOverride>>,
    ) -> Result<ReloadReport, SessionError> {
        self.request(|reply| Command::Reload { confirm, reply }).await
    }

    /// Continue this device's saved game without consulting the remote bin
    pub async fn resume_local(&self) -> Result<GameStatus, SessionError> {
        self.request(|reply| Command::ResumeLocal { reply }).await
    }

    pub async fn guess(&self, word: impl Into<String>) -> Result<GuessReport, SessionError> {
        let word = word.into();
        self.request(|reply| Command::Guess { word, reply }).await
    }

    /// Save locally, then to the remote bin
    pub async fn save(&self) -> Result<SaveReport, SessionError> {
        self.request(|reply| Command::Save { reply }).await
    }

    pub async fn status(&self) -> Result<GameStatus, SessionError> {
        self.request(|reply| Command::Status { reply }).await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Reply<T>) -> Command,
    ) -> Result<T, SessionError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| SessionError::Closed)?;
        rx.await.map_err(|_| SessionError::Closed)?
    }
}

struct SessionActor {
    gateway: PersistenceGateway,
    player: String,
    session: Option<GameSession>,
}

impl SessionActor {
    async fn run(mut self, mut rx: mpsc::Receiver<Command>) {
        while let Some(command) = rx.recv().await {
            match command {
                Command::StartNew { catalog, reply } => {
                    let _ = reply.send(self.start_new(catalog));
                }
                Command::Reload { confirm, reply } => {
                    let _ = reply.send(self.reload(confirm.as_deref()).await);
                }
                Command::ResumeLocal { reply } => {
                    let _ = reply.send(self.resume_local());
                }
                Command::Guess { word, reply } => {
                    let _ = reply.send(self.guess(&word));
                }
                Command::Save { reply } => {
                    let _ = reply.send(self.save().await);
                }
                Command::Status { reply } => {
                    let _ = reply.send(self.current().map(GameSession::status));
                }
            }
        }
        tracing::debug!("Session task finished");
    }

    fn current(&self) -> Result<&GameSession, SessionError> {
        self.session.as_ref().ok_or(SessionError::NoActiveGame)
    }

    fn start_new(&mut self, catalog: PuzzleCatalog) -> Result<GameStatus, SessionError> {
        let previous = self.load_local()?;
        let session = GameSession::following(catalog, previous.as_ref());
        self.gateway.save_local(&session.snapshot(now_millis()))?;
        let status = session.status();
        self.session = Some(session);
        Ok(status)
    }

    async fn reload(
        &mut self,
        confirm: Option<&dyn ConfirmOverride>,
    ) -> Result<ReloadReport, SessionError> {
        let local = self.load_local()?;

        if !self.remote_enabled() {
            let record = local.ok_or(SessionError::NoSavedState)?;
            return self.activate(record, RecordSource::Local(LocalReason::RemoteDisabled), None);
        }

        let fetched = self.gateway.fetch_remote().await;
        let remote_unavailable = match &fetched {
            RemoteFetch::Unavailable(reason) => Some(reason.clone()),
            _ => None,
        };
        let remote = fetched
            .record_for(&self.player)
            .filter(|record| match record.restore() {
                Ok(_) => true,
                Err(e) => {
                    tracing::warn!("Ignoring invalid remote save for {}: {}", self.player, e);
                    false
                }
            })
            .cloned();

        match reconcile(local, remote, now_millis(), confirm) {
            ActiveRecord::NoSavedState => Err(SessionError::NoSavedState),
            ActiveRecord::Local(record, reason) => {
                self.activate(record, RecordSource::Local(reason), remote_unavailable)
            }
            ActiveRecord::Remote(record) => {
                self.activate(record, RecordSource::Remote, remote_unavailable)
            }
        }
    }

    /// Make `record` the current game. A remote record also replaces this
    /// device's save, once it has restored cleanly.
    fn activate(
        &mut self,
        record: PersistedRecord,
        source: RecordSource,
        remote_unavailable: Option<String>,
    ) -> Result<ReloadReport, SessionError> {
        let session = GameSession::from_record(&record)?;
        if source == RecordSource::Remote {
            self.gateway.save_local(&record)?;
        }

        let status = session.status();
        self.session = Some(session);
        tracing::info!("Reloaded game from {:?} (score {})", source, status.score);

        Ok(ReloadReport {
            source,
            status,
            remote_unavailable,
        })
    }

    /// Remote saves need both a configured bin and a player name
    fn remote_enabled(&self) -> bool {
        self.gateway.has_remote() && !self.player.is_empty()
    }

    fn resume_local(&mut self) -> Result<GameStatus, SessionError> {
        let record = self.load_local()?.ok_or(SessionError::NoSavedState)?;
        let session = GameSession::from_record(&record)?;
        let status = session.status();
        self.session = Some(session);
        Ok(status)
    }

    /// Local save, treating an unreadable one as absent
    fn load_local(&self) -> Result<Option<PersistedRecord>, SessionError> {
        match self.gateway.load_local() {
            Ok(record) => Ok(record),
            Err(StoreError::Serde(e)) => {
                tracing::warn!("Ignoring unreadable local save: {}", e);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn guess(&mut self, word: &str) -> Result<GuessReport, SessionError> {
        let session = self.session.as_mut().ok_or(SessionError::NoActiveGame)?;
        let result = session.guess(word);

        if result.outcome.is_hit() {
            self.gateway.save_local(&session.snapshot(now_millis()))?;
        }

        Ok(GuessReport {
            result,
            status: session.status(),
        })
    }

    async fn save(&mut self) -> Result<SaveReport, SessionError> {
        let record = self.current()?.snapshot(now_millis());
        self.gateway.save_local(&record)?;

        let remote = if self.remote_enabled() {
            self.gateway.save_remote(&self.player, &record).await?
        } else {
            if self.gateway.has_remote() {
                tracing::warn!("No player name set, skipping remote save");
            }
            RemoteSave::Disabled
        };

        Ok(SaveReport { record, remote })
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
