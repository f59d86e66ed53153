//! Shared application state: one service per surface.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::board::adapters::postgrest::PostgrestBoardRepository;
use crate::board::ports::BoardRepository;
use crate::board::services::BoardService;
use crate::config::AppConfig;
use crate::files::adapters::DropboxFileStore;
use crate::files::ports::FileStore;
use crate::files::services::FileManagerService;
use crate::pipeline::adapters::postgrest::PostgrestPipelineRepository;
use crate::pipeline::ports::PipelineRepository;
use crate::pipeline::services::PipelineService;
use crate::postgrest::PostgrestClient;
use crate::revenue::adapters::StripeBalanceFeed;
use crate::revenue::ports::BalanceFeed;
use crate::revenue::services::RevenueService;
use crate::search::services::SearchService;
use crate::workflow::adapters::PostgrestWorkflowRepository;
use crate::workflow::ports::WorkflowRepository;
use crate::workflow::services::WorkflowService;

/// Type-erased clock shared by the services.
pub type DynClock = dyn Clock + Send + Sync;

/// Type-erased board repository.
pub type DynBoardRepository = dyn BoardRepository;

/// Type-erased pipeline repository.
pub type DynPipelineRepository = dyn PipelineRepository;

/// Type-erased file store.
pub type DynFileStore = dyn FileStore;

/// Type-erased balance feed.
pub type DynBalanceFeed = dyn BalanceFeed;

/// Type-erased workflow repository.
pub type DynWorkflowRepository = dyn WorkflowRepository;

/// One service per surface, shared across handlers behind an `Arc`.
pub struct AppState {
    /// Kanban task and comment operations.
    pub board: BoardService<DynBoardRepository, DynClock>,
    /// Guest pipeline operations.
    pub pipeline: PipelineService<DynPipelineRepository, DynClock>,
    /// Root-confined file operations.
    pub files: FileManagerService<DynFileStore, DynClock>,
    /// Windowed revenue aggregation.
    pub revenue: RevenueService<DynBalanceFeed, DynClock>,
    /// Cross-surface search.
    pub search: SearchService<DynBoardRepository, DynPipelineRepository>,
    /// Subway-map assembly.
    pub workflow: WorkflowService<DynWorkflowRepository>,
}

impl AppState {
    /// Wires the production adapters from configuration: one shared HTTP
    /// client, the PostgREST repositories, the Dropbox store, and the
    /// Stripe feed.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Arc<Self> {
        let http = reqwest::Client::new();
        let postgrest = PostgrestClient::new(http.clone(), &config.postgrest);

        let board: Arc<DynBoardRepository> =
            Arc::new(PostgrestBoardRepository::new(postgrest.clone()));
        let pipeline: Arc<DynPipelineRepository> =
            Arc::new(PostgrestPipelineRepository::new(postgrest.clone()));
        let store: Arc<DynFileStore> =
            Arc::new(DropboxFileStore::new(http.clone(), &config.dropbox));
        let feed: Arc<DynBalanceFeed> =
            Arc::new(StripeBalanceFeed::new(http, config.stripe_keys.clone()));
        let workflow: Arc<DynWorkflowRepository> =
            Arc::new(PostgrestWorkflowRepository::new(postgrest));
        let clock: Arc<DynClock> = Arc::new(DefaultClock);

        Arc::new(Self::assemble(
            board,
            pipeline,
            store,
            feed,
            workflow,
            clock,
            &config.dropbox.root_path,
        ))
    }

    /// Wires the services over explicit port implementations; tests hand
    /// in the in-memory adapters here.
    #[must_use]
    pub fn assemble(
        board: Arc<DynBoardRepository>,
        pipeline: Arc<DynPipelineRepository>,
        store: Arc<DynFileStore>,
        feed: Arc<DynBalanceFeed>,
        workflow: Arc<DynWorkflowRepository>,
        clock: Arc<DynClock>,
        dropbox_root: &str,
    ) -> Self {
        Self {
            board: BoardService::new(Arc::clone(&board), Arc::clone(&clock)),
            pipeline: PipelineService::new(Arc::clone(&pipeline), Arc::clone(&clock)),
            files: FileManagerService::new(store, Arc::clone(&clock), dropbox_root),
            revenue: RevenueService::new(feed, Arc::clone(&clock)),
            search: SearchService::new(board, pipeline),
            workflow: WorkflowService::new(workflow),
        }
    }
}
