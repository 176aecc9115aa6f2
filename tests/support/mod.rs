// tests/support/mod.rs
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, TimeZone, Utc};
use http::Method;

use promptbase_core::application::commands::content::{ContentSettings, CreateContentCommand};
use promptbase_core::application::commands::users::RegisterUserCommand;
use promptbase_core::application::dto::ContentItemDto;
use promptbase_core::application::ports::time::Clock;
use promptbase_core::application::services::ApplicationServices;
use promptbase_core::domain::access::{AccessRequest, Actor};
use promptbase_core::domain::content::{ContentKind, ContentReadRepository};
use promptbase_core::domain::user::UserId;
use promptbase_core::infrastructure::repositories::InMemoryStore;

/// Advances one second on every reading so creation order is observable.
pub struct StepClock {
    base: DateTime<Utc>,
    ticks: AtomicI64,
}

impl StepClock {
    pub fn new() -> Self {
        Self {
            base: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for StepClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }
}

pub struct Harness {
    pub store: InMemoryStore,
    pub services: Arc<ApplicationServices>,
    pub root: Actor,
}

impl Harness {
    pub async fn new() -> Self {
        Self::with_settings(ContentSettings::default()).await
    }

    pub async fn with_settings(settings: ContentSettings) -> Self {
        let store = InMemoryStore::new();
        let read_repo: Arc<dyn ContentReadRepository> = Arc::new(store.clone());
        Self::with_read_repo(store, read_repo, settings).await
    }

    /// Lets a test interpose on the read side, e.g. to simulate stale probes.
    pub async fn with_read_repo(
        store: InMemoryStore,
        read_repo: Arc<dyn ContentReadRepository>,
        settings: ContentSettings,
    ) -> Self {
        let services = services_over(store.clone(), read_repo, settings);

        // The first account registered is always staff.
        let root = register(&services, anonymous(Method::POST), "root", false).await;
        Self {
            store,
            services,
            root,
        }
    }

    pub async fn member(&self, username: &str) -> Actor {
        register(&self.services, anonymous(Method::POST), username, false).await
    }

    pub async fn staff(&self, username: &str) -> Actor {
        register(
            &self.services,
            as_actor(Method::POST, self.root),
            username,
            true,
        )
        .await
    }

    pub async fn create(&self, actor: Actor, kind: ContentKind, title: &str) -> ContentItemDto {
        let command = CreateContentCommand::builder(kind)
            .title(title)
            .body("Body text")
            .build()
            .unwrap();
        self.services
            .content_commands
            .create_content(&as_actor(Method::POST, actor), command)
            .await
            .unwrap()
    }
}

/// Services over an existing store, reading content through `read_repo`.
pub fn services_over(
    store: InMemoryStore,
    read_repo: Arc<dyn ContentReadRepository>,
    settings: ContentSettings,
) -> Arc<ApplicationServices> {
    let shared = Arc::new(store);
    Arc::new(ApplicationServices::new(
        shared.clone(),
        shared.clone(),
        read_repo,
        shared,
        Arc::new(StepClock::new()),
        settings,
    ))
}

async fn register(
    services: &ApplicationServices,
    request: AccessRequest,
    username: &str,
    is_staff: bool,
) -> Actor {
    let user = services
        .user_commands
        .register(
            &request,
            RegisterUserCommand {
                username: username.into(),
                is_staff,
            },
        )
        .await
        .unwrap();
    Actor::new(UserId::from_uuid(user.id), user.is_staff)
}

pub fn as_actor(method: Method, actor: Actor) -> AccessRequest {
    AccessRequest::authenticated(method, actor)
}

pub fn anonymous(method: Method) -> AccessRequest {
    AccessRequest::anonymous(method)
}
