//! Runtime abstraction layer for async operations
//!
//! The controller spawns fire-and-forget work (preview fetches) through an
//! [`AsyncSpawner`] so it is not tied to one executor, and keeps the returned
//! [`AsyncHandle`] so superseded work can be cancelled.

use crate::prelude::{Arc, Future, Pin};

/// A trait for spawning async tasks (object-safe version)
pub trait AsyncSpawner: Send + Sync + 'static {
    /// Spawn a future and return a handle to it
    fn spawn_boxed(
        &self,
        future: Pin<Box<dyn Future<Output = ()> + Send + 'static>>,
    ) -> Box<dyn AsyncHandle>;
}

/// Handle to a spawned async task
pub trait AsyncHandle: Send + Sync {
    /// Check if the task is finished
    fn is_finished(&self) -> bool;

    /// Cancel the task
    fn cancel(&self);
}

/// Spawn a future on `spawner` with type safety
pub fn spawn_on<F>(spawner: &dyn AsyncSpawner, future: F) -> Box<dyn AsyncHandle>
where
    F: Future<Output = ()> + Send + 'static,
{
    log::trace!("spawning async task");
    spawner.spawn_boxed(Box::pin(future))
}

/// Default spawner implementations
pub mod spawners {
    use super::*;

    #[cfg(feature = "tokio-runtime")]
    pub mod tokio_impl {
        use super::*;
        use ::tokio::{runtime::Handle, task::JoinHandle};

        /// Tokio-based async spawner bound to one runtime.
        ///
        /// Spawning goes through the captured [`Handle`], so it works from
        /// threads outside the runtime as well.
        #[derive(Debug, Clone)]
        pub struct TokioSpawner {
            handle: Handle,
        }

        impl TokioSpawner {
            pub fn new(handle: Handle) -> Self {
                Self { handle }
            }

            /// Bind to the runtime of the calling context, if there is one
            pub fn current() -> Option<Self> {
                Handle::try_current().ok().map(Self::new)
            }
        }

        impl AsyncSpawner for TokioSpawner {
            fn spawn_boxed(
                &self,
                future: Pin<Box<dyn Future<Output = ()> + Send + 'static>>,
            ) -> Box<dyn AsyncHandle> {
                let handle = self.handle.spawn(future);
                Box::new(TokioHandle(handle))
            }
        }

        struct TokioHandle(JoinHandle<()>);

        impl AsyncHandle for TokioHandle {
            fn is_finished(&self) -> bool {
                self.0.is_finished()
            }

            fn cancel(&self) {
                self.0.abort();
            }
        }
    }
}

/// The spawner used when none is injected. Requires a runtime feature and,
/// for tokio, a runtime entered on the calling thread.
pub fn default_spawner() -> Option<Arc<dyn AsyncSpawner>> {
    #[cfg(feature = "tokio-runtime")]
    {
        spawners::tokio_impl::TokioSpawner::current()
            .map(|spawner| Arc::new(spawner) as Arc<dyn AsyncSpawner>)
    }

    #[cfg(not(feature = "tokio-runtime"))]
    {
        None
    }
}
