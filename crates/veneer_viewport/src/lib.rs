//! Veneer Viewport Observer
//!
//! Derives a discrete breakpoint classification and capability/preference
//! flags from live viewport and media state, and lets any number of
//! consumers read it or be notified when it changes.
//!
//! # Overview
//!
//! - [`Breakpoint`]: the ordered size classes `sm < md < lg < xl < 2xl`
//! - [`MediaState`]: the raw host measurements (width, pointer, preferences)
//! - [`Classification`]: breakpoint plus derived booleans, replaced wholesale
//!   on every change
//! - [`ViewportObserver`]: the service holding the current classification,
//!   fed by the host through [`ViewportObserver::update`] or a [`MediaSource`]
//! - [`Responsive`]: per-breakpoint values resolved against a classification
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//! use veneer_viewport::{Breakpoint, MediaState, Responsive, ViewportObserver};
//!
//! let observer = ViewportObserver::default();
//! assert_eq!(observer.current().breakpoint, Breakpoint::Sm);
//!
//! let changes = Arc::new(AtomicUsize::new(0));
//! let counter = changes.clone();
//! let subscription = observer.subscribe(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! observer.update(MediaState::desktop(1100.0));
//! assert_eq!(observer.current().breakpoint, Breakpoint::Lg);
//!
//! let columns = Responsive::new().sm(1).lg(3);
//! assert_eq!(observer.derive(&columns), Ok(&3));
//!
//! subscription.unsubscribe();
//! observer.update(MediaState::desktop(1600.0));
//! assert_eq!(changes.load(Ordering::SeqCst), 1);
//! ```

mod breakpoint;
mod classification;
mod error;
mod media;
mod observer;
mod responsive;

#[cfg(feature = "system-scheme")]
mod platform;

pub use breakpoint::{Breakpoint, DesignFrame, DesignFrames, ViewportThresholds};
pub use classification::Classification;
pub use error::ViewportError;
pub use media::{ColorScheme, MediaPredicates, MediaState, PointerKind};
pub use observer::{
    ManualMedia, MediaSink, MediaSource, Subscription, SubscriberId, ViewportCallback,
    ViewportObserver,
};
pub use responsive::Responsive;

#[cfg(feature = "system-scheme")]
pub use platform::detect_system_color_scheme;
