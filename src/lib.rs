//! # slirc-view
//!
//! The presentation core of an IRC client: everything between the text a
//! backend produces and the widgets that draw it, with no widgets attached.
//!
//! ## Features
//!
//! - mIRC control-code scanning into styled runs, with a configurable
//!   16-color palette and a UTF-8 then Latin-1 decoding fallback
//! - Channel role badges (owner, admin, op, half-op, voice) driven by the
//!   network's `PREFIX` token
//! - Per-conversation scrollback, member list, topic and input draft
//! - A single viewport that binds one conversation at a time and keeps
//!   drafts intact across switches
//! - Tab completion of nicknames with cycling
//! - Optional Tokio channel for handing backend events to the UI context
//!
//! The embedding frontend implements [`RenderSink`] and receives only what
//! it needs to redraw.

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Compiling formatted text
//!
//! ```rust
//! use slirc_view::format;
//!
//! let runs = format::compile(b"plain \x02bold\x02 \x0304red");
//! assert_eq!(runs.len(), 4);
//! assert!(runs[1].style().bold);
//! assert_eq!(runs[3].style().fg, Some(4));
//!
//! assert_eq!(format::strip_formatting(b"\x0312,4blue\x0f"), "blue");
//! ```
//!
//! ### Driving a session
//!
//! ```rust
//! use slirc_view::{ConversationId, ConversationKind, NullSink, SessionController};
//!
//! let mut session = SessionController::with_defaults(NullSink);
//! let id = ConversationId(1);
//!
//! session.open(id, ConversationKind::Channel, "#rust", "libera");
//! session.on_activate(id);
//! session.on_roster_insert(id, "ferris", Some('+'));
//!
//! let done = session.on_completion_request(id, "fe", 2).unwrap();
//! assert_eq!(done.line, "ferris: ");
//! ```

pub mod casemap;
pub mod completion;
pub mod config;
#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
pub mod dispatch;
pub mod error;
pub mod event;
pub mod format;
pub mod roster;
pub mod session;
pub mod sink;
pub mod store;
pub mod tree;
pub mod viewport;

pub use self::casemap::{irc_eq, irc_starts_with, irc_to_lower};
pub use self::completion::{Completed, CompletionEngine, CompletionState};
pub use self::config::{ViewConfig, ViewConfigBuilder};
#[cfg(feature = "tokio")]
pub use self::dispatch::{channel, EventReceiver, EventSender};
pub use self::error::{ConfigError, DispatchError, ViewError};
pub use self::event::Event;
pub use self::format::{FormattedStringExt, Palette, Rgb, Scanner, StyledRun};
pub use self::roster::{badge_color, classify, Participant, PrefixMap, Roster, Tier};
pub use self::session::SessionController;
pub use self::sink::{NullSink, RenderSink};
pub use self::store::{ConversationId, ConversationKind, ConversationStore, Document};
pub use self::tree::NetworkTree;
pub use self::viewport::{Activation, Viewport};
