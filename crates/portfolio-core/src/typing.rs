//! Typing animator.
//!
//! A [`Typewriter`] owns the cursor over a fixed list of messages and yields
//! one [`Frame`] per tick: the text to render and how long to wait before the
//! next tick. [`start`] wraps it in an abortable task driven by any sleep
//! function, so the browser (gloo timers) and tests (tokio's paused clock)
//! share the same loop.
//!
//! ## Cycle
//!
//! ```text
//! typing:   "B" → "Bu" → ... → full message   (type delay, pause after last)
//! deleting: full → ... → "B" → ""             (delete delay, advance after last)
//! next message, wrapping
//! ```

use std::future::Future;
use std::time::Duration;

use futures::future::{abortable, AbortHandle};

use crate::config::TypingConfig;
use crate::error::{SiteError, SiteResult};

/// Position of the animator within its message list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypingCursor {
    pub message_index: usize,
    /// Number of characters currently shown, `0..=chars(message)`
    pub char_index: usize,
    pub deleting: bool,
}

/// Output of a single tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

/// Cursor plus messages and timings.
#[derive(Clone, Debug)]
pub struct Typewriter {
    messages: Vec<String>,
    /// Character counts, cached per message
    lengths: Vec<usize>,
    cursor: TypingCursor,
    type_delay: Duration,
    delete_delay: Duration,
    pause: Duration,
    advance_delay: Duration,
}

impl Typewriter {
    /// Build a typewriter positioned before the first character of the first message.
    ///
    /// Fails if there are no messages or any message is empty; an empty message
    /// would never reach its end while typing.
    pub fn new(config: &TypingConfig) -> SiteResult<Self> {
        if config.messages.is_empty() {
            return Err(SiteError::Config("typing needs at least one message".to_string()));
        }
        if config.messages.iter().any(|m| m.is_empty()) {
            return Err(SiteError::Config("typing messages must not be empty".to_string()));
        }

        Ok(Self {
            lengths: config.messages.iter().map(|m| m.chars().count()).collect(),
            messages: config.messages.clone(),
            cursor: TypingCursor::default(),
            type_delay: config.type_delay(),
            delete_delay: config.delete_delay(),
            pause: config.pause(),
            advance_delay: config.advance_delay(),
        })
    }

    pub fn cursor(&self) -> TypingCursor {
        self.cursor
    }

    /// Advance by one character in the current direction.
    pub fn tick(&mut self) -> Frame {
        let len = self.lengths[self.cursor.message_index];

        if !self.cursor.deleting {
            self.cursor.char_index += 1;
            let text = self.prefix(self.cursor.char_index);
            if self.cursor.char_index == len {
                self.cursor.deleting = true;
                Frame { text, delay: self.pause }
            } else {
                Frame { text, delay: self.type_delay }
            }
        } else {
            self.cursor.char_index -= 1;
            let text = self.prefix(self.cursor.char_index);
            if self.cursor.char_index == 0 {
                self.cursor.deleting = false;
                self.cursor.message_index = (self.cursor.message_index + 1) % self.messages.len();
                Frame { text, delay: self.advance_delay }
            } else {
                Frame { text, delay: self.delete_delay }
            }
        }
    }

    fn prefix(&self, chars: usize) -> String {
        self.messages[self.cursor.message_index]
            .chars()
            .take(chars)
            .collect()
    }
}

/// Stops a running typing task.
///
/// Dropping the handle does not stop the task; call [`StopHandle::stop`].
#[derive(Clone, Debug)]
pub struct StopHandle(AbortHandle);

impl StopHandle {
    pub fn stop(&self) {
        self.0.abort();
    }

    pub fn is_stopped(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Create the animation loop for `typewriter`.
///
/// `render` receives every frame's text; `sleep` provides the timer. The
/// returned future runs until the handle is stopped, and the caller decides
/// where to spawn it.
pub fn start<R, S, Fut>(
    mut typewriter: Typewriter,
    mut render: R,
    mut sleep: S,
) -> (impl Future<Output = ()>, StopHandle)
where
    R: FnMut(&str),
    S: FnMut(Duration) -> Fut,
    Fut: Future<Output = ()>,
{
    let (task, handle) = abortable(async move {
        loop {
            let frame = typewriter.tick();
            render(&frame.text);
            sleep(frame.delay).await;
        }
    });

    let task = async move {
        // Err(Aborted) is the normal way out.
        let _ = task.await;
        tracing::debug!("typing animator stopped");
    };

    (task, StopHandle(handle))
}
