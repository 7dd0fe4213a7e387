//! View abstraction for rendering props.

#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Rendering seam between the state core and whatever draws the UI.
///
/// [`render`](Self::render) is called with fresh props after every state
/// transition the binding observes. Props may contain callbacks (via
/// [`ActionEmitter`](crate::ActionEmitter)) that translate user interaction
/// back into actions.
///
/// # Example
///
/// ```rust
/// use raincheck::{CheckboxProps, View};
///
/// struct ConsoleView;
///
/// impl View<CheckboxProps> for ConsoleView {
///     fn render(&mut self, props: CheckboxProps) {
///         println!("{} [{}]", props.label, if props.checked { "x" } else { " " });
///     }
/// }
/// ```
pub trait View<Props> {
    /// Render the given props.
    fn render(&mut self, props: Props);
}

#[cfg(any(test, feature = "testing"))]
/// Test view that captures every rendered frame for assertions.
///
/// Only available with the `testing` feature or during tests. Clones share
/// the same capture storage, so keep a clone outside the binding and use
/// [`with_frames`](Self::with_frames) to inspect what was rendered.
pub struct TestView<Props> {
    frames: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestView<Props> {
    fn clone(&self) -> Self {
        Self {
            frames: self.frames.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> View<Props> for TestView<Props> {
    fn render(&mut self, props: Props) {
        self.frames.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Default for TestView<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> TestView<Props> {
    pub fn new() -> Self {
        Self {
            frames: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of frames rendered so far.
    pub fn count(&self) -> usize {
        self.frames.lock().len()
    }

    /// Access the captured frames with a closure.
    ///
    /// Useful both for assertions on rendered props and for invoking a
    /// frame's callbacks to simulate user interaction.
    pub fn with_frames<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let frames = self.frames.lock();
        f(&frames)
    }
}
