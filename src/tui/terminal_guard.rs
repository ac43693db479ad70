//! Terminal ownership for one form session.
//!
//! [`TerminalGuard`] switches to raw mode and the alternate screen with the
//! cursor hidden, and gives the terminal back on [`Drop`]. While the guard is
//! alive a panic hook puts the screen back before the panic message prints;
//! on drop the hook that was installed before the session is reinstated.

use std::io::{self, Write};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, queue};

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Set while the form owns the screen. The panic hook and `Drop` race to
/// restore; whoever clears this first does the work.
static FORM_SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Holds the terminal for the lifetime of the form.
pub struct TerminalGuard {
    previous_hook: Arc<PanicHook>,
}

impl TerminalGuard {
    /// Take over the terminal.
    ///
    /// # Errors
    /// Returns I/O errors if raw mode or the alternate screen cannot be
    /// entered. Raw mode is already undone when this returns an error.
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        FORM_SCREEN_ACTIVE.store(true, Ordering::SeqCst);

        let mut stdout = io::stdout();
        if let Err(err) = enter_form_screen(&mut stdout) {
            leave_form_screen_best_effort();
            return Err(err);
        }

        Ok(Self {
            previous_hook: install_restore_hook(),
        })
    }

    /// Terminal dimensions (columns, rows), or (80, 24) if unknown.
    #[must_use]
    pub fn terminal_size() -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        leave_form_screen_best_effort();
        // set_hook panics on a panicking thread.
        if !std::thread::panicking() {
            reinstate_hook(&self.previous_hook);
        }
    }
}

fn enter_form_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(out, EnterAlternateScreen, cursor::Hide)?;
    out.flush()
}

fn leave_form_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(out, LeaveAlternateScreen, cursor::Show)?;
    out.flush()
}

/// Restore the screen once. Later calls are no-ops.
fn leave_form_screen_best_effort() {
    if FORM_SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        let _ = leave_form_screen(&mut io::stdout());
        let _ = terminal::disable_raw_mode();
    }
}

/// Chain a screen-restoring hook in front of the current one and hand back
/// the current one so it can be put back later.
fn install_restore_hook() -> Arc<PanicHook> {
    let previous: Arc<PanicHook> = Arc::new(panic::take_hook());
    let chained = Arc::clone(&previous);
    panic::set_hook(Box::new(move |info| {
        leave_form_screen_best_effort();
        chained(info);
    }));
    previous
}

fn reinstate_hook(previous: &Arc<PanicHook>) {
    let previous = Arc::clone(previous);
    panic::set_hook(Box::new(move |info| previous(info)));
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    use super::*;

    // The screen flag and the panic hook are process globals.
    static GLOBALS: Mutex<()> = Mutex::new(());
    static HOOK_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn explode(message: &str) {
        panic!("{message}");
    }

    #[test]
    fn screen_sequences_enter_and_leave() {
        let mut out = Vec::new();
        enter_form_screen(&mut out).unwrap();
        let entered = String::from_utf8(out).unwrap();
        assert!(entered.contains("\x1b[?1049h"));
        assert!(entered.contains("\x1b[?25l"));

        let mut out = Vec::new();
        leave_form_screen(&mut out).unwrap();
        let left = String::from_utf8(out).unwrap();
        assert!(left.contains("\x1b[?1049l"));
        assert!(left.contains("\x1b[?25h"));
    }

    #[test]
    fn restore_runs_once_per_session() {
        let _lock = GLOBALS.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        FORM_SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        leave_form_screen_best_effort();
        assert!(!FORM_SCREEN_ACTIVE.load(Ordering::SeqCst));
        leave_form_screen_best_effort();
        assert!(!FORM_SCREEN_ACTIVE.load(Ordering::SeqCst));
    }

    #[test]
    fn panic_hook_restores_screen_then_hands_back_previous_hook() {
        let _lock = GLOBALS.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        panic::set_hook(Box::new(|_| {
            HOOK_CALLS.fetch_add(1, Ordering::SeqCst);
        }));
        let before = HOOK_CALLS.load(Ordering::SeqCst);

        // Session active: a panic restores the screen and still reaches the
        // hook that was there first.
        let previous = install_restore_hook();
        FORM_SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        assert!(panic::catch_unwind(|| explode("during session")).is_err());
        assert!(!FORM_SCREEN_ACTIVE.load(Ordering::SeqCst));
        assert_eq!(HOOK_CALLS.load(Ordering::SeqCst), before + 1);

        // Session over: the original hook is back and the screen is left alone.
        reinstate_hook(&previous);
        FORM_SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        assert!(panic::catch_unwind(|| explode("after session")).is_err());
        assert!(FORM_SCREEN_ACTIVE.load(Ordering::SeqCst));
        assert_eq!(HOOK_CALLS.load(Ordering::SeqCst), before + 2);

        FORM_SCREEN_ACTIVE.store(false, Ordering::SeqCst);
        drop(panic::take_hook());
    }

    #[test]
    fn terminal_size_fallback() {
        let (cols, rows) = TerminalGuard::terminal_size();
        assert!(cols > 0);
        assert!(rows > 0);
    }
}
